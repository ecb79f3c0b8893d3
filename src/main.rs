use std::sync::Arc;

use taskotron::config::{load_config, print_schema};
use taskotron::startup;
use taskotron::utils::logger::init_logging;
use tracing::error;

#[tokio::main]
async fn main() {
    // `--schema` prints the configuration JSON schema and exits.
    if std::env::args().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let config = load_config();
    init_logging(&config.logging);

    if let Err(e) = startup::run(Arc::new(config)).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
