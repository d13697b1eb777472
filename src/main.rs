//! BBQ Salt Calculator
//!
//! Web server for the rib salt calculator.

use bbq_salt::build_info;
use bbq_salt::config::ServerConfig;
use bbq_salt::web::{self, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bbq_salt=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServerConfig::from_env()?;
    web::serve(config, AppState::default()).await?;

    Ok(())
}
