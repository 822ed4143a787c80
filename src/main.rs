use clap::Parser;
use egcb_atis::utils::{logger, validation::Validate};
use egcb_atis::{server, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting egcb-atis service");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    server::start(&config).await
}
