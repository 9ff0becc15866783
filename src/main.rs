use bookin::cli::CliSurface;
use bookin::config::BookingConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = BookingConfig::from_env()?;

    eprintln!("📅 Bookin v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   CRM webhook: {}", config.crm_webhook_url);
    eprintln!("   Scheduling: {}", config.scheduling_url);
    if config.reduced_motion {
        eprintln!("   Motion: reduced");
    }
    eprintln!("   Answer each step, Enter to continue, 'back' to go back.\n");

    CliSurface::new(config).run().await
}
