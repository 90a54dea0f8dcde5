use smartflat_app::control_engine::ControlEngine;
use smartflat_app::notification_bus::NotificationBus;
use smartflat_app::shared::SharedControlEngine;
use smartflatd::config::Config;
use smartflatd::driver;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let filter = EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {:?}: {err}", config.logging.filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Notifications
    let bus = NotificationBus::new(64);
    let alerts = tokio::spawn(driver::log_notifications(bus.subscribe()));

    // Engine
    let engine = match config.poll.seed {
        Some(seed) => ControlEngine::with_seed(config.engine.clone(), bus, seed)?,
        None => ControlEngine::from_entropy(config.engine.clone(), bus)?,
    };
    let engine = SharedControlEngine::new(engine);

    tracing::info!(
        interval_secs = config.poll.interval_secs,
        seed = ?config.poll.seed,
        "smartflatd running, type `help` for commands"
    );
    driver::run(&config.poll, engine).await?;

    alerts.abort();
    Ok(())
}
