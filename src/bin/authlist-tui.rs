use anyhow::{Context, Result};
use authlist::models::AppConfig;
use authlist::services::LocalAuthService;
use authlist::tui::App;
use dotenvy::dotenv;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let cfg = AppConfig::from_env()?;

    // Log to a file; stdout belongs to the terminal UI
    let log_dir = cfg
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_name = cfg
        .log_file
        .file_name()
        .context("AUTHLIST_LOG_FILE must name a file")?;
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    info!(verify_login = cfg.verify_login, "Starting authlist");

    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear()?;

    let auth = Arc::new(LocalAuthService::new());
    let mut app = App::new(auth, cfg);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}
