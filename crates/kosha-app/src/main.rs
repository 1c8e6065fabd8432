use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "kosha", about = "Remote-backed dictionary and translation client")]
struct Args {
    /// Settings directory (defaults to the platform config dir)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Backend endpoint URL override
    #[arg(long)]
    url: Option<String>,

    /// Backend API key override
    #[arg(long)]
    key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_dir = args.config_dir.unwrap_or_else(kosha_config::config_dir);
    let mut settings = kosha_config::Settings::load(&config_dir);
    if let Some(url) = args.url {
        settings.sb_url = url;
    }
    if let Some(key) = args.key {
        settings.sb_key = key;
    }

    let theme = settings.theme;
    let styled = atty::is(atty::Stream::Stdout);
    let view = kosha_ui::TerminalView::new(styled, theme);

    let state = Arc::new(AppState::new(settings, config_dir));
    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(view);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    tasks.shutdown().await;
    Ok(())
}
