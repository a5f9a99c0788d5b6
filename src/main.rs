use std::io::stdout;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use lemonstand::infrastructure::{AppConfig, CliArgs, ThreadRandom, load_config};
use lemonstand::presentation::App;
use lemonstand::presentation::theme::{Theme, is_light_background};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let mut loaded = load_config(args.config.as_deref())?;
    loaded.config.merge_with_args(args);

    init_logging(&loaded.config)?;

    info!(version = lemonstand::VERSION, "Starting Lemonstand");
    loaded.report();

    let config = &loaded.config;
    let theme = Theme::new(
        &config.theme.accent_color,
        is_light_background(config.theme.mode),
    );

    Ok(App::new(
        config,
        theme,
        ThreadRandom::boxed(),
        ThreadRandom::boxed(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;
    let mouse = app.mouse_enabled();

    let mut terminal = ratatui::init();
    if mouse {
        execute!(stdout(), EnableMouseCapture)?;
    }

    let result = app.run(&mut terminal).await;

    if mouse && let Err(e) = execute!(stdout(), DisableMouseCapture) {
        warn!(error = %e, "Failed to disable mouse capture");
    }
    ratatui::restore();

    result
}
