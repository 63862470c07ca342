// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use unimanage::cli::{Cli, Command};
use unimanage::config::AppConfig;
use unimanage::logging::{init_logging, LogConfig};
use unimanage::page::Campus;
use unimanage::report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    let tui = cli.runs_tui();
    init_logging(&LogConfig {
        level: LogConfig::level_from(&config.log_level, cli.verbose),
        format: cli.log_format.unwrap_or(config.log_format),
        target: LogConfig::target_for(tui, config.log_file.clone()),
    })?;
    debug!(?config, "configuration loaded");

    let today = chrono::Local::now().date_naive();
    let campus = Campus::seeded(config.intake_defaults(today));

    match cli.command {
        Some(Command::Summary) => print!("{}", report::summary(&campus)),
        Some(Command::List(args)) => {
            print!("{}", report::list(&campus, args.entity, &args.query, args.json)?)
        }
        None | Some(Command::Tui) => run_ui_mode(campus, &config)?,
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(campus: Campus, config: &AppConfig) -> Result<()> {
    tracing::info!(version = unimanage::VERSION, "starting dashboard");

    let mut app = ui::App::new(campus, config.start_section());
    ui::run_ui(&mut app)?;

    tracing::info!("dashboard closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_campus: Campus, _config: &AppConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: unimanage summary | unimanage list <students|faculty|courses>");
    std::process::exit(1);
}
