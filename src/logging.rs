// 📜 Logging - tracing subscriber setup
//
// While the dashboard owns the terminal nothing may be written to stderr, so
// TUI runs log to `log_file` when one is configured and discard output
// otherwise. Headless commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-field lines
    #[default]
    Pretty,
    /// Single line per event
    Compact,
    /// One JSON object per event
    Json,
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub format: LogFormat,
    pub target: LogTarget,
}

impl LogConfig {
    /// Level from a config string, bumped by `-v` flags
    ///
    /// Unknown strings fall back to info.
    pub fn level_from(configured: &str, verbosity: u8) -> Level {
        let base = Level::from_str(configured.trim()).unwrap_or(Level::INFO);
        match verbosity {
            0 => base,
            1 => base.max(Level::DEBUG),
            _ => Level::TRACE,
        }
    }

    /// Target for a run: the TUI never writes to stderr
    pub fn target_for(tui: bool, log_file: Option<PathBuf>) -> LogTarget {
        match (log_file, tui) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Discard,
            (None, false) => LogTarget::Stderr,
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = build_env_filter(config.level);

    let writer = match &config.target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::Discard => BoxMakeWriter::new(std::io::sink),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };
    let ansi = config.target == LogTarget::Stderr;

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer))
            .try_init()?,
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_ansi(ansi).with_writer(writer))
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(ansi).with_writer(writer))
            .try_init()?,
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise our crate at `level`, everything else at warn
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,unimanage={}",
            level.as_str().to_lowercase()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_config_and_verbosity() {
        assert_eq!(LogConfig::level_from("warn", 0), Level::WARN);
        assert_eq!(LogConfig::level_from("warn", 1), Level::DEBUG);
        assert_eq!(LogConfig::level_from("info", 2), Level::TRACE);
        // already more verbose than -v
        assert_eq!(LogConfig::level_from("trace", 1), Level::TRACE);
        assert_eq!(LogConfig::level_from("loud", 0), Level::INFO);
    }

    #[test]
    fn test_tui_never_targets_stderr() {
        assert_eq!(LogConfig::target_for(true, None), LogTarget::Discard);
        assert_eq!(LogConfig::target_for(false, None), LogTarget::Stderr);
        assert_eq!(
            LogConfig::target_for(true, Some(PathBuf::from("ui.log"))),
            LogTarget::File(PathBuf::from("ui.log"))
        );
    }
}
