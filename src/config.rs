// ⚙️ Configuration
//
// Precedence: built-in defaults < unimanage.toml (or $UNIMANAGE_CONFIG) <
// UNIMANAGE__* environment variables.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::intake::IntakeDefaults;
use crate::logging::LogFormat;
use crate::nav::Section;

pub const DEFAULT_CONFIG_FILE: &str = "unimanage.toml";
pub const CONFIG_PATH_ENV: &str = "UNIMANAGE_CONFIG";
pub const ENV_PREFIX: &str = "UNIMANAGE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Capacity for new courses when the form leaves it blank
    pub default_capacity: u32,
    pub default_semester: String,
    pub default_experience: String,
    pub default_gpa: String,

    /// "error" .. "trace"; RUST_LOG still wins
    pub log_level: String,
    pub log_format: LogFormat,
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Path of the page shown at startup
    pub start_section: String,
}

impl AppConfig {
    /// Load from the default locations
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Load with `path` as the optional config file
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("default_capacity", 50_i64)?
            .set_default("default_semester", "Fall 2024")?
            .set_default("default_experience", "0 years")?
            .set_default("default_gpa", "0.0")?
            .set_default("log_level", "info")?
            .set_default("log_format", "pretty")?
            .set_default("start_section", "/")?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        built.try_deserialize()
    }

    /// Startup page; unknown paths fall back to the dashboard
    pub fn start_section(&self) -> Section {
        Section::from_path(&self.start_section).unwrap_or(Section::Dashboard)
    }

    pub fn intake_defaults(&self, today: NaiveDate) -> IntakeDefaults {
        IntakeDefaults {
            capacity: self.default_capacity,
            semester: self.default_semester.clone(),
            experience: self.default_experience.clone(),
            gpa: self.default_gpa.clone(),
            today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("unimanage-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load_from(Path::new("/nonexistent/unimanage.toml")).unwrap();

        assert_eq!(config.default_capacity, 50);
        assert_eq!(config.default_semester, "Fall 2024");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.log_file, None);
        assert_eq!(config.start_section(), Section::Dashboard);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = temp_path("override");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "default_capacity = 75").unwrap();
        writeln!(file, "default_semester = \"Spring 2025\"").unwrap();
        writeln!(file, "log_format = \"json\"").unwrap();
        writeln!(file, "start_section = \"/courses\"").unwrap();
        drop(file);

        let config = AppConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.default_capacity, 75);
        assert_eq!(config.default_semester, "Spring 2025");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.start_section(), Section::Courses);

        let today = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
        let defaults = config.intake_defaults(today);
        assert_eq!(defaults.capacity, 75);
        assert_eq!(defaults.today, today);
    }

    #[test]
    fn test_unknown_start_section_falls_back() {
        let config = AppConfig {
            start_section: "/grades".to_string(),
            ..AppConfig::load_from(Path::new("/nonexistent/unimanage.toml")).unwrap()
        };
        assert_eq!(config.start_section(), Section::Dashboard);
    }
}
