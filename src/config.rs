use std::path::PathBuf;

use crate::logging::LogLevel;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);

/// Settings for the static host that serves the Trunk build output.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT").as_deref(), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR").as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_log_level(lookup("LOG_LEVEL").as_deref(), DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn parse_u16_with_bounds(raw: Option<&str>, default: u16, bounds: (u16, u16)) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(raw: Option<&str>, default: LogLevel) -> LogLevel {
    raw.and_then(LogLevel::from_str).unwrap_or(default)
}
