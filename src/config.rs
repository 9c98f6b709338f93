//! Runtime configuration and logger setup.
//!
//! Settings come from the environment (optionally seeded from `.env` by
//! `dotenv` in `main`).

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::PathBuf;

/// Env var naming the log4rs YAML file.
pub const LOG_CONFIG_VAR: &str = "CIDR_EXPAND_LOG_CONFIG";
/// Env var with the level used when no log4rs file is loaded.
pub const LOG_LEVEL_VAR: &str = "CIDR_EXPAND_LOG_LEVEL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a [`Config`] from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(LOG_CONFIG_VAR).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path.trim());
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            match level.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => eprintln!(
                    "Ignoring {LOG_LEVEL_VAR}={level:?}, using {DEFAULT_LOG_LEVEL}"
                ),
            }
        }
        config
    }
}

/// Initialize log4rs from the configured YAML file, or log to stderr.
///
/// Logs never go to stdout, which carries the address list.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if config.log_config.exists() {
        match log4rs::init_file(&config.log_config, Default::default()) {
            Ok(()) => {
                log::debug!("Logging configured from {}", config.log_config.display());
                return Ok(());
            }
            Err(e) => eprintln!(
                "Error loading {}: {e}, logging to stderr",
                config.log_config.display()
            ),
        }
    }
    log4rs::init_config(stderr_config(config.log_level)?)?;
    log::debug!(
        "No usable {}, logging to stderr at {}",
        config.log_config.display(),
        config.log_level
    );
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<LogConfig, Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_CONFIG_VAR, "/etc/cidr-expand/log4rs.yml"),
            (LOG_LEVEL_VAR, "debug"),
        ]));
        assert_eq!(
            config.log_config,
            PathBuf::from("/etc/cidr-expand/log4rs.yml")
        );
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "loud")]));
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_blank_log_config_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[(LOG_CONFIG_VAR, "  ")]));
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_stderr_config_builds() {
        assert!(stderr_config(LevelFilter::Info).is_ok());
    }
}
