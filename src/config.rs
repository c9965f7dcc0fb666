//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded first by the
//! binary) and can be overridden by command-line flags.

use std::path::PathBuf;

/// Default file the merged blocks are written to.
pub const DEFAULT_OUTPUT_FILE: &str = "merged_cidrs.json";
/// log4rs configuration file looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

pub const ENV_WORKERS: &str = "CIDR_WORKERS";
pub const ENV_OUTPUT_FILE: &str = "CIDR_OUTPUT_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of parse workers (at least 1).
    pub workers: usize,
    /// Where `merge` writes its JSON result.
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workers: default_workers(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in practice).
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(value) = lookup(ENV_WORKERS) {
            match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.workers = n,
                _ => log::warn!("Ignoring invalid {ENV_WORKERS}={value:?}"),
            }
        }
        if let Some(value) = lookup(ENV_OUTPUT_FILE).filter(|v| !v.trim().is_empty()) {
            config.output_file = PathBuf::from(value.trim());
        }
        log::debug!("Config: {config:?}");
        config
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, workers: Option<usize>, output_file: Option<PathBuf>) -> Config {
        if let Some(n) = workers {
            self.workers = n.max(1);
        }
        if let Some(path) = output_file {
            self.output_file = path;
        }
        self
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.output_file, PathBuf::from("merged_cidrs.json"));
        assert!(config.workers >= 1);
    }

    #[test]
    fn test_config_from_env_values() {
        let config = Config::from_lookup(lookup(&[
            ("CIDR_WORKERS", "3"),
            ("CIDR_OUTPUT_FILE", "out/ranges.json"),
        ]));
        assert_eq!(config.workers, 3);
        assert_eq!(config.output_file, PathBuf::from("out/ranges.json"));
    }

    #[test]
    fn test_config_invalid_workers_ignored() {
        let default_workers = Config::default().workers;
        for bad in ["0", "many", "-2"] {
            let config = Config::from_lookup(lookup(&[("CIDR_WORKERS", bad)]));
            assert_eq!(config.workers, default_workers, "CIDR_WORKERS={bad}");
        }
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup(&[("CIDR_WORKERS", "3")]))
            .with_overrides(Some(0), Some(PathBuf::from("x.json")));
        assert_eq!(config.workers, 1);
        assert_eq!(config.output_file, PathBuf::from("x.json"));
    }
}
