//! Configuration from the environment (after `.env` is loaded by `main`).

use std::env;
use std::path::PathBuf;

use crate::core::{paths, routing};

/// Default virtual host serving the titles page.
pub const DEFAULT_TITLES_HOST: &str = "titles.blowup.digital";
/// Default virtual host serving the tricks page.
pub const DEFAULT_TRICKS_HOST: &str = "tricks.blowup.digital";

const DATA_DIR_VAR: &str = "BLOWUP_DATA_DIR";
const TITLES_HOST_VAR: &str = "BLOWUP_TITLES_HOST";
const TRICKS_HOST_VAR: &str = "BLOWUP_TRICKS_HOST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory with `titles.json` / `tricks.json` overriding the embedded data.
    pub data_dir: Option<PathBuf>,
    pub titles_host: String,
    pub tricks_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            titles_host: DEFAULT_TITLES_HOST.to_string(),
            tricks_host: DEFAULT_TRICKS_HOST.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid host name: {value:?}")]
    InvalidHost { var: &'static str, value: String },
}

/// Load configuration from environment variables. Without `BLOWUP_DATA_DIR`, the platform
/// data directory is used (its files are optional).
pub fn load() -> Result<Config, ConfigError> {
    let mut config = from_lookup(|name| env::var(name).ok())?;
    if config.data_dir.is_none() {
        config.data_dir = paths::data_dir();
    }
    Ok(config)
}

/// Build a config from a variable lookup. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let data_dir = get(DATA_DIR_VAR).map(PathBuf::from);
    let titles_host = match get(TITLES_HOST_VAR) {
        Some(v) => parse_host(TITLES_HOST_VAR, &v)?,
        None => DEFAULT_TITLES_HOST.to_string(),
    };
    let tricks_host = match get(TRICKS_HOST_VAR) {
        Some(v) => parse_host(TRICKS_HOST_VAR, &v)?,
        None => DEFAULT_TRICKS_HOST.to_string(),
    };

    Ok(Config {
        data_dir,
        titles_host,
        tricks_host,
    })
}

/// Host names are compared case-insensitively, so store them lowercased.
/// Request ports are ignored when matching, so a configured port is rejected.
fn parse_host(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let host = value.trim();
    if host.chars().any(|c| c.is_whitespace() || c == '/')
        || routing::strip_port(host) != host
    {
        return Err(ConfigError::InvalidHost {
            var,
            value: value.to_string(),
        });
    }
    Ok(host.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_lookup(lookup(&[])).expect("config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = from_lookup(lookup(&[
            ("BLOWUP_DATA_DIR", "/srv/data"),
            ("BLOWUP_TITLES_HOST", " Titles.Example.org "),
            ("BLOWUP_TRICKS_HOST", "tricks.example.org"),
        ]))
        .expect("config");
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/data")));
        assert_eq!(config.titles_host, "titles.example.org");
        assert_eq!(config.tricks_host, "tricks.example.org");
    }

    #[test]
    fn empty_values_are_unset() {
        let config = from_lookup(lookup(&[("BLOWUP_DATA_DIR", ""), ("BLOWUP_TITLES_HOST", " ")]))
            .expect("config");
        assert!(config.data_dir.is_none());
        assert_eq!(config.titles_host, DEFAULT_TITLES_HOST);
    }

    #[test]
    fn rejects_host_with_port() {
        let err = from_lookup(lookup(&[("BLOWUP_TITLES_HOST", "titles.example.org:3000")]))
            .unwrap_err();
        let ConfigError::InvalidHost { var, .. } = err;
        assert_eq!(var, "BLOWUP_TITLES_HOST");

        let config = from_lookup(lookup(&[("BLOWUP_TITLES_HOST", "[::1]")])).expect("config");
        assert_eq!(config.titles_host, "[::1]");
    }

    #[test]
    fn rejects_host_with_path_or_space() {
        for bad in ["titles.example.org/x", "a b"] {
            let err = from_lookup(lookup(&[("BLOWUP_TRICKS_HOST", bad)])).unwrap_err();
            let ConfigError::InvalidHost { var, value } = err;
            assert_eq!(var, "BLOWUP_TRICKS_HOST");
            assert_eq!(value, bad);
        }
    }
}
