//! Runtime settings for the static host, read from the environment.

use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the served URL once the server starts.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    /// Reads `CATALOGUE_HOST`, `CATALOGUE_PORT` and `CATALOGUE_OPEN_BROWSER`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unreadable values fall
    /// back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("CATALOGUE_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("CATALOGUE_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("Ignoring CATALOGUE_PORT={:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let open_browser = match lookup("CATALOGUE_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("Ignoring CATALOGUE_OPEN_BROWSER={:?}", raw);
                defaults.open_browser
            }),
            None => defaults.open_browser,
        };

        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("CATALOGUE_HOST", "0.0.0.0"),
            ("CATALOGUE_PORT", "3000"),
            ("CATALOGUE_OPEN_BROWSER", "no"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("CATALOGUE_HOST", "  "),
            ("CATALOGUE_PORT", "eighty"),
            ("CATALOGUE_OPEN_BROWSER", "maybe"),
        ]);
        assert_eq!(config, ServerConfig::default());
    }
}
