use std::env;
use std::fmt;

use crate::{Result, TempoError};

pub const DEFAULT_HOST: &str = "api.tempo-db.com";
pub const DEFAULT_PORT: u16 = 443;

/// Credentials and endpoint of the remote storage service.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    pub key: String,
    pub secret: String,
    pub host: String,
    pub port: u16,
    pub secure: bool,
}

impl ClientConfig {
    /// Reads `TEMPODB_API_KEY`, `TEMPODB_API_SECRET`, `TEMPODB_API_HOST`,
    /// `TEMPODB_API_PORT` and `TEMPODB_API_SECURE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| TempoError::Config(format!("{} is not set", name)))
        };

        let key = required("TEMPODB_API_KEY")?;
        let secret = required("TEMPODB_API_SECRET")?;
        let host = lookup("TEMPODB_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("TEMPODB_API_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                TempoError::Config(format!("TEMPODB_API_PORT {:?} is not a port: {}", raw, e))
            })?,
            None => DEFAULT_PORT,
        };

        let secure = match lookup("TEMPODB_API_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                TempoError::Config(format!("TEMPODB_API_SECURE {:?} is not a boolean", raw))
            })?,
            None => true,
        };

        Ok(Self {
            key,
            secret,
            host,
            port,
            secure,
        })
    }

    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .finish()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
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

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[("TEMPODB_API_KEY", "k"), ("TEMPODB_API_SECRET", "s")]))
                .unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.secure);
        assert_eq!(config.scheme(), "https");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("TEMPODB_API_KEY", "k"),
            ("TEMPODB_API_SECRET", "s"),
            ("TEMPODB_API_HOST", "localhost"),
            ("TEMPODB_API_PORT", "8080"),
            ("TEMPODB_API_SECURE", "false"),
        ]))
        .unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert_eq!(config.scheme(), "http");
    }

    #[test]
    fn test_missing_credentials() {
        let err = ClientConfig::from_lookup(lookup(&[("TEMPODB_API_KEY", "k")])).unwrap_err();
        assert!(matches!(err, TempoError::Config(ref msg) if msg.contains("TEMPODB_API_SECRET")));
    }

    #[test]
    fn test_invalid_values() {
        let base = [("TEMPODB_API_KEY", "k"), ("TEMPODB_API_SECRET", "s")];

        let mut vars = base.to_vec();
        vars.push(("TEMPODB_API_PORT", "99999"));
        assert!(ClientConfig::from_lookup(lookup(&vars)).is_err());

        let mut vars = base.to_vec();
        vars.push(("TEMPODB_API_SECURE", "maybe"));
        assert!(ClientConfig::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("TEMPODB_API_KEY", "k"),
            ("TEMPODB_API_SECRET", "hunter2"),
        ]))
        .unwrap();
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
