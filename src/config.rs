use std::env;
use std::fmt;

use log::warn;

// well-known deployment of the color service
pub const DEFAULT_HOST: &str = "juliana.jtlang.dev";
pub const DEFAULT_PORT: u16 = 6969;

pub const SERVER_ENV: &str = "COLORCTL_SERVER";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        ServerConfig { host, port }
    }

    /// Reads COLORCTL_SERVER ("host:port") if set, otherwise falls back
    /// to the compiled-in defaults. A malformed value is logged and ignored
    /// rather than treated as fatal, since the defaults always work.
    pub fn from_env() -> Self {
        match env::var(SERVER_ENV) {
            Ok(raw) => match Self::parse(&raw) {
                Some(config) => config,
                None => {
                    warn!("ignoring malformed {}={}", SERVER_ENV, raw);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    // "host:port", port required so a bare hostname is caught early
    pub fn parse(raw: &str) -> Option<Self> {
        let (host, port) = raw.rsplit_once(':')?;
        if host.is_empty() {
            return None;
        }
        let port: u16 = port.parse().ok()?;
        Some(ServerConfig::new(host.to_string(), port))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig::new(DEFAULT_HOST.to_string(), DEFAULT_PORT)
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
