use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;

const DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub mode: RunMode,
    pub allowed_origins: Vec<String>,
    pub static_dir: PathBuf,
    pub seed_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mode = match get("RUST_ENV").as_deref().map(str::trim) {
            Some("production") => RunMode::Production,
            _ => RunMode::Development,
        };

        let host = get("BIND_ADDR")
            .map(|v| v.trim().parse::<IpAddr>())
            .transpose()
            .context("BIND_ADDR must be an IP address")?
            .unwrap_or(IpAddr::from([0, 0, 0, 0]));

        let port = get("PORT")
            .map(|v| v.trim().parse::<u16>())
            .transpose()
            .context("PORT must be a number between 0 and 65535")?
            .unwrap_or(5000);

        let mut allowed_origins: Vec<String> = get("ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if allowed_origins.is_empty() {
            if mode == RunMode::Production {
                anyhow::bail!("ALLOWED_ORIGINS must contain at least one origin in production");
            }
            allowed_origins = DEV_ORIGINS.iter().map(|s| s.to_string()).collect();
        }

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let seed_data = get("SEED_DATA")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Ok(Config {
            host,
            port,
            mode,
            allowed_origins,
            static_dir,
            seed_data,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
