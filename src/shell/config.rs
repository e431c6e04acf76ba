// Runtime configuration read from the environment.
//
// Variables
// - TODOS_HOST  interface to bind, default 0.0.0.0
// - TODOS_PORT  port to bind, default 3000
// - TODOS_CORS  allow any origin, default true

use anyhow::Context;
use std::net::{IpAddr, SocketAddr};

pub const HOST_VAR: &str = "TODOS_HOST";
pub const PORT_VAR: &str = "TODOS_PORT";
pub const CORS_VAR: &str = "TODOS_CORS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_permissive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            cors_permissive: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = match lookup(HOST_VAR) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .with_context(|| format!("{HOST_VAR} is not an IP address: {raw}"))?,
            None => defaults.host,
        };
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("{PORT_VAR} is not a valid port: {raw}"))?,
            None => defaults.port,
        };
        let cors_permissive = match lookup(CORS_VAR) {
            Some(raw) => {
                parse_flag(&raw).with_context(|| format!("{CORS_VAR} is not a boolean: {raw}"))?
            }
            None => defaults.cors_permissive,
        };
        Ok(Self {
            host,
            port,
            cors_permissive,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow::anyhow!("expected true or false")),
    }
}
