use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Where the trivia service listens, where it keeps its records, and how loudly it logs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BasicConfig {
    /// TOML: `basic.listen_addr`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: IpAddr,

    /// TOML: `basic.listen_port`. Default: `8188`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// SQLite file backing the question bank; created on first start.
    /// TOML: `basic.database_url`. Default: `sqlite://trivia.db`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Fallback filter for the tracing subscriber when `RUST_LOG` is unset.
    /// TOML: `basic.loglevel`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            listen_port: default_listen_port(),
            database_url: default_database_url(),
            loglevel: default_loglevel(),
        }
    }
}

fn default_listen_addr() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_listen_port() -> u16 {
    8188
}

fn default_database_url() -> String {
    "sqlite://trivia.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}
