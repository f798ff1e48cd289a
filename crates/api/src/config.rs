//! Environment-driven server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use phonehub_session::DEFAULT_MAX_SESSIONS;

pub const BIND_ADDR_ENV: &str = "PHONEHUB_BIND_ADDR";
pub const CATALOG_PATH_ENV: &str = "PHONEHUB_CATALOG_PATH";
pub const TOP_N_ENV: &str = "PHONEHUB_TOP_N";
pub const MAX_SESSIONS_ENV: &str = "PHONEHUB_MAX_SESSIONS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog to load; `None` means the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// How many recommendations are explained and recorded as viewed per request.
    pub top_n: usize,
    /// Live sessions kept before the earliest is evicted.
    pub max_sessions: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            catalog_path: None,
            top_n: DEFAULT_TOP_N,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("{BIND_ADDR_ENV}={raw} is not a socket address; using {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let catalog_path = lookup(CATALOG_PATH_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let top_n = positive(&lookup, TOP_N_ENV, defaults.top_n);
        let max_sessions = positive(&lookup, MAX_SESSIONS_ENV, defaults.max_sessions);

        Self {
            bind_addr,
            catalog_path,
            top_n,
            max_sessions,
        }
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                tracing::warn!("{key}={raw} is not a positive integer; using {default}");
                default
            }
        },
        None => default,
    }
}
