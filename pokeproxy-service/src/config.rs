use std::{
    net::SocketAddr,
    time::Duration,
};

use clap::Parser;
use pokeproxy_upstream::{
    CacheOptions,
    DEFAULT_BASE_URL,
    UpstreamConfig,
};
use tracing_subscriber::filter::LevelFilter;

/// Configuration of the HTTP service.
#[derive(Debug, Clone, Parser)]
#[command(name = "pokeproxy", about = "Serves creature data and battle simulations over HTTP")]
pub struct ServiceConfig {
    /// Address to listen on.
    #[arg(long, env = "POKEPROXY_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Base URL of the upstream reference API.
    #[arg(long, env = "POKEPROXY_UPSTREAM_URL", default_value = DEFAULT_BASE_URL)]
    pub upstream_url: String,

    /// Timeout of a single upstream request, in seconds.
    #[arg(long, env = "POKEPROXY_UPSTREAM_TIMEOUT_SECS", default_value_t = 20)]
    pub upstream_timeout_secs: u64,

    /// Maximum number of cached upstream responses.
    #[arg(long, env = "POKEPROXY_CACHE_CAPACITY", default_value_t = 2000)]
    pub cache_capacity: usize,

    /// Lifetime of a cached upstream response, in seconds.
    #[arg(long, env = "POKEPROXY_CACHE_TTL_SECS", default_value_t = 3600)]
    pub cache_ttl_secs: u64,

    /// Maximum log level.
    #[arg(long, env = "POKEPROXY_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

impl ServiceConfig {
    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            base_url: self.upstream_url.clone(),
            request_timeout: Duration::from_secs(self.upstream_timeout_secs),
        }
    }

    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions {
            capacity: self.cache_capacity,
            ttl: Duration::from_secs(self.cache_ttl_secs),
        }
    }
}
