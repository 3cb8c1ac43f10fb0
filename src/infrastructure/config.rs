use std::env;

/// Which key-value store backs the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: Option<String>,
    pub store_backend: StoreBackend,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_backend = match lookup("STORE_BACKEND").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("memory") => StoreBackend::Memory,
            Some(v) if !v.is_empty() && !v.eq_ignore_ascii_case("redis") => {
                tracing::warn!("Unknown STORE_BACKEND '{}', using redis", v);
                StoreBackend::Redis
            }
            _ => StoreBackend::Redis,
        };

        Self {
            redis_host: lookup("REDIS_HOST").unwrap_or_else(|| "localhost".to_string()),
            redis_port: lookup("REDIS_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            redis_password: lookup("REDIS_PASSWORD").filter(|p| !p.is_empty()),
            store_backend,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            seed_demo: lookup("SEED_DEMO").is_some(),
        }
    }

    /// Connection URL for the Redis client
    pub fn redis_url(&self) -> String {
        match &self.redis_password {
            Some(password) => format!(
                "redis://:{}@{}:{}/",
                urlencoding::encode(password),
                self.redis_host,
                self.redis_port
            ),
            None => format!("redis://{}:{}/", self.redis_host, self.redis_port),
        }
    }
}
