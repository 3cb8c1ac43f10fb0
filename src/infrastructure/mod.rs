//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Key-value store adapters (store)
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Repository implementations (repositories)
//! - Demo data (seed)
//! - Application state (state)

pub mod config;
pub mod repositories;
pub mod seed;
pub mod server;
pub mod state;
pub mod store;

pub use repositories::*;
pub use state::AppState;
pub use store::{MemoryStore, RedisStore};
