pub mod api;
pub mod api_docs;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod views;

pub use infrastructure::config;
pub use infrastructure::seed;
pub use infrastructure::server;
