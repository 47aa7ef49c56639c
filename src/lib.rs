//! Bakery API: read-only JSON endpoints over bakeries and their baked goods.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use routes::app;
pub use service::CatalogService;
pub use state::AppState;
pub use store::{connect, ensure_tables};
