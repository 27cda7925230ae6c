pub mod config;
pub mod db;
pub mod models;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use db::Database;
pub use session::Session;
