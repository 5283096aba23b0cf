pub mod billing;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod menu;
pub mod session;

pub use config::AppConfig;
pub use error::UssdError;
