//! Client account access
//!
//! Clients are owned by the account-management subsystem; this module only
//! resolves short codes, reads tier references and mutates token balances.

pub mod models;
pub mod repository;

pub use models::{Client, PricingTier, ServiceKind, ServicePrice};
pub use repository::ClientRepository;
