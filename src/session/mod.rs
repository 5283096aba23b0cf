//! USSD session tracking
//!
//! - [`status`] - the Pending -> terminal state machine (SMALLINT ids)
//! - [`resolver`] - short code -> owning client lookup
//! - [`ledger`] - session log rows and the finalize compare-and-swap

pub mod ledger;
pub mod resolver;
pub mod status;

pub use ledger::{SessionLedger, SessionRecord};
pub use resolver::SessionResolver;
pub use status::SessionStatus;
