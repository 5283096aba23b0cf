//! USSD menu subsystem
//!
//! - [`models`] - menu definitions, nodes and replies
//! - [`tree`] - arena-style in-memory tree and the token walk
//! - [`store`] - PostgreSQL persistence (CRUD, activation, cascade delete)
//! - [`static_menus`] - hard-coded legacy handler registry
//! - [`navigator`] - pure per-round resolution (handler first, tree second)

pub mod models;
pub mod navigator;
pub mod static_menus;
pub mod store;
pub mod tree;

pub use models::{MenuDefinition, MenuNode, MenuReply, ResponseKind};
pub use navigator::MenuNavigator;
pub use static_menus::{StaticMenuHandler, StaticMenuRegistry};
pub use store::MenuStore;
pub use tree::{MenuTree, WalkError};
