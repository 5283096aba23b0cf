pub mod callback;
pub mod events;
pub mod health;
pub mod menus;
