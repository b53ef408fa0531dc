pub mod inventory;
pub mod session;
pub mod user;
