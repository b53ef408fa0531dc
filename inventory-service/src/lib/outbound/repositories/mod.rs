pub mod alert;
pub mod item;
pub mod session;
pub mod user;

pub use alert::SqliteAlertRepository;
pub use item::SqliteItemRepository;
pub use session::SqliteSessionRepository;
pub use user::SqliteUserRepository;
