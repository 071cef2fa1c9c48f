pub mod chat_service;
pub mod user_service;

pub use chat_service::ChatStore;
pub use user_service::UserStore;
