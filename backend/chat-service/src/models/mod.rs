pub mod chat;
pub mod message;
pub mod user;

pub use chat::Chat;
pub use message::Message;
pub use user::{PublicUser, User};
