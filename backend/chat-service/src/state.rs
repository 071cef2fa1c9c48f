use crate::{
    auth::TokenService,
    config::Config,
    services::{ChatStore, UserStore},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub chats: Arc<ChatStore>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_hours);
        Self {
            users: Arc::new(UserStore::new()),
            chats: Arc::new(ChatStore::new()),
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }
}
