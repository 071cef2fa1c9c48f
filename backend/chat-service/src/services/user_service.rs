use crate::auth::password;
use crate::error::{AppError, AppResult};
use crate::models::{PublicUser, User};
use tokio::sync::RwLock;

#[derive(Default)]
struct UserDirectory {
    users: Vec<User>,
    next_id: u64,
}

/// In-memory credential store. Registration and lookup happen under a single
/// lock region so login uniqueness and id assignment cannot race.
#[derive(Default)]
pub struct UserStore {
    inner: RwLock<UserDirectory>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new identity. Fails on empty fields or a taken login
    /// (case-sensitive exact match). The returned view never carries the
    /// password hash.
    pub async fn register(&self, login: &str, password: &str, name: &str) -> AppResult<PublicUser> {
        if login.is_empty() || password.is_empty() || name.is_empty() {
            return Err(AppError::Validation("all fields are required".into()));
        }

        // Argon2 is the slow part; do it before taking the write lock. A
        // losing duplicate wastes one hash, nothing more.
        let password_hash = password::hash_password(password)?;

        let mut dir = self.inner.write().await;
        if dir.users.iter().any(|u| u.login == login) {
            return Err(AppError::DuplicateLogin);
        }

        dir.next_id += 1;
        let user = User {
            id: dir.next_id,
            login: login.to_string(),
            password_hash,
            name: name.to_string(),
        };
        let view = user.public_view();
        dir.users.push(user);

        tracing::info!(user_id = view.id, "registered new user");
        Ok(view)
    }

    /// Check a login/password pair. Unknown login and wrong password fail
    /// with the same error so callers cannot enumerate accounts.
    pub async fn verify_credentials(&self, login: &str, password: &str) -> AppResult<PublicUser> {
        let (hash, view) = {
            let dir = self.inner.read().await;
            match dir.users.iter().find(|u| u.login == login) {
                Some(u) => (u.password_hash.clone(), u.public_view()),
                None => return Err(AppError::InvalidCredentials),
            }
        };

        if password::verify_password(password, &hash)? {
            Ok(view)
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    /// All identities except the caller, in registration order.
    pub async fn list_other_users(&self, caller_id: u64) -> Vec<PublicUser> {
        let dir = self.inner.read().await;
        dir.users
            .iter()
            .filter(|u| u.id != caller_id)
            .map(|u| u.public_view())
            .collect()
    }

    pub async fn exists(&self, user_id: u64) -> bool {
        let dir = self.inner.read().await;
        dir.users.iter().any(|u| u.id == user_id)
    }
}
