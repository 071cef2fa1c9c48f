use serde::{Deserialize, Serialize};

/// Full identity record. Lives only inside the credential store; the
/// password hash must never cross the API boundary, so this type is not
/// serializable.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub password_hash: String,
    pub name: String,
}

impl User {
    pub fn public_view(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            login: self.login.clone(),
            name: self.name.clone(),
        }
    }
}

/// The externally visible slice of a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: u64,
    pub login: String,
    pub name: String,
}
