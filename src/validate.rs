//! Referential-integrity and credential checks.
//!
//! These run at the service-layer boundary, at write time only. Nothing here
//! is re-checked continuously: a job keeps its `client_id` even if the
//! referenced client is later deactivated, which is fine because clients are
//! never hard-deleted.

use crate::model::{Client, RecordId, User};
use crate::store::EntityStore;

/// Does a client with this id exist? Inactive clients remain valid
/// references.
pub fn client_id_is_valid(clients: &EntityStore<Client>, id: RecordId) -> bool {
    clients.find(id).is_some()
}

/// Is this username free? Enforced at creation time only.
pub fn username_is_unique(users: &EntityStore<User>, username: &str) -> bool {
    find_user_by_name(users, username).is_none()
}

/// Do these credentials name an existing user with a matching stored hash?
pub fn credentials_match(users: &EntityStore<User>, id: RecordId, password_hash: i32) -> bool {
    users
        .find(id)
        .is_some_and(|user| user.password_hash == password_hash)
}

pub fn find_user_by_name<'a>(users: &'a EntityStore<User>, username: &str) -> Option<&'a User> {
    users.records().iter().find(|u| u.username == username)
}
