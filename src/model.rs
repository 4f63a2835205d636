//! # Domain Model
//!
//! The three record kinds the dashboard tracks, plus the password checksum
//! the UI applies before credentials ever reach the service layer.
//!
//! Records carry plain integer ids, allocated per store by
//! [`crate::store::EntityStore`]. Cross-entity references are integer foreign
//! keys resolved by lookup, never shared pointers: a [`Job`] points at its
//! [`Client`] through `client_id`, which is either a valid client id or
//! [`UNASSIGNED_CLIENT`].
//!
//! ## Lifecycles
//!
//! - **Job**: created unfinished, mutated field-by-field, never deleted —
//!   `finished` is toggled instead.
//! - **Client**: created active; "deletion" from the UI sets `active = false`
//!   and the record persists permanently. Inactive clients stay valid job
//!   references.
//! - **User**: created by an already-authenticated user; deletable by another
//!   user, never by itself.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Store-scoped record identifier. Positive for allocated records.
pub type RecordId = i64;

/// Sentinel `client_id` for a job not yet assigned to any client.
pub const UNASSIGNED_CLIENT: RecordId = -1;

/// Tagged discriminator for the three record kinds.
///
/// Also names each kind's fixed key in the blob store, one blob per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Job,
    Client,
    User,
}

impl EntityKind {
    pub fn storage_key(self) -> &'static str {
        match self {
            EntityKind::Job => "JobsDB",
            EntityKind::Client => "ClientsDB",
            EntityKind::User => "UsersDB",
        }
    }
}

/// A technician dispatched to fix something in a client's home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: RecordId,
    pub technician: String,
    pub reason: String,
    pub client_id: RecordId,
    pub finished: bool,
}

impl Job {
    pub fn new(
        id: RecordId,
        technician: impl Into<String>,
        reason: impl Into<String>,
        client_id: RecordId,
    ) -> Self {
        Self {
            id,
            technician: technician.into(),
            reason: reason.into(),
            client_id,
            finished: false,
        }
    }
}

impl Record for Job {
    const KIND: EntityKind = EntityKind::Job;

    fn id(&self) -> RecordId {
        self.id
    }

    fn absorb(&mut self, persisted: &Self) {
        self.technician = persisted.technician.clone();
        self.reason = persisted.reason.clone();
        self.client_id = persisted.client_id;
        self.finished = persisted.finished;
    }

    fn reissued(&self, id: RecordId) -> Self {
        Self { id, ..self.clone() }
    }
}

/// A (non-employee) customer of the repair service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub active: bool,
}

impl Client {
    pub fn new(id: RecordId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            active: true,
        }
    }
}

impl Record for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn id(&self) -> RecordId {
        self.id
    }

    fn absorb(&mut self, persisted: &Self) {
        self.name = persisted.name.clone();
        self.address = persisted.address.clone();
        self.active = persisted.active;
    }

    fn reissued(&self, id: RecordId) -> Self {
        Self { id, ..self.clone() }
    }
}

/// An admin account that can log in to the dashboard.
///
/// Only the hash of the password is ever stored or compared, so the plaintext
/// never leaves the UI. The hash is [`hash_password`] — a checksum, not
/// cryptography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub password_hash: i32,
}

impl User {
    pub fn new(id: RecordId, username: impl Into<String>, password_hash: i32) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash,
        }
    }
}

impl Record for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> RecordId {
        self.id
    }

    fn absorb(&mut self, persisted: &Self) {
        self.username = persisted.username.clone();
        self.password_hash = persisted.password_hash;
    }

    fn reissued(&self, id: RecordId) -> Self {
        Self { id, ..self.clone() }
    }
}

/// The non-cryptographic 32-bit checksum the UI applies to passwords.
///
/// Folds UTF-16 code units as `h = (h << 5) - h + unit` with wrapping
/// arithmetic, matching the classic JavaScript `String.hashCode` the login
/// form uses, so hashes computed here compare equal to ones the UI sends.
pub fn hash_password(text: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash
}
