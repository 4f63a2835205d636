//! # Mock Service Layer
//!
//! The "API" the presentation layer calls. Each operation is an async unit
//! of work that sleeps a fixed per-operation delay (modeling variable
//! network cost), validates its inputs against the stores, mutates on
//! success, saves through the persistence bridge, and returns a typed
//! result. Every validation failure maps to one globally unique negative
//! code — see [`crate::error::ApiError::code`].
//!
//! Operations take explicit parameter structs rather than loose positional
//! arguments; the structs below are the whole request surface.
//!
//! ## What the Service Layer Does NOT Do
//!
//! - **Field-presence validation**: the UI forms guarantee non-empty names
//!   and addresses; `clients::create` accepts whatever it is given.
//! - **Retries or timeouts**: every failure is surfaced once and is
//!   recoverable by calling again with corrected input.
//! - **Locking**: access is single-threaded and cooperative.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::model::RecordId;

pub mod clients;
pub mod jobs;
pub mod users;

// Artificial per-operation latencies.
pub(crate) const LIST_JOBS_DELAY: Duration = Duration::from_millis(1000);
pub(crate) const CREATE_JOB_DELAY: Duration = Duration::from_millis(1500);
pub(crate) const UPDATE_JOB_DELAY: Duration = Duration::from_millis(1200);
pub(crate) const LIST_CLIENTS_DELAY: Duration = Duration::from_millis(1002);
pub(crate) const CREATE_CLIENT_DELAY: Duration = Duration::from_millis(560);
pub(crate) const UPDATE_CLIENT_DELAY: Duration = Duration::from_millis(500);
pub(crate) const LOGIN_DELAY: Duration = Duration::from_millis(750);
pub(crate) const LIST_USERS_DELAY: Duration = Duration::from_millis(1000);
pub(crate) const CREATE_USER_DELAY: Duration = Duration::from_millis(457);
pub(crate) const UPDATE_PASSWORD_DELAY: Duration = Duration::from_millis(1000);
pub(crate) const DELETE_USER_DELAY: Duration = Duration::from_millis(1200);

/// Request to open a new job.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub technician: String,
    pub reason: String,
    pub client_id: RecordId,
}

/// Partial update of a job. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub technician: Option<String>,
    pub reason: Option<String>,
    pub client_id: Option<RecordId>,
    pub finished: Option<bool>,
}

/// Request to register a new client.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub address: String,
}

/// Partial update of a client. Setting `active` to `false` is the one and
/// only deletion mechanism; the record itself stays forever.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub active: Option<bool>,
}

/// The credentials of the user performing a mutating user operation.
#[derive(Debug, Clone, Copy)]
pub struct Credentials {
    pub user_id: RecordId,
    pub password_hash: i32,
}

/// Request to create an admin account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: i32,
}

/// Request to change a user's password. The target proves knowledge of the
/// old password by hash.
#[derive(Debug, Clone, Copy)]
pub struct PasswordChange {
    pub target_id: RecordId,
    pub old_hash: i32,
    pub new_hash: i32,
}

/// Result of a login attempt.
///
/// Login never fails on validation — it always resolves to one of three
/// outcomes, distinguished by `err_code`: `0` success, `-6` wrong password,
/// `-7` unknown username. The wire field names match what the login page
/// already expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    #[serde(rename = "validLogin")]
    pub valid_login: bool,
    #[serde(rename = "userID")]
    pub user_id: RecordId,
    #[serde(rename = "errCode")]
    pub err_code: i32,
}

impl LoginOutcome {
    pub(crate) fn granted(user_id: RecordId) -> Self {
        Self {
            valid_login: true,
            user_id,
            err_code: 0,
        }
    }

    pub(crate) fn rejected(reason: crate::error::ApiError) -> Self {
        Self {
            valid_login: false,
            user_id: -1,
            err_code: reason.code(),
        }
    }
}
