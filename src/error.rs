//! Error types and the numeric error-code table.
//!
//! Every validation failure carries a small negative code that is unique
//! across the whole service layer, so a caller can tell from the code alone
//! which check rejected the request. `0` always means success. The codes are
//! stable API: the presentation layer keys its error messages on them.

use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    // Jobs
    #[error("new job references unknown client {0}")]
    UnknownClientForNewJob(RecordId),

    #[error("no job with id {0}")]
    JobNotFound(RecordId),

    #[error("job update references unknown client {0}")]
    UnknownClientForJobUpdate(RecordId),

    // Clients
    #[error("no client with id {0}")]
    ClientNotFound(RecordId),

    // Users
    #[error("wrong password")]
    WrongPassword,

    #[error("unknown username {0:?}")]
    UnknownUsername(String),

    #[error("username {0:?} is already taken")]
    UsernameTaken(String),

    #[error("acting credentials rejected for user creation")]
    CreateUserBadActor,

    #[error("old password does not match")]
    OldPasswordMismatch,

    #[error("no user with id {0} to change password for")]
    PasswordTargetNotFound(RecordId),

    #[error("acting credentials rejected for password change")]
    PasswordChangeBadActor,

    #[error("no user with id {0} to delete")]
    DeleteTargetNotFound(RecordId),

    #[error("a user cannot delete itself")]
    SelfDeleteForbidden,

    #[error("acting credentials rejected for user deletion")]
    DeleteUserBadActor,

    // Infrastructure
    #[error("store error: {0}")]
    Store(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// The globally unique negative code for this failure.
    ///
    /// Infrastructure failures (blob store I/O, serialization) share `-5`,
    /// since the caller cannot correct those by retrying with fixed input.
    pub fn code(&self) -> i32 {
        match self {
            ApiError::UnknownClientForNewJob(_) => -1,
            ApiError::JobNotFound(_) => -2,
            ApiError::UnknownClientForJobUpdate(_) => -3,
            ApiError::ClientNotFound(_) => -4,
            ApiError::Store(_) | ApiError::Serialization(_) => -5,
            ApiError::WrongPassword => -6,
            ApiError::UnknownUsername(_) => -7,
            ApiError::UsernameTaken(_) => -8,
            ApiError::CreateUserBadActor => -9,
            ApiError::OldPasswordMismatch => -10,
            ApiError::PasswordTargetNotFound(_) => -11,
            ApiError::PasswordChangeBadActor => -12,
            ApiError::DeleteTargetNotFound(_) => -13,
            ApiError::SelfDeleteForbidden => -14,
            ApiError::DeleteUserBadActor => -15,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
