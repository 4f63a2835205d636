//! User endpoints: login, list, create, password change, delete.
//!
//! Every mutating operation authenticates the *acting* user first, by the
//! same id-plus-hash check the login page uses. The checks run in a fixed
//! order so each failure keeps its own code: acting credentials, then
//! operation-specific rules, then the target lookup.

use tokio::time;

use super::{
    Credentials, LoginOutcome, NewUser, PasswordChange, CREATE_USER_DELAY, DELETE_USER_DELAY,
    LIST_USERS_DELAY, LOGIN_DELAY, UPDATE_PASSWORD_DELAY,
};
use crate::error::{ApiError, Result};
use crate::model::{RecordId, User};
use crate::store::backend::BlobStore;
use crate::store::{bridge, EntityStore};
use crate::validate;

/// Authenticate a username/hash pair.
///
/// Validation never surfaces as `Err` here — the caller always gets a
/// [`LoginOutcome`] telling apart success, wrong password, and unknown
/// username. Persisted users are merged in before the check so a fresh
/// session can log in at all.
pub async fn login<B: BlobStore>(
    users: &mut EntityStore<User>,
    backend: &B,
    username: &str,
    password_hash: i32,
) -> Result<LoginOutcome> {
    // Load before the delay: the login page calls this first thing.
    bridge::load(backend, users)?;
    time::sleep(LOGIN_DELAY).await;

    match validate::find_user_by_name(users, username) {
        Some(user) if user.password_hash == password_hash => Ok(LoginOutcome::granted(user.id)),
        Some(_) => Ok(LoginOutcome::rejected(ApiError::WrongPassword)),
        None => Ok(LoginOutcome::rejected(ApiError::UnknownUsername(
            username.to_string(),
        ))),
    }
}

pub async fn list_all<B: BlobStore>(
    users: &mut EntityStore<User>,
    backend: &B,
) -> Result<Vec<User>> {
    time::sleep(LIST_USERS_DELAY).await;
    bridge::load(backend, users)?;
    Ok(users.records().to_vec())
}

/// Create an admin account on behalf of `actor`. The new username must be
/// free; uniqueness is checked here and never again.
pub async fn create<B: BlobStore>(
    users: &mut EntityStore<User>,
    backend: &B,
    actor: Credentials,
    new: NewUser,
) -> Result<User> {
    time::sleep(CREATE_USER_DELAY).await;

    if !validate::credentials_match(users, actor.user_id, actor.password_hash) {
        return Err(ApiError::CreateUserBadActor);
    }
    if !validate::username_is_unique(users, &new.username) {
        return Err(ApiError::UsernameTaken(new.username));
    }

    let id = users.allocate();
    let user = User::new(id, new.username, new.password_hash);
    users.push(user.clone());
    bridge::save(backend, users)?;
    Ok(user)
}

/// Change the target's password. The target proves knowledge of the old one
/// by hash; the actor only has to be a valid account.
pub async fn update_password<B: BlobStore>(
    users: &mut EntityStore<User>,
    backend: &B,
    actor: Credentials,
    change: PasswordChange,
) -> Result<()> {
    time::sleep(UPDATE_PASSWORD_DELAY).await;

    if !validate::credentials_match(users, actor.user_id, actor.password_hash) {
        return Err(ApiError::PasswordChangeBadActor);
    }
    let Some(user) = users.find_mut(change.target_id) else {
        return Err(ApiError::PasswordTargetNotFound(change.target_id));
    };
    if user.password_hash != change.old_hash {
        return Err(ApiError::OldPasswordMismatch);
    }
    user.password_hash = change.new_hash;

    bridge::save(backend, users)?;
    Ok(())
}

/// Remove another user's account. Self-delete is forbidden regardless of
/// how good the credentials are.
pub async fn delete<B: BlobStore>(
    users: &mut EntityStore<User>,
    backend: &B,
    actor: Credentials,
    target_id: RecordId,
) -> Result<()> {
    time::sleep(DELETE_USER_DELAY).await;

    if !validate::credentials_match(users, actor.user_id, actor.password_hash) {
        return Err(ApiError::DeleteUserBadActor);
    }
    if actor.user_id == target_id {
        return Err(ApiError::SelfDeleteForbidden);
    }
    if !users.remove(target_id) {
        return Err(ApiError::DeleteTargetNotFound(target_id));
    }

    bridge::save(backend, users)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hash_password;
    use crate::store::mem_backend::MemBackend;

    fn seeded_users() -> EntityStore<User> {
        let mut store = EntityStore::new();
        for (name, pass) in [("shadcn", "password"), ("disilverstein", "testpass!")] {
            let id = store.allocate();
            store.push(User::new(id, name, hash_password(pass)));
        }
        store
    }

    fn shadcn() -> Credentials {
        Credentials {
            user_id: 1,
            password_hash: hash_password("password"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn login_grants_known_credentials() {
        let backend = MemBackend::new();
        let mut users = seeded_users();

        let outcome = login(&mut users, &backend, "shadcn", hash_password("password"))
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::granted(1));
    }

    #[tokio::test(start_paused = true)]
    async fn login_tells_wrong_password_from_unknown_username() {
        let backend = MemBackend::new();
        let mut users = seeded_users();

        let wrong_pass = login(&mut users, &backend, "shadcn", hash_password("wrong"))
            .await
            .unwrap();
        assert!(!wrong_pass.valid_login);
        assert_eq!(wrong_pass.err_code, -6);
        assert_eq!(wrong_pass.user_id, -1);

        let no_user = login(&mut users, &backend, "nouser", hash_password("x"))
            .await
            .unwrap();
        assert!(!no_user.valid_login);
        assert_eq!(no_user.err_code, -7);
    }

    #[tokio::test(start_paused = true)]
    async fn login_sees_users_persisted_by_an_earlier_session() {
        let backend = MemBackend::new();
        bridge::save(&backend, &seeded_users()).unwrap();

        // Fresh session, empty store: the accounts come from the blob.
        let mut second = EntityStore::new();
        let outcome = login(&mut second, &backend, "shadcn", hash_password("password"))
            .await
            .unwrap();
        assert!(outcome.valid_login);
    }

    #[tokio::test(start_paused = true)]
    async fn create_rejects_duplicate_username_even_with_valid_actor() {
        let backend = MemBackend::new();
        let mut users = seeded_users();

        let err = create(
            &mut users,
            &backend,
            shadcn(),
            NewUser {
                username: "disilverstein".into(),
                password_hash: hash_password("whatever"),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code(), -8);
        assert_eq!(users.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn create_rejects_bad_acting_credentials() {
        let backend = MemBackend::new();
        let mut users = seeded_users();

        let err = create(
            &mut users,
            &backend,
            Credentials {
                user_id: 1,
                password_hash: 0,
            },
            NewUser {
                username: "newbie".into(),
                password_hash: 1,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code(), -9);
    }

    #[tokio::test(start_paused = true)]
    async fn create_appends_the_new_account() {
        let backend = MemBackend::new();
        let mut users = seeded_users();

        let user = create(
            &mut users,
            &backend,
            shadcn(),
            NewUser {
                username: "newbie".into(),
                password_hash: hash_password("hunter2"),
            },
        )
        .await
        .unwrap();

        assert_eq!(user.id, 3);
        assert!(!validate::username_is_unique(&users, "newbie"));
    }

    #[tokio::test(start_paused = true)]
    async fn password_change_checks_actor_target_then_old_hash() {
        let backend = MemBackend::new();
        let mut users = seeded_users();
        let change = |target_id, old, new| PasswordChange {
            target_id,
            old_hash: hash_password(old),
            new_hash: hash_password(new),
        };

        let bad_actor = Credentials {
            user_id: 9,
            password_hash: 0,
        };
        let err = update_password(&mut users, &backend, bad_actor, change(2, "testpass!", "n"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), -12);

        let err = update_password(&mut users, &backend, shadcn(), change(9, "testpass!", "n"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), -11);

        let err = update_password(&mut users, &backend, shadcn(), change(2, "nope", "n"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), -10);

        update_password(&mut users, &backend, shadcn(), change(2, "testpass!", "fresh"))
            .await
            .unwrap();
        assert_eq!(
            users.find(2).map(|u| u.password_hash),
            Some(hash_password("fresh"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn self_delete_is_forbidden_regardless_of_credentials() {
        let backend = MemBackend::new();
        let mut users = seeded_users();

        let err = delete(&mut users, &backend, shadcn(), 1).await.unwrap_err();
        assert_eq!(err.code(), -14);
        assert_eq!(users.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_removes_the_target_for_a_valid_actor() {
        let backend = MemBackend::new();
        let mut users = seeded_users();

        delete(&mut users, &backend, shadcn(), 2).await.unwrap();
        assert_eq!(users.len(), 1);
        assert!(users.find(2).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn delete_distinguishes_missing_target_from_bad_actor() {
        let backend = MemBackend::new();
        let mut users = seeded_users();

        let err = delete(&mut users, &backend, shadcn(), 9).await.unwrap_err();
        assert_eq!(err.code(), -13);

        let bad_actor = Credentials {
            user_id: 1,
            password_hash: 0,
        };
        let err = delete(&mut users, &backend, bad_actor, 2).await.unwrap_err();
        assert_eq!(err.code(), -15);
    }
}
