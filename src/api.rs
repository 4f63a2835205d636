//! # API Facade
//!
//! [`Dashboard`] is the single entry point the presentation layer talks to.
//! It owns the three entity stores and the blob backend, and exposes one
//! async method per mock endpoint, delegating to the [`crate::service`]
//! functions.
//!
//! The facade holds no logic of its own: validation and mutation live in the
//! service layer, persistence in the store layer. What it adds is lifecycle —
//! one `Dashboard` per process (or per test), constructed either [`empty`]
//! or [`seeded`] with the demo data the UI ships with.
//!
//! Operations take `&mut self`, so two operations on the same dashboard are
//! serialized by the borrow checker; there is nothing to lock.
//!
//! [`empty`]: Dashboard::empty
//! [`seeded`]: Dashboard::seeded

use crate::error::Result;
use crate::model::{hash_password, Client, Job, RecordId, User, UNASSIGNED_CLIENT};
use crate::service;
use crate::store::backend::BlobStore;
use crate::store::mem_backend::MemBackend;
use crate::store::EntityStore;

/// The mock-API context: three stores, one id allocator each, one backend.
pub struct Dashboard<B: BlobStore> {
    jobs: EntityStore<Job>,
    clients: EntityStore<Client>,
    users: EntityStore<User>,
    backend: B,
}

impl Dashboard<MemBackend> {
    /// Blank stores over an in-process backend. Test fixtures start here.
    pub fn empty() -> Self {
        Self::with_backend(MemBackend::new())
    }

    /// The demo state the UI ships with: three jobs, three clients, and the
    /// two admin accounts (`shadcn` / `disilverstein`).
    pub fn seeded() -> Self {
        Self::seeded_with(MemBackend::new())
    }
}

impl<B: BlobStore> Dashboard<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            jobs: EntityStore::new(),
            clients: EntityStore::new(),
            users: EntityStore::new(),
            backend,
        }
    }

    pub fn seeded_with(backend: B) -> Self {
        let mut dash = Self::with_backend(backend);

        for (name, address) in [
            ("Daniel Silverstein", "3053 N Southport"),
            ("Adam Meyer", "Somewhere, Utah"),
            (
                "Worcester Polytechnic Institute",
                "100 Institute rd, Worcester, MA, 01609",
            ),
        ] {
            let id = dash.clients.allocate();
            dash.clients.push(Client::new(id, name, address));
        }

        for (technician, reason, client_id) in [
            ("James Murphy", "Fridge is broken", 1),
            ("Michael Madsen", "HVAC pump not in place", 2),
            ("Maria Quiroz", "Lightbulb replacement", UNASSIGNED_CLIENT),
        ] {
            let id = dash.jobs.allocate();
            dash.jobs.push(Job::new(id, technician, reason, client_id));
        }

        for (username, password) in [("shadcn", "password"), ("disilverstein", "testpass!")] {
            let id = dash.users.allocate();
            dash.users.push(User::new(id, username, hash_password(password)));
        }

        dash
    }

    /// Give the backend back, e.g. to start a second "session" over the same
    /// persisted state.
    pub fn into_backend(self) -> B {
        self.backend
    }

    // --- Jobs ---

    pub async fn list_jobs(&mut self) -> Result<Vec<Job>> {
        service::jobs::list_all(&mut self.jobs, &self.backend).await
    }

    pub async fn create_job(&mut self, new: service::NewJob) -> Result<Job> {
        service::jobs::create(&mut self.jobs, &self.clients, &self.backend, new).await
    }

    pub async fn update_job(&mut self, id: RecordId, patch: service::JobPatch) -> Result<Job> {
        service::jobs::update(&mut self.jobs, &self.clients, &self.backend, id, patch).await
    }

    // --- Clients ---

    pub async fn list_clients(&mut self) -> Result<Vec<Client>> {
        service::clients::list_all(&mut self.clients, &self.backend).await
    }

    pub async fn create_client(&mut self, new: service::NewClient) -> Result<Client> {
        service::clients::create(&mut self.clients, &self.backend, new).await
    }

    pub async fn update_client(
        &mut self,
        id: RecordId,
        patch: service::ClientPatch,
    ) -> Result<Client> {
        service::clients::update(&mut self.clients, &self.backend, id, patch).await
    }

    // --- Users ---

    pub async fn login(
        &mut self,
        username: &str,
        password_hash: i32,
    ) -> Result<service::LoginOutcome> {
        service::users::login(&mut self.users, &self.backend, username, password_hash).await
    }

    pub async fn list_users(&mut self) -> Result<Vec<User>> {
        service::users::list_all(&mut self.users, &self.backend).await
    }

    pub async fn create_user(
        &mut self,
        actor: service::Credentials,
        new: service::NewUser,
    ) -> Result<User> {
        service::users::create(&mut self.users, &self.backend, actor, new).await
    }

    pub async fn update_password(
        &mut self,
        actor: service::Credentials,
        change: service::PasswordChange,
    ) -> Result<()> {
        service::users::update_password(&mut self.users, &self.backend, actor, change).await
    }

    pub async fn delete_user(
        &mut self,
        actor: service::Credentials,
        target_id: RecordId,
    ) -> Result<()> {
        service::users::delete(&mut self.users, &self.backend, actor, target_id).await
    }
}

pub use crate::service::{
    ClientPatch, Credentials, JobPatch, LoginOutcome, NewClient, NewJob, NewUser, PasswordChange,
};
