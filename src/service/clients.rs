//! Client endpoints: list, create, partial update. A "delete" from the UI
//! arrives here as `ClientPatch { active: Some(false), .. }` — the record is
//! never removed.

use tokio::time;

use super::{ClientPatch, NewClient, CREATE_CLIENT_DELAY, LIST_CLIENTS_DELAY, UPDATE_CLIENT_DELAY};
use crate::error::{ApiError, Result};
use crate::model::{Client, RecordId};
use crate::store::backend::BlobStore;
use crate::store::{bridge, EntityStore};

pub async fn list_all<B: BlobStore>(
    clients: &mut EntityStore<Client>,
    backend: &B,
) -> Result<Vec<Client>> {
    time::sleep(LIST_CLIENTS_DELAY).await;
    bridge::load(backend, clients)?;
    Ok(clients.records().to_vec())
}

/// Register a new, active client. Always succeeds: field presence is the
/// form's job, not ours.
pub async fn create<B: BlobStore>(
    clients: &mut EntityStore<Client>,
    backend: &B,
    new: NewClient,
) -> Result<Client> {
    time::sleep(CREATE_CLIENT_DELAY).await;

    let id = clients.allocate();
    let client = Client::new(id, new.name, new.address);
    clients.push(client.clone());
    bridge::save(backend, clients)?;
    Ok(client)
}

/// Apply a partial update. The only way this fails is an unknown client id.
pub async fn update<B: BlobStore>(
    clients: &mut EntityStore<Client>,
    backend: &B,
    id: RecordId,
    patch: ClientPatch,
) -> Result<Client> {
    time::sleep(UPDATE_CLIENT_DELAY).await;

    let Some(client) = clients.find_mut(id) else {
        return Err(ApiError::ClientNotFound(id));
    };
    if let Some(name) = patch.name {
        client.name = name;
    }
    if let Some(address) = patch.address {
        client.address = address;
    }
    if let Some(active) = patch.active {
        client.active = active;
    }
    let updated = client.clone();

    bridge::save(backend, clients)?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn new_client() -> NewClient {
        NewClient {
            name: "Daniel Silverstein".into(),
            address: "3053 N Southport".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn create_always_succeeds_and_starts_active() {
        let backend = MemBackend::new();
        let mut clients = EntityStore::new();

        let client = create(&mut clients, &backend, new_client()).await.unwrap();
        assert_eq!(client.id, 1);
        assert!(client.active);

        // Even an empty request goes through.
        let blank = create(
            &mut clients,
            &backend,
            NewClient {
                name: String::new(),
                address: String::new(),
            },
        )
        .await
        .unwrap();
        assert_eq!(blank.id, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn deactivate_keeps_the_record_listed() {
        let backend = MemBackend::new();
        let mut clients = EntityStore::new();
        create(&mut clients, &backend, new_client()).await.unwrap();

        let patch = ClientPatch {
            active: Some(false),
            ..Default::default()
        };
        let updated = update(&mut clients, &backend, 1, patch).await.unwrap();
        assert!(!updated.active);

        let listed = list_all(&mut clients, &backend).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(!listed[0].active);
    }

    #[tokio::test(start_paused = true)]
    async fn deactivated_client_can_be_reactivated() {
        let backend = MemBackend::new();
        let mut clients = EntityStore::new();
        create(&mut clients, &backend, new_client()).await.unwrap();

        for active in [false, true] {
            let patch = ClientPatch {
                active: Some(active),
                ..Default::default()
            };
            update(&mut clients, &backend, 1, patch).await.unwrap();
        }
        assert!(clients.find(1).unwrap().active);
    }

    #[tokio::test(start_paused = true)]
    async fn update_missing_client_fails_with_not_found() {
        let backend = MemBackend::new();
        let mut clients = EntityStore::new();

        let err = update(&mut clients, &backend, 4, ClientPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), -4);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_save_surfaces_as_store_error() {
        let backend = MemBackend::new();
        let mut clients = EntityStore::new();
        backend.set_simulate_write_error(true);

        let err = create(&mut clients, &backend, new_client())
            .await
            .unwrap_err();
        assert_eq!(err.code(), -5);
    }
}
