//! Persistence bridge: one JSON blob per entity kind, merge on load.
//!
//! ## Merge-on-load
//!
//! [`load`] reconciles the persisted blob into the live store by id:
//!
//! - Persisted record with a live twin → the twin's mutable fields are
//!   overwritten in place ([`Record::absorb`]).
//! - Persisted record with no live twin → appended under a **freshly
//!   allocated** id ([`Record::reissued`]). The persisted id is not reused,
//!   so an id referenced elsewhere (a job's `client_id`) can drift after a
//!   reload. The drift is accepted and documented rather than silently
//!   repaired.
//! - Live record absent from the blob → kept. Loading never prunes.
//!
//! Loading twice with no external change is therefore a no-op the second
//! time: every persisted record already has a live twin by id.
//!
//! [`save`] serializes the full record list and overwrites the blob.

use log::debug;

use super::backend::BlobStore;
use super::{EntityStore, Record};
use crate::error::Result;

/// Serialize the full store contents over the kind's blob, unconditionally.
///
/// Last writer wins when two contexts share one backend.
// TODO: serialize saves per key (a small write queue) so a stale in-flight
// operation cannot overwrite a newer blob.
pub fn save<R: Record, B: BlobStore>(backend: &B, store: &EntityStore<R>) -> Result<()> {
    let blob = serde_json::to_string(store.records())?;
    backend.write(R::KIND.storage_key(), &blob)?;
    debug!("saved {} {:?} records", store.len(), R::KIND);
    Ok(())
}

/// Read the kind's blob if present and merge it into the live store.
pub fn load<R: Record, B: BlobStore>(backend: &B, store: &mut EntityStore<R>) -> Result<()> {
    let Some(blob) = backend.read(R::KIND.storage_key())? else {
        return Ok(());
    };

    let persisted: Vec<R> = serde_json::from_str(&blob)?;
    for record in &persisted {
        match store.find_mut(record.id()) {
            Some(live) => live.absorb(record),
            None => {
                let id = store.allocate();
                store.push(record.reissued(id));
            }
        }
    }
    debug!(
        "merged {} persisted {:?} records, store now holds {}",
        persisted.len(),
        R::KIND,
        store.len()
    );
    Ok(())
}
