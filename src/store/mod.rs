//! # Storage Layer
//!
//! Two abstractions live here:
//!
//! 1. [`EntityStore`]: the in-memory ordered collection holding every record
//!    of one kind, with its private id allocator. One store per kind, each
//!    exclusively owning its records.
//! 2. [`backend::BlobStore`]: the string-keyed external blob store the
//!    persistence bridge writes to — the localStorage analogue. The bridge
//!    itself ([`bridge`]) serializes a store to one blob per kind and merges
//!    persisted blobs back in by id.
//!
//! ## Identifier Allocation
//!
//! Each store's counter is seeded at 1 and bumps on every successful
//! creation, including records appended during a persistence merge. The
//! counter is process-lifetime — it is deliberately **not** persisted, which
//! means a record re-appended after a restart can come back under a
//! different id than the one in the blob. See `bridge` for how the merge
//! handles that.
//!
//! No locking anywhere: the model is single-threaded cooperative access.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{EntityKind, RecordId};

pub mod backend;
pub mod bridge;
pub mod mem_backend;

/// A record that can live in an [`EntityStore`] and round-trip through the
/// persistence bridge.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Which kind this record is; fixes its blob-store key.
    const KIND: EntityKind;

    fn id(&self) -> RecordId;

    /// Overwrite every mutable field from a persisted twin, keeping the live
    /// id. Used when a merge finds a record already present in memory.
    fn absorb(&mut self, persisted: &Self);

    /// Copy of this record under a freshly issued id. Used when a merge
    /// appends a persisted record the live store has never seen.
    fn reissued(&self, id: RecordId) -> Self;
}

/// Ordered in-memory collection of one record kind.
///
/// Insertion order is preserved and is the order exposed to callers. Lookup
/// is a linear scan — the collections are dashboard-sized.
#[derive(Debug, Clone)]
pub struct EntityStore<R: Record> {
    records: Vec<R>,
    next_id: RecordId,
}

impl<R: Record> EntityStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Issue the next unique id. Monotonically increasing, never reused.
    pub fn allocate(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn find(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_mut(&mut self, id: RecordId) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Append a record. The caller is responsible for having allocated its
    /// id from this store.
    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// Remove the record with the given id, signalling whether one existed.
    /// Only the User store ever removes records.
    pub fn remove(&mut self, id: RecordId) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(pos) => {
                self.records.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for EntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
