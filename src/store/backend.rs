use crate::error::Result;

/// Abstract interface for the string-keyed external blob store.
///
/// This is the localStorage analogue: whole-value reads and writes under
/// fixed keys, one blob per entity kind. The persistence bridge decides what
/// goes in the blobs; implementations only move strings.
pub trait BlobStore {
    /// Read the blob under `key`. `Ok(None)` if nothing was ever written
    /// there; `Err` only on actual storage failure.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob under `key` unconditionally.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
