use std::cell::RefCell;
use std::collections::HashMap;

use super::backend::BlobStore;
use crate::error::{ApiError, Result};

/// In-process blob store standing in for browser localStorage.
///
/// Uses `RefCell` for interior mutability since the whole system is
/// single-threaded; borrows are only ever taken inside a single call, never
/// held across an await point. The write-error switch lets tests exercise
/// the service layer's failure paths.
pub struct MemBackend {
    blobs: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            blobs: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl BlobStore for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let blobs = self.blobs.borrow();
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ApiError::Store("simulated write error".to_string()));
        }
        let mut blobs = self.blobs.borrow_mut();
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_back_what_was_written() {
        let backend = MemBackend::new();
        backend.write("JobsDB", "[]").unwrap();
        assert_eq!(backend.read("JobsDB").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn missing_key_reads_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.read("ClientsDB").unwrap(), None);
    }

    #[test]
    fn write_overwrites_unconditionally() {
        let backend = MemBackend::new();
        backend.write("UsersDB", "first").unwrap();
        backend.write("UsersDB", "second").unwrap();
        assert_eq!(backend.read("UsersDB").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn simulated_write_error_surfaces_as_store_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);

        let err = backend.write("JobsDB", "[]").unwrap_err();
        assert!(matches!(err, ApiError::Store(_)));

        backend.set_simulate_write_error(false);
        assert!(backend.write("JobsDB", "[]").is_ok());
    }
}
