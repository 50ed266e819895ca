//! In-memory storage implementation.

use super::{Drawing, Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    drawings: RwLock<HashMap<String, Drawing>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, name: &str, drawing: &Drawing) -> StorageResult<()> {
        let mut drawings = self
            .drawings
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        drawings.insert(name.to_string(), drawing.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> StorageResult<Drawing> {
        let drawings = self
            .drawings
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        drawings
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        let mut drawings = self
            .drawings
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        drawings.remove(name);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let drawings = self
            .drawings
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(drawings.keys().cloned().collect())
    }

    fn exists(&self, name: &str) -> StorageResult<bool> {
        let drawings = self
            .drawings
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(drawings.contains_key(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        storage.save("board", &Drawing::from_shapes(&[])).unwrap();

        let loaded = storage.load("board").unwrap();
        assert!(loaded.shapes.is_empty());
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = storage.load("nonexistent");
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_exists_and_delete() {
        let storage = MemoryStorage::new();
        assert!(!storage.exists("board").unwrap());

        storage.save("board", &Drawing::from_shapes(&[])).unwrap();
        assert!(storage.exists("board").unwrap());

        storage.delete("board").unwrap();
        assert!(!storage.exists("board").unwrap());
        assert!(storage.list().unwrap().is_empty());
    }
}
