//! File-based storage.

use super::{Drawing, Storage, StorageError, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a drawing to `path` as JSON.
pub fn save_drawing(path: impl AsRef<Path>, drawing: &Drawing) -> StorageResult<()> {
    let path = path.as_ref();
    let json = drawing.to_json()?;
    fs::write(path, json)
        .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

/// Read a drawing from a JSON file at `path`.
pub fn load_drawing(path: impl AsRef<Path>) -> StorageResult<Drawing> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(StorageError::NotFound(path.display().to_string()));
    }

    let json = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    Drawing::from_json(&json).map_err(|e| match e {
        StorageError::Serialization(msg) => {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Stores drawings as JSON files in a directory.
pub struct FileStorage {
    /// Base directory for drawing storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/inkboard/drawings/`
    /// On Windows: `%LOCALAPPDATA%\inkboard\drawings\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("inkboard").join("drawings"))
    }

    /// Get the file path for a drawing name.
    fn drawing_path(&self, name: &str) -> PathBuf {
        let safe_name: String = name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_name))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&self, name: &str, drawing: &Drawing) -> StorageResult<()> {
        save_drawing(self.drawing_path(name), drawing)
    }

    fn load(&self, name: &str) -> StorageResult<Drawing> {
        let path = self.drawing_path(name);
        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        load_drawing(path)
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        let path = self.drawing_path(name);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        Ok(names)
    }

    fn exists(&self, name: &str) -> StorageResult<bool> {
        Ok(self.drawing_path(name).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, Shape};
    use kurbo::Point;
    use tempfile::tempdir;

    fn sample() -> Drawing {
        Drawing::from_shapes(&[Shape::Rectangle(Rectangle::new(
            Point::new(1.0, 2.0),
            3.0,
            4.0,
        ))])
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");

        save_drawing(&path, &sample()).unwrap();
        let loaded = load_drawing(&path).unwrap();
        assert_eq!(loaded.shapes.len(), 1);
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempdir().unwrap();
        let result = load_drawing(dir.path().join("nope.json"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_load_garbage_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "not a drawing").unwrap();
        let result = load_drawing(&path);
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_file_storage_list() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.save("first", &sample()).unwrap();
        storage.save("second", &sample()).unwrap();

        let list = storage.list().unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains(&"first".to_string()));
        assert!(list.contains(&"second".to_string()));
    }

    #[test]
    fn test_file_storage_delete() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.save("test", &sample()).unwrap();
        assert!(storage.exists("test").unwrap());

        storage.delete("test").unwrap();
        assert!(!storage.exists("test").unwrap());
        assert!(matches!(storage.load("test"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_file_storage_sanitizes_name() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.save("sketch/v2:final*", &sample()).unwrap();
        let loaded = storage.load("sketch/v2:final*").unwrap();
        assert_eq!(loaded.shapes.len(), 1);
        assert!(storage.base_path().join("sketch_v2_final_.json").exists());
    }
}
