//! Persistence of drawings.
//!
//! A drawing is stored as JSON: a format version plus the ordered list of
//! shapes, each a record tagged with its `type`. Selection bounds are a cache
//! and are recomputed on load rather than stored.

mod file;
mod memory;

pub use file::{FileStorage, load_drawing, save_drawing};
pub use memory::MemoryStorage;

use crate::shapes::Shape;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Drawing not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Unsupported drawing version: {0}")]
    UnsupportedVersion(u32),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// The persisted form of a canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawing {
    pub version: u32,
    pub shapes: Vec<Shape>,
}

impl Drawing {
    /// Capture a shape list for saving.
    pub fn from_shapes(shapes: &[Shape]) -> Self {
        Self {
            version: FORMAT_VERSION,
            shapes: shapes.to_vec(),
        }
    }

    /// Hand back the shapes with their selection bounds recomputed.
    pub fn into_shapes(self) -> Vec<Shape> {
        let mut shapes = self.shapes;
        for shape in &mut shapes {
            shape.compute_selection_bounds();
        }
        shapes
    }

    /// Serialize the drawing to JSON.
    pub fn to_json(&self) -> StorageResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Deserialize a drawing from JSON, rejecting unknown format versions.
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let drawing: Self =
            serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;
        if drawing.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(drawing.version));
        }
        Ok(drawing)
    }
}

/// Trait for drawing storage backends, keyed by name.
pub trait Storage {
    /// Save a drawing.
    fn save(&self, name: &str, drawing: &Drawing) -> StorageResult<()>;

    /// Load a drawing.
    fn load(&self, name: &str) -> StorageResult<Drawing>;

    /// Delete a drawing.
    fn delete(&self, name: &str) -> StorageResult<()>;

    /// List all drawing names.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check if a drawing exists.
    fn exists(&self, name: &str) -> StorageResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Freehand, Rectangle, Text};
    use kurbo::{Point, Rect};

    #[test]
    fn test_json_round_trip_recomputes_bounds() {
        let mut rect = Rectangle::new(Point::new(10.0, 10.0), 40.0, 30.0);
        rect.selected = true;
        let shapes = vec![
            Shape::Freehand(Freehand::from_points(vec![
                Point::new(0.0, 0.0),
                Point::new(20.0, 10.0),
            ])),
            Shape::Rectangle(rect),
            Shape::Circle(Circle::new(Point::new(0.0, 0.0), 4.0)),
            Shape::Text(Text::new(Point::new(1.0, 1.0), "hi".to_string(), 12.0)),
        ];

        let json = Drawing::from_shapes(&shapes).to_json().unwrap();
        let loaded = Drawing::from_json(&json).unwrap().into_shapes();

        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded[1].id(), shapes[1].id());
        assert!(loaded[1].is_selected());
        assert_eq!(loaded[1].selection_bounds(), Rect::new(5.0, 5.0, 55.0, 45.0));
        assert_eq!(loaded[0].selection_bounds(), Rect::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(loaded[3].kind_name(), "text");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = Drawing::from_json("{\"version\": 1, \"shapes\": [{\"type\": \"hexagon\"}]}");
        assert!(matches!(result, Err(StorageError::Serialization(_))));

        let result = Drawing::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_unknown_version_rejected() {
        let result = Drawing::from_json("{\"version\": 7, \"shapes\": []}");
        assert!(matches!(result, Err(StorageError::UnsupportedVersion(7))));
    }
}
