//! Inkboard Core Library
//!
//! Shape model, undo/redo history and canvas controller for the Inkboard
//! drawing canvas. UI toolkits drive it through [`Canvas`] and paint it through
//! a [`Surface`] implementation.

pub mod canvas;
pub mod config;
pub mod history;
pub mod input;
pub mod shapes;
pub mod storage;
pub mod surface;
pub mod tools;

pub use canvas::Canvas;
pub use config::{CanvasConfig, ConfigError};
pub use history::History;
pub use input::{KeyAction, KeyEvent, PointerEvent};
pub use shapes::{SerializableColor, Shape, ShapeId, ShapeStyle, ShapeTrait};
pub use storage::{Drawing, Storage, StorageError, StorageResult};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use tools::{Mode, ToolKind, ToolManager};
