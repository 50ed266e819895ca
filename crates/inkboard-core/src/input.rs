//! Pointer and keyboard events forwarded by the UI layer.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Drag { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Drag { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// What a key press asks the canvas to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    DeleteSelected,
    Undo,
}

impl KeyEvent {
    /// Map a key press to a canvas action. Releases never act.
    pub fn action(&self) -> Option<KeyAction> {
        match self {
            KeyEvent::Pressed(key) => match key.as_str() {
                "Delete" | "Backspace" => Some(KeyAction::DeleteSelected),
                "z" | "Z" => Some(KeyAction::Undo),
                _ => None,
            },
            KeyEvent::Released(_) => None,
        }
    }
}
