//! Paint target abstraction.
//!
//! The canvas never talks to a graphics toolkit directly. A UI layer implements
//! [`Surface`] on top of whatever 2D context it owns and hands it to
//! [`Canvas::draw_all`](crate::Canvas::draw_all).

use crate::shapes::SerializableColor;
use kurbo::{BezPath, Point};
use peniko::Color;

/// Something shapes can be painted onto.
pub trait Surface {
    /// Fill the whole surface with a single color.
    fn clear(&mut self, color: Color);

    /// Stroke a path outline.
    fn stroke(&mut self, path: &BezPath, color: Color, width: f64);

    /// Fill a run of text with its baseline origin at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, font_size: f64, color: Color);
}

/// A single recorded paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: SerializableColor,
    },
    Stroke {
        path: BezPath,
        color: SerializableColor,
        width: f64,
    },
    FillText {
        text: String,
        origin: Point,
        font_size: f64,
        color: SerializableColor,
    },
}

/// Surface that records paint calls instead of rasterizing them.
///
/// Useful for headless hosts and for asserting on what a frame would paint.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of stroke commands recorded.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        // A clear wipes whatever was painted before it.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            color: color.into(),
        });
    }

    fn stroke(&mut self, path: &BezPath, color: Color, width: f64) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            color: color.into(),
            width,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_size: f64, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            origin,
            font_size,
            color: color.into(),
        });
    }
}
