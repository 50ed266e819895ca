//! Text shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use crate::surface::Surface;
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A run of text anchored at its baseline origin.
///
/// Text has no selection bounds, so it can never be hit-tested, selected or
/// dragged through the select tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    /// Baseline origin of the text.
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Style properties. The stroke color is used as the fill color.
    pub style: ShapeStyle,
    #[serde(default)]
    pub(crate) selected: bool,
}

impl Text {
    /// Default font size for new text.
    pub const DEFAULT_FONT_SIZE: f64 = 14.0;

    /// Create a new text shape.
    pub fn new(position: Point, content: String, font_size: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_size,
            style: ShapeStyle::default(),
            selected: false,
        }
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn selection_bounds(&self) -> Rect {
        Rect::ZERO
    }

    fn measure_selection_bounds(&self) -> Rect {
        Rect::ZERO
    }

    fn compute_selection_bounds(&mut self) {}

    fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn to_path(&self) -> BezPath {
        BezPath::new()
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if self.content.is_empty() {
            return;
        }
        surface.fill_text(&self.content, self.position, self.font_size, self.style.stroke());
    }
}
