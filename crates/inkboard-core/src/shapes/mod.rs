//! Shape definitions for the canvas.

mod circle;
mod freehand;
mod rectangle;
mod text;

pub use circle::Circle;
pub use freehand::Freehand;
pub use rectangle::Rectangle;
pub use text::Text;

use crate::surface::Surface;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::mem;
use uuid::Uuid;

/// Gap between a shape's bounds and the highlight drawn around it when selected.
pub const SELECTION_PADDING: f64 = 5.0;

/// Stroke width of the selection highlight.
pub const HIGHLIGHT_WIDTH: f64 = 1.5;

/// Color of the selection highlight.
pub fn highlight_color() -> Color {
    SerializableColor::blue().into()
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn blue() -> Self {
        Self::new(0, 0, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke properties shared by every shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
}

impl ShapeStyle {
    pub fn new(stroke_color: SerializableColor, stroke_width: f64) -> Self {
        Self {
            stroke_color,
            stroke_width,
        }
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 5.0,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Capabilities shared by all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;

    /// Whether the shape is currently selected.
    fn is_selected(&self) -> bool;

    /// Mark the shape as selected or not.
    fn set_selected(&mut self, selected: bool);

    /// Cached selection bounds, as of the last [`compute_selection_bounds`](Self::compute_selection_bounds).
    fn selection_bounds(&self) -> Rect;

    /// Selection bounds derived from the current geometry.
    fn measure_selection_bounds(&self) -> Rect;

    /// Refresh the cached selection bounds from geometry.
    fn compute_selection_bounds(&mut self);

    /// Translate the geometry.
    fn move_by(&mut self, delta: Vec2);

    /// Outline of the geometry for stroking.
    fn to_path(&self) -> BezPath;

    /// Paint the shape.
    fn draw(&self, surface: &mut dyn Surface);
}

/// Stroke the highlight rectangle around a selected shape's bounds.
pub(crate) fn draw_highlight(surface: &mut dyn Surface, bounds: Rect) {
    let outline = bounds
        .inflate(SELECTION_PADDING, SELECTION_PADDING)
        .to_path(0.1);
    surface.stroke(&outline, highlight_color(), HIGHLIGHT_WIDTH);
}

/// Enum wrapper for all shape types.
///
/// Serialized with an explicit `type` tag so saved drawings are a list of tagged records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Freehand(Freehand),
    Rectangle(Rectangle),
    Circle(Circle),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Freehand(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Freehand(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
            Shape::Circle(s) => s.style(),
            Shape::Text(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Freehand(s) => s.style_mut(),
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Circle(s) => s.style_mut(),
            Shape::Text(s) => s.style_mut(),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Shape::Freehand(s) => s.is_selected(),
            Shape::Rectangle(s) => s.is_selected(),
            Shape::Circle(s) => s.is_selected(),
            Shape::Text(s) => s.is_selected(),
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Shape::Freehand(s) => s.set_selected(selected),
            Shape::Rectangle(s) => s.set_selected(selected),
            Shape::Circle(s) => s.set_selected(selected),
            Shape::Text(s) => s.set_selected(selected),
        }
    }

    pub fn selection_bounds(&self) -> Rect {
        match self {
            Shape::Freehand(s) => s.selection_bounds(),
            Shape::Rectangle(s) => s.selection_bounds(),
            Shape::Circle(s) => s.selection_bounds(),
            Shape::Text(s) => s.selection_bounds(),
        }
    }

    pub fn measure_selection_bounds(&self) -> Rect {
        match self {
            Shape::Freehand(s) => s.measure_selection_bounds(),
            Shape::Rectangle(s) => s.measure_selection_bounds(),
            Shape::Circle(s) => s.measure_selection_bounds(),
            Shape::Text(s) => s.measure_selection_bounds(),
        }
    }

    pub fn compute_selection_bounds(&mut self) {
        match self {
            Shape::Freehand(s) => s.compute_selection_bounds(),
            Shape::Rectangle(s) => s.compute_selection_bounds(),
            Shape::Circle(s) => s.compute_selection_bounds(),
            Shape::Text(s) => s.compute_selection_bounds(),
        }
    }

    pub fn move_by(&mut self, delta: Vec2) {
        match self {
            Shape::Freehand(s) => s.move_by(delta),
            Shape::Rectangle(s) => s.move_by(delta),
            Shape::Circle(s) => s.move_by(delta),
            Shape::Text(s) => s.move_by(delta),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Freehand(s) => s.to_path(),
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
            Shape::Text(s) => s.to_path(),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Shape::Freehand(s) => s.draw(surface),
            Shape::Rectangle(s) => s.draw(surface),
            Shape::Circle(s) => s.draw(surface),
            Shape::Text(s) => s.draw(surface),
        }
    }

    /// Hit test against the cached selection bounds.
    ///
    /// Empty bounds (text, unfinished shapes) never contain anything.
    pub fn contains_point(&self, point: Point) -> bool {
        let bounds = self.selection_bounds();
        bounds.area() > 0.0 && bounds.contains(point)
    }

    /// Short lowercase name of the variant, matching the serialized tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Freehand(_) => "freehand",
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Text(_) => "text",
        }
    }
}

/// Loose value equality: same variant with identical selection bounds.
///
/// Two distinct shapes that happen to share bounds compare equal, so lookups
/// that must find one particular shape go through [`Shape::id`] instead.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
            && self.selection_bounds() == other.selection_bounds()
    }
}
