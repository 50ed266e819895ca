//! Rectangle shape.

use super::{SELECTION_PADDING, ShapeId, ShapeStyle, ShapeTrait, draw_highlight};
use crate::surface::Surface;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Style properties.
    pub style: ShapeStyle,
    #[serde(default)]
    pub(crate) selected: bool,
    #[serde(skip)]
    pub(crate) selection_bounds: Rect,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            style: ShapeStyle::default(),
            selected: false,
            selection_bounds: Rect::ZERO,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let mut rect = Self::new(p1, 0.0, 0.0);
        rect.set_corners(p1, p2);
        rect
    }

    /// Reshape to span two corners, taking the min corner and absolute extents.
    pub fn set_corners(&mut self, p1: Point, p2: Point) {
        self.position = Point::new(p1.x.min(p2.x), p1.y.min(p2.y));
        self.width = (p2.x - p1.x).abs();
        self.height = (p2.y - p1.y).abs();
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl ShapeTrait for Rectangle {
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
        self.selection_bounds
    }

    fn measure_selection_bounds(&self) -> Rect {
        self.as_rect().inflate(SELECTION_PADDING, SELECTION_PADDING)
    }

    fn compute_selection_bounds(&mut self) {
        self.selection_bounds = self.measure_selection_bounds();
    }

    fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
        self.compute_selection_bounds();
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.stroke(&self.to_path(), self.style.stroke(), self.style.stroke_width);
        if self.selected {
            draw_highlight(surface, self.measure_selection_bounds());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        assert!((rect.position.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 20.0).abs() < f64::EPSILON);
        assert!((rect.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rectangle_from_corners() {
        let rect = Rectangle::from_corners(Point::new(100.0, 100.0), Point::new(50.0, 50.0));
        assert!((rect.position.x - 50.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 50.0).abs() < f64::EPSILON);
        assert!((rect.width - 50.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_selection_bounds_are_padded() {
        let mut rect = Rectangle::from_corners(Point::new(10.0, 10.0), Point::new(50.0, 40.0));
        rect.compute_selection_bounds();
        let bounds = rect.selection_bounds();
        assert!((bounds.x0 - 5.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 5.0).abs() < f64::EPSILON);
        assert!((bounds.width() - 50.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move() {
        let mut rect = Rectangle::new(Point::new(10.0, 10.0), 40.0, 30.0);
        rect.move_by(Vec2::new(5.0, -5.0));
        assert!((rect.position.x - 15.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 5.0).abs() < f64::EPSILON);
        assert_eq!(rect.selection_bounds(), Rect::new(10.0, 0.0, 60.0, 40.0));
    }
}
