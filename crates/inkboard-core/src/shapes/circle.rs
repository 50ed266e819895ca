//! Circle shape.

use super::{ShapeId, ShapeStyle, ShapeTrait, draw_highlight};
use crate::surface::Surface;
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
    #[serde(default)]
    pub(crate) selected: bool,
    #[serde(skip)]
    pub(crate) selection_bounds: Rect,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius: radius.abs(),
            style: ShapeStyle::default(),
            selected: false,
            selection_bounds: Rect::ZERO,
        }
    }

    /// Set the radius so the circle passes through `point`.
    pub fn set_radius_to(&mut self, point: Point) {
        self.radius = self.center.distance(point);
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeTrait for Circle {
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

    // Unlike rectangles, the circle's box is not padded.
    fn measure_selection_bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn compute_selection_bounds(&mut self) {
        self.selection_bounds = self.measure_selection_bounds();
    }

    fn move_by(&mut self, delta: Vec2) {
        self.center += delta;
        self.compute_selection_bounds();
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
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
    fn test_circle_creation() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0);
        assert!((circle.center.x - 50.0).abs() < f64::EPSILON);
        assert!((circle.radius - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_radius_from_drag() {
        let mut circle = Circle::new(Point::new(0.0, 0.0), 0.0);
        circle.set_radius_to(Point::new(3.0, 4.0));
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_circumscribe() {
        let mut circle = Circle::new(Point::new(50.0, 50.0), 20.0);
        circle.compute_selection_bounds();
        let bounds = circle.selection_bounds();
        assert!((bounds.x0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 70.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move() {
        let mut circle = Circle::new(Point::new(0.0, 0.0), 10.0);
        circle.move_by(Vec2::new(10.0, 20.0));
        assert_eq!(circle.center, Point::new(10.0, 20.0));
        assert_eq!(circle.selection_bounds(), Rect::new(0.0, 10.0, 20.0, 30.0));
    }
}
