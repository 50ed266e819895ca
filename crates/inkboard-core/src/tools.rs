//! Tool system for the canvas.

use crate::shapes::{Circle, Freehand, Rectangle, SerializableColor, Shape, ShapeStyle, Text};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Pen,
    Rectangle,
    Circle,
    Text,
}

impl ToolKind {
    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::Pen => "Pen",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Text => "Text",
        }
    }

    /// Get all available tools.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Pen,
            ToolKind::Rectangle,
            ToolKind::Circle,
            ToolKind::Text,
        ]
    }
}

/// What pointer events do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Pointer events create shapes with the active tool.
    #[default]
    Draw,
    /// Pointer events select and drag existing shapes.
    Select,
}

/// State of a drawing interaction.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Tool is idle, waiting for interaction.
    #[default]
    Idle,
    /// A shape is being drawn.
    Active {
        /// Where the pointer went down.
        start: Point,
        /// Latest pointer position.
        current: Point,
        /// The in-progress shape.
        preview: Shape,
    },
}

/// Manages the current tool, its defaults and the in-progress shape.
#[derive(Debug, Clone)]
pub struct ToolManager {
    /// Currently selected tool, if any.
    pub current_tool: Option<ToolKind>,
    /// Draw or select.
    pub mode: Mode,
    /// Current state of the tool.
    pub state: ToolState,
    /// Style applied to new shapes.
    pub current_style: ShapeStyle,
    /// Content for new text shapes.
    pub text_content: String,
    /// Font size for new text shapes.
    pub font_size: f64,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self {
            current_tool: None,
            mode: Mode::default(),
            state: ToolState::default(),
            current_style: ShapeStyle::default(),
            text_content: String::new(),
            font_size: Text::DEFAULT_FONT_SIZE,
        }
    }
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a tool. Picking a tool always switches back to drawing.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = Some(tool);
        self.mode = Mode::Draw;
        self.state = ToolState::Idle;
    }

    /// Deactivate the current tool.
    pub fn clear_tool(&mut self) {
        self.current_tool = None;
        self.state = ToolState::Idle;
    }

    /// Change the stroke color for new shapes and the in-progress one.
    pub fn set_color(&mut self, color: SerializableColor) {
        self.current_style.stroke_color = color;
        if let Some(preview) = self.preview_mut() {
            preview.style_mut().stroke_color = color;
        }
    }

    /// Change the stroke width for new shapes and the in-progress one.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.current_style.stroke_width = width;
        if let Some(preview) = self.preview_mut() {
            preview.style_mut().stroke_width = width;
        }
    }

    /// Begin drawing with the current tool.
    ///
    /// Returns false (and leaves the state untouched) when no tool is active.
    /// An interaction already in progress is replaced.
    pub fn begin(&mut self, point: Point) -> bool {
        let Some(tool) = self.current_tool else {
            return false;
        };

        if self.is_active() {
            log::debug!("Discarding unfinished {} stroke", tool.display_name());
        }

        let mut preview = match tool {
            ToolKind::Pen => Shape::Freehand(Freehand::from_points(vec![point])),
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::from_corners(point, point)),
            ToolKind::Circle => Shape::Circle(Circle::new(point, 0.0)),
            ToolKind::Text => Shape::Text(Text::new(
                point,
                self.text_content.clone(),
                self.font_size,
            )),
        };
        *preview.style_mut() = self.current_style.clone();

        self.state = ToolState::Active {
            start: point,
            current: point,
            preview,
        };
        true
    }

    /// Update the in-progress shape with the latest pointer position.
    pub fn update(&mut self, point: Point) {
        let ToolState::Active {
            start,
            current,
            preview,
        } = &mut self.state
        else {
            return;
        };
        *current = point;

        match preview {
            Shape::Freehand(freehand) => freehand.add_point(point),
            Shape::Rectangle(rect) => rect.set_corners(*start, point),
            Shape::Circle(circle) => circle.set_radius_to(point),
            Shape::Text(_) => {}
        }
    }

    /// Finish the interaction, returning the finalized shape.
    pub fn end(&mut self) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            ToolState::Active { mut preview, .. } => {
                preview.compute_selection_bounds();
                Some(preview)
            }
            ToolState::Idle => None,
        }
    }

    /// Abandon the interaction without producing a shape.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
    }

    /// Check if a shape is currently being drawn.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Active { .. })
    }

    /// The in-progress shape, if any.
    pub fn preview(&self) -> Option<&Shape> {
        match &self.state {
            ToolState::Active { preview, .. } => Some(preview),
            ToolState::Idle => None,
        }
    }

    fn preview_mut(&mut self) -> Option<&mut Shape> {
        match &mut self.state {
            ToolState::Active { preview, .. } => Some(preview),
            ToolState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_tool_switches_to_draw() {
        let mut tools = ToolManager::new();
        tools.mode = Mode::Select;
        tools.set_tool(ToolKind::Circle);
        assert_eq!(tools.mode, Mode::Draw);
        assert_eq!(tools.current_tool, Some(ToolKind::Circle));
    }

    #[test]
    fn test_begin_without_tool_is_ignored() {
        let mut tools = ToolManager::new();
        assert!(!tools.begin(Point::new(1.0, 1.0)));
        assert!(!tools.is_active());
    }

    #[test]
    fn test_rectangle_drag_normalizes() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Rectangle);
        tools.begin(Point::new(50.0, 40.0));
        tools.update(Point::new(10.0, 10.0));

        match tools.end() {
            Some(Shape::Rectangle(rect)) => {
                assert_eq!(rect.position, Point::new(10.0, 10.0));
                assert!((rect.width - 40.0).abs() < f64::EPSILON);
                assert!((rect.height - 30.0).abs() < f64::EPSILON);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
        assert!(!tools.is_active());
    }

    #[test]
    fn test_circle_radius_is_distance_from_start() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Circle);
        tools.begin(Point::new(10.0, 10.0));
        tools.update(Point::new(13.0, 14.0));

        match tools.preview() {
            Some(Shape::Circle(circle)) => {
                assert_eq!(circle.center, Point::new(10.0, 10.0));
                assert!((circle.radius - 5.0).abs() < f64::EPSILON);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_pen_appends_points() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Pen);
        tools.begin(Point::new(0.0, 0.0));
        tools.update(Point::new(1.0, 1.0));
        tools.update(Point::new(2.0, 0.0));

        match tools.end() {
            Some(Shape::Freehand(freehand)) => assert_eq!(freehand.len(), 3),
            other => panic!("expected freehand, got {other:?}"),
        }
    }

    #[test]
    fn test_text_uses_current_defaults() {
        let mut tools = ToolManager::new();
        tools.text_content = "note".to_string();
        tools.font_size = 22.0;
        tools.set_tool(ToolKind::Text);
        tools.begin(Point::new(5.0, 5.0));
        tools.update(Point::new(50.0, 50.0));

        match tools.end() {
            Some(Shape::Text(text)) => {
                assert_eq!(text.content, "note");
                assert_eq!(text.position, Point::new(5.0, 5.0));
                assert!((text.font_size - 22.0).abs() < f64::EPSILON);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_style_changes_reach_preview() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Pen);
        tools.begin(Point::new(0.0, 0.0));
        tools.set_color(SerializableColor::new(255, 0, 0, 255));
        tools.set_stroke_width(9.0);

        let preview = tools.preview().unwrap();
        assert_eq!(preview.style().stroke_color, SerializableColor::new(255, 0, 0, 255));
        assert!((preview.style().stroke_width - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_begin_replaces_unfinished_shape() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Pen);
        tools.begin(Point::new(0.0, 0.0));
        tools.update(Point::new(5.0, 5.0));
        tools.begin(Point::new(9.0, 9.0));

        match tools.preview() {
            Some(Shape::Freehand(freehand)) => {
                assert_eq!(freehand.points, vec![Point::new(9.0, 9.0)]);
            }
            other => panic!("expected freehand, got {other:?}"),
        }
    }
}
