//! Canvas controller: owns the shape list and turns UI events into edits.

use crate::config::CanvasConfig;
use crate::history::History;
use crate::input::{KeyAction, KeyEvent, PointerEvent};
use crate::shapes::{SerializableColor, Shape, ShapeId, ShapeStyle};
use crate::storage::{Drawing, Storage, StorageResult, load_drawing, save_drawing};
use crate::surface::Surface;
use crate::tools::{Mode, ToolKind, ToolManager};
use kurbo::{Point, Size};
use std::path::Path;

/// The drawing canvas.
///
/// All state lives on this value; nothing is global. Every method runs to
/// completion synchronously on the caller's thread.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Shapes in paint order (back to front).
    shapes: Vec<Shape>,
    /// Undo/redo snapshots.
    history: History,
    /// Tool manager.
    pub tool_manager: ToolManager,
    /// Currently selected shape, if any.
    selected: Option<ShapeId>,
    /// Pointer position of the previous event, for drag deltas.
    last_pointer: Point,
    config: CanvasConfig,
    redraw_requested: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create an empty canvas with default settings.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Create an empty canvas from a configuration.
    pub fn with_config(config: CanvasConfig) -> Self {
        let history = config
            .max_history
            .map(History::with_max_depth)
            .unwrap_or_default();

        let mut tool_manager = ToolManager::new();
        tool_manager.current_style = ShapeStyle::new(config.stroke_color, config.stroke_width);
        tool_manager.text_content = config.text_content.clone();
        tool_manager.font_size = config.font_size;

        Self {
            shapes: Vec::new(),
            history,
            tool_manager,
            selected: None,
            last_pointer: Point::ZERO,
            config,
            redraw_requested: false,
        }
    }

    // --- Accessors ---------------------------------------------------------

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// ID of the selected shape.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// The selected shape.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.get_shape(id))
    }

    /// The shape currently being drawn.
    pub fn in_progress(&self) -> Option<&Shape> {
        self.tool_manager.preview()
    }

    /// Undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Settings the canvas was created with.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Current pointer mode.
    pub fn mode(&self) -> Mode {
        self.tool_manager.mode
    }

    /// Active drawing tool, if any.
    pub fn tool(&self) -> Option<ToolKind> {
        self.tool_manager.current_tool
    }

    /// Logical size of the drawing area, for sizing the host surface.
    pub fn size(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }

    /// Check if the canvas has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true once after any change that needs repainting.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    // --- Tool settings -----------------------------------------------------

    /// Activate a drawing tool (also switches to draw mode).
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool_manager.set_tool(tool);
    }

    /// Deactivate the drawing tool.
    pub fn clear_tool(&mut self) {
        self.tool_manager.clear_tool();
    }

    /// Switch between drawing and selecting.
    ///
    /// Leaving draw mode abandons any shape still being drawn.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != Mode::Draw && self.tool_manager.is_active() {
            self.tool_manager.cancel();
            self.request_redraw();
        }
        self.tool_manager.mode = mode;
    }

    /// Set the stroke color for new shapes and the one being drawn.
    pub fn set_color(&mut self, color: impl Into<SerializableColor>) {
        self.tool_manager.set_color(color.into());
        if self.tool_manager.is_active() {
            self.request_redraw();
        }
    }

    /// Set the stroke width for new shapes and the one being drawn.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.tool_manager.set_stroke_width(width);
        if self.tool_manager.is_active() {
            self.request_redraw();
        }
    }

    /// Content used by the text tool.
    pub fn set_text_content(&mut self, content: impl Into<String>) {
        self.tool_manager.text_content = content.into();
    }

    /// Font size used by the text tool.
    pub fn set_font_size(&mut self, font_size: f64) {
        self.tool_manager.font_size = font_size;
    }

    // --- Pointer and keyboard ----------------------------------------------

    /// Dispatch a pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Drag { position } => self.pointer_drag(position),
            PointerEvent::Up { position } => self.pointer_up(position),
        }
    }

    /// Dispatch a key event.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        match event.action() {
            Some(KeyAction::DeleteSelected) => {
                self.delete_selected();
            }
            Some(KeyAction::Undo) => self.undo(),
            None => {}
        }
    }

    /// Pointer pressed: start a shape, or hit-test for selection.
    pub fn pointer_down(&mut self, point: Point) {
        match self.tool_manager.mode {
            Mode::Draw => {
                if self.tool_manager.begin(point) {
                    self.clear_selection();
                } else {
                    log::warn!(
                        "No drawing tool selected, ignoring pointer down at ({}, {})",
                        point.x,
                        point.y
                    );
                }
            }
            Mode::Select => {
                self.select_at(point);
            }
        }
        self.last_pointer = point;
        self.request_redraw();
    }

    /// Pointer dragged: grow the shape being drawn, or move the selection.
    pub fn pointer_drag(&mut self, point: Point) {
        match self.tool_manager.mode {
            Mode::Draw => self.tool_manager.update(point),
            Mode::Select => {
                let delta = point - self.last_pointer;
                if let Some(id) = self.selected {
                    if let Some(shape) = self.get_shape_mut(id) {
                        shape.move_by(delta);
                    }
                }
            }
        }
        self.last_pointer = point;
        self.request_redraw();
    }

    /// Pointer released: finalize the drawn shape, or commit the moved selection.
    pub fn pointer_up(&mut self, point: Point) {
        match self.tool_manager.mode {
            Mode::Draw => {
                if let Some(shape) = self.tool_manager.end() {
                    log::debug!("Finalized {} {}", shape.kind_name(), shape.id());
                    self.shapes.push(shape);
                    self.history.commit(&self.shapes);
                }
            }
            Mode::Select => {
                if self.selected_shape().is_some() {
                    self.history.commit(&self.shapes);
                }
            }
        }
        self.last_pointer = point;
        self.request_redraw();
    }

    /// Select the first shape (in paint order) whose bounds contain `point`.
    ///
    /// Every other shape is deselected. Returns the hit, if any.
    pub fn select_at(&mut self, point: Point) -> Option<ShapeId> {
        let hit = self
            .shapes
            .iter()
            .find(|s| s.contains_point(point))
            .map(Shape::id);

        for shape in &mut self.shapes {
            shape.set_selected(Some(shape.id()) == hit);
        }
        self.selected = hit;

        match hit {
            Some(id) => log::debug!("Selected shape {}", id),
            None => log::debug!("Nothing at ({}, {})", point.x, point.y),
        }
        hit
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
        self.selected = None;
    }

    /// Remove the selected shape. Does not record an undo entry.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let id = self.selected?;
        let index = self
            .shapes
            .iter()
            .position(|s| s.id() == id && s.is_selected())?;

        self.selected = None;
        let removed = self.shapes.remove(index);
        log::debug!("Deleted {} {}", removed.kind_name(), id);
        self.request_redraw();
        Some(removed)
    }

    // --- History -----------------------------------------------------------

    /// Step back one committed edit.
    pub fn undo(&mut self) {
        let restored = self.history.undo(&self.shapes);
        self.replace_shapes(restored);
    }

    /// Re-apply the last undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(restored) => {
                self.replace_shapes(restored);
                true
            }
            None => false,
        }
    }

    /// Drop all shapes, history and any unfinished drawing.
    pub fn reset(&mut self) {
        self.shapes.clear();
        self.history.clear();
        self.tool_manager.cancel();
        self.selected = None;
        self.request_redraw();
    }

    fn replace_shapes(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        // Snapshots carry their shapes' selection flags.
        self.selected = self
            .shapes
            .iter()
            .find(|s| s.is_selected())
            .map(Shape::id);
        self.request_redraw();
    }

    // --- Rendering ---------------------------------------------------------

    /// Paint the background, every shape in order, then the shape being drawn.
    pub fn draw_all(&self, surface: &mut dyn Surface) {
        surface.clear(self.config.background.into());
        for shape in &self.shapes {
            shape.draw(surface);
        }
        if let Some(preview) = self.tool_manager.preview() {
            preview.draw(surface);
        }
    }

    // --- Persistence -------------------------------------------------------

    /// Write the shape list to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        let path = path.as_ref();
        match save_drawing(path, &Drawing::from_shapes(&self.shapes)) {
            Ok(()) => {
                log::info!("Saved {} shapes to {}", self.shapes.len(), path.display());
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save drawing: {}", e);
                Err(e)
            }
        }
    }

    /// Replace the shape list with one read from a JSON file.
    ///
    /// On failure the canvas is left as it was. History is not touched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StorageResult<()> {
        let path = path.as_ref();
        match load_drawing(path) {
            Ok(drawing) => {
                self.install(drawing);
                log::info!("Loaded {} shapes from {}", self.shapes.len(), path.display());
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load drawing: {}", e);
                Err(e)
            }
        }
    }

    /// Save the shape list into a storage backend under `name`.
    pub fn save_to(&self, storage: &dyn Storage, name: &str) -> StorageResult<()> {
        storage
            .save(name, &Drawing::from_shapes(&self.shapes))
            .inspect_err(|e| log::error!("Failed to save drawing {}: {}", name, e))
    }

    /// Load the shape list from a storage backend.
    pub fn load_from(&mut self, storage: &dyn Storage, name: &str) -> StorageResult<()> {
        let drawing = storage
            .load(name)
            .inspect_err(|e| log::error!("Failed to load drawing {}: {}", name, e))?;
        self.install(drawing);
        Ok(())
    }

    fn install(&mut self, drawing: Drawing) {
        self.tool_manager.cancel();
        self.replace_shapes(drawing.into_shapes());
    }
}
