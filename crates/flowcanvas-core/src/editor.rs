//! Editor state and gesture event surface.
//!
//! Everything here runs synchronously in response to one gesture callback
//! from the rendering surface; mutations apply in strict event order.

use crate::router::{ControlPolygon, route_connection};
use crate::shapes::{Shape, ShapeId, ShapeUpdate};
use crate::store::{Connection, ConnectionId, Document, StoreResult};
use crate::tools::{ClickAction, ToolController, ToolKind};
use crate::transform::{TransformEnd, drag_update, resize_update};
use uuid::Uuid;

/// Default canvas size before the host reports a real viewport.
const DEFAULT_CANVAS_SIZE: (f64, f64) = (800.0, 600.0);

/// The full editor state: the document plus transient UI state.
///
/// The document owns all shape and connection records; the tool controller
/// owns only the pending-connection cursor. Selection and the active tool
/// reset to safe defaults whenever their referent goes away.
#[derive(Debug, Clone)]
pub struct Editor {
    /// The document being edited.
    pub document: Document,
    tools: ToolController,
    selected_shape_id: Option<ShapeId>,
    canvas_width: f64,
    canvas_height: f64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create a new editor with an empty document.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            tools: ToolController::new(),
            selected_shape_id: None,
            canvas_width: DEFAULT_CANVAS_SIZE.0,
            canvas_height: DEFAULT_CANVAS_SIZE.1,
        }
    }

    /// Create an editor over an existing document (load or scene merge).
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            ..Self::new()
        }
    }

    /// The currently selected shape, if any.
    pub fn selected_shape_id(&self) -> Option<&ShapeId> {
        self.selected_shape_id.as_ref()
    }

    /// The active tool.
    pub fn active_tool(&self) -> ToolKind {
        self.tools.tool()
    }

    /// The shape awaiting a connector second click, if any.
    pub fn pending_connection(&self) -> Option<&ShapeId> {
        self.tools.pending()
    }

    /// Canvas size as last reported by the host.
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    // --- commands exposed to toolbars and scene merges ---

    /// Add a shape at the top of the paint order.
    pub fn add_shape(&mut self, shape: Shape) -> StoreResult<()> {
        self.document.add_shape(shape)
    }

    /// Merge a partial update onto a shape.
    pub fn update_shape(&mut self, id: &str, update: &ShapeUpdate) -> StoreResult<()> {
        self.document.update_shape(id, update)
    }

    /// Remove a shape, its connections, and any selection pointing at it.
    pub fn remove_shape(&mut self, id: &str) -> StoreResult<Shape> {
        let shape = self.document.remove_shape(id)?;
        if self.selected_shape_id.as_deref() == Some(id) {
            self.selected_shape_id = None;
        }
        Ok(shape)
    }

    /// Add a connection.
    pub fn add_connection(&mut self, connection: Connection) {
        self.document.add_connection(connection);
    }

    /// Remove a connection by id.
    pub fn remove_connection(&mut self, id: &str) -> StoreResult<Connection> {
        self.document.remove_connection(id)
    }

    /// Empty the canvas: shapes, connections, selection, pending cursor.
    pub fn clear_canvas(&mut self) {
        self.document.clear();
        self.selected_shape_id = None;
        self.tools.clear_pending();
    }

    /// Select a shape, or clear the selection with `None`. Selecting an id
    /// that does not resolve clears the selection instead.
    pub fn select_shape(&mut self, id: Option<ShapeId>) {
        self.selected_shape_id = id.filter(|id| self.document.shape_exists(id));
    }

    /// Switch the active tool. Any pending connector cursor is dropped.
    pub fn set_active_tool(&mut self, tool: ToolKind) {
        self.tools.set_tool(tool);
    }

    /// Record the canvas viewport size.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    // --- gesture callbacks from the rendering surface ---

    /// A click landed on shape `id`.
    pub fn on_shape_click(&mut self, id: &ShapeId) {
        match self.tools.shape_click(id) {
            ClickAction::Select(selection) => self.select_shape(selection),
            ClickAction::Connect { from, to } => {
                let connection = Connection::new(new_connection_id(), from, to);
                log::debug!(
                    "connector gesture created {} ({} -> {})",
                    connection.id,
                    connection.from,
                    connection.to
                );
                self.document.add_connection(connection);
            }
            ClickAction::None => {}
        }
    }

    /// A click landed on empty canvas.
    pub fn on_stage_click(&mut self) {
        if let ClickAction::Select(selection) = self.tools.canvas_click() {
            self.select_shape(selection);
        }
    }

    /// A drag gesture ended: commit the new position, nothing else.
    pub fn on_drag_end(&mut self, id: &str, x: f64, y: f64) {
        // Unknown ids are already logged by the store; the gesture is dropped.
        let _ = self.document.update_shape(id, &drag_update(x, y));
    }

    /// A resize gesture ended: derive per-variant size fields and commit.
    pub fn on_transform_end(&mut self, id: &str, gesture: &TransformEnd) {
        let Some(shape) = self.document.get_shape(id) else {
            log::warn!("transform end for unknown shape id {id}");
            return;
        };
        let update = resize_update(shape, gesture);
        let _ = self.document.update_shape(id, &update);
    }

    /// The host window was resized.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.set_canvas_size(width, height);
    }

    // --- derived visuals ---

    /// Routed control polygons for every live connection, recomputed from
    /// current shape geometry. Dangling connections are skipped.
    pub fn connector_paths(&self) -> Vec<(&ConnectionId, ControlPolygon)> {
        self.document
            .connections()
            .iter()
            .filter_map(|c| route_connection(&self.document, c).map(|p| (&c.id, p)))
            .collect()
    }
}

/// Fresh id for a connection created by the connector gesture.
fn new_connection_id() -> ConnectionId {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::anchors;
    use crate::shapes::{Circle, Rectangle};
    use kurbo::Point;

    fn editor_with_two_shapes() -> Editor {
        let mut editor = Editor::new();
        editor
            .add_shape(Shape::Circle(Circle::new(
                "c1",
                Point::new(100.0, 100.0),
                40.0,
            )))
            .unwrap();
        editor
            .add_shape(Shape::Rectangle(Rectangle::new(
                "r1",
                Point::new(250.0, 80.0),
                120.0,
                80.0,
            )))
            .unwrap();
        editor
    }

    #[test]
    fn test_select_tool_click_selects() {
        let mut editor = editor_with_two_shapes();
        editor.on_shape_click(&"c1".to_string());
        assert_eq!(editor.selected_shape_id(), Some(&"c1".to_string()));

        editor.on_stage_click();
        assert!(editor.selected_shape_id().is_none());
    }

    #[test]
    fn test_connector_scenario() {
        let mut editor = editor_with_two_shapes();
        editor.set_active_tool(ToolKind::Connector);

        // First click arms the gesture, second click on the same shape
        // cancels without creating anything.
        editor.on_shape_click(&"c1".to_string());
        assert_eq!(editor.pending_connection(), Some(&"c1".to_string()));
        editor.on_shape_click(&"c1".to_string());
        assert!(editor.pending_connection().is_none());
        assert!(editor.document.connections().is_empty());

        // A then B creates exactly one connection and returns to idle.
        editor.on_shape_click(&"c1".to_string());
        editor.on_shape_click(&"r1".to_string());
        assert!(editor.pending_connection().is_none());
        assert_eq!(editor.document.connections().len(), 1);
        let conn = &editor.document.connections()[0];
        assert_eq!(conn.from, "c1");
        assert_eq!(conn.to, "r1");
    }

    #[test]
    fn test_tool_switch_drops_pending() {
        let mut editor = editor_with_two_shapes();
        editor.set_active_tool(ToolKind::Connector);
        editor.on_shape_click(&"c1".to_string());

        editor.set_active_tool(ToolKind::Select);
        assert!(editor.pending_connection().is_none());
    }

    #[test]
    fn test_remove_selected_shape_resets_selection() {
        let mut editor = editor_with_two_shapes();
        editor.select_shape(Some("c1".to_string()));

        editor.remove_shape("c1").unwrap();
        assert!(editor.selected_shape_id().is_none());

        // Removing an unselected shape keeps the selection.
        editor.select_shape(Some("r1".to_string()));
        assert!(editor.remove_shape("ghost").is_err());
        assert_eq!(editor.selected_shape_id(), Some(&"r1".to_string()));
    }

    #[test]
    fn test_select_unknown_shape_clears_selection() {
        let mut editor = editor_with_two_shapes();
        editor.select_shape(Some("ghost".to_string()));
        assert!(editor.selected_shape_id().is_none());
    }

    #[test]
    fn test_drag_end_commits_position_only() {
        let mut editor = editor_with_two_shapes();
        editor.on_drag_end("r1", 300.0, 200.0);

        let bounds = editor.document.get_shape("r1").unwrap().bounds();
        assert!((bounds.x0 - 300.0).abs() < f64::EPSILON);
        assert!((bounds.width() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transform_end_clamps() {
        let mut editor = editor_with_two_shapes();
        editor.on_transform_end(
            "r1",
            &TransformEnd {
                x: 250.0,
                y: 80.0,
                scale_x: 0.02, // 120 * 0.02 = 2.4, below the minimum
                scale_y: 1.0,
                ..TransformEnd::default()
            },
        );

        let bounds = editor.document.get_shape("r1").unwrap().bounds();
        assert!((bounds.width() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transform_end_unknown_shape_is_noop() {
        let mut editor = editor_with_two_shapes();
        let before = editor.document.clone();
        editor.on_transform_end("ghost", &TransformEnd::default());
        assert_eq!(editor.document, before);
    }

    #[test]
    fn test_end_to_end_routing() {
        let mut editor = editor_with_two_shapes();
        editor.add_connection(Connection::new("k1", "c1", "r1"));

        let paths = editor.connector_paths();
        assert_eq!(paths.len(), 1);
        let (id, polygon) = &paths[0];
        assert_eq!(*id, "k1");

        // First and last points are anchors of the respective shapes, and
        // the pair is the globally closest of the 16 candidates.
        let source = editor.document.get_shape("c1").unwrap();
        let target = editor.document.get_shape("r1").unwrap();
        assert!(anchors(source).iter().any(|a| a.pos == polygon.start));
        assert!(anchors(target).iter().any(|a| a.pos == polygon.end));
        assert_eq!(polygon.start, Point::new(140.0, 100.0));
        assert_eq!(polygon.end, Point::new(250.0, 120.0));
    }

    #[test]
    fn test_dangling_connection_skipped_in_paths() {
        let mut editor = editor_with_two_shapes();
        editor.add_connection(Connection::new("k1", "c1", "r1"));
        editor.add_connection(Connection::new("k2", "c1", "ghost"));

        assert_eq!(editor.connector_paths().len(), 1);
    }

    #[test]
    fn test_clear_canvas_empties_everything() {
        let mut editor = editor_with_two_shapes();
        editor.add_connection(Connection::new("k1", "c1", "r1"));
        editor.select_shape(Some("c1".to_string()));
        editor.set_active_tool(ToolKind::Connector);
        editor.on_shape_click(&"r1".to_string());

        editor.clear_canvas();

        assert!(editor.document.is_empty());
        assert!(editor.document.connections().is_empty());
        assert!(editor.selected_shape_id().is_none());
        assert!(editor.pending_connection().is_none());
        // The active tool itself survives; only transient referents reset.
        assert_eq!(editor.active_tool(), ToolKind::Connector);
    }

    #[test]
    fn test_on_resize_updates_canvas() {
        let mut editor = Editor::new();
        editor.on_resize(1920.0, 1080.0);
        assert_eq!(editor.canvas_size(), (1920.0, 1080.0));
    }

    #[test]
    fn test_updates_after_removal_are_reported_noops() {
        let mut editor = editor_with_two_shapes();
        editor.remove_shape("r1").unwrap();
        let before = editor.document.clone();

        let err = editor
            .update_shape("r1", &ShapeUpdate::position(999.0, 0.0))
            .unwrap_err();
        assert_eq!(
            err,
            crate::store::StoreError::ShapeNotFound("r1".to_string())
        );
        assert_eq!(editor.document, before);
    }
}
