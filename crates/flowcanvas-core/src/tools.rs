//! Tool state machine for click interpretation.

use crate::shapes::ShapeId;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Click selects shapes; empty-canvas click deselects.
    #[default]
    Select,
    /// Two shape clicks create a connection between them.
    Connector,
}

/// What a click resolved to. The controller only decides; the editor
/// dispatches the resulting mutation to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Select the given shape, or clear the selection on `None`.
    Select(Option<ShapeId>),
    /// Create a connection between two shapes.
    Connect { from: ShapeId, to: ShapeId },
    /// Nothing to dispatch (e.g. first click of a connector gesture).
    None,
}

/// Interprets clicks according to the active tool.
///
/// With the connector tool active, the controller is the sole owner of the
/// pending-connection cursor: the first-clicked shape held while waiting
/// for a second click.
#[derive(Debug, Clone, Default)]
pub struct ToolController {
    tool: ToolKind,
    pending: Option<ShapeId>,
}

impl ToolController {
    /// Create a new controller with the select tool active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tool.
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// The shape awaiting a connector second click, if any.
    pub fn pending(&self) -> Option<&ShapeId> {
        self.pending.as_ref()
    }

    /// Switch tools. Any pending connector cursor is cleared
    /// unconditionally; it never survives a tool switch.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.pending = None;
    }

    /// Drop the pending connector cursor without switching tools.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Interpret a click on shape `id`.
    pub fn shape_click(&mut self, id: &ShapeId) -> ClickAction {
        match self.tool {
            ToolKind::Select => ClickAction::Select(Some(id.clone())),
            ToolKind::Connector => match self.pending.take() {
                // Clicking the pending shape again cancels the gesture.
                Some(pending) if pending == *id => ClickAction::None,
                Some(pending) => ClickAction::Connect {
                    from: pending,
                    to: id.clone(),
                },
                None => {
                    self.pending = Some(id.clone());
                    ClickAction::None
                }
            },
        }
    }

    /// Interpret a click on empty canvas.
    pub fn canvas_click(&mut self) -> ClickAction {
        self.pending = None;
        match self.tool {
            ToolKind::Select => ClickAction::Select(None),
            ToolKind::Connector => ClickAction::None,
        }
    }
}
