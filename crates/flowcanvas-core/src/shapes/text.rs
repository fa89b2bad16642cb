//! Text shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Font size applied when a text shape carries none.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// A text box, positioned by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub id: ShapeId,
    /// Top-left x.
    pub x: f64,
    /// Top-left y.
    pub y: f64,
    /// The text content.
    pub text: String,
    /// Font size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Font family name (e.g. `"Arial"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Layout box width, when the renderer has reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Layout box height, when the renderer has reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Rotation angle in degrees (around center).
    #[serde(default)]
    pub rotation: f64,
    /// Style properties.
    #[serde(flatten)]
    pub style: ShapeStyle,
}

impl Text {
    /// Create a new text shape.
    pub fn new(id: impl Into<ShapeId>, position: Point, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: position.x,
            y: position.y,
            text: text.into(),
            font_size: Some(DEFAULT_FONT_SIZE),
            font_family: None,
            width: None,
            height: None,
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    /// The effective font size, falling back to [`DEFAULT_FONT_SIZE`].
    pub fn effective_font_size(&self) -> f64 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Get the bounding box: corner-based, zero-sized until the renderer
    /// reports a layout box.
    pub fn bounds(&self) -> Rect {
        let width = self.width.unwrap_or(0.0);
        let height = self.height.unwrap_or(0.0);
        Rect::new(self.x, self.y, self.x + width, self.y + height)
    }
}
