//! Rectangle shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A rectangle, positioned by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub id: ShapeId,
    /// Top-left x.
    pub x: f64,
    /// Top-left y.
    pub y: f64,
    /// Width. Treated as zero at bounds time when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height. Treated as zero at bounds time when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Rotation angle in degrees (around center).
    #[serde(default)]
    pub rotation: f64,
    /// Style properties.
    #[serde(flatten)]
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(id: impl Into<ShapeId>, position: Point, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x: position.x,
            y: position.y,
            width: Some(width),
            height: Some(height),
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    /// Get the bounding box: corner-based.
    pub fn bounds(&self) -> Rect {
        let width = self.width.unwrap_or(0.0);
        let height = self.height.unwrap_or(0.0);
        Rect::new(self.x, self.y, self.x + width, self.y + height)
    }
}
