//! Ellipse shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An ellipse, positioned by its center.
///
/// Two geometry encodings occur on the wire: dedicated `radiusX`/`radiusY`
/// fields, or a `width`/`height` box whose halves are the radii. When both
/// radii are present they win; otherwise the box encoding is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ellipse {
    pub id: ShapeId,
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Box-encoded width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Box-encoded height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Horizontal radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_x: Option<f64>,
    /// Vertical radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_y: Option<f64>,
    /// Rotation angle in degrees (around center).
    #[serde(default)]
    pub rotation: f64,
    /// Style properties.
    #[serde(flatten)]
    pub style: ShapeStyle,
}

impl Ellipse {
    /// Create a new box-encoded ellipse.
    pub fn new(id: impl Into<ShapeId>, center: Point, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x: center.x,
            y: center.y,
            width: Some(width),
            height: Some(height),
            radius_x: None,
            radius_y: None,
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    /// Create a new radius-encoded ellipse.
    pub fn with_radii(id: impl Into<ShapeId>, center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            id: id.into(),
            x: center.x,
            y: center.y,
            width: None,
            height: None,
            radius_x: Some(radius_x),
            radius_y: Some(radius_y),
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    /// Get the center point.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The effective radii, preferring `radiusX`/`radiusY` over the box
    /// encoding. Missing geometry resolves to zero.
    pub fn radii(&self) -> (f64, f64) {
        match (self.radius_x, self.radius_y) {
            (Some(rx), Some(ry)) => (rx, ry),
            _ => (
                self.width.unwrap_or(0.0) / 2.0,
                self.height.unwrap_or(0.0) / 2.0,
            ),
        }
    }

    /// Get the bounding box: center-based, using the effective radii.
    pub fn bounds(&self) -> Rect {
        let (rx, ry) = self.radii();
        Rect::new(self.x - rx, self.y - ry, self.x + rx, self.y + ry)
    }
}
