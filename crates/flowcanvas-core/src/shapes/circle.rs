//! Circle shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A circle, positioned by its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub id: ShapeId,
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Radius. A missing radius is treated as zero at bounds time, so a
    /// shape created before a partial geometry update is tolerated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Rotation angle in degrees (around center).
    #[serde(default)]
    pub rotation: f64,
    /// Style properties.
    #[serde(flatten)]
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle.
    pub fn new(id: impl Into<ShapeId>, center: Point, radius: f64) -> Self {
        Self {
            id: id.into(),
            x: center.x,
            y: center.y,
            radius: Some(radius),
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    /// Get the center point.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the bounding box: center-based, `2r` on a side.
    pub fn bounds(&self) -> Rect {
        let r = self.radius.unwrap_or(0.0);
        Rect::new(self.x - r, self.y - r, self.x + r, self.y + r)
    }
}
