//! Line shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A polyline, positioned by its origin with a flat `[x0, y0, x1, y1, ...]`
/// point sequence relative to that origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: ShapeId,
    /// Origin x.
    pub x: f64,
    /// Origin y.
    pub y: f64,
    /// Flat coordinate sequence, relative to the origin.
    #[serde(default)]
    pub points: Vec<f64>,
    /// Rotation angle in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Style properties.
    #[serde(flatten)]
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(id: impl Into<ShapeId>, origin: Point, points: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            x: origin.x,
            y: origin.y,
            points,
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    /// Get the bounding box. Lines carry no width/height, so the box
    /// collapses to the origin; the point sequence does not extend it.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_bounds_collapse_to_origin() {
        let line = Line::new("l1", Point::new(30.0, 40.0), vec![0.0, 0.0, 100.0, 50.0]);
        let bounds = line.bounds();
        assert!((bounds.x0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 40.0).abs() < f64::EPSILON);
        assert!(bounds.width().abs() < f64::EPSILON);
        assert!(bounds.height().abs() < f64::EPSILON);
    }
}
