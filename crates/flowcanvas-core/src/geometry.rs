//! Bounding-box anchors for connector routing.

use crate::shapes::Shape;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Side of a bounding box an anchor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Unit vector pointing away from the shape on this side.
    pub fn outward(&self) -> Vec2 {
        match self {
            Side::Top => Vec2::new(0.0, -1.0),
            Side::Right => Vec2::new(1.0, 0.0),
            Side::Bottom => Vec2::new(0.0, 1.0),
            Side::Left => Vec2::new(-1.0, 0.0),
        }
    }
}

/// A connector anchor: the midpoint of one side of a shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Position in world coordinates.
    pub pos: Point,
    /// Which side of the bounding box this anchor sits on.
    pub side: Side,
}

impl Anchor {
    /// The bezier control point for this anchor, offset perpendicular to
    /// the side by `offset` units in the outward direction.
    pub fn control_point(&self, offset: f64) -> Point {
        self.pos + self.side.outward() * offset
    }
}

/// The four side-midpoint anchors of a shape's bounding box.
///
/// The order is fixed to `[top, right, bottom, left]`; the router relies on
/// it for deterministic tie-breaking between equidistant anchor pairs.
pub fn anchors(shape: &Shape) -> [Anchor; 4] {
    let bounds = shape.bounds();
    [
        Anchor {
            pos: Point::new(bounds.x0 + bounds.width() / 2.0, bounds.y0),
            side: Side::Top,
        },
        Anchor {
            pos: Point::new(bounds.x1, bounds.y0 + bounds.height() / 2.0),
            side: Side::Right,
        },
        Anchor {
            pos: Point::new(bounds.x0 + bounds.width() / 2.0, bounds.y1),
            side: Side::Bottom,
        },
        Anchor {
            pos: Point::new(bounds.x0, bounds.y0 + bounds.height() / 2.0),
            side: Side::Left,
        },
    ]
}
