//! Connection routing between shapes.
//!
//! A routed connector is a cubic bezier whose endpoints are the closest
//! pair of bounding-box anchors on the two shapes, recomputed from current
//! geometry every time it is requested. Nothing here is cached: moving or
//! resizing either endpoint changes the next result.

use crate::geometry::{Anchor, anchors};
use crate::shapes::Shape;
use crate::store::{Connection, Document};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Perpendicular control-point offset from each anchor, in world units.
/// Controls how strongly the connector curves away from the shapes.
pub const CONTROL_POINT_OFFSET: f64 = 50.0;

/// The four points of a cubic bezier connector, drawn with an arrowhead
/// at the `end` anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPolygon {
    /// Anchor on the source shape.
    pub start: Point,
    /// Control point offset outward from the source anchor.
    pub start_control: Point,
    /// Control point offset outward from the target anchor.
    pub end_control: Point,
    /// Anchor on the target shape.
    pub end: Point,
}

impl ControlPolygon {
    /// The polygon as an ordered point array.
    pub fn points(&self) -> [Point; 4] {
        [self.start, self.start_control, self.end_control, self.end]
    }

    /// The polygon as the flat `[x0, y0, ..., x3, y3]` array most canvas
    /// renderers take for a cubic bezier.
    pub fn flattened(&self) -> [f64; 8] {
        [
            self.start.x,
            self.start.y,
            self.start_control.x,
            self.start_control.y,
            self.end_control.x,
            self.end_control.y,
            self.end.x,
            self.end.y,
        ]
    }
}

/// Pick the closest anchor pair between two shapes.
///
/// All 16 pairs are evaluated; ties are broken by the fixed
/// `[top, right, bottom, left]` anchor order (first minimum wins), which
/// keeps routing deterministic for test fixtures.
fn closest_anchor_pair(source: &Shape, target: &Shape) -> (Anchor, Anchor) {
    let source_anchors = anchors(source);
    let target_anchors = anchors(target);

    let mut best = (source_anchors[0], target_anchors[0]);
    let mut min_distance = f64::INFINITY;
    for start in source_anchors {
        for end in target_anchors {
            let distance = start.pos.distance(end.pos);
            if distance < min_distance {
                min_distance = distance;
                best = (start, end);
            }
        }
    }
    best
}

/// Route a connector between two shapes.
pub fn route(source: &Shape, target: &Shape) -> ControlPolygon {
    let (start, end) = closest_anchor_pair(source, target);
    ControlPolygon {
        start: start.pos,
        start_control: start.control_point(CONTROL_POINT_OFFSET),
        end_control: end.control_point(CONTROL_POINT_OFFSET),
        end: end.pos,
    }
}

/// Route a stored connection, resolving its endpoints in the document.
///
/// Returns `None` when either endpoint is missing: a dangling connection
/// produces no geometry and is simply not drawn.
pub fn route_connection(document: &Document, connection: &Connection) -> Option<ControlPolygon> {
    let source = document.get_shape(&connection.from)?;
    let target = document.get_shape(&connection.to)?;
    Some(route(source, target))
}
