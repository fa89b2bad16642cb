//! Shape definitions for the diagram editor.

mod circle;
mod ellipse;
mod line;
mod rectangle;
mod text;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::{Text, DEFAULT_FONT_SIZE};

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Unique identifier for shapes. Caller-generated, never reused.
pub type ShapeId = String;

/// Style properties shared by every shape variant.
///
/// All fields are optional; absent values fall back to variant-specific
/// defaults at render time, not at creation time. Colors are CSS color
/// strings as they appear on the wire (e.g. `"#FF6B6B"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Stroke width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl ShapeStyle {
    /// Merge the style fields of a partial update onto this style.
    fn merge(&mut self, update: &ShapeUpdate) {
        if let Some(fill) = &update.fill {
            self.fill = Some(fill.clone());
        }
        if let Some(stroke) = &update.stroke {
            self.stroke = Some(stroke.clone());
        }
        if let Some(width) = update.stroke_width {
            self.stroke_width = Some(width);
        }
        if let Some(opacity) = update.opacity {
            self.opacity = Some(opacity);
        }
    }
}

/// A partial shape update, merged shallowly onto an existing shape.
///
/// Only the provided fields are applied; fields a variant does not carry
/// are ignored (updating `radius` on a rectangle is a no-op).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Rotation in degrees.
    pub rotation: Option<f64>,
    pub radius: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub radius_x: Option<f64>,
    pub radius_y: Option<f64>,
    pub points: Option<Vec<f64>>,
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl ShapeUpdate {
    /// Update that moves a shape without touching its size.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }
}

/// Enum wrapper for all shape variants.
///
/// Serializes to the flat tagged form used by the document contract:
/// `{"type": "circle", "id": ..., "x": ..., "radius": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
    Ellipse(Ellipse),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> &ShapeId {
        match self {
            Shape::Circle(s) => &s.id,
            Shape::Rectangle(s) => &s.id,
            Shape::Line(s) => &s.id,
            Shape::Ellipse(s) => &s.id,
            Shape::Text(s) => &s.id,
        }
    }

    /// Get the axis-aligned bounding box in world coordinates.
    ///
    /// Circles and ellipses are positioned by their center; every other
    /// variant is positioned by its top-left corner. Connector anchors are
    /// derived from this box, so the convention matters.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    /// Get the rotation angle in degrees.
    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.rotation,
            Shape::Rectangle(s) => s.rotation,
            Shape::Line(s) => s.rotation,
            Shape::Ellipse(s) => s.rotation,
            Shape::Text(s) => s.rotation,
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Circle(s) => &s.style,
            Shape::Rectangle(s) => &s.style,
            Shape::Line(s) => &s.style,
            Shape::Ellipse(s) => &s.style,
            Shape::Text(s) => &s.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Circle(s) => &mut s.style,
            Shape::Rectangle(s) => &mut s.style,
            Shape::Line(s) => &mut s.style,
            Shape::Ellipse(s) => &mut s.style,
            Shape::Text(s) => &mut s.style,
        }
    }

    /// Apply a partial update, merging only the fields this variant carries.
    pub fn apply(&mut self, update: &ShapeUpdate) {
        match self {
            Shape::Circle(s) => {
                merge_common(&mut s.x, &mut s.y, &mut s.rotation, update);
                if update.radius.is_some() {
                    s.radius = update.radius;
                }
                s.style.merge(update);
            }
            Shape::Rectangle(s) => {
                merge_common(&mut s.x, &mut s.y, &mut s.rotation, update);
                if update.width.is_some() {
                    s.width = update.width;
                }
                if update.height.is_some() {
                    s.height = update.height;
                }
                s.style.merge(update);
            }
            Shape::Line(s) => {
                merge_common(&mut s.x, &mut s.y, &mut s.rotation, update);
                if let Some(points) = &update.points {
                    s.points = points.clone();
                }
                s.style.merge(update);
            }
            Shape::Ellipse(s) => {
                merge_common(&mut s.x, &mut s.y, &mut s.rotation, update);
                if update.width.is_some() {
                    s.width = update.width;
                }
                if update.height.is_some() {
                    s.height = update.height;
                }
                if update.radius_x.is_some() {
                    s.radius_x = update.radius_x;
                }
                if update.radius_y.is_some() {
                    s.radius_y = update.radius_y;
                }
                s.style.merge(update);
            }
            Shape::Text(s) => {
                merge_common(&mut s.x, &mut s.y, &mut s.rotation, update);
                if update.width.is_some() {
                    s.width = update.width;
                }
                if update.height.is_some() {
                    s.height = update.height;
                }
                if let Some(text) = &update.text {
                    s.text = text.clone();
                }
                if update.font_size.is_some() {
                    s.font_size = update.font_size;
                }
                if let Some(family) = &update.font_family {
                    s.font_family = Some(family.clone());
                }
                s.style.merge(update);
            }
        }
    }
}

fn merge_common(x: &mut f64, y: &mut f64, rotation: &mut f64, update: &ShapeUpdate) {
    if let Some(new_x) = update.x {
        *x = new_x;
    }
    if let Some(new_y) = update.y {
        *y = new_y;
    }
    if let Some(new_rotation) = update.rotation {
        *rotation = new_rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_apply_position_update() {
        let mut shape = Shape::Rectangle(Rectangle::new("r1", Point::new(0.0, 0.0), 100.0, 80.0));
        shape.apply(&ShapeUpdate::position(25.0, 50.0));

        let bounds = shape.bounds();
        assert!((bounds.x0 - 25.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.width() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_ignores_foreign_fields() {
        // A radius update on a rectangle must leave its geometry untouched.
        let mut shape = Shape::Rectangle(Rectangle::new("r1", Point::new(0.0, 0.0), 100.0, 80.0));
        let before = shape.clone();
        shape.apply(&ShapeUpdate {
            radius: Some(99.0),
            font_size: Some(99.0),
            ..ShapeUpdate::default()
        });
        assert_eq!(shape, before);
    }

    #[test]
    fn test_apply_merges_style() {
        let mut shape = Shape::Circle(Circle::new("c1", Point::new(0.0, 0.0), 40.0));
        shape.apply(&ShapeUpdate {
            fill: Some("#FF6B6B".to_string()),
            ..ShapeUpdate::default()
        });
        assert_eq!(shape.style().fill.as_deref(), Some("#FF6B6B"));
        // Unspecified style fields stay untouched
        assert!(shape.style().stroke.is_none());
    }

    #[test]
    fn test_tagged_serialization() {
        let shape = Shape::Circle(Circle::new("c1", Point::new(100.0, 100.0), 40.0));
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "circle");
        assert_eq!(json["id"], "c1");
        assert_eq!(json["x"], 100.0);
        assert_eq!(json["radius"], 40.0);
    }

    #[test]
    fn test_deserialize_partial_shape() {
        // Shapes with missing optional geometry must still load.
        let json = r#"{"type": "circle", "id": "c1", "x": 10.0, "y": 20.0}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.id(), "c1");
        let bounds = shape.bounds();
        assert!((bounds.width()).abs() < f64::EPSILON);
    }
}
