//! Default-styled shape constructors for toolbar insertion.

use crate::shapes::{Circle, Ellipse, Line, Rectangle, Shape, Text};
use kurbo::Point;
use uuid::Uuid;

/// Default stroke width for factory shapes.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// A fill/stroke color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// Color presets for quick shape creation.
pub const COLOR_PRESETS: &[(&str, ColorPreset)] = &[
    ("red", ColorPreset { fill: "#FF6B6B", stroke: "#C92A2A" }),
    ("blue", ColorPreset { fill: "#4DABF7", stroke: "#1971C2" }),
    ("green", ColorPreset { fill: "#51CF66", stroke: "#2F9E44" }),
    ("yellow", ColorPreset { fill: "#FFD43B", stroke: "#F59F00" }),
    ("purple", ColorPreset { fill: "#CC5DE8", stroke: "#9C36B5" }),
    ("orange", ColorPreset { fill: "#FF922B", stroke: "#E8590C" }),
    ("teal", ColorPreset { fill: "#20C997", stroke: "#0CA678" }),
    ("pink", ColorPreset { fill: "#F06595", stroke: "#C2255C" }),
    ("gray", ColorPreset { fill: "#ADB5BD", stroke: "#495057" }),
    ("slate", ColorPreset { fill: "#F1F5F9", stroke: "#64748B" }),
];

/// Generate a unique shape id, prefixed with the variant name for
/// readability in saved documents.
pub fn generate_shape_id(kind: &str) -> String {
    format!("{kind}-{}", Uuid::new_v4())
}

/// Create a circle with the default toolbar style (red preset, r = 40).
pub fn create_circle(center: Point) -> Shape {
    let mut circle = Circle::new(generate_shape_id("circle"), center, 40.0);
    circle.style.fill = Some("#FF6B6B".to_string());
    circle.style.stroke = Some("#C92A2A".to_string());
    circle.style.stroke_width = Some(DEFAULT_STROKE_WIDTH);
    Shape::Circle(circle)
}

/// Create a rectangle with the default toolbar style (teal, 100 x 80).
pub fn create_rectangle(position: Point) -> Shape {
    let mut rect = Rectangle::new(generate_shape_id("rectangle"), position, 100.0, 80.0);
    rect.style.fill = Some("#4ECDC4".to_string());
    rect.style.stroke = Some("#0D7377".to_string());
    rect.style.stroke_width = Some(DEFAULT_STROKE_WIDTH);
    Shape::Rectangle(rect)
}

/// Create an ellipse with the default toolbar style (purple, 120 x 80).
pub fn create_ellipse(center: Point) -> Shape {
    let mut ellipse = Ellipse::new(generate_shape_id("ellipse"), center, 120.0, 80.0);
    ellipse.style.fill = Some("#9C27B0".to_string());
    ellipse.style.stroke = Some("#6A1B9A".to_string());
    ellipse.style.stroke_width = Some(DEFAULT_STROKE_WIDTH);
    Shape::Ellipse(ellipse)
}

/// Create a line with the default toolbar style (blue stroke).
pub fn create_line(origin: Point, points: Vec<f64>) -> Shape {
    let mut line = Line::new(generate_shape_id("line"), origin, points);
    line.style.stroke = Some("#2196F3".to_string());
    line.style.stroke_width = Some(DEFAULT_STROKE_WIDTH);
    Shape::Line(line)
}

/// Create a text shape with the default toolbar style (16px Arial, black).
pub fn create_text(position: Point, text: impl Into<String>) -> Shape {
    let mut shape = Text::new(generate_shape_id("text"), position, text);
    shape.font_family = Some("Arial".to_string());
    shape.style.fill = Some("#000000".to_string());
    Shape::Text(shape)
}
