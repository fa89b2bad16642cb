//! Gesture commit rules: drag-end and resize-end to shape updates.
//!
//! The engine consumes one-shot gesture value objects reported by the
//! rendering surface and owns all size semantics. The renderer must reset
//! its internal scale factors to 1 after committing a transform; no scale
//! state persists between gestures.

use crate::shapes::{Shape, ShapeUpdate};

/// Minimum shape extent, in world units. Resizes below this are clamped,
/// never rejected.
pub const MIN_SIZE: f64 = 5.0;

/// Minimum font size for text shapes.
pub const MIN_FONT_SIZE: f64 = 8.0;

/// End-of-resize gesture data as reported by the rendering surface.
///
/// `width`, `height` and `font_size` are the renderer's reported current
/// values; the scale factors are the ones it has not yet folded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformEnd {
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub font_size: Option<f64>,
}

impl Default for TransformEnd {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            width: None,
            height: None,
            font_size: None,
        }
    }
}

/// The update committed at the end of a drag: position only, size untouched.
pub fn drag_update(x: f64, y: f64) -> ShapeUpdate {
    ShapeUpdate::position(x, y)
}

/// Derive the update committed at the end of a resize gesture.
///
/// Size fields are derived per variant from the document's own last-known
/// geometry plus the reported gesture, with minimum-size clamps; position
/// and rotation always come from the gesture.
pub fn resize_update(shape: &Shape, gesture: &TransformEnd) -> ShapeUpdate {
    let mut update = ShapeUpdate {
        x: Some(gesture.x),
        y: Some(gesture.y),
        rotation: Some(gesture.rotation),
        ..ShapeUpdate::default()
    };

    match shape {
        Shape::Circle(circle) => {
            // Single isotropic factor, derived from the reported width.
            let width = gesture
                .width
                .unwrap_or_else(|| circle.radius.unwrap_or(0.0) * 2.0 * gesture.scale_x);
            update.radius = Some((width / 2.0).max(MIN_SIZE / 2.0));
        }
        Shape::Rectangle(rect) => {
            let width = gesture.width.or(rect.width).unwrap_or(0.0);
            let height = gesture.height.or(rect.height).unwrap_or(0.0);
            update.width = Some((width * gesture.scale_x).max(MIN_SIZE));
            update.height = Some((height * gesture.scale_y).max(MIN_SIZE));
        }
        Shape::Ellipse(ellipse) => match (ellipse.radius_x, ellipse.radius_y) {
            (Some(rx), Some(ry)) => {
                update.radius_x = Some((rx * gesture.scale_x).max(MIN_SIZE / 2.0));
                update.radius_y = Some((ry * gesture.scale_y).max(MIN_SIZE / 2.0));
            }
            _ => {
                let width = gesture.width.or(ellipse.width).unwrap_or(0.0);
                let height = gesture.height.or(ellipse.height).unwrap_or(0.0);
                update.width = Some((width * gesture.scale_x).max(MIN_SIZE));
                update.height = Some((height * gesture.scale_y).max(MIN_SIZE));
            }
        },
        Shape::Text(text) => {
            let font_size = gesture.font_size.unwrap_or(text.effective_font_size());
            update.font_size = Some((font_size * gesture.scale_y).max(MIN_FONT_SIZE));
        }
        // Lines only take the position/rotation commit.
        Shape::Line(_) => {}
    }

    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Ellipse, Line, Rectangle, Text};
    use kurbo::Point;

    fn gesture(scale_x: f64, scale_y: f64) -> TransformEnd {
        TransformEnd {
            x: 10.0,
            y: 20.0,
            rotation: 45.0,
            scale_x,
            scale_y,
            ..TransformEnd::default()
        }
    }

    #[test]
    fn test_rectangle_resize_scales_and_clamps() {
        let shape = Shape::Rectangle(Rectangle::new("r1", Point::new(0.0, 0.0), 100.0, 80.0));

        let update = resize_update(&shape, &gesture(2.0, 0.5));
        assert_eq!(update.width, Some(200.0));
        assert_eq!(update.height, Some(40.0));

        // width * sx = 2 is below MIN_SIZE and must clamp to 5
        let update = resize_update(&shape, &gesture(0.02, 1.0));
        assert_eq!(update.width, Some(MIN_SIZE));
    }

    #[test]
    fn test_circle_resize_from_reported_width() {
        let shape = Shape::Circle(Circle::new("c1", Point::new(0.0, 0.0), 40.0));

        let update = resize_update(
            &shape,
            &TransformEnd {
                width: Some(120.0),
                ..gesture(1.0, 1.0)
            },
        );
        assert_eq!(update.radius, Some(60.0));

        // Tiny reported width clamps at MIN_SIZE / 2
        let update = resize_update(
            &shape,
            &TransformEnd {
                width: Some(1.0),
                ..gesture(1.0, 1.0)
            },
        );
        assert_eq!(update.radius, Some(MIN_SIZE / 2.0));
    }

    #[test]
    fn test_ellipse_radius_encoding_clamped() {
        let shape = Shape::Ellipse(Ellipse::with_radii("e1", Point::new(0.0, 0.0), 60.0, 40.0));

        let update = resize_update(&shape, &gesture(2.0, 0.01));
        assert_eq!(update.radius_x, Some(120.0));
        assert_eq!(update.radius_y, Some(MIN_SIZE / 2.0));
        // The radius encoding stays in its own fields
        assert!(update.width.is_none());
    }

    #[test]
    fn test_ellipse_box_encoding() {
        let shape = Shape::Ellipse(Ellipse::new("e1", Point::new(0.0, 0.0), 120.0, 80.0));

        let update = resize_update(&shape, &gesture(0.5, 0.5));
        assert_eq!(update.width, Some(60.0));
        assert_eq!(update.height, Some(40.0));
        assert!(update.radius_x.is_none());
    }

    #[test]
    fn test_text_resize_scales_font() {
        let shape = Shape::Text(Text::new("t1", Point::new(0.0, 0.0), "hello"));

        let update = resize_update(&shape, &gesture(1.0, 2.0));
        assert_eq!(update.font_size, Some(32.0));

        let update = resize_update(&shape, &gesture(1.0, 0.1));
        assert_eq!(update.font_size, Some(MIN_FONT_SIZE));
    }

    #[test]
    fn test_line_resize_commits_position_only() {
        let shape = Shape::Line(Line::new("l1", Point::new(0.0, 0.0), vec![0.0, 0.0, 50.0, 50.0]));

        let update = resize_update(&shape, &gesture(2.0, 2.0));
        assert_eq!(update.x, Some(10.0));
        assert_eq!(update.rotation, Some(45.0));
        assert!(update.width.is_none());
        assert!(update.points.is_none());
    }

    #[test]
    fn test_drag_update_is_position_only() {
        let update = drag_update(33.0, 44.0);
        assert_eq!(update.x, Some(33.0));
        assert_eq!(update.y, Some(44.0));
        assert!(update.rotation.is_none());
        assert!(update.width.is_none());
    }
}
