//! FlowCanvas Core Library
//!
//! Platform-agnostic document model and interaction logic for the
//! FlowCanvas diagram editor: shapes and connections, the click/tool state
//! machine, connector routing, and gesture commit rules. Rendering,
//! hit-testing and drag capture live in the host and talk to this crate
//! through the [`editor::Editor`] event surface.

pub mod editor;
pub mod factory;
pub mod geometry;
pub mod router;
pub mod shapes;
pub mod store;
pub mod tools;
pub mod transform;

pub use editor::Editor;
pub use geometry::{Anchor, Side, anchors};
pub use router::{CONTROL_POINT_OFFSET, ControlPolygon, route, route_connection};
pub use shapes::{Circle, Ellipse, Line, Rectangle, Shape, ShapeId, ShapeStyle, ShapeUpdate, Text};
pub use store::{Connection, ConnectionId, Document, StoreError, StoreResult};
pub use tools::{ClickAction, ToolController, ToolKind};
pub use transform::{MIN_FONT_SIZE, MIN_SIZE, TransformEnd, drag_update, resize_update};
