//! Document store for shapes and connections.

use crate::shapes::{Shape, ShapeId, ShapeUpdate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for connections.
pub type ConnectionId = String;

/// A directed reference between two shapes, rendered as a routed curve.
///
/// Endpoints are not validated on creation; a connection whose `from` or
/// `to` no longer resolves is skipped at routing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    /// Source shape id.
    pub from: ShapeId,
    /// Target shape id.
    pub to: ShapeId,
}

impl Connection {
    /// Create a new connection.
    pub fn new(
        id: impl Into<ConnectionId>,
        from: impl Into<ShapeId>,
        to: impl Into<ShapeId>,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("shape {0} already exists")]
    DuplicateShape(ShapeId),
    #[error("shape {0} not found")]
    ShapeNotFound(ShapeId),
    #[error("connection {0} not found")]
    ConnectionNotFound(ConnectionId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The diagram document: an ordered sequence of shapes plus connections.
///
/// Shape insertion order is paint order (last added draws on top).
/// Serializes to the flat `{"shapes": [...], "connections": [...]}` contract
/// used for save/load and scene merges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    shapes: Vec<Shape>,
    #[serde(default)]
    connections: Vec<Connection>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape at the top of the paint order.
    ///
    /// A shape whose id is already present is rejected rather than
    /// silently replaced.
    pub fn add_shape(&mut self, shape: Shape) -> StoreResult<()> {
        if self.shape_exists(shape.id()) {
            log::warn!("rejecting duplicate shape id {}", shape.id());
            return Err(StoreError::DuplicateShape(shape.id().clone()));
        }
        self.shapes.push(shape);
        Ok(())
    }

    /// Merge a partial update onto the matching shape.
    ///
    /// An unknown id is reported and leaves the document untouched.
    pub fn update_shape(&mut self, id: &str, update: &ShapeUpdate) -> StoreResult<()> {
        match self.shapes.iter_mut().find(|s| s.id() == id) {
            Some(shape) => {
                shape.apply(update);
                Ok(())
            }
            None => {
                log::warn!("update for unknown shape id {id}");
                Err(StoreError::ShapeNotFound(id.to_string()))
            }
        }
    }

    /// Remove a shape, cascading to every connection that references it.
    ///
    /// The cascade is mandatory: after this call no connection in the
    /// document points at the removed id.
    pub fn remove_shape(&mut self, id: &str) -> StoreResult<Shape> {
        let Some(pos) = self.shapes.iter().position(|s| s.id() == id) else {
            log::warn!("removal of unknown shape id {id}");
            return Err(StoreError::ShapeNotFound(id.to_string()));
        };
        let shape = self.shapes.remove(pos);
        self.connections.retain(|c| c.from != id && c.to != id);
        Ok(shape)
    }

    /// Add a connection. Endpoints are not validated here; routing skips
    /// connections whose endpoints do not resolve.
    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Remove a connection by id.
    pub fn remove_connection(&mut self, id: &str) -> StoreResult<Connection> {
        match self.connections.iter().position(|c| c.id == id) {
            Some(pos) => Ok(self.connections.remove(pos)),
            None => {
                log::warn!("removal of unknown connection id {id}");
                Err(StoreError::ConnectionNotFound(id.to_string()))
            }
        }
    }

    /// Empty the document: shapes and connections together.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.connections.clear();
    }

    /// Get a shape by id.
    pub fn get_shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Check if a shape id resolves.
    pub fn shape_exists(&self, id: &str) -> bool {
        self.shapes.iter().any(|s| s.id() == id)
    }

    /// Shapes in paint order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// All connections, in no significant order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the document holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON. Pre-existing dangling connections
    /// are tolerated; they are simply never routed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
