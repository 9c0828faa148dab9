//! Error types for canvas operations.
//!
//! The taxonomy is deliberately narrow: every condition here is recoverable
//! and degrades to "no-op this event" at the input-handling layer. There are
//! no fatal errors in this core.

use crate::node::NodeId;
use thiserror::Error;

/// Errors that can occur while servicing an input event.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// A bounding-box query was made before the host reported the node's
    /// rendered extent. Aborts the current overlap pass, not the session.
    #[error("node {0} has no measured extent yet")]
    UnmeasuredNode(NodeId),

    /// An event was routed to a node that is no longer in the collection,
    /// e.g. one deleted mid-drag.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
}

/// Result type alias for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;
