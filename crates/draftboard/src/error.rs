//! Error types for Draftboard operations.
//!
//! This module provides the main error type [`DraftboardError`] which wraps
//! the error conditions that can occur while rendering diagrams.

use std::io;

use thiserror::Error;

use draftboard_core::identifier::Id;

/// The main error type for Draftboard operations.
///
/// # Unresolved Renderers
///
/// [`DraftboardError::UnresolvedRenderer`] means a shape names a renderer
/// key that was never registered. It is a configuration error of whoever
/// produced the diagram, and it aborts the reconciliation pass it occurs
/// in: shapes rendered earlier in the pass stay on the scene, later shapes
/// are not rendered.
#[derive(Debug, Error)]
pub enum DraftboardError {
    #[error("No renderer registered for `{renderer}` (shape `{shape}`)")]
    UnresolvedRenderer { renderer: String, shape: Id },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl DraftboardError {
    /// Create a new `UnresolvedRenderer` error.
    pub fn unresolved_renderer(renderer: impl Into<String>, shape: Id) -> Self {
        Self::UnresolvedRenderer {
            renderer: renderer.into(),
            shape,
        }
    }
}
