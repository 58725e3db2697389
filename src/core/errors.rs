//! Error handling
//!
//! Application-level code uses anyhow. Faults raised by the layer mutation
//! primitives are typed so the removal engine can tell a per-layer index
//! problem (skip the layer) from anything else (abort the operation).

pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::{Context, Result};
use thiserror::Error;

/// Result type alias for convenience throughout the application
pub type LayerSyncResult<T> = Result<T>;

/// A structural fault raised while addressing elements of one layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerFault {
    #[error("path index {path} out of range (layer has {count} paths)")]
    PathOutOfRange { path: usize, count: usize },

    #[error("node index {node} out of range in path {path} (path has {count} nodes)")]
    NodeOutOfRange {
        path: usize,
        node: usize,
        count: usize,
    },

    #[error("component index {index} out of range (layer has {count} components)")]
    ComponentOutOfRange { index: usize, count: usize },

    #[error("hint index {index} out of range (layer has {count} hints)")]
    HintOutOfRange { index: usize, count: usize },

    #[error("layer '{0}' not found")]
    LayerNotFound(String),

    #[error("glyph '{0}' not found")]
    GlyphNotFound(String),
}

/// Helper functions for creating common error contexts
pub trait LayerSyncContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> LayerSyncResult<T>;

    /// Add glyph operation context to an error
    fn with_glyph_context(self, operation: &str, glyph_name: &str) -> LayerSyncResult<T>;
}

impl<T, E> LayerSyncContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> LayerSyncResult<T> {
        self.with_context(|| format!("Failed to {} file: {}", operation, path.as_ref().display()))
    }

    fn with_glyph_context(self, operation: &str, glyph_name: &str) -> LayerSyncResult<T> {
        self.with_context(|| format!("Failed to {operation} glyph '{glyph_name}'"))
    }
}

pub fn validate_ufo_path<P: AsRef<std::path::Path>>(path: P) -> LayerSyncResult<()> {
    let path = path.as_ref();

    ensure!(path.exists(), "UFO path does not exist: {}", path.display());
    ensure!(
        path.is_dir(),
        "UFO path must be a directory: {}",
        path.display()
    );

    let metainfo = path.join("metainfo.plist");
    ensure!(
        metainfo.exists(),
        "Invalid UFO: missing metainfo.plist in {}",
        path.display()
    );

    Ok(())
}
