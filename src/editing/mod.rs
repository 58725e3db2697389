//! Editing Functionality
//!
//! This module contains all editing-related functionality:
//! - Structural mutation primitives for layers
//! - Undo/redo history with grouped, multi-layer steps
//! - Removing a selection across all compatible layers of a glyph

pub mod history;
pub mod layer_ops;
pub mod sync_removal;

// Re-export commonly used items
pub use history::{EditGroup, EditHistory, GroupGuard};
pub use sync_removal::{
    remove_in_compatible_layers, RemovalOptions, RemovalOutcome, RemovalReport, RemovalRequest,
};
