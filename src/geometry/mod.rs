//! Geometric Operations

pub mod decompose;
pub mod keep_shape;

// Re-export commonly used items
pub use decompose::{background_copy, decomposed_contours};
pub use keep_shape::merged_handles;
