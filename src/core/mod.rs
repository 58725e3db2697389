//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - The document model and selections
//! - Settings, config file and CLI handling
//! - Error types

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod runner;
pub mod settings;
pub mod state;

// Re-export commonly used items
pub use cli::CliArgs;
pub use runner::run_app;
pub use settings::LayerSyncSettings;
pub use state::{FontData, GlyphData, LayerData, Selection};
