//! JSON document files
//!
//! The native format: a pretty-printed serialization of the whole document,
//! hints and backgrounds included.

use crate::core::errors::{LayerSyncContext, LayerSyncResult};
use crate::core::state::FontData;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_json(path: impl AsRef<Path>) -> LayerSyncResult<FontData> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).with_file_context("read", path)?;
    let mut font: FontData = serde_json::from_str(&contents).with_file_context("parse", path)?;
    font.path = Some(path.to_path_buf());
    debug!("Loaded {} glyphs from {:?}", font.glyphs.len(), path);
    Ok(font)
}

pub fn save_json(font: &FontData, path: impl AsRef<Path>) -> LayerSyncResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_file_context("create directory for", path)?;
        }
    }
    let contents = serde_json::to_string_pretty(font)?;
    fs::write(path, contents).with_file_context("write", path)?;
    debug!("Saved document to {:?}", path);
    Ok(())
}
