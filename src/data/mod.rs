//! Loading and saving font documents

pub mod conversions;
pub mod json;
pub mod ufo;

use crate::core::errors::{bail, LayerSyncResult};
use crate::core::state::FontData;
use std::path::Path;

/// On-disk formats a document can be read from and written to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Ufo,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> LayerSyncResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(SourceFormat::Json),
            Some("ufo") => Ok(SourceFormat::Ufo),
            Some(other) => bail!(
                "Unsupported file type '.{other}': {}\nExpected a .json document or a .ufo directory.",
                path.display()
            ),
            None => bail!(
                "File has no extension: {}\nExpected a .json document or a .ufo directory.",
                path.display()
            ),
        }
    }

    /// Whether layer backgrounds and corner hints survive a save
    pub fn keeps_backgrounds(self) -> bool {
        matches!(self, SourceFormat::Json)
    }
}

pub fn load_font(path: impl AsRef<Path>) -> LayerSyncResult<FontData> {
    let path = path.as_ref();
    match SourceFormat::from_path(path)? {
        SourceFormat::Json => json::load_json(path),
        SourceFormat::Ufo => ufo::load_ufo_from_path(path),
    }
}

pub fn save_font(font: &FontData, path: impl AsRef<Path>) -> LayerSyncResult<()> {
    let path = path.as_ref();
    match SourceFormat::from_path(path)? {
        SourceFormat::Json => json::save_json(font, path),
        SourceFormat::Ufo => ufo::save_ufo(font, path),
    }
}
