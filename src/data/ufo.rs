//! UFO file I/O operations

use crate::core::errors::{validate_ufo_path, LayerSyncContext, LayerSyncResult};
use crate::core::state::FontData;
use norad::Font;
use std::path::Path;
use tracing::debug;

/// Load a UFO font from disk, all layers included
pub fn load_ufo_from_path(path: impl AsRef<Path>) -> LayerSyncResult<FontData> {
    let path = path.as_ref();
    validate_ufo_path(path)?;

    let font = Font::load(path).with_file_context("load", path)?;
    let data = FontData::from_norad_font(&font, Some(path.to_path_buf()));

    debug!(
        "Loaded UFO {:?}: {} glyphs in {} layers",
        path,
        data.glyphs.len(),
        font.layers.len()
    );
    Ok(data)
}

/// Write the document as a UFO. Hints and backgrounds are not stored.
///
/// When the document was loaded from a UFO, that UFO is read again and only
/// the document's glyph layers are replaced, so everything else in it
/// (font info, kerning, groups, features, libs, the default layer's name)
/// is written back unchanged.
pub fn save_ufo(font: &FontData, path: impl AsRef<Path>) -> LayerSyncResult<()> {
    let path = path.as_ref();
    let mut norad_font = match source_ufo(font) {
        Some(source) => {
            debug!("Updating glyphs of {:?}", source);
            Font::load(source).with_file_context("reload", source)?
        }
        None => Font::new(),
    };
    font.write_into_norad_font(&mut norad_font)?;
    norad_font.save(path).with_file_context("save", path)?;
    debug!("Saved UFO to {:?}", path);
    Ok(())
}

/// The UFO the document came from, if it still exists
fn source_ufo(font: &FontData) -> Option<&Path> {
    font.path
        .as_deref()
        .filter(|path| path.is_dir() && path.join("metainfo.plist").exists())
}
