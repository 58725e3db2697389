//! Pre-edit safety backup of master layers

use crate::core::state::{BackgroundData, FontData};
use crate::geometry::background_copy;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct LayerBackup {
    pub layer_id: String,
    pub background: BackgroundData,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Backups {
    pub layers: Vec<LayerBackup>,
    /// Ids of master layers that could not be backed up
    pub failed: Vec<String>,
}

/// Decomposed background copies of every master layer of a glyph.
///
/// A layer that cannot be decomposed is logged and left out; it never stops
/// the edit that follows.
pub fn backup_master_layers(font: &FontData, glyph_name: &str) -> Backups {
    let mut backups = Backups::default();
    let Some(glyph) = font.glyph(glyph_name) else {
        return backups;
    };

    for layer in glyph.master_layers() {
        match background_copy(font, glyph_name, &layer.id) {
            Ok(background) => {
                debug!(
                    "Backed up layer '{}' of '{}' ({} contours)",
                    layer.id,
                    glyph_name,
                    background.contours.len()
                );
                backups.layers.push(LayerBackup {
                    layer_id: layer.id.clone(),
                    background,
                });
            }
            Err(e) => {
                warn!(
                    "Could not back up layer '{}' of '{}': {:#}",
                    layer.id, glyph_name, e
                );
                backups.failed.push(layer.id.clone());
            }
        }
    }

    backups
}
