//! Choosing the layers an edit may touch

use super::signature::LayerSignature;
use crate::core::state::{GlyphData, LayerRole};

/// Why a layer was left out of the edit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    Role(LayerRole),
    Signature,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedLayer {
    pub id: String,
    pub reason: Rejection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompatibleLayers {
    /// Positions in the glyph's layer list, in layer order
    pub indices: Vec<usize>,
    pub rejected: Vec<RejectedLayer>,
}

impl CompatibleLayers {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Layers with an eligible role and the same structure as the reference
pub fn resolve_compatible_layers(
    glyph: &GlyphData,
    reference: &LayerSignature,
    eligible_roles: &[LayerRole],
) -> CompatibleLayers {
    let mut result = CompatibleLayers::default();

    for (index, layer) in glyph.layers.iter().enumerate() {
        if !eligible_roles.contains(&layer.role) {
            result.rejected.push(RejectedLayer {
                id: layer.id.clone(),
                reason: Rejection::Role(layer.role),
            });
        } else if LayerSignature::of(layer) != *reference {
            result.rejected.push(RejectedLayer {
                id: layer.id.clone(),
                reason: Rejection::Signature,
            });
        } else {
            result.indices.push(index);
        }
    }

    result
}
