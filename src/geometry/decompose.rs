//! Component decomposition
//!
//! Flattens a layer's components into concrete contours by pulling the
//! outlines of the referenced glyphs through each component's transform.

use crate::core::errors::{anyhow, bail, LayerSyncResult};
use crate::core::state::{BackgroundData, ContourData, FontData, LayerData, PointData};
use kurbo::Affine;

/// Deeper nesting than this is treated as a component cycle
const MAX_COMPONENT_DEPTH: usize = 32;

/// All contours of a layer with every component decomposed
pub fn decomposed_contours(
    font: &FontData,
    glyph_name: &str,
    layer_id: &str,
) -> LayerSyncResult<Vec<ContourData>> {
    let glyph = font
        .glyph(glyph_name)
        .ok_or_else(|| anyhow!("glyph '{glyph_name}' not found"))?;
    let layer = glyph
        .layer(layer_id)
        .ok_or_else(|| anyhow!("layer '{layer_id}' not found in glyph '{glyph_name}'"))?;

    let mut out = layer.contours.clone();
    append_components(font, layer, Affine::IDENTITY, 0, &mut out)?;
    Ok(out)
}

fn append_components(
    font: &FontData,
    layer: &LayerData,
    parent: Affine,
    depth: usize,
    out: &mut Vec<ContourData>,
) -> LayerSyncResult<()> {
    if depth >= MAX_COMPONENT_DEPTH {
        bail!("component nesting deeper than {MAX_COMPONENT_DEPTH}, likely a cycle");
    }

    for component in &layer.components {
        let base = font.glyph(&component.base_glyph).ok_or_else(|| {
            anyhow!("component base glyph '{}' not found", component.base_glyph)
        })?;
        // Same layer id first, first master otherwise
        let base_layer = base
            .layer(&layer.id)
            .or_else(|| base.master_layers().next())
            .ok_or_else(|| anyhow!("glyph '{}' has no usable layer", base.name))?;

        let transform = parent * component.affine();
        out.extend(
            base_layer
                .contours
                .iter()
                .map(|contour| transform_contour(contour, transform)),
        );
        append_components(font, base_layer, transform, depth + 1, out)?;
    }
    Ok(())
}

fn transform_contour(contour: &ContourData, transform: Affine) -> ContourData {
    let points = contour
        .points
        .iter()
        .map(|point| {
            let p = transform * point.to_point();
            PointData {
                x: p.x,
                y: p.y,
                ..point.clone()
            }
        })
        .collect();
    ContourData {
        points,
        closed: contour.closed,
    }
}

/// A background holding a layer's drawing with every component decomposed
pub fn background_copy(
    font: &FontData,
    glyph_name: &str,
    layer_id: &str,
) -> LayerSyncResult<BackgroundData> {
    let contours = decomposed_contours(font, glyph_name, layer_id)?;
    let anchors = font
        .glyph(glyph_name)
        .and_then(|glyph| glyph.layer(layer_id))
        .map(|layer| layer.anchors.clone())
        .unwrap_or_default();
    Ok(BackgroundData { contours, anchors })
}
