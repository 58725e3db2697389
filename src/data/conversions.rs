//! UFO format conversion utilities
//!
//! Conversion between the document model and norad. In a UFO every layer
//! is a separate glyph set; here each glyph owns one layer per UFO layer
//! that contains it, with the UFO layer name as the layer id.

use crate::core::errors::{anyhow, LayerSyncResult};
use crate::core::state::{
    AnchorData, ComponentData, ContourData, FontData, GlyphData, LayerData, LayerRole, PointData,
    PointTypeData,
};
use anyhow::Context;
use norad::Font;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Role of a UFO layer, guessed from its name
pub fn role_for_layer_name(name: &str, is_default: bool) -> LayerRole {
    if is_default {
        LayerRole::Master
    } else if name.to_lowercase().contains("background") {
        LayerRole::Background
    } else if name.contains('{') && name.contains('}') {
        LayerRole::Intermediate
    } else if name.contains('[') && name.contains(']') {
        LayerRole::Alternate
    } else {
        // Sparse masters live in their own layers
        LayerRole::Master
    }
}

impl LayerData {
    /// Convert one glyph of a UFO layer
    pub fn from_norad_glyph(norad_glyph: &norad::Glyph, layer_name: &str, role: LayerRole) -> Self {
        Self {
            id: layer_name.to_string(),
            name: layer_name.to_string(),
            role,
            advance_width: norad_glyph.width,
            contours: norad_glyph
                .contours
                .iter()
                .map(ContourData::from_norad_contour)
                .collect(),
            anchors: norad_glyph
                .anchors
                .iter()
                .filter_map(AnchorData::from_norad_anchor)
                .collect(),
            components: norad_glyph
                .components
                .iter()
                .map(ComponentData::from_norad_component)
                .collect(),
            hints: Vec::new(),
            background: None,
        }
    }

    /// Convert back to a norad glyph. Hints and backgrounds have no UFO
    /// counterpart and are dropped.
    pub fn to_norad_glyph(&self, glyph_name: &str, codepoints: &[char]) -> LayerSyncResult<norad::Glyph> {
        let mut glyph = norad::Glyph::new(glyph_name);
        self.write_into_norad_glyph(&mut glyph, codepoints)?;
        Ok(glyph)
    }

    /// Overwrite the outline data of an existing norad glyph. Its lib,
    /// guidelines and note are left alone, and anchors keep their color and
    /// identifier when one of the same name was there before.
    pub fn write_into_norad_glyph(
        &self,
        glyph: &mut norad::Glyph,
        codepoints: &[char],
    ) -> LayerSyncResult<()> {
        glyph.width = self.advance_width;
        for &codepoint in codepoints {
            glyph.codepoints.insert(codepoint);
        }
        glyph.contours = self
            .contours
            .iter()
            .map(ContourData::to_norad_contour)
            .collect();

        let mut anchors = Vec::with_capacity(self.anchors.len());
        for anchor in &self.anchors {
            let existing = glyph
                .anchors
                .iter()
                .find(|a| a.name.as_ref().is_some_and(|name| name.as_str() == anchor.name));
            match existing {
                Some(existing) => {
                    let mut kept = existing.clone();
                    kept.x = anchor.x;
                    kept.y = anchor.y;
                    anchors.push(kept);
                }
                None => anchors.push(anchor.to_norad_anchor()?),
            }
        }
        glyph.anchors = anchors;

        glyph.components = self
            .components
            .iter()
            .map(ComponentData::to_norad_component)
            .collect::<LayerSyncResult<_>>()?;
        Ok(())
    }
}

impl AnchorData {
    /// Unnamed anchors cannot be matched across layers and are skipped
    pub fn from_norad_anchor(anchor: &norad::Anchor) -> Option<Self> {
        let name = anchor.name.as_ref()?;
        Some(Self::new(name.to_string(), anchor.x, anchor.y))
    }

    pub fn to_norad_anchor(&self) -> LayerSyncResult<norad::Anchor> {
        let name: norad::Name = self
            .name
            .parse()
            .with_context(|| format!("invalid anchor name '{}'", self.name))?;
        Ok(norad::Anchor::new(self.x, self.y, Some(name), None, None))
    }
}

impl ComponentData {
    pub fn from_norad_component(norad_component: &norad::Component) -> Self {
        Self {
            base_glyph: norad_component.base.to_string(),
            transform: [
                norad_component.transform.x_scale,
                norad_component.transform.xy_scale,
                norad_component.transform.yx_scale,
                norad_component.transform.y_scale,
                norad_component.transform.x_offset,
                norad_component.transform.y_offset,
            ],
        }
    }

    pub fn to_norad_component(&self) -> LayerSyncResult<norad::Component> {
        let base_name: norad::Name = self
            .base_glyph
            .parse()
            .with_context(|| format!("invalid component base '{}'", self.base_glyph))?;

        let transform = norad::AffineTransform {
            x_scale: self.transform[0],
            xy_scale: self.transform[1],
            yx_scale: self.transform[2],
            y_scale: self.transform[3],
            x_offset: self.transform[4],
            y_offset: self.transform[5],
        };

        Ok(norad::Component::new(base_name, transform, None))
    }
}

impl ContourData {
    pub fn from_norad_contour(norad_contour: &norad::Contour) -> Self {
        let points: Vec<PointData> = norad_contour
            .points
            .iter()
            .map(PointData::from_norad_point)
            .collect();
        // An open UFO contour starts with a move point
        let closed = points
            .first()
            .is_none_or(|p| p.point_type != PointTypeData::Move);

        Self { points, closed }
    }

    pub fn to_norad_contour(&self) -> norad::Contour {
        let points = self.points.iter().map(PointData::to_norad_point).collect();
        norad::Contour::new(points, None)
    }
}

impl PointData {
    pub fn from_norad_point(norad_point: &norad::ContourPoint) -> Self {
        Self {
            x: norad_point.x,
            y: norad_point.y,
            point_type: PointTypeData::from_norad_point_type(&norad_point.typ),
            smooth: norad_point.smooth,
            name: norad_point.name.as_ref().map(|name| name.to_string()),
            identifier: norad_point.identifier().map(|id| id.as_str().to_string()),
        }
    }

    pub fn to_norad_point(&self) -> norad::ContourPoint {
        norad::ContourPoint::new(
            self.x,
            self.y,
            self.point_type.to_norad_point_type(),
            self.smooth,
            self.name.as_ref().and_then(|name| name.parse().ok()),
            self.identifier
                .as_deref()
                .and_then(|id| norad::Identifier::new(id).ok()),
        )
    }
}

impl PointTypeData {
    pub fn from_norad_point_type(norad_type: &norad::PointType) -> Self {
        match norad_type {
            norad::PointType::Move => PointTypeData::Move,
            norad::PointType::Line => PointTypeData::Line,
            norad::PointType::OffCurve => PointTypeData::OffCurve,
            norad::PointType::Curve => PointTypeData::Curve,
            norad::PointType::QCurve => PointTypeData::QCurve,
        }
    }

    pub fn to_norad_point_type(&self) -> norad::PointType {
        match self {
            PointTypeData::Move => norad::PointType::Move,
            PointTypeData::Line => norad::PointType::Line,
            PointTypeData::OffCurve => norad::PointType::OffCurve,
            PointTypeData::Curve => norad::PointType::Curve,
            PointTypeData::QCurve => norad::PointType::QCurve,
        }
    }
}

impl FontData {
    /// Gather every layer of every glyph from a norad font
    pub fn from_norad_font(font: &Font, path: Option<PathBuf>) -> Self {
        let default_name = font.layers.default_layer().name().to_string();
        let mut glyphs: BTreeMap<String, GlyphData> = BTreeMap::new();

        for layer in font.layers.iter() {
            let layer_name = layer.name().to_string();
            let role = role_for_layer_name(&layer_name, layer_name == default_name);

            for glyph in layer.iter() {
                let name = glyph.name().to_string();
                let entry = glyphs
                    .entry(name.clone())
                    .or_insert_with(|| GlyphData::new(name));
                if entry.unicode_values.is_empty() {
                    entry.unicode_values = glyph.codepoints.iter().collect();
                }
                entry
                    .layers
                    .push(LayerData::from_norad_glyph(glyph, &layer_name, role));
            }
        }

        Self { glyphs, path }
    }

    /// Write every glyph layer into `font`, which is usually the font the
    /// document was loaded from. A layer whose id is the name of the font's
    /// default layer goes there; every other layer id becomes (or updates) a
    /// UFO layer of that name. Font info, kerning, groups, features, libs and
    /// glyphs the document does not hold are left as they are.
    pub fn write_into_norad_font(&self, font: &mut Font) -> LayerSyncResult<()> {
        let default_name = font.layers.default_layer().name().to_string();

        for glyph in self.glyphs.values() {
            for layer in &glyph.layers {
                let target = if layer.id == default_name {
                    font.default_layer_mut()
                } else {
                    font.layers
                        .get_or_create_layer(&layer.id)
                        .map_err(|e| anyhow!("invalid layer name '{}': {}", layer.id, e))?
                };
                let mut norad_glyph = match target.get_glyph(&glyph.name) {
                    Some(existing) => norad::Glyph::clone(existing),
                    None => norad::Glyph::new(&glyph.name),
                };
                layer
                    .write_into_norad_glyph(&mut norad_glyph, &glyph.unicode_values)
                    .with_context(|| format!("converting glyph '{}'", glyph.name))?;
                target.insert_glyph(norad_glyph);
            }
        }

        Ok(())
    }
}
