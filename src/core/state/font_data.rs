//! Font document model
//!
//! Plain data structures for a multi-layer font: glyphs own layers, layers
//! own paths, anchors, components and hints. Everything here is owned data so
//! a layer can be cloned, edited in isolation and swapped back in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A whole font document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FontData {
    pub glyphs: BTreeMap<String, GlyphData>,
    /// File the document was loaded from, if any
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl FontData {
    pub fn glyph(&self, name: &str) -> Option<&GlyphData> {
        self.glyphs.get(name)
    }

    pub fn glyph_mut(&mut self, name: &str) -> Option<&mut GlyphData> {
        self.glyphs.get_mut(name)
    }

    pub fn insert_glyph(&mut self, glyph: GlyphData) {
        self.glyphs.insert(glyph.name.clone(), glyph);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unicode_values: Vec<char>,
    pub layers: Vec<LayerData>,
}

impl GlyphData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn layer(&self, id: &str) -> Option<&LayerData> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn layer_mut(&mut self, id: &str) -> Option<&mut LayerData> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }

    pub fn layer_index(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id == id)
    }

    pub fn master_layers(&self) -> impl Iterator<Item = &LayerData> {
        self.layers
            .iter()
            .filter(|layer| layer.role == LayerRole::Master)
    }
}

/// What a layer is used for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerRole {
    #[default]
    Master,
    /// Intermediate design point between masters (brace layer)
    Intermediate,
    /// Alternate shape switched in by a rule (bracket layer)
    Alternate,
    Background,
    Other,
}

impl LayerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerRole::Master => "master",
            LayerRole::Intermediate => "intermediate",
            LayerRole::Alternate => "alternate",
            LayerRole::Background => "background",
            LayerRole::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "master" => Some(LayerRole::Master),
            "intermediate" | "brace" => Some(LayerRole::Intermediate),
            "alternate" | "bracket" => Some(LayerRole::Alternate),
            "background" => Some(LayerRole::Background),
            "other" => Some(LayerRole::Other),
            _ => None,
        }
    }

    /// Roles that take part in a cross-layer edit unless configured otherwise
    pub fn default_eligible() -> Vec<LayerRole> {
        vec![LayerRole::Master, LayerRole::Intermediate]
    }
}

impl std::fmt::Display for LayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerData {
    /// Identifier, unique within the glyph
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: LayerRole,
    #[serde(default)]
    pub advance_width: f64,
    #[serde(default)]
    pub contours: Vec<ContourData>,
    #[serde(default)]
    pub anchors: Vec<AnchorData>,
    #[serde(default)]
    pub components: Vec<ComponentData>,
    #[serde(default)]
    pub hints: Vec<HintData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundData>,
}

impl LayerData {
    pub fn new(id: impl Into<String>, role: LayerRole) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            role,
            ..Default::default()
        }
    }

    pub fn anchor(&self, name: &str) -> Option<&AnchorData> {
        self.anchors.iter().find(|anchor| anchor.name == name)
    }

    pub fn node_count(&self) -> usize {
        self.contours.iter().map(|c| c.points.len()).sum()
    }

    pub fn on_curve_count(&self) -> usize {
        self.contours
            .iter()
            .flat_map(|c| c.points.iter())
            .filter(|p| p.point_type.is_on_curve())
            .count()
    }

    pub fn off_curve_count(&self) -> usize {
        self.node_count() - self.on_curve_count()
    }
}

/// Backup copy of a layer's drawing, kept alongside the layer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackgroundData {
    pub contours: Vec<ContourData>,
    #[serde(default)]
    pub anchors: Vec<AnchorData>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourData {
    pub points: Vec<PointData>,
    #[serde(default = "default_closed")]
    pub closed: bool,
}

fn default_closed() -> bool {
    true
}

impl ContourData {
    pub fn new(points: Vec<PointData>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointData {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub point_type: PointTypeData,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub smooth: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source file identifier, carried through edits untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl PointData {
    pub fn new(x: f64, y: f64, point_type: PointTypeData) -> Self {
        Self {
            x,
            y,
            point_type,
            smooth: false,
            name: None,
            identifier: None,
        }
    }

    pub fn line(x: f64, y: f64) -> Self {
        Self::new(x, y, PointTypeData::Line)
    }

    pub fn curve(x: f64, y: f64) -> Self {
        Self::new(x, y, PointTypeData::Curve)
    }

    pub fn off(x: f64, y: f64) -> Self {
        Self::new(x, y, PointTypeData::OffCurve)
    }

    pub fn to_point(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointTypeData {
    Move,
    Line,
    #[serde(rename = "offcurve")]
    OffCurve,
    Curve,
    #[serde(rename = "qcurve")]
    QCurve,
}

impl PointTypeData {
    pub fn is_on_curve(&self) -> bool {
        !matches!(self, PointTypeData::OffCurve)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorData {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl AnchorData {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentData {
    pub base_glyph: String,
    /// Affine transform: xx, xy, yx, yy, dx, dy
    pub transform: [f64; 6],
}

impl ComponentData {
    pub fn new(base_glyph: impl Into<String>) -> Self {
        Self {
            base_glyph: base_glyph.into(),
            transform: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.transform[4] = dx;
        self.transform[5] = dy;
        self
    }

    pub fn affine(&self) -> kurbo::Affine {
        kurbo::Affine::new(self.transform)
    }
}

/// A node reference stored inside a hint: (path index, node index)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeRef {
    pub path: usize,
    pub node: usize,
}

impl NodeRef {
    pub fn new(path: usize, node: usize) -> Self {
        Self { path, node }
    }
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path, self.node)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    Stem,
    Ghost,
    Corner,
    Cap,
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HintData {
    pub kind: HintKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<NodeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other1: Option<NodeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other2: Option<NodeRef>,
    /// Corner and cap hints name the component glyph they draw with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl HintData {
    pub fn corner(name: impl Into<String>, origin: NodeRef) -> Self {
        Self {
            kind: HintKind::Corner,
            origin: Some(origin),
            target: None,
            other1: None,
            other2: None,
            name: Some(name.into()),
        }
    }

    pub fn stem(origin: NodeRef, target: NodeRef) -> Self {
        Self {
            kind: HintKind::Stem,
            origin: Some(origin),
            target: Some(target),
            other1: None,
            other2: None,
            name: None,
        }
    }

    pub fn key(&self) -> HintKey {
        HintKey {
            kind: self.kind,
            origin: self.origin,
            target: self.target,
            other1: self.other1,
            other2: self.other2,
        }
    }
}

/// Value identity of a hint across layers. The name is not part of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HintKey {
    pub kind: HintKind,
    pub origin: Option<NodeRef>,
    pub target: Option<NodeRef>,
    pub other1: Option<NodeRef>,
    pub other2: Option<NodeRef>,
}
