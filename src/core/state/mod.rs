//! Document state
//!
//! The font document model and selection snapshots the editing code
//! operates on.

pub mod font_data;
pub mod selection;

pub use font_data::{
    AnchorData, BackgroundData, ComponentData, ContourData, FontData, GlyphData, HintData,
    HintKey, HintKind, LayerData, LayerRole, NodeRef, PointData, PointTypeData,
};
pub use selection::{SelectedElement, Selection};
