//! Turning a layer-local selection into layer-agnostic identifiers

use crate::core::state::{HintKey, HintKind, LayerData, NodeRef, SelectedElement, Selection};
use std::collections::BTreeSet;
use tracing::debug;

/// The selection expressed in terms that can be looked up in other layers
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedSelection {
    /// Only meaningful in layers compatible with the reference layer
    pub nodes: BTreeSet<NodeRef>,
    pub anchors: BTreeSet<String>,
    pub components: BTreeSet<usize>,
    /// Corner hints only
    pub hint_keys: BTreeSet<HintKey>,
}

impl NormalizedSelection {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.anchors.is_empty()
            && self.components.is_empty()
            && self.hint_keys.is_empty()
    }

    pub fn element_count(&self) -> usize {
        self.nodes.len() + self.anchors.len() + self.components.len() + self.hint_keys.len()
    }
}

/// Resolve `selection` against the layer it was taken from.
///
/// Elements the layer does not have are dropped. Hints other than corner
/// hints are never carried over to other layers.
pub fn normalize_selection(layer: &LayerData, selection: &Selection) -> NormalizedSelection {
    let mut normalized = NormalizedSelection::default();

    for element in &selection.elements {
        match element {
            SelectedElement::Node(node) => {
                if layer.check_node(*node).is_ok() {
                    normalized.nodes.insert(*node);
                } else {
                    debug!("Dropping stale node selection {} in layer '{}'", node, layer.id);
                }
            }
            SelectedElement::Anchor(name) => {
                if layer.anchor(name).is_some() {
                    normalized.anchors.insert(name.clone());
                } else {
                    debug!("Dropping unknown anchor '{}' in layer '{}'", name, layer.id);
                }
            }
            SelectedElement::Component(index) => {
                if *index < layer.components.len() {
                    normalized.components.insert(*index);
                } else {
                    debug!("Dropping stale component {} in layer '{}'", index, layer.id);
                }
            }
            SelectedElement::Hint(index) => match layer.hints.get(*index) {
                Some(hint) if hint.kind == HintKind::Corner => {
                    normalized.hint_keys.insert(hint.key());
                }
                Some(hint) => {
                    debug!("Ignoring selected {:?} hint {}", hint.kind, index);
                }
                None => {
                    debug!("Dropping stale hint {} in layer '{}'", index, layer.id);
                }
            },
        }
    }

    normalized
}
