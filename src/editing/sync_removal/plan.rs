//! Deletion ordering
//!
//! Index-addressed elements are removed from the highest index down, so a
//! removal never shifts an element that is still waiting to be removed.

use super::normalize::NormalizedSelection;
use crate::core::errors::LayerFault;
use crate::core::state::{HintKey, LayerData, NodeRef};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRemoval {
    /// The only selected node of its path
    KeepShape(NodeRef),
    Plain(NodeRef),
}

impl NodeRemoval {
    pub fn node(&self) -> NodeRef {
        match self {
            NodeRemoval::KeepShape(node) | NodeRemoval::Plain(node) => *node,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemovalPlan {
    /// Descending by (path, node)
    pub nodes: Vec<NodeRemoval>,
    pub anchors: Vec<String>,
    /// Descending
    pub components: Vec<usize>,
    pub hint_keys: BTreeSet<HintKey>,
}

impl RemovalPlan {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.anchors.is_empty()
            && self.components.is_empty()
            && self.hint_keys.is_empty()
    }

    /// Check every index in the plan against `layer` before anything is
    /// removed from it.
    pub fn validate(&self, layer: &LayerData) -> Result<(), LayerFault> {
        for removal in &self.nodes {
            layer.check_node(removal.node())?;
        }
        // Descending, so the first one is the largest
        if let Some(&index) = self.components.first() {
            if index >= layer.components.len() {
                return Err(LayerFault::ComponentOutOfRange {
                    index,
                    count: layer.components.len(),
                });
            }
        }
        Ok(())
    }
}

pub fn plan_removal(selection: &NormalizedSelection) -> RemovalPlan {
    let mut per_path: BTreeMap<usize, usize> = BTreeMap::new();
    for node in &selection.nodes {
        *per_path.entry(node.path).or_default() += 1;
    }

    let nodes = selection
        .nodes
        .iter()
        .rev()
        .map(|&node| {
            if per_path.get(&node.path) == Some(&1) {
                NodeRemoval::KeepShape(node)
            } else {
                NodeRemoval::Plain(node)
            }
        })
        .collect();

    RemovalPlan {
        nodes,
        anchors: selection.anchors.iter().cloned().collect(),
        components: selection.components.iter().rev().copied().collect(),
        hint_keys: selection.hint_keys.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{ComponentData, ContourData, LayerRole, PointData};

    fn selection(nodes: &[(usize, usize)], components: &[usize]) -> NormalizedSelection {
        NormalizedSelection {
            nodes: nodes.iter().map(|&(p, n)| NodeRef::new(p, n)).collect(),
            components: components.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_nodes_descending_by_path_then_node() {
        let plan = plan_removal(&selection(&[(0, 1), (1, 0), (0, 3), (1, 2)], &[]));
        let order: Vec<NodeRef> = plan.nodes.iter().map(NodeRemoval::node).collect();
        assert_eq!(
            order,
            vec![
                NodeRef::new(1, 2),
                NodeRef::new(1, 0),
                NodeRef::new(0, 3),
                NodeRef::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_single_node_per_path_keeps_shape() {
        let plan = plan_removal(&selection(&[(0, 1), (0, 2), (2, 5)], &[]));
        assert_eq!(
            plan.nodes,
            vec![
                NodeRemoval::KeepShape(NodeRef::new(2, 5)),
                NodeRemoval::Plain(NodeRef::new(0, 2)),
                NodeRemoval::Plain(NodeRef::new(0, 1)),
            ]
        );
    }

    #[test]
    fn test_components_descending() {
        let plan = plan_removal(&selection(&[], &[0, 3, 1]));
        assert_eq!(plan.components, vec![3, 1, 0]);
    }

    #[test]
    fn test_validate_checks_fresh_bounds() {
        let mut layer = LayerData::new("m", LayerRole::Master);
        layer.contours.push(ContourData::new(vec![
            PointData::line(0.0, 0.0),
            PointData::line(1.0, 0.0),
        ]));
        layer.components.push(ComponentData::new("dot"));

        assert!(plan_removal(&selection(&[(0, 1)], &[0])).validate(&layer).is_ok());
        assert_eq!(
            plan_removal(&selection(&[(0, 2)], &[])).validate(&layer),
            Err(LayerFault::NodeOutOfRange {
                path: 0,
                node: 2,
                count: 2
            })
        );
        assert_eq!(
            plan_removal(&selection(&[], &[1])).validate(&layer),
            Err(LayerFault::ComponentOutOfRange { index: 1, count: 1 })
        );
    }
}
