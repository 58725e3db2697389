//! Applying a removal plan to every compatible layer
//!
//! The plan is first validated against each layer, then applied to copies
//! of the layers that passed. Only when every copy is finished are they
//! swapped into the glyph, inside a single history group.

use super::compatibility::CompatibleLayers;
use super::plan::{NodeRemoval, RemovalPlan};
use super::snapshot::Backups;
use crate::core::errors::{anyhow, LayerFault, LayerSyncResult};
use crate::core::state::{FontData, LayerData};
use crate::editing::history::EditHistory;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// What was removed from one layer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerOutcome {
    pub layer_id: String,
    pub nodes_removed: usize,
    pub paths_removed: usize,
    pub anchors_removed: usize,
    pub components_removed: usize,
    pub hints_removed: usize,
}

/// A compatible layer that was left alone because the plan did not fit it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLayer {
    pub layer_id: String,
    pub fault: LayerFault,
}

#[derive(Debug, Default)]
pub struct Execution {
    pub layers: Vec<LayerOutcome>,
    pub skipped: Vec<SkippedLayer>,
    /// Layers whose background now holds a backup
    pub backed_up: Vec<String>,
    /// Whether a history group was committed
    pub committed: bool,
}

/// Result of running the plan over one layer, before empty paths are dropped
#[derive(Debug)]
pub struct LayerPass {
    pub outcome: LayerOutcome,
    emptied: BTreeSet<usize>,
}

/// Remove nodes, anchors, components and hints from one layer, in that order.
/// Paths left without nodes are remembered, not removed.
pub fn apply_plan(layer: &mut LayerData, plan: &RemovalPlan) -> Result<LayerPass, LayerFault> {
    let mut outcome = LayerOutcome {
        layer_id: layer.id.clone(),
        ..Default::default()
    };
    let mut emptied = BTreeSet::new();

    for removal in &plan.nodes {
        let node = removal.node();
        outcome.nodes_removed += match removal {
            NodeRemoval::KeepShape(node) => layer.remove_node_keep_shape(*node)?,
            NodeRemoval::Plain(node) => {
                layer.remove_node(*node)?;
                1
            }
        };
        if layer.contours.get(node.path).is_some_and(|c| c.is_empty()) {
            emptied.insert(node.path);
        }
    }

    for name in &plan.anchors {
        if layer.remove_anchor(name).is_some() {
            outcome.anchors_removed += 1;
        }
    }

    for &index in &plan.components {
        layer.remove_component(index)?;
        outcome.components_removed += 1;
    }

    if !plan.hint_keys.is_empty() {
        for index in (0..layer.hints.len()).rev() {
            if plan.hint_keys.contains(&layer.hints[index].key()) {
                layer.remove_hint(index)?;
                outcome.hints_removed += 1;
            }
        }
    }

    Ok(LayerPass { outcome, emptied })
}

/// Drop the paths a pass emptied, highest index first
pub fn remove_emptied_paths(layer: &mut LayerData, pass: &mut LayerPass) -> Result<(), LayerFault> {
    for &path in pass.emptied.iter().rev() {
        if layer.contours.get(path).is_some_and(|c| c.is_empty()) {
            layer.remove_path(path)?;
            pass.outcome.paths_removed += 1;
        }
    }
    Ok(())
}

pub fn execute(
    font: &mut FontData,
    history: &mut EditHistory,
    glyph_name: &str,
    label: &str,
    compatible: &CompatibleLayers,
    plan: &RemovalPlan,
    backups: Backups,
) -> LayerSyncResult<Execution> {
    let glyph = font
        .glyph(glyph_name)
        .ok_or_else(|| LayerFault::GlyphNotFound(glyph_name.to_string()))?;
    let layer_at = |index: usize| {
        glyph
            .layers
            .get(index)
            .ok_or_else(|| anyhow!("layer #{index} vanished from glyph '{glyph_name}'"))
    };
    let mut execution = Execution::default();

    // Phase one: validate against every layer before touching any
    let mut targets = Vec::new();
    for &index in &compatible.indices {
        let layer = layer_at(index)?;
        match plan.validate(layer) {
            Ok(()) => targets.push(index),
            Err(fault) => {
                warn!("Skipping layer '{}' of '{}': {}", layer.id, glyph_name, fault);
                execution.skipped.push(SkippedLayer {
                    layer_id: layer.id.clone(),
                    fault,
                });
            }
        }
    }

    // Phase two: build the new layer states on copies
    let mut working: BTreeMap<usize, LayerData> = BTreeMap::new();
    for backup in backups.layers {
        let Some(index) = glyph.layer_index(&backup.layer_id) else {
            continue;
        };
        let mut copy = layer_at(index)?.clone();
        copy.background = Some(backup.background);
        working.insert(index, copy);
        execution.backed_up.push(backup.layer_id);
    }

    let mut passes = Vec::new();
    for index in targets {
        let mut edited = match working.get(&index) {
            Some(copy) => copy.clone(),
            None => layer_at(index)?.clone(),
        };
        match apply_plan(&mut edited, plan) {
            Ok(pass) => {
                passes.push((index, pass));
                working.insert(index, edited);
            }
            Err(fault) => {
                warn!("Skipping layer '{}' of '{}': {}", edited.id, glyph_name, fault);
                execution.skipped.push(SkippedLayer {
                    layer_id: edited.id,
                    fault,
                });
            }
        }
    }

    for (index, pass) in &mut passes {
        let layer = working
            .get_mut(index)
            .ok_or_else(|| anyhow!("working copy of layer #{index} missing"))?;
        remove_emptied_paths(layer, pass)?;
        debug!("Layer '{}': {:?}", layer.id, pass.outcome);
    }
    execution.layers = passes.into_iter().map(|(_, pass)| pass.outcome).collect();

    if working.is_empty() {
        return Ok(execution);
    }

    // Phase three: swap every copy in as one undoable step
    let glyph = font
        .glyph_mut(glyph_name)
        .ok_or_else(|| LayerFault::GlyphNotFound(glyph_name.to_string()))?;
    let mut group = history.begin_group(label);
    for (index, layer) in working {
        if let Some(slot) = glyph.layers.get_mut(index) {
            group.record(glyph_name, slot);
            *slot = layer;
        }
    }
    execution.committed = group.recorded_len() > 0;

    Ok(execution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{
        AnchorData, ComponentData, ContourData, HintData, LayerRole, NodeRef, PointData,
    };
    use crate::editing::sync_removal::normalize::NormalizedSelection;
    use crate::editing::sync_removal::plan::plan_removal;

    fn layer() -> LayerData {
        let mut layer = LayerData::new("m1", LayerRole::Master);
        layer.contours.push(ContourData::new(vec![
            PointData::line(0.0, 0.0),
            PointData::line(10.0, 0.0),
        ]));
        layer.contours.push(ContourData::new(vec![
            PointData::line(0.0, 0.0),
            PointData::line(10.0, 0.0),
            PointData::line(10.0, 10.0),
        ]));
        layer.anchors.push(AnchorData::new("top", 0.0, 0.0));
        layer.components.push(ComponentData::new("a"));
        layer.components.push(ComponentData::new("b"));
        layer.components.push(ComponentData::new("c"));
        layer
            .hints
            .push(HintData::corner("_corner.x", NodeRef::new(1, 1)));
        layer.hints.push(HintData::stem(NodeRef::new(1, 0), NodeRef::new(1, 1)));
        layer
            .hints
            .push(HintData::corner("_corner.x", NodeRef::new(1, 1)));
        layer
    }

    #[test]
    fn test_apply_plan_every_kind() {
        let mut layer = layer();
        let selection = NormalizedSelection {
            nodes: [NodeRef::new(0, 0), NodeRef::new(0, 1), NodeRef::new(1, 2)]
                .into_iter()
                .collect(),
            anchors: ["top".to_string()].into_iter().collect(),
            components: [0, 2].into_iter().collect(),
            hint_keys: [HintData::corner("_corner.x", NodeRef::new(1, 1)).key()]
                .into_iter()
                .collect(),
        };
        let plan = plan_removal(&selection);

        let mut pass = apply_plan(&mut layer, &plan).unwrap();
        assert_eq!(layer.contours.len(), 2, "empty path stays until cleanup");
        remove_emptied_paths(&mut layer, &mut pass).unwrap();

        assert_eq!(layer.contours.len(), 1);
        assert_eq!(layer.contours[0].points.len(), 2);
        assert!(layer.anchors.is_empty());
        assert_eq!(layer.components.len(), 1);
        assert_eq!(layer.components[0].base_glyph, "b");
        assert_eq!(layer.hints.len(), 1);
        assert_eq!(layer.hints[0].kind, crate::core::state::HintKind::Stem);

        assert_eq!(
            pass.outcome,
            LayerOutcome {
                layer_id: "m1".into(),
                nodes_removed: 3,
                paths_removed: 1,
                anchors_removed: 1,
                components_removed: 2,
                hints_removed: 2,
            }
        );
    }

    #[test]
    fn test_missing_anchor_is_not_a_fault() {
        let mut layer = layer();
        layer.anchors.clear();
        let plan = RemovalPlan {
            anchors: vec!["top".into()],
            ..Default::default()
        };
        let pass = apply_plan(&mut layer, &plan).unwrap();
        assert_eq!(pass.outcome.anchors_removed, 0);
    }
}
