//! Undo/redo history
//!
//! Edits are recorded as groups of whole-layer states. Undoing a group swaps
//! every recorded layer back at once, so a change that touched several
//! layers is reverted in one step.

use crate::core::errors::{anyhow, LayerSyncResult};
use crate::core::state::{FontData, LayerData};
use tracing::debug;

/// The state of one layer before (or, on the redo stack, after) an edit
#[derive(Clone, Debug, PartialEq)]
pub struct LayerChange {
    pub glyph: String,
    pub layer_id: String,
    pub state: LayerData,
}

/// One undoable step
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditGroup {
    pub label: String,
    pub changes: Vec<LayerChange>,
}

impl EditGroup {
    fn records(&self, glyph: &str, layer_id: &str) -> bool {
        self.changes
            .iter()
            .any(|c| c.glyph == glyph && c.layer_id == layer_id)
    }
}

#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<EditGroup>,
    redo_stack: Vec<EditGroup>,
    open: Option<EditGroup>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a group. It is closed when the returned guard is dropped, and
    /// the guard's borrow keeps a second group from opening meanwhile.
    pub fn begin_group(&mut self, label: impl Into<String>) -> GroupGuard<'_> {
        let label = label.into();
        debug!("Begin edit group '{}'", label);
        self.open = Some(EditGroup {
            label,
            changes: Vec::new(),
        });
        GroupGuard { history: self }
    }

    fn end_group(&mut self) {
        let Some(group) = self.open.take() else {
            return;
        };
        if group.changes.is_empty() {
            debug!("Discarding empty edit group '{}'", group.label);
            return;
        }
        debug!(
            "End edit group '{}' ({} layers)",
            group.label,
            group.changes.len()
        );
        self.undo_stack.push(group);
        self.redo_stack.clear();
    }

    pub fn is_group_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undoable steps
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn last_group(&self) -> Option<&EditGroup> {
        self.undo_stack.last()
    }

    /// Revert the most recent group. Returns its label.
    pub fn undo(&mut self, font: &mut FontData) -> LayerSyncResult<Option<String>> {
        let Some(group) = self.undo_stack.pop() else {
            return Ok(None);
        };
        match swap_group(font, group) {
            Ok(inverse) => {
                let label = inverse.label.clone();
                self.redo_stack.push(inverse);
                Ok(Some(label))
            }
            Err((group, err)) => {
                self.undo_stack.push(group);
                Err(err)
            }
        }
    }

    /// Reapply the most recently undone group. Returns its label.
    pub fn redo(&mut self, font: &mut FontData) -> LayerSyncResult<Option<String>> {
        let Some(group) = self.redo_stack.pop() else {
            return Ok(None);
        };
        match swap_group(font, group) {
            Ok(inverse) => {
                let label = inverse.label.clone();
                self.undo_stack.push(inverse);
                Ok(Some(label))
            }
            Err((group, err)) => {
                self.redo_stack.push(group);
                Err(err)
            }
        }
    }
}

/// Exchange every stored layer state with the one in the font.
///
/// All targets are located before anything is swapped, so a group either
/// applies completely or not at all.
fn swap_group(
    font: &mut FontData,
    mut group: EditGroup,
) -> Result<EditGroup, (EditGroup, anyhow::Error)> {
    for change in &group.changes {
        let found = font
            .glyph(&change.glyph)
            .and_then(|g| g.layer(&change.layer_id))
            .is_some();
        if !found {
            let err = anyhow!(
                "layer '{}' of glyph '{}' no longer exists",
                change.layer_id,
                change.glyph
            );
            return Err((group, err));
        }
    }

    for change in &mut group.changes {
        if let Some(layer) = font
            .glyph_mut(&change.glyph)
            .and_then(|g| g.layer_mut(&change.layer_id))
        {
            std::mem::swap(layer, &mut change.state);
        }
    }
    Ok(group)
}

/// An open edit group; closes the group when dropped
pub struct GroupGuard<'a> {
    history: &'a mut EditHistory,
}

impl GroupGuard<'_> {
    /// Remember a layer's state before it is changed. Only the first record
    /// of a layer within a group is kept.
    pub fn record(&mut self, glyph: &str, layer: &LayerData) {
        if let Some(group) = self.history.open.as_mut() {
            if !group.records(glyph, &layer.id) {
                group.changes.push(LayerChange {
                    glyph: glyph.to_string(),
                    layer_id: layer.id.clone(),
                    state: layer.clone(),
                });
            }
        }
    }

    pub fn recorded_len(&self) -> usize {
        self.history
            .open
            .as_ref()
            .map_or(0, |group| group.changes.len())
    }
}

impl Drop for GroupGuard<'_> {
    fn drop(&mut self) {
        self.history.end_group();
    }
}
