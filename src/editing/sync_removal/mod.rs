//! Removing a selection from every compatible layer of a glyph
//!
//! A selection made in one layer (nodes, anchors, components, corner hints)
//! is translated into identifiers that mean the same thing in other layers,
//! and the matching elements are removed from every layer whose structure
//! equals the reference layer's. The whole edit is one undo step.
//!
//! Flow: [`normalize_selection`] → [`resolve_compatible_layers`] →
//! [`plan_removal`] → [`executor::execute`] → history commit.

pub mod compatibility;
pub mod executor;
pub mod normalize;
pub mod plan;
pub mod signature;
pub mod snapshot;

pub use compatibility::{resolve_compatible_layers, CompatibleLayers, Rejection, RejectedLayer};
pub use executor::{LayerOutcome, SkippedLayer};
pub use normalize::{normalize_selection, NormalizedSelection};
pub use plan::{plan_removal, NodeRemoval, RemovalPlan};
pub use signature::LayerSignature;
pub use snapshot::{backup_master_layers, Backups, LayerBackup};

use crate::core::errors::{LayerFault, LayerSyncContext, LayerSyncResult};
use crate::core::state::{FontData, LayerRole, Selection};
use crate::editing::history::EditHistory;
use tracing::{debug, error, info};

/// Label of the history group the removal is recorded under
pub const EDIT_LABEL: &str = "Remove in compatible layers";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalOptions {
    /// Back up every master layer, decomposed, into its background first
    pub backup_first: bool,
    /// Layer roles the removal may touch
    pub eligible_roles: Vec<LayerRole>,
}

impl Default for RemovalOptions {
    fn default() -> Self {
        Self {
            backup_first: false,
            eligible_roles: LayerRole::default_eligible(),
        }
    }
}

/// Everything the removal needs to know, passed in explicitly
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalRequest {
    pub glyph: String,
    /// Layer the selection was made in
    pub layer_id: String,
    pub selection: Selection,
    pub options: RemovalOptions,
}

impl RemovalRequest {
    pub fn new(glyph: impl Into<String>, layer_id: impl Into<String>, selection: Selection) -> Self {
        Self {
            glyph: glyph.into(),
            layer_id: layer_id.into(),
            selection,
            options: RemovalOptions::default(),
        }
    }

    pub fn with_backup(mut self, backup_first: bool) -> Self {
        self.options.backup_first = backup_first;
        self
    }

    pub fn with_eligible_roles(mut self, roles: Vec<LayerRole>) -> Self {
        self.options.eligible_roles = roles;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemovalReport {
    pub glyph: String,
    /// Layers that were edited, in layer order
    pub layers: Vec<LayerOutcome>,
    /// Compatible layers the plan did not fit
    pub skipped: Vec<SkippedLayer>,
    /// Layers left out by role or structure
    pub rejected: Vec<RejectedLayer>,
    pub backed_up: Vec<String>,
    pub backup_failures: Vec<String>,
    /// Whether an undo step was recorded
    pub undoable: bool,
}

impl RemovalReport {
    fn totals(&self) -> LayerOutcome {
        self.layers
            .iter()
            .fold(LayerOutcome::default(), |mut acc, layer| {
                acc.nodes_removed += layer.nodes_removed;
                acc.paths_removed += layer.paths_removed;
                acc.anchors_removed += layer.anchors_removed;
                acc.components_removed += layer.components_removed;
                acc.hints_removed += layer.hints_removed;
                acc
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The selection held nothing removable; the document was not touched
    NothingSelected,
    Completed(RemovalReport),
    /// The operation was aborted; the document was not touched
    Failed(String),
}

impl RemovalOutcome {
    pub fn report(&self) -> Option<&RemovalReport> {
        match self {
            RemovalOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemovalOutcome::Failed(_))
    }

    /// One line for a notification or the log
    pub fn summary(&self) -> String {
        match self {
            RemovalOutcome::NothingSelected => "Nothing selected".to_string(),
            RemovalOutcome::Failed(message) => format!("Removal failed: {message}"),
            RemovalOutcome::Completed(report) => {
                let totals = report.totals();
                let parts: Vec<String> = [
                    (totals.nodes_removed, "node"),
                    (totals.paths_removed, "path"),
                    (totals.anchors_removed, "anchor"),
                    (totals.components_removed, "component"),
                    (totals.hints_removed, "hint"),
                ]
                .into_iter()
                .filter(|(count, _)| *count > 0)
                .map(|(count, noun)| plural(count, noun))
                .collect();

                let mut line = if parts.is_empty() {
                    format!("'{}': nothing removed", report.glyph)
                } else {
                    format!(
                        "'{}': removed {} across {}",
                        report.glyph,
                        parts.join(", "),
                        plural(report.layers.len(), "layer")
                    )
                };
                if !report.skipped.is_empty() {
                    line.push_str(&format!("; {} skipped", plural(report.skipped.len(), "layer")));
                }
                if !report.backed_up.is_empty() {
                    line.push_str(&format!("; backed up {}", plural(report.backed_up.len(), "layer")));
                }
                if !report.backup_failures.is_empty() {
                    line.push_str(&format!(
                        "; backup failed for {}",
                        plural(report.backup_failures.len(), "layer")
                    ));
                }
                line
            }
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Remove the selected elements from every compatible layer of the glyph.
///
/// Never returns an error: failures are logged and reported in the outcome,
/// and leave the document as it was.
pub fn remove_in_compatible_layers(
    font: &mut FontData,
    history: &mut EditHistory,
    request: &RemovalRequest,
) -> RemovalOutcome {
    let outcome = match try_remove(font, history, request) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(
                "Removing selection from '{}' failed: {:?}",
                request.glyph, e
            );
            RemovalOutcome::Failed(format!("{e:#}"))
        }
    };
    info!("{}", outcome.summary());
    outcome
}

fn try_remove(
    font: &mut FontData,
    history: &mut EditHistory,
    request: &RemovalRequest,
) -> LayerSyncResult<RemovalOutcome> {
    let glyph = font
        .glyph(&request.glyph)
        .ok_or_else(|| LayerFault::GlyphNotFound(request.glyph.clone()))
        .with_glyph_context("edit", &request.glyph)?;
    let reference = glyph
        .layer(&request.layer_id)
        .ok_or_else(|| LayerFault::LayerNotFound(request.layer_id.clone()))
        .with_glyph_context("edit", &request.glyph)?;

    let selection = normalize_selection(reference, &request.selection);
    if selection.is_empty() {
        debug!(
            "No removable elements selected in layer '{}' of '{}'",
            reference.id, glyph.name
        );
        return Ok(RemovalOutcome::NothingSelected);
    }
    debug!("Normalized selection: {:?}", selection);

    let signature = LayerSignature::of(reference);
    let compatible =
        resolve_compatible_layers(glyph, &signature, &request.options.eligible_roles);
    for rejected in &compatible.rejected {
        debug!("Layer '{}' left out: {:?}", rejected.id, rejected.reason);
    }
    debug!(
        "{} compatible layers for signature {}",
        compatible.indices.len(),
        signature.digest()
    );

    let plan = plan_removal(&selection);
    debug!("Removal plan: {:?}", plan);

    let backups = if request.options.backup_first {
        backup_master_layers(font, &request.glyph)
    } else {
        Backups::default()
    };
    let backup_failures = backups.failed.clone();

    let execution = executor::execute(
        font,
        history,
        &request.glyph,
        EDIT_LABEL,
        &compatible,
        &plan,
        backups,
    )?;

    Ok(RemovalOutcome::Completed(RemovalReport {
        glyph: request.glyph.clone(),
        layers: execution.layers,
        skipped: execution.skipped,
        rejected: compatible.rejected,
        backed_up: execution.backed_up,
        backup_failures,
        undoable: execution.committed,
    }))
}
