//! Application runner logic
//!
//! Handles the different subcommands of layersync

use crate::core::cli::{CliArgs, Command, InspectArgs, RemoveArgs};
use crate::core::config_file::ConfigFile;
use crate::core::errors::{anyhow, bail, LayerSyncResult};
use crate::core::settings::{self, LayerSyncSettings};
use crate::core::state::{GlyphData, Selection};
use crate::data::{self, SourceFormat};
use crate::editing::sync_removal::LayerSignature;
use crate::editing::{remove_in_compatible_layers, EditHistory, RemovalOutcome, RemovalRequest};
use crate::logging;
use anyhow::Context;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Run the subcommand given on the command line.
pub fn run_app(cli_args: CliArgs) -> LayerSyncResult<()> {
    if let Command::NewConfig = cli_args.command {
        return ConfigFile::initialize_config_directory();
    }

    // Settings problems are reported once the subscriber is up
    let loaded = ConfigFile::try_load();
    let level = startup_log_level(
        loaded.as_ref().ok().and_then(Option::as_ref),
        cli_args.verbose,
    );
    let _log_guard = logging::init_logging(level, cli_args.log_file)?;

    let config = loaded.unwrap_or_else(|e| {
        warn!("Ignoring user settings: {:#}", e);
        None
    });
    let settings = LayerSyncSettings::from_config(config.as_ref());
    debug!("Effective settings: {:?}", settings);

    run_command(&cli_args, &settings)
}

fn startup_log_level(config: Option<&ConfigFile>, verbose: bool) -> &str {
    if verbose {
        return "debug";
    }
    config
        .and_then(|config| config.log_level.as_deref())
        .unwrap_or(settings::DEFAULT_LOG_LEVEL)
}

/// Dispatch a parsed command with settings already resolved
pub(crate) fn run_command(cli_args: &CliArgs, settings: &LayerSyncSettings) -> LayerSyncResult<()> {
    match &cli_args.command {
        Command::Remove(args) => run_remove(args, settings),
        Command::Inspect(args) => run_inspect(args),
        Command::NewConfig => Ok(()),
    }
}

fn run_remove(args: &RemoveArgs, settings: &LayerSyncSettings) -> LayerSyncResult<()> {
    args.validate().map_err(|e| anyhow!(e))?;

    let mut font = data::load_font(&args.font)?;
    let selection = Selection::parse_all(&args.select)?;
    let roles = args
        .parsed_roles()
        .map_err(|e| anyhow!(e))?
        .unwrap_or_else(|| settings.eligible_roles.clone());
    let request = RemovalRequest::new(&args.glyph, &args.layer, selection)
        .with_backup(settings.backup_for(args.backup_flag()))
        .with_eligible_roles(roles);

    let output = args.output_path();
    if request.options.backup_first && !SourceFormat::from_path(output)?.keeps_backgrounds() {
        warn!(
            "Backups go into layer backgrounds, which {} does not store; save as .json to keep them",
            output.display()
        );
    }

    let mut history = EditHistory::new();
    let outcome = remove_in_compatible_layers(&mut font, &mut history, &request);
    println!("{}", outcome.summary());

    let report = match &outcome {
        RemovalOutcome::Failed(message) => bail!("{}", message),
        RemovalOutcome::NothingSelected => return Ok(()),
        RemovalOutcome::Completed(report) => report,
    };

    for layer in &report.layers {
        println!(
            "  {}: {} nodes, {} paths, {} anchors, {} components, {} hints",
            layer.layer_id,
            layer.nodes_removed,
            layer.paths_removed,
            layer.anchors_removed,
            layer.components_removed,
            layer.hints_removed
        );
    }
    for skipped in &report.skipped {
        println!("  {}: skipped ({})", skipped.layer_id, skipped.fault);
    }

    if args.dry_run {
        info!("Dry run, not saving");
        return Ok(());
    }
    if !report.undoable {
        debug!("Nothing changed, not saving");
        return Ok(());
    }

    data::save_font(&font, output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    info!("Saved {}", output.display());
    Ok(())
}

fn run_inspect(args: &InspectArgs) -> LayerSyncResult<()> {
    args.validate().map_err(|e| anyhow!(e))?;
    let font = data::load_font(&args.font)?;

    match &args.glyph {
        Some(name) => {
            let glyph = font
                .glyph(name)
                .ok_or_else(|| anyhow!("glyph '{}' not found in {}", name, args.font.display()))?;
            print_glyph(glyph);
        }
        None => {
            for glyph in font.glyphs.values() {
                print_glyph(glyph);
            }
        }
    }
    Ok(())
}

fn print_glyph(glyph: &GlyphData) {
    println!("{}", glyph.name);
    for (layer, group) in glyph.layers.iter().zip(compatibility_groups(glyph)) {
        let signature = LayerSignature::of(layer);
        println!(
            "  {:<24} {:<12} paths {:>3}  on {:>4}  off {:>4}  {}  group {}",
            layer.id,
            layer.role.as_str(),
            signature.path_count(),
            layer.on_curve_count(),
            layer.off_curve_count(),
            signature.digest(),
            group
        );
    }
}

/// Number each layer by structure: layers sharing a number are compatible
fn compatibility_groups(glyph: &GlyphData) -> Vec<usize> {
    let mut seen: HashMap<LayerSignature, usize> = HashMap::new();
    glyph
        .layers
        .iter()
        .map(|layer| {
            let next = seen.len() + 1;
            *seen.entry(LayerSignature::of(layer)).or_insert(next)
        })
        .collect()
}
