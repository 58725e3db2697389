//! Command line interface for layersync
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use crate::core::state::LayerRole;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// layersync CLI arguments
///
/// Examples:
///   layersync inspect --font MyFont.ufo                           # Show layer structure
///   layersync inspect --font MyFont.json --glyph a                # One glyph only
///   layersync remove -f MyFont.json -g a -l light -s node:0:2     # Remove a node everywhere
///   layersync remove -f MyFont.ufo -g a -l public.default -s anchor:top --backup
///   layersync new-config                                          # Write default settings
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "layersync",
    version,
    about = "Remove selected elements from all compatible layers of a glyph",
    long_about = "layersync removes a selection made in one layer of a glyph (points, anchors, components and corner hints) from every master and intermediate layer that has the same outline structure, as a single undoable edit. Works on .json documents and .ufo sources."
)]
pub struct CliArgs {
    /// Show debug output
    #[clap(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Also write logs to ~/.config/layersync/logs/
    #[clap(long = "log-file", global = true)]
    pub log_file: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Remove a selection from every compatible layer of a glyph
    Remove(RemoveArgs),
    /// Show layers, point counts and structural compatibility
    Inspect(InspectArgs),
    /// Initialize the user config directory with default settings
    NewConfig,
}

#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// Font source to edit (.json document or .ufo directory)
    #[clap(long = "font", short = 'f')]
    pub font: PathBuf,

    /// Glyph to edit
    #[clap(long = "glyph", short = 'g')]
    pub glyph: String,

    /// Layer the selection refers to
    #[clap(long = "layer", short = 'l')]
    pub layer: String,

    /// Selected element, repeatable
    ///
    /// node:PATH:NODE, anchor:NAME, component:INDEX or hint:INDEX
    #[clap(long = "select", short = 's', value_name = "ELEMENT")]
    pub select: Vec<String>,

    /// Back up all master layers into their backgrounds first
    #[clap(long = "backup")]
    pub backup: bool,

    /// Do not back up, even if settings.json says so
    #[clap(long = "no-backup", conflicts_with = "backup")]
    pub no_backup: bool,

    /// Layer roles to edit, comma separated (e.g. master,intermediate)
    #[clap(long = "roles", value_delimiter = ',')]
    pub roles: Vec<String>,

    /// Where to save the result (defaults to the input)
    #[clap(long = "output", short = 'o')]
    pub output: Option<PathBuf>,

    /// Report what would be removed without saving
    #[clap(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Font source to read (.json document or .ufo directory)
    #[clap(long = "font", short = 'f')]
    pub font: PathBuf,

    /// Only show this glyph
    #[clap(long = "glyph", short = 'g')]
    pub glyph: Option<String>,
}

impl RemoveArgs {
    /// The backup choice made on the command line, if any
    pub fn backup_flag(&self) -> Option<bool> {
        if self.backup {
            Some(true)
        } else if self.no_backup {
            Some(false)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_font_source(&self.font)?;
        if self.select.is_empty() {
            return Err("Nothing selected\nPass at least one --select, e.g. --select node:0:2".into());
        }
        Ok(())
    }

    /// Roles given with --roles, if any
    pub fn parsed_roles(&self) -> Result<Option<Vec<LayerRole>>, String> {
        if self.roles.is_empty() {
            return Ok(None);
        }
        self.roles
            .iter()
            .map(|name| {
                LayerRole::parse(name.trim()).ok_or_else(|| {
                    format!(
                        "Unknown layer role '{name}'\nExpected master, intermediate, alternate, background or other."
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Path the result is written to
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.font)
    }
}

impl InspectArgs {
    pub fn validate(&self) -> Result<(), String> {
        validate_font_source(&self.font)
    }
}

/// Check a font source path before trying to load it
fn validate_font_source(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!(
            "Font source does not exist: {}\nMake sure the path is correct and the file exists.",
            path.display()
        ));
    }

    if path.is_dir() {
        let meta_info = path.join("metainfo.plist");
        if !meta_info.exists() {
            return Err(format!(
                "Not a valid UFO directory: missing metainfo.plist in {}\nMake sure this is a valid UFO directory.",
                path.display()
            ));
        }
    } else if path.extension().is_none_or(|ext| ext != "json") {
        return Err(format!(
            "Unsupported file type: {}\nOnly .json documents are supported for non-directory sources.",
            path.display()
        ));
    }

    Ok(())
}
