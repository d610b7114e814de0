// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "mathf",
    author,
    version,
    about = "Evaluate mathf scalar helpers from the shell",
    disable_help_subcommand = true
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding `cli-prefs.json` (defaults to the platform config dir).
    #[arg(long, global = true, env = "MATHF_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate one function, e.g. `mathf eval lerp 0 10 0.5`.
    Eval(EvalArgs),
    /// List every available function.
    List(OutputArgs),
    /// Print the named constants.
    Consts(OutputArgs),
    /// Show or change stored preferences.
    #[command(subcommand)]
    Prefs(PrefsCommand),
}

#[derive(Args, Debug)]
pub(crate) struct EvalArgs {
    /// Function name, camelCase (`pingPong`) or snake_case (`ping_pong`).
    pub function: String,

    /// Numeric arguments in call order.
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Per-invocation overrides of the stored output preferences.
#[derive(Args, Debug, Clone, Copy, Default)]
pub(crate) struct OutputArgs {
    /// Output format (overrides the stored preference).
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Fixed number of decimals for numeric output (overrides the stored preference).
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum PrefsCommand {
    /// Print the stored preferences.
    Show,
    /// Print the preferences file path.
    Path,
    /// Update stored preferences.
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub(crate) struct SetArgs {
    /// Store a fixed decimal count for numeric output.
    #[arg(long = "precision", value_name = "N", conflicts_with = "clear_precision")]
    pub set_precision: Option<usize>,

    /// Remove the stored decimal count.
    #[arg(long)]
    pub clear_precision: bool,

    /// Store the default output format.
    #[arg(long = "format", value_name = "FORMAT", value_enum)]
    pub set_format: Option<Format>,
}

/// Output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Format {
    /// Human-readable text.
    #[default]
    Plain,
    /// One JSON document per invocation.
    Json,
}
