// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! mathf CLI entrypoint.
//!
//! Evaluates any catalog function from the shell and manages output
//! preferences.
//!
//! # Usage
//! ```text
//! mathf eval <function> [args...] [--format plain|json] [--precision N]
//! mathf list
//! mathf consts
//! mathf prefs show|path|set
//! ```
//!
//! Exits `0` on success and non-zero with a message on stderr otherwise.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod prefs;
mod render;

use cli::{Cli, Command, PrefsCommand};
use prefs::{load_lenient, load_strict, open_service, PREFS_KEY};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    let out = run(cli)?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
    Ok(())
}

/// Executes one command and returns the text to print.
fn run(cli: Cli) -> Result<String> {
    let dir = cli.config_dir.as_deref();
    match cli.command {
        Command::Eval(args) => {
            let opts = load_lenient(dir).resolve(args.output);
            let spec = mathf::lookup(&args.function)?;
            debug!(function = spec.name, args = ?args.args, "evaluating");
            let value = spec.call(&args.args)?;
            Ok(render::eval_result(spec, &args.args, value, opts))
        }
        Command::List(output) => {
            let opts = load_lenient(dir).resolve(output);
            Ok(render::catalog_listing(mathf::catalog::catalog(), opts.format))
        }
        Command::Consts(output) => {
            let opts = load_lenient(dir).resolve(output);
            Ok(render::constants(mathf::catalog::constants(), opts))
        }
        Command::Prefs(PrefsCommand::Show) => {
            let svc = open_service(dir)?;
            let prefs = load_strict(&svc)?;
            Ok(render::prefs(&prefs, prefs.format))
        }
        Command::Prefs(PrefsCommand::Path) => {
            let svc = open_service(dir)?;
            Ok(svc.store().path_for(PREFS_KEY).display().to_string())
        }
        Command::Prefs(PrefsCommand::Set(set)) => {
            let svc = open_service(dir)?;
            let mut prefs = load_strict(&svc)?;
            if prefs.apply(&set) {
                svc.save(PREFS_KEY, &prefs)
                    .with_context(|| format!("save {PREFS_KEY}"))?;
                info!(?prefs, "preferences updated");
            } else {
                debug!("preferences unchanged");
            }
            Ok(render::prefs(&prefs, prefs.format))
        }
    }
}
