// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stored CLI preferences and their resolution against command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use mathf_config::{ConfigService, FsConfigStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cli::{Format, OutputArgs, SetArgs};

/// Config key for [`CliPrefs`].
pub(crate) const PREFS_KEY: &str = "cli-prefs";

/// Preferences persisted between invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CliPrefs {
    /// Fixed decimals for numeric output; `None` prints the shortest exact form.
    pub precision: Option<usize>,
    /// Default output format.
    pub format: Format,
}

impl CliPrefs {
    /// Applies a `prefs set` request. Returns `true` if anything changed.
    pub fn apply(&mut self, set: &SetArgs) -> bool {
        let before = *self;
        if let Some(p) = set.set_precision {
            self.precision = Some(p);
        }
        if set.clear_precision {
            self.precision = None;
        }
        if let Some(f) = set.set_format {
            self.format = f;
        }
        before != *self
    }

    /// Effective output settings: flags win over stored values.
    pub fn resolve(self, flags: OutputArgs) -> OutputOptions {
        OutputOptions {
            format: flags.format.unwrap_or(self.format),
            precision: flags.precision.or(self.precision),
        }
    }
}

/// Output settings for a single invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct OutputOptions {
    pub format: Format,
    pub precision: Option<usize>,
}

/// Opens the preferences store at `dir`, or the platform config dir.
pub(crate) fn open_service(dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::with_base(dir)
            .with_context(|| format!("open config dir {}", dir.display()))?,
        None => FsConfigStore::new().context("open platform config dir")?,
    };
    debug!(base = %store.base().display(), "config store opened");
    Ok(ConfigService::new(store))
}

/// Loads preferences, failing on unreadable or corrupt config.
pub(crate) fn load_strict(svc: &ConfigService<FsConfigStore>) -> Result<CliPrefs> {
    let prefs = svc
        .load_or_default::<CliPrefs>(PREFS_KEY)
        .with_context(|| format!("load {}", svc.store().path_for(PREFS_KEY).display()))?;
    debug!(?prefs, "preferences loaded");
    Ok(prefs)
}

/// Loads preferences for read-only commands, falling back to defaults on any
/// config failure so a broken prefs file never blocks evaluation.
pub(crate) fn load_lenient(dir: Option<&Path>) -> CliPrefs {
    match open_service(dir).and_then(|svc| load_strict(&svc)) {
        Ok(prefs) => prefs,
        Err(err) => {
            warn!("ignoring stored preferences: {err:#}");
            CliPrefs::default()
        }
    }
}
