// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Preference storage for mathf tools.
//!
//! [`ConfigService`] serializes values to JSON and hands the bytes to a
//! [`ConfigStore`]. Two stores ship here: [`FsConfigStore`] (one file per key
//! under the platform config directory) and [`MemoryConfigStore`].

pub mod config;
mod fs;
mod memory;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use fs::FsConfigStore;
pub use memory::MemoryConfigStore;
