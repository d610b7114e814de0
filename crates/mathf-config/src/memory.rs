// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::config::{validate_key, ConfigError, ConfigStore};

/// In-process `ConfigStore`; contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blobs: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        validate_key(key)?;
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| ConfigError::Other("memory store poisoned".into()))?;
        blobs.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        validate_key(key)?;
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| ConfigError::Other("memory store poisoned".into()))?;
        blobs.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}
