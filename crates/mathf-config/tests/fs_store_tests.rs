// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Filesystem store round-trips through a temporary directory.

use mathf_config::{ConfigError, ConfigService, ConfigStore, FsConfigStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Prefs {
    precision: Option<usize>,
    json: bool,
}

#[test]
fn with_base_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FsConfigStore::with_base(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.base(), nested.as_path());
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path()).unwrap();
    assert!(matches!(store.load_raw("cli-prefs"), Err(ConfigError::NotFound)));
}

#[test]
fn service_persists_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let svc = ConfigService::new(FsConfigStore::with_base(dir.path()).unwrap());
    let prefs = Prefs {
        precision: Some(4),
        json: false,
    };
    svc.save("cli-prefs", &prefs).unwrap();

    let path = svc.store().path_for("cli-prefs");
    assert_eq!(path, dir.path().join("cli-prefs.json"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"precision\": 4"));

    // A fresh store over the same directory sees the saved value.
    let reopened = ConfigService::new(FsConfigStore::with_base(dir.path()).unwrap());
    assert_eq!(reopened.load::<Prefs>("cli-prefs").unwrap(), Some(prefs));
}

#[test]
fn path_like_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path()).unwrap();
    assert!(matches!(
        store.save_raw("../escape", b"{}"),
        Err(ConfigError::InvalidKey(_))
    ));
}
