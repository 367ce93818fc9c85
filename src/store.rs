// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::path::PathBuf;

use crate::models::{FamilyConfig, IncomeRecord, PendingUndo, Profiles, Wish};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.nestegg", "Nestegg", "nestegg"));

/// One JSON document per key, each independently loaded and saved.
pub mod keys {
    pub const RECORDS: &str = "records";
    pub const WISHES: &str = "wishes";
    pub const YEARLY_GOAL: &str = "yearly_goal";
    pub const FAMILY: &str = "family_config";
    pub const PROFILES: &str = "profiles";
    pub const UNDO: &str = "pending_undo";
}

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// The storage collaborator: a flat key -> JSON document store on disk.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open_default() -> Result<Self> {
        Ok(Store { dir: data_dir()? })
    }

    pub fn open_at(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Store { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Missing or malformed documents read as absent, never as an error.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = fs::read(self.path_for(key)).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let body = serde_json::to_vec_pretty(value)?;
        fs::write(&path, body).with_context(|| format!("write {}", path.display()))
    }

    /// Best-effort save. A failed write is not fatal to the session: the
    /// in-memory state stays authoritative, the user is warned once.
    pub fn persist<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.save(key, value) {
            eprintln!(
                "warning: could not persist '{}' ({:#}); changes are kept in memory for this session",
                key, e
            );
        }
    }
}

fn default_yearly_goal() -> Decimal {
    Decimal::new(200_000, 0)
}

/// The whole application state, loaded once and passed explicitly to command
/// handlers, which mutate it and then persist the documents they touched.
pub struct AppState {
    pub records: Vec<IncomeRecord>,
    pub wishes: Vec<Wish>,
    pub yearly_goal: Decimal,
    pub family: FamilyConfig,
    pub profiles: Profiles,
    pub undo: Option<PendingUndo>,
}

impl AppState {
    pub fn load(store: &Store) -> Self {
        AppState {
            records: store.load(keys::RECORDS).unwrap_or_default(),
            wishes: store.load(keys::WISHES).unwrap_or_default(),
            yearly_goal: store.load(keys::YEARLY_GOAL).unwrap_or_else(default_yearly_goal),
            family: store.load(keys::FAMILY).unwrap_or_default(),
            profiles: store.load(keys::PROFILES).unwrap_or_default(),
            undo: store.load(keys::UNDO),
        }
    }
}
