//! Shared data models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A game installed in an emulator, known only by its title ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
}

impl Game {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Game with a display name resolved from the title databases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGame {
    pub id: String,
    pub name: String,
}

/// One managed emulator installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatorConfig {
    pub path: PathBuf,
    #[serde(rename = "isPortable", default)]
    pub is_portable: bool,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl EmulatorConfig {
    pub fn new(path: impl Into<PathBuf>, is_portable: bool, games: Vec<Game>) -> Self {
        Self {
            path: path.into(),
            is_portable,
            games,
        }
    }

    /// Path shown in the panel header
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Shader packs available per title ID (title ID -> shader count)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShaderCatalog(pub HashMap<String, u32>);

/// Save files available per title ID (title ID -> save count)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveCatalog(pub HashMap<String, u32>);

/// Lookup shared by both catalogs. Title IDs are compared case-insensitively.
fn catalog_count(map: &HashMap<String, u32>, id: &str) -> u32 {
    map.get(id)
        .or_else(|| map.get(&id.to_uppercase()))
        .or_else(|| map.get(&id.to_lowercase()))
        .copied()
        .unwrap_or(0)
}

impl ShaderCatalog {
    pub fn count(&self, id: &str) -> u32 {
        catalog_count(&self.0, id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SaveCatalog {
    pub fn count(&self, id: &str) -> u32 {
        catalog_count(&self.0, id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
