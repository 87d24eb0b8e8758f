//! Loads the title databases and asset catalogs named in the configuration

use crate::config::Config;
use emusak_core::{
    CustomDatabase, NswdbDatabase, Result, SaveCatalog, ShaderCatalog, TinfoilDatabase, TitleResolver,
};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Unset or unreadable sources are logged and left out
fn load_optional<T>(path: Option<&Path>, what: &str, load: impl FnOnce(&Path) -> Result<T>) -> Option<T> {
    let path = path?;
    match load(path) {
        Ok(value) => {
            tracing::info!("Loaded {} from {}", what, path.display());
            Some(value)
        }
        Err(e) => {
            tracing::warn!("Could not load {} from {}: {}", what, path.display(), e);
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}

pub fn load_resolver(config: &Config) -> TitleResolver {
    TitleResolver::standard(
        load_optional(config.custom_db.as_deref(), "custom database", CustomDatabase::from_path),
        load_optional(config.tinfoil_db.as_deref(), "Tinfoil database", TinfoilDatabase::from_path),
        load_optional(config.nswdb_db.as_deref(), "NSWDB database", NswdbDatabase::from_path),
    )
}

pub fn load_shaders(config: &Config) -> ShaderCatalog {
    load_optional(config.shaders_catalog.as_deref(), "shader catalog", read_json::<ShaderCatalog>).unwrap_or_default()
}

pub fn load_saves(config: &Config) -> SaveCatalog {
    load_optional(config.saves_catalog.as_deref(), "save catalog", read_json::<SaveCatalog>).unwrap_or_default()
}
