//! Reads an emulator installation directory into an `EmulatorConfig`
//!
//! Layout: `<path>/portable` marks a portable install and holds the data
//! directory; otherwise `<path>` is the data directory. Each game has a
//! folder named after its 16-digit hex title ID under `<data>/games`.

use emusak_core::{EmulatorConfig, Game, Result};
use std::fs;
use std::path::Path;

fn is_title_id(name: &str) -> bool {
    name.len() == 16 && name.chars().all(|c| c.is_ascii_hexdigit())
}

pub fn scan_emulator(path: &Path) -> Result<EmulatorConfig> {
    let portable_dir = path.join("portable");
    let is_portable = portable_dir.is_dir();
    let data_dir = if is_portable { portable_dir } else { path.to_path_buf() };
    let games_dir = data_dir.join("games");

    let mut ids = Vec::new();
    if games_dir.is_dir() {
        for entry in fs::read_dir(&games_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if is_title_id(&name) {
                ids.push(name.to_uppercase());
            }
        }
    } else {
        tracing::debug!("No games folder at {}", games_dir.display());
    }
    ids.sort();

    Ok(EmulatorConfig::new(
        path,
        is_portable,
        ids.into_iter().map(Game::new).collect(),
    ))
}

/// Scan every configured installation, skipping the ones that cannot be read
pub fn scan_all(paths: &[impl AsRef<Path>]) -> Vec<EmulatorConfig> {
    paths.iter()
        .filter_map(|p| {
            let path = p.as_ref();
            match scan_emulator(path) {
                Ok(config) => {
                    tracing::info!("Found {} games in {}", config.games.len(), path.display());
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Skipping emulator at {}: {}", path.display(), e);
                    None
                }
            }
        })
        .collect()
}
