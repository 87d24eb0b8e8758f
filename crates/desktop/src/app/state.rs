//! App state management - refresh and the features panel callbacks

use crate::catalog::{load_resolver, load_saves, load_shaders};
use crate::config::Config;
use crate::emulator::scan_all;
use emusak_core::{EmulatorConfig, FeaturesCallbacks};

use super::EmusakApp;

impl EmusakApp {
    /// Reload configuration, title databases and catalogs, then rescan installs
    pub(crate) fn refresh(&mut self) {
        self.config = Config::load_from(&self.config_path);
        self.resolver = load_resolver(&self.config);
        self.shaders = load_shaders(&self.config);
        self.saves = load_saves(&self.config);
        self.emulators = scan_all(&self.config.emulators);

        // Databases may have changed even where the game folders did not
        for emulator in &self.emulators {
            if let Some(panel) = self.panels.get_mut(&emulator.path) {
                panel.recompute(emulator, &self.resolver);
            }
        }
        let emulators = &self.emulators;
        self.panels.retain(|path, _| emulators.iter().any(|e| &e.path == path));

        if self.selected >= self.emulators.len() {
            self.selected = self.emulators.len().saturating_sub(1);
        }
        self.status = format!("Refreshed {} emulator(s)", self.emulators.len());
        tracing::info!("{}", self.status);
    }
}

impl FeaturesCallbacks for EmusakApp {
    fn on_firmware_download(&mut self) {
        let version = self.config.firmware_version().unwrap_or_default();
        tracing::info!(version, "firmware download requested");
        self.status = format!("Firmware {} download requested", version);
    }

    fn on_keys_download(&mut self) {
        tracing::info!("keys download requested");
        self.status = "Keys download requested".to_string();
    }

    fn on_emu_config_delete(&mut self, config: &EmulatorConfig) {
        if !self.config.remove_emulator(&config.path) {
            tracing::warn!("{} is not in the configuration", config.display_path());
        }
        if let Err(e) = self.config.save_to(&self.config_path) {
            tracing::error!("Failed to save configuration: {}", e);
            self.status = format!("Error: {}", e);
            return;
        }

        self.emulators.retain(|e| e.path != config.path);
        self.panels.remove(&config.path);
        if self.selected >= self.emulators.len() {
            self.selected = self.emulators.len().saturating_sub(1);
        }
        tracing::info!("Removed emulator {}", config.display_path());
        self.status = format!("Removed {}", config.display_path());
    }

    fn on_shaders_download(&mut self, id: &str) {
        let count = self.shaders.count(id);
        let name = self.resolver.resolve_name(id);
        tracing::info!(id, count, "shader download requested");
        self.status = format!("Shader download requested for {} ({} shaders)", name, count);
    }

    fn on_refresh(&mut self) {
        self.refresh();
    }
}
