//! Main application module

mod panels;
mod state;

use crate::catalog::{load_resolver, load_saves, load_shaders};
use crate::config::Config;
use crate::emulator::scan_all;
use emusak_core::{EmulatorConfig, FeaturesPanel, SaveCatalog, ShaderCatalog, TitleResolver};

use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;

pub struct EmusakApp {
    pub(crate) config: Config,
    pub(crate) config_path: PathBuf,
    pub(crate) resolver: TitleResolver,
    pub(crate) emulators: Vec<EmulatorConfig>,
    // Panel state per installation path, kept across refreshes
    pub(crate) panels: HashMap<PathBuf, FeaturesPanel>,
    pub(crate) selected: usize,
    pub(crate) shaders: ShaderCatalog,
    pub(crate) saves: SaveCatalog,
    pub(crate) status: String,
}

impl EmusakApp {
    pub fn new() -> Self {
        Self::with_config(Config::load(), Config::default_path())
    }

    pub fn with_config(config: Config, config_path: PathBuf) -> Self {
        let resolver = load_resolver(&config);
        let shaders = load_shaders(&config);
        let saves = load_saves(&config);
        let emulators = scan_all(&config.emulators);

        let status = if config.emulators.is_empty() {
            "No emulator configured".to_string()
        } else {
            "Ready".to_string()
        };

        Self {
            config,
            config_path,
            resolver,
            emulators,
            panels: HashMap::new(),
            selected: 0,
            shaders,
            saves,
            status,
        }
    }

    pub(crate) fn selected_emulator(&self) -> Option<&EmulatorConfig> {
        self.emulators.get(self.selected)
    }
}

impl eframe::App for EmusakApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_panel(ctx);
        self.render_features(ctx);
    }
}
