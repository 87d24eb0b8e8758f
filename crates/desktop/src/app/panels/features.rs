//! Central panel - features panel of the selected emulator

use eframe::egui;
use emusak_core::{dispatch, render_features_panel, FeaturesProps};

use crate::app::EmusakApp;

impl EmusakApp {
    pub(crate) fn render_features(&mut self, ctx: &egui::Context) {
        let Some(config) = self.selected_emulator().cloned() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(format!(
                        "Add emulator directories to {} and press refresh",
                        self.config_path.display()
                    ));
                });
            });
            return;
        };

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            let panel = self.panels.entry(config.path.clone()).or_default();
            panel.sync(&config, &self.resolver);
            let props = FeaturesProps {
                config: &config,
                firmware_version: self.config.firmware_version.as_deref(),
                shaders: &self.shaders,
                saves: &self.saves,
            };
            actions = render_features_panel(ui, panel, &props);
        });

        for action in actions {
            dispatch(action, &config, self);
        }
    }
}
