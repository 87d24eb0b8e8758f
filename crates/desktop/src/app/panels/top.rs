//! Top toolbar panel - emulator selector and status

use eframe::egui;
use egui_phosphor::regular;

use crate::app::EmusakApp;

impl EmusakApp {
    pub(crate) fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("EmuSAK");
                ui.separator();

                for (index, emulator) in self.emulators.iter().enumerate() {
                    let label = emulator.path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| emulator.display_path());
                    let response = ui.selectable_label(
                        self.selected == index,
                        format!("{} {}", regular::GAME_CONTROLLER, label),
                    ).on_hover_text(emulator.display_path());
                    if response.clicked() {
                        self.selected = index;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(regular::ARROWS_CLOCKWISE).on_hover_text("Reload configuration").clicked() {
                        self.refresh();
                    }
                    ui.label(&self.status);
                });
            });
        });
    }
}
