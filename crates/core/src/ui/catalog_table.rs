//! Table shared by the shader and save lists

use egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular;

use crate::ResolvedGame;

/// Game / Title ID / count / download button. Returns the title ID whose
/// download was clicked. The button is enabled only when `count_of` is non-zero.
pub(crate) fn render_catalog_table(
    ui: &mut Ui,
    id_salt: &str,
    count_header: &str,
    games: &[&ResolvedGame],
    count_of: impl Fn(&str) -> u32,
) -> Option<String> {
    if games.is_empty() {
        ui.add_space(8.0);
        ui.label(RichText::new("No games found").color(Color32::GRAY));
        return None;
    }

    let row_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);
    let mut clicked = None;

    ui.push_id(id_salt, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(200.0).clip(true))
            .column(Column::exact(150.0))
            .column(Column::exact(90.0))
            .column(Column::exact(110.0))
            .min_scrolled_height(0.0)
            .header(20.0, |mut header| {
                header.col(|ui| { ui.strong("Game"); });
                header.col(|ui| { ui.strong("Title ID"); });
                header.col(|ui| { ui.strong(count_header); });
                header.col(|_| {});
            })
            .body(|body| {
                body.rows(row_height, games.len(), |mut row| {
                    let game = games[row.index()];
                    let count = count_of(&game.id);

                    row.col(|ui| { ui.label(&game.name); });
                    row.col(|ui| { ui.monospace(&game.id); });
                    row.col(|ui| {
                        if count > 0 {
                            ui.label(count.to_string());
                        } else {
                            ui.label(RichText::new("-").color(Color32::GRAY));
                        }
                    });
                    row.col(|ui| {
                        let button = egui::Button::new(format!("{} Download", regular::DOWNLOAD_SIMPLE));
                        if ui.add_enabled(count > 0, button).clicked() {
                            clicked = Some(game.id.clone());
                        }
                    });
                });
            });
    });

    clicked
}
