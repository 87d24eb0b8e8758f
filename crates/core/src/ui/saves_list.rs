//! Save list

use egui::Ui;

use super::catalog_table::render_catalog_table;
use crate::{ResolvedGame, SaveCatalog};

/// Render the save table. Returns the title ID whose download was clicked.
pub fn render_saves_list(ui: &mut Ui, games: &[&ResolvedGame], catalog: &SaveCatalog) -> Option<String> {
    render_catalog_table(ui, "saves_list", "Saves", games, |id| catalog.count(id))
}
