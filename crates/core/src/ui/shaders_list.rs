//! Shader list - one row per game with its shader count

use egui::Ui;

use super::catalog_table::render_catalog_table;
use crate::{ResolvedGame, ShaderCatalog};

/// Render the shader table. Returns the title ID whose download was clicked.
pub fn render_shaders_list(ui: &mut Ui, games: &[&ResolvedGame], catalog: &ShaderCatalog) -> Option<String> {
    render_catalog_table(ui, "shaders_list", "Shaders", games, |id| catalog.count(id))
}
