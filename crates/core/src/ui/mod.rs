//! egui rendering of the features panel
//!
//! The panel only reads its props and returns [`crate::FeatureAction`]s;
//! the host decides what the actions do.

mod catalog_table;
mod features_panel;
mod saves_list;
mod shaders_list;

pub use features_panel::*;
pub use saves_list::*;
pub use shaders_list::*;

use egui::{Color32, RichText, Ui};

/// Rounded label used for small status values
pub fn chip(ui: &mut Ui, text: &str, fill: Color32) -> egui::Response {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).strong());
        })
        .response
}
