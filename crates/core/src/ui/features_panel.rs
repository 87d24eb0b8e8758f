//! Features panel - per-emulator header, filter bar, Shaders/Saves/Mods tabs
//!
//! Renders: delete button + install path, firmware/keys download buttons,
//! portability chip, refresh + filter field, tab bar and the routed list.

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use super::{chip, render_saves_list, render_shaders_list};
use crate::{
    downloads_enabled, EmulatorConfig, FeatureAction, FeatureTab, FeatureView, FeaturesPanel,
    SaveCatalog, ShaderCatalog,
};

/// Inputs the host passes to the panel every frame
#[derive(Clone, Copy)]
pub struct FeaturesProps<'a> {
    pub config: &'a EmulatorConfig,
    /// `None` or empty while the firmware version is unknown
    pub firmware_version: Option<&'a str>,
    pub shaders: &'a ShaderCatalog,
    pub saves: &'a SaveCatalog,
}

const ACCENT: Color32 = Color32::from_rgb(63, 81, 181);

/// Render the whole panel. Returns the actions the user triggered this frame.
pub fn render_features_panel(ui: &mut Ui, panel: &mut FeaturesPanel, props: &FeaturesProps<'_>) -> Vec<FeatureAction> {
    let mut actions = Vec::new();

    let buttons = render_header(ui, props, &mut actions);
    for button in [buttons.firmware, buttons.keys] {
        button.on_disabled_hover_text("Firmware version not known yet");
    }
    ui.add_space(8.0);
    render_filter_bar(ui, panel, &mut actions);
    ui.add_space(12.0);
    render_tab_bar(ui, panel);
    ui.separator();

    let games = panel.filtered_games();
    match panel.tab().view() {
        Some(FeatureView::ShaderList) => {
            if let Some(id) = render_shaders_list(ui, &games, props.shaders) {
                actions.push(FeatureAction::DownloadShaders(id));
            }
        }
        Some(FeatureView::SaveList) => {
            if let Some(id) = render_saves_list(ui, &games, props.saves) {
                actions.push(FeatureAction::DownloadSaves(id));
            }
        }
        None => {}
    }

    actions
}

/// Responses of the firmware and keys buttons
pub(crate) struct DownloadButtons {
    pub firmware: egui::Response,
    pub keys: egui::Response,
}

fn render_header(ui: &mut Ui, props: &FeaturesProps<'_>, actions: &mut Vec<FeatureAction>) -> DownloadButtons {
    let can_download = downloads_enabled(props.firmware_version);
    let firmware_label = match props.firmware_version {
        Some(version) if !version.is_empty() => format!("{} Download firmware {}", regular::CPU, version),
        _ => format!("{} Download firmware", regular::CPU),
    };

    ui.horizontal(|ui| {
        let delete = ui.button(RichText::new(regular::TRASH).color(Color32::from_rgb(230, 80, 80)))
            .on_hover_text("Remove this emulator configuration");
        if delete.clicked() {
            actions.push(FeatureAction::DeleteConfig);
        }
        ui.label(RichText::new(props.config.display_path()).small());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            chip(ui, if props.config.is_portable { "yes" } else { "no" }, ACCENT);
            ui.label("Is Portable");
            ui.add_space(12.0);

            let keys = ui.add_enabled(can_download, egui::Button::new(format!("{} Download keys", regular::KEY)));
            if keys.clicked() {
                actions.push(FeatureAction::DownloadKeys);
            }
            let firmware = ui.add_enabled(can_download, egui::Button::new(firmware_label));
            if firmware.clicked() {
                actions.push(FeatureAction::DownloadFirmware);
            }

            DownloadButtons { firmware, keys }
        }).inner
    }).inner
}

fn render_filter_bar(ui: &mut Ui, panel: &mut FeaturesPanel, actions: &mut Vec<FeatureAction>) {
    ui.horizontal(|ui| {
        if ui.button(regular::ARROWS_CLOCKWISE).on_hover_text("Refresh").clicked() {
            actions.push(FeatureAction::Refresh);
        }

        let mut term = panel.filter_term().unwrap_or_default().to_string();
        let response = ui.add(egui::TextEdit::singleline(&mut term)
            .hint_text("Filter game list")
            .desired_width(240.0));
        if response.changed() {
            panel.set_filter_term(term);
        }
    });
}

fn render_tab_bar(ui: &mut Ui, panel: &mut FeaturesPanel) {
    ui.horizontal(|ui| {
        for tab in FeatureTab::ALL {
            if ui.selectable_label(panel.tab() == tab, tab.label()).clicked() {
                panel.set_tab(tab);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, TitleResolver};

    fn run_frame(panel: &mut FeaturesPanel, props: &FeaturesProps<'_>) -> Vec<FeatureAction> {
        let ctx = egui::Context::default();
        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                actions = render_features_panel(ui, panel, props);
            });
        });
        actions
    }

    fn screen_input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 800.0))),
            events,
            ..Default::default()
        }
    }

    fn header_frame(
        ctx: &egui::Context,
        props: &FeaturesProps<'_>,
        input: egui::RawInput,
    ) -> (Option<DownloadButtons>, Vec<FeatureAction>) {
        let mut actions = Vec::new();
        let mut buttons = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                buttons = Some(render_header(ui, props, &mut actions));
            });
        });
        (buttons, actions)
    }

    /// Press and release the primary button over `target`, one frame each
    fn click_at(ctx: &egui::Context, props: &FeaturesProps<'_>, target: egui::Rect) -> Vec<FeatureAction> {
        let pos = target.center();
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        let (_, mut actions) = header_frame(ctx, props, screen_input(vec![egui::Event::PointerMoved(pos), button(true)]));
        let (_, released) = header_frame(ctx, props, screen_input(vec![button(false)]));
        actions.extend(released);
        actions
    }

    fn click_download_buttons(firmware_version: Option<&str>) -> (bool, bool, Vec<FeatureAction>) {
        let config = EmulatorConfig::new("/emu", false, vec![Game::new("0100ABC")]);
        let shaders = ShaderCatalog::default();
        let saves = SaveCatalog::default();
        let props = FeaturesProps {
            config: &config,
            firmware_version,
            shaders: &shaders,
            saves: &saves,
        };

        let ctx = egui::Context::default();
        let (buttons, _) = header_frame(&ctx, &props, screen_input(Vec::new()));
        let buttons = buttons.expect("header rendered");
        let mut actions = click_at(&ctx, &props, buttons.firmware.rect);
        actions.extend(click_at(&ctx, &props, buttons.keys.rect));
        (buttons.firmware.enabled(), buttons.keys.enabled(), actions)
    }

    #[test]
    fn download_buttons_ignore_clicks_without_firmware_version() {
        for version in [None, Some("")] {
            let (firmware_enabled, keys_enabled, actions) = click_download_buttons(version);
            assert!(!firmware_enabled);
            assert!(!keys_enabled);
            assert!(!actions.contains(&FeatureAction::DownloadFirmware));
            assert!(!actions.contains(&FeatureAction::DownloadKeys));
        }
    }

    #[test]
    fn download_buttons_fire_with_firmware_version() {
        let (firmware_enabled, keys_enabled, actions) = click_download_buttons(Some("17.0.1"));
        assert!(firmware_enabled);
        assert!(keys_enabled);
        assert!(actions.contains(&FeatureAction::DownloadFirmware));
        assert!(actions.contains(&FeatureAction::DownloadKeys));
    }

    #[test]
    fn idle_frame_raises_no_actions_on_any_tab() {
        let config = EmulatorConfig::new("/emu", true, vec![Game::new("0100ABC"), Game::new("0100DEF")]);
        let shaders = ShaderCatalog::default();
        let saves = SaveCatalog::default();
        let props = FeaturesProps {
            config: &config,
            firmware_version: Some("17.0.1"),
            shaders: &shaders,
            saves: &saves,
        };

        let mut panel = FeaturesPanel::new();
        panel.sync(&config, &TitleResolver::new());
        for tab in FeatureTab::ALL {
            panel.set_tab(tab);
            assert!(run_frame(&mut panel, &props).is_empty());
        }
    }
}
