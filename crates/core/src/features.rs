//! Features panel state - filtering, tab routing and action dispatch
//!
//! Rendering lives in `ui::features_panel`; everything here is plain data so
//! the host and tests can drive the panel without an egui context.

use crate::models::{EmulatorConfig, ResolvedGame};
use crate::title_db::TitleResolver;

// ============================================================================
// Types
// ============================================================================

/// Tabs of the features panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureTab {
    #[default]
    Shaders,
    Saves,
    /// Declared but has no view yet
    Mods,
}

/// What the routed area of the panel shows for a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureView {
    ShaderList,
    SaveList,
}

impl FeatureTab {
    pub const ALL: [FeatureTab; 3] = [FeatureTab::Shaders, FeatureTab::Saves, FeatureTab::Mods];

    pub fn index(&self) -> usize {
        match self {
            FeatureTab::Shaders => 0,
            FeatureTab::Saves => 1,
            FeatureTab::Mods => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeatureTab::Shaders => "Shaders",
            FeatureTab::Saves => "Saves",
            FeatureTab::Mods => "Mods",
        }
    }

    /// `None` for Mods, which renders nothing
    pub fn view(&self) -> Option<FeatureView> {
        match self {
            FeatureTab::Shaders => Some(FeatureView::ShaderList),
            FeatureTab::Saves => Some(FeatureView::SaveList),
            FeatureTab::Mods => None,
        }
    }
}

/// User actions raised by the panel, delivered to the host by [`dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureAction {
    DeleteConfig,
    DownloadFirmware,
    DownloadKeys,
    DownloadShaders(String),
    /// Save downloads are not wired to anything yet
    DownloadSaves(String),
    Refresh,
}

/// Callbacks supplied by whoever owns the emulator configuration
pub trait FeaturesCallbacks {
    fn on_firmware_download(&mut self);

    fn on_keys_download(&mut self);

    fn on_emu_config_delete(&mut self, config: &EmulatorConfig);

    fn on_shaders_download(&mut self, id: &str);

    fn on_refresh(&mut self);
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Firmware and keys downloads need a known firmware version
pub fn downloads_enabled(firmware_version: Option<&str>) -> bool {
    firmware_version.is_some_and(|v| !v.is_empty())
}

/// Case-insensitive substring filter on display names. Order is preserved.
pub fn filter_games<'a>(games: &'a [ResolvedGame], term: Option<&str>) -> Vec<&'a ResolvedGame> {
    let term_lower = match term {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return games.iter().collect(),
    };

    games.iter()
        .filter(|g| g.name.to_lowercase().contains(&term_lower))
        .collect()
}

/// Deliver an action to the host callbacks
pub fn dispatch<C: FeaturesCallbacks + ?Sized>(
    action: FeatureAction,
    config: &EmulatorConfig,
    callbacks: &mut C,
) {
    match action {
        FeatureAction::DeleteConfig => callbacks.on_emu_config_delete(config),
        FeatureAction::DownloadFirmware => callbacks.on_firmware_download(),
        FeatureAction::DownloadKeys => callbacks.on_keys_download(),
        FeatureAction::DownloadShaders(id) => callbacks.on_shaders_download(&id),
        FeatureAction::DownloadSaves(id) => {
            tracing::debug!(id = %id, "save download requested but not wired");
        }
        FeatureAction::Refresh => callbacks.on_refresh(),
    }
}

// ============================================================================
// Panel State
// ============================================================================

/// Per-instance state of one features panel
#[derive(Debug, Clone, Default)]
pub struct FeaturesPanel {
    tab: FeatureTab,
    filter_term: Option<String>,
    games: Vec<ResolvedGame>,
    // Configuration the current `games` were resolved from
    resolved_from: Option<EmulatorConfig>,
}

impl FeaturesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> FeatureTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: FeatureTab) {
        self.tab = tab;
    }

    pub fn filter_term(&self) -> Option<&str> {
        self.filter_term.as_deref()
    }

    /// An empty term clears the filter
    pub fn set_filter_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.filter_term = if term.is_empty() { None } else { Some(term) };
    }

    /// Resolved games sorted by name
    pub fn games(&self) -> &[ResolvedGame] {
        &self.games
    }

    pub fn filtered_games(&self) -> Vec<&ResolvedGame> {
        filter_games(&self.games, self.filter_term())
    }

    /// Re-resolve the game list if `config` differs from the last one seen.
    /// Returns whether a recomputation happened.
    pub fn sync(&mut self, config: &EmulatorConfig, resolver: &TitleResolver) -> bool {
        if self.resolved_from.as_ref() == Some(config) {
            return false;
        }
        self.recompute(config, resolver);
        true
    }

    /// Unconditionally re-resolve, e.g. after the title databases were reloaded
    pub fn recompute(&mut self, config: &EmulatorConfig, resolver: &TitleResolver) {
        self.games = resolver.resolve(&config.games);
        self.resolved_from = Some(config.clone());
        tracing::debug!(
            path = %config.display_path(),
            games = self.games.len(),
            "resolved game names"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Game;
    use crate::title_db::CustomDatabase;

    fn game(id: &str, name: &str) -> ResolvedGame {
        ResolvedGame { id: id.into(), name: name.into() }
    }

    fn sample_games() -> Vec<ResolvedGame> {
        vec![
            game("01", "Astral Chain"),
            game("02", "Celeste"),
            game("03", "Super Mario Odyssey"),
            game("04", "Super Smash Bros."),
        ]
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl FeaturesCallbacks for Recorder {
        fn on_firmware_download(&mut self) {
            self.calls.push("firmware".into());
        }

        fn on_keys_download(&mut self) {
            self.calls.push("keys".into());
        }

        fn on_emu_config_delete(&mut self, config: &EmulatorConfig) {
            self.calls.push(format!("delete:{}", config.display_path()));
        }

        fn on_shaders_download(&mut self, id: &str) {
            self.calls.push(format!("shaders:{}", id));
        }

        fn on_refresh(&mut self) {
            self.calls.push("refresh".into());
        }
    }

    #[test]
    fn empty_or_absent_term_is_identity() {
        let games = sample_games();
        let all: Vec<_> = games.iter().collect();
        assert_eq!(filter_games(&games, None), all);
        assert_eq!(filter_games(&games, Some("")), all);
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_order() {
        let games = sample_games();
        let ids: Vec<_> = filter_games(&games, Some("SUPER")).iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["03", "04"]);
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let games = sample_games();
        for term in ["a", "e", "Bros", "x", "o"] {
            let kept = filter_games(&games, Some(term));
            let needle = term.to_lowercase();
            assert!(kept.iter().all(|g| g.name.to_lowercase().contains(&needle)));
            let expected = games.iter().filter(|g| g.name.to_lowercase().contains(&needle)).count();
            assert_eq!(kept.len(), expected);
        }
    }

    #[test]
    fn resolved_example_filters_as_expected() {
        let resolver = TitleResolver::new()
            .with(CustomDatabase::from_entries([("0100ABC", "Super Game")]));
        let config = EmulatorConfig::new("/emu", false, vec![Game::new("0100ABC")]);
        let mut panel = FeaturesPanel::new();
        panel.sync(&config, &resolver);

        assert_eq!(panel.games(), &[game("0100ABC", "Super Game")]);
        panel.set_filter_term("sup");
        assert_eq!(panel.filtered_games().len(), 1);
        panel.set_filter_term("xyz");
        assert!(panel.filtered_games().is_empty());
        panel.set_filter_term("");
        assert_eq!(panel.filter_term(), None);
        assert_eq!(panel.filtered_games().len(), 1);
    }

    #[test]
    fn sync_recomputes_only_when_config_changes() {
        let resolver = TitleResolver::new();
        let mut config = EmulatorConfig::new("/emu", true, vec![Game::new("0100B")]);
        let mut panel = FeaturesPanel::new();

        assert!(panel.sync(&config, &resolver));
        assert!(!panel.sync(&config, &resolver));

        config.games.push(Game::new("0100A"));
        assert!(panel.sync(&config, &resolver));
        let ids: Vec<_> = panel.games().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["0100A", "0100B"]);
    }

    #[test]
    fn downloads_need_a_firmware_version() {
        assert!(!downloads_enabled(None));
        assert!(!downloads_enabled(Some("")));
        assert!(downloads_enabled(Some("17.0.1")));
    }

    #[test]
    fn tab_routing() {
        assert_eq!(FeatureTab::default(), FeatureTab::Shaders);
        assert_eq!(FeatureTab::Shaders.view(), Some(FeatureView::ShaderList));
        assert_eq!(FeatureTab::Saves.view(), Some(FeatureView::SaveList));
        assert_eq!(FeatureTab::Mods.view(), None);
        assert_eq!(FeatureTab::from_index(1), Some(FeatureTab::Saves));
        assert_eq!(FeatureTab::from_index(3), None);
        assert!(FeatureTab::ALL.iter().all(|t| FeatureTab::from_index(t.index()) == Some(*t)));
    }

    #[test]
    fn dispatch_forwards_to_callbacks() {
        let config = EmulatorConfig::new("/emu", false, Vec::new());
        let mut recorder = Recorder::default();
        for action in [
            FeatureAction::DeleteConfig,
            FeatureAction::DownloadFirmware,
            FeatureAction::DownloadKeys,
            FeatureAction::DownloadShaders("0100ABC".into()),
            FeatureAction::DownloadSaves("0100ABC".into()),
            FeatureAction::Refresh,
        ] {
            dispatch(action, &config, &mut recorder);
        }
        assert_eq!(
            recorder.calls,
            vec!["delete:/emu", "firmware", "keys", "shaders:0100ABC", "refresh"]
        );
    }
}
