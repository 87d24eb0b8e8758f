//! Title databases and the title ID -> name resolver
//!
//! Emulator configurations only carry title IDs. Names come from three
//! databases tried in order: a custom JSON map, the Tinfoil `titles.json`
//! and the NSWDB XML release list. The first non-empty match wins.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::Collator;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::Deserialize;

use crate::error::{EmusakError, Result};
use crate::models::{Game, ResolvedGame};

/// A source able to map a title ID to a display name
pub trait TitleLookup {
    /// Name for the title, or `None` when the source does not know it
    fn lookup(&self, id: &str) -> Option<String>;

    /// Short label used in logs
    fn source_name(&self) -> &'static str;
}

fn normalize_id(id: &str) -> String {
    id.trim().to_uppercase()
}

fn non_empty(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

// ============================================================================
// Custom database
// ============================================================================

/// User-maintained JSON map: `{ "<title id>": "<name>" }`
#[derive(Debug, Clone, Default)]
pub struct CustomDatabase {
    titles: HashMap<String, String>,
}

impl CustomDatabase {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let titles = entries
            .into_iter()
            .map(|(id, name)| (normalize_id(id.as_ref()), name.into()))
            .collect();
        Self { titles }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl TitleLookup for CustomDatabase {
    fn lookup(&self, id: &str) -> Option<String> {
        self.titles.get(&normalize_id(id)).and_then(|n| non_empty(n))
    }

    fn source_name(&self) -> &'static str {
        "custom"
    }
}

// ============================================================================
// Tinfoil database
// ============================================================================

#[derive(Debug, Deserialize)]
struct TinfoilEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Tinfoil `titles.json`: an object keyed by title ID, each value carrying
/// at least a (nullable) `name`
#[derive(Debug, Clone, Default)]
pub struct TinfoilDatabase {
    titles: HashMap<String, String>,
}

impl TinfoilDatabase {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, TinfoilEntry> = serde_json::from_reader(reader)?;
        let titles = raw
            .into_iter()
            .filter_map(|(key, entry)| {
                let name = entry.name?;
                // Prefer the entry's own id; keys are sometimes NSU ids
                let id = entry.id.unwrap_or(key);
                Some((normalize_id(&id), name))
            })
            .collect();
        Ok(Self { titles })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl TitleLookup for TinfoilDatabase {
    fn lookup(&self, id: &str) -> Option<String> {
        self.titles.get(&normalize_id(id)).and_then(|n| non_empty(n))
    }

    fn source_name(&self) -> &'static str {
        "tinfoil"
    }
}

// ============================================================================
// NSWDB database
// ============================================================================

/// NSWDB release list:
/// `<releases><release><name>..</name><titleid>..</titleid></release></releases>`
#[derive(Debug, Clone, Default)]
pub struct NswdbDatabase {
    titles: HashMap<String, String>,
}

impl NswdbDatabase {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut xml = Reader::from_reader(reader);
        xml.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut titles = HashMap::new();
        let mut in_release = false;
        let mut current_tag = String::new();
        let mut name: Option<String> = None;
        let mut title_id: Option<String> = None;

        loop {
            match xml.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    if tag_name == "release" {
                        in_release = true;
                        name = None;
                        title_id = None;
                    } else {
                        current_tag = tag_name;
                    }
                }
                Event::Text(ref e) => {
                    if in_release {
                        let text = e.unescape()?.to_string();
                        match current_tag.as_str() {
                            "name" => name = Some(text),
                            "titleid" => title_id = Some(text),
                            _ => {}
                        }
                    }
                }
                Event::End(ref e) => {
                    let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    if tag_name == "release" {
                        in_release = false;
                        // First release of a title wins; later ones are regional duplicates
                        if let (Some(id), Some(n)) = (title_id.take(), name.take()) {
                            titles.entry(normalize_id(&id)).or_insert(n);
                        }
                    } else {
                        current_tag.clear();
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if in_release {
            return Err(EmusakError::title_database("NSWDB release list ends inside <release>"));
        }

        Ok(Self { titles })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl TitleLookup for NswdbDatabase {
    fn lookup(&self, id: &str) -> Option<String> {
        self.titles.get(&normalize_id(id)).and_then(|n| non_empty(n))
    }

    fn source_name(&self) -> &'static str {
        "nswdb"
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Ordered cascade of title lookups
#[derive(Default)]
pub struct TitleResolver {
    sources: Vec<Box<dyn TitleLookup + Send + Sync>>,
}

impl TitleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom database first, then Tinfoil, then NSWDB. Missing sources are skipped.
    pub fn standard(
        custom: Option<CustomDatabase>,
        tinfoil: Option<TinfoilDatabase>,
        nswdb: Option<NswdbDatabase>,
    ) -> Self {
        let mut resolver = Self::new();
        if let Some(db) = custom {
            resolver.push(db);
        }
        if let Some(db) = tinfoil {
            resolver.push(db);
        }
        if let Some(db) = nswdb {
            resolver.push(db);
        }
        resolver
    }

    /// Append a source with the lowest priority so far
    pub fn push<L: TitleLookup + Send + Sync + 'static>(&mut self, source: L) {
        self.sources.push(Box::new(source));
    }

    pub fn with<L: TitleLookup + Send + Sync + 'static>(mut self, source: L) -> Self {
        self.push(source);
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Name for a single title ID, falling back to the ID itself
    pub fn resolve_name(&self, id: &str) -> String {
        for source in &self.sources {
            if let Some(name) = source.lookup(id) {
                tracing::trace!(id, source = source.source_name(), "resolved title");
                return name;
            }
        }
        id.to_string()
    }

    /// Resolve every game and sort by name, case-insensitive. Ties keep input order.
    pub fn resolve(&self, games: &[Game]) -> Vec<ResolvedGame> {
        let mut resolved: Vec<ResolvedGame> = games
            .iter()
            .map(|g| ResolvedGame {
                id: g.id.clone(),
                name: self.resolve_name(&g.id),
            })
            .collect();
        sort_by_name(&mut resolved);
        resolved
    }
}

/// Stable ascending sort by display name using the root locale collation at
/// secondary strength: accents matter, case does not.
pub fn sort_by_name(games: &mut [ResolvedGame]) {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(Default::default(), options) {
        Ok(collator) => games.sort_by(|a, b| collator.compare(&a.name, &b.name)),
        Err(e) => {
            tracing::warn!("Collation data unavailable, sorting by lowercase name: {}", e);
            games.sort_by_cached_key(|g| g.name.to_lowercase());
        }
    }
}
