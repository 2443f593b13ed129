//! Dialogue table loader.
//!
//! A scene's dialogue file holds display names and content keyed by locale and
//! then by interaction kind:
//!
//! ```ron
//! DialogueTable(
//!     names: (english: { "cat1": "Cat" }, korean: { "cat1": "고양이" }),
//!     content: (
//!         english: { "cat1": (lines: ["Meow~", "(Stretches lazily)"]) },
//!         korean: {},
//!     ),
//!     voices: { "cat1": 1.5 },
//! )
//! ```

use std::collections::HashMap;
use std::path::Path;

use school_core::{BranchPoint, DialogueOracle, DisplayUnit, Locale};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Per-locale map from interaction kind to a value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleTable<T> {
    #[serde(default = "HashMap::new")]
    pub korean: HashMap<String, T>,
    #[serde(default = "HashMap::new")]
    pub english: HashMap<String, T>,
}

impl<T> Default for LocaleTable<T> {
    fn default() -> Self {
        Self {
            korean: HashMap::new(),
            english: HashMap::new(),
        }
    }
}

impl<T> LocaleTable<T> {
    pub fn get(&self, locale: Locale, kind: &str) -> Option<&T> {
        match locale {
            Locale::Korean => self.korean.get(kind),
            Locale::English => self.english.get(kind),
        }
    }

    pub fn insert(&mut self, locale: Locale, kind: impl Into<String>, value: T) {
        match locale {
            Locale::Korean => self.korean.insert(kind.into(), value),
            Locale::English => self.english.insert(kind.into(), value),
        };
    }
}

/// Content of one kind: lines followed by an optional branch point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogueEntry {
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub choice: Option<BranchPoint>,
}

impl DialogueEntry {
    fn units(&self) -> Vec<DisplayUnit> {
        self.lines
            .iter()
            .cloned()
            .map(DisplayUnit::Line)
            .chain(self.choice.clone().map(DisplayUnit::Branch))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogueTable {
    #[serde(default)]
    pub names: LocaleTable<String>,
    #[serde(default)]
    pub content: LocaleTable<DialogueEntry>,
    /// Typing speed multiplier per kind.
    #[serde(default)]
    pub voices: HashMap<String, f32>,
}

impl DialogueOracle for DialogueTable {
    fn speaker(&self, locale: Locale, kind: &str) -> Option<String> {
        self.names.get(locale, kind).cloned()
    }

    fn content(&self, locale: Locale, kind: &str) -> Option<Vec<DisplayUnit>> {
        self.content.get(locale, kind).map(DialogueEntry::units)
    }

    fn speed_multiplier(&self, kind: &str) -> f32 {
        self.voices.get(kind).copied().unwrap_or(1.0)
    }
}

/// Loader for dialogue tables from RON files.
pub struct DialogueLoader;

impl DialogueLoader {
    pub fn load(path: &Path) -> LoadResult<DialogueTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dialogue {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<DialogueTable> {
        let table: DialogueTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dialogue RON: {}", e))?;
        Ok(table)
    }
}
