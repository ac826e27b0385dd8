use crate::domain::level::LogLevel;
use std::collections::BTreeMap;

/// Decoration string per level. A `None` entry clears the level's style.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: BTreeMap<LogLevel, Option<String>>,
}

/// The two ways of changing the style table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleUpdate {
    /// Set or overwrite one level, leaving the others untouched.
    Single {
        level: LogLevel,
        style: Option<String>,
    },
    /// Replace the whole table.
    ReplaceAll(StyleMap),
}

impl StyleMap {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Style applied to `level`, if any. Cleared and empty entries yield `None`.
    pub fn get(&self, level: &LogLevel) -> Option<&str> {
        self.entries
            .get(level)
            .and_then(|style| style.as_deref())
            .filter(|style| !style.is_empty())
    }

    pub fn set(&mut self, level: LogLevel, style: Option<String>) {
        self.entries.insert(level, style);
    }

    pub fn contains(&self, level: &LogLevel) -> bool {
        self.entries.contains_key(level)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LogLevel, Option<&str>)> {
        self.entries
            .iter()
            .map(|(level, style)| (level, style.as_deref()))
    }

    pub fn apply(&mut self, update: StyleUpdate) {
        match update {
            StyleUpdate::Single { level, style } => self.set(level, style),
            StyleUpdate::ReplaceAll(map) => *self = map,
        }
    }
}

impl FromIterator<(LogLevel, Option<String>)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (LogLevel, Option<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
