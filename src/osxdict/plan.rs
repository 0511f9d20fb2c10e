use std::collections::HashSet;

use crate::catalog::DictionaryCatalog;

/// Output format for the render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Everything one invocation asked for: assembled by the argument parser,
/// normalized once, then read-only for the rest of the run.
#[derive(Debug, Default)]
pub struct QueryPlan {
    pub show_help: bool,
    pub show_list: bool,
    pub format: OutputFormat,
    pub dictionaries: Vec<String>,
    pub words: Vec<String>,
}

impl QueryPlan {
    /// Deduplicates dictionaries and words (first occurrence wins) and
    /// drops dictionary names the catalog does not know. Words are not
    /// validated. Returns the dropped names so the caller can warn about
    /// them.
    pub fn normalize(&mut self, catalog: &DictionaryCatalog) -> Vec<String> {
        self.dictionaries = stable_unique(std::mem::take(&mut self.dictionaries));
        self.words = stable_unique(std::mem::take(&mut self.words));

        let mut dropped = Vec::new();
        self.dictionaries.retain(|name| {
            if catalog.contains(name) {
                true
            } else {
                dropped.push(name.clone());
                false
            }
        });
        dropped
    }
}

/// Removes duplicates while keeping the order of first occurrence.
pub fn stable_unique(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
