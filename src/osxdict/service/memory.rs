use std::collections::HashMap;

use super::{DictHandle, DictionaryService, ServiceDictionary};

/// In-memory dictionary service for testing. No host platform needed;
/// dictionaries, their active state, and their definitions are whatever
/// the test sets up.
#[derive(Debug, Default)]
pub struct InMemoryService {
    dicts: Vec<MemDict>,
    active: Vec<usize>,
}

#[derive(Debug)]
struct MemDict {
    short_name: String,
    display_name: String,
    definitions: HashMap<String, String>,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an installed dictionary with the given definitions.
    pub fn with_dictionary(
        mut self,
        short_name: &str,
        display_name: &str,
        definitions: &[(&str, &str)],
    ) -> Self {
        self.dicts.push(MemDict {
            short_name: short_name.to_string(),
            display_name: display_name.to_string(),
            definitions: definitions
                .iter()
                .map(|(word, text)| (word.to_string(), text.to_string()))
                .collect(),
        });
        self
    }

    /// Marks an already-added dictionary as active. Unknown names are
    /// ignored.
    pub fn with_active(mut self, short_name: &str) -> Self {
        if let Some(idx) = self.dicts.iter().position(|d| d.short_name == short_name) {
            self.active.push(idx);
        }
        self
    }
}

impl DictionaryService for InMemoryService {
    fn installed(&self) -> Vec<ServiceDictionary> {
        self.dicts
            .iter()
            .enumerate()
            .map(|(idx, d)| ServiceDictionary {
                handle: DictHandle(idx),
                short_name: d.short_name.clone(),
            })
            .collect()
    }

    fn active(&self) -> Vec<ServiceDictionary> {
        self.active
            .iter()
            .map(|&idx| ServiceDictionary {
                handle: DictHandle(idx),
                short_name: self.dicts[idx].short_name.clone(),
            })
            .collect()
    }

    fn display_name(&self, handle: DictHandle) -> String {
        self.dicts[handle.0].display_name.clone()
    }

    fn lookup(&self, handle: DictHandle, word: &str) -> Option<String> {
        self.dicts[handle.0].definitions.get(word).cloned()
    }
}
