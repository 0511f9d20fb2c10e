use std::collections::BTreeMap;

use once_cell::sync::OnceCell;

use crate::error::{DictError, Result};
use crate::service::{DictHandle, DictionaryService};

/// Process-wide view of the host's dictionaries.
///
/// Built exactly once at startup from a [`DictionaryService`] and
/// immutable afterward; pass it by reference to whatever needs it. Short
/// names are unique keys; when the host reports two dictionaries with the
/// same short name the first one wins.
pub struct DictionaryCatalog {
    service: Box<dyn DictionaryService>,
    entries: BTreeMap<String, Entry>,
    active: Vec<String>,
}

struct Entry {
    handle: DictHandle,
    display_name: OnceCell<String>,
}

impl DictionaryCatalog {
    pub fn new(service: Box<dyn DictionaryService>) -> Self {
        let mut entries = BTreeMap::new();
        for dict in service.installed() {
            entries.entry(dict.short_name).or_insert(Entry {
                handle: dict.handle,
                display_name: OnceCell::new(),
            });
        }
        let mut active: Vec<String> = service
            .active()
            .into_iter()
            .map(|d| d.short_name)
            .collect();
        active.sort();
        active.dedup();
        Self {
            service,
            entries,
            active,
        }
    }

    /// Ordered view over (short name, handle) for every installed
    /// dictionary.
    pub fn available(&self) -> impl Iterator<Item = (&str, DictHandle)> + '_ {
        self.entries.iter().map(|(name, e)| (name.as_str(), e.handle))
    }

    /// Short names of every installed dictionary, sorted.
    pub fn available_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn contains(&self, short_name: &str) -> bool {
        self.entries.contains_key(short_name)
    }

    /// Short names of the dictionaries the host currently has enabled,
    /// sorted.
    pub fn active(&self) -> &[String] {
        &self.active
    }

    /// Human-readable name for a dictionary, fetched from the host on
    /// first request and cached for the process lifetime.
    pub fn display_name(&self, short_name: &str) -> Result<&str> {
        let entry = self
            .entries
            .get(short_name)
            .ok_or_else(|| DictError::DictionaryNotFound(short_name.to_string()))?;
        Ok(entry
            .display_name
            .get_or_init(|| self.service.display_name(entry.handle)))
    }

    /// Definition text for `word`, or `None` when the dictionary has no
    /// entry for it. `short_name` must name an installed dictionary;
    /// lookups are never cached.
    pub fn lookup(&self, short_name: &str, word: &str) -> Option<String> {
        let entry = self.entries.get(short_name);
        debug_assert!(
            entry.is_some(),
            "lookup against unvalidated dictionary: {short_name}"
        );
        entry.and_then(|e| self.service.lookup(e.handle, word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::memory::InMemoryService;

    fn catalog() -> DictionaryCatalog {
        DictionaryCatalog::new(Box::new(
            InMemoryService::new()
                .with_dictionary("ode", "Oxford Dictionary of English", &[("tea", "a drink")])
                .with_dictionary("noad", "New Oxford American Dictionary", &[])
                .with_dictionary("thes", "Oxford Thesaurus", &[])
                .with_active("thes")
                .with_active("noad"),
        ))
    }

    #[test]
    fn available_names_are_sorted() {
        assert_eq!(catalog().available_names(), ["noad", "ode", "thes"]);
    }

    #[test]
    fn available_iterates_in_short_name_order() {
        let c = catalog();
        let names: Vec<&str> = c.available().map(|(name, _)| name).collect();
        assert_eq!(names, ["noad", "ode", "thes"]);
    }

    #[test]
    fn active_is_sorted_independent_of_host_order() {
        assert_eq!(catalog().active(), ["noad", "thes"]);
    }

    #[test]
    fn display_name_resolves_known_entries() {
        let c = catalog();
        assert_eq!(c.display_name("ode").unwrap(), "Oxford Dictionary of English");
    }

    #[test]
    fn display_name_fails_for_unknown_entries() {
        let c = catalog();
        assert!(matches!(
            c.display_name("webster"),
            Err(DictError::DictionaryNotFound(_))
        ));
    }

    #[test]
    fn lookup_returns_none_for_missing_words() {
        let c = catalog();
        assert_eq!(c.lookup("ode", "tea").as_deref(), Some("a drink"));
        assert_eq!(c.lookup("ode", "coffee"), None);
    }

    #[test]
    fn duplicate_short_names_keep_the_first_dictionary() {
        let c = DictionaryCatalog::new(Box::new(
            InMemoryService::new()
                .with_dictionary("ode", "First", &[])
                .with_dictionary("ode", "Second", &[]),
        ));
        assert_eq!(c.available_names(), ["ode"]);
        assert_eq!(c.display_name("ode").unwrap(), "First");
    }
}
