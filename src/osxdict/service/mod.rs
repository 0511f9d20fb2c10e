//! # Host Service Layer
//!
//! This module defines the seam between osxdict and the operating-system
//! dictionary service. The [`DictionaryService`] trait covers the four
//! operations the rest of the crate needs:
//!
//! - enumerate installed dictionaries
//! - enumerate active dictionaries
//! - fetch a dictionary's display name
//! - look up a word's definition text
//!
//! ## Design rationale
//!
//! The service is abstracted behind a trait to:
//! - Enable **testing** with [`memory::InMemoryService`] (no macOS needed)
//! - Keep catalog and command logic **decoupled** from the FFI surface
//!
//! ## Implementations
//!
//! - `coreservices::CoreServicesClient`: the live DictionaryServices
//!   framework, macOS only
//! - [`memory::InMemoryService`]: in-memory double for tests
//!
//! ## Handles
//!
//! Dictionaries are referred to by [`DictHandle`], an opaque copyable
//! token. The service owns whatever the token refers to; handles stay
//! valid for the process lifetime and carry no ownership on our side.

#[cfg(target_os = "macos")]
pub mod coreservices;
pub mod memory;

/// Opaque reference to an installed dictionary, owned by the host service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DictHandle(pub(crate) usize);

/// One dictionary as reported by an enumeration call.
#[derive(Debug, Clone)]
pub struct ServiceDictionary {
    pub handle: DictHandle,
    pub short_name: String,
}

/// Abstract interface to the host dictionary service.
pub trait DictionaryService {
    /// Every dictionary the host reports as installed.
    fn installed(&self) -> Vec<ServiceDictionary>;

    /// The dictionaries the host currently has enabled for lookups.
    fn active(&self) -> Vec<ServiceDictionary>;

    /// Human-readable name of a dictionary.
    fn display_name(&self, handle: DictHandle) -> String;

    /// Definition text for `word`, or `None` when the dictionary has no
    /// entry for it. Absence is a normal outcome, not an error.
    fn lookup(&self, handle: DictHandle, word: &str) -> Option<String>;
}

/// The dictionary service of the platform we are running on.
#[cfg(target_os = "macos")]
pub fn host() -> Box<dyn DictionaryService> {
    Box::new(coreservices::CoreServicesClient::new())
}

/// The dictionary service of the platform we are running on.
///
/// Off macOS there is nothing to bind to, so the catalog comes up empty
/// and every invocation takes the usage or no-valid-dictionary path.
#[cfg(not(target_os = "macos"))]
pub fn host() -> Box<dyn DictionaryService> {
    Box::new(UnsupportedHost)
}

#[cfg(not(target_os = "macos"))]
struct UnsupportedHost;

#[cfg(not(target_os = "macos"))]
impl DictionaryService for UnsupportedHost {
    fn installed(&self) -> Vec<ServiceDictionary> {
        Vec::new()
    }

    fn active(&self) -> Vec<ServiceDictionary> {
        Vec::new()
    }

    fn display_name(&self, _handle: DictHandle) -> String {
        String::new()
    }

    fn lookup(&self, _handle: DictHandle, _word: &str) -> Option<String> {
        None
    }
}
