use crate::catalog::DictionaryCatalog;

/// Environment variable consulted when no dictionary is named on the
/// command line.
pub const ENV_VAR: &str = "OSX_DICTIONARY";

const TOKEN_ALL: &str = "ALL";
const TOKEN_ACTIVE: &str = "ACTIVE";

/// Expands the value of [`ENV_VAR`] into a dictionary short-name
/// sequence.
///
/// Unset means "whatever the host has active"; set-but-empty means
/// "nothing". Otherwise the value is split on `:` and each token is
/// either `ALL`, `ACTIVE`, or a short name taken verbatim. The result may
/// contain duplicates and unknown names; the normalizer deals with those.
pub fn resolve(raw: Option<&str>, catalog: &DictionaryCatalog) -> Vec<String> {
    let raw = match raw {
        None => return catalog.active().to_vec(),
        Some(raw) => raw,
    };
    if raw.is_empty() {
        return Vec::new();
    }

    let mut names = Vec::new();
    for token in raw.split(':') {
        match token {
            // ALL consumes the remainder of the list.
            TOKEN_ALL => {
                names.extend(catalog.available_names());
                break;
            }
            TOKEN_ACTIVE => names.extend(catalog.active().iter().cloned()),
            name => names.push(name.to_string()),
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::memory::InMemoryService;

    fn catalog() -> DictionaryCatalog {
        DictionaryCatalog::new(Box::new(
            InMemoryService::new()
                .with_dictionary("noad", "New Oxford American Dictionary", &[])
                .with_dictionary("ode", "Oxford Dictionary of English", &[])
                .with_dictionary("thes", "Oxford Thesaurus", &[])
                .with_active("ode"),
        ))
    }

    #[test]
    fn unset_falls_back_to_active() {
        assert_eq!(resolve(None, &catalog()), ["ode"]);
    }

    #[test]
    fn empty_means_no_dictionaries() {
        assert!(resolve(Some(""), &catalog()).is_empty());
    }

    #[test]
    fn names_pass_through_verbatim() {
        assert_eq!(
            resolve(Some("noad:webster"), &catalog()),
            ["noad", "webster"]
        );
    }

    #[test]
    fn all_expands_and_short_circuits() {
        // Tokens after ALL are never processed, ACTIVE included.
        assert_eq!(
            resolve(Some("ALL:foo:ACTIVE"), &catalog()),
            ["noad", "ode", "thes"]
        );
    }

    #[test]
    fn active_expands_and_continues() {
        assert_eq!(resolve(Some("ACTIVE:noad"), &catalog()), ["ode", "noad"]);
    }

    #[test]
    fn duplicates_survive_resolution() {
        assert_eq!(
            resolve(Some("ode:ACTIVE"), &catalog()),
            ["ode", "ode"]
        );
    }
}
