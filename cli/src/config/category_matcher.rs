//! Category tags attached to config sections.

/// Split a section header such as `base-macos` into its category tags.
///
/// Empty fragments (from `base--macos` or a trailing `-`) are dropped.
#[must_use]
pub fn section_categories(section: &str) -> Vec<String> {
    section
        .split('-')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Check if every category of a section is active (AND logic).
///
/// # Examples
///
/// ```
/// use workstation_cli::config::category_matcher::matches;
///
/// let section = vec!["full".to_string(), "macos".to_string()];
/// let active = vec!["base".to_string(), "macos".to_string()];
///
/// // "full" is not active, so the section is filtered out
/// assert!(!matches(&section, &active));
/// ```
#[must_use]
pub fn matches(section_categories: &[String], active_categories: &[String]) -> bool {
    section_categories
        .iter()
        .all(|cat| active_categories.contains(cat))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn section_header_splits_on_dash() {
        assert_eq!(section_categories("base-macos"), tags(&["base", "macos"]));
        assert_eq!(section_categories("full"), tags(&["full"]));
    }

    #[test]
    fn section_header_drops_empty_fragments() {
        assert_eq!(section_categories("base--aws-"), tags(&["base", "aws"]));
    }

    #[test]
    fn section_header_is_lowercased() {
        assert_eq!(section_categories("Base-MacOS"), tags(&["base", "macos"]));
    }

    #[test]
    fn all_categories_must_be_active() {
        let section = tags(&["full", "macos"]);
        assert!(matches(&section, &tags(&["base", "full", "macos"])));
        assert!(!matches(&section, &tags(&["base", "macos"])));
    }

    #[test]
    fn empty_section_always_matches() {
        // all() on empty iterator returns true (vacuous truth)
        assert!(matches(&[], &tags(&["base"])));
        assert!(matches(&[], &[]));
    }

    #[test]
    fn empty_active_matches_nothing() {
        assert!(!matches(&tags(&["base"]), &[]));
    }
}
