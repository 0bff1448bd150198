//! Centralized group-label handling.
//!
//! Items are bucketed into folders by a free-text field (`competition` for
//! achievements, `category` for documents). The field is optional in the
//! source data; missing or blank values map to a per-category default label.

/// Resolve a raw group field to its display label.
///
/// - Trims surrounding whitespace
/// - Maps `None`, empty and whitespace-only values to `default`
pub fn group_label<'a>(raw: Option<&'a str>, default: &'a str) -> &'a str {
    match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_label_is_trimmed() {
        assert_eq!(group_label(Some("  Math Olympiad "), "Uncategorized"), "Math Olympiad");
    }

    #[test]
    fn test_missing_label_maps_to_default() {
        assert_eq!(group_label(None, "Uncategorized"), "Uncategorized");
    }

    #[test]
    fn test_blank_label_maps_to_default() {
        assert_eq!(group_label(Some(""), "General"), "General");
        assert_eq!(group_label(Some("   "), "General"), "General");
    }
}
