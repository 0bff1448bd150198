use super::Searchable;

/// Synthetic group shown while a search query is active.
pub const SEARCH_RESULTS: &str = "Search Results";

/// Case-insensitive substring filter.
///
/// Always runs over the retained full set; callers must never write the
/// result back as if it were the loaded data.
pub fn search_filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| item.haystack().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Titled(&'static str);

    impl Searchable for Titled {
        fn haystack(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let items = [
            Titled("Annual Budget Report"),
            Titled("Sports Day"),
            Titled("School Fair"),
        ];
        let hits = search_filter(&items, "budget");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "Annual Budget Report");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let items = [Titled("a"), Titled("b")];
        assert_eq!(search_filter(&items, "").len(), 2);
        assert_eq!(search_filter(&items, "   ").len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = [
            Titled("Annual Budget Report"),
            Titled("Budget Committee Minutes"),
            Titled("Sports Day"),
        ];
        let once: Vec<&str> = search_filter(&items, "budget").iter().map(|t| t.0).collect();
        let again: Vec<&str> = {
            let owned: Vec<Titled> = once.iter().copied().map(Titled).collect();
            search_filter(&owned, "budget").iter().map(|t| t.0).collect()
        };
        assert_eq!(once, again);
    }
}
