use serde::{Deserialize, Serialize};

use super::date::parse_flexible;
use crate::listing::Searchable;

/// One announcement from the news feed. Flat list, no grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Searchable for NewsItem {
    fn haystack(&self) -> String {
        self.title.clone()
    }
}

/// The `count` most recent items, for the home panel.
///
/// Ranked by parseable date, newest first; items with unparseable dates
/// sort last, keeping their feed order among themselves.
pub fn latest_news(items: &[NewsItem], count: usize) -> Vec<&NewsItem> {
    let mut ranked: Vec<&NewsItem> = items.iter().collect();
    ranked.sort_by_key(|n| std::cmp::Reverse(parse_flexible(&n.date)));
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, date: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            date: date.to_string(),
            link: None,
            image: None,
        }
    }

    #[test]
    fn test_latest_ranks_newest_first() {
        let items = vec![
            item("old", "2023-01-10"),
            item("newest", "2024-06-01"),
            item("middle", "2024-01-15"),
        ];
        let latest = latest_news(&items, 2);
        assert_eq!(latest[0].title, "newest");
        assert_eq!(latest[1].title, "middle");
    }

    #[test]
    fn test_unparseable_dates_sort_last_in_feed_order() {
        let items = vec![
            item("bad one", "soon"),
            item("dated", "2024-06-01"),
            item("bad two", "???"),
        ];
        let latest = latest_news(&items, 3);
        assert_eq!(latest[0].title, "dated");
        assert_eq!(latest[1].title, "bad one");
        assert_eq!(latest[2].title, "bad two");
    }

    #[test]
    fn test_latest_caps_at_count() {
        let items: Vec<NewsItem> = (1..=9)
            .map(|d| item(&format!("n{d}"), &format!("2024-03-0{d}")))
            .collect();
        assert_eq!(latest_news(&items, 4).len(), 4);
    }
}
