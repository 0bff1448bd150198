use super::folders::{folder_summaries, FolderSummary};
use super::pager::{page_controls, page_slice, PageControl, PAGE_SIZE};
use super::search::{search_filter, SEARCH_RESULTS};
use super::state::ViewState;
use super::{Grouped, Searchable};

/// Render model of a grouped category, consumed by the display adapters.
#[derive(Debug)]
pub enum ListSnapshot<'a, T> {
    Folders(Vec<FolderSummary>),
    Details {
        group: &'a str,
        items: Vec<&'a T>,
        page: usize,
        total: usize,
        controls: Vec<PageControl>,
    },
}

/// Controller for one grouped category instance.
///
/// Owns the retained full set and the view state. A new load replaces the
/// set wholesale; search and folder selection only change what the next
/// snapshot shows, never the retained data.
pub struct FolderList<T> {
    items: Vec<T>,
    state: ViewState,
    query: Option<String>,
    hidden: fn(&T) -> bool,
}

impl<T: Grouped> FolderList<T> {
    pub fn new() -> Self {
        Self::hiding(|_| false)
    }

    /// A list whose folder and detail views exclude some retained rows.
    /// Search still sees every row.
    pub fn hiding(hidden: fn(&T) -> bool) -> Self {
        Self {
            items: Vec::new(),
            state: ViewState::Folders,
            query: None,
            hidden,
        }
    }

    /// Load entry point: overwrite the retained set and reset the view.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.query = None;
        self.state.clear_group();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn select_group(&mut self, name: &str) {
        self.query = None;
        self.state.select_group(name);
    }

    pub fn clear_group(&mut self) {
        self.query = None;
        self.state.clear_group();
    }

    pub fn goto_page(&mut self, page: usize) {
        self.state.goto_page(page);
    }

    /// A non-empty query enters the synthetic "Search Results" detail view;
    /// an empty one is the same as clearing the group.
    pub fn search(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.clear_group();
        } else {
            self.query = Some(trimmed.to_string());
            self.state.select_group(SEARCH_RESULTS);
        }
    }

    fn shown(&self) -> impl Iterator<Item = &T> {
        let hidden = self.hidden;
        self.items.iter().filter(move |item| !hidden(item))
    }

    pub fn snapshot(&self) -> ListSnapshot<'_, T> {
        match &self.state {
            ViewState::Folders => ListSnapshot::Folders(folder_summaries(self.shown())),
            ViewState::Details { group, page } => {
                let filtered: Vec<&T> = match &self.query {
                    Some(query) => search_filter(&self.items, query),
                    None => self.shown().filter(|item| item.group() == group).collect(),
                };
                let total = filtered.len();
                ListSnapshot::Details {
                    group: group.as_str(),
                    items: page_slice(&filtered, *page, PAGE_SIZE).to_vec(),
                    page: *page,
                    total,
                    controls: page_controls(total, PAGE_SIZE, *page),
                }
            }
        }
    }
}

impl<T: Grouped> Default for FolderList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render model of a flat paginated category (news).
#[derive(Debug)]
pub struct FeedSnapshot<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub total: usize,
    pub controls: Vec<PageControl>,
    /// Set while a search query narrows the feed.
    pub query: Option<&'a str>,
}

/// Controller for a flat category: same pagination arithmetic as
/// [`FolderList`] without the group step.
pub struct PagedFeed<T> {
    items: Vec<T>,
    page: usize,
    query: Option<String>,
}

impl<T: Searchable> PagedFeed<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            query: None,
        }
    }

    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 1;
        self.query = None;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn goto_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn search(&mut self, query: &str) {
        let trimmed = query.trim();
        self.query = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.page = 1;
    }

    pub fn snapshot(&self) -> FeedSnapshot<'_, T> {
        let working: Vec<&T> = match &self.query {
            Some(query) => search_filter(&self.items, query),
            None => self.items.iter().collect(),
        };
        let total = working.len();
        FeedSnapshot {
            items: page_slice(&working, self.page, PAGE_SIZE).to_vec(),
            page: self.page,
            total,
            controls: page_controls(total, PAGE_SIZE, self.page),
            query: self.query.as_deref(),
        }
    }
}

impl<T: Searchable> Default for PagedFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Award {
        title: &'static str,
        competition: &'static str,
        exam: bool,
    }

    fn award(title: &'static str, competition: &'static str) -> Award {
        Award {
            title,
            competition,
            exam: false,
        }
    }

    impl Searchable for Award {
        fn haystack(&self) -> String {
            format!("{} {}", self.title, self.competition)
        }
    }

    impl Grouped for Award {
        fn group(&self) -> &str {
            self.competition
        }
    }

    fn olympiad_list() -> FolderList<Award> {
        let mut list = FolderList::new();
        list.replace(
            (1..=7)
                .map(|i| match i {
                    1 => award("First prize", "Math Olympiad"),
                    2 => award("Second prize", "Math Olympiad"),
                    3 => award("Third prize", "Math Olympiad"),
                    4 => award("Honorable mention", "Math Olympiad"),
                    5 => award("Team award", "Math Olympiad"),
                    6 => award("Solo award", "Math Olympiad"),
                    _ => award("Consolation", "Math Olympiad"),
                })
                .collect(),
        );
        list
    }

    #[test]
    fn test_seven_items_paginate_as_six_plus_one() {
        let mut list = olympiad_list();
        list.select_group("Math Olympiad");

        match list.snapshot() {
            ListSnapshot::Details { items, total, .. } => {
                assert_eq!(total, 7);
                assert_eq!(items.len(), 6);
            }
            ListSnapshot::Folders(_) => panic!("expected detail view"),
        }

        list.goto_page(2);
        match list.snapshot() {
            ListSnapshot::Details { items, .. } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].title, "Consolation");
            }
            ListSnapshot::Folders(_) => panic!("expected detail view"),
        }

        list.goto_page(3);
        match list.snapshot() {
            ListSnapshot::Details { items, .. } => assert!(items.is_empty()),
            ListSnapshot::Folders(_) => panic!("expected detail view"),
        }
    }

    #[test]
    fn test_select_then_clear_restores_folder_view() {
        let mut list = olympiad_list();
        list.select_group("Math Olympiad");
        list.clear_group();

        assert!(list.state().is_folders());
        match list.snapshot() {
            ListSnapshot::Folders(folders) => {
                assert_eq!(folders.len(), 1);
                assert_eq!(folders[0].count, 7);
            }
            ListSnapshot::Details { .. } => panic!("expected folder view"),
        }
    }

    #[test]
    fn test_search_enters_synthetic_group_at_page_one() {
        let mut list = FolderList::new();
        list.replace(vec![
            award("Annual Budget Report", "Administration"),
            award("Sports Day", "Athletics"),
            award("School Fair", "Community"),
        ]);

        list.search("budget");
        match list.snapshot() {
            ListSnapshot::Details {
                group,
                items,
                page,
                total,
                ..
            } => {
                assert_eq!(group, SEARCH_RESULTS);
                assert_eq!(page, 1);
                assert_eq!(total, 1);
                assert_eq!(items[0].title, "Annual Budget Report");
            }
            ListSnapshot::Folders(_) => panic!("expected search detail view"),
        }
    }

    #[test]
    fn test_search_does_not_touch_the_retained_set() {
        let mut list = FolderList::new();
        list.replace(vec![
            award("Annual Budget Report", "Administration"),
            award("Sports Day", "Athletics"),
        ]);

        list.search("budget");
        assert_eq!(list.items().len(), 2);

        list.search("");
        assert!(list.state().is_folders());
        match list.snapshot() {
            ListSnapshot::Folders(folders) => assert_eq!(folders.len(), 2),
            ListSnapshot::Details { .. } => panic!("empty query must restore folders"),
        }
    }

    #[test]
    fn test_empty_search_equals_clear_group() {
        let mut a = olympiad_list();
        let mut b = olympiad_list();
        a.select_group("Math Olympiad");
        b.select_group("Math Olympiad");

        a.search("");
        b.clear_group();
        assert_eq!(a.state(), b.state());
        assert_eq!(a.query(), b.query());
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut list = FolderList::new();
        list.replace(vec![
            award("Annual Budget Report", "Administration"),
            award("Budget Committee", "Administration"),
            award("Sports Day", "Athletics"),
        ]);

        list.search("budget");
        let first: Vec<&'static str> = match list.snapshot() {
            ListSnapshot::Details { items, .. } => items.iter().map(|a| a.title).collect(),
            ListSnapshot::Folders(_) => panic!("expected detail view"),
        };

        list.search("budget");
        let second: Vec<&'static str> = match list.snapshot() {
            ListSnapshot::Details { items, .. } => items.iter().map(|a| a.title).collect(),
            ListSnapshot::Folders(_) => panic!("expected detail view"),
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_replace_resets_view_state() {
        let mut list = olympiad_list();
        list.select_group("Math Olympiad");
        list.goto_page(2);

        list.replace(vec![award("New award", "Science Fair")]);
        assert!(list.state().is_folders());
        assert!(list.query().is_none());
    }

    #[test]
    fn test_hidden_rows_skip_display_but_not_search() {
        let mut list: FolderList<Award> = FolderList::hiding(|a| a.exam);
        list.replace(vec![
            award("Robotics gold", "Robotics"),
            Award {
                title: "O-NET average",
                competition: "National tests",
                exam: true,
            },
        ]);

        match list.snapshot() {
            ListSnapshot::Folders(folders) => {
                assert_eq!(folders.len(), 1);
                assert_eq!(folders[0].label, "Robotics");
            }
            ListSnapshot::Details { .. } => panic!("expected folder view"),
        }

        list.search("o-net");
        match list.snapshot() {
            ListSnapshot::Details { total, .. } => assert_eq!(total, 1),
            ListSnapshot::Folders(_) => panic!("expected search detail view"),
        }
    }

    struct Headline(&'static str);

    impl Searchable for Headline {
        fn haystack(&self) -> String {
            self.0.to_string()
        }
    }

    fn thirteen_headlines() -> PagedFeed<Headline> {
        let mut feed = PagedFeed::new();
        feed.replace(
            [
                "Term opening", "Sports day", "Science week", "Open house", "Band contest",
                "Field trip", "Book fair", "Charity run", "Art show", "Exam schedule",
                "Graduation", "Teacher day", "New library",
            ]
            .into_iter()
            .map(Headline)
            .collect(),
        );
        feed
    }

    #[test]
    fn test_feed_pages_are_six_six_one() {
        let mut feed = thirteen_headlines();

        let sizes: Vec<usize> = (1..=3)
            .map(|p| {
                feed.goto_page(p);
                feed.snapshot().items.len()
            })
            .collect();
        assert_eq!(sizes, vec![6, 6, 1]);

        let snapshot = feed.snapshot();
        assert_eq!(snapshot.controls.len(), 3);
    }

    #[test]
    fn test_feed_search_resets_to_page_one() {
        let mut feed = thirteen_headlines();
        feed.goto_page(3);

        feed.search("day");
        let snapshot = feed.snapshot();
        assert_eq!(snapshot.page, 1);
        // "Sports day" and "Teacher day"
        assert_eq!(snapshot.total, 2);

        feed.search("");
        assert_eq!(feed.snapshot().total, 13);
    }
}
