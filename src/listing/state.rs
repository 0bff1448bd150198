/// View state of one category instance.
///
/// Every category starts in the folder view. Search enters a detail view
/// under the synthetic [`SEARCH_RESULTS`](super::SEARCH_RESULTS) group.
/// There is no terminal state; the value lives as long as the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Grouped folder tiles, one per distinct group label.
    Folders,
    /// Paginated items within one selected group.
    Details { group: String, page: usize },
}

impl ViewState {
    pub fn select_group(&mut self, name: &str) {
        *self = ViewState::Details {
            group: name.to_string(),
            page: 1,
        };
    }

    pub fn clear_group(&mut self) {
        *self = ViewState::Folders;
    }

    /// Page changes only apply inside a detail view; from the folder view
    /// this is a no-op.
    pub fn goto_page(&mut self, target: usize) {
        if let ViewState::Details { page, .. } = self {
            *page = target.max(1);
        }
    }

    pub fn is_folders(&self) -> bool {
        matches!(self, ViewState::Folders)
    }

    pub fn group(&self) -> Option<&str> {
        match self {
            ViewState::Folders => None,
            ViewState::Details { group, .. } => Some(group),
        }
    }

    pub fn page(&self) -> usize {
        match self {
            ViewState::Folders => 1,
            ViewState::Details { page, .. } => *page,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Folders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_clear_round_trips() {
        let mut state = ViewState::default();
        state.select_group("Math Olympiad");
        assert_eq!(state.group(), Some("Math Olympiad"));
        assert_eq!(state.page(), 1);

        state.clear_group();
        assert!(state.is_folders());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_goto_page_in_detail_view() {
        let mut state = ViewState::default();
        state.select_group("Policy");
        state.goto_page(3);
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_goto_page_is_noop_from_folders() {
        let mut state = ViewState::default();
        state.goto_page(5);
        assert!(state.is_folders());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_selecting_a_group_resets_the_page() {
        let mut state = ViewState::default();
        state.select_group("Policy");
        state.goto_page(4);
        state.select_group("Form");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_floor_is_one() {
        let mut state = ViewState::default();
        state.select_group("Policy");
        state.goto_page(0);
        assert_eq!(state.page(), 1);
    }
}
