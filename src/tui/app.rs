use std::path::Path;
use std::time::{Duration, Instant};

use arboard::Clipboard;

use crate::config::Config;
use crate::content::{ContentSource, LocalContent};
use crate::directory::resolve_content_directory;
use crate::error::Result;
use crate::listing::{
    total_pages, FeedSnapshot, FolderList, Grouped, ListSnapshot, PagedFeed, PAGE_SIZE,
};
use crate::models::{
    latest_news, Achievement, Document, HistoryEntry, Innovation, NewsItem, Person,
};
use crate::overview::{summarize_enrollment, EnrollmentSummary, SchoolOverview};

use super::theme::TuiTheme;

/// Number of items in the latest-news panel on the profile page.
const HOME_NEWS_COUNT: usize = 4;

/// One browsable page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    News,
    TeacherAwards,
    StudentAwards,
    SchoolAwards,
    Documents,
    Forms,
    Innovations,
    People,
    History,
    Stats,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::Overview,
        Section::News,
        Section::TeacherAwards,
        Section::StudentAwards,
        Section::SchoolAwards,
        Section::Documents,
        Section::Forms,
        Section::Innovations,
        Section::People,
        Section::History,
        Section::Stats,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Profile",
            Section::News => "News",
            Section::TeacherAwards => "Teacher Achievements",
            Section::StudentAwards => "Student Achievements",
            Section::SchoolAwards => "School Achievements",
            Section::Documents => "Official Documents",
            Section::Forms => "Form Downloads",
            Section::Innovations => "Innovations",
            Section::People => "Personnel",
            Section::History => "History",
            Section::Stats => "Statistics",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Sections whose working set supports text search.
    pub fn searchable(&self) -> bool {
        matches!(
            self,
            Section::News
                | Section::TeacherAwards
                | Section::StudentAwards
                | Section::SchoolAwards
                | Section::Documents
                | Section::Forms
        )
    }
}

#[derive(Debug, Clone)]
pub enum PopupState {
    Help,
    Search { input: String, cursor: usize },
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// Main application state
pub struct App {
    source: Box<dyn ContentSource>,
    /// Current section (tab)
    pub section: Section,
    /// Selected row within the current view
    pub selected: usize,
    /// Active popup/dialog state
    pub popup: Option<PopupState>,
    /// Status message (success/error feedback)
    pub status_message: Option<StatusMessage>,
    /// Application running flag
    pub running: bool,
    /// Theme colors for rendering
    pub theme: TuiTheme,
    /// Configuration
    pub config: Config,

    // Retained category state
    pub overview: Option<SchoolOverview>,
    pub home_news: Vec<NewsItem>,
    pub news: PagedFeed<NewsItem>,
    pub teacher_awards: FolderList<Achievement>,
    pub student_awards: FolderList<Achievement>,
    pub school_awards: FolderList<Achievement>,
    pub documents: FolderList<Document>,
    pub forms: FolderList<Document>,
    pub innovations: Vec<Innovation>,
    pub people: Vec<Person>,
    pub history: Vec<HistoryEntry>,
    pub enrollment: EnrollmentSummary,
}

impl App {
    pub fn new(content_dir: Option<&Path>) -> Result<Self> {
        let config = Config::load().unwrap_or_default();
        let theme = TuiTheme::from(&config.theme.resolve());
        let resolved_dir = resolve_content_directory(content_dir)?;
        let source = Box::new(LocalContent::new(&resolved_dir));

        let mut app = Self {
            source,
            section: Section::Overview,
            selected: 0,
            popup: None,
            status_message: None,
            running: true,
            theme,
            config,
            overview: None,
            home_news: Vec::new(),
            news: PagedFeed::new(),
            teacher_awards: FolderList::new(),
            student_awards: FolderList::new(),
            // Exam score rows stay out of the awards grid
            school_awards: FolderList::hiding(Achievement::is_exam_result),
            documents: FolderList::new(),
            forms: FolderList::new(),
            innovations: Vec::new(),
            people: Vec::new(),
            history: Vec::new(),
            enrollment: summarize_enrollment(&[]),
        };

        app.refresh()?;
        Ok(app)
    }

    /// Reload every category from the content source. Loads replace the
    /// retained sets wholesale and reset the per-category view state.
    pub fn refresh(&mut self) -> Result<()> {
        self.overview = self
            .source
            .school_info()?
            .map(|info| SchoolOverview::project(&info));

        let news = self.source.news()?;
        self.home_news = latest_news(&news, HOME_NEWS_COUNT)
            .into_iter()
            .cloned()
            .collect();
        self.news.replace(news);

        self.teacher_awards.replace(self.source.teacher_achievements()?);
        self.student_awards.replace(self.source.student_achievements()?);
        self.school_awards.replace(self.source.school_achievements()?);
        self.documents.replace(self.source.official_documents()?);
        self.forms.replace(self.source.form_documents()?);
        self.innovations = self.source.innovations()?;
        self.people = self.source.personnel()?;
        self.history = self.source.history()?;
        self.enrollment = summarize_enrollment(&self.source.enrollment()?);

        self.selected = 0;
        Ok(())
    }

    /// Switch section (tab)
    pub fn set_section(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.selected = 0;
        }
    }

    /// Number of selectable rows in the current view
    pub fn visible_rows(&self) -> usize {
        match self.section {
            Section::Overview | Section::Stats => 0,
            Section::News => self.news.snapshot().items.len(),
            Section::TeacherAwards => folder_rows(&self.teacher_awards),
            Section::StudentAwards => folder_rows(&self.student_awards),
            Section::SchoolAwards => folder_rows(&self.school_awards),
            Section::Documents => folder_rows(&self.documents),
            Section::Forms => folder_rows(&self.forms),
            Section::Innovations => self.innovations.len(),
            Section::People => self.people.len(),
            Section::History => self.history.len(),
        }
    }

    fn clamp_selection(&mut self) {
        let rows = self.visible_rows();
        if rows == 0 {
            self.selected = 0;
        } else if self.selected >= rows {
            self.selected = rows - 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible_rows() {
            self.selected += 1;
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        let rows = self.visible_rows();
        if rows > 0 {
            self.selected = rows - 1;
        }
    }

    /// Enter: open the folder under the cursor (folder views only)
    pub fn activate(&mut self) {
        let opened = match self.section {
            Section::TeacherAwards => open_folder(&mut self.teacher_awards, self.selected),
            Section::StudentAwards => open_folder(&mut self.student_awards, self.selected),
            Section::SchoolAwards => open_folder(&mut self.school_awards, self.selected),
            Section::Documents => open_folder(&mut self.documents, self.selected),
            Section::Forms => open_folder(&mut self.forms, self.selected),
            _ => None,
        };

        if let Some(folder) = opened {
            self.selected = 0;
            self.set_status(format!("Opened {}", folder), StatusKind::Info);
        }
    }

    /// Esc: leave the current detail view or clear an active search.
    /// Returns false when there was nothing to go back from.
    pub fn back(&mut self) -> bool {
        let handled = match self.section {
            Section::News => {
                if self.news.query().is_some() {
                    self.news.search("");
                    true
                } else {
                    false
                }
            }
            Section::TeacherAwards => close_detail(&mut self.teacher_awards),
            Section::StudentAwards => close_detail(&mut self.student_awards),
            Section::SchoolAwards => close_detail(&mut self.school_awards),
            Section::Documents => close_detail(&mut self.documents),
            Section::Forms => close_detail(&mut self.forms),
            _ => false,
        };

        if handled {
            self.selected = 0;
        }
        handled
    }

    fn pages(&self) -> (usize, usize) {
        match self.section {
            Section::News => {
                let snapshot = self.news.snapshot();
                (snapshot.page, total_pages(snapshot.total, PAGE_SIZE).max(1))
            }
            Section::TeacherAwards => detail_pages(&self.teacher_awards),
            Section::StudentAwards => detail_pages(&self.student_awards),
            Section::SchoolAwards => detail_pages(&self.school_awards),
            Section::Documents => detail_pages(&self.documents),
            Section::Forms => detail_pages(&self.forms),
            _ => (1, 1),
        }
    }

    fn goto_page(&mut self, page: usize) {
        match self.section {
            Section::News => self.news.goto_page(page),
            Section::TeacherAwards => self.teacher_awards.goto_page(page),
            Section::StudentAwards => self.student_awards.goto_page(page),
            Section::SchoolAwards => self.school_awards.goto_page(page),
            Section::Documents => self.documents.goto_page(page),
            Section::Forms => self.forms.goto_page(page),
            _ => {}
        }
        self.selected = 0;
    }

    pub fn next_page(&mut self) {
        let (page, pages) = self.pages();
        if page < pages {
            self.goto_page(page + 1);
        }
    }

    pub fn previous_page(&mut self) {
        let (page, _) = self.pages();
        if page > 1 {
            self.goto_page(page - 1);
        }
    }

    /// Apply a search query to the current section's retained set
    pub fn apply_search(&mut self, query: &str) {
        match self.section {
            Section::News => self.news.search(query),
            Section::TeacherAwards => self.teacher_awards.search(query),
            Section::StudentAwards => self.student_awards.search(query),
            Section::SchoolAwards => self.school_awards.search(query),
            Section::Documents => self.documents.search(query),
            Section::Forms => self.forms.search(query),
            _ => return,
        }
        self.selected = 0;

        let query = query.trim();
        if query.is_empty() {
            self.set_status("Search cleared".to_string(), StatusKind::Info);
        } else {
            let (_, total) = self.working_set_size();
            self.set_status(
                format!("{} result(s) for \"{}\"", total, query),
                StatusKind::Info,
            );
        }
    }

    /// (visible on page, total in working set) for the current view
    fn working_set_size(&self) -> (usize, usize) {
        match self.section {
            Section::News => {
                let snapshot = self.news.snapshot();
                (snapshot.items.len(), snapshot.total)
            }
            Section::TeacherAwards => detail_size(&self.teacher_awards),
            Section::StudentAwards => detail_size(&self.student_awards),
            Section::SchoolAwards => detail_size(&self.school_awards),
            Section::Documents => detail_size(&self.documents),
            Section::Forms => detail_size(&self.forms),
            _ => (0, 0),
        }
    }

    /// Link of the item under the cursor, if the current view has one
    fn selected_link(&self) -> Option<String> {
        match self.section {
            Section::News => {
                let FeedSnapshot { items, .. } = self.news.snapshot();
                items.get(self.selected).and_then(|n| n.link.clone())
            }
            Section::TeacherAwards => detail_link(&self.teacher_awards, self.selected),
            Section::StudentAwards => detail_link(&self.student_awards, self.selected),
            Section::SchoolAwards => detail_link(&self.school_awards, self.selected),
            Section::Documents => document_link(&self.documents, self.selected),
            Section::Forms => document_link(&self.forms, self.selected),
            Section::Innovations => self
                .innovations
                .get(self.selected)
                .map(|i| i.file_url.clone()),
            _ => None,
        }
    }

    /// Copy the selected item's link to the clipboard
    pub fn copy_selected_link(&mut self) {
        let Some(url) = self.selected_link() else {
            self.set_status("Nothing to copy here".to_string(), StatusKind::Error);
            return;
        };

        let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url.clone()));
        match copied {
            Ok(()) => self.set_status(format!("Copied {}", url), StatusKind::Success),
            Err(e) => self.set_status(format!("Clipboard error: {}", e), StatusKind::Error),
        }
    }

    /// Set status message
    pub fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status_message = Some(StatusMessage {
            text,
            kind,
            expires_at: Instant::now() + Duration::from_secs(3),
        });
    }

    /// Tick - called periodically for time-based updates
    pub fn tick(&mut self) {
        if let Some(ref msg) = self.status_message {
            if Instant::now() >= msg.expires_at {
                self.status_message = None;
            }
        }
        self.clamp_selection();
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

fn folder_rows<T: Grouped>(list: &FolderList<T>) -> usize {
    match list.snapshot() {
        ListSnapshot::Folders(folders) => folders.len(),
        ListSnapshot::Details { items, .. } => items.len(),
    }
}

fn open_folder<T: Grouped>(list: &mut FolderList<T>, selected: usize) -> Option<String> {
    let label = match list.snapshot() {
        ListSnapshot::Folders(folders) => folders.get(selected).map(|f| f.label.clone()),
        ListSnapshot::Details { .. } => None,
    };
    if let Some(ref label) = label {
        list.select_group(label);
    }
    label
}

fn close_detail<T: Grouped>(list: &mut FolderList<T>) -> bool {
    if list.state().is_folders() {
        false
    } else {
        list.clear_group();
        true
    }
}

fn detail_pages<T: Grouped>(list: &FolderList<T>) -> (usize, usize) {
    match list.snapshot() {
        ListSnapshot::Folders(_) => (1, 1),
        ListSnapshot::Details { page, total, .. } => {
            (page, total_pages(total, PAGE_SIZE).max(1))
        }
    }
}

fn detail_size<T: Grouped>(list: &FolderList<T>) -> (usize, usize) {
    match list.snapshot() {
        ListSnapshot::Folders(folders) => (folders.len(), folders.len()),
        ListSnapshot::Details { items, total, .. } => (items.len(), total),
    }
}

fn detail_link(list: &FolderList<Achievement>, selected: usize) -> Option<String> {
    match list.snapshot() {
        ListSnapshot::Folders(_) => None,
        ListSnapshot::Details { items, .. } => items
            .get(selected)
            .and_then(|a| a.link().map(str::to_string)),
    }
}

fn document_link(list: &FolderList<Document>, selected: usize) -> Option<String> {
    match list.snapshot() {
        ListSnapshot::Folders(_) => None,
        ListSnapshot::Details { items, .. } => items.get(selected).map(|d| d.file_url.clone()),
    }
}
