use std::path::Path;

use arboard::Clipboard;

use crate::config::Config;
use crate::content::{ContentSource, LocalContent};
use crate::directory::resolve_content_directory;
use crate::error::{Result, SchoolbookError};
use crate::listing::{FolderList, PagedFeed};
use crate::models::{latest_news, Achievement, Document, NewsItem};
use crate::overview::{summarize_enrollment, SchoolOverview};
use crate::render::Render;

/// Number of items in the latest-news home panel.
const HOME_NEWS_COUNT: usize = 4;

/// The browsable categories. Handlers are selected by matching on this
/// enum, never by constructing a name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    TeacherAwards,
    StudentAwards,
    SchoolAwards,
    News,
    OfficialDocuments,
    FormDocuments,
}

impl Category {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "teacher" | "teachers" => Ok(Category::TeacherAwards),
            "student" | "students" => Ok(Category::StudentAwards),
            "school" => Ok(Category::SchoolAwards),
            "news" => Ok(Category::News),
            "documents" | "official" => Ok(Category::OfficialDocuments),
            "form" | "forms" => Ok(Category::FormDocuments),
            other => Err(SchoolbookError::UnknownCategory(other.to_string())),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::TeacherAwards => "Teacher Achievements",
            Category::StudentAwards => "Student Achievements",
            Category::SchoolAwards => "School Achievements",
            Category::News => "News",
            Category::OfficialDocuments => "Official Documents",
            Category::FormDocuments => "Form Downloads",
        }
    }
}

/// Central business object: owns the content source and drives the CLI
/// renderer. The TUI builds its own state on top of the same source.
pub struct Schoolbook {
    source: Box<dyn ContentSource>,
    render: Render,
}

impl Schoolbook {
    pub fn new(content_dir: Option<&Path>) -> Result<Self> {
        let config = Config::load().unwrap_or_default();
        let resolved_dir = resolve_content_directory(content_dir)?;
        let source = Box::new(LocalContent::new(&resolved_dir));
        let render = Render::new(config);

        Ok(Self { source, render })
    }

    fn achievement_set(&self, category: Category) -> Result<Vec<Achievement>> {
        match category {
            Category::TeacherAwards => self.source.teacher_achievements(),
            Category::StudentAwards => self.source.student_achievements(),
            Category::SchoolAwards => self.source.school_achievements(),
            _ => Err(SchoolbookError::UnknownCategory(
                category.title().to_string(),
            )),
        }
    }

    /// The school feed mixes exam score rows into the awards; those are
    /// hidden from display but stay in the retained set.
    fn achievement_list(&self, category: Category) -> Result<FolderList<Achievement>> {
        let mut list = match category {
            Category::SchoolAwards => FolderList::hiding(Achievement::is_exam_result),
            _ => FolderList::new(),
        };
        list.replace(self.achievement_set(category)?);
        Ok(list)
    }

    fn document_list(&self, category: Category) -> Result<FolderList<Document>> {
        let mut list = FolderList::new();
        list.replace(match category {
            Category::OfficialDocuments => self.source.official_documents()?,
            _ => self.source.form_documents()?,
        });
        Ok(list)
    }

    fn news_feed(&self) -> Result<PagedFeed<NewsItem>> {
        let mut feed = PagedFeed::new();
        feed.replace(self.source.news()?);
        Ok(feed)
    }

    /// Display a category: folder view by default, detail view when a
    /// folder is selected.
    pub fn display(&self, category: Category, folder: Option<&str>, page: usize) -> Result<()> {
        match category {
            Category::TeacherAwards | Category::StudentAwards | Category::SchoolAwards => {
                let mut list = self.achievement_list(category)?;
                if let Some(folder) = folder {
                    list.select_group(folder);
                    list.goto_page(page);
                }
                self.render.achievements(category.title(), &list.snapshot());
            }
            Category::News => {
                let mut feed = self.news_feed()?;
                feed.goto_page(page);
                self.render.news(&feed.snapshot());
            }
            Category::OfficialDocuments | Category::FormDocuments => {
                let mut list = self.document_list(category)?;
                if let Some(folder) = folder {
                    list.select_group(folder);
                    list.goto_page(page);
                }
                self.render.documents(category.title(), &list.snapshot());
            }
        }
        Ok(())
    }

    /// Search a category's retained full set.
    pub fn find(&self, category: Category, query: &str) -> Result<()> {
        match category {
            Category::TeacherAwards | Category::StudentAwards | Category::SchoolAwards => {
                let mut list = self.achievement_list(category)?;
                list.search(query);
                self.render.achievements(category.title(), &list.snapshot());
            }
            Category::News => {
                let mut feed = self.news_feed()?;
                feed.search(query);
                self.render.news(&feed.snapshot());
            }
            Category::OfficialDocuments | Category::FormDocuments => {
                let mut list = self.document_list(category)?;
                list.search(query);
                self.render.documents(category.title(), &list.snapshot());
            }
        }
        Ok(())
    }

    /// Copy the link of the `index`-th item (1-based, retained order) of a
    /// category to the clipboard.
    pub fn copy_link(&self, category: Category, index: usize) -> Result<()> {
        let url = match category {
            Category::TeacherAwards | Category::StudentAwards | Category::SchoolAwards => self
                .achievement_set(category)?
                .get(index.saturating_sub(1))
                .and_then(|a| a.link().map(str::to_string)),
            Category::News => self
                .source
                .news()?
                .get(index.saturating_sub(1))
                .and_then(|n| n.link.clone()),
            Category::OfficialDocuments => self
                .source
                .official_documents()?
                .get(index.saturating_sub(1))
                .map(|d| d.file_url.clone()),
            Category::FormDocuments => self
                .source
                .form_documents()?
                .get(index.saturating_sub(1))
                .map(|d| d.file_url.clone()),
        };

        let url = url.ok_or(SchoolbookError::NoLinkToCopy(index))?;

        let mut clipboard =
            Clipboard::new().map_err(|e| SchoolbookError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(url.clone())
            .map_err(|e| SchoolbookError::Clipboard(e.to_string()))?;

        self.render.copied(&url);
        Ok(())
    }

    pub fn display_innovations(&self) -> Result<()> {
        self.render.innovations(&self.source.innovations()?);
        Ok(())
    }

    pub fn display_people(&self) -> Result<()> {
        self.render.people(&self.source.personnel()?);
        Ok(())
    }

    pub fn display_history(&self) -> Result<()> {
        self.render.history(&self.source.history()?);
        Ok(())
    }

    pub fn display_stats(&self) -> Result<()> {
        let summary = summarize_enrollment(&self.source.enrollment()?);
        self.render.enrollment(&summary);
        Ok(())
    }

    pub fn display_overview(&self) -> Result<()> {
        match self.source.school_info()? {
            Some(info) => {
                let news = self.source.news()?;
                let home_news = latest_news(&news, HOME_NEWS_COUNT);
                self.render
                    .overview(&SchoolOverview::project(&info), &home_news);
            }
            None => self.render.missing_profile(),
        }
        Ok(())
    }
}
