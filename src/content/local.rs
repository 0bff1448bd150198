use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{
    Achievement, Document, GradeCount, HistoryEntry, Innovation, NewsItem, Person, SchoolInfo,
};

use super::ContentSource;

/// File-based content directory: one JSON array per category, plus a single
/// `school.json` profile record.
pub struct LocalContent {
    dir: PathBuf,
}

impl LocalContent {
    pub fn new(content_dir: &Path) -> Self {
        Self {
            dir: content_dir.to_path_buf(),
        }
    }

    fn read_list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let items: Vec<T> = serde_json::from_str(&content)?;
        Ok(items)
    }

    fn read_record<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let record: T = serde_json::from_str(&content)?;
        Ok(Some(record))
    }
}

impl ContentSource for LocalContent {
    fn teacher_achievements(&self) -> Result<Vec<Achievement>> {
        self.read_list("teacher_achievements.json")
    }

    fn student_achievements(&self) -> Result<Vec<Achievement>> {
        self.read_list("student_achievements.json")
    }

    fn school_achievements(&self) -> Result<Vec<Achievement>> {
        self.read_list("school_achievements.json")
    }

    fn news(&self) -> Result<Vec<NewsItem>> {
        self.read_list("news.json")
    }

    fn official_documents(&self) -> Result<Vec<Document>> {
        self.read_list("official_documents.json")
    }

    fn form_documents(&self) -> Result<Vec<Document>> {
        self.read_list("form_documents.json")
    }

    fn innovations(&self) -> Result<Vec<Innovation>> {
        self.read_list("innovations.json")
    }

    fn personnel(&self) -> Result<Vec<Person>> {
        self.read_list("personnel.json")
    }

    fn history(&self) -> Result<Vec<HistoryEntry>> {
        self.read_list("history.json")
    }

    fn enrollment(&self) -> Result<Vec<GradeCount>> {
        self.read_list("enrollment.json")
    }

    fn school_info(&self) -> Result<Option<SchoolInfo>> {
        self.read_record("school.json")
    }
}
