use serde::{Deserialize, Serialize};

use super::label::group_label;
use crate::listing::{Grouped, Searchable};

/// Folder for achievements published without a competition label.
pub const UNLABELED_COMPETITION: &str = "Uncategorized";

/// Markers of national exam score rows. The school feed mixes these in with
/// ordinary awards; they belong on the statistics page, not the awards grid.
const EXAM_MARKERS: [&str; 3] = ["O-NET", "NT", "RT"];

/// One award row from the achievements feed (teacher, student or school).
///
/// Every field is optional; the feed is hand-maintained and rows routinely
/// omit whichever fields do not apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Credited students, as one free-text line.
    #[serde(default)]
    pub students: Option<String>,
    /// Credited individual (teacher rows use this instead of `students`).
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
}

impl Achievement {
    pub fn competition_label(&self) -> &str {
        group_label(self.competition.as_deref(), UNLABELED_COMPETITION)
    }

    /// Whoever the award is credited to: the student line, else the single
    /// name, else a placeholder.
    pub fn honoree(&self) -> &str {
        self.students
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.trim().is_empty()))
            .unwrap_or("-")
    }

    /// The resource an item click opens: certificate image first, file
    /// attachment second.
    pub fn link(&self) -> Option<&str> {
        self.image.as_deref().or(self.file_url.as_deref())
    }

    pub fn is_exam_result(&self) -> bool {
        let title = self.title.as_deref().unwrap_or("");
        let competition = self.competition.as_deref().unwrap_or("");
        EXAM_MARKERS
            .iter()
            .any(|marker| title.contains(marker) || competition.contains(marker))
    }
}

impl Searchable for Achievement {
    fn haystack(&self) -> String {
        [
            self.title.as_deref().unwrap_or(""),
            self.students.as_deref().unwrap_or(""),
            self.name.as_deref().unwrap_or(""),
            self.competition.as_deref().unwrap_or(""),
        ]
        .join(" ")
    }
}

impl Grouped for Achievement {
    fn group(&self) -> &str {
        self.competition_label()
    }

    fn thumbnail(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(competition: Option<&str>, title: Option<&str>) -> Achievement {
        Achievement {
            competition: competition.map(str::to_string),
            title: title.map(str::to_string),
            students: None,
            name: None,
            program: None,
            image: None,
            file_url: None,
        }
    }

    #[test]
    fn test_missing_competition_gets_default_folder() {
        assert_eq!(row(None, None).competition_label(), UNLABELED_COMPETITION);
        assert_eq!(row(Some("  "), None).competition_label(), UNLABELED_COMPETITION);
        assert_eq!(row(Some("Art Contest"), None).competition_label(), "Art Contest");
    }

    #[test]
    fn test_honoree_prefers_students_over_name() {
        let mut a = row(None, None);
        a.students = Some("Alice, Bob".to_string());
        a.name = Some("Ms. Carol".to_string());
        assert_eq!(a.honoree(), "Alice, Bob");

        a.students = Some("  ".to_string());
        assert_eq!(a.honoree(), "Ms. Carol");

        a.name = None;
        assert_eq!(a.honoree(), "-");
    }

    #[test]
    fn test_exam_rows_are_detected_in_title_or_competition() {
        assert!(row(None, Some("O-NET results 2024")).is_exam_result());
        assert!(row(Some("NT assessment"), None).is_exam_result());
        assert!(!row(Some("Robotics"), Some("Gold medal")).is_exam_result());
    }

    #[test]
    fn test_haystack_covers_searchable_fields() {
        let mut a = row(Some("Math Olympiad"), Some("First prize"));
        a.students = Some("Alice".to_string());
        let hay = a.haystack();
        assert!(hay.contains("First prize"));
        assert!(hay.contains("Alice"));
        assert!(hay.contains("Math Olympiad"));
    }
}
