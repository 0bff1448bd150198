//! Projection of the school profile and enrollment statistics into display
//! slots. Pure data shaping; both rendering adapters consume the result.

use chrono::Datelike;

use crate::models::{parse_flexible, GradeCount, SchoolInfo};

/// Shown in any slot whose source field is missing or blank.
pub const PLACEHOLDER: &str = "-";

const DEFAULT_COLOR: &str = "#ddd";

/// The school profile mapped 1:1 onto named display slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolOverview {
    pub name: String,
    pub name_en: String,
    pub school_code: String,
    pub smis_code: String,
    pub obec_code: String,
    pub affiliation: String,
    pub address: String,
    pub motto: String,
    pub history: String,
    pub vision: String,
    pub mission: String,
    pub philosophy: String,
    pub identity: String,
    pub uniqueness: String,
    /// Years since founding, when the founding date parses.
    pub age: Option<i32>,
    pub color_primary: String,
    pub color_secondary: String,
    pub logo_url: Option<String>,
    pub uniform_url: Option<String>,
    pub video_id: Option<String>,
    pub map_embed: Option<String>,
}

impl SchoolOverview {
    pub fn project(info: &SchoolInfo) -> Self {
        Self::project_at(info, chrono::Local::now().year())
    }

    pub fn project_at(info: &SchoolInfo, current_year: i32) -> Self {
        let color_primary = slot(&info.color_code_1, DEFAULT_COLOR);
        let color_secondary = slot(&info.color_code_2, &color_primary);

        Self {
            name: slot(&info.school_name, PLACEHOLDER),
            name_en: slot(&info.school_name_en, PLACEHOLDER),
            school_code: slot(&info.school_code_10, PLACEHOLDER),
            smis_code: slot(&info.smis_code_8, PLACEHOLDER),
            obec_code: slot(&info.obec_code_6, PLACEHOLDER),
            affiliation: slot(&info.affiliation, PLACEHOLDER),
            address: slot(&info.address, PLACEHOLDER),
            motto: slot(&info.motto, PLACEHOLDER),
            history: slot(&info.history, PLACEHOLDER),
            vision: slot(&info.vision, PLACEHOLDER),
            mission: slot(&info.mission, PLACEHOLDER),
            philosophy: slot(&info.philosophy, PLACEHOLDER),
            identity: slot(&info.identity, PLACEHOLDER),
            uniqueness: slot(&info.uniqueness, PLACEHOLDER),
            age: school_age(info.founding_date.as_deref(), current_year),
            color_primary,
            color_secondary,
            logo_url: info.logo_url.clone(),
            uniform_url: info.uniform_url.clone(),
            video_id: info.video_url.as_deref().and_then(video_id),
            map_embed: info.map_embed.clone(),
        }
    }
}

fn slot(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn school_age(founding_date: Option<&str>, current_year: i32) -> Option<i32> {
    let founded = parse_flexible(founding_date?)?;
    Some(current_year - founded.year())
}

/// Extract a video id from the two YouTube URL forms the profile uses
/// (`watch?v=<id>` and `youtu.be/<id>`). Anything else yields `None`.
pub fn video_id(url: &str) -> Option<String> {
    if let Some((_, rest)) = url.split_once("v=") {
        let id = rest.split(['&', '#']).next().unwrap_or("");
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let id = rest.split(['?', '&', '#', '/']).next().unwrap_or("");
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }
    None
}

/// Enrollment roll-up for the statistics page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentSummary {
    pub male: u32,
    pub female: u32,
    pub total: u32,
    pub grades: Vec<GradeCount>,
}

pub fn summarize_enrollment(grades: &[GradeCount]) -> EnrollmentSummary {
    let male: u32 = grades.iter().map(|g| g.male).sum();
    let female: u32 = grades.iter().map(|g| g.female).sum();
    EnrollmentSummary {
        male,
        female,
        total: male + female,
        grades: grades.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_placeholders() {
        let overview = SchoolOverview::project_at(&SchoolInfo::default(), 2026);
        assert_eq!(overview.name, PLACEHOLDER);
        assert_eq!(overview.motto, PLACEHOLDER);
        assert_eq!(overview.age, None);
        assert!(overview.video_id.is_none());
    }

    #[test]
    fn test_age_derives_from_founding_year() {
        let info = SchoolInfo {
            founding_date: Some("1954-06-17".to_string()),
            ..Default::default()
        };
        let overview = SchoolOverview::project_at(&info, 2026);
        assert_eq!(overview.age, Some(72));
    }

    #[test]
    fn test_unparseable_founding_date_yields_no_age() {
        let info = SchoolInfo {
            founding_date: Some("a long time ago".to_string()),
            ..Default::default()
        };
        assert_eq!(SchoolOverview::project_at(&info, 2026).age, None);
    }

    #[test]
    fn test_colors_fall_back_in_order() {
        let overview = SchoolOverview::project_at(&SchoolInfo::default(), 2026);
        assert_eq!(overview.color_primary, "#ddd");
        assert_eq!(overview.color_secondary, "#ddd");

        let info = SchoolInfo {
            color_code_1: Some("#123456".to_string()),
            ..Default::default()
        };
        let overview = SchoolOverview::project_at(&info, 2026);
        assert_eq!(overview.color_secondary, "#123456");
    }

    #[test]
    fn test_video_id_watch_form() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_video_id_short_form() {
        assert_eq!(
            video_id("https://youtu.be/dQw4w9WgXcQ?si=xyz"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_video_id_garbage_is_none() {
        assert_eq!(video_id("https://example.com/clip.mp4"), None);
        assert_eq!(video_id(""), None);
    }

    #[test]
    fn test_enrollment_totals() {
        let grades = vec![
            GradeCount {
                grade: "G1".to_string(),
                male: 12,
                female: 14,
            },
            GradeCount {
                grade: "G2".to_string(),
                male: 9,
                female: 11,
            },
        ];
        let summary = summarize_enrollment(&grades);
        assert_eq!(summary.male, 21);
        assert_eq!(summary.female, 25);
        assert_eq!(summary.total, 46);
        assert_eq!(summary.grades.len(), 2);
    }
}
