use serde::{Deserialize, Serialize};

/// The single school profile record. Every field is optional; the display
/// layer substitutes placeholders for whatever is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchoolInfo {
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub school_name_en: Option<String>,
    #[serde(default)]
    pub school_code_10: Option<String>,
    #[serde(default)]
    pub smis_code_8: Option<String>,
    #[serde(default)]
    pub obec_code_6: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub motto: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub vision: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub philosophy: Option<String>,
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub uniqueness: Option<String>,
    #[serde(default)]
    pub founding_date: Option<String>,
    #[serde(default)]
    pub color_code_1: Option<String>,
    #[serde(default)]
    pub color_code_2: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub uniform_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub map_embed: Option<String>,
}

/// Enrollment counts for one grade level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCount {
    pub grade: String,
    #[serde(default)]
    pub male: u32,
    #[serde(default)]
    pub female: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_tolerates_sparse_records() {
        let info: SchoolInfo = serde_json::from_str(r#"{"school_name":"Hillside School"}"#).unwrap();
        assert_eq!(info.school_name.as_deref(), Some("Hillside School"));
        assert!(info.motto.is_none());
    }

    #[test]
    fn test_grade_counts_default_to_zero() {
        let grade: GradeCount = serde_json::from_str(r#"{"grade":"G1"}"#).unwrap();
        assert_eq!(grade.male, 0);
        assert_eq!(grade.female, 0);
    }
}
