use serde::{Deserialize, Serialize};

/// A teaching innovation entry: unpaginated grid, newest feed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Innovation {
    pub title: String,
    pub creator: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub file_url: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

impl Innovation {
    /// Badge text shown on the cover tile.
    pub fn subject_badge(&self) -> &str {
        match self.subject.as_deref() {
            Some(s) if !s.trim().is_empty() => s.trim(),
            _ => "Creative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_badge_defaults() {
        let inno: Innovation = serde_json::from_str(
            r#"{"title":"Reading app","creator":"Mr. A","fileUrl":"u"}"#,
        )
        .unwrap();
        assert_eq!(inno.subject_badge(), "Creative");
    }

    #[test]
    fn test_subject_badge_is_trimmed() {
        let inno: Innovation = serde_json::from_str(
            r#"{"title":"Reading app","creator":"Mr. A","subject":" Thai ","fileUrl":"u"}"#,
        )
        .unwrap();
        assert_eq!(inno.subject_badge(), "Thai");
    }
}
