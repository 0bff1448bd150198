use std::path::PathBuf;

use crate::error::{Result, SchoolbookError};
use crate::schoolbook::{Category, Schoolbook};

/// Execute CLI commands
pub fn run(
    input: Vec<String>,
    news: bool,
    achievements: Option<String>,
    documents: bool,
    forms: bool,
    innovations: bool,
    people: bool,
    history: bool,
    stats: bool,
    info: bool,
    find: Option<String>,
    copy: Option<String>,
    folder: Option<String>,
    page: usize,
    content_dir: Option<PathBuf>,
) -> Result<()> {
    let schoolbook = Schoolbook::new(content_dir.as_deref())?;

    if let Some(category) = find {
        return schoolbook.find(Category::parse(&category)?, &input.join(" "));
    }

    if let Some(category) = copy {
        let index = input
            .first()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| SchoolbookError::General("no item index to copy".to_string()))?;
        return schoolbook.copy_link(Category::parse(&category)?, index);
    }

    if news {
        return schoolbook.display(Category::News, None, page);
    }

    if let Some(kind) = achievements {
        return schoolbook.display(Category::parse(&kind)?, folder.as_deref(), page);
    }

    if documents {
        return schoolbook.display(Category::OfficialDocuments, folder.as_deref(), page);
    }

    if forms {
        return schoolbook.display(Category::FormDocuments, folder.as_deref(), page);
    }

    if innovations {
        return schoolbook.display_innovations();
    }

    if people {
        return schoolbook.display_people();
    }

    if history {
        return schoolbook.display_history();
    }

    if stats {
        return schoolbook.display_stats();
    }

    if info {
        return schoolbook.display_overview();
    }

    // Default: the school profile
    schoolbook.display_overview()
}
