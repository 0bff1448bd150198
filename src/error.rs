use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchoolbookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid content directory: {0}")]
    InvalidDirectory(String),

    #[error("Missing content-dir flag value")]
    MissingContentDirValue,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Item {0} has no link to copy")]
    NoLinkToCopy(usize),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, SchoolbookError>;
