mod local;

pub use local::LocalContent;

use crate::error::Result;
use crate::models::{
    Achievement, Document, GradeCount, HistoryEntry, Innovation, NewsItem, Person, SchoolInfo,
};

/// The data-loader boundary: one read per published category.
///
/// Implementations supply plain record arrays; the presentation layer never
/// sees where they came from. A category with no published data is an empty
/// list, not an error.
pub trait ContentSource {
    fn teacher_achievements(&self) -> Result<Vec<Achievement>>;
    fn student_achievements(&self) -> Result<Vec<Achievement>>;
    fn school_achievements(&self) -> Result<Vec<Achievement>>;
    fn news(&self) -> Result<Vec<NewsItem>>;
    fn official_documents(&self) -> Result<Vec<Document>>;
    fn form_documents(&self) -> Result<Vec<Document>>;
    fn innovations(&self) -> Result<Vec<Innovation>>;
    fn personnel(&self) -> Result<Vec<Person>>;
    fn history(&self) -> Result<Vec<HistoryEntry>>;
    fn enrollment(&self) -> Result<Vec<GradeCount>>;
    fn school_info(&self) -> Result<Option<SchoolInfo>>;
}
