mod achievement;
mod date;
mod document;
mod innovation;
mod label;
mod news;
mod person;
mod school;

pub use achievement::Achievement;
pub use date::{display_date, parse_flexible};
pub use document::Document;
pub use innovation::Innovation;
pub use label::group_label;
pub use news::{latest_news, NewsItem};
pub use person::{leader_and_staff, sorted_history, HistoryEntry, Person};
pub use school::{GradeCount, SchoolInfo};
