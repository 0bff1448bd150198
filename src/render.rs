use colored::Colorize;

use crate::config::Config;
use crate::listing::{FeedSnapshot, FolderSummary, ListSnapshot, PageControl};
use crate::models::{
    display_date, leader_and_staff, sorted_history, Achievement, Document, HistoryEntry,
    Innovation, NewsItem, Person,
};
use crate::overview::{EnrollmentSummary, SchoolOverview};

/// Colored-terminal rendering of presentation snapshots.
pub struct Render {
    config: Config,
}

impl Render {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn section_title(&self, title: &str) {
        println!();
        println!("  {}", title.bold());
    }

    fn empty_notice(&self, what: &str) {
        println!("  {}", format!("No {what} published yet").dimmed());
    }

    fn page_bar(&self, controls: &[PageControl], current: usize) {
        if controls.is_empty() {
            return;
        }

        let mut parts: Vec<String> = Vec::new();
        for control in controls {
            match control {
                PageControl::Page(p) if *p == current => {
                    parts.push(format!("[{p}]").yellow().to_string())
                }
                PageControl::Page(p) => parts.push(p.to_string().dimmed().to_string()),
                PageControl::Ellipsis => parts.push("…".dimmed().to_string()),
            }
        }
        println!();
        println!("  {}", parts.join(" "));
    }

    fn folder_rows(&self, folders: &[FolderSummary]) {
        for (i, folder) in folders.iter().enumerate() {
            let count = if self.config.display_item_counts {
                format!(" [{}]", folder.count).dimmed().to_string()
            } else {
                String::new()
            };
            println!(
                "  {:>2}. {}{}",
                (i + 1).to_string().dimmed(),
                folder.label.cyan(),
                count
            );
        }
    }

    fn detail_header(&self, group: &str, total: usize) {
        let count = if self.config.display_item_counts {
            format!(" ({total} items)").dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", group.cyan().bold(), count);
        println!();
    }

    pub fn achievements(&self, title: &str, snapshot: &ListSnapshot<'_, Achievement>) {
        self.section_title(title);
        match snapshot {
            ListSnapshot::Folders(folders) if folders.is_empty() => {
                self.empty_notice("achievements")
            }
            ListSnapshot::Folders(folders) => self.folder_rows(folders),
            ListSnapshot::Details {
                group,
                items,
                page,
                total,
                controls,
            } => {
                self.detail_header(group, *total);
                for item in items {
                    let title = item.title.as_deref().unwrap_or("-");
                    let program = item
                        .program
                        .as_deref()
                        .map(|p| format!("  {}", p.dimmed()))
                        .unwrap_or_default();
                    println!("  {} {}{}", item.honoree().bold(), title, program);
                }
                if items.is_empty() {
                    println!("  {}", "Nothing on this page".dimmed());
                }
                self.page_bar(controls, *page);
            }
        }
    }

    pub fn news(&self, snapshot: &FeedSnapshot<'_, NewsItem>) {
        self.section_title("News");
        if let Some(query) = snapshot.query {
            println!("  {}", format!("matching \"{query}\"").dimmed());
            println!();
        }
        if snapshot.total == 0 {
            self.empty_notice("news");
            return;
        }
        for item in &snapshot.items {
            println!(
                "  {}  {}",
                display_date(&item.date).blue(),
                item.title.bold()
            );
            if let Some(link) = item.link.as_deref() {
                println!("      {}", link.dimmed().underline());
            }
        }
        self.page_bar(&snapshot.controls, snapshot.page);
    }

    pub fn documents(&self, title: &str, snapshot: &ListSnapshot<'_, Document>) {
        self.section_title(title);
        match snapshot {
            ListSnapshot::Folders(folders) if folders.is_empty() => self.empty_notice("documents"),
            ListSnapshot::Folders(folders) => self.folder_rows(folders),
            ListSnapshot::Details {
                group,
                items,
                page,
                total,
                controls,
            } => {
                self.detail_header(group, *total);
                for doc in items {
                    println!(
                        "  {}  {}",
                        display_date(&doc.upload_date).blue(),
                        doc.title.bold()
                    );
                    println!("      {}", doc.file_url.dimmed().underline());
                }
                if items.is_empty() {
                    println!("  {}", "Nothing on this page".dimmed());
                }
                self.page_bar(controls, *page);
            }
        }
    }

    pub fn innovations(&self, items: &[Innovation]) {
        self.section_title("Innovations");
        if items.is_empty() {
            self.empty_notice("innovations");
            return;
        }
        for inno in items {
            println!(
                "  {} {}",
                inno.title.bold(),
                format!("[{}]", inno.subject_badge()).magenta()
            );
            let class = inno
                .class
                .as_deref()
                .map(|c| format!(" · {c}"))
                .unwrap_or_default();
            println!("      {}{}", inno.creator.dimmed(), class.dimmed());
        }
    }

    pub fn people(&self, people: &[Person]) {
        self.section_title("Personnel");
        if people.is_empty() {
            self.empty_notice("personnel");
            return;
        }
        let (leader, staff) = leader_and_staff(people);
        if let Some(leader) = leader {
            println!("  {}  {}", "★".yellow(), leader.name.bold());
            println!("      {}", leader.role.dimmed());
        }
        for person in staff {
            println!("  {}  {}", person.name, person.role.dimmed());
        }
    }

    pub fn history(&self, entries: &[HistoryEntry]) {
        self.section_title("Past Administrators");
        if entries.is_empty() {
            self.empty_notice("history entries");
            return;
        }
        for entry in sorted_history(entries) {
            let year = entry.year.as_deref().unwrap_or("-");
            println!(
                "  {}  {}  {}",
                format!("{year:>12}").yellow(),
                entry.name.bold(),
                entry.role.as_deref().unwrap_or("-").dimmed()
            );
        }
    }

    pub fn enrollment(&self, summary: &EnrollmentSummary) {
        self.section_title("Enrollment");
        if summary.grades.is_empty() {
            self.empty_notice("enrollment figures");
            return;
        }
        println!(
            "  {} students  {} {}  {} {}",
            summary.total.to_string().bold(),
            summary.male.to_string().blue(),
            "male".dimmed(),
            summary.female.to_string().magenta(),
            "female".dimmed()
        );
        println!();
        for grade in &summary.grades {
            println!(
                "  {:<8} {} / {}",
                grade.grade,
                grade.male.to_string().blue(),
                grade.female.to_string().magenta()
            );
        }
    }

    pub fn overview(&self, overview: &SchoolOverview, home_news: &[&NewsItem]) {
        self.section_title(&overview.name);
        println!("  {}", overview.name_en.dimmed());
        if let Some(age) = overview.age {
            println!("  {}", format!("{age} years of service").dimmed());
        }
        println!();

        let rows = [
            ("Motto", &overview.motto),
            ("Affiliation", &overview.affiliation),
            ("Address", &overview.address),
            ("School code", &overview.school_code),
            ("SMIS code", &overview.smis_code),
            ("OBEC code", &overview.obec_code),
            ("Vision", &overview.vision),
            ("Mission", &overview.mission),
            ("Philosophy", &overview.philosophy),
            ("Identity", &overview.identity),
            ("Uniqueness", &overview.uniqueness),
        ];
        for (label, value) in rows {
            println!("  {:<12} {}", label.dimmed(), value);
        }
        println!(
            "  {:<12} {} / {}",
            "Colors".dimmed(),
            overview.color_primary,
            overview.color_secondary
        );
        if let Some(video_id) = overview.video_id.as_deref() {
            println!(
                "  {:<12} {}",
                "Video".dimmed(),
                format!("https://youtu.be/{video_id}").underline()
            );
        }

        if self.config.display_home_news && !home_news.is_empty() {
            self.section_title("Latest News");
            for item in home_news {
                println!(
                    "  {}  {}",
                    display_date(&item.date).blue(),
                    item.title
                );
            }
        }
    }

    pub fn copied(&self, url: &str) {
        println!("  {} {}", "Copied".green(), url.dimmed());
    }

    pub fn missing_profile(&self) {
        println!("  {}", "No school profile published yet".dimmed());
    }
}
