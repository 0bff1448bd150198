use super::Grouped;

/// One tile in the grouped folder view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub label: String,
    pub count: usize,
    /// Image of the first item seen in the group, if it had one.
    pub thumbnail: Option<String>,
}

/// Bucket items into folders, ordered by first occurrence of each label.
pub fn folder_summaries<'a, T, I>(items: I) -> Vec<FolderSummary>
where
    T: Grouped + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut folders: Vec<FolderSummary> = Vec::new();
    for item in items {
        let label = item.group();
        match folders.iter_mut().find(|f| f.label == label) {
            Some(folder) => folder.count += 1,
            None => folders.push(FolderSummary {
                label: label.to_string(),
                count: 1,
                thumbnail: item.thumbnail().map(str::to_string),
            }),
        }
    }
    folders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Searchable;

    struct Doc(&'static str, &'static str);

    impl Searchable for Doc {
        fn haystack(&self) -> String {
            self.0.to_string()
        }
    }

    impl Grouped for Doc {
        fn group(&self) -> &str {
            self.1
        }
    }

    struct Card(&'static str, Option<&'static str>);

    impl Searchable for Card {
        fn haystack(&self) -> String {
            self.0.to_string()
        }
    }

    impl Grouped for Card {
        fn group(&self) -> &str {
            self.0
        }

        fn thumbnail(&self) -> Option<&str> {
            self.1
        }
    }

    #[test]
    fn test_groups_in_first_occurrence_order() {
        let docs = [
            Doc("a", "Policy"),
            Doc("b", "Policy"),
            Doc("c", "Form"),
        ];
        let folders = folder_summaries(docs.iter());
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].label, "Policy");
        assert_eq!(folders[0].count, 2);
        assert_eq!(folders[1].label, "Form");
        assert_eq!(folders[1].count, 1);
    }

    #[test]
    fn test_counts_sum_to_item_count() {
        let docs = [
            Doc("a", "Policy"),
            Doc("b", "Form"),
            Doc("c", "Policy"),
            Doc("d", "Minutes"),
            Doc("e", "Form"),
        ];
        let folders = folder_summaries(docs.iter());
        let total: usize = folders.iter().map(|f| f.count).sum();
        assert_eq!(total, docs.len());
    }

    #[test]
    fn test_empty_input_has_no_folders() {
        let folders = folder_summaries(std::iter::empty::<&Doc>());
        assert!(folders.is_empty());
    }

    #[test]
    fn test_thumbnail_comes_from_the_first_grouped_item() {
        let cards = [
            Card("Robotics", None),
            Card("Robotics", Some("second.jpg")),
            Card("Art", Some("art.jpg")),
        ];
        let folders = folder_summaries(cards.iter());
        assert_eq!(folders[0].thumbnail, None);
        assert_eq!(folders[1].thumbnail.as_deref(), Some("art.jpg"));
    }
}
