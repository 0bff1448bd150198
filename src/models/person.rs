use serde::{Deserialize, Serialize};

/// A personnel entry. The lowest id is the school leader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Split personnel into (leader, remaining staff), ordered by id ascending.
pub fn leader_and_staff(people: &[Person]) -> (Option<&Person>, Vec<&Person>) {
    let mut sorted: Vec<&Person> = people.iter().collect();
    sorted.sort_by_key(|p| p.id);
    let mut iter = sorted.into_iter();
    let leader = iter.next();
    (leader, iter.collect())
}

/// A past-administrator entry on the history page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Tenure, as free text ("2015-2019").
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// History entries, most recent (highest id) first.
pub fn sorted_history(entries: &[HistoryEntry]) -> Vec<&HistoryEntry> {
    let mut sorted: Vec<&HistoryEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| std::cmp::Reverse(e.id));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: u64, name: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            role: "Teacher".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_lowest_id_is_leader() {
        let people = vec![person(3, "c"), person(1, "a"), person(2, "b")];
        let (leader, staff) = leader_and_staff(&people);
        assert_eq!(leader.unwrap().name, "a");
        let names: Vec<&str> = staff.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_empty_personnel_has_no_leader() {
        let (leader, staff) = leader_and_staff(&[]);
        assert!(leader.is_none());
        assert!(staff.is_empty());
    }

    #[test]
    fn test_history_is_newest_first() {
        let entries = vec![
            HistoryEntry {
                id: 1,
                name: "first".to_string(),
                role: None,
                year: None,
                image: None,
            },
            HistoryEntry {
                id: 4,
                name: "latest".to_string(),
                role: None,
                year: None,
                image: None,
            },
        ];
        let sorted = sorted_history(&entries);
        assert_eq!(sorted[0].name, "latest");
    }
}
