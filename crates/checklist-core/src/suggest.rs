//! Autocomplete choices for front-ends that prompt for titles, items,
//! filters, and statuses.

use crate::error::Result;
use crate::service::Checklist;
use crate::types::{CheckStatus, StatusFilter};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Label shown to the user.
    pub name: String,
    /// Value submitted back when picked.
    pub value: String,
}

impl Choice {
    fn same(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: value.clone(),
            value,
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn filter_choices(current: &str) -> Vec<Choice> {
    StatusFilter::all()
        .iter()
        .filter(|f| contains_ci(f.as_str(), current))
        .map(|f| Choice::same(f.as_str()))
        .collect()
}

/// Status options match on either the label or the value.
pub fn status_choices(current: &str) -> Vec<Choice> {
    [(CheckStatus::Done, "Done"), (CheckStatus::Undone, "Not done")]
        .into_iter()
        .filter(|(status, label)| {
            contains_ci(label, current) || contains_ci(status.as_str(), current)
        })
        .map(|(status, label)| Choice {
            name: label.to_string(),
            value: status.as_str().to_string(),
        })
        .collect()
}

pub fn title_choices(checklist: &Checklist, current: &str) -> Result<Vec<Choice>> {
    Ok(checklist
        .enumerate_titles(current)?
        .into_iter()
        .map(Choice::same)
        .collect())
}

pub fn item_choices(checklist: &Checklist, title: &str, current: &str) -> Result<Vec<Choice>> {
    Ok(checklist
        .enumerate_item_names(title, current)?
        .into_iter()
        .map(Choice::same)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LedgerStore;
    use tempfile::TempDir;

    fn values(choices: &[Choice]) -> Vec<&str> {
        choices.iter().map(|c| c.value.as_str()).collect()
    }

    #[test]
    fn filter_choices_substring() {
        assert_eq!(values(&filter_choices("")), ["finished", "unfinished", "all"]);
        assert_eq!(values(&filter_choices("FIN")), ["finished", "unfinished"]);
        assert_eq!(values(&filter_choices("al")), ["all"]);
        assert!(filter_choices("zzz").is_empty());
    }

    #[test]
    fn status_choices_match_label_or_value() {
        assert_eq!(values(&status_choices("")), ["done", "undone"]);
        assert_eq!(values(&status_choices("not")), ["undone"]);
        assert_eq!(values(&status_choices("UNDO")), ["undone"]);
        assert_eq!(status_choices("not")[0].name, "Not done");
    }

    #[test]
    fn title_and_item_choices_come_from_ledgers() {
        let dir = TempDir::new().unwrap();
        let checklist = Checklist::new(LedgerStore::new(dir.path().join("blueprint")));
        checklist
            .ingest(
                "Castle",
                b"| Item | Total | C | M |\n| Stone | 640 | 0 | 640 |\n| Sand | 3 | 0 | 3 |\n",
            )
            .unwrap();

        let titles = title_choices(&checklist, "cas").unwrap();
        assert_eq!(titles, vec![Choice::same("Castle")]);

        let items = item_choices(&checklist, "Castle", "s").unwrap();
        assert_eq!(values(&items), ["Stone", "Sand"]);
    }
}
