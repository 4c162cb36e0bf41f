use serde::{Deserialize, Serialize};
use std::fmt;

/// One stored ledger line: `[name, quantity, check]` for items, or the header.
pub type Row = Vec<String>;

pub const HEADER_NAME: &str = "Item";
pub const HEADER_QUANTITY: &str = "Total";
pub const HEADER_CHECK: &str = "check";

pub const MARK_DONE: &str = "1";
pub const MARK_UNDONE: &str = "0";

pub fn canonical_header() -> Row {
    vec![
        HEADER_NAME.to_string(),
        HEADER_QUANTITY.to_string(),
        HEADER_CHECK.to_string(),
    ]
}

// ---------------------------------------------------------------------------
// Quantity
// ---------------------------------------------------------------------------

/// Required quantity as stored. Malformed cells keep their exact text so a
/// rewrite never alters them; they count as zero when summed or sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Count(u64),
    Raw(String),
}

impl Quantity {
    pub fn parse(text: &str) -> Self {
        // Only canonical digit strings become counts; "007" stays raw so the
        // stored text survives a rewrite unchanged.
        match text.parse::<u64>() {
            Ok(n) if n.to_string() == text => Quantity::Count(n),
            _ => Quantity::Raw(text.to_string()),
        }
    }

    /// Numeric value for aggregation; anything unparseable is zero.
    pub fn value(&self) -> u64 {
        match self {
            Quantity::Count(n) => *n,
            Quantity::Raw(text) => {
                if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    // All digits, so parsing only fails on overflow.
                    text.parse().unwrap_or(u64::MAX)
                } else {
                    0
                }
            }
        }
    }

    pub fn is_numeric(&self) -> bool {
        match self {
            Quantity::Count(_) => true,
            Quantity::Raw(text) => !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Quantity::Count(n) => n.to_string(),
            Quantity::Raw(text) => text.clone(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{n}"),
            Quantity::Raw(text) => f.write_str(text),
        }
    }
}

// ---------------------------------------------------------------------------
// CheckStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Done,
    Undone,
}

impl CheckStatus {
    pub fn from_marker(marker: &str) -> Self {
        if marker.trim() == MARK_DONE {
            CheckStatus::Done
        } else {
            CheckStatus::Undone
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            CheckStatus::Done => MARK_DONE,
            CheckStatus::Undone => MARK_UNDONE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Done => "done",
            CheckStatus::Undone => "undone",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckStatus {
    type Err = crate::error::ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "done" => Ok(CheckStatus::Done),
            "undone" => Ok(CheckStatus::Undone),
            other => Err(crate::error::ChecklistError::InvalidStatus(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    Finished,
    Unfinished,
    #[default]
    All,
}

impl StatusFilter {
    pub fn all() -> &'static [StatusFilter] {
        &[
            StatusFilter::Finished,
            StatusFilter::Unfinished,
            StatusFilter::All,
        ]
    }

    pub fn matches(self, completed: bool) -> bool {
        match self {
            StatusFilter::Finished => completed,
            StatusFilter::Unfinished => !completed,
            StatusFilter::All => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::Finished => "finished",
            StatusFilter::Unfinished => "unfinished",
            StatusFilter::All => "all",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = crate::error::ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finished" => Ok(StatusFilter::Finished),
            "unfinished" => Ok(StatusFilter::Unfinished),
            "all" => Ok(StatusFilter::All),
            other => Err(crate::error::ChecklistError::InvalidFilter(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub required_quantity: Quantity,
    pub completed: bool,
}

impl Item {
    /// Build an item from a stored data row. Rows with fewer than three cells
    /// are not items.
    pub fn from_row(row: &[String]) -> Option<Self> {
        if row.len() < 3 {
            return None;
        }
        let quantity = if row[1].is_empty() { "0" } else { row[1].as_str() };
        Some(Self {
            name: row[0].clone(),
            required_quantity: Quantity::parse(quantity),
            completed: CheckStatus::from_marker(&row[2]) == CheckStatus::Done,
        })
    }
}

/// Sum of required quantities, saturating at `u64::MAX`; malformed
/// quantities contribute zero.
pub fn total_quantity(items: &[Item]) -> u64 {
    items
        .iter()
        .map(|i| i.required_quantity.value())
        .fold(0u64, |acc, q| acc.saturating_add(q))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn quantity_keeps_malformed_text() {
        assert_eq!(Quantity::parse("640"), Quantity::Count(640));
        assert_eq!(Quantity::parse("a lot"), Quantity::Raw("a lot".to_string()));
        assert_eq!(Quantity::parse("007").as_text(), "007");
        assert_eq!(Quantity::parse("-3").as_text(), "-3");
    }

    #[test]
    fn quantity_value_defaults_to_zero() {
        assert_eq!(Quantity::parse("640").value(), 640);
        assert_eq!(Quantity::parse("007").value(), 7);
        assert_eq!(Quantity::parse("a lot").value(), 0);
        assert_eq!(Quantity::parse("-3").value(), 0);
        assert_eq!(Quantity::parse("").value(), 0);
    }

    #[test]
    fn quantity_serializes_as_number_or_text() {
        let item = Item::from_row(&row(&["Stone", "640", "1"])).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["required_quantity"], 640);
        assert_eq!(json["completed"], true);

        let raw = serde_json::to_value(Quantity::parse("a lot")).unwrap();
        assert_eq!(raw, "a lot");
    }

    #[test]
    fn oversized_digit_quantity_saturates() {
        let huge = Quantity::parse("99999999999999999999999");
        assert!(matches!(huge, Quantity::Raw(_)));
        assert!(huge.is_numeric());
        assert_eq!(huge.value(), u64::MAX);
        assert_eq!(huge.as_text(), "99999999999999999999999");
    }

    #[test]
    fn total_quantity_saturates_instead_of_overflowing() {
        let items = vec![
            Item::from_row(&row(&["A", "18446744073709551615", "0"])).unwrap(),
            Item::from_row(&row(&["B", "1", "0"])).unwrap(),
        ];
        assert_eq!(total_quantity(&items), u64::MAX);
    }

    #[test]
    fn check_status_markers() {
        assert_eq!(CheckStatus::from_marker("1"), CheckStatus::Done);
        assert_eq!(CheckStatus::from_marker(" 1 "), CheckStatus::Done);
        assert_eq!(CheckStatus::from_marker("0"), CheckStatus::Undone);
        assert_eq!(CheckStatus::from_marker("yes"), CheckStatus::Undone);
        assert_eq!(CheckStatus::from_marker(""), CheckStatus::Undone);
        assert_eq!(CheckStatus::Done.marker(), "1");
        assert_eq!(CheckStatus::Undone.marker(), "0");
    }

    #[test]
    fn parse_status_and_filter() {
        assert_eq!("done".parse::<CheckStatus>().unwrap(), CheckStatus::Done);
        assert!("Done".parse::<CheckStatus>().is_err());
        assert_eq!(
            "unfinished".parse::<StatusFilter>().unwrap(),
            StatusFilter::Unfinished
        );
        assert!("some".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn filter_matches() {
        assert!(StatusFilter::Finished.matches(true));
        assert!(!StatusFilter::Finished.matches(false));
        assert!(StatusFilter::Unfinished.matches(false));
        assert!(!StatusFilter::Unfinished.matches(true));
        assert!(StatusFilter::All.matches(true) && StatusFilter::All.matches(false));
    }

    #[test]
    fn item_from_row() {
        let item = Item::from_row(&row(&["Stone", "640", "1"])).unwrap();
        assert_eq!(item.name, "Stone");
        assert_eq!(item.required_quantity, Quantity::Count(640));
        assert!(item.completed);

        let empty_qty = Item::from_row(&row(&["Glass", "", "0"])).unwrap();
        assert_eq!(empty_qty.required_quantity.as_text(), "0");

        assert!(Item::from_row(&row(&["Stone", "640"])).is_none());
    }

    #[test]
    fn total_ignores_malformed() {
        let items = vec![
            Item::from_row(&row(&["Stone", "640", "0"])).unwrap(),
            Item::from_row(&row(&["Dirt", "??", "0"])).unwrap(),
            Item::from_row(&row(&["Glass", "12", "1"])).unwrap(),
        ];
        assert_eq!(total_quantity(&items), 652);
    }
}
