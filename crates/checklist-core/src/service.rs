use crate::config::{Config, DEFAULT_MAX_CHOICES};
use crate::error::{ChecklistError, Result};
use crate::parser::{self, TextEncoding};
use crate::store::LedgerStore;
use crate::types::{
    canonical_header, total_quantity, CheckStatus, Item, Quantity, Row, StatusFilter, HEADER_CHECK,
    HEADER_NAME,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResult {
    pub title: String,
    pub item_count: usize,
    pub total_quantity: u64,
    pub encoding: TextEncoding,
    /// A ledger with this title existed and was overwritten.
    pub replaced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResult {
    pub title: String,
    pub item: String,
    pub previous_status: CheckStatus,
    pub new_status: CheckStatus,
    /// Raw status cell before the update, e.g. `"0"`, `"1"`, or `""`.
    pub previous_marker: String,
    pub required_quantity: Quantity,
}

/// What a deletion confirmation shows before the user commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerInfo {
    pub title: String,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
    pub item_count: usize,
    pub finished_count: usize,
    pub total_quantity: u64,
}

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

/// Checklist operations over a ledger store. Each call reads from disk and
/// (for mutations) rewrites the whole ledger before returning.
#[derive(Debug, Clone)]
pub struct Checklist {
    store: LedgerStore,
    max_choices: usize,
}

impl Checklist {
    pub fn new(store: LedgerStore) -> Self {
        Self {
            store,
            max_choices: DEFAULT_MAX_CHOICES,
        }
    }

    pub fn open(root: &Path, cfg: &Config) -> Self {
        Self {
            store: LedgerStore::new(cfg.ledger_dir(root)),
            max_choices: cfg.max_choices,
        }
    }

    pub fn with_max_choices(mut self, max_choices: usize) -> Self {
        self.max_choices = max_choices;
        self
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Parse an uploaded material list and store it under `title`, replacing
    /// any ledger already stored there.
    pub fn ingest(&self, title: &str, raw: &[u8]) -> Result<IngestResult> {
        let replaced = self.store.exists(title)?;
        let parsed = parser::parse_bytes(raw)?;
        self.store.write(title, &parsed.rows)?;

        let items: Vec<Item> = parsed
            .data_rows()
            .iter()
            .filter_map(|row| Item::from_row(row))
            .collect();
        let result = IngestResult {
            title: title.to_string(),
            item_count: items.len(),
            total_quantity: total_quantity(&items),
            encoding: parsed.encoding,
            replaced,
        };
        tracing::info!(
            title,
            items = result.item_count,
            total = result.total_quantity,
            encoding = %result.encoding,
            replaced,
            "ingested blueprint"
        );
        Ok(result)
    }

    /// Items matching `filter`, largest required quantity first. Ties keep
    /// ledger order, so callers can slice the result into stable pages.
    pub fn list_items(&self, title: &str, filter: StatusFilter) -> Result<Vec<Item>> {
        let rows = self.store.read(title)?;
        let mut items: Vec<Item> = data_rows(&rows)
            .iter()
            .filter_map(|row| Item::from_row(row))
            .filter(|item| filter.matches(item.completed))
            .collect();
        items.sort_by(|a, b| {
            b.required_quantity
                .value()
                .cmp(&a.required_quantity.value())
        });
        Ok(items)
    }

    /// Mark the first item named exactly `item_name` as done or undone.
    pub fn set_status(
        &self,
        title: &str,
        item_name: &str,
        status: CheckStatus,
    ) -> Result<UpdateResult> {
        let mut rows = self.store.read(title)?;
        if repair_header(&mut rows) {
            tracing::warn!(title, "repaired malformed ledger header");
        }

        let row = rows[1..]
            .iter_mut()
            .find(|row| row.first().map(String::as_str) == Some(item_name))
            .ok_or_else(|| ChecklistError::ItemNotFound {
                title: title.to_string(),
                item: item_name.to_string(),
            })?;

        if row.len() < 3 {
            row.resize(3, String::new());
        }
        let previous_marker = std::mem::replace(&mut row[2], status.marker().to_string());
        let quantity = if row[1].is_empty() { "0" } else { row[1].as_str() };
        let result = UpdateResult {
            title: title.to_string(),
            item: item_name.to_string(),
            previous_status: CheckStatus::from_marker(&previous_marker),
            new_status: status,
            previous_marker,
            required_quantity: Quantity::parse(quantity),
        };

        self.store.write(title, &rows)?;
        tracing::info!(
            title,
            item = item_name,
            from = %result.previous_status,
            to = %result.new_status,
            "updated item status"
        );
        Ok(result)
    }

    /// Delete the ledger. This is permanent: no backup copy is made.
    pub fn remove(&self, title: &str) -> Result<()> {
        self.store.delete(title)
    }

    /// `item_count` counts every row after the header, including short rows
    /// that `list_items` cannot show; the totals cover listable items only.
    pub fn describe(&self, title: &str) -> Result<LedgerInfo> {
        let meta = self.store.metadata(title)?;
        let rows = self.store.read(title)?;
        let data = data_rows(&rows);
        let items: Vec<Item> = data.iter().filter_map(|row| Item::from_row(row)).collect();
        Ok(LedgerInfo {
            title: title.to_string(),
            size_bytes: meta.size_bytes,
            modified: meta.modified,
            item_count: data.len(),
            finished_count: items.iter().filter(|i| i.completed).count(),
            total_quantity: total_quantity(&items),
        })
    }

    /// Ledger titles containing `substring` (case-insensitive).
    pub fn enumerate_titles(&self, substring: &str) -> Result<Vec<String>> {
        self.store.list_titles(substring, self.max_choices)
    }

    /// Item names in `title` containing `substring` (case-insensitive), in
    /// ledger order.
    pub fn enumerate_item_names(&self, title: &str, substring: &str) -> Result<Vec<String>> {
        let rows = self.store.read(title)?;
        let needle = substring.to_lowercase();
        Ok(data_rows(&rows)
            .iter()
            .filter_map(|row| row.first())
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(self.max_choices)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Header handling
// ---------------------------------------------------------------------------

/// A row that can only be an item: numeric quantity and a 0/1 status cell.
fn looks_like_item(row: &[String]) -> bool {
    row.len() >= 3
        && Quantity::parse(&row[1]).is_numeric()
        && matches!(row[2].trim(), "0" | "1")
}

/// Rows after the header. A ledger whose first row is an item has lost its
/// header, so nothing is skipped.
fn data_rows(rows: &[Row]) -> &[Row] {
    match rows.first() {
        Some(first) if !looks_like_item(first) => &rows[1..],
        _ => rows,
    }
}

/// Ensure row 0 is `[Item, Total, check]`. A header-shaped row with the wrong
/// labels is replaced; an item in the header slot gets a header inserted above
/// it. Returns `true` if anything changed.
fn repair_header(rows: &mut Vec<Row>) -> bool {
    if rows.is_empty() {
        rows.push(canonical_header());
        return true;
    }
    let first = &rows[0];
    if first.len() >= 3 && first[0] == HEADER_NAME && first[2] == HEADER_CHECK {
        return false;
    }
    if looks_like_item(first) {
        rows.insert(0, canonical_header());
    } else {
        rows[0] = canonical_header();
    }
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
