//! Blueprint material-list parsing.
//!
//! Material lists are exported as pipe-delimited text tables framed by
//! decorative borders:
//!
//! ```text
//! +-----------+-------+---------+-----------+
//! | Item      | Total | Missing | Available |
//! +-----------+-------+---------+-----------+
//! | Stone     | 640   | 640     | 0         |
//! ```
//!
//! Each line is classified as a header, a data row, or noise. Only the item
//! name and total survive; the status column is always synthesized.

use crate::error::{ChecklistError, Result};
use crate::types::{canonical_header, Row, HEADER_CHECK, MARK_UNDONE};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Text encodings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    Utf8,
    ShiftJis,
    Cp932,
    Latin1,
}

impl TextEncoding {
    /// Decode candidates, in the order they are attempted.
    pub fn candidates() -> &'static [TextEncoding] {
        &[
            TextEncoding::Utf8,
            TextEncoding::ShiftJis,
            TextEncoding::Cp932,
            TextEncoding::Latin1,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::ShiftJis => "shift_jis",
            TextEncoding::Cp932 => "cp932",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// Strict decode: `None` if any byte sequence is invalid for this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                std::str::from_utf8(bytes).ok().map(str::to_owned)
            }
            TextEncoding::ShiftJis => {
                if uses_windows_extensions(bytes) {
                    return None;
                }
                decode_windows_31j(bytes)
            }
            TextEncoding::Cp932 => decode_windows_31j(bytes),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn decode_windows_31j(bytes: &[u8]) -> Option<String> {
    encoding_rs::SHIFT_JIS
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// True if a double-byte sequence leads with a byte that only Windows code
/// page 932 assigns (NEC row 13, NEC/IBM extensions, user-defined area).
/// Plain Shift_JIS rejects these; CP932 accepts them.
fn uses_windows_extensions(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match b {
            0x87 | 0xED | 0xEE | 0xF0..=0xFC => return true,
            0x81..=0x9F | 0xE0..=0xEF => i += 2,
            _ => i += 1,
        }
    }
    false
}

/// Try each candidate encoding in order; the first clean decode wins.
pub fn decode(bytes: &[u8]) -> Result<(String, TextEncoding)> {
    for &encoding in TextEncoding::candidates() {
        if let Some(text) = encoding.decode(bytes) {
            tracing::debug!(encoding = %encoding, "decoded blueprint text");
            return Ok((text, encoding));
        }
        tracing::debug!(encoding = %encoding, "decode attempt failed");
    }
    Err(ChecklistError::Decode {
        tried: TextEncoding::candidates()
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Header {
        name_col: String,
        quantity_col: String,
    },
    Data {
        name: String,
        quantity: String,
    },
    Ignored,
}

static HEADER_RE: OnceLock<Regex> = OnceLock::new();
static DATA_RE: OnceLock<Regex> = OnceLock::new();

fn header_re() -> &'static Regex {
    HEADER_RE.get_or_init(|| {
        Regex::new(r"^\|\s*(.*?)\s*\|\s*(.*?)\s*\|\s*(.*?)\s*\|\s*(.*?)\s*\|").unwrap()
    })
}

fn data_re() -> &'static Regex {
    DATA_RE.get_or_init(|| {
        Regex::new(r"^\|\s*(.*?)\s*\|\s*(\d+)\s*\|\s*(\d+)\s*\|\s*(\d+)\s*\|").unwrap()
    })
}

/// Classify one line of an exported material list.
///
/// A line mentioning both `Item` and `Total` can only ever be a header: if it
/// doesn't have the four-cell shape it is ignored rather than tried as data.
pub fn classify_line(line: &str) -> LineKind {
    if line.contains("Item") && line.contains("Total") {
        return match header_re().captures(line) {
            Some(caps) => LineKind::Header {
                name_col: caps[1].to_string(),
                quantity_col: caps[2].to_string(),
            },
            None => LineKind::Ignored,
        };
    }
    match data_re().captures(line) {
        Some(caps) => LineKind::Data {
            name: caps[1].to_string(),
            quantity: caps[2].to_string(),
        },
        None => LineKind::Ignored,
    }
}

/// Lazily classify every line of `text`.
pub fn classify(text: &str) -> impl Iterator<Item = LineKind> + '_ {
    text.lines().map(classify_line)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize classified lines into ledger rows: header first, then data rows
/// in source order with status `"0"`.
///
/// Only the first header is kept; when none is present the canonical
/// `[Item, Total, check]` header is used so every ledger starts with one.
pub fn parse(text: &str) -> Vec<Row> {
    let mut header: Option<Row> = None;
    let mut rows: Vec<Row> = Vec::new();

    for kind in classify(text) {
        match kind {
            LineKind::Header {
                name_col,
                quantity_col,
            } => {
                if header.is_none() {
                    header = Some(vec![name_col, quantity_col, HEADER_CHECK.to_string()]);
                } else {
                    tracing::debug!("ignoring repeated header line");
                }
            }
            LineKind::Data { name, quantity } => {
                rows.push(vec![name, quantity, MARK_UNDONE.to_string()]);
            }
            LineKind::Ignored => {}
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(header.unwrap_or_else(canonical_header));
    out.extend(rows);
    out
}

/// Result of decoding and parsing an uploaded material list.
#[derive(Debug, Clone)]
pub struct ParsedBlueprint {
    /// Header row followed by data rows.
    pub rows: Vec<Row>,
    pub encoding: TextEncoding,
}

impl ParsedBlueprint {
    pub fn data_rows(&self) -> &[Row] {
        &self.rows[1..]
    }
}

pub fn parse_bytes(bytes: &[u8]) -> Result<ParsedBlueprint> {
    let (text, encoding) = decode(bytes)?;
    let rows = parse(&text);
    Ok(ParsedBlueprint { rows, encoding })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
