use crate::error::{ChecklistError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CHECKLIST_DIR: &str = ".checklist";
pub const CONFIG_FILE: &str = ".checklist/config.yaml";

/// Default directory (relative to the root) holding one CSV file per blueprint.
pub const DEFAULT_LEDGER_DIR: &str = "blueprint";
pub const LEDGER_EXT: &str = "csv";

pub const MAX_TITLE_LEN: usize = 100;

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn checklist_dir(root: &Path) -> PathBuf {
    root.join(CHECKLIST_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn ledger_dir(root: &Path, dir_name: &str) -> PathBuf {
    root.join(dir_name)
}

/// `<dir>/<title>.csv`. Callers validate the title first.
pub fn ledger_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{title}.{LEDGER_EXT}"))
}

/// Recover the title from a ledger file path, or `None` for non-ledger files.
pub fn title_from_path(path: &Path) -> Option<String> {
    if path.extension()?.to_str()? != LEDGER_EXT {
        return None;
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

// ---------------------------------------------------------------------------
// Title validation
// ---------------------------------------------------------------------------

static FORBIDDEN_RE: OnceLock<Regex> = OnceLock::new();
static RESERVED_RE: OnceLock<Regex> = OnceLock::new();

fn forbidden_re() -> &'static Regex {
    FORBIDDEN_RE.get_or_init(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1f\x7f]"#).unwrap())
}

fn reserved_re() -> &'static Regex {
    RESERVED_RE.get_or_init(|| Regex::new(r"(?i)^(con|prn|aux|nul|com[1-9]|lpt[1-9])$").unwrap())
}

/// Titles become file names verbatim, so anything that could escape the
/// ledger directory or is unrepresentable on common filesystems is rejected.
pub fn validate_title(title: &str) -> Result<()> {
    let reject = |reason: &str| {
        Err(ChecklistError::InvalidTitle {
            title: title.to_string(),
            reason: reason.to_string(),
        })
    };

    if title.is_empty() {
        return reject("title is empty");
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return reject("title is longer than 100 characters");
    }
    if title.trim() != title {
        return reject("title has leading or trailing whitespace");
    }
    if title.starts_with('.') {
        return reject("title starts with '.'");
    }
    if let Some(m) = forbidden_re().find(title) {
        return reject(&format!("title contains forbidden character {:?}", m.as_str()));
    }
    if reserved_re().is_match(title) {
        return reject("title is a reserved device name");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
