pub mod add;
pub mod check;
pub mod config;
pub mod delete;
pub mod info;
pub mod items;
pub mod list;
pub mod titles;

use anyhow::Context;
use checklist_core::suggest::Choice;
use checklist_core::{config::Config, Checklist, ChecklistError};
use std::path::Path;

/// Load config (defaults if absent) and open the checklist service on it.
pub fn open(root: &Path) -> anyhow::Result<(Config, Checklist)> {
    let cfg = Config::load_or_default(root).context("failed to load config")?;
    let checklist = Checklist::open(root, &cfg);
    Ok((cfg, checklist))
}

/// Append close matches to a rejected `--check` filter or status argument.
pub fn with_suggestions(err: ChecklistError, choices: Vec<Choice>) -> anyhow::Error {
    if choices.is_empty() {
        return err.into();
    }
    let values: Vec<String> = choices.into_iter().map(|c| c.value).collect();
    anyhow::anyhow!("{err} (did you mean: {}?)", values.join(", "))
}
