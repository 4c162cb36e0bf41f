use crate::output::{group_thousands, print_json};
use anyhow::Context;
use checklist_core::suggest;
use checklist_core::types::CheckStatus;
use std::path::Path;

pub fn run(root: &Path, title: &str, item: &str, status: &str, json: bool) -> anyhow::Result<()> {
    let status = status
        .parse::<CheckStatus>()
        .map_err(|e| super::with_suggestions(e, suggest::status_choices(status)))?;
    let (_, checklist) = super::open(root)?;
    let result = checklist
        .set_status(title, item, status)
        .with_context(|| format!("failed to update '{item}' in '{title}'"))?;

    if json {
        print_json(&result)?;
        return Ok(());
    }

    println!(
        "{title}: '{item}' {} -> {}",
        result.previous_status, result.new_status
    );
    if result.required_quantity.is_numeric() {
        println!(
            "  required: {}",
            group_thousands(result.required_quantity.value())
        );
    }
    Ok(())
}
