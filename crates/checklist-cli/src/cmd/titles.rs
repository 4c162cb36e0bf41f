use crate::output::print_json;
use anyhow::Context;
use checklist_core::suggest;
use std::path::Path;

pub fn run(root: &Path, filter: Option<&str>, json: bool) -> anyhow::Result<()> {
    let (_, checklist) = super::open(root)?;
    let choices = suggest::title_choices(&checklist, filter.unwrap_or(""))
        .context("failed to list checklists")?;

    if json {
        print_json(&choices)?;
    } else if choices.is_empty() {
        println!("No checklists found.");
    } else {
        for choice in &choices {
            println!("{}", choice.value);
        }
    }
    Ok(())
}
