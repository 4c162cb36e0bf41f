use crate::output::print_json;
use anyhow::Context;
use checklist_core::suggest;
use std::path::Path;

pub fn run(root: &Path, title: &str, filter: Option<&str>, json: bool) -> anyhow::Result<()> {
    let (_, checklist) = super::open(root)?;
    let choices = suggest::item_choices(&checklist, title, filter.unwrap_or(""))
        .with_context(|| format!("failed to list items in '{title}'"))?;

    if json {
        print_json(&choices)?;
    } else {
        for choice in &choices {
            println!("{}", choice.value);
        }
    }
    Ok(())
}
