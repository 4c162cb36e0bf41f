use crate::output::{group_thousands, print_json};
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path, title: &str, file: &Path, json: bool) -> anyhow::Result<()> {
    let (_, checklist) = super::open(root)?;
    let raw = std::fs::read(file)
        .with_context(|| format!("failed to read material list '{}'", file.display()))?;

    let result = checklist
        .ingest(title, &raw)
        .with_context(|| format!("failed to import '{}' as '{title}'", file.display()))?;

    if json {
        print_json(&result)?;
    } else {
        let verb = if result.replaced { "Replaced" } else { "Added" };
        println!("{verb} checklist '{title}'");
        println!("  source:    {} (read as {})", file.display(), result.encoding);
        println!("  items:     {}", result.item_count);
        println!("  total:     {}", group_thousands(result.total_quantity));
    }
    Ok(())
}
