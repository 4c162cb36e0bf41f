use crate::output::{group_thousands, print_json};
use anyhow::Context;
use checklist_core::service::LedgerInfo;
use std::path::Path;

pub fn run(root: &Path, title: &str, json: bool) -> anyhow::Result<()> {
    let (_, checklist) = super::open(root)?;
    let info = checklist
        .describe(title)
        .with_context(|| format!("failed to read '{title}'"))?;

    if json {
        print_json(&info)?;
    } else {
        print_info(&info);
    }
    Ok(())
}

pub fn print_info(info: &LedgerInfo) {
    println!("{}", info.title);
    println!(
        "  items:     {} ({} done)",
        info.item_count, info.finished_count
    );
    println!("  total:     {}", group_thousands(info.total_quantity));
    println!("  size:      {} bytes", group_thousands(info.size_bytes));
    if let Some(modified) = info.modified {
        println!("  modified:  {}", modified.format("%Y-%m-%d %H:%M:%S UTC"));
    }
}
