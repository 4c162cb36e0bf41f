use crate::output::print_json;
use anyhow::Context;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn run(root: &Path, title: &str, yes: bool, json: bool) -> anyhow::Result<()> {
    let (_, checklist) = super::open(root)?;
    let info = checklist
        .describe(title)
        .with_context(|| format!("failed to read '{title}'"))?;

    if !yes {
        if json {
            anyhow::bail!("refusing to prompt in JSON mode; pass --yes to delete '{title}'");
        }
        super::info::print_info(&info);
        println!();
        if !confirm(&format!(
            "Delete '{title}' permanently? No backup is kept. [y/N] "
        ))? {
            println!("Cancelled; '{title}' was not deleted.");
            return Ok(());
        }
    }

    checklist
        .remove(title)
        .with_context(|| format!("failed to delete '{title}'"))?;

    if json {
        print_json(&serde_json::json!({
            "title": title,
            "deleted": true,
            "item_count": info.item_count,
        }))?;
    } else {
        println!("Deleted checklist '{title}'");
    }
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation from stdin")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
