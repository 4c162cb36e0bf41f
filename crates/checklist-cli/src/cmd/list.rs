use crate::output::{check_mark, group_thousands, print_json, print_table};
use anyhow::Context;
use checklist_core::page::Page;
use checklist_core::suggest;
use checklist_core::types::StatusFilter;
use std::path::Path;

pub fn run(
    root: &Path,
    title: &str,
    check: &str,
    page: usize,
    page_size: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let filter = check
        .parse::<StatusFilter>()
        .map_err(|e| super::with_suggestions(e, suggest::filter_choices(check)))?;
    let (cfg, checklist) = super::open(root)?;
    let items = checklist
        .list_items(title, filter)
        .with_context(|| format!("failed to list '{title}'"))?;

    let page = Page::of(
        &items,
        page_size.unwrap_or(cfg.page_size),
        page.saturating_sub(1),
    );

    if json {
        let rows: Vec<serde_json::Value> = page
            .numbered()
            .map(|(n, item)| {
                serde_json::json!({
                    "number": n,
                    "name": item.name,
                    "required_quantity": item.required_quantity,
                    "completed": item.completed,
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "title": title,
            "filter": filter,
            "page": page.index + 1,
            "total_pages": page.total_pages,
            "total_items": page.total_items,
            "has_prev": page.has_prev(),
            "has_next": page.has_next(),
            "subtotal": page.subtotal,
            "grand_total": page.grand_total,
            "items": rows,
        }))?;
        return Ok(());
    }

    let label = filter.as_str();
    if page.total_items == 0 {
        println!("{title}: no {label} items");
        return Ok(());
    }

    println!(
        "{title} - {label} items: {} (page {}/{})",
        page.total_items,
        page.index + 1,
        page.total_pages
    );
    let rows = page
        .numbered()
        .map(|(n, item)| {
            let quantity = if item.required_quantity.is_numeric() {
                group_thousands(item.required_quantity.value())
            } else {
                item.required_quantity.to_string()
            };
            vec![
                n.to_string(),
                check_mark(item.completed).to_string(),
                item.name.clone(),
                quantity,
            ]
        })
        .collect();
    print_table(&["#", "Done", "Item", "Qty"], rows);
    println!();
    println!("Page total:  {}", group_thousands(page.subtotal));
    println!("Grand total: {}", group_thousands(page.grand_total));
    if page.has_next() {
        println!("(next: --page {})", page.index + 2);
    }
    Ok(())
}
