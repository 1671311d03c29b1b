//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use cloudconnexa::Page;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a normalized page: one item per line, pagination on stderr.
pub fn page<T: Serialize>(page: &Page<T>, pretty: bool) -> Result<()> {
    if page.data.is_empty() {
        eprintln!("{}", "No results.".dimmed());
        return Ok(());
    }

    for item in &page.data {
        if pretty {
            json_pretty(item)?;
        } else {
            json(item)?;
        }
    }

    let p = &page.pagination;
    eprintln!(
        "{}: page {} ({} of {} total{})",
        "Pagination".dimmed(),
        p.page,
        page.data.len(),
        p.total,
        if p.has_more { ", more available" } else { "" }
    );
    Ok(())
}
