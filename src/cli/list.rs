//! List command - enumerate stored icons in table, JSON, or CSV form.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::args::{ListArgs, ListFormat};
use crate::config::IconsConfig;
use crate::icon::{Branch, IconStore, StoredIcon};

/// JSON output record, a stable subset of the stored metadata
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListEntry<'a> {
    name: &'a str,
    display_name: &'a str,
    acronym: &'a str,
    branch: &'a str,
    category: &'a str,
    author: &'a str,
    version: &'a str,
    created_at: &'a str,
    path: String,
}

/// Run the list command
pub fn list_icons(args: &ListArgs, config: &IconsConfig) -> Result<()> {
    let store = IconStore::new(config.icons_dir());
    let mut icons = store.scan()?;

    if let Some(category) = args.category {
        icons.retain(|i| i.metadata.category == category);
    }
    if let Some(tags) = &args.tags {
        let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
        icons.retain(|i| {
            let keywords: Vec<String> =
                i.metadata.keywords.iter().map(|k| k.to_lowercase()).collect();
            tags.iter().all(|t| keywords.iter().any(|k| k.contains(t)))
        });
    }

    match args.format {
        ListFormat::Json => print_json(&icons)?,
        ListFormat::Csv => print_csv(&icons),
        ListFormat::Table => print_table(&icons),
    }
    Ok(())
}

// =============================================================================
// Output formats
// =============================================================================

fn print_json(icons: &[StoredIcon]) -> Result<()> {
    let entries: Vec<ListEntry> = icons
        .iter()
        .map(|i| ListEntry {
            name: &i.metadata.name,
            display_name: &i.metadata.display_name,
            acronym: &i.metadata.acronym,
            branch: i.metadata.branch.as_str(),
            category: i.metadata.category.as_str(),
            author: &i.metadata.author,
            version: &i.metadata.version,
            created_at: &i.metadata.created_at,
            path: i.path.display().to_string(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn print_csv(icons: &[StoredIcon]) {
    println!("Name,Display Name,Acronym,Branch,Category,Author,Version,Created");
    for icon in icons {
        let m = &icon.metadata;
        println!(
            "{},{},{},{},{},{},{},{}",
            csv_field(&m.name),
            csv_field(&m.display_name),
            csv_field(&m.acronym),
            csv_field(m.branch.as_str()),
            csv_field(m.category.as_str()),
            csv_field(&m.author),
            csv_field(&m.version),
            csv_field(&m.created_at),
        );
    }
}

/// Quote a CSV field, doubling embedded quotes
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn print_table(icons: &[StoredIcon]) {
    if icons.is_empty() {
        println!("no icons found");
        return;
    }

    for branch in Branch::ALL {
        let in_branch: Vec<&StoredIcon> =
            icons.iter().filter(|i| i.metadata.branch == branch).collect();
        if in_branch.is_empty() {
            continue;
        }

        println!(
            "\n{} {}",
            branch.display_name().bright_blue().bold(),
            format!("({})", in_branch.len()).dimmed()
        );
        for icon in in_branch {
            let m = &icon.metadata;
            println!(
                "  {} {} {}",
                m.acronym.bright_green(),
                m.display_name,
                format!("[{}]", m.category.display_name()).dimmed()
            );
        }
    }

    println!("\n{} {} icon(s) total", "✓".bright_green().bold(), icons.len());
}
