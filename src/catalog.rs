//! Website catalog builder.
//!
//! Emits `docs/icons.json` (flat list plus statistics for the website
//! search) and `docs/gallery-data.json` (the same statistics with icons
//! grouped by branch and their SVG markup inlined for the gallery).

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;

use crate::config::IconsConfig;
use crate::icon::{IconStore, StoredIcon};
use crate::log;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry<'a> {
    name: &'a str,
    display_name: &'a str,
    acronym: &'a str,
    branch: &'a str,
    category: &'a str,
    description: &'a str,
    keywords: &'a [String],
    author: &'a str,
    version: &'a str,
    created_at: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    official_website: Option<&'a str>,
    has_permission: bool,
    is_official: bool,
    /// Inline SVG markup, gallery output only
    #[serde(skip_serializing_if = "Option::is_none")]
    svg: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogStats {
    total: usize,
    by_branch: BTreeMap<String, usize>,
    by_category: BTreeMap<String, usize>,
    latest_update: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WebsiteData<'a> {
    icons: Vec<CatalogEntry<'a>>,
    stats: CatalogStats,
    generated_at: String,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GalleryData<'a> {
    icons: Vec<CatalogEntry<'a>>,
    stats: CatalogStats,
    grouped_icons: BTreeMap<String, Vec<CatalogEntry<'a>>>,
    generated_at: String,
    version: &'static str,
}

/// Run the catalog command
pub fn build_catalog(config: &IconsConfig) -> Result<()> {
    let store = IconStore::new(config.icons_dir());
    let icons = store.scan()?;

    let docs_dir = config.docs_dir();
    fs::create_dir_all(&docs_dir)
        .with_context(|| format!("failed to create `{}`", docs_dir.display()))?;

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let stats = compute_stats(&icons, &now);

    // icons.json: flat list, no markup
    let website = WebsiteData {
        icons: icons.iter().map(|i| entry(i, None)).collect(),
        stats: compute_stats(&icons, &now),
        generated_at: now.clone(),
        version: "1.0.0",
    };
    let icons_path = docs_dir.join("icons.json");
    fs::write(&icons_path, serde_json::to_string_pretty(&website)?)
        .with_context(|| format!("failed to write `{}`", icons_path.display()))?;
    log!("catalog"; "wrote {}", icons_path.display());

    // gallery-data.json: branch-grouped, with SVG markup inlined
    let mut grouped: BTreeMap<String, Vec<CatalogEntry>> = BTreeMap::new();
    let mut gallery_entries = Vec::with_capacity(icons.len());
    for icon in &icons {
        let svg = match store.read_svg(icon) {
            Ok(svg) => Some(svg),
            Err(e) => {
                log!("warn"; "no SVG for `{}`: {e}", icon.metadata.name);
                None
            }
        };
        gallery_entries.push(entry(icon, svg.clone()));
        grouped
            .entry(icon.metadata.branch.as_str().to_string())
            .or_default()
            .push(entry(icon, svg));
    }
    let gallery = GalleryData {
        icons: gallery_entries,
        stats,
        grouped_icons: grouped,
        generated_at: now,
        version: "1.0.0",
    };
    let gallery_path = docs_dir.join("gallery-data.json");
    fs::write(&gallery_path, serde_json::to_string_pretty(&gallery)?)
        .with_context(|| format!("failed to write `{}`", gallery_path.display()))?;
    log!("catalog"; "wrote {}", gallery_path.display());

    log!("catalog"; "{} icon(s) cataloged", icons.len());
    Ok(())
}

fn entry<'a>(icon: &'a StoredIcon, svg: Option<String>) -> CatalogEntry<'a> {
    let m = &icon.metadata;
    CatalogEntry {
        name: &m.name,
        display_name: &m.display_name,
        acronym: &m.acronym,
        branch: m.branch.as_str(),
        category: m.category.as_str(),
        description: &m.description,
        keywords: &m.keywords,
        author: &m.author,
        version: &m.version,
        created_at: &m.created_at,
        official_website: m.official_website.as_deref(),
        has_permission: m.has_permission,
        is_official: m.is_official,
        svg,
    }
}

fn compute_stats(icons: &[StoredIcon], now: &str) -> CatalogStats {
    let mut by_branch = BTreeMap::new();
    let mut by_category = BTreeMap::new();
    for icon in icons {
        *by_branch
            .entry(icon.metadata.branch.as_str().to_string())
            .or_insert(0) += 1;
        *by_category
            .entry(icon.metadata.category.as_str().to_string())
            .or_insert(0) += 1;
    }
    CatalogStats {
        total: icons.len(),
        by_branch,
        by_category,
        latest_update: now.to_string(),
    }
}
