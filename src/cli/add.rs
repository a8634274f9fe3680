//! Add command - validate, optimize, and persist a new icon.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

use crate::cli::args::AddArgs;
use crate::config::IconsConfig;
use crate::error::IconError;
use crate::generate;
use crate::icon::{IconDraft, IconStore};
use crate::log;
use crate::svg;

/// Run the add command
pub fn add_icon(svg_path: &Path, args: &AddArgs, config: &IconsConfig) -> Result<()> {
    let draft = IconDraft {
        agency_name: args.agency.clone(),
        official_name: args
            .official_name
            .clone()
            .unwrap_or_else(|| args.agency.clone()),
        acronym: args.acronym.clone(),
        branch: args.branch,
        category: args.category,
        description: args.description.clone(),
        keywords: args.keywords.clone(),
        official_website: args.official_website.clone(),
        author: args.author.clone().unwrap_or_else(|| config.author.clone()),
        license: config.license.clone(),
        is_official: args.official.unwrap_or(true),
        has_permission: args.permission.unwrap_or(false),
    };

    run_pipeline(svg_path, draft, args.dry_run, config)
}

// =============================================================================
// Shared pipeline (add + process)
// =============================================================================

/// Validate, optimize, persist, and generate artifacts for one icon
pub(crate) fn run_pipeline(
    svg_path: &Path,
    draft: IconDraft,
    dry_run: bool,
    config: &IconsConfig,
) -> Result<()> {
    if !svg_path.exists() {
        return Err(IconError::InputNotFound(svg_path.to_path_buf()).into());
    }
    let raw = fs::read_to_string(svg_path)
        .with_context(|| format!("failed to read `{}`", svg_path.display()))?;

    let report = svg::validate::validate(&raw);
    for warning in &report.warnings {
        log!("warn"; "{warning}");
    }
    if !report.is_valid() {
        return Err(IconError::InvalidSvg(report.errors).into());
    }
    log!("add"; "SVG validated");

    let meta = draft.into_metadata()?;

    if meta.is_official && !meta.has_permission {
        log!("warn"; "official government logos require usage permission, pass --permission once confirmed");
    }

    print_preview(&meta);

    if dry_run {
        log!("add"; "dry run, nothing written");
        return Ok(());
    }

    let optimized = svg::optimize::optimize(&raw)?;
    log!("add"; "SVG optimized");

    let store = IconStore::new(config.icons_dir());
    if store.contains(&meta.name)? {
        log!("warn"; "icon `{}` already exists, regenerating its artifacts", meta.name);
    }

    let written = generate::write_icon(&config.root, &meta, &optimized, &config.class_prefix, true)
        .with_context(|| format!("failed to write artifacts for `{}`", meta.name))?;

    println!("\n{} icon `{}` added", "✓".bright_green().bold(), meta.name);
    println!("{}", "files written:".bright_blue());
    for path in &written {
        println!("  {}", path.display().to_string().dimmed());
    }

    println!("\n{}", "usage:".bright_blue());
    println!(
        "  React: {}",
        format!("import {{ {}Logo }} from '@bettergov/icons-react';", meta.acronym).dimmed()
    );
    println!(
        "  Vue:   {}",
        format!("import {{ {}Logo }} from '@bettergov/icons-vue';", meta.acronym).dimmed()
    );
    println!(
        "  CSS:   {}",
        format!(
            "<i class=\"{}-{} ph-icon-lg\"></i>",
            config.class_prefix, meta.name
        )
        .dimmed()
    );
    println!(
        "  open {} to preview the icon",
        format!("test-{}.html", meta.name).dimmed()
    );

    Ok(())
}

/// Print the metadata that is about to be persisted
fn print_preview(meta: &crate::icon::IconMetadata) {
    println!("\n{}", "icon preview:".bright_blue());
    println!("  {} {}", "name:".dimmed(), meta.name);
    println!("  {} {}", "display name:".dimmed(), meta.display_name);
    println!("  {} {}", "official name:".dimmed(), meta.official_name);
    println!("  {} {}", "acronym:".dimmed(), meta.acronym);
    println!("  {} {}", "branch:".dimmed(), meta.branch);
    println!("  {} {}", "category:".dimmed(), meta.category);
    println!("  {} {}", "description:".dimmed(), meta.description);
}
