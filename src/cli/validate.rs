//! Validate command - check an SVG against the icon standards.

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

use crate::error::IconError;

/// Run the validate command
pub fn validate_icon(svg_path: &Path, verbose: bool) -> Result<()> {
    if !svg_path.exists() {
        return Err(IconError::InputNotFound(svg_path.to_path_buf()).into());
    }
    let raw = fs::read_to_string(svg_path)
        .with_context(|| format!("failed to read `{}`", svg_path.display()))?;

    let report = crate::svg::validate::validate(&raw);

    if report.is_valid() {
        println!(
            "{} {} is a valid icon",
            "✓".bright_green().bold(),
            svg_path.display()
        );
    } else {
        println!(
            "{} {} failed validation",
            "✗".bright_red().bold(),
            svg_path.display()
        );
        for error in &report.errors {
            println!("  {} {error}", "error:".bright_red());
        }
    }

    for warning in &report.warnings {
        println!("  {} {warning}", "warning:".bright_yellow());
    }

    if verbose {
        println!("\n{}", "details:".bright_blue());
        println!(
            "  {} {}",
            "viewBox:".dimmed(),
            report.view_box.as_deref().unwrap_or("(none)")
        );
        if let (Some(w), Some(h)) = (report.width, report.height) {
            println!("  {} {w}x{h}", "dimensions:".dimmed());
        }
        if let Some(sw) = report.stroke_width {
            println!("  {} {sw}", "stroke width:".dimmed());
        }
    }

    if !report.is_valid() {
        bail!("`{}` is not a valid icon", svg_path.display());
    }
    Ok(())
}
