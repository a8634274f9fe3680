//! Per-target source templates.
//!
//! Every component template embeds the optimized SVG's inner markup inside
//! its own `<svg viewBox="0 0 24 24">` shell, so size and color become
//! framework props instead of baked-in attributes.

pub mod angular;
pub mod css;
pub mod preview;
pub mod react;
pub mod vue;
pub mod web_component;

use regex::Regex;
use std::sync::LazyLock;

static SVG_SHELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg[^>]*>|</svg>").unwrap());

/// Strip the outer `<svg ...>` / `</svg>` shell, keeping the artwork
pub fn inner_markup(svg: &str) -> String {
    SVG_SHELL_RE.replace_all(svg, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_markup_strips_shell() {
        let svg = r#"<svg xmlns="x" viewBox="0 0 24 24"> <g><path d="M0 0"/></g> </svg>"#;
        assert_eq!(inner_markup(svg), r#"<g><path d="M0 0"/></g>"#);
    }

    #[test]
    fn test_inner_markup_keeps_nested_elements() {
        let svg = r#"<svg viewBox="0 0 24 24"><title>Seal</title><circle r="12"/></svg>"#;
        assert_eq!(inner_markup(svg), "<title>Seal</title><circle r=\"12\"/>");
    }
}
