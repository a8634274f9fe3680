//! Conservative SVG optimization.
//!
//! Composes the normalizer, then cleans up without re-serializing the tree:
//! ids, title/desc, comments, namespaces, and every paint/shape/gradient
//! primitive pass through untouched. The only mandatory removals are the
//! root `width`/`height` attributes (superseded by the normalized viewBox);
//! the only additions are baseline accessibility attributes and a canonical
//! root attribute order.

use super::normalize;
use crate::error::IconError;
use regex::Regex;
use std::sync::LazyLock;

static SVG_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg([^>]*)>").unwrap());
static ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*"([^"]*)""#).unwrap());
static INTER_TAG_WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Root attributes emitted first, in this order; the rest keep their
/// original relative order behind them.
const CANONICAL_ORDER: [&str; 6] = ["viewBox", "xmlns", "role", "aria-label", "class", "id"];

/// Normalize and optimize SVG text.
///
/// An empty or svg-less result is a fatal `OptimizeFailed`; callers must not
/// write any artifact in that case.
pub fn optimize(svg: &str) -> Result<String, IconError> {
    let normalized = normalize::normalize(svg)?;
    let rewritten = rewrite_root(&normalized);
    let collapsed = INTER_TAG_WS_RE
        .replace_all(&rewritten, "><")
        .trim()
        .to_string();

    if collapsed.is_empty() || !collapsed.contains("<svg") {
        return Err(IconError::OptimizeFailed);
    }
    Ok(collapsed)
}

/// Rewrite the root `<svg>` tag: drop width/height, ensure accessibility
/// attributes, apply canonical ordering.
fn rewrite_root(svg: &str) -> String {
    SVG_OPEN_RE
        .replace(svg, |caps: &regex::Captures| {
            let mut attrs: Vec<(String, String)> = ATTR_RE
                .captures_iter(&caps[1])
                .map(|c| (c[1].to_string(), c[2].to_string()))
                .collect();

            attrs.retain(|(k, _)| k != "width" && k != "height");
            if !attrs.iter().any(|(k, _)| k == "role") {
                attrs.push(("role".to_string(), "img".to_string()));
            }
            if !attrs.iter().any(|(k, _)| k == "aria-label") {
                attrs.push(("aria-label".to_string(), "icon".to_string()));
            }

            let mut ordered = Vec::with_capacity(attrs.len());
            for key in CANONICAL_ORDER {
                if let Some(pos) = attrs.iter().position(|(k, _)| k == key) {
                    ordered.push(attrs.remove(pos));
                }
            }
            ordered.extend(attrs);

            let rendered: String = ordered
                .iter()
                .map(|(k, v)| format!(" {k}=\"{v}\""))
                .collect();
            format!("<svg{rendered}>")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 48 48">
        <title>Seal</title>
        <!-- keep me -->
        <path d="M0 0h48" fill="currentColor"/>
    </svg>"#;

    #[test]
    fn test_width_height_removed() {
        let out = optimize(INPUT).unwrap();
        assert!(!out.contains("width=\"24\""));
        assert!(!out.contains("height=\"24\""));
        assert!(out.contains(r#"viewBox="0 0 24 24""#));
    }

    #[test]
    fn test_accessibility_attributes_injected() {
        let out = optimize(INPUT).unwrap();
        assert!(out.contains(r#"role="img""#));
        assert!(out.contains(r#"aria-label="icon""#));
    }

    #[test]
    fn test_existing_aria_label_preserved() {
        let svg = r#"<svg xmlns="x" viewBox="0 0 24 24" aria-label="Department Seal"><path fill="red"/></svg>"#;
        let out = optimize(svg).unwrap();
        assert!(out.contains(r#"aria-label="Department Seal""#));
        assert!(!out.contains(r#"aria-label="icon""#));
    }

    #[test]
    fn test_canonical_attribute_order() {
        let svg = r#"<svg id="seal" class="logo" xmlns="x" viewBox="0 0 24 24"><path fill="red"/></svg>"#;
        let out = optimize(svg).unwrap();
        let open_end = out.find('>').unwrap();
        let open = &out[..open_end];
        let pos = |attr: &str| open.find(attr).unwrap();
        assert!(pos("viewBox") < pos("xmlns"));
        assert!(pos("xmlns") < pos("role"));
        assert!(pos("role") < pos("aria-label"));
        assert!(pos("aria-label") < pos("class"));
        assert!(pos("class") < pos("id"));
    }

    #[test]
    fn test_comments_and_title_preserved() {
        let out = optimize(INPUT).unwrap();
        assert!(out.contains("<title>Seal</title>"));
        assert!(out.contains("<!-- keep me -->"));
    }

    #[test]
    fn test_inter_tag_whitespace_collapsed() {
        let out = optimize(INPUT).unwrap();
        assert!(!out.contains(">\n"));
        assert!(!out.contains(">    <"));
    }

    #[test]
    fn test_missing_view_box_propagates() {
        assert!(matches!(
            optimize(r#"<svg xmlns="x"><path/></svg>"#),
            Err(IconError::MissingViewBox)
        ));
    }

    #[test]
    fn test_svg_less_output_is_fatal() {
        // has a viewBox but no root <svg> tag to rewrite
        let svg = r#"<symbol viewBox="0 0 24 24"></symbol>"#;
        assert!(matches!(optimize(svg), Err(IconError::OptimizeFailed)));
    }
}
