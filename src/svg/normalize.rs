//! Canonical 24×24 viewBox normalization.
//!
//! Rescales arbitrary artwork into `viewBox="0 0 24 24"` by wrapping the
//! original content in a group carrying a `translate(...) scale(...)`
//! transform. Scaling is always uniform, so non-square inputs keep their
//! aspect ratio and are centered in the canvas.

use crate::error::IconError;
use regex::Regex;
use std::sync::LazyLock;

/// Canonical canvas edge length
pub const CANVAS: f64 = 24.0;

static VIEWBOX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"viewBox="([^"]+)""#).unwrap());
// Leading whitespace keeps these from touching e.g. `stroke-width`
static WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?P<lead>\s)width="[^"]+""#).unwrap());
static HEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?P<lead>\s)height="[^"]+""#).unwrap());
static SVG_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg([^>]*)>").unwrap());

/// The uniform transform placing artwork in the canonical canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Extract the raw viewBox attribute value, if present
pub fn extract_view_box(svg: &str) -> Option<&str> {
    VIEWBOX_RE
        .captures(svg)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Parse a viewBox into `[x, y, width, height]`
pub fn parse_view_box(raw: &str) -> Result<[f64; 4], IconError> {
    let parts: Vec<f64> = raw
        .split_whitespace()
        .map(|p| p.parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| IconError::MalformedViewBox(raw.to_string()))?;
    parts
        .try_into()
        .map_err(|_| IconError::MalformedViewBox(raw.to_string()))
}

/// Compute the uniform, centering transform for artwork of the given size.
///
/// `scale = min(24/w, 24/h)` - aspect-preserving, never stretched.
pub fn transform_for(width: f64, height: f64) -> NormalizeTransform {
    let scale = (CANVAS / width).min(CANVAS / height);
    NormalizeTransform {
        scale,
        offset_x: (CANVAS - width * scale) / 2.0,
        offset_y: (CANVAS - height * scale) / 2.0,
    }
}

/// Rewrite `svg` into the canonical 24×24 coordinate space.
///
/// Fails with `MissingViewBox` when the input has no viewBox attribute;
/// callers are expected to have validated first.
pub fn normalize(svg: &str) -> Result<String, IconError> {
    let raw = extract_view_box(svg).ok_or(IconError::MissingViewBox)?;
    let [_, _, width, height] = parse_view_box(raw)?;
    // a zero-area viewBox has no finite scale
    if width <= 0.0 || height <= 0.0 {
        return Err(IconError::MalformedViewBox(raw.to_string()));
    }
    let t = transform_for(width, height);

    // Attribute rewrites are scoped to the root tag so nothing inside the
    // artwork (nested widths, symbol viewBoxes) is touched.
    let wrapped = SVG_OPEN_RE.replace(svg, |caps: &regex::Captures| {
        let attrs = VIEWBOX_RE
            .replace(&caps[1], r#"viewBox="0 0 24 24""#)
            .into_owned();
        let attrs = WIDTH_RE.replace(&attrs, r#"${lead}width="24""#).into_owned();
        let attrs = HEIGHT_RE
            .replace(&attrs, r#"${lead}height="24""#)
            .into_owned();
        format!(
            r#"<svg{attrs}><g transform="translate({}, {}) scale({})">"#,
            t.offset_x, t.offset_y, t.scale
        )
    });
    Ok(wrapped.replacen("</svg>", "</g></svg>", 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_on_canonical_input() {
        let t = transform_for(24.0, 24.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.offset_x, 0.0);
        assert_eq!(t.offset_y, 0.0);
    }

    #[test]
    fn test_aspect_preserved_for_wide_input() {
        let t = transform_for(48.0, 24.0);
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.offset_x, 0.0);
        assert_eq!(t.offset_y, 6.0);
    }

    #[test]
    fn test_tall_input_centered_horizontally() {
        let t = transform_for(24.0, 48.0);
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.offset_x, 6.0);
        assert_eq!(t.offset_y, 0.0);
    }

    #[test]
    fn test_normalize_rewrites_attributes_and_wraps() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 24" width="48" height="24"><path d="M0 0h48"/></svg>"#;
        let out = normalize(svg).unwrap();
        assert!(out.contains(r#"viewBox="0 0 24 24""#));
        assert!(out.contains(r#"width="24""#));
        assert!(out.contains(r#"height="24""#));
        assert!(out.contains(r#"<g transform="translate(0, 6) scale(0.5)">"#));
        assert!(out.ends_with("</g></svg>"));
    }

    #[test]
    fn test_normalize_without_dimension_attributes() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle r="12"/></svg>"#;
        let out = normalize(svg).unwrap();
        assert!(out.contains(r#"<g transform="translate(0, 0) scale(1)">"#));
    }

    #[test]
    fn test_missing_view_box_is_fatal() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#;
        assert!(matches!(normalize(svg), Err(IconError::MissingViewBox)));
    }

    #[test]
    fn test_zero_area_view_box_rejected() {
        let svg = r#"<svg xmlns="x" viewBox="0 0 0 0"><path d="M0 0"/></svg>"#;
        assert!(matches!(
            normalize(svg),
            Err(IconError::MalformedViewBox(_))
        ));

        let svg = r#"<svg xmlns="x" viewBox="0 0 -24 24"><path d="M0 0"/></svg>"#;
        assert!(matches!(
            normalize(svg),
            Err(IconError::MalformedViewBox(_))
        ));
    }

    #[test]
    fn test_malformed_view_box() {
        assert!(matches!(
            parse_view_box("0 0 24"),
            Err(IconError::MalformedViewBox(_))
        ));
        assert!(matches!(
            parse_view_box("0 0 24 abc"),
            Err(IconError::MalformedViewBox(_))
        ));
        assert_eq!(parse_view_box("0 0 48 24").unwrap(), [0.0, 0.0, 48.0, 24.0]);
    }
}
