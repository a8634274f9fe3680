//! Standalone CSS template (`.css`).
//!
//! The artwork is inlined twice: as a percent-encoded data URI for the
//! default `::before` rendering, and as a mask for the color variants so
//! they can tint through `currentColor`-style background colors.

use super::inner_markup;
use crate::icon::IconMetadata;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// encodeURIComponent's unreserved set
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// Philippine flag palette
const PRIMARY: &str = "#0038a8";
const SECONDARY: &str = "#ce1126";
const ACCENT: &str = "#fcd116";

fn data_uri(inner: &str) -> String {
    let encoded = utf8_percent_encode(inner, COMPONENT).to_string();
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none'%3E{encoded}%3C/svg%3E"
    )
}

pub fn render(meta: &IconMetadata, svg: &str, class_prefix: &str) -> String {
    let inner = inner_markup(svg);
    let uri = data_uri(&inner);
    let class = format!("{class_prefix}-{}", meta.name);
    let display_name = &meta.display_name;
    let description = &meta.description;

    format!(
        r#"/* {display_name} Icon */
/* {description} */

.{class} {{
  display: inline-block;
  width: 1em;
  height: 1em;
  font-style: normal;
  line-height: 1;
  vertical-align: middle;
}}

.{class}::before {{
  content: '';
  display: inline-block;
  width: 1em;
  height: 1em;
  background-image: url("{uri}");
  background-repeat: no-repeat;
  background-size: contain;
  background-position: center;
  vertical-align: middle;
}}

/* Size variants */
.{class}.ph-icon-sm {{
  font-size: 16px;
}}

.{class}.ph-icon-md {{
  font-size: 24px;
}}

.{class}.ph-icon-lg {{
  font-size: 32px;
}}

.{class}.ph-icon-xl {{
  font-size: 48px;
}}

/* Color variants tint a masked copy of the artwork */
.{class}.ph-icon-primary::before,
.{class}.ph-icon-secondary::before,
.{class}.ph-icon-accent::before {{
  background-image: none;
  -webkit-mask-image: url("{uri}");
  mask-image: url("{uri}");
  -webkit-mask-repeat: no-repeat;
  mask-repeat: no-repeat;
  -webkit-mask-size: contain;
  mask-size: contain;
  -webkit-mask-position: center;
  mask-position: center;
}}

.{class}.ph-icon-primary::before {{
  background-color: {PRIMARY};
}}

.{class}.ph-icon-secondary::before {{
  background-color: {SECONDARY};
}}

.{class}.ph-icon-accent::before {{
  background-color: {ACCENT};
}}

/* Hover effects */
.{class}:hover {{
  opacity: 0.8;
  transition: opacity 0.2s ease;
}}

/* Focus styles for accessibility */
.{class}:focus {{
  outline: 2px solid {PRIMARY};
  outline-offset: 2px;
}}
"#
    )
}
