//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the icon pipeline
#[derive(Debug, Error)]
pub enum IconError {
    #[error("SVG file not found: `{0}`")]
    InputNotFound(PathBuf),

    #[error("invalid SVG: {}", .0.join(", "))]
    InvalidSvg(Vec<String>),

    #[error("SVG must have a viewBox attribute")]
    MissingViewBox,

    #[error("malformed viewBox `{0}`: expected 4 numeric values (x, y, width, height)")]
    MalformedViewBox(String),

    #[error("SVG optimization produced no output")]
    OptimizeFailed,

    #[error("`{}` matches multiple icons: {}", .0, .1.join(", "))]
    AmbiguousMatch(String, Vec<String>),

    #[error("category `{category}` is not legal for branch `{branch}`")]
    IllegalCategory { branch: String, category: String },

    #[error("invalid URL: `{0}`")]
    InvalidUrl(String),

    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}
