//! SVG validation, normalization, and optimization.

pub mod normalize;
pub mod optimize;
pub mod validate;
