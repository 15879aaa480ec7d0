//! Triangular and trapezoidal corner tags.
//!
//! A corner tag is a decorative overlay anchored to one corner of a view,
//! with a label rotated to run along the tag's diagonal. This crate computes
//! the tag's outline, the rotation that carries it to its corner, and the
//! label frame, and can render the result as SVG.
//!
//! ```
//! let svg = cornertag::render_svg("tagDirection = top-right; cornerType = trapezoid").unwrap();
//! assert!(svg.contains("rotate(90 50 50)"));
//! ```

use pest_derive::Parser;

pub mod ast;
pub mod config;
pub mod errors;
pub mod log;
pub mod parse;
pub mod tag;
pub mod types;

pub use config::TagConfig;
pub use errors::{AttributeError, ConfigError};
pub use tag::{CornerTag, CornerType, TagDirection};

#[derive(Parser)]
#[grammar = "cornertag.pest"]
pub struct AttributeParser;

/// Name used for attribute sources in diagnostics
const SOURCE_NAME: &str = "<attributes>";

/// Build a corner tag from an attribute list.
///
/// Returns the widget on success, or an error with diagnostics.
pub fn corner_tag(source: &str) -> Result<CornerTag, miette::Report> {
    corner_tag_named(SOURCE_NAME, source)
}

/// Like [`corner_tag`], with a source name (usually a file name) for
/// diagnostics.
pub fn corner_tag_named(name: &str, source: &str) -> Result<CornerTag, miette::Report> {
    let ctx = errors::SourceContext::new(name, source);
    let list = parse::parse(&ctx)?;
    let attrs = config::apply_attributes(&list, &ctx)?;
    let bounds = attrs.bounds()?;
    Ok(CornerTag::with_config(bounds, attrs.config))
}

/// Render an attribute list to SVG.
pub fn render_svg(source: &str) -> Result<String, miette::Report> {
    let tag = corner_tag(source)?;
    Ok(tag::svg::render(&tag))
}
