//! Corner tag geometry, widget state and SVG rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Inspector defaults and fixed sizes
//! - `geometry`: Corner types, directions, rotations and label placement
//! - `path_builder`: Outline paths
//! - `shapes`: One outline shape per corner type
//! - `types`: Derived layout and style
//! - `widget`: The `CornerTag` itself
//! - `svg`: SVG generation

pub mod defaults;
pub mod geometry;
pub mod path_builder;
pub mod shapes;
pub mod svg;
pub mod types;
pub mod widget;

// Re-export commonly used items
pub use geometry::{CornerType, GOLDEN_RATIO, TagDirection};
pub use path_builder::{PathCommand, TagPath};
pub use types::*;
pub use widget::CornerTag;
