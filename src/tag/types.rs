//! Derived layout and style of a corner tag

use crate::types::{Angle, Color, Length, Point, Size};

use super::path_builder::TagPath;

/// Frame of the rotated label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub center: Point<Length>,
    pub size: Size<Length>,
    pub rotation: Angle,
}

/// Geometry derived from bounds, direction and corner type
#[derive(Debug, Clone, PartialEq)]
pub struct TagLayout {
    /// Outline drawn for the top-left corner
    pub path: TagPath,
    /// Rotation of the shape layer about the bounds center
    pub shape_rotation: Angle,
    pub label: LabelPlacement,
}

/// How the shape layer and label are painted
#[derive(Debug, Clone, PartialEq)]
pub struct TagStyle {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: Length,
    pub text_color: Color,
    pub text: String,
}
