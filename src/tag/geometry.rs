//! Geometry functions: outline paths, direction transforms and label placement
//!
//! Everything here is a pure function of the bounds and the enum selection.
//! Coordinates are Y-down with the origin at the top-left of the widget, and
//! positive angles turn clockwise on screen.

use std::fmt;
use std::str::FromStr;

use glam::{DAffine2, DVec2};

use crate::errors::ConfigError;
use crate::types::{Angle, Bounds, Length, Point, Size};

use super::defaults;
use super::path_builder::TagPath;
use super::shapes::{Outline, OutlineShape};
use super::types::LabelPlacement;

/// Proportion used for the trapezoid's cut and the label offset
pub const GOLDEN_RATIO: f64 = 0.618;

/// Distance of the label center from the corner along one axis
fn label_offset(dimension: Length) -> Length {
    dimension * (1.0 - GOLDEN_RATIO / 2.0) / 2.0
}

/// Lowercased with `-`, `_` and spaces removed, so `top-left` == `TopLeft`
fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Corner Type
// ============================================================================

/// Outline of the tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CornerType {
    #[default]
    Triangle,
    Trapezoid,
}

impl CornerType {
    pub const ALL: [CornerType; 2] = [CornerType::Triangle, CornerType::Trapezoid];

    /// Raw value used by integer-typed host attributes
    pub fn raw(self) -> i64 {
        match self {
            CornerType::Triangle => 0,
            CornerType::Trapezoid => 1,
        }
    }

    /// Convert a raw value, falling back to `Triangle` when out of range
    pub fn from_raw_or_default(raw: i64) -> CornerType {
        CornerType::try_from(raw)
            .inspect_err(|_err| {
                crate::log::warn!(error = %_err, "falling back to triangle corner");
            })
            .unwrap_or_default()
    }

    /// Closed outline of this corner type inside `bounds`, drawn for the
    /// top-left corner.
    pub fn shape_path(self, bounds: &Bounds) -> TagPath {
        Outline::from(self).outline(bounds)
    }

    /// Axis-aligned run of the interior edge, if the outline has one
    pub fn short_edge(self, bounds: &Bounds) -> Option<Size<Length>> {
        Outline::from(self).short_edge(bounds)
    }
}

impl TryFrom<i64> for CornerType {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CornerType::Triangle),
            1 => Ok(CornerType::Trapezoid),
            _ => Err(ConfigError::InvalidCornerType { value }),
        }
    }
}

impl FromStr for CornerType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "triangle" => Ok(CornerType::Triangle),
            "trapezoid" | "trapezium" => Ok(CornerType::Trapezoid),
            _ => Err(ConfigError::UnknownCornerType { name: s.to_string() }),
        }
    }
}

impl fmt::Display for CornerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CornerType::Triangle => write!(f, "triangle"),
            CornerType::Trapezoid => write!(f, "trapezoid"),
        }
    }
}

// ============================================================================
// Tag Direction
// ============================================================================

/// Corner the tag is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagDirection {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl TagDirection {
    pub const ALL: [TagDirection; 4] = [
        TagDirection::TopLeft,
        TagDirection::TopRight,
        TagDirection::BottomLeft,
        TagDirection::BottomRight,
    ];

    pub fn raw(self) -> i64 {
        match self {
            TagDirection::TopLeft => 0,
            TagDirection::TopRight => 1,
            TagDirection::BottomLeft => 2,
            TagDirection::BottomRight => 3,
        }
    }

    /// Convert a raw value, falling back to `TopLeft` when out of range
    pub fn from_raw_or_default(raw: i64) -> TagDirection {
        TagDirection::try_from(raw)
            .inspect_err(|_err| {
                crate::log::warn!(error = %_err, "falling back to top-left direction");
            })
            .unwrap_or_default()
    }

    /// Rotation of the shape layer that carries the top-left outline to
    /// this corner.
    pub fn shape_rotation(self) -> Angle {
        match self {
            TagDirection::TopLeft => Angle::ZERO,
            TagDirection::TopRight => Angle::QUARTER_TURN,
            TagDirection::BottomLeft => -Angle::QUARTER_TURN,
            TagDirection::BottomRight => Angle::HALF_TURN,
        }
    }

    /// Shape rotation as an affine transform about the bounds center
    pub fn shape_transform(self, bounds: &Bounds) -> DAffine2 {
        let c: DVec2 = bounds.center().to_dvec2();
        DAffine2::from_translation(c)
            * DAffine2::from_angle(self.shape_rotation().radians())
            * DAffine2::from_translation(-c)
    }

    /// Label center, offset from the corner along both axes
    pub fn label_center(self, bounds: &Bounds) -> Point<Length> {
        let (w, h) = (bounds.width(), bounds.height());
        let (ax, ay) = (label_offset(w), label_offset(h));
        match self {
            TagDirection::TopLeft => Point::new(ax, ay),
            TagDirection::TopRight => Point::new(w - ax, ay),
            TagDirection::BottomLeft => Point::new(ax, h - ay),
            TagDirection::BottomRight => Point::new(w - ax, h - ay),
        }
    }

    /// Label rotation; the text runs parallel to the outline's diagonal
    pub fn label_rotation(self) -> Angle {
        match self {
            TagDirection::TopLeft | TagDirection::BottomRight => -Angle::EIGHTH_TURN,
            TagDirection::TopRight | TagDirection::BottomLeft => Angle::EIGHTH_TURN,
        }
    }

    /// Full label frame: center, size and rotation
    pub fn label_placement(self, bounds: &Bounds) -> LabelPlacement {
        LabelPlacement {
            center: self.label_center(bounds),
            size: Size::new(bounds.width(), defaults::LABEL_HEIGHT),
            rotation: self.label_rotation(),
        }
    }

    /// Direction reached by a half turn around the bounds center
    pub fn opposite(self) -> TagDirection {
        match self {
            TagDirection::TopLeft => TagDirection::BottomRight,
            TagDirection::TopRight => TagDirection::BottomLeft,
            TagDirection::BottomLeft => TagDirection::TopRight,
            TagDirection::BottomRight => TagDirection::TopLeft,
        }
    }
}

impl TryFrom<i64> for TagDirection {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TagDirection::TopLeft),
            1 => Ok(TagDirection::TopRight),
            2 => Ok(TagDirection::BottomLeft),
            3 => Ok(TagDirection::BottomRight),
            _ => Err(ConfigError::InvalidTagDirection { value }),
        }
    }
}

impl FromStr for TagDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "topleft" => Ok(TagDirection::TopLeft),
            "topright" => Ok(TagDirection::TopRight),
            "bottomleft" => Ok(TagDirection::BottomLeft),
            "bottomright" => Ok(TagDirection::BottomRight),
            _ => Err(ConfigError::UnknownTagDirection { name: s.to_string() }),
        }
    }
}

impl fmt::Display for TagDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagDirection::TopLeft => write!(f, "top-left"),
            TagDirection::TopRight => write!(f, "top-right"),
            TagDirection::BottomLeft => write!(f, "bottom-left"),
            TagDirection::BottomRight => write!(f, "bottom-right"),
        }
    }
}
