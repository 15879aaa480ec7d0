//! Strongly-typed numeric primitives for cornertag (zero-cost newtypes).
//!
//! - No raw `f64` in widget geometry
//! - Bounds are validated once, at construction
//! - Angles carry their unit in the type

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::errors::ConfigError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in points (the host framework's logical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length (const-friendly, unchecked).
    /// Use `try_non_negative` for user-provided values.
    #[inline]
    pub const fn points(val: f64) -> Length {
        Length(val)
    }

    /// Create a non-negative Length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Length(val))
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}
impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length { Length(-self.0) }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

/// Angle in radians. Positive angles turn clockwise on a Y-down canvas.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const QUARTER_TURN: Angle = Angle(std::f64::consts::FRAC_PI_2);
    pub const HALF_TURN: Angle = Angle(std::f64::consts::PI);
    pub const EIGHTH_TURN: Angle = Angle(std::f64::consts::FRAC_PI_4);

    #[inline]
    pub fn from_degrees(deg: f64) -> Angle {
        Angle(deg.to_radians())
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle { Angle(-self.0) }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self { Point { x, y } }
}

impl Point<Length> {
    pub fn to_dvec2(self) -> glam::DVec2 {
        glam::dvec2(self.x.0, self.y.0)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> Length {
        Length(self.to_dvec2().distance(other.to_dvec2()))
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self { Size { w, h } }
}

/// The widget's own bounds: a rectangle anchored at the origin.
///
/// Width and height are finite and non-negative by construction.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    size: Size<Length>,
}

impl Bounds {
    /// Create bounds with validation (rejects NaN, infinite, negative)
    pub fn try_new(width: f64, height: f64) -> Result<Bounds, NumericError> {
        let w = Length::try_non_negative(width)?;
        let h = Length::try_non_negative(height)?;
        Ok(Bounds { size: Size { w, h } })
    }

    /// Square bounds, unchecked. Use `try_new` for user-provided values.
    pub(crate) const fn square(side: f64) -> Bounds {
        Bounds { size: Size { w: Length(side), h: Length(side) } }
    }

    pub fn width(&self) -> Length { self.size.w }

    pub fn height(&self) -> Length { self.size.h }

    pub fn size(&self) -> Size<Length> { self.size }

    pub fn center(&self) -> Point<Length> {
        Point { x: self.size.w / 2.0, y: self.size.h / 2.0 }
    }

    /// Same bounds with width and height exchanged
    pub fn transposed(&self) -> Bounds {
        Bounds { size: Size { w: self.size.h, h: self.size.w } }
    }
}

/// RGBA color, 8 bits per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// CSS/SVG form: `rgb(r,g,b)`, `rgba(r,g,b,a)` or `none`
    pub fn to_css(&self) -> String {
        if self.is_transparent() {
            return "none".to_string();
        }
        match self.a {
            255 => format!("rgb({},{},{})", self.r, self.g, self.b),
            a => format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, a as f64 / 255.0),
        }
    }

    fn named(name: &str) -> Option<Color> {
        let c = match name {
            "black" => Color::rgb(0, 0, 0),
            "white" => Color::rgb(255, 255, 255),
            "red" => Color::RED,
            "green" => Color::rgb(0, 128, 0),
            "blue" => Color::rgb(0, 0, 255),
            "yellow" => Color::rgb(255, 255, 0),
            "cyan" => Color::rgb(0, 255, 255),
            "magenta" => Color::rgb(255, 0, 255),
            "orange" => Color::rgb(255, 165, 0),
            "purple" => Color::rgb(128, 0, 128),
            "brown" => Color::rgb(165, 42, 42),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
            "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
            "clear" | "none" | "transparent" => Color::CLEAR,
            _ => return None,
        };
        Some(c)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Accepts named colors and `#rgb`, `#rrggbb`, `#rrggbbaa`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ConfigError::InvalidColor { value: trimmed.to_string() };

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return match hex.len() {
                3 => {
                    let digit = |i: usize| {
                        u8::from_str_radix(&hex[i..i + 1], 16).map(|d| d * 17).map_err(|_| invalid())
                    };
                    Ok(Color::rgb(digit(0)?, digit(1)?, digit(2)?))
                }
                6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
                8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
                _ => Err(invalid()),
            };
        }

        Color::named(&trimmed.to_ascii_lowercase()).ok_or_else(invalid)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Length tests ====================

    #[test]
    fn length_try_non_negative_valid() {
        assert!(Length::try_non_negative(1.0).is_ok());
        assert!(Length::try_non_negative(0.0).is_ok());
    }

    #[test]
    fn length_try_non_negative_rejects_bad_values() {
        assert_eq!(Length::try_non_negative(-1.0), Err(NumericError::Negative));
        assert_eq!(Length::try_non_negative(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Length::try_non_negative(f64::INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn length_arithmetic() {
        let a = Length(3.0);
        let b = Length(2.0);

        assert_eq!(a + b, Length(5.0));
        assert_eq!(a - b, Length(1.0));
        assert_eq!(a * 2.0, Length(6.0));
        assert_eq!(a / 2.0, Length(1.5));
        assert_eq!(-a, Length(-3.0));
    }

    // ==================== Angle tests ====================

    #[test]
    fn angle_degrees_round_trip() {
        let a = Angle::from_degrees(90.0);
        assert!((a.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((Angle::HALF_TURN.degrees() - 180.0).abs() < 1e-12);
        assert!(((-Angle::EIGHTH_TURN).degrees() + 45.0).abs() < 1e-12);
    }

    // ==================== Bounds tests ====================

    #[test]
    fn bounds_reject_invalid_sizes() {
        assert_eq!(Bounds::try_new(-1.0, 10.0), Err(NumericError::Negative));
        assert_eq!(Bounds::try_new(10.0, f64::NAN), Err(NumericError::NaN));
        assert!(Bounds::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn bounds_center_and_transpose() {
        let b = Bounds::try_new(120.0, 80.0).unwrap();
        assert_eq!(b.center(), Point::new(Length(60.0), Length(40.0)));
        let t = b.transposed();
        assert_eq!(t.width(), Length(80.0));
        assert_eq!(t.height(), Length(120.0));
    }

    #[test]
    fn point_distance() {
        let a = Point::new(Length(0.0), Length(0.0));
        let b = Point::new(Length(3.0), Length(4.0));
        assert_eq!(a.distance(b), Length(5.0));
    }

    // ==================== Color tests ====================

    #[test]
    fn color_parses_hex_forms() {
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("#00ff00".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
        assert_eq!("#0000ff80".parse::<Color>().unwrap(), Color::rgba(0, 0, 255, 128));
    }

    #[test]
    fn color_parses_names_case_insensitively() {
        assert_eq!("Red".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("clear".parse::<Color>().unwrap(), Color::CLEAR);
    }

    #[test]
    fn color_rejects_garbage() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn color_css_forms() {
        assert_eq!(Color::RED.to_css(), "rgb(255,0,0)");
        assert_eq!(Color::CLEAR.to_css(), "none");
        assert_eq!(Color::rgba(0, 0, 0, 255).to_css(), "rgb(0,0,0)");
    }

    #[test]
    fn any_zero_alpha_color_renders_none() {
        let ghost = Color::rgba(12, 34, 56, 0);
        assert!(ghost.is_transparent());
        assert!(!Color::rgba(12, 34, 56, 1).is_transparent());
        assert_eq!(ghost.to_css(), "none");
    }
}
