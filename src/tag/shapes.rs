//! Outline shapes for corner tags
//!
//! Each corner type has its own shape type that knows how to trace its
//! outline inside a bounds rectangle. The outline is always drawn for the
//! top-left corner; other corners are reached by rotating the shape layer.

use enum_dispatch::enum_dispatch;

use crate::types::{Bounds, Length, Point, Size};

use super::geometry::{CornerType, GOLDEN_RATIO};
use super::path_builder::{PathBuilder, TagPath};

/// Common behavior for all outline shapes
#[enum_dispatch]
pub trait OutlineShape {
    /// The corner type this shape draws
    fn corner_type(&self) -> CornerType;

    /// Trace the closed outline inside `bounds`
    fn outline(&self, bounds: &Bounds) -> TagPath;

    /// Horizontal and vertical run of the edge facing the widget's interior.
    /// Shapes whose interior edge is a single point have none.
    fn short_edge(&self, _bounds: &Bounds) -> Option<Size<Length>> {
        None
    }
}

/// Right triangle filling the top-left half of the bounds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TriangleShape;

impl OutlineShape for TriangleShape {
    fn corner_type(&self) -> CornerType {
        CornerType::Triangle
    }

    fn outline(&self, bounds: &Bounds) -> TagPath {
        let (w, h) = (bounds.width(), bounds.height());
        PathBuilder::new(Point::new(Length::ZERO, Length::ZERO))
            .line_to(Point::new(Length::ZERO, h))
            .line_to(Point::new(w, Length::ZERO))
            .close()
            .build()
    }
}

/// Band between the bounds diagonal and a parallel cut near the corner.
///
/// The cut meets each axis at `1 - ratio` of that dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidShape {
    pub ratio: f64,
}

impl Default for TrapezoidShape {
    fn default() -> Self {
        Self { ratio: GOLDEN_RATIO }
    }
}

impl TrapezoidShape {
    fn cut(&self) -> f64 {
        1.0 - self.ratio
    }
}

impl OutlineShape for TrapezoidShape {
    fn corner_type(&self) -> CornerType {
        CornerType::Trapezoid
    }

    fn outline(&self, bounds: &Bounds) -> TagPath {
        let (w, h) = (bounds.width(), bounds.height());
        let cut = self.cut();
        PathBuilder::new(Point::new(Length::ZERO, h * cut))
            .line_to(Point::new(Length::ZERO, h))
            .line_to(Point::new(w, Length::ZERO))
            .line_to(Point::new(w * cut, Length::ZERO))
            .close()
            .build()
    }

    fn short_edge(&self, bounds: &Bounds) -> Option<Size<Length>> {
        let cut = self.cut();
        Some(Size::new(bounds.width() * cut, bounds.height() * cut))
    }
}

/// Outline shape for one corner type
#[enum_dispatch(OutlineShape)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    TriangleShape,
    TrapezoidShape,
}

impl From<CornerType> for Outline {
    fn from(kind: CornerType) -> Self {
        match kind {
            CornerType::Triangle => TriangleShape.into(),
            CornerType::Trapezoid => TrapezoidShape::default().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point<Length> {
        Point::new(Length(x), Length(y))
    }

    #[test]
    fn triangle_outline_points() {
        let path = TriangleShape.outline(&Bounds::try_new(40.0, 30.0).unwrap());
        let pts: Vec<_> = path.points().collect();
        assert_eq!(pts, vec![p(0.0, 0.0), p(0.0, 30.0), p(40.0, 0.0), p(0.0, 0.0)]);
    }

    #[test]
    fn trapezoid_outline_points() {
        let path = TrapezoidShape { ratio: 0.5 }.outline(&Bounds::try_new(40.0, 20.0).unwrap());
        let pts: Vec<_> = path.points().collect();
        assert_eq!(
            pts,
            vec![p(0.0, 10.0), p(0.0, 20.0), p(40.0, 0.0), p(20.0, 0.0), p(0.0, 10.0)]
        );
        assert!(path.is_closed());
    }

    #[test]
    fn triangle_has_no_short_edge() {
        let b = Bounds::try_new(10.0, 10.0).unwrap();
        assert_eq!(TriangleShape.short_edge(&b), None);
    }

    #[test]
    fn outline_dispatch_matches_corner_type() {
        for kind in [CornerType::Triangle, CornerType::Trapezoid] {
            assert_eq!(Outline::from(kind).corner_type(), kind);
        }
    }

    #[test]
    fn zero_bounds_still_produce_a_path() {
        let b = Bounds::try_new(0.0, 0.0).unwrap();
        let path = Outline::from(CornerType::Trapezoid).outline(&b);
        assert_eq!(path.commands().len(), 5);
        assert!(path.is_closed());
    }
}
