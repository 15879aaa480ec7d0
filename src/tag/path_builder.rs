//! Path builder for tag outlines.
//!
//! Outlines are built the way a host framework's bezier path is: a
//! `move_to`, a run of `line_to`s, and an explicit line back to the first
//! point. The builder never emits curves; corner tags are polygons.
//!
//! # Example
//!
//! ```
//! use cornertag::tag::path_builder::PathBuilder;
//! use cornertag::types::{Length, Point};
//!
//! let p = |x, y| Point::new(Length(x), Length(y));
//! let path = PathBuilder::new(p(0.0, 0.0))
//!     .line_to(p(0.0, 10.0))
//!     .line_to(p(10.0, 0.0))
//!     .close()
//!     .build();
//!
//! assert!(path.is_closed());
//! assert_eq!(path.vertices().len(), 3);
//! ```

use std::fmt::Write;

use crate::types::{Length, Point};

/// Points closer than this are treated as the same vertex
pub const VERTEX_EPSILON: f64 = 1e-9;

/// A single outline command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point<Length>),
    LineTo(Point<Length>),
}

impl PathCommand {
    pub fn point(&self) -> Point<Length> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }
}

/// A polygon outline in bounds coordinates (Y-down, origin top-left)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagPath {
    commands: Vec<PathCommand>,
}

impl TagPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Every point the path visits, in order, including the closing point
    pub fn points(&self) -> impl Iterator<Item = Point<Length>> + '_ {
        self.commands.iter().map(PathCommand::point)
    }

    /// The loop returns to where it started
    pub fn is_closed(&self) -> bool {
        match (self.commands.first(), self.commands.last()) {
            (Some(first), Some(last)) if self.commands.len() > 1 => {
                same_point(first.point(), last.point())
            }
            _ => false,
        }
    }

    /// Distinct vertices in visiting order
    pub fn vertices(&self) -> Vec<Point<Length>> {
        let mut out: Vec<Point<Length>> = Vec::with_capacity(self.commands.len());
        for p in self.points() {
            if !out.iter().any(|q| same_point(*q, p)) {
                out.push(p);
            }
        }
        out
    }

    /// Lengths of each drawn segment
    pub fn segment_lengths(&self) -> Vec<Length> {
        self.commands
            .windows(2)
            .map(|pair| pair[0].point().distance(pair[1].point()))
            .collect()
    }

    /// SVG path data, e.g. `M0,0 L0,100 L100,0 Z`
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        let closed = self.is_closed();
        // The closing line is expressed as Z rather than a repeated point.
        let drawn = if closed {
            &self.commands[..self.commands.len() - 1]
        } else {
            &self.commands[..]
        };
        for cmd in drawn {
            if !d.is_empty() {
                d.push(' ');
            }
            let (letter, p) = match cmd {
                PathCommand::MoveTo(p) => ('M', p),
                PathCommand::LineTo(p) => ('L', p),
            };
            let _ = write!(d, "{}{},{}", letter, fmt_num(p.x.0), fmt_num(p.y.0));
        }
        if closed {
            d.push_str(" Z");
        }
        d
    }
}

/// Incremental builder for [`TagPath`]
#[derive(Debug)]
pub struct PathBuilder {
    start: Point<Length>,
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    /// Start a new path at the given point
    pub fn new(start: Point<Length>) -> Self {
        Self {
            start,
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    pub fn line_to(mut self, p: Point<Length>) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Draw the closing line back to the start point
    pub fn close(self) -> Self {
        let start = self.start;
        self.line_to(start)
    }

    pub fn build(self) -> TagPath {
        TagPath {
            commands: self.commands,
        }
    }
}

fn same_point(a: Point<Length>, b: Point<Length>) -> bool {
    (a.x.0 - b.x.0).abs() < VERTEX_EPSILON && (a.y.0 - b.y.0).abs() < VERTEX_EPSILON
}

/// Format a coordinate for SVG: at most two decimals, no trailing zeros
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" { "0".to_string() } else { s }
}
