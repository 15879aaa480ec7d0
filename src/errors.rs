//! Error types with rich diagnostics using miette
//!
//! Configuration errors are plain values; attribute errors additionally
//! carry source spans so the offending text can be pointed at.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<attributes>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Invalid values handed to the widget's configuration boundary
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid tag direction: {value}")]
    #[diagnostic(
        code(cornertag::config::invalid_direction),
        help("expected 0 (top-left), 1 (top-right), 2 (bottom-left) or 3 (bottom-right)")
    )]
    InvalidTagDirection { value: i64 },

    #[error("unknown tag direction: {name}")]
    #[diagnostic(
        code(cornertag::config::unknown_direction),
        help("expected topLeft, topRight, bottomLeft or bottomRight")
    )]
    UnknownTagDirection { name: String },

    #[error("invalid corner type: {value}")]
    #[diagnostic(
        code(cornertag::config::invalid_corner_type),
        help("expected 0 (triangle) or 1 (trapezoid)")
    )]
    InvalidCornerType { value: i64 },

    #[error("unknown corner type: {name}")]
    #[diagnostic(
        code(cornertag::config::unknown_corner_type),
        help("expected triangle or trapezoid")
    )]
    UnknownCornerType { name: String },

    #[error("invalid color: {value}")]
    #[diagnostic(
        code(cornertag::config::invalid_color),
        help("use a color name or #rgb, #rrggbb, #rrggbbaa")
    )]
    InvalidColor { value: String },

    #[error("invalid border width: {0}")]
    #[diagnostic(code(cornertag::config::invalid_border_width))]
    InvalidBorderWidth(NumericError),

    #[error("invalid bounds: {0}")]
    #[diagnostic(code(cornertag::config::invalid_bounds))]
    InvalidBounds(NumericError),

    #[error("expected a number, got a {found}")]
    #[diagnostic(code(cornertag::config::expected_number))]
    ExpectedNumber { found: &'static str },

    #[error("expected an integer, got {value}")]
    #[diagnostic(code(cornertag::config::not_an_integer))]
    NotAnInteger { value: f64 },
}

// ============================================================================
// Attribute Errors
// ============================================================================

/// Errors raised while reading an attribute list
#[derive(Error, Diagnostic, Debug)]
pub enum AttributeError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(cornertag::parse::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unknown option: {key}")]
    #[diagnostic(code(cornertag::parse::unknown_option))]
    UnknownOption {
        key: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a corner tag option")]
        span: SourceSpan,
        #[help]
        suggestion: Option<String>,
    },

    #[error("invalid value for {key}")]
    #[diagnostic(code(cornertag::parse::invalid_value))]
    InvalidValue {
        key: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
        #[help]
        help: Option<String>,
    },

    #[error("{key} is set more than once")]
    #[diagnostic(code(cornertag::parse::duplicate_option))]
    DuplicateOption {
        key: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("first set here")]
        first: SourceSpan,
        #[label("set again here")]
        second: SourceSpan,
    },
}

impl AttributeError {
    /// Wrap a configuration error with the span of the value that caused it
    pub fn invalid_value(key: &str, ctx: &SourceContext, span: SourceSpan, err: &ConfigError) -> Self {
        AttributeError::InvalidValue {
            key: key.to_string(),
            src: ctx.named_source(),
            span,
            reason: err.to_string(),
            help: err.help().map(|h| h.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        let err = ConfigError::InvalidTagDirection { value: 7 };
        assert_eq!(err.to_string(), "invalid tag direction: 7");
        assert!(err.help().is_some());

        let err = ConfigError::InvalidBorderWidth(NumericError::Negative);
        assert_eq!(err.to_string(), "invalid border width: value is negative");
    }

    #[test]
    fn invalid_value_carries_help() {
        let ctx = SourceContext::new("<attributes>", "cornerType = 9");
        let err = AttributeError::invalid_value(
            "cornerType",
            &ctx,
            (13, 1).into(),
            &ConfigError::InvalidCornerType { value: 9 },
        );
        match &err {
            AttributeError::InvalidValue { reason, help, .. } => {
                assert_eq!(reason, "invalid corner type: 9");
                assert_eq!(help.as_deref(), Some("expected 0 (triangle) or 1 (trapezoid)"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("cornertag::parse::invalid_value"));
    }
}
