//! Syntax tree for attribute lists
//!
//! An attribute list is what a host's inspector hands the widget:
//!
//! ```text
//! tagDirection = 1
//! cornerType = trapezoid; tagLabelText = "NEW"
//! borderColor: #333
//! ```

use miette::SourceSpan;

/// Byte range in the attribute source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        Span::new(span.start(), span.end())
    }
}

/// A parsed attribute list, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeList {
    pub attributes: Vec<Attribute>,
}

/// `key = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub key_span: Span,
    pub value: AttrValue,
    pub value_span: Span,
}

/// Right-hand side of an attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Quoted string, escapes already processed
    Str(String),
    /// `#rgb`, `#rrggbb` or `#rrggbbaa`, including the `#`
    Hex(String),
    /// Number with the text it was written as
    Number { value: f64, text: String },
    /// Bare word: `trapezoid`, `top-right`, `red`
    Ident(String),
}

impl AttrValue {
    /// The value as label text
    pub fn as_text(&self) -> &str {
        match self {
            AttrValue::Str(s) | AttrValue::Hex(s) | AttrValue::Ident(s) => s,
            AttrValue::Number { text, .. } => text,
        }
    }

    /// Short name of the value's kind, for messages
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::Str(_) => "string",
            AttrValue::Hex(_) => "hex color",
            AttrValue::Number { .. } => "number",
            AttrValue::Ident(_) => "name",
        }
    }
}
