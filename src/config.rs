//! Widget configuration and attribute-list application
//!
//! [`TagConfig`] holds the seven options a host can set. Attribute lists
//! are applied key by key; every value is validated here, at the boundary,
//! so the widget never sees an out-of-range direction or corner type.

use std::collections::HashMap;

use crate::ast::{AttrValue, Attribute, AttributeList, Span};
use crate::errors::{AttributeError, ConfigError, SourceContext};
use crate::tag::defaults;
use crate::tag::geometry::{CornerType, TagDirection};
use crate::types::{Bounds, Color, Length};

/// Options recognized by the widget
#[derive(Debug, Clone, PartialEq)]
pub struct TagConfig {
    pub tag_text_color: Color,
    pub tag_label_text: String,
    pub border_width: Length,
    pub tag_background_color: Color,
    pub border_color: Color,
    pub tag_direction: TagDirection,
    pub corner_type: CornerType,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            tag_text_color: defaults::TAG_TEXT_COLOR,
            tag_label_text: defaults::TAG_LABEL_TEXT.to_string(),
            border_width: defaults::BORDER_WIDTH,
            tag_background_color: defaults::TAG_BACKGROUND_COLOR,
            border_color: defaults::BORDER_COLOR,
            tag_direction: defaults::TAG_DIRECTION,
            corner_type: defaults::CORNER_TYPE,
        }
    }
}

/// Attribute key names, as the host spells them
pub const OPTION_KEYS: [&str; 9] = [
    "tagTextColor",
    "tagLabelText",
    "borderWidth",
    "tagBackgroundColor",
    "borderColor",
    "tagDirection",
    "cornerType",
    "width",
    "height",
];

/// Result of applying an attribute list: the options plus the frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagAttributes {
    pub config: TagConfig,
    pub width: Option<Length>,
    pub height: Option<Length>,
}

impl TagAttributes {
    /// Frame of the widget; missing sides use the default frame side
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        let w = self.width.map_or(defaults::FRAME_SIDE, Length::raw);
        let h = self.height.map_or(defaults::FRAME_SIDE, Length::raw);
        Bounds::try_new(w, h).map_err(ConfigError::InvalidBounds)
    }
}

/// Apply every attribute in source order.
///
/// Fails on the first unknown key, invalid value or repeated key.
pub fn apply_attributes(list: &AttributeList, ctx: &SourceContext) -> Result<TagAttributes, AttributeError> {
    let mut out = TagAttributes::default();
    let mut seen: HashMap<&str, Span> = HashMap::new();

    for attr in &list.attributes {
        if let Some(first) = seen.insert(attr.key.as_str(), attr.key_span) {
            return Err(AttributeError::DuplicateOption {
                key: attr.key.clone(),
                src: ctx.named_source(),
                first: first.into(),
                second: attr.key_span.into(),
            });
        }
        apply_attribute(&mut out, attr, ctx)?;
    }

    Ok(out)
}

fn apply_attribute(out: &mut TagAttributes, attr: &Attribute, ctx: &SourceContext) -> Result<(), AttributeError> {
    crate::log::trace!(key = %attr.key, value = ?attr.value, "applying attribute");

    let config = &mut out.config;
    let result = match attr.key.as_str() {
        "tagTextColor" => color_value(&attr.value).map(|c| config.tag_text_color = c),
        "tagLabelText" => {
            config.tag_label_text = attr.value.as_text().to_string();
            Ok(())
        }
        "borderWidth" => length_value(&attr.value)
            .and_then(|v| Length::try_non_negative(v).map_err(ConfigError::InvalidBorderWidth))
            .map(|l| config.border_width = l),
        "tagBackgroundColor" => color_value(&attr.value).map(|c| config.tag_background_color = c),
        "borderColor" => color_value(&attr.value).map(|c| config.border_color = c),
        "tagDirection" => direction_value(&attr.value).map(|d| config.tag_direction = d),
        "cornerType" => corner_type_value(&attr.value).map(|c| config.corner_type = c),
        "width" => length_value(&attr.value)
            .and_then(|v| Length::try_non_negative(v).map_err(ConfigError::InvalidBounds))
            .map(|l| out.width = Some(l)),
        "height" => length_value(&attr.value)
            .and_then(|v| Length::try_non_negative(v).map_err(ConfigError::InvalidBounds))
            .map(|l| out.height = Some(l)),
        _ => {
            return Err(AttributeError::UnknownOption {
                key: attr.key.clone(),
                src: ctx.named_source(),
                span: attr.key_span.into(),
                suggestion: suggest_key(&attr.key).map(|k| format!("did you mean `{k}`?")),
            });
        }
    };

    result.map_err(|err| AttributeError::invalid_value(&attr.key, ctx, attr.value_span.into(), &err))
}

fn color_value(value: &AttrValue) -> Result<Color, ConfigError> {
    match value {
        AttrValue::Str(s) | AttrValue::Hex(s) | AttrValue::Ident(s) => s.parse(),
        AttrValue::Number { text, .. } => Err(ConfigError::InvalidColor { value: text.clone() }),
    }
}

fn length_value(value: &AttrValue) -> Result<f64, ConfigError> {
    match value {
        AttrValue::Number { value, .. } => Ok(*value),
        other => Err(ConfigError::ExpectedNumber {
            found: other.kind(),
        }),
    }
}

/// Raw enum values must be whole numbers that fit an `i64`
fn integer_value(value: f64) -> Result<i64, ConfigError> {
    // 2^63 is exactly representable; anything at or past it would saturate.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !value.is_finite() || value.fract() != 0.0 || !(-LIMIT..LIMIT).contains(&value) {
        return Err(ConfigError::NotAnInteger { value });
    }
    Ok(value as i64)
}

fn direction_value(value: &AttrValue) -> Result<TagDirection, ConfigError> {
    match value {
        AttrValue::Number { value, .. } => TagDirection::try_from(integer_value(*value)?),
        other => other.as_text().parse(),
    }
}

fn corner_type_value(value: &AttrValue) -> Result<CornerType, ConfigError> {
    match value {
        AttrValue::Number { value, .. } => CornerType::try_from(integer_value(*value)?),
        other => other.as_text().parse(),
    }
}

/// Find the known key a misspelled one was probably meant to be
fn suggest_key(key: &str) -> Option<&'static str> {
    let fold = |s: &str| -> String {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    };
    let wanted = fold(key);
    OPTION_KEYS.iter().copied().find(|&k| fold(k) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn apply(src: &str) -> Result<TagAttributes, AttributeError> {
        let ctx = SourceContext::new("<test>", src);
        let list = parse(&ctx)?;
        apply_attributes(&list, &ctx)
    }

    #[test]
    fn empty_list_gives_defaults() {
        let attrs = apply("").unwrap();
        assert_eq!(attrs.config, TagConfig::default());
        assert_eq!(attrs.config.tag_label_text, "tag");
        assert_eq!(attrs.config.border_width, Length(1.0));
        assert_eq!(attrs.bounds().unwrap(), Bounds::try_new(100.0, 100.0).unwrap());
    }

    #[test]
    fn every_option_applies() {
        let attrs = apply(
            r##"
            tagTextColor = white
            tagLabelText = "HOT"
            borderWidth = 2
            tagBackgroundColor = #ff8800
            borderColor = "#000"
            tagDirection = bottom-right
            cornerType = 1
            width = 120; height = 80
            "##,
        )
        .unwrap();
        let c = &attrs.config;
        assert_eq!(c.tag_text_color, Color::rgb(255, 255, 255));
        assert_eq!(c.tag_label_text, "HOT");
        assert_eq!(c.border_width, Length(2.0));
        assert_eq!(c.tag_background_color, Color::rgb(255, 136, 0));
        assert_eq!(c.border_color, Color::rgb(0, 0, 0));
        assert_eq!(c.tag_direction, TagDirection::BottomRight);
        assert_eq!(c.corner_type, CornerType::Trapezoid);
        assert_eq!(attrs.bounds().unwrap(), Bounds::try_new(120.0, 80.0).unwrap());
    }

    #[test]
    fn numeric_label_keeps_its_spelling() {
        let attrs = apply("tagLabelText = 007").unwrap();
        assert_eq!(attrs.config.tag_label_text, "007");
    }

    #[test]
    fn out_of_range_direction_is_rejected() {
        let err = apply("tagDirection = 4").unwrap_err();
        match err {
            AttributeError::InvalidValue { key, reason, .. } => {
                assert_eq!(key, "tagDirection");
                assert_eq!(reason, "invalid tag direction: 4");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fractional_corner_type_is_rejected() {
        let err = apply("cornerType = 0.5").unwrap_err();
        match err {
            AttributeError::InvalidValue { reason, .. } => {
                assert_eq!(reason, "expected an integer, got 0.5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn huge_direction_is_not_clamped() {
        let err = apply("tagDirection = 99999999999999999999").unwrap_err();
        match err {
            AttributeError::InvalidValue { key, reason, .. } => {
                assert_eq!(key, "tagDirection");
                assert_eq!(reason, "expected an integer, got 100000000000000000000");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_border_width_is_rejected() {
        let err = apply("borderWidth = -2").unwrap_err();
        assert!(matches!(err, AttributeError::InvalidValue { ref key, .. } if key == "borderWidth"));
    }

    #[test]
    fn color_must_be_a_color() {
        assert!(apply("borderColor = 12").is_err());
        assert!(apply("borderColor = notacolor").is_err());
    }

    #[test]
    fn unknown_key_gets_a_suggestion() {
        let err = apply("tag_direction = 1").unwrap_err();
        match err {
            AttributeError::UnknownOption { key, suggestion, .. } => {
                assert_eq!(key, "tag_direction");
                assert_eq!(suggestion.as_deref(), Some("did you mean `tagDirection`?"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_key_without_near_match() {
        let err = apply("opacity = 0.5").unwrap_err();
        assert!(matches!(err, AttributeError::UnknownOption { suggestion: None, .. }));
    }

    #[test]
    fn repeated_key_is_rejected() {
        let err = apply("borderWidth = 1; borderWidth = 2").unwrap_err();
        assert!(matches!(err, AttributeError::DuplicateOption { .. }));
    }
}
