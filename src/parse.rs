//! Parse pest pairs into an attribute list

use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::ast::*;
use crate::errors::{AttributeError, SourceContext};
use crate::{AttributeParser, Rule};

/// Parse attribute source into an [`AttributeList`]
pub fn parse(ctx: &SourceContext) -> Result<AttributeList, AttributeError> {
    let pairs = AttributeParser::parse(Rule::program, &ctx.source).map_err(|e| {
        let span = match e.location {
            InputLocation::Pos(p) => Span::new(p, p),
            InputLocation::Span((s, end)) => Span::new(s, end),
        };
        AttributeError::Syntax {
            message: e.variant.message().into_owned(),
            src: ctx.named_source(),
            span: span.into(),
        }
    })?;

    let mut attributes = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::program {
            for inner in pair.into_inner() {
                if inner.as_rule() == Rule::attribute {
                    attributes.push(parse_attribute(inner));
                }
            }
        }
    }

    crate::log::debug!(count = attributes.len(), "parsed attribute list");
    Ok(AttributeList { attributes })
}

fn parse_attribute(pair: Pair<Rule>) -> Attribute {
    let mut inner = pair.into_inner();
    // The grammar guarantees `key` followed by exactly one value.
    let (key, value) = match (inner.next(), inner.next()) {
        (Some(key), Some(value)) => (key, value),
        _ => unreachable!("attribute rule always has a key and a value"),
    };

    Attribute {
        key: key.as_str().to_string(),
        key_span: key.as_span().into(),
        value_span: value.as_span().into(),
        value: parse_value(value),
    }
}

fn parse_value(pair: Pair<Rule>) -> AttrValue {
    match pair.as_rule() {
        Rule::string => {
            let raw = pair
                .into_inner()
                .next()
                .map(|p| p.as_str())
                .unwrap_or_default();
            AttrValue::Str(unescape(raw))
        }
        Rule::hex_color => AttrValue::Hex(pair.as_str().to_string()),
        Rule::number => {
            let text = pair.as_str();
            // `number` only matches digits with an optional sign and fraction.
            let value = text.parse::<f64>().unwrap_or(f64::NAN);
            AttrValue::Number { value, text: text.to_string() }
        }
        Rule::ident => AttrValue::Ident(pair.as_str().to_string()),
        rule => unreachable!("unexpected value rule: {rule:?}"),
    }
}

/// Process backslash escapes in a quoted string.
///
/// `\n` and `\t` become control characters; any other escaped character
/// stands for itself.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(src: &str) -> Result<AttributeList, AttributeError> {
        parse(&SourceContext::new("<test>", src))
    }

    #[test]
    fn parse_empty() {
        assert!(parse_str("").unwrap().attributes.is_empty());
        assert!(parse_str("  \n ; ;\n// nothing here\n").unwrap().attributes.is_empty());
    }

    #[test]
    fn parse_each_value_kind() {
        let list = parse_str(
            r#"tagLabelText = "SALE"
               borderColor = #0a0
               borderWidth = 2.5
               cornerType = trapezoid"#,
        )
        .unwrap();
        let values: Vec<_> = list.attributes.iter().map(|a| a.value.clone()).collect();
        assert_eq!(
            values,
            vec![
                AttrValue::Str("SALE".into()),
                AttrValue::Hex("#0a0".into()),
                AttrValue::Number { value: 2.5, text: "2.5".into() },
                AttrValue::Ident("trapezoid".into()),
            ]
        );
    }

    #[test]
    fn parse_semicolons_and_colons() {
        let list = parse_str("tagDirection: 1; cornerType: 0;").unwrap();
        let keys: Vec<_> = list.attributes.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["tagDirection", "cornerType"]);
    }

    #[test]
    fn parse_negative_number() {
        let list = parse_str("tagDirection = -1").unwrap();
        assert_eq!(
            list.attributes[0].value,
            AttrValue::Number { value: -1.0, text: "-1".into() }
        );
    }

    #[test]
    fn parse_comments_between_attributes() {
        let list = parse_str("// header\nborderWidth = 3 // trailing\nborderColor = red").unwrap();
        assert_eq!(list.attributes.len(), 2);
    }

    #[test]
    fn parse_records_spans() {
        let src = "borderColor = #123456";
        let list = parse_str(src).unwrap();
        let attr = &list.attributes[0];
        assert_eq!(&src[attr.key_span.start..attr.key_span.end], "borderColor");
        assert_eq!(&src[attr.value_span.start..attr.value_span.end], "#123456");
    }

    #[test]
    fn parse_string_escapes() {
        let list = parse_str(r#"tagLabelText = "say \"hi\"\n\\o/""#).unwrap();
        assert_eq!(list.attributes[0].value, AttrValue::Str("say \"hi\"\n\\o/".into()));
    }

    #[test]
    fn parse_missing_value_is_a_syntax_error() {
        let err = parse_str("borderWidth = ").unwrap_err();
        assert!(matches!(err, AttributeError::Syntax { .. }), "{err:?}");
    }

    #[test]
    fn parse_missing_assign_is_a_syntax_error() {
        let err = parse_str("borderWidth 2").unwrap_err();
        assert!(matches!(err, AttributeError::Syntax { .. }), "{err:?}");
    }
}
