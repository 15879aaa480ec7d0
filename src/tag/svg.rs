//! SVG generation
//!
//! Draws a [`CornerTag`] the way a host view hierarchy would: the outline
//! on a shape layer rotated about the bounds center, and the label rotated
//! about its own center on top of it.

use std::fmt::Write;

use crate::types::Angle;

use super::defaults;
use super::path_builder::fmt_num;
use super::widget::CornerTag;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render a corner tag to a standalone SVG document
pub fn render(tag: &CornerTag) -> String {
    let bounds = tag.bounds();
    let layout = tag.layout();
    let style = tag.style();
    let (w, h) = (fmt_num(bounds.width().raw()), fmt_num(bounds.height().raw()));
    let center = bounds.center();

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="background:{}">"#,
        defaults::WIDGET_BACKGROUND.to_css()
    );
    let _ = writeln!(
        out,
        r#"  <g class="corner-tag" data-direction="{}" data-corner="{}">"#,
        tag.tag_direction(),
        tag.corner_type()
    );

    // Shape layer
    let _ = write!(out, r#"    <path d="{}""#, layout.path.to_svg_data());
    push_rotation(&mut out, layout.shape_rotation, center.x.raw(), center.y.raw());
    let _ = writeln!(
        out,
        r#" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        style.fill.to_css(),
        style.stroke.to_css(),
        fmt_num(style.line_width.raw())
    );

    // Label
    let label = &layout.label;
    let (lx, ly) = (label.center.x.raw(), label.center.y.raw());
    let _ = write!(out, r#"    <text x="{}" y="{}""#, fmt_num(lx), fmt_num(ly));
    push_rotation(&mut out, label.rotation, lx, ly);
    let _ = write!(
        out,
        r#" fill="{}" font-size="{}" text-anchor="middle" dominant-baseline="central">"#,
        style.text_color.to_css(),
        fmt_num(defaults::FONT_SIZE.raw())
    );
    escape_xml_into(&mut out, &style.text);
    out.push_str("</text>\n");

    out.push_str("  </g>\n</svg>\n");

    crate::log::debug!(bytes = out.len(), "rendered corner tag svg");
    out
}

/// ` transform="rotate(deg cx cy)"`, omitted for a zero angle
fn push_rotation(out: &mut String, angle: Angle, cx: f64, cy: f64) {
    let deg = fmt_num(angle.degrees());
    if deg == "0" {
        return;
    }
    let _ = write!(out, r#" transform="rotate({} {} {})""#, deg, fmt_num(cx), fmt_num(cy));
}

fn escape_xml_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::geometry::{CornerType, TagDirection};
    use crate::types::Bounds;

    fn square(side: f64) -> Bounds {
        Bounds::try_new(side, side).unwrap()
    }

    #[test]
    fn top_left_has_no_shape_transform() {
        let svg = render(&CornerTag::new(square(100.0), TagDirection::TopLeft, CornerType::Triangle));
        assert!(svg.contains(r#"<path d="M0,0 L0,100 L100,0 Z" fill="#));
        assert!(svg.contains(r#"transform="rotate(-45 34.55 34.55)""#), "{svg}");
    }

    #[test]
    fn bottom_right_is_a_half_turn() {
        let svg = render(&CornerTag::new(square(80.0), TagDirection::BottomRight, CornerType::Triangle));
        assert!(svg.contains(r#"transform="rotate(180 40 40)""#), "{svg}");
    }

    #[test]
    fn label_text_is_escaped() {
        let mut tag = CornerTag::default();
        tag.set_tag_label_text("<b>&</b>");
        let svg = render(&tag);
        assert!(svg.contains(">&lt;b&gt;&amp;&lt;/b&gt;</text>"), "{svg}");
    }

    #[test]
    fn transparent_fill_renders_none() {
        let mut tag = CornerTag::default();
        tag.set_tag_background_color(crate::types::Color::CLEAR);
        let svg = render(&tag);
        assert!(svg.contains(r#"fill="none""#), "{svg}");
        assert!(svg.contains(r#"style="background:none""#));
    }
}
