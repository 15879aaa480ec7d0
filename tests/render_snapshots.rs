use cornertag::tag::{CornerTag, CornerType, TagDirection};
use cornertag::types::Bounds;

#[test]
fn trapezoid_top_right() {
    let bounds = Bounds::try_new(100.0, 100.0).unwrap();
    let tag = CornerTag::new(bounds, TagDirection::TopRight, CornerType::Trapezoid);
    insta::assert_snapshot!(cornertag::tag::svg::render(&tag));
}

#[test]
fn styled_triangle_bottom_left() {
    let svg = cornertag::render_svg(
        r#"
        width = 120; height = 80
        tagDirection = bottom-left
        tagBackgroundColor = #2e7d32
        borderColor = #1b5e20
        tagTextColor = white
        tagLabelText = "50% & up"
        "#,
    )
    .unwrap();
    insta::assert_snapshot!(svg);
}
