//! Default option values, taken from the widget's inspector defaults

use crate::types::{Color, Length};

use super::geometry::{CornerType, TagDirection};

pub const TAG_TEXT_COLOR: Color = Color::RED;
pub const TAG_LABEL_TEXT: &str = "tag";
pub const BORDER_WIDTH: Length = Length::points(1.0);
pub const TAG_BACKGROUND_COLOR: Color = Color::RED;
pub const BORDER_COLOR: Color = Color::RED;
pub const TAG_DIRECTION: TagDirection = TagDirection::TopLeft;
pub const CORNER_TYPE: CornerType = CornerType::Triangle;

/// Height of the label frame; its width follows the bounds
pub const LABEL_HEIGHT: Length = Length::points(30.0);
/// The widget itself draws nothing behind the tag
pub const WIDGET_BACKGROUND: Color = Color::CLEAR;
/// Side of the bounds used when no frame is configured
pub const FRAME_SIDE: f64 = 100.0;
/// Label font size used by the SVG renderer
pub const FONT_SIZE: Length = Length::points(17.0);
