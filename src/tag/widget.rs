//! The corner tag widget
//!
//! `CornerTag` owns its configuration and keeps the derived layout and
//! style in sync. Every setter ends in an explicit call to [`relayout`] or
//! [`restyle`]; nothing is computed lazily and nothing is cached behind
//! the caller's back.
//!
//! [`relayout`]: CornerTag::relayout
//! [`restyle`]: CornerTag::restyle

use crate::config::TagConfig;
use crate::errors::ConfigError;
use crate::types::{Bounds, Color, Length};

use super::defaults;
use super::geometry::{CornerType, TagDirection};
use super::types::{TagLayout, TagStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct CornerTag {
    config: TagConfig,
    bounds: Bounds,
    layout: TagLayout,
    style: TagStyle,
}

impl Default for CornerTag {
    fn default() -> Self {
        Self::with_config(Bounds::square(defaults::FRAME_SIDE), TagConfig::default())
    }
}

impl CornerTag {
    /// A tag with default styling in the given corner
    pub fn new(bounds: Bounds, tag_direction: TagDirection, corner_type: CornerType) -> Self {
        Self::with_config(
            bounds,
            TagConfig {
                tag_direction,
                corner_type,
                ..TagConfig::default()
            },
        )
    }

    pub fn with_config(bounds: Bounds, config: TagConfig) -> Self {
        let layout = compute_layout(&bounds, &config);
        let style = compute_style(&config);
        Self {
            config,
            bounds,
            layout,
            style,
        }
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn layout(&self) -> &TagLayout {
        &self.layout
    }

    pub fn style(&self) -> &TagStyle {
        &self.style
    }

    pub fn tag_direction(&self) -> TagDirection {
        self.config.tag_direction
    }

    pub fn corner_type(&self) -> CornerType {
        self.config.corner_type
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    pub fn set_tag_text_color(&mut self, color: Color) {
        self.config.tag_text_color = color;
        self.restyle();
    }

    pub fn set_tag_label_text(&mut self, text: impl Into<String>) {
        self.config.tag_label_text = text.into();
        self.restyle();
    }

    pub fn set_border_width(&mut self, width: f64) -> Result<(), ConfigError> {
        self.config.border_width = Length::try_non_negative(width).map_err(ConfigError::InvalidBorderWidth)?;
        self.restyle();
        Ok(())
    }

    pub fn set_tag_background_color(&mut self, color: Color) {
        self.config.tag_background_color = color;
        self.restyle();
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.config.border_color = color;
        self.restyle();
    }

    pub fn set_tag_direction(&mut self, direction: TagDirection) {
        self.config.tag_direction = direction;
        self.relayout();
    }

    /// Set the direction from a host's integer attribute.
    ///
    /// Out-of-range values are rejected and leave the widget unchanged.
    pub fn set_tag_direction_raw(&mut self, raw: i64) -> Result<(), ConfigError> {
        let direction = TagDirection::try_from(raw)?;
        self.set_tag_direction(direction);
        Ok(())
    }

    pub fn set_corner_type(&mut self, corner_type: CornerType) {
        self.config.corner_type = corner_type;
        self.relayout();
    }

    /// Set the corner type from a host's integer attribute.
    ///
    /// Out-of-range values are rejected and leave the widget unchanged.
    pub fn set_corner_type_raw(&mut self, raw: i64) -> Result<(), ConfigError> {
        let corner_type = CornerType::try_from(raw)?;
        self.set_corner_type(corner_type);
        Ok(())
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.relayout();
    }

    /// Replace the whole configuration
    pub fn apply(&mut self, config: TagConfig) {
        self.config = config;
        self.relayout();
        self.restyle();
    }

    // ------------------------------------------------------------------
    // Recomputation
    // ------------------------------------------------------------------

    /// Recompute outline, shape rotation and label frame
    pub fn relayout(&mut self) {
        self.layout = compute_layout(&self.bounds, &self.config);
        crate::log::debug!(
            direction = %self.config.tag_direction,
            corner = %self.config.corner_type,
            width = self.bounds.width().raw(),
            height = self.bounds.height().raw(),
            "relayout"
        );
    }

    /// Recompute fill, stroke and label text
    pub fn restyle(&mut self) {
        self.style = compute_style(&self.config);
        crate::log::debug!(text = %self.style.text, "restyle");
    }
}

fn compute_layout(bounds: &Bounds, config: &TagConfig) -> TagLayout {
    let direction = config.tag_direction;
    TagLayout {
        path: config.corner_type.shape_path(bounds),
        shape_rotation: direction.shape_rotation(),
        label: direction.label_placement(bounds),
    }
}

fn compute_style(config: &TagConfig) -> TagStyle {
    TagStyle {
        fill: config.tag_background_color,
        stroke: config.border_color,
        line_width: config.border_width,
        text_color: config.tag_text_color,
        text: config.tag_label_text.clone(),
    }
}
