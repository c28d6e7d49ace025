//! Engine configuration: the shared character limit and baseline block style.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backgrounds::BackgroundSource;
use crate::error::{Error, Result};
use crate::types::{Position, Shadow, Size, Slide, SummaryBundle, TextAlign, TextStyle, TextWeight};

/// Maximum characters allowed in a slide's primary block.
pub const DEFAULT_TEXT_LIMIT: usize = 100;

/// Baseline style applied to every block the factory creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleDefaults {
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub font_weight: TextWeight,
    pub font_style: TextStyle,
    pub align: TextAlign,
    pub shadow: Shadow,
    pub position: Position,
    pub size: Size,
    pub background_opacity: f64,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            font_size: 40.0,
            font_family: "Manrope".to_string(),
            color: "#ffffff".to_string(),
            font_weight: TextWeight::Bold,
            font_style: TextStyle::Normal,
            align: TextAlign::Left,
            shadow: Shadow {
                enabled: true,
                blur: 24.0,
                x: 0.0,
                y: 18.0,
                color: "#000000".to_string(),
                opacity: 0.35,
            },
            position: Position { x: 80.0, y: 120.0 },
            size: Size {
                width: 420.0,
                height: 360.0,
            },
            background_opacity: 0.0,
        }
    }
}

/// On-disk configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub text_limit: usize,
    pub style: StyleDefaults,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            text_limit: DEFAULT_TEXT_LIMIT,
            style: StyleDefaults::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        check_limit(self.text_limit)?;
        if !self.style.font_size.is_finite() || self.style.font_size <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "font size must be a positive number, got {}",
                self.style.font_size
            )));
        }
        Ok(())
    }
}

fn check_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(Error::InvalidArgument(
            "character limit must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Splitter, reflow, and balance bound to one character limit and style.
///
/// Going through the engine keeps the three algorithms on the same limit,
/// so their outputs stay consistent with one another.
#[derive(Debug, Clone)]
pub struct SlideEngine {
    limit: usize,
    style: StyleDefaults,
}

impl Default for SlideEngine {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TEXT_LIMIT,
            style: StyleDefaults::default(),
        }
    }
}

impl SlideEngine {
    /// Create an engine with the default limit and style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from a validated configuration.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            limit: config.text_limit,
            style: config.style,
        })
    }

    /// Use a custom character limit. Zero is rejected.
    pub fn with_limit(mut self, limit: usize) -> Result<Self> {
        check_limit(limit)?;
        self.limit = limit;
        Ok(self)
    }

    /// Use a custom baseline style for blocks the engine creates.
    pub fn with_style(mut self, style: StyleDefaults) -> Self {
        self.style = style;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn style(&self) -> &StyleDefaults {
        &self.style
    }

    /// Seed slides from a summary bundle, one key idea per slide.
    pub fn split(
        &self,
        bundle: &SummaryBundle,
        count: usize,
        backgrounds: &mut dyn BackgroundSource,
    ) -> Vec<Slide> {
        crate::splitter::split_to_slides(bundle, count, self.limit, &self.style, backgrounds)
    }

    /// Carry overflowing text forward through the sequence.
    pub fn reflow(&self, slides: &[Slide]) -> Vec<Slide> {
        crate::reflow::smart_reflow(slides, self.limit, &self.style)
    }

    /// Spread all primary text evenly across the sequence.
    pub fn balance(&self, slides: &[Slide]) -> Vec<Slide> {
        crate::balance::balance_slides(slides, self.limit)
    }
}
