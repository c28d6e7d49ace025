//! Domain types for slides, text blocks, and summarization output.

use serde::{Deserialize, Serialize};

use crate::backgrounds::Background;

/// One card in the carousel.
///
/// Slide order is the presentation order and also the direction in which
/// overflowing text is carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Opaque unique identifier.
    pub id: String,

    /// Fill, accent color, and display label.
    pub background: Background,

    /// Text blocks in stacking order. The first one is the primary block.
    pub text_blocks: Vec<TextBlock>,
}

impl Slide {
    /// The primary block, if the slide has any blocks at all.
    pub fn primary_block(&self) -> Option<&TextBlock> {
        self.text_blocks.first()
    }

    /// Mutable access to the primary block.
    pub fn primary_block_mut(&mut self) -> Option<&mut TextBlock> {
        self.text_blocks.first_mut()
    }

    /// Text of the primary block, or an empty string when there is none.
    pub fn primary_text(&self) -> &str {
        self.primary_block().map(|b| b.text.as_str()).unwrap_or("")
    }

    /// Find a block by id.
    pub fn block(&self, block_id: &str) -> Option<&TextBlock> {
        self.text_blocks.iter().find(|b| b.id == block_id)
    }
}

/// A styled, positioned span of text on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    /// Opaque unique identifier.
    pub id: String,

    /// Text content; may contain line breaks.
    pub text: String,

    /// Font size in px.
    pub font_size: f64,

    /// Font family name.
    pub font_family: String,

    /// Text color as a hex string.
    pub color: String,

    pub font_weight: TextWeight,

    pub font_style: TextStyle,

    pub align: TextAlign,

    pub shadow: Shadow,

    /// Top-left corner in layout units.
    pub position: Position,

    /// Box size in layout units.
    pub size: Size,

    /// Opacity of the fill behind the text, 0 to 1.
    pub background_opacity: f64,
}

impl TextBlock {
    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Normal,
    Italic,
}

/// Horizontal alignment inside the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Drop shadow behind the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub enabled: bool,
    pub blur: f64,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Structured output of a summarization provider.
///
/// Key ideas are ranked, most important first. Bullets are carried along
/// but not used for splitting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryBundle {
    /// Short headline. Older documents call this `summary`.
    #[serde(alias = "summary")]
    pub headline: String,

    #[serde(default)]
    pub key_ideas: Vec<String>,

    #[serde(default)]
    pub bullets: Vec<String>,
}

impl SummaryBundle {
    /// Create a bundle from a headline and ranked key ideas.
    pub fn new(headline: impl Into<String>, key_ideas: Vec<String>) -> Self {
        Self {
            headline: headline.into(),
            key_ideas,
            bullets: Vec::new(),
        }
    }

    /// True when neither the headline nor any key idea carries text.
    pub fn is_empty(&self) -> bool {
        self.headline.trim().is_empty() && self.key_ideas.iter().all(|i| i.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backgrounds::{BackgroundSource, FixedBackground};
    use crate::config::StyleDefaults;

    #[test]
    fn test_primary_text_of_empty_slide() {
        let mut slide = Slide::new(
            "hello",
            &StyleDefaults::default(),
            FixedBackground::default().next_background(),
        );
        assert_eq!(slide.primary_text(), "hello");

        slide.text_blocks.clear();
        assert_eq!(slide.primary_text(), "");
        assert!(slide.primary_block().is_none());
    }

    #[test]
    fn test_bundle_accepts_summary_alias() {
        let json = r#"{"summary":"Headline","keyIdeas":["One"],"bullets":[]}"#;
        let bundle: SummaryBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.headline, "Headline");
        assert_eq!(bundle.key_ideas, vec!["One"]);
    }

    #[test]
    fn test_bundle_is_empty() {
        assert!(SummaryBundle::default().is_empty());
        assert!(SummaryBundle::new("  ", vec![" ".to_string()]).is_empty());
        assert!(!SummaryBundle::new("H", Vec::new()).is_empty());
    }

    #[test]
    fn test_block_serializes_camel_case() {
        let block = TextBlock::new("x", &StyleDefaults::default());
        let value = serde_json::to_value(&block).unwrap();
        assert!(value.get("fontSize").is_some());
        assert!(value.get("backgroundOpacity").is_some());
        assert_eq!(value["fontWeight"], "bold");
        assert_eq!(value["align"], "left");
    }
}
