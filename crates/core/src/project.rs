//! Project state: the slide sequence plus everything the editor persists.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backgrounds::BackgroundSource;
use crate::config::{SlideEngine, StyleDefaults};
use crate::error::{Error, Result};
use crate::factory::{BlockPatch, PositionPatch, SizePatch};
use crate::readability::readability_score;
use crate::templates::TemplatePreset;
use crate::types::{Slide, SummaryBundle, TextBlock};

/// Text on the single slide of a fresh project.
const WELCOME_TEXT: &str = "Paste a long text, press Summarize, and get polished slides.";

/// Text of blocks added by hand.
const NEW_BLOCK_TEXT: &str = "New text block";

/// Output card proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:5")]
    Portrait,
    #[serde(rename = "9:16")]
    Story,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "3:2")]
    Classic,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Portrait,
        AspectRatio::Story,
        AspectRatio::Widescreen,
        AspectRatio::Classic,
    ];

    /// Export resolution in pixels as (width, height).
    pub fn resolution(&self) -> (u32, u32) {
        match self {
            Self::Square => (1080, 1080),
            Self::Portrait => (1080, 1350),
            Self::Story => (1080, 1920),
            Self::Widescreen => (1920, 1080),
            Self::Classic => (1350, 900),
        }
    }

    /// Where this ratio is typically used.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Square => "Instagram post",
            Self::Portrait => "Instagram portrait",
            Self::Story => "Stories/Reels",
            Self::Widescreen => "Presentation",
            Self::Classic => "Classic photo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Bitmap format used by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpeg,
}

/// Everything the editor saves between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Source text pasted by the user.
    pub input_text: String,

    /// Slide count requested for the next summarization.
    pub slide_count: usize,

    pub slides: Vec<Slide>,

    pub active_slide_id: Option<String>,

    pub aspect_ratio: AspectRatio,

    /// Most recent summarization result.
    pub summary_bundle: Option<SummaryBundle>,

    pub theme: Theme,

    /// Export quality, 0 to 100.
    pub quality: u8,

    pub format: ExportFormat,
}

impl Project {
    /// A fresh project holding one welcome slide.
    pub fn new(style: &StyleDefaults, backgrounds: &mut dyn BackgroundSource) -> Self {
        let slide = Slide::new(WELCOME_TEXT, style, backgrounds.next_background());
        Self {
            input_text: String::new(),
            slide_count: 6,
            active_slide_id: Some(slide.id.clone()),
            slides: vec![slide],
            aspect_ratio: AspectRatio::Portrait,
            summary_bundle: None,
            theme: Theme::Dark,
            quality: 90,
            format: ExportFormat::Png,
        }
    }

    /// Parse a saved project. Projects without slides are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let project: Self = serde_json::from_str(json)?;
        if project.slides.is_empty() {
            return Err(Error::EmptyProject);
        }
        Ok(project)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn slide(&self, slide_id: &str) -> Result<&Slide> {
        self.slides
            .iter()
            .find(|s| s.id == slide_id)
            .ok_or_else(|| Error::SlideNotFound(slide_id.to_string()))
    }

    fn slide_mut(&mut self, slide_id: &str) -> Result<&mut Slide> {
        self.slides
            .iter_mut()
            .find(|s| s.id == slide_id)
            .ok_or_else(|| Error::SlideNotFound(slide_id.to_string()))
    }

    /// The active slide, falling back to the first one.
    pub fn active_slide(&self) -> Option<&Slide> {
        self.active_slide_id
            .as_deref()
            .and_then(|id| self.slides.iter().find(|s| s.id == id))
            .or_else(|| self.slides.first())
    }

    pub fn select_slide(&mut self, slide_id: &str) -> Result<()> {
        self.slide(slide_id)?;
        self.active_slide_id = Some(slide_id.to_string());
        Ok(())
    }

    fn activate_first(&mut self) {
        self.active_slide_id = self.slides.first().map(|s| s.id.clone());
    }

    /// Store a summarization result and reseed the slides from it.
    ///
    /// A `slide_count` of zero is rejected and leaves the project untouched,
    /// since a project always holds at least one slide.
    pub fn apply_summary(
        &mut self,
        bundle: SummaryBundle,
        engine: &SlideEngine,
        backgrounds: &mut dyn BackgroundSource,
    ) -> Result<()> {
        if self.slide_count == 0 {
            return Err(Error::InvalidArgument(
                "slide count must be at least 1".to_string(),
            ));
        }
        self.slides = engine.split(&bundle, self.slide_count, backgrounds);
        self.summary_bundle = Some(bundle);
        self.activate_first();
        Ok(())
    }

    /// Carry overflowing text forward through the slides.
    pub fn reflow(&mut self, engine: &SlideEngine) {
        self.slides = engine.reflow(&self.slides);
    }

    /// Spread all primary text evenly over the slides.
    pub fn balance(&mut self, engine: &SlideEngine) {
        self.slides = engine.balance(&self.slides);
    }

    /// Merge `patch` into one block.
    pub fn patch_block(
        &mut self,
        slide_id: &str,
        block_id: &str,
        patch: &BlockPatch,
    ) -> Result<()> {
        let slide = self.slide_mut(slide_id)?;
        let block = slide
            .text_blocks
            .iter_mut()
            .find(|b| b.id == block_id)
            .ok_or_else(|| Error::BlockNotFound(block_id.to_string()))?;
        *block = block.apply_patch(patch);
        Ok(())
    }

    /// Append a block below the existing ones. Returns the new block id.
    pub fn add_block(&mut self, slide_id: &str, style: &StyleDefaults) -> Result<String> {
        let slide = self.slide_mut(slide_id)?;
        let offset = slide.text_blocks.len() as f64 * 40.0;
        let block = TextBlock::new(NEW_BLOCK_TEXT, style).apply_patch(&BlockPatch {
            position: Some(PositionPatch {
                x: Some(60.0),
                y: Some(60.0 + offset),
            }),
            size: Some(SizePatch {
                width: Some(360.0),
                height: Some(220.0),
            }),
            ..BlockPatch::default()
        });
        let id = block.id.clone();
        slide.text_blocks.push(block);
        Ok(id)
    }

    /// Insert a copy right after the slide. Returns the copy's id.
    pub fn duplicate_slide(&mut self, slide_id: &str) -> Result<String> {
        let index = self
            .slides
            .iter()
            .position(|s| s.id == slide_id)
            .ok_or_else(|| Error::SlideNotFound(slide_id.to_string()))?;
        let copy = self.slides[index].duplicate();
        let id = copy.id.clone();
        self.slides.insert(index + 1, copy);
        Ok(id)
    }

    /// Remove a slide. The last remaining slide cannot be removed.
    pub fn delete_slide(&mut self, slide_id: &str) -> Result<()> {
        self.slide(slide_id)?;
        if self.slides.len() == 1 {
            return Err(Error::LastSlide);
        }
        self.slides.retain(|s| s.id != slide_id);
        self.activate_first();
        Ok(())
    }

    pub fn regenerate_background(
        &mut self,
        slide_id: &str,
        backgrounds: &mut dyn BackgroundSource,
    ) -> Result<()> {
        self.slide_mut(slide_id)?.background = backgrounds.next_background();
        Ok(())
    }

    /// Replace the slides with a fresh copy of a template's slides.
    pub fn apply_template(&mut self, template: &TemplatePreset) {
        self.slides = template.slides.iter().map(Slide::duplicate).collect();
        self.activate_first();
    }

    /// Contrast of a block's text color against its slide's accent.
    pub fn readability(&self, slide_id: &str, block_id: &str) -> Result<f64> {
        let slide = self.slide(slide_id)?;
        let block = slide
            .block(block_id)
            .ok_or_else(|| Error::BlockNotFound(block_id.to_string()))?;
        readability_score(&block.color, &slide.background.accent)
    }

    /// Zero-based positions of slides whose primary text exceeds `limit`.
    pub fn slides_over_limit(&self, limit: usize) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.primary_text().chars().count() > limit)
            .map(|(i, _)| i)
            .collect()
    }
}
