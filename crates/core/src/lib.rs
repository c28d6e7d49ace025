//! Core slide model, character-budget text distribution, and readability
//! scoring for summary-driven text carousels.

pub mod backgrounds;
pub mod balance;
pub mod config;
pub mod error;
pub mod factory;
pub mod limits;
pub mod outline;
pub mod project;
pub mod readability;
pub mod reflow;
pub mod splitter;
pub mod templates;
pub mod types;

pub use backgrounds::{Background, BackgroundSource, FixedBackground, RandomBackgrounds};
pub use balance::balance_slides;
pub use config::{EngineConfig, SlideEngine, StyleDefaults, DEFAULT_TEXT_LIMIT};
pub use error::{Error, Result};
pub use factory::{new_id, BlockPatch, PositionPatch, ShadowPatch, SizePatch};
pub use limits::{clamp_to_limit, distribute_overflow, Overflow};
pub use outline::{OutlineSummarizer, Summarizer};
pub use project::{AspectRatio, ExportFormat, Project, Theme};
pub use readability::{is_readable, readability_score, Rgb, MIN_CONTRAST_RATIO};
pub use reflow::smart_reflow;
pub use splitter::{split_to_slides, PLACEHOLDER_TEXT};
pub use templates::{template_library, template_style, TemplatePreset};
pub use types::{
    Position, Shadow, Size, Slide, SummaryBundle, TextAlign, TextBlock, TextStyle, TextWeight,
};
