//! The summarization provider seam and loaders for provider output.
//!
//! Providers themselves (local heuristics, hosted language models) live
//! outside this crate. What they hand back is either a [`SummaryBundle`]
//! directly or a plain-text outline of the form
//!
//! ```text
//! Slide 1: First idea
//! Slide 2: Second idea
//! that continues here
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;
use crate::types::SummaryBundle;

/// Matches a "Slide N:" marker and captures the text after it.
static SLIDE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^slide\s*\d+\s*:?\s*(.*)$").unwrap());

/// Regex to collapse runs of whitespace.
static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Anything that turns source text into a summary bundle.
pub trait Summarizer {
    /// Summarize `text` into at most `slide_count` ranked key ideas.
    fn summarize(&self, text: &str, slide_count: usize) -> Result<SummaryBundle>;
}

/// Collapse whitespace and hard-cut to `limit` characters.
fn condense_entry(parts: &[&str], limit: usize) -> String {
    let joined = parts.join(" ");
    let collapsed = WHITESPACE_REGEX.replace_all(&joined, " ");
    let trimmed = collapsed.trim();
    trimmed
        .chars()
        .take(limit)
        .collect::<String>()
        .trim_end()
        .to_string()
}

impl SummaryBundle {
    /// Parse a "Slide N: ..." outline into key ideas, first idea as headline.
    ///
    /// Lines before the first marker are ignored, and lines after a marker
    /// are joined onto that slide's entry. Returns an empty bundle when no
    /// marker is present.
    pub fn from_outline(content: &str, limit: usize) -> Self {
        let mut entries: Vec<String> = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();
        let mut collecting = false;

        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(caps) = SLIDE_MARKER_REGEX.captures(line) {
                if !buffer.is_empty() {
                    entries.push(condense_entry(&buffer, limit));
                    buffer.clear();
                }
                collecting = true;
                if let Some(first) = caps.get(1).map(|m| m.as_str().trim()) {
                    if !first.is_empty() {
                        buffer.push(first);
                    }
                }
            } else if collecting {
                buffer.push(line);
            }
        }
        if !buffer.is_empty() {
            entries.push(condense_entry(&buffer, limit));
        }

        entries.retain(|e| !e.is_empty());
        log::debug!("Parsed {} outline entries", entries.len());

        Self::new(entries.first().cloned().unwrap_or_default(), entries)
    }

    /// Treat every non-empty line as a key idea, first line as headline.
    pub fn from_lines(content: &str) -> Self {
        let ideas: Vec<String> = content
            .lines()
            .map(|l| WHITESPACE_REGEX.replace_all(l.trim(), " ").to_string())
            .filter(|l| !l.is_empty())
            .collect();

        Self::new(ideas.first().cloned().unwrap_or_default(), ideas)
    }
}

/// Summarizer over text that is already an outline.
///
/// Uses the "Slide N:" structure when present, otherwise one idea per line.
#[derive(Debug, Clone)]
pub struct OutlineSummarizer {
    limit: usize,
}

impl OutlineSummarizer {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Summarizer for OutlineSummarizer {
    fn summarize(&self, text: &str, slide_count: usize) -> Result<SummaryBundle> {
        if text.trim().is_empty() {
            return Ok(SummaryBundle::default());
        }

        let mut bundle = SummaryBundle::from_outline(text, self.limit);
        if bundle.key_ideas.is_empty() {
            bundle = SummaryBundle::from_lines(text);
        }
        bundle.key_ideas.truncate(slide_count);
        Ok(bundle)
    }
}
