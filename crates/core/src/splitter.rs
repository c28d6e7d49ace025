//! Seeding the slide sequence from a summary bundle.

use crate::backgrounds::BackgroundSource;
use crate::config::StyleDefaults;
use crate::limits::clamp_to_limit;
use crate::types::{Slide, SummaryBundle};

/// Text shown on slides when the bundle had nothing to offer.
pub const PLACEHOLDER_TEXT: &str = "Text will appear here after summarization";

/// Build one slide per key idea, clamped to `limit` characters.
///
/// Key ideas win over the headline; the headline is only used when there are
/// no key ideas. At most `count` slides are produced, and fewer when there
/// are fewer usable entries. An empty bundle yields `count` placeholder slides.
pub fn split_to_slides(
    bundle: &SummaryBundle,
    count: usize,
    limit: usize,
    style: &StyleDefaults,
    backgrounds: &mut dyn BackgroundSource,
) -> Vec<Slide> {
    let key_ideas: Vec<&str> = bundle
        .key_ideas
        .iter()
        .map(|idea| idea.trim())
        .filter(|idea| !idea.is_empty())
        .collect();

    let candidates = if key_ideas.is_empty() {
        let headline = bundle.headline.trim();
        if headline.is_empty() {
            Vec::new()
        } else {
            vec![headline]
        }
    } else {
        key_ideas
    };

    let entries: Vec<String> = candidates
        .into_iter()
        .map(|entry| clamp_to_limit(entry, limit))
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() {
        log::debug!("Empty summary bundle, emitting {} placeholder slides", count);
        return (0..count)
            .map(|_| Slide::new(PLACEHOLDER_TEXT, style, backgrounds.next_background()))
            .collect();
    }

    log::debug!(
        "Splitting {} entries into at most {} slides",
        entries.len(),
        count
    );

    entries
        .into_iter()
        .take(count)
        .map(|text| Slide::new(text, style, backgrounds.next_background()))
        .collect()
}
