//! Even redistribution of primary text across all slides.

use crate::limits::clamp_to_limit;
use crate::types::Slide;

/// Spread the combined primary text of all slides evenly over the same slides.
///
/// Words are packed greedily in reading order while the slide stays strictly
/// under the per-slide share `ceil(total / slides)`. Every slide takes at least
/// one word when any remain. Leftover words land on the last slide, which is
/// then clamped to `limit`. Slides without blocks are skipped, and the input
/// is returned as is when there is no text at all.
pub fn balance_slides(slides: &[Slide], limit: usize) -> Vec<Slide> {
    let combined = slides
        .iter()
        .map(|slide| slide.primary_text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let combined = combined.trim();

    if combined.is_empty() {
        return slides.to_vec();
    }

    let target = combined.chars().count().div_ceil(slides.len());
    let words: Vec<&str> = combined.split(' ').collect();
    log::debug!(
        "Balancing {} words over {} slides, target {} chars each",
        words.len(),
        slides.len(),
        target
    );

    let mut out = slides.to_vec();
    let mut pointer = 0;

    for slide in &mut out {
        let Some(block) = slide.primary_block_mut() else {
            continue;
        };

        let mut text = String::new();
        while pointer < words.len()
            && text.chars().count() + words[pointer].chars().count() + 1 < target
        {
            text = format!("{} {}", text, words[pointer]).trim().to_string();
            pointer += 1;
        }

        if text.is_empty() {
            text = words.get(pointer).map(|w| w.to_string()).unwrap_or_default();
            pointer += 1;
        }
        block.text = text;
    }

    if pointer < words.len() {
        let remainder = words[pointer..].join(" ");
        if let Some(last) = out.last_mut().and_then(|s| s.primary_block_mut()) {
            let merged = format!("{} {}", last.text, remainder);
            last.text = clamp_to_limit(&merged, limit);
        }
    }

    out
}
