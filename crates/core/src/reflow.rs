//! Carry-forward reflow of overflowing slide text.

use crate::config::StyleDefaults;
use crate::limits::{clamp_to_limit, distribute_overflow, Overflow};
use crate::types::{Slide, TextBlock};

fn primary_mut(slides: &mut [Slide], index: usize) -> &mut TextBlock {
    // Every slide is seeded with a block before the walk starts.
    &mut slides[index].text_blocks[0]
}

/// Push text beyond `limit` characters forward into the following slides.
///
/// Each slide's primary block is cut at a sentence or word boundary and the
/// remainder is prepended to the next slide's primary block, cascading until
/// it fits. Overflow from the final slide has nowhere to go and is dropped.
/// Backgrounds and secondary blocks are left as they were. Slides without
/// any block get an empty one in `style`.
pub fn smart_reflow(slides: &[Slide], limit: usize, style: &StyleDefaults) -> Vec<Slide> {
    let mut out = slides.to_vec();
    for slide in &mut out {
        if slide.text_blocks.is_empty() {
            slide.text_blocks.push(TextBlock::new("", style));
        }
    }

    let len = out.len();
    for start in 0..len {
        let mut pointer = start;

        while primary_mut(&mut out, pointer).char_len() > limit {
            let block = primary_mut(&mut out, pointer);
            let Overflow { keep, overflow } = distribute_overflow(&block.text, limit);

            if overflow.is_empty() {
                block.text = keep;
                break;
            }

            if pointer + 1 >= len {
                log::debug!(
                    "Slide {} overflows with no slide after it, dropping {} chars",
                    pointer + 1,
                    overflow.chars().count()
                );
                block.text = clamp_to_limit(&keep, limit);
                break;
            }

            block.text = keep;
            pointer += 1;
            log::debug!(
                "Carrying {} chars from slide {} into slide {}",
                overflow.chars().count(),
                pointer,
                pointer + 1
            );

            let next = primary_mut(&mut out, pointer);
            next.text = format!("{}\n{}", overflow, next.text).trim().to_string();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backgrounds::{BackgroundSource, FixedBackground};
    use crate::config::DEFAULT_TEXT_LIMIT;
    use proptest::prelude::*;

    fn slides(texts: &[&str]) -> Vec<Slide> {
        let style = StyleDefaults::default();
        let mut backgrounds = FixedBackground::default();
        texts
            .iter()
            .map(|t| Slide::new(*t, &style, backgrounds.next_background()))
            .collect()
    }

    fn reflow(input: &[Slide], limit: usize) -> Vec<Slide> {
        smart_reflow(input, limit, &StyleDefaults::default())
    }

    fn texts(slides: &[Slide]) -> Vec<String> {
        slides.iter().map(|s| s.primary_text().to_string()).collect()
    }

    #[test]
    fn test_fitting_slides_unchanged() {
        let input = slides(&["Short one", "Short two"]);
        assert_eq!(reflow(&input, DEFAULT_TEXT_LIMIT), input);
    }

    #[test]
    fn test_last_slide_is_hard_clamped() {
        let long = "a".repeat(250);
        let out = reflow(&slides(&[&long]), 100);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].primary_text(), "a".repeat(100));
    }

    #[test]
    fn test_overflow_is_prepended_to_next_slide() {
        let first = "First sentence is right here. Second sentence follows it. Third one spills over the edge.";
        let out = reflow(&slides(&[first, "Existing tail"]), 60);

        assert_eq!(
            out[0].primary_text(),
            "First sentence is right here. Second sentence follows it."
        );
        assert_eq!(
            out[1].primary_text(),
            "Third one spills over the edge.\nExisting tail"
        );
    }

    #[test]
    fn test_overflow_cascades_through_slides() {
        let words = "lorem ipsum dolor sit amet ".repeat(6);
        let out = reflow(&slides(&[&words, "", ""]), 40);

        assert_eq!(out.len(), 3);
        for slide in &out {
            assert!(slide.primary_text().chars().count() <= 40);
            assert!(!slide.primary_text().is_empty());
        }
        let joined = texts(&out).join(" ");
        assert!(joined.starts_with("lorem ipsum dolor sit amet lorem"));
    }

    #[test]
    fn test_slide_without_blocks_is_seeded() {
        let mut input = slides(&["x".repeat(30).as_str(), "tail"]);
        input[1].text_blocks.clear();

        let out = reflow(&input, 20);
        assert_eq!(out[1].text_blocks.len(), 1);
        assert_eq!(out[0].primary_text(), "x".repeat(20));
        assert_eq!(out[1].primary_text(), "x".repeat(10));
    }

    #[test]
    fn test_secondary_blocks_and_background_preserved() {
        let mut input = slides(&[&"word ".repeat(12), "next"]);
        input[0]
            .text_blocks
            .push(TextBlock::new("word ".repeat(30), &StyleDefaults::default()));

        let out = reflow(&input, 50);
        assert_eq!(out[0].background, input[0].background);
        assert_eq!(out[0].text_blocks[1], input[0].text_blocks[1]);
        assert_eq!(out[0].text_blocks[0].id, input[0].text_blocks[0].id);
        assert_eq!(out[1].primary_text(), "word word\nnext");
    }

    #[test]
    fn test_input_is_not_aliased() {
        let input = slides(&[&"z".repeat(150), ""]);
        let _ = reflow(&input, 100);
        assert_eq!(input[0].primary_text().len(), 150);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_reflow_bounds_and_idempotence(
            raw in prop::collection::vec("[a-z]{1,12}( [a-z]{1,12}){0,20}\\.?", 1..6),
            limit in 20usize..120,
        ) {
            let refs: Vec<&str> = raw.iter().map(|s| s.as_str()).collect();
            let input = slides(&refs);

            let once = reflow(&input, limit);
            prop_assert_eq!(once.len(), input.len());
            for slide in &once {
                prop_assert!(slide.primary_text().chars().count() <= limit);
            }

            let twice = reflow(&once, limit);
            prop_assert_eq!(texts(&twice), texts(&once));
        }
    }
}
