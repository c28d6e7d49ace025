//! Boundary-aware clamping of text to a character budget.
//!
//! All lengths here are counted in `char`s, not bytes, so multi-byte scripts
//! get the same budget as ASCII.

/// Characters that end a sentence.
const SENTENCE_ENDINGS: [char; 3] = ['.', '!', '?'];

/// Shortest fragment, in characters, worth keeping before a boundary cut.
const MIN_KEEP_CHARS: usize = 20;

/// Result of splitting text at the character limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overflow {
    /// Leading part that fits within the limit.
    pub keep: String,

    /// Remainder to carry elsewhere. Empty when everything fit.
    pub overflow: String,
}

/// Cut position below which a boundary is ignored: 40% of the limit, but
/// never less than [`MIN_KEEP_CHARS`].
fn min_boundary(limit: usize) -> usize {
    MIN_KEEP_CHARS.max(limit * 2 / 5)
}

/// Byte offset of the `n`-th character, or the end of the string.
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Split `text` into a part of at most `limit` characters and the rest.
///
/// Prefers to cut after the last sentence ending in the window, then at the
/// last space, as long as the cut lands at or past [`min_boundary`].
/// Otherwise it cuts mid-word at exactly `limit`.
pub fn distribute_overflow(text: &str, limit: usize) -> Overflow {
    let trimmed = text.trim();
    if trimmed.chars().count() <= limit {
        return Overflow {
            keep: trimmed.to_string(),
            overflow: String::new(),
        };
    }

    let window_end = byte_offset(trimmed, limit);
    let window = &trimmed[..window_end];
    let floor = min_boundary(limit);

    if let Some(idx) = window.rfind(SENTENCE_ENDINGS) {
        if window[..idx].chars().count() >= floor {
            // Sentence endings are ASCII, so the boundary is one byte on.
            let boundary = idx + 1;
            let keep = window[..boundary].trim();
            if !keep.is_empty() {
                return Overflow {
                    keep: keep.to_string(),
                    overflow: trimmed[boundary..].trim().to_string(),
                };
            }
        }
    }

    let boundary = match window.rfind(' ') {
        Some(idx) if window[..idx].chars().count() >= floor => idx,
        _ => window_end,
    };

    Overflow {
        keep: window[..boundary].trim().to_string(),
        overflow: trimmed[boundary..].trim().to_string(),
    }
}

/// Trim `text` and shorten it to at most `limit` characters at a safe boundary.
///
/// A `limit` of 0 or 1 yields the first character of non-empty text.
pub fn clamp_to_limit(text: &str, limit: usize) -> String {
    let value = text.trim();
    if value.chars().count() <= limit {
        return value.to_string();
    }
    if limit <= 1 {
        return value.chars().take(1).collect();
    }
    distribute_overflow(value, limit).keep
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_short_text_is_kept_whole() {
        let result = distribute_overflow("  Short text  ", 100);
        assert_eq!(result.keep, "Short text");
        assert_eq!(result.overflow, "");
    }

    #[test]
    fn test_cut_after_sentence() {
        let result = distribute_overflow("This is sentence one. This is sentence two.", 25);
        assert_eq!(result.keep, "This is sentence one.");
        assert_eq!(result.overflow, "This is sentence two.");
    }

    #[test]
    fn test_sentence_before_floor_falls_back_to_space() {
        // The '!' sits at index 3, well before the 20 char floor.
        let text = "Wow! this sentence keeps going without any stop at all for a while";
        let result = distribute_overflow(text, 30);
        assert_eq!(result.keep, "Wow! this sentence keeps");
        assert_eq!(result.overflow, "going without any stop at all for a while");
    }

    #[test]
    fn test_hard_cut_without_boundary() {
        let text = "a".repeat(50);
        let result = distribute_overflow(&text, 30);
        assert_eq!(len(&result.keep), 30);
        assert_eq!(len(&result.overflow), 20);
    }

    #[test]
    fn test_small_limit_always_hard_cuts() {
        // With a limit under the floor no boundary qualifies.
        let result = distribute_overflow("one two three", 5);
        assert_eq!(result.keep, "one t");
        assert_eq!(result.overflow, "wo three");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "Привет мир. Это второе предложение, которое не помещается в лимит.";
        let result = distribute_overflow(text, 30);
        assert!(len(&result.keep) <= 30);
        assert_eq!(result.keep, "Привет мир. Это второе");
        assert_eq!(result.overflow, "предложение, которое не помещается в лимит.");
    }

    #[test]
    fn test_clamp_within_limit_is_trimmed() {
        assert_eq!(clamp_to_limit("  hello  ", 10), "hello");
        assert_eq!(clamp_to_limit("", 10), "");
    }

    #[test]
    fn test_clamp_single_character_escape_hatch() {
        assert_eq!(clamp_to_limit("hello", 1), "h");
        assert_eq!(clamp_to_limit("hello", 0), "h");
        assert_eq!(clamp_to_limit("ёж", 1), "ё");
    }

    #[test]
    fn test_clamp_uses_word_boundary() {
        let text = "The quick brown fox jumps over the lazy dog and keeps running";
        assert_eq!(clamp_to_limit(text, 40), "The quick brown fox jumps over the lazy");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_clamp_is_idempotent(text in "[a-zA-Zа-я .!?]{0,300}", limit in 1usize..150) {
            let once = clamp_to_limit(&text, limit);
            prop_assert_eq!(clamp_to_limit(&once, limit), once);
        }

        #[test]
        fn prop_clamp_respects_bound(text in "[a-z .!?\n]{0,300}", limit in 2usize..150) {
            prop_assert!(len(&clamp_to_limit(&text, limit)) <= limit);
        }

        #[test]
        fn prop_overflow_bounds(text in "[a-zA-Z .!?]{0,300}", limit in 1usize..150) {
            let result = distribute_overflow(&text, limit);
            prop_assert!(len(&result.keep) <= limit);
            if !result.overflow.is_empty() {
                prop_assert!(len(&result.keep) < len(text.trim()));
            }
        }
    }
}
