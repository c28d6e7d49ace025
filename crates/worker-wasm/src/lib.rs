//! WASM-compatible wrapper for the carousel engine.
//!
//! Exposes splitting, reflow, balancing, and contrast scoring to the
//! browser editor, which owns the canvas and bitmap export.

use carousel_core::{
    BlockPatch, Error, RandomBackgrounds, Slide, SlideEngine, SummaryBundle, TextBlock,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of checking one block against its slide background.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    /// Contrast ratio rounded to two decimals.
    pub ratio: f64,
    /// Whether the ratio clears the minimum.
    pub readable: bool,
    /// Message to show the user when it does not.
    pub warning: Option<String>,
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

/// Largest count a JS array can hold.
const MAX_COUNT: f64 = u32::MAX as f64;

/// Convert a JS number into a count, rejecting NaN, infinities, negatives,
/// fractions, and values no JS array could hold.
fn to_count(value: f64, name: &str) -> carousel_core::Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_COUNT {
        return Err(Error::InvalidArgument(format!(
            "{} must be an integer between 0 and {}, got {}",
            name, MAX_COUNT, value
        )));
    }
    Ok(value as usize)
}

/// Engine for an optional JS limit; the default limit when absent.
fn engine_for(limit: Option<f64>) -> carousel_core::Result<SlideEngine> {
    let engine = SlideEngine::new();
    match limit {
        Some(limit) => engine.with_limit(to_count(limit, "limit")?),
        None => Ok(engine),
    }
}

/// Split a summary bundle into slides.
///
/// # Arguments
/// * `bundle` - `{ headline, keyIdeas, bullets }`
/// * `count` - Maximum number of slides
/// * `limit` - Characters per slide (default: 100)
#[wasm_bindgen(js_name = splitToSlides)]
pub fn split_to_slides(
    bundle: JsValue,
    count: f64,
    limit: Option<f64>,
) -> Result<JsValue, JsValue> {
    let bundle: SummaryBundle = serde_wasm_bindgen::from_value(bundle)
        .map_err(|e| js_error(format!("Invalid summary bundle: {}", e)))?;

    let slides = split_to_slides_impl(&bundle, count, limit).map_err(js_error)?;

    serde_wasm_bindgen::to_value(&slides)
        .map_err(|e| js_error(format!("Serialization error: {}", e)))
}

fn split_to_slides_impl(
    bundle: &SummaryBundle,
    count: f64,
    limit: Option<f64>,
) -> carousel_core::Result<Vec<Slide>> {
    let count = to_count(count, "count")?;
    let engine = engine_for(limit)?;
    Ok(engine.split(bundle, count, &mut RandomBackgrounds::new()))
}

/// Carry overflowing text forward through the slides.
#[wasm_bindgen(js_name = smartReflow)]
pub fn smart_reflow(slides: JsValue, limit: Option<f64>) -> Result<JsValue, JsValue> {
    let slides: Vec<Slide> = serde_wasm_bindgen::from_value(slides)
        .map_err(|e| js_error(format!("Invalid slides array: {}", e)))?;

    let engine = engine_for(limit).map_err(js_error)?;

    serde_wasm_bindgen::to_value(&engine.reflow(&slides))
        .map_err(|e| js_error(format!("Serialization error: {}", e)))
}

/// Spread all primary text evenly over the slides.
#[wasm_bindgen(js_name = balanceSlides)]
pub fn balance_slides(slides: JsValue, limit: Option<f64>) -> Result<JsValue, JsValue> {
    let slides: Vec<Slide> = serde_wasm_bindgen::from_value(slides)
        .map_err(|e| js_error(format!("Invalid slides array: {}", e)))?;

    let engine = engine_for(limit).map_err(js_error)?;

    serde_wasm_bindgen::to_value(&engine.balance(&slides))
        .map_err(|e| js_error(format!("Serialization error: {}", e)))
}

/// Contrast ratio between two hex colors.
#[wasm_bindgen(js_name = readabilityScore)]
pub fn readability_score(color_a: &str, color_b: &str) -> Result<f64, JsValue> {
    carousel_core::readability_score(color_a, color_b).map_err(js_error)
}

/// Contrast check for a text color over a background accent.
#[wasm_bindgen(js_name = checkReadability)]
pub fn check_readability(text_color: &str, accent: &str) -> Result<JsValue, JsValue> {
    let result = check_readability_impl(text_color, accent).map_err(js_error)?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| js_error(format!("Serialization error: {}", e)))
}

fn check_readability_impl(
    text_color: &str,
    accent: &str,
) -> carousel_core::Result<ReadabilityResult> {
    let ratio = carousel_core::readability_score(text_color, accent)?;
    let readable = carousel_core::is_readable(ratio);
    let warning = (!readable).then(|| {
        format!(
            "Contrast {:.2}:1 is below {}:1, adjust the color or shadow",
            ratio,
            carousel_core::MIN_CONTRAST_RATIO
        )
    });

    Ok(ReadabilityResult {
        ratio,
        readable,
        warning,
    })
}

/// Merge a partial update into a text block.
#[wasm_bindgen(js_name = applyBlockPatch)]
pub fn apply_block_patch(block: JsValue, patch: JsValue) -> Result<JsValue, JsValue> {
    let block: TextBlock = serde_wasm_bindgen::from_value(block)
        .map_err(|e| js_error(format!("Invalid text block: {}", e)))?;
    let patch: BlockPatch = serde_wasm_bindgen::from_value(patch)
        .map_err(|e| js_error(format!("Invalid patch: {}", e)))?;

    serde_wasm_bindgen::to_value(&block.apply_patch(&patch))
        .map_err(|e| js_error(format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_validates_count() {
        let bundle = SummaryBundle::new("H", vec!["A".to_string(), "B".to_string()]);

        let slides = split_to_slides_impl(&bundle, 1.0, None).unwrap();
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].primary_text(), "A");

        assert!(split_to_slides_impl(&bundle, -1.0, None).is_err());
        assert!(split_to_slides_impl(&bundle, f64::NAN, None).is_err());
        assert!(split_to_slides_impl(&bundle, 2.5, None).is_err());
        assert!(split_to_slides_impl(&bundle, 0.0, None).unwrap().is_empty());
    }

    #[test]
    fn test_split_rejects_unbounded_count() {
        let empty = SummaryBundle::default();
        assert!(matches!(
            split_to_slides_impl(&empty, 1e300, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(split_to_slides_impl(&empty, MAX_COUNT + 1.0, None).is_err());
        assert_eq!(to_count(MAX_COUNT, "count").unwrap(), u32::MAX as usize);
    }

    #[test]
    fn test_engine_limit_validation() {
        assert_eq!(engine_for(None).unwrap().limit(), 100);
        assert_eq!(engine_for(Some(60.0)).unwrap().limit(), 60);
        assert!(engine_for(Some(0.0)).is_err());
        assert!(engine_for(Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_check_readability() {
        let result = check_readability_impl("#000000", "#ffffff").unwrap();
        assert_eq!(result.ratio, 21.0);
        assert!(result.readable);
        assert!(result.warning.is_none());

        let result = check_readability_impl("#ffffff", "#f3ffbd").unwrap();
        assert!(!result.readable);
        assert!(result.warning.unwrap().contains("below 4.5:1"));

        assert!(check_readability_impl("#zzz", "#fff").is_err());
    }
}
