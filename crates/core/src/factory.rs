//! Construction of slides and blocks, and field-level block patches.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backgrounds::Background;
use crate::config::StyleDefaults;
use crate::types::{Position, Shadow, Size, Slide, TextAlign, TextBlock, TextStyle, TextWeight};

/// Smallest box the renderer accepts, in layout units.
pub const MIN_BLOCK_SIZE: f64 = 1.0;

/// Generate a new opaque identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl TextBlock {
    /// Create a block carrying `text` in the baseline style.
    pub fn new(text: impl Into<String>, style: &StyleDefaults) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            font_size: style.font_size,
            font_family: style.font_family.clone(),
            color: style.color.clone(),
            font_weight: style.font_weight,
            font_style: style.font_style,
            align: style.align,
            shadow: style.shadow.clone(),
            position: style.position,
            size: style.size,
            background_opacity: style.background_opacity,
        }
    }

    /// Return a copy of this block with `patch` merged in.
    ///
    /// Scalar fields are replaced when present. `position`, `size`, and
    /// `shadow` merge field by field, so a patch touching only `shadow.blur`
    /// leaves the other shadow knobs alone. Sizes never drop below
    /// [`MIN_BLOCK_SIZE`] and opacities stay within 0..=1.
    pub fn apply_patch(&self, patch: &BlockPatch) -> TextBlock {
        let mut next = self.clone();

        if let Some(text) = &patch.text {
            next.text = text.clone();
        }
        if let Some(font_size) = patch.font_size {
            next.font_size = font_size;
        }
        if let Some(font_family) = &patch.font_family {
            next.font_family = font_family.clone();
        }
        if let Some(color) = &patch.color {
            next.color = color.clone();
        }
        if let Some(weight) = patch.font_weight {
            next.font_weight = weight;
        }
        if let Some(style) = patch.font_style {
            next.font_style = style;
        }
        if let Some(align) = patch.align {
            next.align = align;
        }
        if let Some(opacity) = patch.background_opacity {
            next.background_opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(position) = &patch.position {
            next.position = position.merge(next.position);
        }
        if let Some(size) = &patch.size {
            next.size = size.merge(next.size);
        }
        if let Some(shadow) = &patch.shadow {
            next.shadow = shadow.merge(&next.shadow);
        }

        next
    }
}

impl Slide {
    /// Create a slide with one primary block holding `text`.
    pub fn new(text: impl Into<String>, style: &StyleDefaults, background: Background) -> Self {
        Self {
            id: new_id(),
            background,
            text_blocks: vec![TextBlock::new(text, style)],
        }
    }

    /// Deep copy with fresh slide and block ids. The background is kept as is.
    pub fn duplicate(&self) -> Self {
        Self {
            id: new_id(),
            background: self.background.clone(),
            text_blocks: self
                .text_blocks
                .iter()
                .map(|block| TextBlock {
                    id: new_id(),
                    ..block.clone()
                })
                .collect(),
        }
    }
}

/// Partial update to a [`TextBlock`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockPatch {
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub color: Option<String>,
    pub font_weight: Option<TextWeight>,
    pub font_style: Option<TextStyle>,
    pub align: Option<TextAlign>,
    pub shadow: Option<ShadowPatch>,
    pub position: Option<PositionPatch>,
    pub size: Option<SizePatch>,
    pub background_opacity: Option<f64>,
}

impl BlockPatch {
    /// Patch that only replaces the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowPatch {
    pub enabled: Option<bool>,
    pub blur: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
}

impl ShadowPatch {
    fn merge(&self, base: &Shadow) -> Shadow {
        Shadow {
            enabled: self.enabled.unwrap_or(base.enabled),
            blur: self.blur.unwrap_or(base.blur),
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            color: self.color.clone().unwrap_or_else(|| base.color.clone()),
            opacity: self.opacity.unwrap_or(base.opacity).clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl PositionPatch {
    fn merge(&self, base: Position) -> Position {
        Position {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizePatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl SizePatch {
    fn merge(&self, base: Size) -> Size {
        Size {
            width: self.width.unwrap_or(base.width).max(MIN_BLOCK_SIZE),
            height: self.height.unwrap_or(base.height).max(MIN_BLOCK_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backgrounds::{BackgroundSource, FixedBackground};

    fn block() -> TextBlock {
        TextBlock::new("Hello", &StyleDefaults::default())
    }

    #[test]
    fn test_new_block_uses_style() {
        let mut style = StyleDefaults::default();
        style.font_family = "Rubik".to_string();
        let block = TextBlock::new("Hi", &style);

        assert_eq!(block.text, "Hi");
        assert_eq!(block.font_family, "Rubik");
        assert_eq!(block.size, style.size);
        assert_eq!(block.id.len(), 36);
    }

    #[test]
    fn test_patch_replaces_scalars() {
        let original = block();
        let patched = original.apply_patch(&BlockPatch {
            text: Some("Bye".to_string()),
            align: Some(TextAlign::Center),
            font_size: Some(52.0),
            ..BlockPatch::default()
        });

        assert_eq!(patched.text, "Bye");
        assert_eq!(patched.align, TextAlign::Center);
        assert_eq!(patched.font_size, 52.0);
        assert_eq!(patched.id, original.id);
        assert_eq!(original.text, "Hello");
    }

    #[test]
    fn test_patch_merges_nested_fields() {
        let original = block();
        let patched = original.apply_patch(&BlockPatch {
            shadow: Some(ShadowPatch {
                blur: Some(4.0),
                ..ShadowPatch::default()
            }),
            position: Some(PositionPatch {
                y: Some(10.0),
                ..PositionPatch::default()
            }),
            size: Some(SizePatch {
                width: Some(200.0),
                height: None,
            }),
            ..BlockPatch::default()
        });

        assert_eq!(patched.shadow.blur, 4.0);
        assert_eq!(patched.shadow.y, original.shadow.y);
        assert_eq!(patched.shadow.enabled, original.shadow.enabled);
        assert_eq!(patched.position.x, original.position.x);
        assert_eq!(patched.position.y, 10.0);
        assert_eq!(patched.size.width, 200.0);
        assert_eq!(patched.size.height, original.size.height);
    }

    #[test]
    fn test_patch_keeps_render_invariants() {
        let patched = block().apply_patch(&BlockPatch {
            background_opacity: Some(1.7),
            size: Some(SizePatch {
                width: Some(-20.0),
                height: Some(0.0),
            }),
            shadow: Some(ShadowPatch {
                opacity: Some(-0.2),
                ..ShadowPatch::default()
            }),
            ..BlockPatch::default()
        });

        assert_eq!(patched.background_opacity, 1.0);
        assert_eq!(patched.size.width, MIN_BLOCK_SIZE);
        assert_eq!(patched.size.height, MIN_BLOCK_SIZE);
        assert_eq!(patched.shadow.opacity, 0.0);
    }

    #[test]
    fn test_patch_from_json() {
        let patch: BlockPatch = serde_json::from_str(r#"{"shadow":{"enabled":false}}"#).unwrap();
        let patched = block().apply_patch(&patch);
        assert!(!patched.shadow.enabled);
        assert_eq!(patched.text, "Hello");
    }

    #[test]
    fn test_duplicate_refreshes_ids() {
        let mut slide = Slide::new(
            "One",
            &StyleDefaults::default(),
            FixedBackground::default().next_background(),
        );
        slide.text_blocks.push(TextBlock::new("Two", &StyleDefaults::default()));

        let copy = slide.duplicate();
        assert_ne!(copy.id, slide.id);
        assert_eq!(copy.background, slide.background);
        assert_eq!(copy.text_blocks.len(), 2);
        for (a, b) in copy.text_blocks.iter().zip(&slide.text_blocks) {
            assert_ne!(a.id, b.id);
            assert_eq!(a.text, b.text);
        }
    }
}
