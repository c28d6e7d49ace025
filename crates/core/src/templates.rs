//! Ready-made slide sets the user can start from.

use serde::{Deserialize, Serialize};

use crate::backgrounds::{Preset, DARK_NEON, KRAFT_TEXTURE, MINIMAL_MIST, PASTEL_BREEZE};
use crate::config::StyleDefaults;
use crate::types::{Shadow, Size, Slide};

/// A named, pre-filled slide sequence sharing one background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePreset {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Label of the background the template uses.
    pub palette_hint: String,
    pub slides: Vec<Slide>,
}

fn preset(
    id: &str,
    name: &str,
    description: &str,
    background: Preset,
    texts: [&str; 4],
    style: &StyleDefaults,
) -> TemplatePreset {
    let shared = background.instantiate();
    TemplatePreset {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        palette_hint: background.label.to_string(),
        slides: texts
            .iter()
            .map(|text| Slide::new(*text, style, shared.clone()))
            .collect(),
    }
}

/// Block style shared by every template: a slightly smaller grotesque face
/// with a tighter shadow and box than the editor default.
pub fn template_style() -> StyleDefaults {
    let base = StyleDefaults::default();
    StyleDefaults {
        font_size: 36.0,
        font_family: "Space Grotesk".to_string(),
        shadow: Shadow {
            y: 10.0,
            ..base.shadow.clone()
        },
        size: Size {
            width: 400.0,
            height: 320.0,
        },
        ..base
    }
}

/// The built-in template presets, with blocks in [`template_style`].
pub fn template_library() -> Vec<TemplatePreset> {
    let style = &template_style();
    vec![
        preset(
            "minimalism",
            "Minimalism",
            "Clean grey backdrop and strict typography.",
            MINIMAL_MIST,
            [
                "Focus on what matters",
                "Leave plenty of air",
                "Use short thoughts",
                "Close with a strong takeaway",
            ],
            style,
        ),
        preset(
            "pastel",
            "Pastel gradient",
            "Soft blends and calm colors.",
            PASTEL_BREEZE,
            [
                "A gentle opening",
                "The main idea",
                "A practical tip",
                "The final insight",
            ],
            style,
        ),
        preset(
            "neon",
            "Dark neon",
            "Deep backdrop with bright accents.",
            DARK_NEON,
            [
                "A bold headline",
                "A clear statement",
                "A short list",
                "A call to action",
            ],
            style,
        ),
        preset(
            "kraft",
            "Kraft texture",
            "Warm paper backdrop with a handmade feel.",
            KRAFT_TEXTURE,
            [
                "Add some warmth",
                "Tell a story",
                "Highlight the emotion",
                "Finish with atmosphere",
            ],
            style,
        ),
    ]
}
