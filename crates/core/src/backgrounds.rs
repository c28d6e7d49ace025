//! Background presets and the sources that hand them out to new slides.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::factory::new_id;

/// Grain overlay layered on top of every gradient.
const NOISE: &str = "url(\"data:image/svg+xml,%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%20width%3D%22400%22%20height%3D%22400%22%3E%3Cfilter%20id%3D%22n%22%3E%3CfeTurbulence%20type%3D%22fractalNoise%22%20baseFrequency%3D%220.8%22%20numOctaves%3D%224%22%20stitchTiles%3D%22stitch%22%2F%3E%3CfeColorMatrix%20type%3D%22saturate%22%20values%3D%220%22%2F%3E%3C%2Ffilter%3E%3Crect%20width%3D%22100%25%22%20height%3D%22100%25%22%20filter%3D%22url(%23n)%22%20opacity%3D%220.6%22%2F%3E%3C%2Fsvg%3E\")";

/// Fill description plus the accent color used for contrast checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Opaque unique identifier.
    pub id: String,

    /// CSS fill description (gradient layers).
    pub css: String,

    /// Accent color as a hex string.
    pub accent: String,

    /// Human-readable name of the preset.
    pub label: String,
}

/// A named background recipe without an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub gradient: &'static str,
    pub accent: &'static str,
    pub label: &'static str,
}

impl Preset {
    /// Materialize the preset with a fresh id.
    pub fn instantiate(&self) -> Background {
        Background {
            id: new_id(),
            css: format!("{}, {}", self.gradient, NOISE),
            accent: self.accent.to_string(),
            label: self.label.to_string(),
        }
    }
}

pub const MINIMAL_MIST: Preset = Preset {
    gradient: "linear-gradient(135deg, #fdfbfb 0%, #ebedee 100%)",
    accent: "#111322",
    label: "Minimal mist",
};

pub const PASTEL_BREEZE: Preset = Preset {
    gradient: "linear-gradient(120deg, #fad0c4 0%, #ffd1ff 100%)",
    accent: "#861657",
    label: "Pastel breeze",
};

pub const DARK_NEON: Preset = Preset {
    gradient: "radial-gradient(circle at 30% 30%, #003973 0%, #e5e5be 100%)",
    accent: "#f3ffbd",
    label: "Dark neon",
};

pub const KRAFT_TEXTURE: Preset = Preset {
    gradient: "linear-gradient(135deg, #f1ece4 0%, #d8c4a0 43%, #c0a080 100%)",
    accent: "#5f4b32",
    label: "Kraft texture",
};

pub const SUNSET_BLOOM: Preset = Preset {
    gradient: "linear-gradient(120deg, #f6d365 0%, #fda085 100%)",
    accent: "#c7512c",
    label: "Sunset bloom",
};

pub const PASTEL_CLOUD: Preset = Preset {
    gradient: "radial-gradient(circle at 20% 20%, #d9afd9 0%, #97d9e1 100%)",
    accent: "#764ba2",
    label: "Pastel cloud",
};

pub const NEON_NIGHT: Preset = Preset {
    gradient: "linear-gradient(135deg, #0f0c29 0%, #302b63 50%, #24243e 100%)",
    accent: "#88e1ff",
    label: "Neon night",
};

/// Pool the random source draws from. Kraft appears twice, so it comes up
/// slightly more often.
pub const PALETTE: [Preset; 8] = [
    MINIMAL_MIST,
    PASTEL_BREEZE,
    DARK_NEON,
    KRAFT_TEXTURE,
    SUNSET_BLOOM,
    PASTEL_CLOUD,
    NEON_NIGHT,
    KRAFT_TEXTURE,
];

/// Supplies a background for every newly created slide.
pub trait BackgroundSource {
    /// Produce a new background with its own id.
    fn next_background(&mut self) -> Background;
}

/// Uniform random choice over [`PALETTE`].
#[derive(Debug, Clone, Default)]
pub struct RandomBackgrounds;

impl RandomBackgrounds {
    pub fn new() -> Self {
        Self
    }
}

impl BackgroundSource for RandomBackgrounds {
    fn next_background(&mut self) -> Background {
        let index = rand::thread_rng().gen_range(0..PALETTE.len());
        PALETTE[index].instantiate()
    }
}

/// Always hands out the same preset. Used wherever output must be deterministic.
#[derive(Debug, Clone)]
pub struct FixedBackground {
    preset: Preset,
}

impl FixedBackground {
    pub fn new(preset: Preset) -> Self {
        Self { preset }
    }
}

impl Default for FixedBackground {
    fn default() -> Self {
        Self::new(MINIMAL_MIST)
    }
}

impl BackgroundSource for FixedBackground {
    fn next_background(&mut self) -> Background {
        self.preset.instantiate()
    }
}
