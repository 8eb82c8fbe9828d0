/// A named prompt that replaces the current prompt text when applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    /// Short identifier used on the command line.
    pub name: &'static str,
    /// Prompt text written into the studio.
    pub prompt: &'static str,
}

/// Built-in presets, in display order.
pub const PRESETS: [Preset; 3] = [
    Preset {
        name: "interview",
        prompt: "Interview setup, warm key light, close portrait framing, slow dolly in, 10 seconds",
    },
    Preset {
        name: "noir",
        prompt: "Black and white chiaroscuro, backlit silhouette, thick haze, pan across the figure",
    },
    Preset {
        name: "showcase",
        prompt: "Minimal desaturated stage, wide shot, gentle orbit around the figure, 5s",
    },
];

/// Look up a preset by name (case-insensitive).
pub fn find_preset(name: &str) -> Option<Preset> {
    PRESETS
        .iter()
        .copied()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/presets.rs"]
mod tests;
