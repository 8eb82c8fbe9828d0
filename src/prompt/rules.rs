use crate::prompt::settings::{CameraMove, SceneSettings};

/// Settings field a rule writes. Each field is written by at most one rule per prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Field {
    Warm,
    HighContrast,
    FogDensity,
    Backlit,
    Spotlight,
    Monochrome,
    Desaturated,
    Fov,
    Move,
    Duration,
}

impl Field {
    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Substring predicate over a lowercased prompt.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Matcher {
    /// Any of the needles occurs.
    Any(&'static [&'static str]),
    /// Any of the first needles occurs, and any of the second ones too.
    Both(&'static [&'static str], &'static [&'static str]),
}

impl Matcher {
    pub(crate) fn matches(self, lowered: &str) -> bool {
        fn any(lowered: &str, needles: &[&str]) -> bool {
            needles.iter().any(|n| lowered.contains(n))
        }
        match self {
            Self::Any(a) => any(lowered, a),
            Self::Both(a, b) => any(lowered, a) && any(lowered, b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Effect {
    Warm,
    HighContrast,
    Backlit,
    Spotlight,
    Monochrome,
    Desaturated,
    FogDensity(f64),
    FovDeg(f64),
    Move(CameraMove),
    DurationSecs(u32),
}

impl Effect {
    pub(crate) fn field(self) -> Field {
        match self {
            Self::Warm => Field::Warm,
            Self::HighContrast => Field::HighContrast,
            Self::Backlit => Field::Backlit,
            Self::Spotlight => Field::Spotlight,
            Self::Monochrome => Field::Monochrome,
            Self::Desaturated => Field::Desaturated,
            Self::FogDensity(_) => Field::FogDensity,
            Self::FovDeg(_) => Field::Fov,
            Self::Move(_) => Field::Move,
            Self::DurationSecs(_) => Field::Duration,
        }
    }

    pub(crate) fn apply(self, s: &mut SceneSettings) {
        match self {
            Self::Warm => s.warm = true,
            Self::HighContrast => s.high_contrast = true,
            Self::Backlit => s.backlit = true,
            Self::Spotlight => s.spotlight = true,
            Self::Monochrome => s.monochrome = true,
            Self::Desaturated => s.desaturated = true,
            Self::FogDensity(d) => s.fog_density = d,
            Self::FovDeg(f) => s.fov_deg = f,
            Self::Move(m) => s.camera_move = m,
            Self::DurationSecs(d) => s.duration_secs = d,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Rule {
    pub(crate) when: Matcher,
    pub(crate) then: Effect,
}

const FOG: &[&str] = &["fog", "haze"];

/// Ordered rule table. Within one field, earlier rules take priority.
pub(crate) const RULES: &[Rule] = &[
    Rule {
        when: Matcher::Any(&["warm", "gold", "sunset"]),
        then: Effect::Warm,
    },
    Rule {
        when: Matcher::Any(&["high contrast", "chiaroscuro", "dramatic"]),
        then: Effect::HighContrast,
    },
    Rule {
        when: Matcher::Both(FOG, &["thick"]),
        then: Effect::FogDensity(0.035),
    },
    Rule {
        when: Matcher::Any(FOG),
        then: Effect::FogDensity(0.015),
    },
    Rule {
        when: Matcher::Any(&["backlit", "rim light", "silhouette"]),
        then: Effect::Backlit,
    },
    Rule {
        when: Matcher::Any(&["spotlight", "stage", "interview"]),
        then: Effect::Spotlight,
    },
    Rule {
        when: Matcher::Any(&["monochrome", "black and white"]),
        then: Effect::Monochrome,
    },
    Rule {
        when: Matcher::Any(&["desaturated", "minimal"]),
        then: Effect::Desaturated,
    },
    Rule {
        when: Matcher::Any(&["wide"]),
        then: Effect::FovDeg(60.0),
    },
    Rule {
        when: Matcher::Any(&["close", "portrait"]),
        then: Effect::FovDeg(35.0),
    },
    Rule {
        when: Matcher::Any(&["dolly"]),
        then: Effect::Move(CameraMove::DollyIn),
    },
    Rule {
        when: Matcher::Any(&["pan"]),
        then: Effect::Move(CameraMove::PanLeft),
    },
    Rule {
        when: Matcher::Any(&["orbit"]),
        then: Effect::Move(CameraMove::OrbitRight),
    },
    Rule {
        when: Matcher::Any(&["tilt"]),
        then: Effect::Move(CameraMove::TiltUp),
    },
    Rule {
        when: Matcher::Any(&["10s", "10 seconds"]),
        then: Effect::DurationSecs(10),
    },
    Rule {
        when: Matcher::Any(&["5s"]),
        then: Effect::DurationSecs(5),
    },
];

/// Evaluate `rules` against an already-lowercased prompt, starting from defaults.
pub(crate) fn evaluate(rules: &[Rule], lowered: &str) -> SceneSettings {
    let mut out = SceneSettings::default();
    let mut written = 0u16;
    for rule in rules {
        let bit = rule.then.field().bit();
        if written & bit != 0 {
            continue;
        }
        if rule.when.matches(lowered) {
            rule.then.apply(&mut out);
            written |= bit;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/rules.rs"]
mod tests;
