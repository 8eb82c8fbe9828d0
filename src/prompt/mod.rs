//! Keyword-driven prompt interpretation.

pub(crate) mod interpret;
pub(crate) mod presets;
pub(crate) mod rules;
pub(crate) mod settings;
