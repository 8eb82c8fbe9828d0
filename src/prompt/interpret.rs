use crate::prompt::rules::{RULES, evaluate};
use crate::prompt::settings::SceneSettings;

/// Map a free-text prompt to [`SceneSettings`].
///
/// Matching is case-insensitive substring containment against a fixed keyword table. There is no
/// tokenization and no negation handling: `"not warm"` still sets `warm`. Every input, including
/// the empty string, yields a valid record.
#[tracing::instrument(level = "trace", skip_all, fields(len = prompt.len()))]
pub fn interpret(prompt: &str) -> SceneSettings {
    evaluate(RULES, &prompt.to_lowercase())
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/interpret.rs"]
mod tests;
