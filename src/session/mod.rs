//! Stateful studio session: prompt, reference palette, live scene, exports.

pub(crate) mod config;
pub(crate) mod studio;
