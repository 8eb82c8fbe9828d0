//! Fixed scene topology: ground, backdrop, humanoid figure, four lights, fog.

pub(crate) mod build;
pub(crate) mod figure;
pub(crate) mod lighting;
pub(crate) mod model;
