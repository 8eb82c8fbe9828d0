//! Per-tick figure pose and camera motion.

pub(crate) mod animator;
pub(crate) mod camera_path;
