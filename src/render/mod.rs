//! Projected CPU rendering of a [`crate::Scene`].

pub(crate) mod camera;
/// CPU raster backend.
pub mod cpu;
pub(crate) mod display_list;
pub(crate) mod frame;
pub(crate) mod grade;
