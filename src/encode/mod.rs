//! Export sinks.
//!
//! Clip capture streams frames into a [`FrameSink`] in timeline order; still capture writes a
//! single PNG.

/// `ffmpeg`-based sinks (WEBM output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
/// PNG still output.
pub mod still;
