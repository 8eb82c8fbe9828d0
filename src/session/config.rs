use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{BrollError, BrollResult};

/// Default still file name.
pub const STILL_FILE_NAME: &str = "cinematic_still_4k.png";
/// Default clip file name.
pub const CLIP_FILE_NAME: &str = "broll.webm";

/// Studio configuration, loadable from JSON. Missing fields take defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    /// Live surface size; clips are recorded at this size.
    pub preview: Canvas,
    /// Surface size used for still capture.
    pub still: Canvas,
    /// Animation ticks per second; also the clip frame rate.
    pub fps: u32,
    /// Directory exports are written into.
    pub out_dir: PathBuf,
    /// File name of the still export.
    pub still_file_name: String,
    /// File name of the clip export.
    pub clip_file_name: String,
    /// `ffmpeg` executable used for clips.
    pub ffmpeg: PathBuf,
    /// Overwrite existing exports.
    pub overwrite: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            preview: Canvas {
                width: 1280,
                height: 720,
            },
            still: Canvas {
                width: 3840,
                height: 2160,
            },
            fps: 24,
            out_dir: PathBuf::from("."),
            still_file_name: STILL_FILE_NAME.to_owned(),
            clip_file_name: CLIP_FILE_NAME.to_owned(),
            ffmpeg: PathBuf::from("ffmpeg"),
            overwrite: true,
        }
    }
}

impl StudioConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> BrollResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| BrollError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> BrollResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> BrollResult<()> {
        self.preview.validate()?;
        self.still.validate()?;
        self.fps()?;
        for (what, name) in [
            ("still_file_name", &self.still_file_name),
            ("clip_file_name", &self.clip_file_name),
        ] {
            if name.trim().is_empty() {
                return Err(BrollError::validation(format!("{what} must not be empty")));
            }
            if Path::new(name).file_name().map(|f| f.len()) != Some(name.len()) {
                return Err(BrollError::validation(format!(
                    "{what} must be a bare file name, got '{name}'"
                )));
            }
        }
        Ok(())
    }

    pub fn fps(&self) -> BrollResult<Fps> {
        Fps::new(self.fps, 1)
    }

    pub fn still_path(&self) -> PathBuf {
        self.out_dir.join(&self.still_file_name)
    }

    pub fn clip_path(&self) -> PathBuf {
        self.out_dir.join(&self.clip_file_name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
