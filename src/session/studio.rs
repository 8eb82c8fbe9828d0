use std::path::{Path, PathBuf};

use crate::animate::animator::{Animator, CameraState};
use crate::encode::ffmpeg::{WebmSink, WebmSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::still::write_png;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{BrollError, BrollResult};
use crate::palette::extract::{Palette, extract_palette, load_palette};
use crate::prompt::interpret::interpret;
use crate::prompt::presets::find_preset;
use crate::prompt::settings::SceneSettings;
use crate::render::cpu::CpuRenderer;
use crate::render::frame::FrameRGBA;
use crate::scene::build::build_scene;
use crate::scene::model::Scene;
use crate::session::config::StudioConfig;

/// Everything a scene build depends on. A change to any part triggers a rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SceneKey {
    settings: SceneSettings,
    palette: Option<Palette>,
}

/// One mounted scene and its animation clock.
#[derive(Debug)]
struct LiveScene {
    key: SceneKey,
    scene: Scene,
    animator: Animator,
    ticks: u64,
}

/// Summary of a finished clip capture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Clip length in seconds.
    pub duration_secs: u32,
}

/// Owns the prompt, the optional reference palette and the live scene.
///
/// Prompt and image edits re-derive the scene inputs; the scene is rebuilt only when those inputs
/// actually change. Captures borrow the studio mutably, so a rebuild can never interleave with a
/// recording in progress.
#[derive(Debug)]
pub struct Studio {
    cfg: StudioConfig,
    prompt: String,
    settings: SceneSettings,
    palette: Option<Palette>,
    live: Option<LiveScene>,
    renderer: CpuRenderer,
    rebuilds: u64,
}

impl Studio {
    /// Create a studio with an empty prompt and no reference image.
    pub fn new(cfg: StudioConfig) -> BrollResult<Self> {
        cfg.validate()?;
        let mut s = Self {
            cfg,
            prompt: String::new(),
            settings: interpret(""),
            palette: None,
            live: None,
            renderer: CpuRenderer::new(),
            rebuilds: 0,
        };
        s.sync();
        Ok(s)
    }

    pub fn config(&self) -> &StudioConfig {
        &self.cfg
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn settings(&self) -> SceneSettings {
        self.settings
    }

    pub fn palette(&self) -> Option<Palette> {
        self.palette
    }

    /// Number of scene builds so far, including the initial one.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// The mounted scene, if not torn down.
    pub fn scene(&self) -> Option<&Scene> {
        self.live.as_ref().map(|l| &l.scene)
    }

    pub fn camera(&self) -> Option<CameraState> {
        self.live.as_ref().map(|l| l.animator.camera())
    }

    /// Seconds since the current scene was built.
    pub fn elapsed_secs(&self) -> f64 {
        self.live
            .as_ref()
            .map(|l| l.animator.elapsed_secs())
            .unwrap_or(0.0)
    }

    /// Replace the prompt text. Returns `true` when the scene was rebuilt.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) -> bool {
        self.prompt = prompt.into();
        self.settings = interpret(&self.prompt);
        self.sync()
    }

    /// Overwrite the prompt with a named preset.
    pub fn apply_preset(&mut self, name: &str) -> BrollResult<bool> {
        let preset = find_preset(name)
            .ok_or_else(|| BrollError::validation(format!("unknown preset '{name}'")))?;
        Ok(self.set_prompt(preset.prompt))
    }

    /// Use a decoded image as the palette source.
    pub fn set_reference_image(&mut self, img: &image::DynamicImage) -> bool {
        self.palette = Some(extract_palette(img));
        self.sync()
    }

    /// Decode an image file and use it as the palette source.
    pub fn load_reference_image(&mut self, path: &Path) -> BrollResult<bool> {
        self.palette = Some(load_palette(path)?);
        Ok(self.sync())
    }

    /// Drop the reference image and its palette.
    pub fn remove_reference_image(&mut self) -> bool {
        self.palette = None;
        self.sync()
    }

    /// Release the scene and the render surface. The next tick or capture rebuilds.
    pub fn teardown(&mut self) {
        if self.live.take().is_some() {
            tracing::debug!("scene torn down");
        }
        self.renderer.release();
    }

    fn key(&self) -> SceneKey {
        SceneKey {
            settings: self.settings,
            palette: self.palette,
        }
    }

    /// Rebuild when the scene inputs changed or nothing is mounted. Returns `true` on rebuild.
    fn sync(&mut self) -> bool {
        let before = self.rebuilds;
        self.ensure_live();
        self.rebuilds != before
    }

    fn ensure_live(&mut self) -> &mut LiveScene {
        let key = self.key();
        if !self.live.as_ref().is_some_and(|l| l.key == key) {
            self.teardown();
            self.rebuilds += 1;
            tracing::info!(
                rebuild = self.rebuilds,
                mv = %key.settings.camera_move,
                fov = key.settings.fov_deg,
                palette = key.palette.is_some(),
                "building scene"
            );
        }
        self.live.get_or_insert_with(|| mount(key))
    }

    /// Advance the animation by one tick at the configured rate. The first tick is at `t = 0`.
    pub fn tick(&mut self) -> BrollResult<()> {
        let fps = self.cfg.fps()?;
        let live = self.ensure_live();
        let t = fps.frames_to_secs(live.ticks);
        live.animator.tick(&mut live.scene, t);
        live.ticks += 1;
        Ok(())
    }

    fn render_at(&mut self, canvas: Canvas) -> BrollResult<FrameRGBA> {
        self.ensure_live();
        let Some(live) = self.live.as_ref() else {
            return Err(BrollError::render("no scene mounted"));
        };
        let camera = live.animator.camera();
        self.renderer.render(&live.scene, &camera, canvas)
    }

    /// Tick once and render the preview surface.
    pub fn next_preview_frame(&mut self) -> BrollResult<FrameRGBA> {
        self.tick()?;
        self.render_at(self.cfg.preview)
    }

    /// Run the live loop for `frames` ticks, handing each preview frame to `sink`.
    pub fn run_preview(&mut self, frames: u64, sink: &mut dyn FrameSink) -> BrollResult<()> {
        sink.begin(SinkConfig {
            width: self.cfg.preview.width,
            height: self.cfg.preview.height,
            fps: self.cfg.fps()?,
        })?;
        for i in 0..frames {
            let frame = self.next_preview_frame()?;
            sink.push_frame(FrameIndex(i), &frame)?;
        }
        sink.end()
    }

    /// Render the current animation state at still size, then restore the preview surface.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn capture_still(&mut self) -> BrollResult<FrameRGBA> {
        let frame = self.render_at(self.cfg.still);
        self.renderer.resize(self.cfg.preview)?;
        frame
    }

    /// Capture a still and write it to the configured still path.
    pub fn export_still(&mut self) -> BrollResult<PathBuf> {
        let out = self.cfg.still_path();
        self.export_still_to(&out)?;
        Ok(out)
    }

    pub fn export_still_to(&mut self, out: &Path) -> BrollResult<()> {
        if !self.cfg.overwrite && out.exists() {
            return Err(BrollError::validation(format!(
                "output file '{}' already exists",
                out.display()
            )));
        }
        let frame = self.capture_still()?;
        write_png(&frame, out, [0, 0, 0, 255])?;
        tracing::info!(out = %out.display(), w = frame.width, h = frame.height, "still written");
        Ok(())
    }

    /// Record `duration_secs` of the live loop into `sink` at the configured frame rate.
    #[tracing::instrument(level = "debug", skip(self, sink))]
    pub fn record_clip(&mut self, sink: &mut dyn FrameSink) -> BrollResult<ClipStats> {
        let fps = self.cfg.fps()?;
        let duration_secs = self.settings.duration_secs;
        let frames = u64::from(duration_secs) * u64::from(fps.num) / u64::from(fps.den);

        sink.begin(SinkConfig {
            width: self.cfg.preview.width,
            height: self.cfg.preview.height,
            fps,
        })?;
        for i in 0..frames {
            let frame = self.next_preview_frame()?;
            sink.push_frame(FrameIndex(i), &frame)?;
        }
        sink.end()?;

        Ok(ClipStats {
            frames,
            duration_secs,
        })
    }

    /// Record a clip into a WEBM at the configured clip path.
    pub fn export_clip(&mut self) -> BrollResult<PathBuf> {
        let out = self.cfg.clip_path();
        self.export_clip_to(&out)?;
        Ok(out)
    }

    pub fn export_clip_to(&mut self, out: &Path) -> BrollResult<ClipStats> {
        let mut sink = WebmSink::new(WebmSinkOpts {
            overwrite: self.cfg.overwrite,
            program: self.cfg.ffmpeg.clone(),
            ..WebmSinkOpts::new(out)
        });
        let stats = self.record_clip(&mut sink)?;
        tracing::info!(out = %out.display(), frames = stats.frames, "clip written");
        Ok(stats)
    }
}

fn mount(key: SceneKey) -> LiveScene {
    let scene = build_scene(&key.settings, key.palette.as_ref());
    let animator = Animator::new(&scene);
    LiveScene {
        key,
        scene,
        animator,
        ticks: 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/studio.rs"]
mod tests;
