use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BrollError, BrollResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::frame::FrameRGBA;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

/// Where and how a [`WebmSink`] writes its clip.
#[derive(Clone, Debug)]
pub struct WebmSinkOpts {
    pub out_path: PathBuf,
    /// Replace an existing file at `out_path`.
    pub overwrite: bool,
    /// Straight RGBA8 color that translucent pixels are flattened onto.
    pub bg_rgba: [u8; 4],
    /// `ffmpeg` executable to spawn.
    pub program: PathBuf,
}

impl WebmSinkOpts {
    /// Defaults: overwrite, black background, `ffmpeg` from `PATH`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
            program: PathBuf::from("ffmpeg"),
        }
    }
}

/// Clip sink that pipes flattened frames into an `ffmpeg` child encoding VP9 WEBM.
///
/// The encoder is spawned in `begin` and finalized in `end`; dropping the sink mid-clip closes
/// stdin, which lets `ffmpeg` finish whatever it already received.
pub struct WebmSink {
    opts: WebmSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl WebmSink {
    pub fn new(opts: WebmSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }

    /// Output path this sink writes to.
    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }
}

impl FrameSink for WebmSink {
    fn begin(&mut self, cfg: SinkConfig) -> BrollResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(BrollError::validation("clip canvas must be non-empty"));
        }
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(BrollError::validation(format!(
                "clip canvas {}x{} must have even sides for yuv420p",
                cfg.width, cfg.height
            )));
        }

        let out = &self.opts.out_path;
        ensure_parent_dir(out)?;
        if !self.opts.overwrite && out.exists() {
            return Err(BrollError::validation(format!(
                "refusing to replace existing clip '{}'",
                out.display()
            )));
        }
        if !is_ffmpeg_available(&self.opts.program) {
            return Err(BrollError::encode(format!(
                "clip export needs ffmpeg; '{}' did not run",
                self.opts.program.display()
            )));
        }

        let mut child = Command::new(&self.opts.program)
            .args(vp9_args(&cfg, self.opts.overwrite))
            .arg(out)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                BrollError::encode(format!("spawn '{}': {e}", self.opts.program.display()))
            })?;

        let (Some(stdin), Some(mut stderr)) = (child.stdin.take(), child.stderr.take()) else {
            return Err(BrollError::encode("ffmpeg pipes missing after spawn"));
        };
        // Drained on its own thread so a chatty encoder never blocks on a full pipe.
        let stderr_drain = std::thread::spawn(move || {
            let mut log = Vec::new();
            stderr.read_to_end(&mut log)?;
            Ok(log)
        });

        tracing::debug!(out = %out.display(), w = cfg.width, h = cfg.height, "clip encoder started");

        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> BrollResult<()> {
        let Some(cfg) = self.cfg.as_ref() else {
            return Err(BrollError::encode("clip frame pushed before begin"));
        };
        if self.last_idx.is_some_and(|last| idx <= last) {
            return Err(BrollError::encode(format!(
                "clip frame {} arrived after frame {}",
                idx.0,
                self.last_idx.map_or(0, |l| l.0)
            )));
        }
        self.last_idx = Some(idx);

        if (frame.width, frame.height) != (cfg.width, cfg.height) {
            return Err(BrollError::validation(format!(
                "clip frame is {}x{}, encoder expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != self.scratch.len() {
            return Err(BrollError::validation("clip frame buffer has the wrong length"));
        }

        flatten_to_opaque_rgba8(
            &mut self.scratch,
            &frame.data,
            frame.premultiplied,
            self.opts.bg_rgba,
        )?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(BrollError::encode("clip encoder already closed"));
        };
        use std::io::Write as _;
        stdin
            .write_all(&self.scratch)
            .map_err(|e| BrollError::encode(format!("write clip frame {}: {e}", idx.0)))
    }

    fn end(&mut self) -> BrollResult<()> {
        // Closing stdin is the encoder's end-of-stream.
        drop(self.stdin.take());
        let Some(mut child) = self.child.take() else {
            return Err(BrollError::encode("clip encoder ended before begin"));
        };

        let status = child
            .wait()
            .map_err(|e| BrollError::encode(format!("wait for ffmpeg: {e}")))?;
        let log = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| BrollError::encode("ffmpeg log reader panicked"))?
                .map_err(|e| BrollError::encode(format!("read ffmpeg log: {e}")))?,
            None => Vec::new(),
        };
        self.cfg = None;

        if !status.success() {
            return Err(BrollError::encode(format!(
                "ffmpeg failed ({status}): {}",
                String::from_utf8_lossy(&log).trim()
            )));
        }
        tracing::debug!(out = %self.opts.out_path.display(), "clip encoder finished");
        Ok(())
    }
}

/// Encoder arguments up to, but excluding, the output path.
///
/// Raw RGBA frames arrive on stdin at the clip rate; output is VP9 in constant-quality mode.
pub(crate) fn vp9_args(cfg: &SinkConfig, overwrite: bool) -> Vec<String> {
    let mut args: Vec<String> = Vec::with_capacity(28);
    args.push(if overwrite { "-y" } else { "-n" }.to_owned());
    args.extend(["-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgba"].map(String::from));
    args.push("-s".to_owned());
    args.push(format!("{}x{}", cfg.width, cfg.height));
    // Input rate must precede `-i` for rawvideo.
    args.push("-r".to_owned());
    args.push(format!("{}/{}", cfg.fps.num, cfg.fps.den));
    args.extend(
        [
            "-i", "pipe:0", "-an", "-c:v", "libvpx-vp9", "-pix_fmt", "yuv420p", "-b:v", "0",
            "-crf", "32", "-row-mt", "1", "-f", "webm",
        ]
        .map(String::from),
    );
    args
}

/// Composite `src` over the opaque `bg_rgba`, writing straight RGBA8 with alpha 255 into `dst`.
pub(crate) fn flatten_to_opaque_rgba8(
    dst: &mut [u8],
    src: &[u8],
    src_is_premul: bool,
    bg_rgba: [u8; 4],
) -> BrollResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BrollError::validation(format!(
            "cannot flatten {} rgba bytes into {}",
            src.len(),
            dst.len()
        )));
    }

    for (out, px) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let alpha = u16::from(px[3]);
        let uncovered = 255 - alpha;
        for c in 0..3 {
            let fg = if src_is_premul {
                u16::from(px[c])
            } else {
                mul_div255_u16(u16::from(px[c]), alpha)
            };
            let bg = mul_div255_u16(u16::from(bg_rgba[c]), uncovered);
            out[c] = (fg + bg).min(255) as u8;
        }
        out[3] = 255;
    }
    Ok(())
}

/// Create the directory an export will be written into.
pub fn ensure_parent_dir(path: &Path) -> BrollResult<()> {
    use anyhow::Context as _;

    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
            .with_context(|| format!("create export dir '{}'", dir.display()))
            .map_err(BrollError::from),
        _ => Ok(()),
    }
}

/// Whether `program -version` exits successfully.
pub fn is_ffmpeg_available(program: &Path) -> bool {
    Command::new(program)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Whether a bare `ffmpeg` resolves on `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    is_ffmpeg_available(Path::new("ffmpeg"))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
