use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "broll", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene settings a prompt maps to, as JSON.
    Interpret(PromptArgs),
    /// List the built-in prompt presets.
    Presets,
    /// Render one preview frame at a point in time as a PNG.
    Frame(FrameArgs),
    /// Render a still at the configured still size as a PNG.
    Still(StillArgs),
    /// Record a WEBM clip (requires `ffmpeg`).
    Clip(ClipArgs),
}

#[derive(Args, Debug)]
struct PromptArgs {
    /// Free-text scene prompt.
    #[arg(long, default_value = "")]
    prompt: String,

    /// Named preset; replaces `--prompt`.
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Args, Debug)]
struct StudioArgs {
    #[command(flatten)]
    prompt: PromptArgs,

    /// Reference image used to tint the scene.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Studio config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    studio: StudioArgs,

    /// Seconds of animation to run before rendering.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct StillArgs {
    #[command(flatten)]
    studio: StudioArgs,

    /// Seconds of animation to run before capturing.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path (defaults to the configured still path).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ClipArgs {
    #[command(flatten)]
    studio: StudioArgs,

    /// Output WEBM path (defaults to the configured clip path).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Interpret(args) => cmd_interpret(args),
        Command::Presets => cmd_presets(),
        Command::Frame(args) => cmd_frame(args),
        Command::Still(args) => cmd_still(args),
        Command::Clip(args) => cmd_clip(args),
    }
}

fn resolve_prompt(args: &PromptArgs) -> anyhow::Result<String> {
    match &args.preset {
        Some(name) => {
            let preset = broll::find_preset(name)
                .with_context(|| format!("unknown preset '{name}'"))?;
            Ok(preset.prompt.to_owned())
        }
        None => Ok(args.prompt.clone()),
    }
}

fn open_studio(args: &StudioArgs) -> anyhow::Result<broll::Studio> {
    let cfg = match &args.config {
        Some(path) => broll::StudioConfig::from_path(path)?,
        None => broll::StudioConfig::default(),
    };
    let mut studio = broll::Studio::new(cfg)?;
    studio.set_prompt(resolve_prompt(&args.prompt)?);
    if let Some(path) = &args.image {
        studio.load_reference_image(path)?;
    }
    Ok(studio)
}

/// Tick the live loop up to, but not including, the tick at `time` seconds.
fn advance(studio: &mut broll::Studio, time: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        time.is_finite() && time >= 0.0,
        "--time must be a non-negative number"
    );
    let fps = studio.config().fps()?;
    for _ in 0..fps.secs_to_frames_floor(time) {
        studio.tick()?;
    }
    Ok(())
}

fn cmd_interpret(args: PromptArgs) -> anyhow::Result<()> {
    let settings = broll::interpret(&resolve_prompt(&args)?);
    let json = serde_json::to_string_pretty(&settings).context("serialize settings")?;
    println!("{json}");
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for p in broll::PRESETS {
        println!("{:<10} {}", p.name, p.prompt);
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut studio = open_studio(&args.studio)?;
    advance(&mut studio, args.time)?;
    let frame = studio.next_preview_frame()?;
    broll::write_png(&frame, &args.out, [0, 0, 0, 255])?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_still(args: StillArgs) -> anyhow::Result<()> {
    let mut studio = open_studio(&args.studio)?;
    advance(&mut studio, args.time)?;
    studio.tick()?;
    let out = match args.out {
        Some(out) => {
            studio.export_still_to(&out)?;
            out
        }
        None => studio.export_still()?,
    };

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_clip(args: ClipArgs) -> anyhow::Result<()> {
    let mut studio = open_studio(&args.studio)?;
    let out = match args.out {
        Some(out) => {
            studio.export_clip_to(&out)?;
            out
        }
        None => studio.export_clip()?,
    };

    eprintln!("wrote {}", out.display());
    Ok(())
}
