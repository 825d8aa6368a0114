//! CLI command definitions and handlers.

use atelier_core::{
    AspectRatio, ImageOptions, ImageStyle, SourceImage, VideoDuration, VideoOptions, VideoStyle,
};
use atelier_error::{AtelierResult, MediaError, MediaErrorKind};
use atelier_studio::{Studio, StudioConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

/// Atelier - AI-assisted architectural rendering studio
#[derive(Parser, Debug)]
#[command(name = "atelier")]
#[command(about = "Generate architectural image and video renders from source photos", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive terminal studio
    Tui,

    /// Run a single generation and write the result to disk
    Render(RenderArgs),
}

/// Generation target for one-shot renders.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RenderKind {
    /// Still image render
    Image,
    /// Video clip render
    Video,
}

/// Image style flag values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StyleArg {
    /// Photorealistic render
    UltraRealistic,
    /// Loose watercolor painting
    Watercolor,
    /// Ink pen sketch
    PenSketch,
    /// Graphite pencil sketch
    PencilSketch,
}

impl From<StyleArg> for ImageStyle {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::UltraRealistic => ImageStyle::UltraRealistic,
            StyleArg::Watercolor => ImageStyle::Watercolor,
            StyleArg::PenSketch => ImageStyle::PenSketch,
            StyleArg::PencilSketch => ImageStyle::PencilSketch,
        }
    }
}

/// Video style flag values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MotionArg {
    /// Slow cinematic camera movement
    Cinematic,
    /// Fast dynamic camera movement
    Action,
    /// Gentle drifting camera movement
    Slow,
}

impl From<MotionArg> for VideoStyle {
    fn from(value: MotionArg) -> Self {
        match value {
            MotionArg::Cinematic => VideoStyle::Cinematic,
            MotionArg::Action => VideoStyle::Action,
            MotionArg::Slow => VideoStyle::Slow,
        }
    }
}

/// Clip duration flag values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DurationArg {
    /// 3 seconds
    Short,
    /// 5 seconds
    Medium,
    /// 8 seconds
    Long,
}

impl From<DurationArg> for VideoDuration {
    fn from(value: DurationArg) -> Self {
        match value {
            DurationArg::Short => VideoDuration::Short,
            DurationArg::Medium => VideoDuration::Medium,
            DurationArg::Long => VideoDuration::Long,
        }
    }
}

/// Aspect ratio flag values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AspectArg {
    /// 1:1
    Square,
    /// 16:9
    Widescreen,
    /// 9:16
    Portrait,
    /// 4:3
    Standard,
    /// 3:4
    StandardPortrait,
}

impl From<AspectArg> for AspectRatio {
    fn from(value: AspectArg) -> Self {
        match value {
            AspectArg::Square => AspectRatio::Square,
            AspectArg::Widescreen => AspectRatio::Widescreen,
            AspectArg::Portrait => AspectRatio::Portrait,
            AspectArg::Standard => AspectRatio::Standard,
            AspectArg::StandardPortrait => AspectRatio::StandardPortrait,
        }
    }
}

/// Launch the interactive terminal studio.
///
/// A missing API key is not fatal here: the studio opens in a disabled state
/// so the user sees the configuration message instead of a crash.
pub async fn launch_tui() -> AtelierResult<()> {
    let config = StudioConfig::load()?;
    let studio = match Studio::from_env(&config) {
        Ok(studio) => Some(studio),
        Err(err) => {
            info!(%err, "Starting without a render backend");
            None
        }
    };
    atelier_tui::run_tui(studio, &config.passphrase).await?;
    Ok(())
}

/// Parameters for a one-shot render.
#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// Path to the source building photo
    pub source: PathBuf,

    /// Creative prompt describing the desired render
    #[arg(long, default_value = "")]
    pub prompt: String,

    /// What to generate
    #[arg(long, value_enum, default_value_t = RenderKind::Image)]
    pub kind: RenderKind,

    /// Rendering style (image renders)
    #[arg(long, value_enum, default_value_t = StyleArg::UltraRealistic)]
    pub style: StyleArg,

    /// Creativity level, 0-100 (image renders)
    #[arg(long, default_value_t = 50)]
    pub creativity: u8,

    /// Style strength, 0-100 (image renders)
    #[arg(long, default_value_t = 75)]
    pub style_strength: u8,

    /// Camera treatment (video renders)
    #[arg(long, value_enum, default_value_t = MotionArg::Cinematic)]
    pub motion: MotionArg,

    /// Clip duration (video renders)
    #[arg(long, value_enum, default_value_t = DurationArg::Medium)]
    pub duration: DurationArg,

    /// Output aspect ratio
    #[arg(long, value_enum, default_value_t = AspectArg::Widescreen)]
    pub aspect: AspectArg,

    /// Path to write the result bytes
    #[arg(long, short)]
    pub output: PathBuf,
}

/// Run a single generation and write the result payload to `output`.
pub async fn run_render(args: RenderArgs) -> AtelierResult<()> {
    let config = StudioConfig::load()?;
    let studio = Studio::from_env(&config)?;
    let source = SourceImage::from_path(&args.source)?;

    let asset = match args.kind {
        RenderKind::Image => {
            let options = ImageOptions {
                style: args.style.into(),
                creativity: args.creativity.min(100),
                style_strength: args.style_strength.min(100),
                aspect_ratio: args.aspect.into(),
            };
            studio.generate_image(source, &args.prompt, &options).await?
        }
        RenderKind::Video => {
            let options = VideoOptions {
                style: args.motion.into(),
                duration: args.duration.into(),
                aspect_ratio: args.aspect.into(),
            };
            studio.generate_video(source, &args.prompt, &options).await?
        }
    };

    let result = asset.result();
    write_output(&args.output, result.data())?;
    info!(
        path = %args.output.display(),
        mime = result.mime(),
        bytes = result.data().len(),
        "Render written"
    );
    println!(
        "Wrote {} ({} bytes) to {}",
        result.mime(),
        result.data().len(),
        args.output.display()
    );
    Ok(())
}

fn write_output(path: &Path, data: &[u8]) -> AtelierResult<()> {
    std::fs::write(path, data).map_err(|e| {
        MediaError::new(MediaErrorKind::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .into()
    })
}
