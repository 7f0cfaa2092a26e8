//! Root CLI structure for footwork

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use footwork::{ExportFormat, PlaybackConfig};

#[derive(Parser)]
#[command(name = "footwork")]
#[command(about = "Turn clock-face step sequences into per-frame footwork trajectories", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize frames for a sequence file and write them out
    Render(RenderArgs),

    /// Render many sequence files into a directory
    Batch(BatchArgs),

    /// Summarize a sequence file
    Info {
        /// Path to the sequence file
        file: PathBuf,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// Print the waypoint table of a sequence file
    Waypoints {
        /// Path to the sequence file
        file: PathBuf,
    },

    /// Check every step record of a sequence file
    Validate {
        /// Path to the sequence file
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct RenderArgs {
    /// Path to the sequence file (YAML, or JSON by extension)
    pub file: PathBuf,

    /// Where to write frame data (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: csv or json (defaults to the output extension, then csv)
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<ExportFormat>,

    #[command(flatten)]
    pub playback: PlaybackArgs,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Sequence files or glob patterns (e.g. "sequences/*.yml")
    #[arg(required = true)]
    pub patterns: Vec<String>,

    /// Directory to write frame data into
    #[arg(short, long)]
    pub out_dir: PathBuf,

    /// Output format: csv or json
    #[arg(short, long, default_value = "csv", value_parser = parse_format)]
    pub format: ExportFormat,

    #[command(flatten)]
    pub playback: PlaybackArgs,
}

/// Playback overrides; each one wins over the sequence file's own settings
#[derive(Args, Debug, Clone, Default)]
pub struct PlaybackArgs {
    /// Frames per second
    #[arg(long, env = "FOOTWORK_FPS")]
    pub fps: Option<u32>,

    /// Interpolated frames between consecutive waypoints
    #[arg(long, env = "FOOTWORK_FRAMES_PER_SEGMENT")]
    pub frames_per_segment: Option<usize>,

    /// Frames to hold the final pose (defaults to one second)
    #[arg(long, env = "FOOTWORK_PAUSE_FRAMES")]
    pub pause_frames: Option<usize>,
}

impl PlaybackArgs {
    /// Layer these overrides on top of `base`
    pub fn apply(&self, base: PlaybackConfig) -> PlaybackConfig {
        let mut config = base;
        if let Some(fps) = self.fps {
            config = config.with_fps(fps);
        }
        if let Some(frames_per_segment) = self.frames_per_segment {
            config = config.with_frames_per_segment(frames_per_segment);
        }
        if let Some(pause_frames) = self.pause_frames {
            config = config.with_pause_frames(pause_frames);
        }
        config
    }
}

fn parse_format(value: &str) -> Result<ExportFormat, String> {
    value.parse().map_err(|e: footwork::FootworkError| e.to_string())
}
