//! Footwork trajectory synthesis.
//!
//! This crate turns a symbolic sequence of steps, each naming a foot, a
//! clock-face direction and a facing angle, into smooth per-frame positions
//! for both feet and the centre of gravity, ready to be drawn frame by frame.
//!
//! The pipeline has four stages:
//!
//! 1. [`StepRecord::decode`] resolves a step against the eight-entry direction
//!    table and decides which foot moves and which one anchors the move.
//! 2. [`Sequencer`] folds the steps into aligned [`Waypoints`]. A moving foot
//!    always lands relative to where the *other* foot stands.
//! 3. [`Frames::interpolate`] resamples every pair of waypoints linearly.
//! 4. [`Playback::assemble`] appends a still hold and serves [`FrameState`]s
//!    to a [`FrameRenderer`].
//!
//! [`Pipeline`] wires the stages together.
//!
//! # Examples
//!
//! ```
//! use footwork::{DVec2, FrameCollector, Pipeline, PlaybackConfig, StepRecord};
//!
//! let steps = [StepRecord::right(1200, 90.0), StepRecord::left(1200, 90.0)];
//! let pipeline = Pipeline::new(PlaybackConfig::default().with_frames_per_segment(10))?;
//!
//! let mut collector = FrameCollector::new();
//! let playback = pipeline.render(&steps, &mut collector)?;
//!
//! // Two segments of ten frames plus a one second hold at 50 fps
//! assert_eq!(playback.frame_count(), 2 * 10 + 50);
//! assert_eq!(collector.frames()[19].left, DVec2::new(-0.5, 2.0));
//! # Ok::<(), footwork::FootworkError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod direction;
pub mod error;
pub mod export;
pub mod interpolation;
#[cfg(feature = "yaml")]
pub mod loader;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod pipeline;
pub mod playback;
pub mod render;
pub mod sequencer;
pub mod stance;
pub mod step;

pub use config::PlaybackConfig;
pub use direction::DirectionCode;
pub use error::{FootworkError, Result};
pub use export::{ExportFormat, FrameRecord};
#[cfg(feature = "csv_export")]
pub use export::CsvFrameWriter;
#[cfg(feature = "serde")]
pub use export::JsonFrameWriter;
pub use glam::DVec2;
pub use interpolation::{Frames, Lerp};
#[cfg(feature = "yaml")]
pub use loader::Choreography;
pub use pipeline::Pipeline;
pub use playback::{FrameState, Playback};
pub use render::{FrameCollector, FrameRenderer, PlaybackInfo};
pub use sequencer::{DEFAULT_FACING_DEGREES, Sequencer, Waypoints};
pub use stance::{NamedStance, Stance};
pub use step::{DecodedStep, Foot, MovementCode, RawStep, StepRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
