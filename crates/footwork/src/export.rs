//! Frame data export
//!
//! Writers that implement [`FrameRenderer`] so any [`Playback`] can be dumped
//! as CSV (one row per frame) or as a single JSON document.
//!
//! [`Playback`]: crate::Playback

use crate::error::{FootworkError, Result};
use crate::playback::FrameState;
use crate::render::{FrameRenderer, PlaybackInfo};
#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;
use std::io;
use std::str::FromStr;

/// Output format for frame data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, one row per frame
    Csv,
    /// Pretty-printed JSON document
    Json,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FootworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(FootworkError::InvalidConfig(format!(
                "unknown export format '{other}', expected 'csv' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serializable form of a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FrameRecord {
    /// Frame index
    pub frame: usize,
    /// Left foot `[x, y]`
    pub left: [f64; 2],
    /// Right foot `[x, y]`
    pub right: [f64; 2],
    /// Centre of gravity `[x, y]`
    pub cog: [f64; 2],
    /// Facing angle in degrees
    pub facing_degrees: f64,
    /// Tip of the facing indicator `[x, y]`
    pub arrow: [f64; 2],
}

impl From<&FrameState> for FrameRecord {
    fn from(frame: &FrameState) -> Self {
        Self {
            frame: frame.index,
            left: frame.left.to_array(),
            right: frame.right.to_array(),
            cog: frame.center.to_array(),
            facing_degrees: frame.facing_degrees,
            arrow: frame.arrow_tip().to_array(),
        }
    }
}

/// CSV column names, in row order
pub const CSV_HEADER: [&str; 10] = [
    "frame",
    "left_x",
    "left_y",
    "right_x",
    "right_y",
    "cog_x",
    "cog_y",
    "facing_degrees",
    "arrow_x",
    "arrow_y",
];

/// Writes one CSV row per frame
#[cfg(feature = "csv_export")]
pub struct CsvFrameWriter<W: io::Write> {
    writer: csv::Writer<W>,
}

#[cfg(feature = "csv_export")]
impl<W: io::Write> CsvFrameWriter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer),
        }
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| FootworkError::Io(e.into_error()))
    }
}

#[cfg(feature = "csv_export")]
impl<W: io::Write> FrameRenderer for CsvFrameWriter<W> {
    fn begin(&mut self, _info: &PlaybackInfo) -> Result<()> {
        self.writer.write_record(CSV_HEADER)?;
        Ok(())
    }

    fn draw(&mut self, frame: &FrameState) -> Result<()> {
        let record = FrameRecord::from(frame);
        let row = [
            record.frame.to_string(),
            record.left[0].to_string(),
            record.left[1].to_string(),
            record.right[0].to_string(),
            record.right[1].to_string(),
            record.cog[0].to_string(),
            record.cog[1].to_string(),
            record.facing_degrees.to_string(),
            record.arrow[0].to_string(),
            record.arrow[1].to_string(),
        ];
        self.writer.write_record(&row)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize)]
struct JsonDocument<'a> {
    fps: u32,
    frame_count: usize,
    frames: &'a [FrameRecord],
}

/// Buffers frames and writes a single JSON document on `finish`
#[cfg(feature = "serde")]
pub struct JsonFrameWriter<W: io::Write> {
    writer: W,
    info: PlaybackInfo,
    frames: Vec<FrameRecord>,
}

#[cfg(feature = "serde")]
impl<W: io::Write> JsonFrameWriter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            info: PlaybackInfo {
                fps: 0,
                frame_count: 0,
            },
            frames: Vec::new(),
        }
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "serde")]
impl<W: io::Write> FrameRenderer for JsonFrameWriter<W> {
    fn begin(&mut self, info: &PlaybackInfo) -> Result<()> {
        self.info = *info;
        self.frames.clear();
        self.frames.reserve(info.frame_count);
        Ok(())
    }

    fn draw(&mut self, frame: &FrameState) -> Result<()> {
        self.frames.push(FrameRecord::from(frame));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = JsonDocument {
            fps: self.info.fps,
            frame_count: self.frames.len(),
            frames: &self.frames,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render `playback` into `writer` in the given format
#[cfg(all(feature = "csv_export", feature = "serde"))]
pub fn write_frames<W: io::Write>(
    playback: &crate::Playback,
    format: ExportFormat,
    writer: W,
) -> Result<()> {
    match format {
        ExportFormat::Csv => playback.render(CsvFrameWriter::new(writer)),
        ExportFormat::Json => playback.render(JsonFrameWriter::new(writer)),
    }
}
