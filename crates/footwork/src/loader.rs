//! Sequence document loading
//!
//! A sequence file is either a bare list of steps:
//!
//! ```yaml
//! - R: 1200
//!   F: 90
//! - L: 1030
//!   F: 135
//! ```
//!
//! or a mapping that also carries playback settings:
//!
//! ```yaml
//! playback:
//!   fps: 25
//!   frames_per_segment: 20
//! steps:
//!   - R: 1200
//!     F: 90
//! ```
//!
//! The mapping form may also name a starting stance with `start: horse`.
//! Files ending in `.json` are read as JSON with the same two shapes.

use crate::config::PlaybackConfig;
use crate::error::{FootworkError, Result};
use crate::pipeline::Pipeline;
use crate::sequencer::Sequencer;
use crate::stance::NamedStance;
use crate::step::{RawStep, StepRecord};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const SHAPE_HINT: &str = "expected a list of steps or a mapping with a 'steps' key";

/// Mapping form of a sequence document, with steps still undecoded
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SequenceHeader<V> {
    #[serde(default)]
    playback: Option<PlaybackConfig>,
    #[serde(default)]
    start: Option<NamedStance>,
    steps: Vec<V>,
}

impl<V> SequenceHeader<V> {
    fn bare(steps: Vec<V>) -> Self {
        Self {
            playback: None,
            start: None,
            steps,
        }
    }

    /// Decode each step on its own so a failure names the record
    fn resolve<E, F>(self, decode: F) -> Result<Choreography>
    where
        E: fmt::Display,
        F: Fn(V) -> std::result::Result<RawStep, E>,
    {
        if let Some(config) = &self.playback {
            config.validate()?;
        }

        let steps = self
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                decode(value)
                    .map_err(|e| FootworkError::invalid_step(index, e.to_string()))?
                    .into_record(index)
            })
            .collect::<Result<Vec<_>>>()?;
        log::debug!("Loaded {} steps", steps.len());

        Ok(Choreography {
            playback: self.playback,
            start: self.start,
            steps,
        })
    }
}

/// A parsed sequence file
#[derive(Debug, Clone, PartialEq)]
pub struct Choreography {
    /// Playback settings carried by the file, if any
    pub playback: Option<PlaybackConfig>,
    /// Starting stance named by the file, if any
    pub start: Option<NamedStance>,
    /// Validated step records, in file order
    pub steps: Vec<StepRecord>,
}

impl Choreography {
    fn from_yaml_value(value: serde_yaml_ng::Value) -> Result<Self> {
        let header = match value {
            serde_yaml_ng::Value::Sequence(steps) => SequenceHeader::bare(steps),
            value @ serde_yaml_ng::Value::Mapping(_) => serde_yaml_ng::from_value(value)?,
            _ => return Err(FootworkError::InvalidDocument(SHAPE_HINT.to_string())),
        };
        header.resolve(serde_yaml_ng::from_value::<RawStep>)
    }

    fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let header = match value {
            serde_json::Value::Array(steps) => SequenceHeader::bare(steps),
            value @ serde_json::Value::Object(_) => serde_json::from_value(value)?,
            _ => return Err(FootworkError::InvalidDocument(SHAPE_HINT.to_string())),
        };
        header.resolve(serde_json::from_value::<RawStep>)
    }

    /// Parse a YAML sequence document
    ///
    /// ```
    /// use footwork::{Choreography, Foot};
    ///
    /// let choreography = Choreography::from_yaml_str("- R: 1200\n  F: 90\n").unwrap();
    /// assert_eq!(choreography.steps[0].active_point, Foot::Right);
    /// assert!(choreography.playback.is_none());
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::from_yaml_value(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a YAML sequence document from a reader
    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_yaml_value(serde_yaml_ng::from_reader(reader)?)
    }

    /// Parse a JSON sequence document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_value(serde_json::from_str(json)?)
    }

    /// Parse a JSON sequence document from a reader
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_json_value(serde_json::from_reader(reader)?)
    }

    /// Load a sequence file, choosing the format from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading sequence from {}", path.display());

        let reader = BufReader::new(File::open(path)?);
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_reader(reader)
        } else {
            Self::from_yaml_reader(reader)
        }
    }

    /// File settings with defaults filled in
    pub fn playback_or_default(&self) -> PlaybackConfig {
        self.playback.unwrap_or_default()
    }

    /// Sequencer seeded with the file's starting stance
    pub fn sequencer(&self) -> Sequencer {
        Sequencer::new().with_stance(self.start.unwrap_or_default().stance())
    }

    /// Pipeline configured entirely from the file
    pub fn pipeline(&self) -> Result<Pipeline> {
        Ok(Pipeline::new(self.playback_or_default())?.with_sequencer(self.sequencer()))
    }
}
