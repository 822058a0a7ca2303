//! Error types for chord evaluation.

use std::fmt;

use thiserror::Error;

use crate::pitch::PitchClass;

/// Errors raised by a single pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// Base token is not a known quality, a bare "6", an integer of 7 or more, or empty.
    #[error("malformed chord quality '{quality}': unexpected '{remainder}'")]
    MalformedQuality {
        /// Base token as written.
        quality: String,
        /// Text left over once the quality patterns were removed.
        remainder: String,
    },

    /// Schema token has no positive degree number after its accidentals.
    #[error("malformed degree token '{token}'")]
    MalformedDegreeToken {
        /// The offending token.
        token: String,
    },

    /// Accidentals move a degree a full octave or more.
    #[error("accidental shift of {shift} in '{token}' leaves the pitch-class range")]
    OutOfRangeShift {
        /// The offending token.
        token: String,
        /// Net semitone shift of its accidentals.
        shift: i32,
    },

    /// Stacked voicing climbs past the top of the keyboard.
    #[error("note position {position} is beyond the keyboard (limit {limit})")]
    OutOfRangeRender {
        /// Absolute semitone position requested.
        position: usize,
        /// Number of positions the keyboard can show.
        limit: usize,
    },

    /// Root text is not a pitch-class name.
    #[error("unknown root note '{text}'")]
    UnknownRoot {
        /// Text as given.
        text: String,
    },
}

/// Pipeline stage a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parsing,
    Resolution,
    Rendering,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Parsing => "parsing",
            Stage::Resolution => "resolution",
            Stage::Rendering => "rendering",
        })
    }
}

impl ChordError {
    /// Stage that raises this kind of error.
    pub fn stage(&self) -> Stage {
        match self {
            ChordError::MalformedQuality { .. } | ChordError::UnknownRoot { .. } => Stage::Parsing,
            ChordError::MalformedDegreeToken { .. } | ChordError::OutOfRangeShift { .. } => {
                Stage::Resolution
            }
            ChordError::OutOfRangeRender { .. } => Stage::Rendering,
        }
    }
}

/// A failed evaluation, with the chord it was evaluating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} failed for root {root} and quality '{quality}': {source}", .source.stage())]
pub struct EvaluateError {
    pub root: PitchClass,
    pub quality: String,
    #[source]
    pub source: ChordError,
}

impl EvaluateError {
    pub fn new(root: PitchClass, quality: impl Into<String>, source: ChordError) -> Self {
        Self {
            root,
            quality: quality.into(),
            source,
        }
    }

    pub fn stage(&self) -> Stage {
        self.source.stage()
    }
}
