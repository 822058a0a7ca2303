//! Chord symbols to interval schemas, pitch names and an ASCII keyboard.
//!
//! [`evaluate`] runs the whole pipeline for one root and quality:
//! the quality is parsed into a [`Schema`](schema::Schema), the schema is
//! resolved against the root's major scale, and the resulting notes are
//! drawn on a three-octave keyboard.

pub mod chord;
pub mod corpus;
pub mod diagnostics;
pub mod error;
pub mod key;
pub mod keyboard;
pub mod pitch;
pub mod quiz;
pub mod resolve;
pub mod schema;

pub use chord::{ChordSymbol, Evaluation, evaluate};
pub use error::{ChordError, EvaluateError, Stage};
pub use pitch::PitchClass;
