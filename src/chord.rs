use std::fmt;

use crate::error::EvaluateError;
use crate::key::DiatonicKey;
use crate::keyboard;
use crate::pitch::PitchClass;
use crate::resolve;
use crate::schema::{self, Schema};

/// A root and the quality text written after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol {
    pub root: PitchClass,
    pub quality: String,
}

impl ChordSymbol {
    pub fn new(root: PitchClass, quality: impl Into<String>) -> Self {
        Self {
            root,
            quality: quality.into(),
        }
    }

    /// First whitespace-separated word; empty for a bare root
    pub fn base(&self) -> &str {
        self.quality.split_whitespace().next().unwrap_or("")
    }

    /// Remaining words, taken as extra schema tokens
    pub fn modifiers(&self) -> Vec<&str> {
        self.quality.split_whitespace().skip(1).collect()
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)
    }
}

/// Everything derived from one chord symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub symbol: ChordSymbol,
    pub schema: Schema,
    pub notes: Vec<PitchClass>,
    pub keyboard: String,
}

impl Evaluation {
    pub fn note_names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|n| n.name()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.symbol)?;
        writeln!(f, "{}", self.schema)?;
        writeln!(f, "{}", self.note_names().join(" "))?;
        write!(f, "{}", self.keyboard)
    }
}

/// Parse, resolve and render one chord
pub fn evaluate(root: PitchClass, quality: &str) -> Result<Evaluation, EvaluateError> {
    let symbol = ChordSymbol::new(root, quality);
    let fail = |e| EvaluateError::new(root, quality, e);

    let schema = schema::build(symbol.base(), &symbol.modifiers()).map_err(fail)?;
    let key = DiatonicKey::build(root);
    let notes = resolve::resolve(&schema, &key).map_err(fail)?;
    let keyboard = keyboard::render(&notes).map_err(fail)?;

    Ok(Evaluation {
        symbol,
        schema,
        notes,
        keyboard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ChordError, Stage};
    use crate::keyboard::TEMPLATE;
    use crate::pitch::ALL;
    use crate::pitch::PitchClass::*;

    #[test]
    fn test_split_base_and_modifiers() {
        let symbol = ChordSymbol::new(C, "sus4  b9\t#11");
        assert_eq!(symbol.base(), "sus4");
        assert_eq!(symbol.modifiers(), vec!["b9", "#11"]);

        let bare = ChordSymbol::new(C, "");
        assert_eq!(bare.base(), "");
        assert!(bare.modifiers().is_empty());
    }

    #[test]
    fn test_minor_sixth() {
        let eval = evaluate(C, "-6").unwrap();
        assert_eq!(eval.schema.tokens(), ["1", "b3", "5", "b6"]);
        assert_eq!(eval.note_names(), vec!["C", "D#/Eb", "G", "G#/Ab"]);
    }

    #[test]
    fn test_minor_major_seventh() {
        let eval = evaluate(C, "-△7").unwrap();
        assert_eq!(eval.schema.tokens(), ["1", "b3", "5", "7"]);
    }

    #[test]
    fn test_half_diminished() {
        let eval = evaluate(C, "ø7").unwrap();
        assert_eq!(eval.schema.tokens(), ["1", "b3", "b5", "b7"]);
        assert_eq!(eval.notes, vec![C, DSharp, FSharp, ASharp]);
    }

    #[test]
    fn test_well_formed_for_every_root() {
        for root in ALL {
            for quality in ["", "7", "-7", "△7", "ø7", "o7", "+", "sus4", "-6", "9", "13", "7 b9 #11"] {
                let eval = evaluate(root, quality).unwrap();
                assert!(!eval.schema.is_empty());
                assert_eq!(eval.notes.len(), eval.schema.len());
                assert_eq!(eval.keyboard.lines().next(), Some(TEMPLATE[0]));
                assert_eq!(eval.keyboard.lines().count(), TEMPLATE.len());
            }
        }
    }

    #[test]
    fn test_stage_of_each_failure() {
        let err = evaluate(D, "maj7").unwrap_err();
        assert_eq!(err.stage(), Stage::Parsing);
        assert_eq!(err.quality, "maj7");

        let err = evaluate(D, "-7 add9").unwrap_err();
        assert_eq!(err.stage(), Stage::Resolution);
        assert_eq!(
            err.source,
            ChordError::MalformedDegreeToken { token: "add9".into() }
        );

        // B 13 stacked with a high tail climbs past three octaves
        let err = evaluate(B, "13 1 3 5 7 9").unwrap_err();
        assert_eq!(err.stage(), Stage::Rendering);
        assert!(matches!(err.source, ChordError::OutOfRangeRender { .. }));
    }

    #[test]
    fn test_display() {
        let text = evaluate(G, "7").unwrap().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("G7"));
        assert_eq!(lines.next(), Some("[1, 3, 5, b7]"));
        assert_eq!(lines.next(), Some("G B D F"));
        assert_eq!(lines.next(), Some(TEMPLATE[0]));
    }
}
