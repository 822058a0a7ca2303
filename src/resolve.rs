use crate::error::ChordError;
use crate::key::DiatonicKey;
use crate::pitch::{self, CYCLE, PitchClass};
use crate::schema::Schema;

/// A schema token split into its accidentals and its scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeToken {
    /// Net semitone shift; each flat is -1, each sharp +1
    pub shift: i32,
    /// 1-based scale degree, may exceed 7
    pub degree: usize,
}

fn accidental(c: char) -> Option<i32> {
    match c {
        'b' | '♭' => Some(-1),
        '#' | '♯' => Some(1),
        _ => None,
    }
}

impl DegreeToken {
    pub fn parse(token: &str) -> Result<Self, ChordError> {
        let malformed = || ChordError::MalformedDegreeToken {
            token: token.to_string(),
        };

        let split = token
            .char_indices()
            .find(|(_, c)| accidental(*c).is_none())
            .map(|(i, _)| i)
            .unwrap_or(token.len());
        let (accidentals, number) = token.split_at(split);

        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        let degree = number
            .parse::<usize>()
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(malformed)?;

        let shift: i32 = accidentals.chars().filter_map(accidental).sum();
        if shift.unsigned_abs() as usize >= CYCLE {
            return Err(ChordError::OutOfRangeShift {
                token: token.to_string(),
                shift,
            });
        }

        Ok(Self { shift, degree })
    }

    /// Pitch class this token names in `key`
    pub fn pitch(&self, key: &DiatonicKey) -> PitchClass {
        let note = key.degree(self.degree);
        if self.shift == 0 {
            note
        } else {
            pitch::shift(note, self.shift)
        }
    }
}

/// Resolve every schema token against `key`, in schema order.
/// The first bad token fails the whole chord.
pub fn resolve(schema: &Schema, key: &DiatonicKey) -> Result<Vec<PitchClass>, ChordError> {
    schema
        .tokens()
        .iter()
        .map(|token| DegreeToken::parse(token).map(|t| t.pitch(key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use crate::pitch::PitchClass::*;

    fn notes(root: PitchClass, base: &str, modifiers: &[&str]) -> Result<Vec<PitchClass>, ChordError> {
        let schema = schema::build(base, modifiers)?;
        resolve(&schema, &DiatonicKey::build(root))
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(DegreeToken::parse("5").unwrap(), DegreeToken { shift: 0, degree: 5 });
        assert_eq!(DegreeToken::parse("bb7").unwrap(), DegreeToken { shift: -2, degree: 7 });
        assert_eq!(DegreeToken::parse("#11").unwrap(), DegreeToken { shift: 1, degree: 11 });
        assert_eq!(DegreeToken::parse("♭9").unwrap(), DegreeToken { shift: -1, degree: 9 });
        assert_eq!(DegreeToken::parse("b#3").unwrap(), DegreeToken { shift: 0, degree: 3 });
    }

    #[test]
    fn test_malformed_tokens() {
        for token in ["", "b", "#", "add9", "0", "b0", "7b", "9 "] {
            assert_eq!(
                DegreeToken::parse(token),
                Err(ChordError::MalformedDegreeToken { token: token.into() }),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_shift_of_an_octave_is_rejected() {
        let token = "bbbbbbbbbbbb3";
        assert_eq!(
            DegreeToken::parse(token),
            Err(ChordError::OutOfRangeShift {
                token: token.into(),
                shift: -12,
            })
        );
        assert!(DegreeToken::parse("bbbbbbbbbbb3").is_ok());
    }

    #[test]
    fn test_minor_sixth_in_c() {
        assert_eq!(notes(C, "-6", &[]).unwrap(), vec![C, DSharp, G, GSharp]);
    }

    #[test]
    fn test_diminished_seventh_in_c() {
        assert_eq!(notes(C, "o7", &[]).unwrap(), vec![C, DSharp, FSharp, A]);
    }

    #[test]
    fn test_sharp_wraps_past_b() {
        // E augmented: B# is C
        assert_eq!(notes(E, "+", &[]).unwrap(), vec![E, GSharp, C, DSharp]);
    }

    #[test]
    fn test_flat_wraps_below_c() {
        // Ab minor: Cb is B
        assert_eq!(notes(GSharp, "-7", &[]).unwrap(), vec![GSharp, B, DSharp, FSharp]);
    }

    #[test]
    fn test_extensions_and_modifiers() {
        assert_eq!(
            notes(C, "13", &[]).unwrap(),
            vec![C, E, G, ASharp, D, F, A]
        );
        assert_eq!(
            notes(G, "7", &["b9", "#11"]).unwrap(),
            vec![G, B, D, F, GSharp, CSharp]
        );
    }

    #[test]
    fn test_bad_modifier_fails_whole_chord() {
        assert_eq!(
            notes(C, "-7", &["b9", "add9"]),
            Err(ChordError::MalformedDegreeToken { token: "add9".into() })
        );
    }
}
