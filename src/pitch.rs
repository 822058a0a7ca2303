use std::fmt;
use std::str::FromStr;

use crate::error::ChordError;

/// Number of pitch classes in the chromatic cycle
pub const CYCLE: usize = 12;

/// Pitch classes of the chromatic scale, sharps and flats folded together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

/// The canonical 12-cycle, in index order
pub const ALL: [PitchClass; CYCLE] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// Position in the chromatic cycle (C=0, B=11)
    pub fn index(self) -> usize {
        match self {
            PitchClass::C => 0,
            PitchClass::CSharp => 1,
            PitchClass::D => 2,
            PitchClass::DSharp => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::FSharp => 6,
            PitchClass::G => 7,
            PitchClass::GSharp => 8,
            PitchClass::A => 9,
            PitchClass::ASharp => 10,
            PitchClass::B => 11,
        }
    }

    /// Pitch class at `index`, wrapping around the cycle
    pub fn from_index(index: usize) -> Self {
        ALL[index % CYCLE]
    }

    /// Display name; black keys carry both spellings
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#/Db",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#/Eb",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#/Gb",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#/Ab",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#/Bb",
            PitchClass::B => "B",
        }
    }

    /// Whether this pitch class sits on a white key
    pub fn is_natural(self) -> bool {
        !self.name().contains('/')
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;

    /// Accepts "C", "c#", "Db", "E♭" or a full dual name such as "F#/Gb"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(pc) = ALL.iter().find(|pc| pc.name() == trimmed) {
            return Ok(*pc);
        }

        let unknown = || ChordError::UnknownRoot {
            text: s.to_string(),
        };

        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(unknown)?;
        let natural = match letter.to_ascii_uppercase() {
            'C' => PitchClass::C,
            'D' => PitchClass::D,
            'E' => PitchClass::E,
            'F' => PitchClass::F,
            'G' => PitchClass::G,
            'A' => PitchClass::A,
            'B' => PitchClass::B,
            _ => return Err(unknown()),
        };

        let mut steps = 0i32;
        for c in chars {
            match c {
                '#' | '♯' => steps += 1,
                'b' | '♭' => steps -= 1,
                _ => return Err(unknown()),
            }
        }
        Ok(shift(natural, steps))
    }
}

/// The 12-cycle starting at `root`
pub fn rotate(root: PitchClass) -> [PitchClass; CYCLE] {
    let start = root.index();
    std::array::from_fn(|i| ALL[(start + i) % CYCLE])
}

/// Move `steps` semitones along the canonical cycle, wrapping both ways
pub fn shift(pitch: PitchClass, steps: i32) -> PitchClass {
    let index = (pitch.index() as i32 + steps).rem_euclid(CYCLE as i32);
    ALL[index as usize]
}
