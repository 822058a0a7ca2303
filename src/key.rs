use crate::pitch::{self, PitchClass};

/// Semitone offsets of the major (Ionian) scale
pub const IONIAN: [usize; 7] = [0, 2, 4, 5, 7, 9, 11];

/// The major scale of a root, degree 1 first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiatonicKey {
    pub root: PitchClass,
    pub scale: [PitchClass; 7],
}

impl DiatonicKey {
    pub fn build(root: PitchClass) -> Self {
        let rotated = pitch::rotate(root);
        Self {
            root,
            scale: IONIAN.map(|offset| rotated[offset]),
        }
    }

    /// Pitch class of a 1-based scale degree; 9, 11, 13 fold onto 2, 4, 6
    pub fn degree(&self, degree: usize) -> PitchClass {
        self.scale[(degree + 6) % 7]
    }
}
