//! ASCII piano keyboard, three octaves from C.
//!
//! Every row between the border and the bottom is a run of segments
//! separated by `|`. The four upper rows have one segment per semitone
//! (36 in all, black and white); the three lower rows only have the 21
//! white keys, located through [`WHITE_KEY_POSITIONS`].

use std::collections::BTreeSet;

use crate::error::ChordError;
use crate::pitch::{CYCLE, PitchClass};

/// Octaves drawn on the keyboard
pub const OCTAVES: usize = 3;

/// Absolute semitone positions the keyboard can show
pub const POSITIONS: usize = OCTAVES * CYCLE;

pub const WHITE_FILL: char = '░';
pub const BLACK_FILL: char = '█';

pub const TEMPLATE: [&str; 8] = [
    " ___________________________________________________________________________________ ",
    "|  | | | |  |  | | | | | |  |  | | | |  |  | | | | | |  |  | | | |  |  | | | | | |  |",
    "|  | | | |  |  | | | | | |  |  | | | |  |  | | | | | |  |  | | | |  |  | | | | | |  |",
    "|  | | | |  |  | | | | | |  |  | | | |  |  | | | | | |  |  | | | |  |  | | | | | |  |",
    "|  |_| |_|  |  |_| |_| |_|  |  |_| |_|  |  |_| |_| |_|  |  |_| |_|  |  |_| |_| |_|  |",
    "|   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |",
    "|   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |   |",
    "|___|___|___|___|___|___|___|___|___|___|___|___|___|___|___|___|___|___|___|___|___|",
];

/// Rows whose segments cover every semitone, after the border
const FULL_ROWS: usize = 4;

/// White key ordinal to absolute semitone position
pub const WHITE_KEY_POSITIONS: [usize; 21] = [
    0, 2, 4, 5, 7, 9, 11, 12, 14, 16, 17, 19, 21, 23, 24, 26, 28, 29, 31, 33, 35,
];

/// Absolute positions of a voicing that always climbs: whenever a note's
/// pitch class is lower than the previous one, the voicing crosses into
/// the next octave.
pub fn positions(notes: &[PitchClass]) -> Result<BTreeSet<usize>, ChordError> {
    let mut octave = 0;
    let mut previous = 0;
    let mut set = BTreeSet::new();

    for note in notes {
        let index = note.index();
        if index < previous {
            octave += 1;
        }
        previous = index;

        let position = octave * CYCLE + index;
        if position >= POSITIONS {
            return Err(ChordError::OutOfRangeRender {
                position,
                limit: POSITIONS,
            });
        }
        set.insert(position);
    }

    Ok(set)
}

/// Draw `notes` onto the keyboard template
pub fn render(notes: &[PitchClass]) -> Result<String, ChordError> {
    let pressed = positions(notes)?;
    let mut out = String::new();

    for (row_index, row) in TEMPLATE.iter().enumerate() {
        if row_index == 0 {
            out.push_str(row);
        } else {
            out.push_str(&fill_row(row, row_index <= FULL_ROWS, &pressed));
        }
        out.push('\n');
    }

    Ok(out)
}

fn fill_row(row: &str, full: bool, pressed: &BTreeSet<usize>) -> String {
    let inner = &row[1..row.len() - 1];
    let segments: Vec<String> = inner
        .split('|')
        .enumerate()
        .map(|(ordinal, segment)| {
            let (position, fill) = if full {
                let fill = if PitchClass::from_index(ordinal).is_natural() {
                    WHITE_FILL
                } else {
                    BLACK_FILL
                };
                (Some(ordinal), fill)
            } else {
                (WHITE_KEY_POSITIONS.get(ordinal).copied(), WHITE_FILL)
            };

            match position {
                Some(p) if pressed.contains(&p) => segment.chars().map(|_| fill).collect(),
                _ => segment.to_string(),
            }
        })
        .collect();

    format!("|{}|", segments.join("|"))
}
