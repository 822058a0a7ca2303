use std::fmt;

use crate::error::ChordError;

/// Marks a major seventh; suppresses the automatic flats
pub const MAJOR_MARKER: &str = "△";

/// Schema of a chord with no recognised quality
pub const DEFAULT_TRIAD: [&str; 3] = ["1", "3", "5"];

/// Extension degrees stacked by a numeric quality such as "9" or "13"
pub const EXTENSIONS: [u32; 4] = [7, 9, 11, 13];

/// A quality glyph and the schema it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityPattern {
    pub glyph: &'static str,
    pub template: &'static [&'static str],
    pub description: Option<&'static str>,
}

/// Quality patterns in matching priority; the first glyph found wins
pub const QUALITY_PATTERNS: &[QualityPattern] = &[
    QualityPattern {
        glyph: "ø",
        template: &["1", "b3", "b5", "b7"],
        description: Some("Same as: -7 b5"),
    },
    QualityPattern {
        glyph: "o",
        template: &["1", "b3", "b5", "bb7"],
        description: None,
    },
    QualityPattern {
        glyph: "-",
        template: &["1", "b3", "5"],
        description: None,
    },
    QualityPattern {
        glyph: "+",
        template: &["1", "3", "#5"],
        description: Some("Augmented"),
    },
    QualityPattern {
        glyph: "sus4",
        template: &["1", "4", "5"],
        description: None,
    },
];

/// Ordered degree tokens of one chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    tokens: Vec<String>,
    description: Option<&'static str>,
}

impl Schema {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Description of the matched quality pattern, when it has one
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.tokens.join(", "))
    }
}

/// Build the schema of a base quality token followed by modifier tokens.
///
/// The base token is read as: an optional major marker, at most one
/// quality glyph from [`QUALITY_PATTERNS`], then either nothing, a bare
/// "6", or an extension number of 7 or more. Modifiers are appended
/// untouched; they are only checked when the schema is resolved.
pub fn build(base: &str, modifiers: &[&str]) -> Result<Schema, ChordError> {
    let mut tokens: Vec<String> = DEFAULT_TRIAD.iter().map(|t| t.to_string()).collect();
    let mut has_flats = true;
    let mut description = None;
    let mut rest = base.to_string();

    if rest.contains(MAJOR_MARKER) {
        has_flats = false;
        rest = rest.replace(MAJOR_MARKER, "");
    }

    if let Some(pattern) = QUALITY_PATTERNS.iter().find(|p| rest.contains(p.glyph)) {
        tokens = pattern.template.iter().map(|t| t.to_string()).collect();
        rest = rest.replace(pattern.glyph, "");
        description = pattern.description;
    }

    if rest == "6" {
        // bare 6 is flattened unless marked major
        tokens.push(if has_flats { "b6" } else { "6" }.to_string());
    } else if !rest.is_empty() {
        let highest = extension_number(&rest).ok_or_else(|| ChordError::MalformedQuality {
            quality: base.to_string(),
            remainder: rest.clone(),
        })?;
        for degree in EXTENSIONS.into_iter().filter(|d| *d <= highest) {
            if has_degree(&tokens, degree) {
                continue;
            }
            let flat = if degree == 7 && has_flats { "b" } else { "" };
            tokens.push(format!("{}{}", flat, degree));
        }
    } else if tokens.len() < 4 {
        tokens.push("7".to_string());
    }

    tokens.extend(modifiers.iter().map(|m| m.to_string()));

    Ok(Schema {
        tokens,
        description,
    })
}

fn extension_number(text: &str) -> Option<u32> {
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().filter(|n| *n >= EXTENSIONS[0])
}

fn has_degree(tokens: &[String], degree: u32) -> bool {
    let wanted = degree.to_string();
    tokens
        .iter()
        .any(|t| t.trim_start_matches(['b', '#']) == wanted)
}
