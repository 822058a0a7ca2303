use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::chord::evaluate;
use crate::error::EvaluateError;
use crate::pitch::ALL;

/// Parse a newline-delimited list of chord qualities.
/// Blank lines and `#` comments are skipped; order is kept.
pub fn parse(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Read a chord list from disk
pub fn load(path: &Path) -> Result<Vec<String>> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read chord list {}", path.display()))?;
    let qualities = parse(&input);
    if qualities.is_empty() {
        bail!("chord list {} has no chords", path.display());
    }
    Ok(qualities)
}

/// Evaluate every quality over all twelve roots, collecting each failure
pub fn check(qualities: &[String]) -> Vec<EvaluateError> {
    qualities
        .iter()
        .flat_map(|quality| ALL.iter().map(move |root| evaluate(*root, quality)))
        .filter_map(|result| result.err())
        .collect()
}
