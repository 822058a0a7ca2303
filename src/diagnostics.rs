use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::error::EvaluateError;

/// Full diagnostic text for a failed evaluation
pub fn report(err: &EvaluateError, at: DateTime<Utc>) -> String {
    let mut text = format!(
        "at {}\nfor the following root {} and chord {}\nstage: {}\n{}\n",
        at.to_rfc3339(),
        err.root,
        err.quality,
        err.stage(),
        err
    );
    let mut cause = err.source();
    while let Some(e) = cause {
        text.push_str(&format!("caused by: {}\n", e));
        cause = e.source();
    }
    text
}

/// Write a timestamped log for `err` into `dir`, creating it if needed.
/// Returns the path written.
pub fn write_log(dir: &Path, err: &EvaluateError) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let now = Utc::now();
    let path = dir.join(format!("error-{}.log", now.format("%Y-%m-%dT%H-%M-%S%.6fZ")));
    fs::write(&path, report(err, now))
        .with_context(|| format!("failed to write log {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::evaluate;
    use crate::pitch::PitchClass;

    #[test]
    fn test_report_names_root_quality_and_token() {
        let err = evaluate(PitchClass::F, "-7 add9").unwrap_err();
        let text = report(&err, Utc::now());
        assert!(text.contains("root F and chord -7 add9"));
        assert!(text.contains("stage: resolution"));
        assert!(text.contains("caused by: malformed degree token 'add9'"));
    }

    #[test]
    fn test_write_log_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");
        let err = evaluate(PitchClass::C, "xyz").unwrap_err();

        let path = write_log(&dir, &err).unwrap();
        assert!(path.starts_with(&dir));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("error-"));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("chord xyz"));
        assert!(written.contains("stage: parsing"));
    }
}
