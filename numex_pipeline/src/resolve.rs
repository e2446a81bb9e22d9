//! Locating the files a run should process.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::debug;

use crate::error::{PipelineError, Result};

/// Resolve a user-supplied path: as given if it exists, otherwise joined
/// under `input_dir`.
pub fn resolve_target(target: &Path, input_dir: &Path) -> Result<PathBuf> {
    if target.exists() {
        return Ok(target.to_path_buf());
    }

    let candidate = input_dir.join(target);
    debug!(
        "{} not found, trying {}",
        target.display(),
        candidate.display()
    );
    if candidate.exists() {
        Ok(candidate)
    } else {
        Err(PipelineError::NotFound { path: candidate })
    }
}

/// List every entry directly under `input_dir`, skipping dot-files.
///
/// Directories are returned too; reading one fails later like any other
/// unreadable input.
pub fn list_inputs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*",
        Pattern::escape(&input_dir.to_string_lossy()).trim_end_matches('/')
    );
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut inputs = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry.map_err(|e| PipelineError::List {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        inputs.push(path);
    }

    if inputs.is_empty() {
        return Err(PipelineError::EmptyInputDir {
            dir: input_dir.to_path_buf(),
        });
    }

    debug!("Found {} inputs in {}", inputs.len(), input_dir.display());
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("numex_res_{tag}_{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_as_given() {
        let dir = temp_dir("given");
        let file = dir.join("report.txt");
        std::fs::write(&file, "42").unwrap();

        let resolved = resolve_target(&file, Path::new("does-not-matter")).unwrap();
        assert_eq!(resolved, file);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_resolve_under_input_dir() {
        let dir = temp_dir("under");
        std::fs::write(dir.join("notes.txt"), "42").unwrap();

        let resolved = resolve_target(Path::new("notes.txt"), &dir).unwrap();
        assert_eq!(resolved, dir.join("notes.txt"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_resolve_missing_reports_joined_path() {
        let dir = temp_dir("missing");

        let err = resolve_target(Path::new("ghost.txt"), &dir).unwrap_err();
        match err {
            PipelineError::NotFound { path } => assert_eq!(path, dir.join("ghost.txt")),
            other => panic!("Expected NotFound, got {other:?}"),
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_inputs_skips_hidden_and_is_flat() {
        let dir = temp_dir("list");
        std::fs::write(dir.join("b.txt"), "").unwrap();
        std::fs::write(dir.join("a.log"), "").unwrap();
        std::fs::write(dir.join(".hidden"), "").unwrap();
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("nested").join("deep.txt"), "").unwrap();

        let inputs = list_inputs(&dir).unwrap();
        let names: Vec<String> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names.len(), 3);
        assert!(names.contains(&"a.log".to_string()));
        assert!(names.contains(&"b.txt".to_string()));
        assert!(names.contains(&"nested".to_string()));
        assert!(!names.contains(&".hidden".to_string()));
        assert!(!names.contains(&"deep.txt".to_string()));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_inputs_empty() {
        let dir = temp_dir("empty");
        std::fs::write(dir.join(".only_hidden"), "").unwrap();

        let err = list_inputs(&dir).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInputDir { .. }));
        assert!(err.is_not_found());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
