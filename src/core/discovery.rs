//! Declaration document discovery
//!
//! Expands the configured glob relative to the output directory and drops
//! anything matched by an ignore pattern.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::{ConvertError, Result};

/// Documents found under the output directory
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    /// Matching files, sorted by path
    pub documents: Vec<PathBuf>,
    /// Entries the glob walk could not read
    pub unreadable: Vec<(PathBuf, ConvertError)>,
}

impl DiscoveredFiles {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Finds declaration documents for a batch run
#[derive(Debug)]
pub struct Discovery {
    out_dir: PathBuf,
    pattern: String,
    ignore: Vec<Pattern>,
}

impl Discovery {
    /// Compile the ignore patterns; an invalid pattern aborts the run
    pub fn new(out_dir: impl Into<PathBuf>, pattern: impl Into<String>, ignore_patterns: &[String]) -> Result<Self> {
        let ignore = ignore_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            out_dir: out_dir.into(),
            pattern: pattern.into(),
            ignore,
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Walk the output directory
    pub fn discover(&self) -> Result<DiscoveredFiles> {
        let out_dir = self.out_dir.to_str().ok_or_else(|| ConvertError::InvalidPath {
            path: self.out_dir.clone(),
        })?;
        let full_pattern = format!("{}/{}", Pattern::escape(out_dir.trim_end_matches('/')), self.pattern);

        tracing::debug!(pattern = %full_pattern, "discovering declaration documents");

        let mut found = DiscoveredFiles::default();
        for entry in glob::glob(&full_pattern)? {
            match entry {
                Ok(path) if path.is_file() => {
                    if self.is_ignored(&path) {
                        tracing::trace!(path = %path.display(), "ignored");
                    } else {
                        found.documents.push(path);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    let path = err.path().to_path_buf();
                    tracing::warn!(path = %path.display(), error = %err, "unreadable entry");
                    found.unreadable.push((path, ConvertError::from(err)));
                }
            }
        }

        found.documents.sort();
        found.documents.dedup();

        tracing::debug!(count = found.documents.len(), "discovered declaration documents");
        Ok(found)
    }

    /// Ignore patterns are matched against the path relative to the output directory
    pub fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.out_dir).unwrap_or(path);
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };

        self.ignore
            .iter()
            .any(|pattern| pattern.matches_path_with(relative, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn default_ignore() -> Vec<String> {
        vec!["**/*.d.cts".to_string(), "**/*.d.mts".to_string()]
    }

    #[test]
    fn test_discover_nested_documents() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("utils/deep")).unwrap();
        fs::write(root.join("index.d.ts"), "export {};").unwrap();
        fs::write(root.join("utils/deep/math.d.ts"), "export {};").unwrap();
        fs::write(root.join("index.js"), "").unwrap();

        let discovery = Discovery::new(root, "**/*.d.ts", &default_ignore()).unwrap();
        let found = discovery.discover().unwrap();

        assert_eq!(
            found.documents,
            vec![root.join("index.d.ts"), root.join("utils/deep/math.d.ts")]
        );
        assert!(found.unreadable.is_empty());
    }

    #[test]
    fn test_ignore_patterns_are_relative() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("internal")).unwrap();
        fs::write(root.join("index.d.ts"), "").unwrap();
        fs::write(root.join("index.d.cts"), "").unwrap();
        fs::write(root.join("index.d.mts"), "").unwrap();
        fs::write(root.join("internal/secret.d.ts"), "").unwrap();

        let mut ignore = default_ignore();
        ignore.push("internal/**".to_string());

        let discovery = Discovery::new(root, "**/*", &ignore).unwrap();
        let found = discovery.discover().unwrap();

        assert_eq!(found.documents, vec![root.join("index.d.ts")]);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = tempdir().unwrap();
        let discovery = Discovery::new(temp_dir.path(), "**/*.d.ts", &[]).unwrap();
        let found = discovery.discover().unwrap();
        assert!(found.is_empty());
        assert_eq!(found.len(), 0);
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let err = Discovery::new("dist", "**/*.d.ts", &["***".to_string()]).unwrap_err();
        assert!(matches!(err, ConvertError::GlobPattern { .. }));
    }

    #[test]
    fn test_invalid_pattern() {
        let temp_dir = tempdir().unwrap();
        let discovery = Discovery::new(temp_dir.path(), "***", &[]).unwrap();
        assert!(matches!(discovery.discover(), Err(ConvertError::GlobPattern { .. })));
    }
}
