//! Directory ignore rules from the `ignores` config list.
//!
//! Entries without wildcards are literal directory paths relative to the scan
//! root and ignore everything below them. Entries with `*` or `?` are glob
//! patterns matched against the root-relative path, both bare (`src/build`)
//! and dot-prefixed (`./src/build`) so that `**/build` also hits `build`
//! directly under the root. Directories above the root never take part.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    /// Compile an `ignores` list.
    ///
    /// Returns an error naming the first invalid glob pattern.
    pub fn new(ignores: &[String]) -> Result<Self> {
        let mut rules = Self::default();

        for entry in ignores {
            if is_glob_pattern(entry) {
                let pattern = Pattern::new(entry)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", entry))?;
                rules.patterns.push(pattern);
                // `dir/**` also covers `dir` itself.
                if let Some(dir) = entry.strip_suffix("/**") {
                    if let Ok(pattern) = Pattern::new(dir) {
                        rules.patterns.push(pattern);
                    }
                }
            } else {
                let path: PathBuf = Path::new(entry)
                    .components()
                    .filter(|c| !matches!(c, Component::CurDir))
                    .collect();
                // "." or "" would ignore the whole tree.
                if !path.as_os_str().is_empty() {
                    rules.literal_paths.push(path);
                }
            }
        }

        Ok(rules)
    }

    pub fn is_empty(&self) -> bool {
        self.literal_paths.is_empty() && self.patterns.is_empty()
    }

    /// True if `path`, a directory found while walking `root`, is ignored.
    pub fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };
        if relative.as_os_str().is_empty() {
            return false;
        }

        if self
            .literal_paths
            .iter()
            .any(|ignore_path| relative.starts_with(ignore_path))
        {
            return true;
        }

        let relative_str = relative.to_string_lossy();
        let dotted = Path::new(".").join(relative);
        let dotted_str = dotted.to_string_lossy();
        self.patterns
            .iter()
            .any(|p| p.matches(&relative_str) || p.matches(&dotted_str))
    }
}
