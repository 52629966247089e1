use std::{
    collections::{BTreeSet, HashSet},
    fs, io,
    path::{Path, PathBuf},
};

use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

use super::{extract::extract_statement, ignore::IgnoreRules, statement::statements};
use crate::config::DEFAULT_BUILD_FILE_NAME;

/// Options controlling a single scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Name of the build-description file looked up in every directory.
    pub build_file_name: String,
    /// Directories matching these rules are not descended into.
    pub ignores: IgnoreRules,
    /// Print progress and warnings to stderr.
    pub verbose: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            build_file_name: DEFAULT_BUILD_FILE_NAME.to_string(),
            ignores: IgnoreRules::default(),
            verbose: false,
        }
    }
}

/// Result of scanning a project tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Distinct library identifiers, in lexicographic order.
    pub libraries: BTreeSet<String>,
    /// Number of build files read.
    pub build_files: usize,
    /// Number of build files or directories that could not be read.
    pub skipped_count: usize,
}

/// Scan `root` and every directory below it for declared libraries.
///
/// A root that does not exist or is not a directory yields an empty result.
/// Unreadable files and directories are skipped and counted.
pub fn scan(root: &Path, options: &ScanOptions) -> ScanResult {
    if !root.is_dir() {
        return ScanResult::default();
    }
    ScanSession::new(options).run(root)
}

/// Scan with default options and return only the library set.
pub fn scan_project(root: &Path) -> BTreeSet<String> {
    scan(root, &ScanOptions::default()).libraries
}

/// State of one scan. Created per `scan` call so that independent scans
/// never share visited directories.
struct ScanSession<'a> {
    options: &'a ScanOptions,
    visited: HashSet<PathBuf>,
    result: ScanResult,
}

impl<'a> ScanSession<'a> {
    fn new(options: &'a ScanOptions) -> Self {
        Self {
            options,
            visited: HashSet::new(),
            result: ScanResult::default(),
        }
    }

    fn run(mut self, root: &Path) -> ScanResult {
        let options = self.options;
        let visited = &mut self.visited;

        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| should_enter(entry, root, options, visited));

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let build_file = entry.path().join(&options.build_file_name);
                    read_build_file(&build_file, options, &mut self.result);
                }
                // Symlink cycles are already-visited directories, not failures.
                Err(err) if err.loop_ancestor().is_some() => {}
                // A link to a missing target, e.g. compile_commands.json
                // before the first build.
                Err(err) if is_dangling_link(&err) => {
                    if options.verbose {
                        eprintln!("{} {}", "Skipping broken link".dimmed(), err);
                    }
                }
                Err(err) => {
                    self.result.skipped_count += 1;
                    if options.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), err);
                    }
                }
            }
        }

        self.result
    }
}

/// Decide whether a walked entry is a directory we still have to visit, and
/// record it as visited.
fn should_enter(
    entry: &DirEntry,
    root: &Path,
    options: &ScanOptions,
    visited: &mut HashSet<PathBuf>,
) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let path = entry.path();
    if entry.depth() > 0 && options.ignores.is_ignored(root, path) {
        return false;
    }

    let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    visited.insert(key)
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.path().is_some_and(|path| path.is_symlink())
        && err
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

/// Read one build file, if present, and extract every statement in it.
fn read_build_file(path: &Path, options: &ScanOptions, result: &mut ScanResult) {
    if !path.is_file() {
        return;
    }

    if options.verbose {
        eprintln!("{} {}", "Processing".bold().green(), path.display());
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            result.skipped_count += 1;
            if options.verbose {
                eprintln!(
                    "{} Cannot read {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    e
                );
            }
            return;
        }
    };

    let content = String::from_utf8_lossy(&bytes);
    for statement in statements(&content) {
        extract_statement(&statement, &mut result.libraries);
    }
    result.build_files += 1;
}
