//! Library extraction from a single reassembled CMake statement.
//!
//! Recognized commands, checked in this order (first match wins):
//! - `find_package(Name ...)` -> `Name`
//! - `FetchContent_Declare(Name ...)` -> `FetchContent::Name`
//! - `FetchContent_MakeAvailable(Name ...)` -> `FetchContent::Name`
//! - `target_link_libraries(Target [scope] Lib...)` -> each `Lib`
//!
//! Everything else is ignored. Extraction never fails; a statement that
//! mentions a keyword but does not have the expected shape yields nothing.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

/// Prefix applied to projects declared through the FetchContent module.
pub const FETCH_CONTENT_PREFIX: &str = "FetchContent::";

/// Link scope keywords that are never library names.
const SCOPE_KEYWORDS: &[&str] = &["public", "private", "interface"];

static FIND_PACKAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)find_package\s*\(\s*([A-Za-z0-9_]+)").unwrap());
static FETCH_CONTENT_DECLARE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)FetchContent_Declare\s*\(\s*([A-Za-z0-9_]+)").unwrap());
static FETCH_CONTENT_MAKE_AVAILABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)FetchContent_MakeAvailable\s*\(\s*([A-Za-z0-9_]+)").unwrap()
});
static TARGET_LINK_LIBRARIES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)target_link_libraries\s*\(([^)]*)\)").unwrap());

/// Kind of dependency declaration a statement was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    FindPackage,
    FetchContentDeclare,
    FetchContentMakeAvailable,
    TargetLinkLibraries,
}

impl CommandKind {
    /// Classification order matters: a statement is handled by the first kind
    /// whose keyword it contains.
    const ALL: [CommandKind; 4] = [
        CommandKind::FindPackage,
        CommandKind::FetchContentDeclare,
        CommandKind::FetchContentMakeAvailable,
        CommandKind::TargetLinkLibraries,
    ];

    /// Lowercase keyword used for the containment check.
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::FindPackage => "find_package",
            CommandKind::FetchContentDeclare => "fetchcontent_declare",
            CommandKind::FetchContentMakeAvailable => "fetchcontent_makeavailable",
            CommandKind::TargetLinkLibraries => "target_link_libraries",
        }
    }

    /// Classify a statement by case-insensitive keyword containment.
    pub fn classify(statement: &str) -> Option<Self> {
        let lower = statement.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| lower.contains(kind.keyword()))
    }
}

/// Extract library identifiers from one logical statement into `out`.
pub fn extract_statement(statement: &str, out: &mut BTreeSet<String>) {
    let Some(kind) = CommandKind::classify(statement) else {
        return;
    };

    match kind {
        CommandKind::FindPackage => {
            if let Some(name) = first_argument(&FIND_PACKAGE_REGEX, statement) {
                out.insert(name.to_string());
            }
        }
        CommandKind::FetchContentDeclare => {
            if let Some(name) = first_argument(&FETCH_CONTENT_DECLARE_REGEX, statement) {
                out.insert(format!("{FETCH_CONTENT_PREFIX}{name}"));
            }
        }
        CommandKind::FetchContentMakeAvailable => {
            if let Some(name) = first_argument(&FETCH_CONTENT_MAKE_AVAILABLE_REGEX, statement) {
                out.insert(format!("{FETCH_CONTENT_PREFIX}{name}"));
            }
        }
        CommandKind::TargetLinkLibraries => {
            let Some(caps) = TARGET_LINK_LIBRARIES_REGEX.captures(statement) else {
                return;
            };
            // First token is the target being linked, not a dependency.
            let libraries = caps[1]
                .split_whitespace()
                .skip(1)
                .filter_map(clean_link_token);
            out.extend(libraries.map(str::to_string));
        }
    }
}

/// First identifier captured right after the command's opening parenthesis.
fn first_argument<'a>(regex: &Regex, statement: &'a str) -> Option<&'a str> {
    regex
        .captures(statement)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Clean a `target_link_libraries` argument.
///
/// Returns `None` for tokens that are empty after trimming punctuation or
/// that are link scope keywords.
fn clean_link_token(token: &str) -> Option<&str> {
    let token = token
        .trim_end_matches([')', ',', ';'])
        .trim_start_matches('(');

    if token.is_empty() {
        return None;
    }

    let lower = token.to_lowercase();
    if SCOPE_KEYWORDS.contains(&lower.as_str()) {
        return None;
    }

    Some(token)
}
