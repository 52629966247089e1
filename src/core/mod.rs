//! Core scanning engine.
//!
//! ## Pipeline
//!
//! 1. **Walk** (`walker`): visit every directory under the root once, except
//!    those excluded by `ignore` rules, and read the build file found directly
//!    in it
//! 2. **Reassemble** (`statement`): strip `#` comments and join physical lines
//!    until parentheses balance
//! 3. **Extract** (`extract`): classify each statement and collect library
//!    identifiers into one ordered set

pub mod extract;
pub mod ignore;
pub mod statement;
pub mod walker;

pub use extract::{CommandKind, FETCH_CONTENT_PREFIX, extract_statement};
pub use ignore::IgnoreRules;
pub use statement::{StatementBuffer, statements, strip_comment};
pub use walker::{ScanOptions, ScanResult, scan, scan_project};
