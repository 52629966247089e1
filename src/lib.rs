//! libscan - third-party library inventory for CMake projects
//!
//! libscan is a CLI tool and library that walks a CMake project tree, reads
//! every `CMakeLists.txt` and lists the distinct libraries the project
//! declares through `find_package`, `FetchContent_Declare`,
//! `FetchContent_MakeAvailable` and `target_link_libraries`. It does not run
//! CMake and does not evaluate the language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, prompting, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Tree walking, statement reassembly and library extraction

pub mod cli;
pub mod config;
pub mod core;
