use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_find_package() -> Result<()> {
    let test = CliTest::with_file(
        "CMakeLists.txt",
        r#"
cmake_minimum_required(VERSION 3.10)
find_package(Qt5 REQUIRED COMPONENTS Core Widgets) # Qt5
find_package(Boost 1.65 COMPONENTS system filesystem) # Boost
"#,
    )?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    Libraries used by .:
    1. Boost
    2. Qt5

    ✓ Scanned 1 build file, found 2 libraries
    ");

    Ok(())
}

#[test]
fn test_subdirectories_and_all_declaration_kinds() -> Result<()> {
    let test = CliTest::with_file(
        "CMakeLists.txt",
        "find_package(RootLib)\nadd_subdirectory(Sub)\n",
    )?;
    test.write_file(
        "Sub/CMakeLists.txt",
        r#"
# find_package(Commented)
FetchContent_Declare(SubProject)
FetchContent_MakeAvailable(SubProject)
target_link_libraries(Target
    PRIVATE LibFromSub # linked privately
)
"#,
    )?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    Libraries used by .:
    1. FetchContent::SubProject
    2. LibFromSub
    3. RootLib

    ✓ Scanned 2 build files, found 3 libraries
    ");

    Ok(())
}

#[test]
fn test_no_libraries() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "project(empty)\n")?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("No libraries found"));

    Ok(())
}

#[test]
fn test_invalid_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["scan", "does-not-exist"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("does-not-exist does not exist or is not a directory"));

    Ok(())
}

#[test]
fn test_root_is_a_file() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "find_package(A)")?;

    let output = test
        .command()
        .args(["scan", "CMakeLists.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file(
        "CMakeLists.txt",
        "target_link_libraries(MyExe PRIVATE LibraryA LibraryB)\n\
         target_link_libraries(AnotherExe PUBLIC LibraryC::component)\n",
    )?;

    let output = test.scan_command().args(["--format", "json"]).output()?;

    assert!(output.status.success());
    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        json["libraries"],
        serde_json::json!(["LibraryA", "LibraryB", "LibraryC::component"])
    );
    assert_eq!(json["buildFiles"], 1);
    assert_eq!(json["skipped"], 0);

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".libscanrc.json", r#"{ "ignores": ["**/third_party"] }"#)?;
    test.write_file("CMakeLists.txt", "find_package(Own)")?;
    test.write_file("third_party/zlib/CMakeLists.txt", "find_package(Vendored)")?;

    let output = test.scan_command().args(["--format", "json"]).output()?;

    assert!(output.status.success());
    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["libraries"], serde_json::json!(["Own"]));

    Ok(())
}

#[test]
fn test_literal_and_root_relative_ignores() -> Result<()> {
    for ignore in ["third_party", "third_party/**"] {
        let test = CliTest::new()?;
        test.write_file(
            ".libscanrc.json",
            &format!(r#"{{ "ignores": ["{}"] }}"#, ignore),
        )?;
        test.write_file("CMakeLists.txt", "find_package(Own)")?;
        test.write_file("third_party/CMakeLists.txt", "find_package(Vendored)")?;
        test.write_file("third_party/zlib/CMakeLists.txt", "find_package(Zlib)")?;
        test.write_file("src/third_party/CMakeLists.txt", "find_package(Nested)")?;

        let output = test.scan_command().args(["--format", "json"]).output()?;

        assert!(output.status.success());
        let json: Value = serde_json::from_str(&stdout(&output))?;
        assert_eq!(
            json["libraries"],
            serde_json::json!(["Nested", "Own"]),
            "ignores: {ignore}"
        );
    }

    Ok(())
}

#[test]
fn test_verbose_reports_ancestor_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".libscanrc.json", "{}")?;
    test.write_file("sub/CMakeLists.txt", "find_package(A)")?;

    let output = test.command().args(["scan", "sub", "--verbose"]).output()?;

    assert!(output.status.success());
    let config_path = test.root().join(".libscanrc.json");
    assert!(stderr(&output).contains(&format!("Using config from {}", config_path.display())));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".libscanrc.json", r#"{ "ignores": ["**/[invalid"] }"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_verbose_reports_processed_files() -> Result<()> {
    let test = CliTest::with_file("CMakeLists.txt", "find_package(A)")?;

    let output = test.scan_command().arg("--verbose").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("Processing"));
    assert!(stderr(&output).contains("CMakeLists.txt"));

    Ok(())
}

#[test]
fn test_interactive_prompt() -> Result<()> {
    let test = CliTest::with_file("proj/CMakeLists.txt", "FetchContent_Declare(fmt URL x)")?;
    let input = format!("{}\n\n", test.root().join("proj").display());

    let output = test.interactive_scan(&input)?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Enter the path to the CMake project root: "));
    assert!(out.contains("1. FetchContent::fmt"));
    assert!(out.trim_end().ends_with("Press Enter to exit..."));

    Ok(())
}

#[test]
fn test_interactive_invalid_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.interactive_scan("missing\n")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("Press Enter to exit"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));

    Ok(())
}
