/// Integration tests for the sanity checker
///
/// These tests run the matcher, reporter and driver together on real files,
/// and check the binary's exit codes.

use std::path::{Path, PathBuf};
use std::process::Command;

use stack_sanity::app::{self, RunSummary};
use stack_sanity::{check_file, FixedSelector, Reporter, SanityConfig};

fn run_to_string(paths: &[PathBuf], quote_index: usize) -> (String, RunSummary) {
    let config = SanityConfig::builtin().expect("Failed to build config");
    let mut reporter = Reporter::new(Vec::new(), FixedSelector(quote_index), false);
    let summary = app::run(paths, &config, &mut reporter).expect("Failed to write report");
    let output = String::from_utf8(reporter.into_inner()).expect("Report is not UTF-8");
    (output, summary)
}

#[test]
fn test_check_test_file() {
    let config = SanityConfig::builtin().unwrap();
    let result = check_file(Path::new("tests/test_data.py"), &config.rules);

    assert!(result.readable());
    assert_eq!(
        result.matched,
        vec![
            "Found 'eval' - Congratulations, you've installed a backdoor!",
            "Wildcard import detected - Namespace pollution incoming!",
            "Infinite loop found - Your CPU sends its regards",
            "Direct system calls - Because security is someone else's problem",
            "Hardcoded date - This code expires like milk",
            "TODO comment - Future you will hate present you",
            "'pass' statement - The programming equivalent of shrugging",
        ]
    );
}

#[test]
fn test_same_file_twice_gives_same_matches() {
    let config = SanityConfig::builtin().unwrap();
    let first = check_file(Path::new("tests/test_data.py"), &config.rules);
    let second = check_file(Path::new("tests/test_data.py"), &config.rules);
    assert_eq!(first.matched, second.matched);
}

#[test]
fn test_empty_file_is_clean() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let empty_file_path = temp_dir.path().join("empty.py");
    std::fs::write(&empty_file_path, "").expect("Failed to write empty file");

    let (output, summary) = run_to_string(&[empty_file_path.clone()], 0);

    assert_eq!(
        output,
        format!(
            "✅ {} looks... suspiciously clean. Did you actually write this?\n",
            empty_file_path.display()
        )
    );
    assert_eq!(
        summary,
        RunSummary { files_checked: 1, clean: 1, unreadable: 0, total_issues: 0 }
    );
}

#[test]
fn test_missing_file_does_not_stop_later_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("missing.py");
    let present = temp_dir.path().join("present.py");
    std::fs::write(&present, "eval(x)\n").unwrap();

    let (output, summary) = run_to_string(&[missing.clone(), present.clone()], 2);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with(&format!("Failed to read {}: ", missing.display())));
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], format!("🔍 Checking: {}", present.display()));
    assert_eq!(lines[3], "Found 1 potential issue(s):");
    assert_eq!(
        lines[4],
        "  ⚠️  Found 'eval' - Congratulations, you've installed a backdoor!"
    );
    assert_eq!(lines[5], "");
    assert_eq!(
        lines[6],
        "💡 Wisdom: If it's stupid but it works, it's still stupid and you're lucky."
    );
    assert_eq!(lines.len(), 7);

    assert_eq!(
        summary,
        RunSummary { files_checked: 2, clean: 0, unreadable: 1, total_issues: 1 }
    );
}

#[test]
fn test_files_reported_in_given_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let clean = temp_dir.path().join("clean.py");
    let dated = temp_dir.path().join("dated.py");
    std::fs::write(&clean, "x = 5\n").unwrap();
    std::fs::write(&dated, "# TODO: fix\nwhen = '2024-01-01'\n").unwrap();

    let (output, summary) = run_to_string(&[dated.clone(), clean.clone()], 0);

    let dated_at = output.find(&dated.display().to_string()).unwrap();
    let clean_at = output.find(&clean.display().to_string()).unwrap();
    assert!(dated_at < clean_at);

    let date_at = output.find("Hardcoded date").unwrap();
    let todo_at = output.find("TODO comment").unwrap();
    assert!(date_at < todo_at);

    assert_eq!(summary.total_issues, 2);
}

#[test]
fn test_binary_without_arguments_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_stack_sanity"))
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Usage: "));
    assert!(lines[1].starts_with("Example: "));
}

#[test]
fn test_binary_exits_zero_despite_unreadable_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_stack_sanity"))
        .arg("tests/does_not_exist.py")
        .arg("tests/test_data.py")
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("🧠 Stack Overflow Sanity Checker\n"));
    assert!(stdout.contains("Failed to read tests/does_not_exist.py: "));
    assert!(stdout.contains("🔍 Checking: tests/test_data.py"));
    assert!(stdout.contains("Found 7 potential issue(s):"));
    assert!(stdout.contains("💡 Wisdom: "));
}

#[test]
fn test_binary_treats_double_dash_as_a_path() {
    let output = Command::new(env!("CARGO_BIN_EXE_stack_sanity"))
        .arg("--")
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Failed to read --: "));
    assert!(!stdout.contains("Usage: "));
}

#[test]
fn test_binary_reports_double_dash_before_later_files() {
    let output = Command::new(env!("CARGO_BIN_EXE_stack_sanity"))
        .args(["--", "tests/test_data.py", "--"])
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Failed to read --: ").count(), 2);
    let dash_at = stdout.find("Failed to read --: ").unwrap();
    let data_at = stdout.find("🔍 Checking: tests/test_data.py").unwrap();
    assert!(dash_at < data_at);
}
