//! End-to-end tests of the compiled binary: exit codes and stream routing.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Get the path to the built binary.
fn get_bin_path() -> std::path::PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("perf-report");
    path
}

/// Run the CLI with given arguments and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(get_bin_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code())
}

fn write_csv(temp_dir: &TempDir, name: &str, content: &str) -> String {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test CSV");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_report_goes_to_stdout_with_exit_zero() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_csv(
        &temp_dir,
        "employees.csv",
        "name,position,completed_tasks,performance,skills,team,experience_years\n\
         Alice Moore,Backend Developer,41,4.8,Rust,Core Team,5\n\
         Bob Lee,Backend Developer,38,4.83,Go,Core Team,4\n\
         David Chen,Mobile Developer,36,4.6,Swift,Mobile Team,3\n",
    );

    let (stdout, stderr, code) = run_cli(&["--files", &file, "--report", "average-performance"]);

    assert_eq!(code, Some(0));
    let expected = "\
+---+-------------------+-------------+
|   | position          | performance |
+===+===================+=============+
| 1 | Backend Developer |        4.80 |
+---+-------------------+-------------+
| 2 | Mobile Developer  |        4.60 |
+---+-------------------+-------------+
";
    assert_eq!(stdout, expected);
    assert!(stderr.is_empty(), "Expected quiet stderr, got: {}", stderr);
}

#[test]
fn test_unknown_report_exits_one_with_diagnostic_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_csv(
        &temp_dir,
        "employees.csv",
        "position,performance\nBackend Developer,4.8\n",
    );

    let (stdout, stderr, code) = run_cli(&["--files", &file, "--report", "not-a-report"]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty(), "stdout should stay clean, got: {}", stdout);
    assert!(
        stderr.contains("Unknown report 'not-a-report'"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("average-performance"), "stderr: {}", stderr);
}

#[test]
fn test_no_valid_files_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir
        .path()
        .join("missing.csv")
        .to_str()
        .unwrap()
        .to_string();

    let (stdout, stderr, code) =
        run_cli(&["--files", &missing, "--report", "average-performance"]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty(), "stdout should stay clean, got: {}", stdout);
    // 每個失蹤檔案先各警告一次，全部失效才是致命錯誤
    assert!(
        stderr.contains("File not found or not a regular file"),
        "stderr: {}",
        stderr
    );
    assert!(
        stderr.contains("No valid input files to process"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_fail_policy_exits_one_on_bad_record() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_csv(
        &temp_dir,
        "employees.csv",
        "position,performance\n\
         Backend Developer,4.8\n\
         Backend Developer,fast\n",
    );

    let (stdout, stderr, code) = run_cli(&[
        "--files",
        &file,
        "--report",
        "average-performance",
        "--on-data-error",
        "fail",
    ]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty(), "stdout should stay clean, got: {}", stdout);
    assert!(stderr.contains("Data error in record 2"), "stderr: {}", stderr);
    assert!(stderr.contains("fast"), "stderr: {}", stderr);
}
