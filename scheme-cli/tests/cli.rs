//! Runs the built binary and checks what lands on stdout, stderr and the exit code

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn write_rows(dir: &TempDir, name: &str, rows: &[&[&str]]) -> PathBuf {
    let path = dir.path().join(name);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
    }
    workbook.save(&path).unwrap();
    path
}

/// Run `scheme-cli` inside `dir` with an empty config file and no env overrides
fn run_cli(dir: &TempDir, args: &[&Path]) -> Output {
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    Command::new(env!("CARGO_BIN_EXE_scheme-cli"))
        .current_dir(dir.path())
        .env_remove("SCHEME_CLI_TABLE")
        .env_remove("SCHEME_CLI_SHEET")
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn test_sql_to_stdout_with_skips_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_rows(
        &dir,
        "schemes.xlsx",
        &[
            &["Name", "Type", "Benefit Summary"],
            &["PMEGP", "subsidy", "Margin money subsidy"],
            &["Typo", "grantz", "Something"],
        ],
    );

    let output = run_cli(&dir, &[Path::new("sql"), &input]);
    let stdout = text(&output.stdout);
    let stderr = text(&output.stderr);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stdout.starts_with("-- Generated from schemes.xlsx"));
    assert_eq!(stdout.matches("insert into public.schemes").count(), 1);
    assert!(stderr.contains("Skipping row 3 (invalid type 'grantz'"));
    assert!(stderr.contains("): Typo"));
    assert!(!stdout.contains("Skipping row"));
    assert!(!stdout.contains("Typo"));
}

#[test]
fn test_sql_all_rows_invalid_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_rows(
        &dir,
        "broken.xlsx",
        &[
            &["Name", "Type", "Benefit Summary"],
            &["A", "loan", ""],
            &["B", "bogus", "Summary"],
        ],
    );

    let output = run_cli(&dir, &[Path::new("sql"), &input]);
    let stderr = text(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(stderr.matches("Skipping row").count(), 2);
    assert!(stderr.contains("Skipping row 2"));
    assert!(stderr.contains("Skipping row 3"));
    assert!(stderr.contains("error:"));
}

#[test]
fn test_sql_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.xlsx");

    let output = run_cli(&dir, &[Path::new("sql"), &missing]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(text(&output.stderr).contains("File not found"));
}

#[test]
fn test_sql_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_rows(
        &dir,
        "one.xlsx",
        &[
            &["Name", "Type", "Benefit Summary"],
            &["CGTMSE", "loan", "Credit guarantee"],
        ],
    );
    let target = dir.path().join("seed.sql");

    let output = run_cli(
        &dir,
        &[Path::new("sql"), &input, Path::new("--output"), &target],
    );

    assert!(output.status.success(), "stderr: {}", text(&output.stderr));
    assert!(output.stdout.is_empty());
    let script = std::fs::read_to_string(&target).unwrap();
    assert!(script.starts_with("-- Generated from one.xlsx"));
    assert!(script.contains("'CGTMSE'"));
}

#[test]
fn test_template_then_sql() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_cli(&dir, &[Path::new("template")]);
    assert!(output.status.success(), "stderr: {}", text(&output.stderr));
    assert!(text(&output.stdout).contains("Created"));

    let template = dir.path().join("schemes_template.xlsx");
    assert!(template.exists());

    let output = run_cli(&dir, &[Path::new("sql"), &template]);
    assert!(output.status.success(), "stderr: {}", text(&output.stderr));
    assert_eq!(text(&output.stdout).matches("insert into").count(), 1);
}
