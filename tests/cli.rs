use assert_cmd::Command;
use chrono::Local;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};

const BINARY_NAME: &str = "sharpe-screener";

const DATASET: &str = r#"[
    {"Ticker": "AAPL", "Sharpe Ratio": 2.0, "Beta": 1.0, "Annual Return (%)": 31.0, "Sector": "Tech"},
    {"Ticker": "XOM", "Sharpe Ratio": 1.0, "Beta": 2.0, "Annual Return (%)": 8.0, "Sector": null},
    {"Ticker": "JNJ", "Sharpe Ratio": 1.5, "Beta": 0.5, "Annual Return (%)": 12.0, "Sector": "Healthcare"}
]"#;

/// Helper to get a temporary working directory
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to write the synthetic dataset into the temp dir
fn write_dataset(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("sharpe_filtered.json");
    fs::write(&path, DATASET).expect("write dataset");
    path
}

/// Today's dated artifact name for the given extension
fn export_name(ext: &str) -> String {
    format!("sharpe_filtered_{}.{}", Local::now().date_naive(), ext)
}

fn screener() -> Command {
    Command::cargo_bin(BINARY_NAME).unwrap()
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = screener();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Default export keeps only records passing all three predicates, with
/// boundary values included (JNJ sits exactly on the Sharpe threshold and
/// the low beta endpoint).
fn export_writes_filtered_csv() {
    let tmp = temp_dir();
    let data_file = write_dataset(&tmp);

    let mut cmd = screener();
    cmd.arg("export")
        .arg("--data-file")
        .arg(&data_file)
        .arg("--output-dir")
        .arg(tmp.path())
        .env("HOME", tmp.path()) // keep the user config out of the test
        .assert()
        .success()
        .stdout(contains("Exported 2 rows"));

    let exported = fs::read_to_string(tmp.path().join(export_name("csv"))).unwrap();
    let lines: Vec<&str> = exported.lines().collect();
    assert_eq!(lines[0], "Ticker,Sharpe Ratio,Beta,Annual Return (%),Sector");
    assert_eq!(lines[1], "\"AAPL\",2,1,31,\"Tech\"");
    assert_eq!(lines[2], "\"JNJ\",1.5,0.5,12,\"Healthcare\"");
    assert_eq!(lines.len(), 3, "XOM fails the Sharpe and beta predicates");
}

#[test]
/// A JSON export round-trips and normalizes the absent sector to "Unknown".
fn export_writes_filtered_json() {
    let tmp = temp_dir();
    let data_file = write_dataset(&tmp);

    let mut cmd = screener();
    cmd.arg("export")
        .arg("--data-file")
        .arg(&data_file)
        .arg("--format")
        .arg("json")
        .arg("--min-sharpe")
        .arg("0.0")
        .arg("--beta-min")
        .arg("0.0")
        .arg("--beta-max")
        .arg("3.0")
        .arg("--output-dir")
        .arg(tmp.path())
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Exported 3 rows"));

    let exported = fs::read_to_string(tmp.path().join(export_name("json"))).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1]["Ticker"], "XOM");
    assert_eq!(rows[1]["Sector"], "Unknown");
}

#[test]
/// Restricting the sector selection drops everything outside it.
fn export_respects_sector_selection() {
    let tmp = temp_dir();
    let data_file = write_dataset(&tmp);

    let mut cmd = screener();
    cmd.arg("export")
        .arg("--data-file")
        .arg(&data_file)
        .arg("--min-sharpe")
        .arg("0.0")
        .arg("--sector")
        .arg("Healthcare")
        .arg("--output-dir")
        .arg(tmp.path())
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Exported 1 rows"));
}

#[test]
/// Exporting without a dataset fails with the missing-data error.
fn export_fails_without_dataset() {
    let tmp = temp_dir();

    let mut cmd = screener();
    cmd.arg("export")
        .arg("--data-file")
        .arg(tmp.path().join("absent.json"))
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("no dataset found"));
}

#[test]
/// Refresh runs the configured script, then loads whatever it wrote. A stub
/// script stands in for the 3-5 minute computation.
fn refresh_populates_dataset_via_script() {
    let tmp = temp_dir();
    let data_file = tmp.path().join("refreshed.json");
    let source = write_dataset(&tmp);

    assert!(!data_file.exists());

    let mut cmd = screener();
    cmd.arg("refresh")
        .arg("--data-file")
        .arg(&data_file)
        .arg("--refresh-command")
        .arg("cp")
        .arg(source.to_str().unwrap())
        .arg(data_file.to_str().unwrap())
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Data refreshed in"))
        .stdout(contains("3 securities loaded"));

    assert!(data_file.exists());
}

#[test]
/// A refresh whose script produces no file fails at the reload.
fn refresh_fails_when_script_writes_nothing() {
    let tmp = temp_dir();
    let data_file = tmp.path().join("never_written.json");

    let mut cmd = screener();
    cmd.arg("refresh")
        .arg("--data-file")
        .arg(&data_file)
        .arg("--refresh-command")
        .arg("true")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("no dataset found"));
}

#[test]
/// A malformed dataset is rejected, not silently tolerated.
fn export_rejects_malformed_dataset() {
    let tmp = temp_dir();
    let data_file = tmp.path().join("broken.json");
    fs::write(&data_file, "{ not json").unwrap();

    let mut cmd = screener();
    cmd.arg("export")
        .arg("--data-file")
        .arg(&data_file)
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("malformed dataset"));
}

#[test]
/// The dated artifact lands in the requested output directory, nowhere else.
fn export_writes_into_output_dir() {
    let tmp = temp_dir();
    let data_file = write_dataset(&tmp);
    let out = tmp.path().join("exports");
    fs::create_dir(&out).unwrap();

    let mut cmd = screener();
    cmd.arg("export")
        .arg("--data-file")
        .arg(&data_file)
        .arg("--output-dir")
        .arg(&out)
        .env("HOME", tmp.path())
        .assert()
        .success();

    assert!(out.join(export_name("csv")).exists());
    assert!(!Path::new(&export_name("csv")).exists());
}
