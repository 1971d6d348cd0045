use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn namesplit(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("namesplit").unwrap();
    cmd.current_dir(workdir.path())
        .env("XDG_CONFIG_HOME", workdir.path())
        .env("HOME", workdir.path())
        .env_remove("RUST_LOG")
        .env_remove("NAMESPLIT_COLUMN");
    cmd
}

const SAMPLE: &str = "homeowner\n\
Mr John Smith\n\
Mrs Jane Smith\n\
Mister John Doe\n\
Mr Bob Lawblaw\n\
Mr and Mrs Smith\n\
Mr Craig Charles\n\
Mr M Mackie\n\
Mrs Jane McMaster\n\
Mr Tom Staff and Mr John Doe\n\
Dr P Gunn\n\
Dr & Mrs Joe Bloggs\n\
Ms Claire Robbo\n\
Prof Alex Brogan\n\
Mrs Faye Hughes-Eastwood\n\
Mr F. Fredrickson\n";

#[test]
fn test_parse_subcommand_json() {
    let dir = TempDir::new().unwrap();
    namesplit(&dir)
        .args(["--format", "json", "parse", "Mr Y. Seyi Onifade"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"initial\": \"Y\""))
        .stdout(predicate::str::contains("\"last_name\": \"Onifade\""));
}

#[test]
fn test_parse_subcommand_csv() {
    let dir = TempDir::new().unwrap();
    namesplit(&dir)
        .args(["parse", "Mr & Mrs Seyi", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arguments,1,1,Mr,,,Seyi"))
        .stdout(predicate::str::contains("arguments,1,2,Mrs,,,Seyi"));
}

#[test]
fn test_csv_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("owners.csv"), SAMPLE).unwrap();

    let output = namesplit(&dir)
        .args(["owners.csv", "--format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    // header + 15 rows, three of which name two people
    assert_eq!(stdout.lines().count(), 1 + 18);
    assert!(stdout.contains("owners.csv,7,1,Mr,M,,Mackie"));
    assert!(stdout.contains("owners.csv,9,2,Mr,,John,Doe"));
    assert!(stdout.contains("owners.csv,11,1,Mrs,,Joe,Bloggs"));
    assert!(stdout.contains("owners.csv,11,2,Dr,,Joe,Bloggs"));
}

#[test]
fn test_directory_input_text_summary() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("a.csv"), "homeowner\nMr John Smith\n").unwrap();
    fs::write(data.join("b.CSV"), "homeowner\nMr and Mrs Smith\n").unwrap();
    fs::write(data.join("notes.txt"), "not a csv").unwrap();

    namesplit(&dir)
        .args(["data", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 people parsed from 2 records in 2 sources"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    namesplit(&dir)
        .arg("iamfile.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid path provided"));
}

#[test]
fn test_custom_column_flag() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("owners.csv"), "id,owner\n1,Dr P Gunn\n").unwrap();

    namesplit(&dir)
        .args(["owners.csv", "--column", "owner", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("owners.csv,1,1,Dr,P,,Gunn"));
}

#[test]
fn test_local_config_vocabulary() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".namesplit.toml"),
        "titles = [\"Sir\"]\nconnectors = [\"with\"]\n",
    )
    .unwrap();

    namesplit(&dir)
        .args(["--no-color", "vocab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sir"))
        .stdout(predicate::str::contains("with"))
        .stdout(predicate::str::contains("Mrs").not());
}

#[test]
fn test_extra_title_flag() {
    let dir = TempDir::new().unwrap();
    namesplit(&dir)
        .args(["parse", "Lady Ada Lovelace", "--title", "Lady", "-o", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arguments,1,1,Lady,,Ada,Lovelace"));
}

#[test]
fn test_no_files() {
    let dir = TempDir::new().unwrap();
    namesplit(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files specified"));
}
