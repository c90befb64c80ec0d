//! End-to-end tests of the index-demux binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FASTQ: &str = "\
@r1 1:N:0:ACGTACGT+AAAAAAAA
ACGT
+
IIII
@r2 1:N:0:TTGCAAGC+AAAAAAAA
ACGT
+
IIII
@r3 1:N:0:ACGTACGTTT+AAAAAAAA
ACGT
+
IIII
@r4 1:N:0:GGGGGGGG+AAAAAAAA
ACGT
+
IIII
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

fn cmd() -> Command {
    Command::cargo_bin("index-demux").expect("binary should be built")
}

#[test]
fn test_check_reports_exact_mode() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.csv", "file,index1\na.fq,ACGTACGT\nb.fq,TTGCAAGC\n");

    cmd()
        .arg("check")
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lookup mode: exact"))
        .stdout(predicate::str::contains("Samples: 2"));
}

#[test]
fn test_check_tsv_prefix_mode() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.tsv", "a.fq\tAC\nb.fq\tACGT\n");

    cmd()
        .args(["--format", "tsv", "check"])
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("2\tindex1\tprefix-fallback\t2\t4"));
}

#[test]
fn test_check_rejects_mixed_slots() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.csv", "a.fq,ACGT,\nb.fq,,TTGC\n");

    cmd()
        .arg("check")
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot use both"));
}

#[test]
fn test_check_rejects_ambiguous_base() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.csv", "a.fq,ACNT\n");

    cmd()
        .arg("check")
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("N base is not supported"));
}

#[test]
fn test_classify_counts() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.csv", "a.fq,ACGTACGT\nb.fq,TTGCAAGC\n");
    let reads = write(&dir, "reads.fastq", FASTQ);

    cmd()
        .args(["--format", "tsv", "classify"])
        .arg(&sheet)
        .arg(&reads)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.fq\t2\t0.5000"))
        .stdout(predicate::str::contains("b.fq\t1\t0.2500"))
        .stdout(predicate::str::contains("Undetermined\t1\t0.2500"));
}

#[test]
fn test_classify_assignments() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.csv", "a.fq,ACGTACGT\nb.fq,TTGCAAGC\n");
    let reads = write(&dir, "reads.fastq", FASTQ);

    cmd()
        .args(["--format", "tsv", "classify", "--assignments"])
        .arg(&sheet)
        .arg(&reads)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("read\tsample_id\tsample\n"))
        .stdout(predicate::str::contains("r2\t1\tb.fq"))
        .stdout(predicate::str::contains("r3\t0\ta.fq"))
        .stdout(predicate::str::contains("r4\t-1\tUndetermined"));
}

#[test]
fn test_classify_json_from_stdin() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.csv", "a.fq,,AAAAAAAA\n");

    let output = cmd()
        .args(["--format", "json", "classify"])
        .arg(&sheet)
        .arg("-")
        .write_stdin(FASTQ)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_reads"], 4);
    assert_eq!(json["undetermined"], 0);
    assert_eq!(json["slot"], "second");
    assert_eq!(json["samples"][0]["reads"], 4);
}

#[test]
fn test_classify_json_assignments_stream_one_per_line() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.csv", "a.fq,ACGTACGT\nb.fq,TTGCAAGC\n");
    let reads = write(&dir, "reads.fastq", FASTQ);

    let output = cmd()
        .args(["--format", "json", "classify", "--assignments"])
        .arg(&sheet)
        .arg(&reads)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);

    let expected = [
        ("r1", 0, "a.fq"),
        ("r2", 1, "b.fq"),
        ("r3", 0, "a.fq"),
        ("r4", -1, "Undetermined"),
    ];
    for (line, (read, id, sample)) in lines.iter().zip(expected) {
        assert_eq!(line["read"], read);
        assert_eq!(line["sample_id"], id);
        assert_eq!(line["sample"], sample);
    }

    let summary = &lines[4];
    assert_eq!(summary["total_reads"], 4);
    assert_eq!(summary["undetermined"], 1);
    assert_eq!(summary["mode"], "exact");
}

#[test]
fn test_check_json_reports_sheet_path() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.csv", "a.fq,ACGTACGT\n");

    let output = cmd()
        .args(["--format", "json", "check"])
        .arg(&sheet)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], sheet.display().to_string());
    assert_eq!(json["sample_count"], 1);
}

#[test]
fn test_classify_missing_input() {
    let dir = TempDir::new().unwrap();
    let sheet = write(&dir, "samples.csv", "a.fq,ACGT\n");

    cmd()
        .arg("classify")
        .arg(&sheet)
        .arg(dir.path().join("missing.fastq"))
        .assert()
        .failure();
}
