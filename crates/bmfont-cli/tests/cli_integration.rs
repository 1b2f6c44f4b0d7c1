use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs::File, io::Write, path::PathBuf};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../bmfont/tests/data/sample.fnt")
}

/// Write a stored (uncompressed) archive holding `entries` in order.
fn write_zip(file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(file_name);
    let mut zip = ZipWriter::new(File::create(&path).unwrap());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
    path
}

fn bmfont() -> Command {
    Command::cargo_bin("bmfont").unwrap()
}

#[test]
fn inspect_prints_summary() {
    bmfont()
        .args(["inspect", "--font"])
        .arg(sample_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("BMFont: Café Sans (-24px, smooth, unicode)"))
        .stdout(predicate::str::contains("Atlas: 256x128, 2 page(s) declared"))
        .stdout(predicate::str::contains("Page 1: sample_1.png"))
        .stdout(predicate::str::contains("Defined characters: 5"))
        .stdout(predicate::str::contains("Kerning pairs: 2"));
}

#[test]
fn inspect_with_other_code_page() {
    bmfont()
        .args(["inspect", "--code-page", "cp437", "--font"])
        .arg(sample_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CafΘ Sans"));
}

#[test]
fn ascii_code_page_reports_encoding_error() {
    bmfont()
        .args(["inspect", "--code-page", "ascii", "--font"])
        .arg(sample_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error parsing info block"));
}

#[test]
fn dump_emits_json() {
    let output = bmfont()
        .args(["dump", "--font"])
        .arg(sample_path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["common"]["line_height"], 29);
    assert_eq!(json["pages"][0], "sample_0.png");
    assert_eq!(json["chars"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["kerning_pairs"][1]["amount"], -3);
}

#[test]
fn chars_lists_glyphs() {
    bmfont()
        .args(["chars", "--font"])
        .arg(sample_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("65\tA\t10\t0\t16\t18\t-1\t5\t15\t0\t15"))
        .stdout(predicate::str::contains("8364\t€"));
}

#[test]
fn rejects_non_bmfont_input() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("not_a_font.fnt");
    std::fs::write(&path, b"info face=\"Arial\" size=32\n").unwrap();
    bmfont()
        .args(["inspect", "--font"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid identifier"));
}

#[test]
fn unknown_code_page_is_a_usage_error() {
    bmfont()
        .args(["inspect", "--code-page", "ebcdic", "--font"])
        .arg(sample_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown code page 'ebcdic'"));
}

#[test]
fn reads_first_fnt_entry_from_zip() {
    let sample = std::fs::read(sample_path()).unwrap();
    let path = write_zip(
        "sample_font.zip",
        &[
            ("readme.txt", &b"not a font"[..]),
            ("Sample.FNT", sample.as_slice()),
            ("other.fnt", &b"BMF\x02"[..]),
        ],
    );
    bmfont()
        .args(["inspect", "--font"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BMFont: Café Sans"))
        .stdout(predicate::str::contains("Defined characters: 5"));
}

#[test]
fn zip_without_fnt_entry_fails() {
    let path = write_zip("no_font.zip", &[("readme.txt", &b"not a font"[..])]);
    bmfont()
        .args(["inspect", "--font"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("zip archive contained no .fnt"));
}
