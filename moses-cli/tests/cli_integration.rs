//! Integration tests for the moses CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn moses() -> Command {
    let mut cmd = Command::cargo_bin("moses").unwrap();
    cmd.env_remove("MOSES_CONFIG");
    cmd
}

#[test]
fn test_tokenize_file() {
    moses()
        .arg("tokenize")
        .arg("-i")
        .arg(fixture_path("english.txt"))
        .assert()
        .success()
        .stdout("Hello , world !\nThe meeting is at 11 : 00 a.m. Tuesday .\n");
}

#[test]
fn test_tokenize_stdin() {
    moses()
        .args(["tokenize", "-a"])
        .write_stdin("A well-known fact.\n")
        .assert()
        .success()
        .stdout("A well @-@ known fact .\n");
}

#[test]
fn test_tokenize_escape_switch() {
    moses()
        .args(["tokenize", "-l", "en"])
        .write_stdin("Don't!")
        .assert()
        .success()
        .stdout("Don &apos;t !\n");

    moses()
        .args(["tokenize", "-x"])
        .write_stdin("Don't!")
        .assert()
        .success()
        .stdout("Don 't !\n");
}

#[test]
fn test_tokenize_json_output() {
    moses()
        .args(["tokenize", "-f", "json"])
        .write_stdin("Hello, world!\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input\": \"Hello, world!\""))
        .stdout(predicate::str::contains("\"output\": \"Hello , world !\""))
        .stdout(predicate::str::contains("\"tokens\""));
}

#[test]
fn test_tokenize_parallel_keeps_order() {
    let input: String = (0..200).map(|i| format!("Line {i}, here.\n")).collect();
    let expected: String = (0..200).map(|i| format!("Line {i} , here .\n")).collect();
    moses()
        .args(["tokenize", "-j", "4"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_protected_pattern_file() {
    let temp_dir = TempDir::new().unwrap();
    let patterns = temp_dir.path().join("protected.txt");
    fs::write(&patterns, "\\d+-\\d+\n").unwrap();

    moses()
        .args(["tokenize", "-a", "-p"])
        .arg(&patterns)
        .write_stdin("pages 10-20 of well-known works")
        .assert()
        .success()
        .stdout("pages 10-20 of well @-@ known works\n");
}

#[test]
fn test_detokenize_file() {
    moses()
        .arg("detokenize")
        .arg("-i")
        .arg(fixture_path("english.tok"))
        .assert()
        .success()
        .stdout("Hello, world!\nThe meeting is at 11: 00 a.m. Tuesday.\n");
}

#[test]
fn test_detokenize_french() {
    moses()
        .args(["detokenize", "-l", "fr"])
        .write_stdin("L&apos; amitié nous a fait forts d&apos; esprit")
        .assert()
        .success()
        .stdout("L'amitié nous a fait forts d'esprit\n");
}

#[test]
fn test_normalize() {
    moses()
        .arg("normalize")
        .write_stdin("“Hello”—she said…\n")
        .assert()
        .success()
        .stdout("\"Hello\" - she said...\n");
}

#[test]
fn test_truecase_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let model = temp_dir.path().join("truecase.model");

    moses()
        .args(["train-truecase", "-q", "-m"])
        .arg(&model)
        .arg("-i")
        .arg(fixture_path("corpus.tok"))
        .assert()
        .success();
    assert!(model.exists());

    moses()
        .args(["truecase", "-m"])
        .arg(&model)
        .write_stdin("the adventures of sherlock holmes\n")
        .assert()
        .success()
        .stdout("the adventures of Sherlock Holmes\n");
}

#[test]
fn test_truecase_without_model() {
    moses()
        .arg("truecase")
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No truecase model given"));
}

#[test]
fn test_detruecase_headline() {
    moses()
        .args(["detruecase", "--headline"])
        .write_stdin("the adventures of Sherlock Holmes\n")
        .assert()
        .success()
        .stdout("The Adventures of Sherlock Holmes\n");
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.tok");

    moses()
        .args(["tokenize", "-o"])
        .arg(&output)
        .write_stdin("abc def.")
        .assert()
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(&output).unwrap(), "abc def .\n");
}

#[test]
fn test_config_file_sets_language() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("moses.toml");
    fs::write(&config, "[tokenizer]\nlanguage = \"fr\"\n").unwrap();

    moses()
        .args(["tokenize", "--config"])
        .arg(&config)
        .write_stdin("l'homme")
        .assert()
        .success()
        .stdout("l&apos; homme\n");
}

#[test]
fn test_glob_input() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "First one.\n").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "Second one.\n").unwrap();

    moses()
        .args(["tokenize", "-q", "-i"])
        .arg(format!("{}/*.txt", temp_dir.path().display()))
        .assert()
        .success()
        .stdout("First one .\nSecond one .\n");
}

#[test]
fn test_missing_input_file() {
    moses()
        .args(["tokenize", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_language() {
    moses()
        .args(["tokenize", "-l", "e1"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language"));
}

#[test]
fn test_list_languages() {
    moses()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available languages:"))
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("Czech"));
}

#[test]
fn test_generate_config_stdout() {
    moses()
        .args(["generate-config", "-l", "de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[tokenizer]"))
        .stdout(predicate::str::contains("language = \"de\""));
}

#[test]
fn test_help_output() {
    moses()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenize"))
        .stdout(predicate::str::contains("train-truecase"));
}
