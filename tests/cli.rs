use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SET_LINE: &str = "usEnglishWordList = new Set(usEnglishWordList.split('|'));";

fn cmd() -> Command {
    Command::cargo_bin("wordlist-js").unwrap()
}

fn write_list(dir: &Path, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn expected(body: &str) -> String {
    format!("let usEnglishWordList = \"{}\";\n{}", body, SET_LINE)
}

/// Word list body between the quotes of the first line
fn body_of(js: &str) -> &str {
    let start = js.find('"').unwrap() + 1;
    let end = js[start..].find('"').unwrap() + start;
    &js[start..end]
}

#[test]
fn filters_disqualified_words() {
    let tmp = TempDir::new().unwrap();
    let input = write_list(tmp.path(), "words.txt", &["cat", "Dog", "it's", "run+", "zzz"]);
    let output = tmp.path().join("out.js");

    cmd().arg(&input).arg("-o").arg(&output).arg("-q").assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), expected("cat|zzz"));
}

#[test]
fn keeps_all_lowercase_words() {
    let tmp = TempDir::new().unwrap();
    let input = write_list(tmp.path(), "abc.txt", &["a", "b", "c"]);
    let output = tmp.path().join("abc.js");

    cmd().arg(&input).args(["--output"]).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), expected("a|b|c"));
}

#[test]
fn empty_input_gives_empty_literal() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("empty.txt");
    fs::write(&input, "").unwrap();
    let output = tmp.path().join("empty.js");

    cmd().arg(&input).arg("-o").arg(&output).arg("-q").assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), expected(""));
}

#[test]
fn rejects_irish_surname() {
    let tmp = TempDir::new().unwrap();
    let input = write_list(tmp.path(), "names.txt", &["O'Brien", "brien"]);
    let output = tmp.path().join("names.js");

    cmd().arg(&input).arg("-o").arg(&output).arg("-q").assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), expected("brien"));
}

#[test]
fn skips_whitespace_only_lines() {
    let tmp = TempDir::new().unwrap();
    let input = write_list(tmp.path(), "gaps.txt", &["one", "   ", "", "two"]);
    let output = tmp.path().join("gaps.js");

    cmd().arg(&input).arg("-o").arg(&output).arg("-q").assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), expected("one|two"));
}

#[test]
fn default_output_lands_in_working_directory() {
    let input_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    let input = write_list(input_dir.path(), "sample.txt", &["x", "y"]);

    cmd().current_dir(work_dir.path()).arg(&input).arg("-q").assert().success();

    let output = work_dir.path().join("sample.js");
    assert_eq!(fs::read_to_string(output).unwrap(), expected("x|y"));
    assert!(!input_dir.path().join("sample.js").exists());
}

#[test]
fn second_run_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let input = write_list(tmp.path(), "words.txt", &["zeta", "Alpha", "beta", "beta", "  gamma  "]);
    let output = tmp.path().join("words.js");

    cmd().arg(&input).arg("-o").arg(&output).arg("-q").assert().success();
    let first = fs::read(&output).unwrap();

    cmd().arg(&input).arg("-o").arg(&output).arg("-q").assert().success();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn order_and_delimiters_are_preserved() {
    let tmp = TempDir::new().unwrap();
    let lines = ["pear", "Apple", "fig", "x=1", "date", "`q", "kiwi", "c++", "plum"];
    let input = write_list(tmp.path(), "fruit.txt", &lines);
    let output = tmp.path().join("fruit.js");

    cmd().arg(&input).arg("-o").arg(&output).arg("-q").assert().success();

    let js = fs::read_to_string(&output).unwrap();
    let body = body_of(&js);
    assert!(!body.starts_with('|') && !body.ends_with('|'));
    assert!(!body.contains("||"));
    assert_eq!(body.split('|').collect::<Vec<_>>(), vec!["pear", "fig", "date", "kiwi", "plum"]);
}

#[test]
fn overwrites_existing_output() {
    let tmp = TempDir::new().unwrap();
    let input = write_list(tmp.path(), "words.txt", &["new"]);
    let output = tmp.path().join("words.js");
    fs::write(&output, "x".repeat(500)).unwrap();

    cmd().arg(&input).arg("-o").arg(&output).arg("-q").assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), expected("new"));
}

#[test]
fn prints_summary_when_not_quiet() {
    let tmp = TempDir::new().unwrap();
    let input = write_list(tmp.path(), "words.txt", &["cat", "Dog"]);
    let output = tmp.path().join("words.js");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("CONVERSION COMPLETE"));
}

#[test]
fn missing_input_fails() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .current_dir(tmp.path())
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("cannot read word list"));

    assert!(!tmp.path().join("does-not-exist.js").exists());
}

#[test]
fn unwritable_output_fails() {
    let tmp = TempDir::new().unwrap();
    let input = write_list(tmp.path(), "words.txt", &["cat"]);
    let output = tmp.path().join("no").join("such").join("dir.js");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("cannot write output file"));
}

#[test]
fn missing_positional_prints_usage() {
    cmd().assert().failure().stderr(contains("Usage"));
}

#[test]
fn unknown_flag_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let input = write_list(tmp.path(), "words.txt", &["cat"]);

    cmd().arg(&input).arg("--sort").assert().failure().stderr(contains("Usage"));
}
