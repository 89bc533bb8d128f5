//! Integration tests for the taxonomy commands: `distance`, `nouns`,
//! `inspect`, and `outcast`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `wordnet` binary.
fn wordnet_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("wordnet");
    path
}

/// Path to a shared fixture file, as a string argument.
fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path.to_str().expect("path").to_owned()
}

fn run(args: &[&str]) -> Output {
    Command::new(wordnet_bin())
        .args(args)
        .output()
        .expect("run wordnet")
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(wordnet_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn wordnet");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait")
}

// ---------------------------------------------------------------------------
// distance
// ---------------------------------------------------------------------------

#[test]
fn distance_fixture_queries() {
    let out = run(&[
        "distance",
        &fixture("synsets.txt"),
        &fixture("hypernyms.txt"),
        "--queries",
        &fixture("noun_queries.txt"),
    ]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "length = 2, ancestor = animal animate_being beast\n\
         length = 3, ancestor = organism being\n\
         length = 6, ancestor = object physical_object\n\
         length = 0, ancestor = bank\n\
         length = 3, ancestor = organism being\n"
    );
}

#[test]
fn distance_unknown_noun_is_reported_and_skipped() {
    let synsets = fixture("synsets.txt");
    let hypernyms = fixture("hypernyms.txt");
    let out = run_with_stdin(
        &["distance", &synsets, &hypernyms],
        "dog unicorn\ndog cat\n",
    );
    assert_eq!(out.status.code(), Some(1), "expected exit 1");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "length = 2, ancestor = animal animate_being beast\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unicorn"), "stderr: {stderr}");
}

#[test]
fn distance_json_names_the_synset() {
    let synsets = fixture("synsets.txt");
    let hypernyms = fixture("hypernyms.txt");
    let out = run_with_stdin(&["-f", "json", "distance", &synsets, &hypernyms], "bank dog\n");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&out.stdout).trim()).expect("valid JSON");
    assert_eq!(value["length"], 6);
    assert_eq!(value["ancestor"], "object physical_object");
    assert_eq!(value["a"], "bank");
}

#[test]
fn distance_cyclic_taxonomy_exits_2() {
    let out = run(&[
        "distance",
        &fixture("synsets_small.txt"),
        &fixture("hypernyms_cycle.txt"),
    ]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cycle"), "stderr: {stderr}");
}

#[test]
fn distance_two_root_taxonomy_exits_2() {
    let out = run(&[
        "distance",
        &fixture("synsets_small.txt"),
        &fixture("hypernyms_two_roots.txt"),
    ]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("root"), "stderr: {stderr}");
}

#[test]
fn distance_malformed_hypernyms_names_the_file() {
    let mut tmp = tempfile::NamedTempFile::new().expect("temp file");
    tmp.write_all(b"1,0\n2,zero\n").expect("write");
    let hypernyms = tmp.path().to_str().expect("path").to_owned();
    let out = run(&["distance", &fixture("synsets_small.txt"), &hypernyms]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(&hypernyms), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// nouns
// ---------------------------------------------------------------------------

#[test]
fn nouns_are_sorted_and_distinct() {
    let out = run(&["nouns", &fixture("synsets.txt"), &fixture("hypernyms.txt")]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let nouns: Vec<&str> = stdout.lines().collect();
    assert!(nouns.windows(2).all(|w| w[0] < w[1]), "{nouns:?}");
    assert!(nouns.contains(&"Canis_familiaris"));
    assert_eq!(nouns.iter().filter(|n| **n == "bank").count(), 1);
}

#[test]
fn nouns_json_has_count() {
    let out = run(&[
        "nouns",
        &fixture("synsets.txt"),
        &fixture("hypernyms.txt"),
        "--format",
        "json",
    ]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("valid JSON");
    let nouns = value["nouns"].as_array().expect("nouns array");
    assert_eq!(value["count"], nouns.len());
}

#[test]
fn nouns_synsets_from_stdin() {
    let synsets = std::fs::read_to_string(fixture("synsets.txt")).expect("read fixture");
    let out = run_with_stdin(&["nouns", "-", &fixture("hypernyms.txt")], &synsets);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.lines().any(|l| l == "entity"), "stdout: {stdout}");
}

#[test]
fn nouns_both_inputs_from_stdin_exit_2() {
    let out = run(&["nouns", "-", "-"]);
    assert_eq!(out.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_fixture_stats() {
    let out = run(&[
        "inspect",
        &fixture("synsets.txt"),
        &fixture("hypernyms.txt"),
        "-f",
        "json",
    ]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["synset_count"], 15);
    assert_eq!(value["edge_count"], 14);
    assert_eq!(value["polysemous_count"], 1);
    assert_eq!(value["root"]["id"], 0);
    assert_eq!(value["root"]["name"], "entity");
}

#[test]
fn inspect_human_output() {
    let out = run(&["inspect", &fixture("synsets.txt"), &fixture("hypernyms.txt")]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("synsets:"), "stdout: {stdout}");
    assert!(stdout.contains("(entity)"), "stdout: {stdout}");
}

// ---------------------------------------------------------------------------
// outcast
// ---------------------------------------------------------------------------

#[test]
fn outcast_picks_unrelated_noun() {
    let out = run(&[
        "outcast",
        &fixture("synsets.txt"),
        &fixture("hypernyms.txt"),
        "dog",
        "cat",
        "bird",
        "institution",
    ]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "institution\n");
}

#[test]
fn outcast_unknown_noun_exits_1() {
    let out = run(&[
        "outcast",
        &fixture("synsets.txt"),
        &fixture("hypernyms.txt"),
        "dog",
        "unicorn",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unicorn"), "stderr: {stderr}");
}
