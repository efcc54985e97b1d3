use assert_cmd::Command;
use predicates::prelude::*;

fn dynjson() -> Command {
    Command::cargo_bin("dynjson").unwrap()
}

#[test]
fn print_number() {
    dynjson()
        .arg("tests/fixtures/example.json")
        .arg("count")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn navigate_keys_and_indices() {
    dynjson()
        .arg("tests/fixtures/example.json")
        .args(["users", "0", "name"])
        .assert()
        .success()
        .stdout("alice\n");

    dynjson()
        .arg("tests/fixtures/example.json")
        .args(["users", "1", "tags"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn numeric_key_with_prefix() {
    dynjson()
        .arg("tests/fixtures/example.json")
        .arg("=0")
        .assert()
        .success()
        .stdout("zero\n");
}

#[test]
fn missing_path_prints_null() {
    dynjson()
        .arg("tests/fixtures/example.json")
        .args(["users", "5", "name"])
        .assert()
        .success()
        .stdout("null\n")
        .stderr(predicate::str::contains("Warning: `[\"users\"][5]` not found"));
}

#[test]
fn quoted_string() {
    dynjson()
        .arg("tests/fixtures/example.json")
        .args(["-q", "users", "1", "name"])
        .assert()
        .success()
        .stdout("\"bob\"\n");
}

#[test]
fn pretty_array() {
    dynjson()
        .arg("tests/fixtures/example.json")
        .args(["-n", "users", "0", "tags"])
        .assert()
        .success()
        .stdout("[\n  \"a\",\n  \"b\"\n]\n");
}

#[test]
fn compact_object() {
    dynjson()
        .arg("tests/fixtures/example.json")
        .args(["users", "0", "created"])
        .assert()
        .success()
        .stdout("{\"$date\":1000}\n");
}

#[test]
fn print_kind() {
    for (path, kind) in [
        (vec!["users"], "array"),
        (vec!["users", "0"], "object"),
        (vec!["users", "0", "admin"], "bool"),
        (vec!["users", "1", "age"], "number"),
        (vec!["users", "1", "created"], "null"),
        (vec!["users", "0", "name"], "string"),
    ] {
        dynjson()
            .arg("tests/fixtures/example.json")
            .arg("--kind")
            .args(path)
            .assert()
            .success()
            .stdout(format!("{}\n", kind));
    }
}

#[test]
fn read_from_stdin() {
    dynjson()
        .args(["-", "a", "1"])
        .write_stdin(r#"{"a": [true, 1.5]}"#)
        .assert()
        .success()
        .stdout("1.5\n");
}

#[test]
fn fragments_are_accepted_by_default() {
    dynjson()
        .arg("-")
        .write_stdin("\"just a string\"")
        .assert()
        .success()
        .stdout("just a string\n");
}

#[test]
fn strict_rejects_fragments() {
    dynjson()
        .args(["-", "--strict"])
        .write_stdin("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse JSON from `<stdin>`"));
}

#[test]
fn malformed_input_fails() {
    dynjson()
        .arg("-")
        .write_stdin("{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed JSON"));
}

#[test]
fn missing_file_fails() {
    dynjson()
        .arg("tests/fixtures/does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to parse JSON from `tests/fixtures/does-not-exist.json`",
        ));
}

#[test]
fn kind_conflicts_with_pretty() {
    dynjson()
        .arg("tests/fixtures/example.json")
        .args(["--kind", "--pretty"])
        .assert()
        .failure();
}
