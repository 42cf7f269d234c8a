//! End-to-end tests for the kfmt binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn kfmt_cmd() -> Command {
    cargo_bin_cmd!("kfmt")
}

#[test]
fn converts_positional_values() {
    kfmt_cmd()
        .args(["178255984", "12075408Ki", "1G", "1.5e9"])
        .assert()
        .success()
        .stdout("170MiB\n11.5GiB\n954MiB\n1.40GiB\n");
}

#[test]
fn raw_flag_prints_byte_counts() {
    kfmt_cmd()
        .args(["--raw", "1Ki", "100.9"])
        .assert()
        .success()
        .stdout("1024\n100\n");
}

#[test]
fn stops_at_first_bad_value() {
    kfmt_cmd()
        .args(["1Ki", "abc", "2Ki"])
        .assert()
        .failure()
        .code(1)
        .stdout("1.00KiB\n")
        .stderr(predicate::str::contains("error converting abc"));
}

#[test]
fn negative_value_is_reported() {
    kfmt_cmd()
        .arg("--")
        .arg("-5Mi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative value"));
}

#[test]
fn rewrites_json_from_stdin() {
    kfmt_cmd()
        .args(["--json-fields", "usedBytes, spaceAvailable"])
        .write_stdin(r#"{"usedBytes": 178255984, "spaceAvailable": "12075408Ki", "name": "pv-1"}"#)
        .assert()
        .success()
        .stdout(r#"{"usedBytes": "170MiB", "spaceAvailable": "11.5GiB", "name": "pv-1"}"#);
}

#[test]
fn json_output_keeps_trailing_newline_and_layout() {
    let input = "{\n  \"capacity\": \"100Mi\",\n  \"count\": 42\n}\n";
    kfmt_cmd()
        .args(["--json-fields", "capacity"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("{\n  \"capacity\": \"100MiB\",\n  \"count\": 42\n}\n");
}

#[test]
fn piped_json_requires_fields() {
    kfmt_cmd()
        .write_stdin(r#"{"usedBytes": "1Ki"}"#)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "--json-fields is required when processing JSON",
        ));
}

#[test]
fn positional_values_win_over_stdin() {
    kfmt_cmd()
        .args(["1024", "--json-fields", "a"])
        .write_stdin(r#"{"a": "1Ki"}"#)
        .assert()
        .success()
        .stdout("1.00KiB\n");
}
