use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

const VALID_LIST: &str = r#"{
  "name": "Widget Default",
  "timestamp": "2021-01-05T20:47:02Z",
  "version": { "major": 2, "minor": 0, "patch": 0 },
  "tokens": [{
    "chainId": 1,
    "address": "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984",
    "symbol": "UNI",
    "name": "Uniswap",
    "decimals": 18
  }]
}"#;

#[test]
fn valid_list_exits_zero() {
    let file = write_fixture(VALID_LIST);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tokenlist"));
    cmd.args(["validate", file.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Widget Default v2.0.0"));
}

#[test]
fn invalid_list_exits_one_with_diagnostics() {
    let file = write_fixture(r#"{ "name": "Broken" }"#);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tokenlist"));
    cmd.args(["validate", file.path().to_str().unwrap()]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::starts_with("Token list failed validation: "));
}

#[test]
fn valid_token_array_exits_zero() {
    let file = write_fixture(
        r#"[{
          "chainId": 1,
          "address": "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984",
          "symbol": "UNI",
          "name": "Uniswap",
          "decimals": 18
        }]"#,
    );

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tokenlist"));
    cmd.args(["validate", "--tokens", file.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK: 1 tokens"));
}

#[test]
fn token_array_diagnostics_use_wrapped_paths() {
    let file = write_fixture(r#"[{ "chainId": 0 }]"#);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tokenlist"));
    cmd.args(["validate", "--tokens", file.path().to_str().unwrap()]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::starts_with("Tokens failed validation: "))
        .stderr(predicate::str::contains("/tokens/0"));
}

#[test]
fn unreadable_file_exits_two() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tokenlist"));
    cmd.args(["validate", "does-not-exist.json"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn malformed_json_exits_two() {
    let file = write_fixture("{ not json");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tokenlist"));
    cmd.args(["validate", file.path().to_str().unwrap()]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("is not valid JSON"));
}
