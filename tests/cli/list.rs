//! Tests for the default command (print every variable).

use super::support::*;
use predicates::prelude::*;

#[test]
fn test_decrypts_greeting() {
    let key = Keypair::generate();
    let t = Test::with_file(".env", &format!("GREETING=\"{}\"\n", key.seal("hello")));

    t.cmd_with(&[(KEY_VAR, key.private.as_str())])
        .assert()
        .success()
        .stdout(predicate::str::diff("GREETING=hello\n"));
}

#[test]
fn test_staging_file_selected_by_suffix() {
    let key = Keypair::generate();
    let t = Test::new();
    t.write(".env", "ENVIRONMENT=default\n");
    t.write(".env.staging", "ENVIRONMENT=staging\n");

    let output = t.all(&[("DOTENV_PRIVATE_KEY_STAGING", key.private.as_str())]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["ENVIRONMENT=staging"]);
}

#[test]
fn test_multi_word_suffix() {
    let key = Keypair::generate();
    let t = Test::with_file(".env.qa.test", "SUITE=qa\n");

    let output = t.all(&[("DOTENV_PRIVATE_KEY_QA_TEST", key.private.as_str())]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["SUITE=qa"]);
}

#[test]
fn test_sample_file_parsing() {
    let key = Keypair::generate();
    let t = Test::with_file(".env", SAMPLE_ENV);

    let output = t.all(&[(KEY_VAR, key.private.as_str())]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), SAMPLE_ENV_LINES);
}

#[test]
fn test_no_key_prints_nothing_and_succeeds() {
    let t = Test::with_file(".env", "A=1\n");

    t.cmd()
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_file_prints_nothing_and_succeeds() {
    let key = Keypair::generate();
    let t = Test::new();

    t.cmd_with(&[(KEY_VAR, key.private.as_str())])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_malformed_key_falls_back_to_valid_key() {
    let key = Keypair::generate();
    let t = Test::new();
    t.write(".env", "SOURCE=default\n");
    t.write(".env.ci", &format!("SOURCE={}\n", key.seal("ci")));

    let output = t.all(&[(KEY_VAR, INVALID_KEY), ("DOTENV_PRIVATE_KEY_CI", key.private.as_str())]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["SOURCE=ci"]);
}

#[test]
fn test_sorted_flag_prefers_lexically_first_key() {
    let key = Keypair::generate();
    let t = Test::new();
    t.write(".env", "SOURCE=default\n");
    t.write(".env.ci", "SOURCE=ci\n");

    let output = t
        .cmd_with(&[
            ("DOTENV_PRIVATE_KEY_CI", key.private.as_str()),
            (KEY_VAR, key.private.as_str()),
        ])
        .arg("--sorted")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["SOURCE=default"]);
}

#[test]
fn test_wrong_key_yields_empty_value() {
    let right = Keypair::generate();
    let wrong = Keypair::generate();
    let t = Test::with_file(
        ".env",
        &format!("TOKEN={}\nPLAIN=ok\n", right.seal("s3cret")),
    );

    let output = t.all(&[(KEY_VAR, wrong.private.as_str())]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["TOKEN=", "PLAIN=ok"]);
    assert_stdout_excludes(&output, "encrypted:");
}

#[test]
fn test_dir_flag_and_env() {
    let key = Keypair::generate();
    let t = Test::new();
    std::fs::create_dir(t.dir.path().join("deploy")).unwrap();
    t.write("deploy/.env", "WHERE=deploy\n");

    let output = t
        .cmd_with(&[(KEY_VAR, key.private.as_str())])
        .args(["--dir", "deploy"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["WHERE=deploy"]);

    let output = t.all(&[(KEY_VAR, key.private.as_str()), ("DOTENV_DECRYPT_DIR", "deploy")]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["WHERE=deploy"]);
}

#[test]
fn test_json_output() {
    let key = Keypair::generate();
    let t = Test::with_file(
        ".env",
        &format!("B=plain\nA={}\n", key.seal("decrypted")),
    );

    let output = t.all_json(&[(KEY_VAR, key.private.as_str())]);
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json, serde_json::json!({ "B": "plain", "A": "decrypted" }));
}

#[test]
fn test_json_output_empty() {
    let t = Test::new();

    let output = t.all_json(&[]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "{}");
}

#[test]
fn test_unicode_and_special_values_roundtrip() {
    let key = Keypair::generate();
    let values = [
        ("JAPANESE", "こんにちは世界"),
        ("EMOJI", "🚀🎉💯"),
        ("SPECIAL", r#"p@$$w0rd!#%^&*(){}[]|"'<>?,./~`"#),
        ("EQUALS", "a=b=c"),
    ];
    let contents: String = values
        .iter()
        .map(|(k, v)| format!("{}={}\n", k, key.seal(v)))
        .collect();
    let t = Test::with_file(".env", &contents);

    let output = t.all(&[(KEY_VAR, key.private.as_str())]);
    assert_success(&output);

    let expected: Vec<String> = values.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    assert_eq!(stdout_lines(&output), expected);
}
