use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::process::Output;
use tempfile::TempDir;

const PROMPT: &str = "Enter a command: ";

fn run_session(temp: &TempDir, args: &[&str], input: &str) -> Output {
    cargo_bin_cmd!("contactbook")
        .env("XDG_CONFIG_HOME", temp.path())
        .env_remove("RUST_LOG")
        .args(args)
        .write_stdin(input)
        .output()
        .expect("run command")
}

fn replies(args: &[&str], input: &str) -> Vec<String> {
    let temp = TempDir::new().expect("temp dir");
    let output = run_session(&temp, args, input);
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let mut chunks = stdout.split(PROMPT);
    assert_eq!(
        chunks.next(),
        Some("Welcome to the assistant bot!\n"),
        "greeting"
    );
    chunks.map(|chunk| chunk.trim_end().to_string()).collect()
}

#[test]
fn cli_add_change_phone_all_flow() {
    let out = replies(
        &[],
        "add John 1234567890\nchange John 0987654321\nphone John\nall\nexit\n",
    );
    assert_eq!(
        out,
        vec![
            "Contact added.",
            "Contact updated.",
            "0987654321",
            "Contact name: John, phones: 0987654321",
            "Good bye!",
        ]
    );
}

#[test]
fn cli_reports_errors_and_keeps_running() {
    let out = replies(
        &[],
        "add Bob1 1234567890\nadd Bob 12\nphone Ghost\nadd Bob\nfly\nhello\nclose\n",
    );
    assert_eq!(
        out,
        vec![
            "Invalid name. Please enter a name containing only letters.",
            "Your phone number is incorrect. Please enter a valid 10-digit phone number.",
            "Contact not found.",
            "Give me name and phone please.",
            "Invalid command.",
            "How can I help you?",
            "Good bye!",
        ]
    );
}

#[test]
fn cli_birthday_report_uses_reference_date() {
    let out = replies(
        &["--today", "2024-01-10"],
        "add Ann 1111111111\nadd Bob 2222222222\nadd Cid 3333333333\n\
         add-birthday Ann 12.01.1990\nadd-birthday Bob 13.01.1990\nadd-birthday Cid 18.01.1990\n\
         birthdays\nexit\n",
    );
    assert_eq!(out[6], "Friday: Ann\nMonday: Bob");
}

#[test]
fn cli_json_birthdays() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_session(
        &temp,
        &["--json", "--today", "2024-01-10"],
        "add Ann 1111111111\nadd-birthday Ann 14.01.1990\nbirthdays\nexit\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let json = stdout.split(PROMPT).nth(3).expect("birthdays reply");
    let value: Value = serde_json::from_str(json.trim()).expect("parse json");
    assert_eq!(value[0]["weekday"], "Monday");
    assert_eq!(value[0]["names"][0], "Ann");
}

#[test]
fn cli_end_of_input_exits_cleanly() {
    let out = replies(&[], "hello\n");
    assert_eq!(out, vec!["How can I help you?", "Good bye!"]);
}

#[test]
fn cli_reads_prompt_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path().join("contactbook");
    fs::create_dir_all(&dir).expect("config dir");
    fs::write(dir.join("config.toml"), "[repl]\nprompt = \"? \"\n").expect("write config");

    let output = run_session(&temp, &[], "hello\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(
        stdout,
        "Welcome to the assistant bot!\n? How can I help you?\n? Good bye!\n"
    );
}

#[test]
fn cli_missing_explicit_config_is_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("nope.toml");
    let output = run_session(
        &temp,
        &["--config", missing.to_str().expect("path")],
        "exit\n",
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("load config"));
}

#[test]
fn cli_rejects_bad_reference_date() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_session(&temp, &["--today", "10.01.2024"], "exit\n");
    assert_eq!(output.status.code(), Some(3));
}
