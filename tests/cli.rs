use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_restaurant_client"))
        .args(args)
        .env("APP_BASE_URL", "http://127.0.0.1:9")
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run client binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn qr_prints_link_without_network() {
    let output = run(&["qr", "42"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "/generate_qr/42");
}

#[test]
fn qr_rejects_non_finite_amounts() {
    for amount in ["inf", "NaN", "-inf"] {
        let output = run(&["qr", "--", amount]);
        assert!(!output.status.success(), "accepted {amount}");
        assert!(stdout(&output).is_empty());
    }
}

#[test]
fn bill_opens_new_window() {
    let output = run(&["bill", "17"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "open /bill/17 _blank");
}

#[test]
fn invalid_base_url_fails() {
    let output = run(&["--base-url", "nowhere", "qr", "1"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}
