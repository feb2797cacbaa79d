//! End-to-end runs of the sival-cli binary

use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sival-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sival-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_default_circuit() {
    let output = run(&["circuit"]);
    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "C1: 3.0540 x 10^0 microfarad");
    assert_eq!(lines[3], "Q1a: 2.7486 x 10^2 microcoulomb");
}

#[test]
fn test_custom_pairs_and_precision() {
    let output = run(&["circuit", "-V", "12", "-P", "10,10", "--precision", "2"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("C1: 5.00 x 10^0 microfarad"), "{text}");
    assert!(text.contains("Q1a: 6.00 x 10^1 microcoulomb"), "{text}");
}

#[test]
fn test_invalid_pair_is_rejected() {
    let output = run(&["circuit", "-P", "6.22"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("A,B"));
}

#[test]
fn test_prefix_table() {
    let output = run(&["prefixes"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 25);
    assert!(text.lines().any(|l| l.starts_with("micro") && l.ends_with("µ")));
}

#[test]
fn test_units_listing() {
    let output = run(&["units"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.lines().any(|l| l.starts_with("gram") && l.contains("1.0000 x 10^-3 MASS")));
    assert!(text.lines().any(|l| l.starts_with("farad")));
}
