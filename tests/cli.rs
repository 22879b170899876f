//! End-to-end tests for the `fibseq` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibseq() -> Command {
    let mut cmd = Command::cargo_bin("fibseq").expect("binary not found");
    cmd.env_remove("FIBSEQ_BOUND")
        .env_remove("FIBSEQ_COUNT")
        .env_remove("FIBSEQ_PACE_MS");
    cmd
}

#[test]
fn help_flag() {
    fibseq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn default_bound_is_100() {
    fibseq()
        .assert()
        .success()
        .stdout("0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n55\n89\n");
}

#[test]
fn bound_from_env() {
    fibseq()
        .env("FIBSEQ_BOUND", "10")
        .assert()
        .success()
        .stdout("0\n1\n1\n2\n3\n5\n8\n");
}

#[test]
fn count_from_start() {
    fibseq()
        .args(["--count", "1", "--start", "100"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn rejects_negative_bound() {
    fibseq().args(["--bound", "-1"]).assert().failure();
}

#[test]
fn paced_indexed_count() {
    fibseq()
        .args(["--count", "2", "--pace-ms", "1", "--index", "--start", "5"])
        .assert()
        .success()
        .stdout("5 5\n6 8\n");
}

#[test]
fn zero_count_at_max_start_exits() {
    fibseq()
        .args(["--start", "10000000", "--count", "0"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn rejects_start_past_limit() {
    fibseq()
        .args(["--start", "18446744073709551615", "--count", "0"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start"));
}
