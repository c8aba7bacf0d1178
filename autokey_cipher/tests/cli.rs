use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("autokey_cipher").unwrap()
}

#[test]
fn encrypts_known_vector() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("plain.txt");
    let output = dir.path().join("cipher.txt");
    fs::write(&input, "Attack at dawn!\n").expect("write input file");

    cmd()
        .arg("-f")
        .arg(&input)
        .args(["-k", "QUEENLY", "-m", "encrypt"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Encrypting with key: queenly"))
        .stderr(contains("ignored 1 non-letter characters"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "qnxepvytwtwp");
}

#[test]
fn decrypt_restores_normalized_plaintext() {
    let dir = TempDir::new().expect("create temp dir");
    let plain = dir.path().join("plain.txt");
    let encrypted = dir.path().join("cipher.txt");
    let decrypted = dir.path().join("restored.txt");
    fs::write(&plain, "Meet me at the\ntrain station at noon.\n").expect("write input file");

    cmd()
        .arg("--file")
        .arg(&plain)
        .args(["--key", "spy", "--mode", "encrypt"])
        .arg("--output")
        .arg(&encrypted)
        .assert()
        .success();

    cmd()
        .arg("--file")
        .arg(&encrypted)
        .args(["--key", "spy", "--mode", "decrypt"])
        .arg("--output")
        .arg(&decrypted)
        .assert()
        .success()
        .stdout(contains("Output saved to:"));

    assert_eq!(
        fs::read_to_string(&decrypted).unwrap(),
        "meetmeatthetrainstationatnoon"
    );
}

#[test]
fn rejects_key_with_digits() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("plain.txt");
    fs::write(&input, "attackatdawn").expect("write input file");

    cmd()
        .arg("-f")
        .arg(&input)
        .args(["-k", "k3y", "-m", "encrypt"])
        .arg("-o")
        .arg(dir.path().join("out.txt"))
        .assert()
        .failure()
        .stderr(contains("Invalid character '3'"));
}
