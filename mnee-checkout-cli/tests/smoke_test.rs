//! Smoke tests for mnee-checkout-cli
//!
//! Each test runs the built binary against its own temporary storage
//! directory.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(storage_dir: &Path, args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_mnee-checkout"))
        .args(args)
        .env("MNEE_CHECKOUT_DIR", storage_dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command");

    // Print output for debugging if test fails
    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
    }
    output
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Test that the CLI can show help
#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run(temp_dir.path(), &["--help"]);

    assert!(output.status.success());
    let help = stdout(&output);
    for command in ["show", "set-email", "set-shipping", "clear", "theme", "wallets"] {
        assert!(help.contains(command), "Help should mention '{}'", command);
    }
}

#[test]
fn test_show_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run(temp_dir.path(), &["show"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No user info saved"));
}

#[test]
fn test_set_email_persists() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run(temp_dir.path(), &["set-email", "a@x.io"]);
    assert!(output.status.success());

    let raw = std::fs::read_to_string(temp_dir.path().join("mnee-checkout-user-info-v1.json"))
        .expect("record should be written");
    assert_eq!(raw, r#"{"email":"a@x.io"}"#);

    let output = run(temp_dir.path(), &["show"]);
    assert!(stdout(&output).contains("a@x.io"));
}

#[test]
fn test_shipping_and_contact_in_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    run(temp_dir.path(), &["set-email", "a@x.io"]);
    run(
        temp_dir.path(),
        &["set-shipping", "--line1", "1 Main St", "--postal-code", "12345"],
    );
    run(temp_dir.path(), &["set-contact", "--phone", "555"]);

    let output = run(temp_dir.path(), &["show", "--json"]);
    let info: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("show --json prints JSON");

    assert_eq!(info["email"], "a@x.io");
    assert_eq!(info["shipping"]["line1"], "1 Main St");
    assert_eq!(info["shipping"]["postalCode"], "12345");
    assert_eq!(info["contact"]["phone"], "555");
}

#[test]
fn test_clear() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    run(temp_dir.path(), &["set-email", "a@x.io"]);

    let output = run(temp_dir.path(), &["clear"]);
    assert!(output.status.success());
    assert!(!temp_dir
        .path()
        .join("mnee-checkout-user-info-v1.json")
        .exists());
}

#[test]
fn test_clear_removes_corrupt_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let record = temp_dir.path().join("mnee-checkout-user-info-v1.json");
    std::fs::write(&record, "{corrupt").unwrap();

    let output = run(temp_dir.path(), &["clear"]);

    assert!(output.status.success());
    assert!(!record.exists());
    assert!(stdout(&output).contains("User info cleared"));
}

#[test]
fn test_clear_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run(temp_dir.path(), &["clear"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Nothing to clear"));
}

#[test]
fn test_custom_storage_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        temp_dir.path().join("checkout.json"),
        r#"{"storageKey":"shop-1"}"#,
    )
    .unwrap();

    run(temp_dir.path(), &["set-email", "a@x.io"]);

    assert!(temp_dir.path().join("shop-1.json").exists());
}

#[test]
fn test_theme_auto_follows_system() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run(temp_dir.path(), &["theme", "auto", "--system", "dark"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Resolved: dark"));

    let output = run(temp_dir.path(), &["theme", "light", "--system", "dark"]);
    assert!(stdout(&output).contains("Resolved: light"));
}

#[test]
fn test_theme_rejects_unknown() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run(temp_dir.path(), &["theme", "sepia"]);
    assert!(!output.status.success());
}

#[test]
fn test_theme_save() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    run(temp_dir.path(), &["theme", "dark", "--save"]);

    let raw = std::fs::read_to_string(temp_dir.path().join("checkout.json")).unwrap();
    let config: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(config["theme"], "dark");
}

#[test]
fn test_wallets_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run(
        temp_dir.path(),
        &["wallets", "--address", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("rainbowkit"));
    assert!(out.contains("yours"));
    assert!(out.contains("1BoatS...tpyT"));
}
