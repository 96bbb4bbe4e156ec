use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn temp_store(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "customizations-cli-{}-{}.json",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn cli(store: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("customizations").unwrap();
    cmd.arg("--backend").arg("file").arg("--store").arg(store);
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("customizations").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage delivery and payment customizations"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("customizations").unwrap();
    cmd.arg("--version").assert().success();
}

#[test]
fn test_missing_subcommand() {
    let mut cmd = Command::cargo_bin("customizations").unwrap();
    cmd.assert().failure();
}

#[test]
fn test_list_empty_store() {
    let store = temp_store("empty");

    cli(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No customizations yet"));
}

#[test]
fn test_invalid_subtotal_is_rejected_locally() {
    let store = temp_store("invalid");

    cli(&store)
        .args(["new-payment", "--payment-method", "Cash", "--cart-subtotal", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subtotal must be greater than 0"));

    assert!(!store.exists());
}

#[test]
fn test_create_then_list_then_delete() {
    let store = temp_store("lifecycle");

    cli(&store)
        .args(["new-payment", "--payment-method", "Cash", "--cart-subtotal", "25"])
        .assert()
        .success()
        .stderr(predicate::str::contains("/settings/payments/customizations"));

    cli(&store)
        .args(["list", "--kind", "payment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gid://shopify/PaymentCustomization/1"));

    cli(&store)
        .args(["delete", "--all", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Deleted"));

    cli(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No customizations yet"));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn test_duplicate_payment_shows_user_error_banner() {
    let store = temp_store("duplicate");

    cli(&store)
        .args(["new-payment", "--payment-method", "Cash", "--cart-subtotal", "25"])
        .assert()
        .success();

    cli(&store)
        .args(["new-payment", "--payment-method", "Cash", "--cart-subtotal", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There was an error saving this customization"));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn test_hide_delivery_uses_defaults() {
    let store = temp_store("hide");

    cli(&store).arg("hide-delivery").assert().success();

    cli(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hide Express"));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn test_bulk_delete_unknown_id_fails() {
    let store = temp_store("unknown");

    cli(&store)
        .args(["delete", "missing-id", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing-id"));
}
