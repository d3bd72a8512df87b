use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finance(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance").unwrap();
    cmd.env("FINANCE_TRACKER_DATA_DIR", dir.path());
    cmd
}

#[test]
fn test_no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    finance(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("finance --help"));
}

#[test]
fn test_add_expense_updates_summary() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["tx", "add", "150", "expense", "-c", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense: MYR 150.00"));

    finance(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("MYR -150.00"))
        .stdout(predicate::str::contains("Over budget!").not());

    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn test_over_budget() {
    let dir = TempDir::new().unwrap();

    finance(&dir).args(["budget", "set", "100"]).assert().success();
    finance(&dir)
        .args(["tx", "add", "150", "expense"])
        .assert()
        .success();

    finance(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MYR -50.00"))
        .stdout(predicate::str::contains("Over budget!"));
}

#[test]
fn test_list_shows_dated_transaction() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["tx", "add", "3000", "income", "-c", "Salary", "-d", "2026-02-01"])
        .assert()
        .success();

    finance(&dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-02-01"))
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("3000.00"));
}

#[test]
fn test_rename_category_relabels_transactions() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["tx", "add", "20", "expense", "-c", "Food"])
        .assert()
        .success();

    finance(&dir)
        .args(["category", "rename", "Food", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 transaction(s) relabelled"));

    finance(&dir)
        .args(["tx", "list", "-c", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("-20.00"));
}

#[test]
fn test_deleted_category_is_reported_as_dangling() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["tx", "add", "20", "expense", "-c", "Transport"])
        .assert()
        .success();
    finance(&dir)
        .args(["category", "delete", "Transport"])
        .assert()
        .success();

    finance(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no longer defined"))
        .stdout(predicate::str::contains("Transport"));
}

#[test]
fn test_unknown_type_is_rejected() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["tx", "add", "10", "transfer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized transaction type 'transfer'"));
}

#[test]
fn test_remove_unknown_transaction_fails() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["tx", "remove", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found: 12345"));
}

#[test]
fn test_currency_set() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["currency", "set", "usd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency set to USD"));

    finance(&dir)
        .args(["currency", "show"])
        .assert()
        .success()
        .stdout(predicate::str::diff("USD\n"));
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");

    finance(&dir)
        .args(["tx", "add", "10", "income"])
        .assert()
        .success();

    finance(&dir)
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
    assert!(data.join("transactions.json").exists());

    finance(&dir).args(["reset", "--yes"]).assert().success();
    assert!(!data.join("transactions.json").exists());

    finance(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("MYR 2000.00"));
}

#[test]
fn test_corrupt_value_strict_then_fallback() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("monthlyBudget.json"), "\"lots\"").unwrap();

    finance(&dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode stored 'monthlyBudget'"));

    finance(&dir)
        .args(["config", "--decode-policy", "fallback"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Decode policy: fallback"));

    finance(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("MYR 2000.00"));

    finance(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("WARN"));
}

#[test]
fn test_export_json_to_stdout() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["tx", "add", "42.50", "expense", "-c", "Shopping"])
        .assert()
        .success();

    finance(&dir)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""))
        .stdout(predicate::str::contains("\"Shopping\""));
}

#[test]
fn test_export_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("transactions.csv");

    finance(&dir)
        .args(["tx", "add", "42.50", "expense", "-c", "Shopping"])
        .assert()
        .success();

    finance(&dir)
        .args(["export", "--format", "csv", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("ID,Date,Type,Category,Amount,Currency"));
    assert!(text.contains("-42.50"));
}

#[test]
fn test_log_records_mutations() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["category", "add", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added category: Rent"));

    finance(&dir)
        .args(["log", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Category Rent"));
}

#[test]
fn test_existing_budget_is_read_in_units() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("monthlyBudget.json"), "1500").unwrap();

    finance(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget: MYR 1500.00"));

    finance(&dir).args(["budget", "set", "2500.50"]).assert().success();
    let stored = std::fs::read_to_string(data.join("monthlyBudget.json")).unwrap();
    assert_eq!(stored, "2500.5");
}

#[test]
fn test_invalid_date_format_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format":"%Q"}"#).unwrap();

    finance(&dir)
        .args(["tx", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_category_names_are_trimmed() {
    let dir = TempDir::new().unwrap();

    finance(&dir).args(["category", "add", " Rent "]).assert().success();
    finance(&dir)
        .args(["category", "delete", " Rent "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted category: Rent"));
}
