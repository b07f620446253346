use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn tracker_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense_tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = TempDir::new().unwrap();
    let input = "add -d Lunch -a 12.5 -c food\n\
                 add --description 'Fiber plan' --amount 40 --category INTERNET_BILL\n\
                 list\n\
                 summary -c food\n\
                 exit\n\
                 summary\n";

    tracker_cmd(&home)
        .env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Expense added successfully (ID: 1)"))
        .stdout(contains("Expense added successfully (ID: 2)"))
        .stdout(contains("Fiber plan"))
        .stdout(contains("Total expenses for FOOD: $12.50"))
        .stdout(contains("Total expenses: $52.50").not());

    let json = std::fs::read_to_string(home.path().join("expense.json")).unwrap();
    assert!(json.contains("\"expenseId\": 2"));
}

#[test]
fn script_mode_keeps_going_after_errors() {
    let home = TempDir::new().unwrap();
    tracker_cmd(&home)
        .env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .write_stdin("add -d Taxi -a 9 -c transport\nlst\nlist\n")
        .assert()
        .success()
        .stdout(contains("Category not found: transport"))
        .stdout(contains("Valid categories: FOOD, FRUITS"))
        .stdout(contains("Suggestion: `list`?"))
        .stdout(contains("No expenses found."));
}

#[test]
fn budget_warning_when_month_is_overspent() {
    let home = TempDir::new().unwrap();
    let month = Local::now().month();
    let script = format!(
        "add-budget -b 50 -m {month}\n\
         get-budget\n\
         add -d Groceries -a 80 -c food\n"
    );

    tracker_cmd(&home)
        .env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("The new budget for"))
        .stdout(contains("is: $50.00"))
        .stdout(contains(
            "Expense added successfully (ID: 1) - Warning: Budget exceeded by $30.00",
        ));
}

#[test]
fn one_shot_commands_share_the_data_directory() {
    let home = TempDir::new().unwrap();

    tracker_cmd(&home)
        .args(["add-budget", "-b", "1500", "-m", "6", "-y", "2025"])
        .assert()
        .success()
        .stdout(contains("The new budget for 06/2025 is: $1500.00"));

    tracker_cmd(&home)
        .args(["get-budget", "--month", "6", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("Current budget for 06/2025 is: $1500.00"));

    tracker_cmd(&home)
        .args(["get-budget", "-m", "7", "-y", "2025"])
        .assert()
        .success()
        .stdout(contains("Budget not found for 07/2025"));
}

#[test]
fn one_shot_failure_exits_non_zero() {
    let home = TempDir::new().unwrap();

    tracker_cmd(&home)
        .args(["add", "-d", "Lunch", "-c", "food"])
        .assert()
        .failure()
        .stderr(contains("missing required option --amount"));

    tracker_cmd(&home)
        .args(["frobnicate"])
        .assert()
        .failure()
        .stderr(contains("Unknown command `frobnicate`"));
}

#[test]
fn delete_and_summary_one_shot() {
    let home = TempDir::new().unwrap();
    tracker_cmd(&home)
        .args(["add", "-d", "Lunch", "-a", "10", "-c", "food"])
        .assert()
        .success();

    tracker_cmd(&home)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("Expense deleted successfully"));

    tracker_cmd(&home)
        .args(["summary"])
        .assert()
        .success()
        .stdout(contains("Total expenses: $0.00"));
}

#[test]
fn budgets_and_currency_settings_persist() {
    let home = TempDir::new().unwrap();

    tracker_cmd(&home)
        .args(["config", "--currency", "EUR "])
        .assert()
        .success()
        .stdout(contains("Currency symbol set to EUR"));
    assert!(home.path().join("settings.json").exists());

    tracker_cmd(&home)
        .args(["add-budget", "-b", "250", "-m", "3", "-y", "2024"])
        .assert()
        .success()
        .stdout(contains("The new budget for 03/2024 is: EUR250.00"));

    tracker_cmd(&home)
        .args(["budgets", "--year", "2024"])
        .assert()
        .success()
        .stdout(contains("03/2024  EUR250.00"));
}
