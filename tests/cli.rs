use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget_calc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget-calc").unwrap();
    cmd.env("BUDGET_CALC_DIR", dir.path())
        .env("BUDGET_CALC_LOG", "off");
    cmd
}

#[test]
fn calc_table_shows_recommended_rent_and_balance() {
    let dir = TempDir::new().unwrap();
    budget_calc(&dir)
        .args(["calc", "--income1", "2000", "--income2", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended rent:  $1,333 (3.0x)"))
        .stdout(predicate::str::contains("Unallocated"))
        .stdout(predicate::str::contains("Remaining: $107"));
}

#[test]
fn calc_json_reports_overspent_entry() {
    let dir = TempDir::new().unwrap();
    budget_calc(&dir)
        .args([
            "calc", "--income1", "2000", "--income2", "2000", "--set", "Rent=2000", "-f", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Overspent\""))
        .stdout(predicate::str::contains("\"value\": 560"))
        .stdout(predicate::str::contains("\"remaining\": -560"));
}

#[test]
fn calc_csv_at_lowest_ratio() {
    let dir = TempDir::new().unwrap();
    budget_calc(&dir)
        .args(["calc", "--income1", "3000", "--income2", "1000", "-r", "2.0", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Category,Amount,Percent,Color,Custom"))
        .stdout(predicate::str::contains("Rent,2000,50.0,#FF6384,false"))
        .stdout(predicate::str::contains("Overspent,560,14.0,#F44336,false"));
}

#[test]
fn calc_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    budget_calc(&dir)
        .args(["calc", "--set", "Pets=50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: Pets"));
}

#[test]
fn calc_uses_settings_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "default_income1": 5000, "default_income2": 0, "default_rent_ratio": 2.5 }"#,
    )
    .unwrap();

    budget_calc(&dir)
        .args(["calc", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent,2000,40.0"));
}

#[test]
fn init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    budget_calc(&dir).arg("init").assert().success();

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"slider_step\": 10"));

    budget_calc(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"));
}

#[test]
fn calc_rejects_negative_override() {
    let dir = TempDir::new().unwrap();
    budget_calc(&dir)
        .args(["calc", "--set", "Rent=-500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount for Rent must be between 0 and"));
}

#[test]
fn calc_rejects_income_beyond_twelve_digits() {
    let dir = TempDir::new().unwrap();
    budget_calc(&dir)
        .args(["calc", "--income1", "99999999999999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--income1"));

    budget_calc(&dir)
        .args(["calc", "--income2", "1000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--income2"));
}

#[test]
fn calc_handles_largest_incomes() {
    let dir = TempDir::new().unwrap();
    budget_calc(&dir)
        .args([
            "calc", "--income1", "999999999999", "--income2", "999999999999", "-r", "2.0", "-f",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent,999999999999,50.0"));
}
