//! E2E tests for the salc commands

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn salc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_salc"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Net amount passes through unchanged
#[test]
fn convert_net_base() {
    let output = salc(&["convert", "40000"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "40 000");
}

/// Gross amount has 13% removed
#[test]
fn convert_gross_base() {
    let output = salc(&["convert", "40000", "--gross"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "34 800");
}

#[test]
fn convert_tax_only() {
    let output = salc(&["convert", "40000", "--tax-only"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "5 977");

    let output = salc(&["convert", "40000", "--gross", "--tax-only"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "5 200");
}

#[test]
fn convert_combine() {
    let output = salc(&["convert", "40 000 ₽", "--combine-with", "5 977"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "45 977");
}

/// Empty input is zero, not an error
#[test]
fn convert_empty_amount() {
    let output = salc(&["convert", "", "--gross"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "0");
}

#[test]
fn convert_tax_only_conflicts_with_combine() {
    let output = salc(&["convert", "40000", "--tax-only", "--combine-with", "1"]);
    assert!(!output.status.success());
}

#[test]
fn convert_json_output() {
    let output = salc(&["convert", "40000", "--gross", "--tax-only", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result"], "5 200");
    assert_eq!(json["mode"], "tax-only");
    assert_eq!(json["tax_included"], false);
}

/// Default form: monthly salary of 40 000 net
#[test]
fn summary_defaults() {
    let output = salc(&["summary"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = stdout(&output);
    assert!(stdout.contains("Оклад за месяц"));
    assert!(stdout.contains("Без НДФЛ"));
    assert!(stdout.contains("40 000 ₽ сотрудник будет получать на руки"));
    assert!(stdout.contains("5 977 ₽ НДФЛ, 13% от оклада"));
    assert!(stdout.contains("45 977 ₽ за сотрудника в месяц"));
}

#[test]
fn summary_gross() {
    let output = salc(&["summary", "-a", "40000", "--gross"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = stdout(&output);
    assert!(stdout.contains("Указать с НДФЛ"));
    assert!(stdout.contains("34 800 ₽ сотрудник будет получать на руки"));
    assert!(stdout.contains("5 200 ₽ НДФЛ"));
    assert!(stdout.contains("40 000 ₽ за сотрудника в месяц"));
}

/// Minimum wage shows its note and no amount or breakdown
#[test]
fn summary_minimum_wage() {
    let output = salc(&["summary", "-b", "minimum-wage"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = stdout(&output);
    assert!(stdout.contains("МРОТ - минимальный размер оплаты труда"));
    assert!(!stdout.contains("Amount:"));
    assert!(!stdout.contains("на руки"));
}

#[test]
fn summary_daily_rate_json() {
    let output = salc(&["summary", "-b", "daily-rate", "-a", "1500", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["basis"], "daily-rate");
    assert_eq!(json["amount"], "1 500 ₽ в день");
    assert!(json.get("summary").is_none());
}

#[test]
fn batch_csv_table() {
    let output = salc(&["batch", "-i", "tests/data/salaries.csv"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = stdout(&output);
    assert!(stdout.contains("Cashier"));
    assert!(stdout.contains("45 977"));
    assert!(stdout.contains("34 800"));
    assert!(stdout.contains("1 500 ₽ в день"));
}

#[test]
fn batch_csv_output() {
    let output = salc(&["batch", "-i", "tests/data/salaries.csv", "--csv"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = stdout(&output);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("row,label,basis,amount,net,tax,total"));
    assert_eq!(
        lines.next(),
        Some("1,Cashier,monthly-salary,40 000 ₽,40 000,5 977,45 977")
    );
    assert_eq!(
        lines.next(),
        Some("2,Driver,monthly-salary,40 000 ₽ (gross),34 800,5 200,40 000")
    );
    assert_eq!(lines.next(), Some("3,Loader,daily-rate,1 500 ₽ в день,,,"));
    assert_eq!(lines.next(), Some("4,Cleaner,minimum-wage,,,,"));
}

#[test]
fn batch_json_input() {
    let output = salc(&["batch", "-i", "tests/data/salaries.json", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["total"], "45 977");
    assert_eq!(rows[1]["net"], "34 800");
    assert_eq!(rows[2]["basis"], "hourly-rate");
    assert_eq!(rows[2]["net"], "");
}

#[test]
fn batch_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_salc"))
        .args(["batch", "-i", "-", "--csv"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"amount,tax_included\n10000,false\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout(&output).contains("1,,monthly-salary,10 000 ₽ (gross),8 700,1 300,10 000"));
}

#[test]
fn batch_empty_stdin_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_salc"))
        .args(["batch", "-i", "-"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No input received"));
}

#[test]
fn batch_unknown_basis_fails() {
    let output = salc(&["batch", "-i", "tests/data/unknown_basis.csv"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("row 2: unknown pay basis 'weekly'"));
}

#[test]
fn bases_lists_all() {
    let output = salc(&["bases"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = stdout(&output);
    for name in ["monthly-salary", "minimum-wage", "daily-rate", "hourly-rate"] {
        assert!(stdout.contains(name), "missing {}", name);
    }
}

#[test]
fn schema_csv_header() {
    let output = salc(&["schema", "csv-header"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "amount,tax_included,basis,label");
}

#[test]
fn schema_json() {
    let output = salc(&["schema"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["properties"]["records"].is_object());
}

/// Amounts that are not plain integers still convert, digit by digit
#[test]
fn batch_odd_amounts() {
    let output = salc(&["batch", "-i", "tests/data/odd_amounts.csv", "--csv"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = stdout(&output);
    assert!(stdout.contains("1,Decimal,monthly-salary,150 ₽,150,22,172"));
    assert!(stdout.contains("2,Huge,monthly-salary,12 345 678 901 234 567 890 123 ₽,"));
    assert!(stdout.contains("3,Flag,monthly-salary,0 ₽,0,0,0"));

    let converted = salc(&["convert", "1.50"]);
    assert_eq!(String::from_utf8_lossy(&converted.stdout).trim(), "150");
}
