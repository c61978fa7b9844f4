// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use pursebook::aggregate::{self, HighestExpense, Summary, Window};
use pursebook::db::init_schema;
use pursebook::ledger::{LedgerStore, NewTransaction};
use pursebook::models::TxKind;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    conn
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 14)
        .unwrap()
        .and_hms_opt(18, 45, 0)
        .unwrap()
}

fn new_tx(title: &str, amount: i64, kind: TxKind, category: Option<&str>) -> NewTransaction {
    NewTransaction {
        title: title.to_string(),
        amount: Decimal::from(amount),
        kind,
        category: category.map(str::to_string),
    }
}

#[test]
fn salary_and_food_scenario() {
    let conn = setup();
    let mut ledger = LedgerStore::load(&conn).unwrap();
    ledger
        .add(new_tx("Salary", 5000, TxKind::Income, None), now())
        .unwrap();
    ledger
        .add(new_tx("Food", 200, TxKind::Expense, Some("Food")), now())
        .unwrap();

    let s = aggregate::summary(ledger.all());
    assert_eq!(
        s,
        Summary {
            balance: Decimal::from(4800),
            income: Decimal::from(5000),
            expense: Decimal::from(200),
        }
    );

    let b = aggregate::category_breakdown(ledger.all());
    assert_eq!(b.len(), 1);
    assert_eq!(b.get("Food"), Some(&Decimal::from(200)));

    let i = aggregate::insights(ledger.all());
    assert_eq!(i.average_expense, Some(Decimal::from(200)));
    assert_eq!(
        i.highest_expense,
        Some(HighestExpense {
            amount: Decimal::from(200),
            title: "Food".into(),
        })
    );
}

#[test]
fn add_moves_summary_by_amount() {
    let conn = setup();
    let mut ledger = LedgerStore::load(&conn).unwrap();
    ledger
        .add(new_tx("Seed", 100, TxKind::Income, None), now())
        .unwrap();
    let before = aggregate::summary(ledger.all());

    let rec = ledger
        .add(new_tx("Book", 40, TxKind::Expense, Some("Study")), now())
        .unwrap();
    let matching: Vec<_> = ledger.all().iter().filter(|r| r.id == rec.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].title, "Book");
    assert_eq!(matching[0].kind, TxKind::Expense);

    let after = aggregate::summary(ledger.all());
    assert_eq!(after.expense - before.expense, Decimal::from(40));
    assert_eq!(before.balance - after.balance, Decimal::from(40));
    assert_eq!(after.income, before.income);

    ledger
        .add(new_tx("Gift", 15, TxKind::Income, None), now())
        .unwrap();
    let last = aggregate::summary(ledger.all());
    assert_eq!(last.income - after.income, Decimal::from(15));
    assert_eq!(last.balance - after.balance, Decimal::from(15));
}

#[test]
fn remove_is_idempotent() {
    let conn = setup();
    let mut ledger = LedgerStore::load(&conn).unwrap();
    let a = ledger
        .add(new_tx("A", 10, TxKind::Income, None), now())
        .unwrap();
    ledger
        .add(new_tx("B", 20, TxKind::Expense, None), now())
        .unwrap();

    assert!(ledger.remove(a.id).unwrap());
    let once = ledger.all().to_vec();
    assert!(!ledger.remove(a.id).unwrap());
    assert_eq!(ledger.all(), once.as_slice());

    let reloaded = LedgerStore::load(&conn).unwrap();
    assert_eq!(reloaded.all(), once.as_slice());
}

#[test]
fn clear_zeroes_everything() {
    let conn = setup();
    let mut ledger = LedgerStore::load(&conn).unwrap();
    ledger
        .add(new_tx("A", 10, TxKind::Income, None), now())
        .unwrap();
    ledger
        .add(new_tx("B", 3, TxKind::Expense, None), now())
        .unwrap();
    ledger.clear(true).unwrap();

    assert!(ledger.all().is_empty());
    assert_eq!(aggregate::summary(ledger.all()), Summary::default());
    assert!(LedgerStore::load(&conn).unwrap().is_empty());
}

#[test]
fn persisted_ledger_reloads_identically() {
    let conn = setup();
    let mut ledger = LedgerStore::load(&conn).unwrap();
    ledger
        .add(new_tx("Rent", 900, TxKind::Expense, Some("Home")), now())
        .unwrap();
    ledger
        .add(new_tx("Pay", 3000, TxKind::Income, None), now())
        .unwrap();
    ledger
        .add(new_tx("Snacks", 12, TxKind::Expense, None), now())
        .unwrap();
    let written = ledger.all().to_vec();

    let reloaded = LedgerStore::load(&conn).unwrap();
    assert_eq!(reloaded.all(), written.as_slice());
}

#[test]
fn all_window_ignores_dates() {
    let conn = setup();
    let mut ledger = LedgerStore::load(&conn).unwrap();
    let old = NaiveDate::from_ymd_opt(2019, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    ledger
        .add(new_tx("Old", 1, TxKind::Income, None), old)
        .unwrap();
    ledger
        .add(new_tx("New", 2, TxKind::Expense, None), now())
        .unwrap();

    let all = aggregate::filter_by_window(ledger.all(), Window::All, now());
    assert_eq!(all.len(), 2);
    let year = aggregate::filter_by_window(ledger.all(), Window::Year, now());
    assert_eq!(year.len(), 1);
    assert_eq!(year[0].title, "New");
}

#[test]
fn breakdown_excludes_income_and_defaults_category() {
    let conn = setup();
    let mut ledger = LedgerStore::load(&conn).unwrap();
    ledger
        .add(new_tx("Pay", 1000, TxKind::Income, Some("Salary")), now())
        .unwrap();
    ledger
        .add(new_tx("Bus", 30, TxKind::Expense, None), now())
        .unwrap();
    ledger
        .add(new_tx("Taxi", 70, TxKind::Expense, Some("Travel")), now())
        .unwrap();
    ledger
        .add(new_tx("Stamp", 5, TxKind::Expense, Some("")), now())
        .unwrap();

    let b = aggregate::category_breakdown(ledger.all());
    assert!(!b.contains_key("Salary"));
    assert_eq!(b.get("Other"), Some(&Decimal::from(35)));
    assert_eq!(b.get("Travel"), Some(&Decimal::from(70)));
    assert_eq!(b.len(), 2);
}
