// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, NaiveDate};
use pursebook::db::init_schema;
use pursebook::history::{HistoryQuery, HistoryView, TypeFilter, query};
use pursebook::ledger::{LedgerStore, NewTransaction};
use pursebook::models::TxKind;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn ledger_with(conn: &Connection, n: usize) -> LedgerStore<'_> {
    let mut ledger = LedgerStore::load(conn).unwrap();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    for i in 0..n {
        ledger
            .add(
                NewTransaction {
                    title: format!("Coffee {}", i + 1),
                    amount: Decimal::from(3),
                    kind: TxKind::Expense,
                    category: Some("Food".into()),
                },
                start + Duration::minutes(i as i64),
            )
            .unwrap();
    }
    ledger
}

#[test]
fn twenty_five_rows_make_three_pages() {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    let ledger = ledger_with(&conn, 25);

    let mut q = HistoryQuery::default();
    let first = query(ledger.all(), &q);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.rows[0].title, "Coffee 25");

    q.page = 3;
    let third = query(ledger.all(), &q);
    assert_eq!(third.rows.len(), 5);
    assert_eq!(third.rows[4].title, "Coffee 1");

    q.page = 4;
    let beyond = query(ledger.all(), &q);
    assert!(beyond.rows.is_empty());
    assert_eq!(beyond.total_pages, 3);
    assert!(!beyond.is_empty());
}

#[test]
fn huge_page_number_is_just_past_the_end() {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    let ledger = ledger_with(&conn, 25);

    let q = HistoryQuery {
        page: usize::MAX,
        ..HistoryQuery::default()
    };
    let page = query(ledger.all(), &q);
    assert!(page.rows.is_empty());
    assert_eq!(page.page, usize::MAX);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_rows, 25);

    let q = HistoryQuery {
        page: usize::MAX,
        page_size: usize::MAX,
        ..HistoryQuery::default()
    };
    let page = query(ledger.all(), &q);
    assert!(page.rows.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[test]
fn view_tracks_latest_ledger_state() {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    let mut ledger = ledger_with(&conn, 12);

    let mut view = HistoryView::new();
    view.set_page(2);
    assert_eq!(view.render(ledger.all()).rows.len(), 2);

    let newest = ledger.all().last().unwrap().id;
    ledger.remove(newest).unwrap();
    let page = view.render(ledger.all());
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.total_pages, 2);

    view.set_type_filter(TypeFilter::Income);
    let page = view.render(ledger.all());
    assert_eq!(page.page, 1);
    assert!(page.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn search_is_case_insensitive_substring() {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    let ledger = ledger_with(&conn, 3);

    let q = HistoryQuery {
        search: "cOFFee 2".into(),
        ..HistoryQuery::default()
    };
    let page = query(ledger.all(), &q);
    assert_eq!(page.total_rows, 1);
    assert_eq!(page.rows[0].title, "Coffee 2");
}
