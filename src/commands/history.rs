// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::history::{HistoryPage, HistoryView, TypeFilter, page_numbers};
use crate::ledger::LedgerStore;
use crate::preferences::PreferencesStore;
use crate::utils::{fmt_signed, format_datetime, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let page = query_page(conn, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &page)? {
        return Ok(());
    }
    if page.is_empty() {
        println!("No transactions found");
        return Ok(());
    }
    if page.rows.is_empty() {
        println!("Page {} is empty (last page is {})", page.page, page.total_pages);
        return Ok(());
    }
    let prefs = PreferencesStore::load(conn)?;
    let rows: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|r| {
            vec![
                r.title.clone(),
                format_datetime(&r.date),
                fmt_signed(r.kind, &r.amount, prefs.currency()),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Title", "Date", "Amount"], rows));
    println!("{}", footer(&page));
    let pager = page_numbers(page.total_pages);
    if !pager.is_empty() {
        let labels: Vec<String> = pager.iter().map(|n| n.to_string()).collect();
        println!("Pages: {}", labels.join(" "));
    }
    Ok(())
}

/// Position line printed under the table, single page included.
pub fn footer(page: &HistoryPage) -> String {
    format!("Page {} of {}", page.page, page.total_pages)
}

pub fn query_page(conn: &Connection, sub: &clap::ArgMatches) -> Result<HistoryPage> {
    let filter: TypeFilter = sub.get_one::<String>("type").unwrap().parse()?;
    let search = sub
        .get_one::<String>("search")
        .map(String::as_str)
        .unwrap_or("");
    let page = *sub.get_one::<usize>("page").unwrap();

    let mut view = HistoryView::new();
    view.set_type_filter(filter);
    view.set_search(search.trim());
    view.set_page(page);

    let ledger = LedgerStore::load(conn)?;
    Ok(view.render(ledger.all()))
}
