// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;
use std::io::{self, BufRead, Write};

use crate::ledger::{LedgerStore, NewTransaction};
use crate::models::{TransactionRecord, TxKind};
use crate::preferences::PreferencesStore;
use crate::utils::{fmt_signed, format_datetime, maybe_print_json, parse_amount, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(conn, sub)?;
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        Some(("clear", sub)) => clear(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<TransactionRecord> {
    let title = sub.get_one::<String>("title").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let category = sub.get_one::<String>("category").cloned();

    let mut ledger = LedgerStore::load(conn)?;
    let rec = ledger.add(
        NewTransaction {
            title: title.clone(),
            amount,
            kind,
            category,
        },
        chrono::Local::now().naive_local(),
    )?;
    let prefs = PreferencesStore::load(conn)?;
    println!(
        "Recorded {} {} '{}' ({}) id={}",
        rec.kind,
        fmt_signed(rec.kind, &rec.amount, prefs.currency()),
        rec.title,
        rec.category,
        rec.id
    );
    Ok(rec)
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub amount: String,
    pub category: String,
}

/// Rows for the home list, in entry order.
pub fn list_rows(conn: &Connection) -> Result<Vec<TransactionRow>> {
    let ledger = LedgerStore::load(conn)?;
    let prefs = PreferencesStore::load(conn)?;
    Ok(ledger
        .all()
        .iter()
        .map(|r| TransactionRow {
            id: r.id,
            date: format_datetime(&r.date),
            title: r.title.clone(),
            amount: fmt_signed(r.kind, &r.amount, prefs.currency()),
            category: r.category.clone(),
        })
        .collect())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = list_rows(conn)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions yet");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .into_iter()
        .map(|r| vec![r.id.to_string(), r.date, r.title, r.amount, r.category])
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Title", "Amount", "Category"], rows)
    );
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut ledger = LedgerStore::load(conn)?;
    if ledger.remove(id)? {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

fn clear(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut ledger = LedgerStore::load(conn)?;
    if ledger.is_empty() {
        println!("No transactions to clear");
        return Ok(());
    }
    let confirmed = sub.get_flag("yes") || confirm_on_stdin(ledger.len())?;
    ledger.clear(confirmed)?;
    println!("Cleared all transactions");
    Ok(())
}

fn confirm_on_stdin(count: usize) -> Result<bool> {
    print!("Delete all {} transactions? [y/N] ", count);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
