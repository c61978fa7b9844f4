// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::aggregate::{
    self, ChartSeries, Insights, Summary, Window, breakdown_series, income_expense_series,
};
use crate::ledger::LedgerStore;
use crate::preferences::PreferencesStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let ledger = LedgerStore::load(conn)?;
    let s = aggregate::summary(ledger.all());
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let prefs = PreferencesStore::load(conn)?;
    println!("{}", summary_table(&s, prefs.currency()));
    Ok(())
}

#[derive(Serialize)]
pub struct StatsReport {
    pub window: Window,
    pub summary: Summary,
    pub chart: ChartSeries,
}

pub fn stats_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<StatsReport> {
    let window: Window = sub.get_one::<String>("window").unwrap().parse()?;
    let ledger = LedgerStore::load(conn)?;
    let s = aggregate::window_summary(ledger.all(), window, chrono::Local::now().naive_local());
    Ok(StatsReport {
        window,
        summary: s,
        chart: income_expense_series(&s),
    })
}

pub fn stats(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let report = stats_report(conn, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let prefs = PreferencesStore::load(conn)?;
    println!("Window: {}", report.window);
    println!("{}", summary_table(&report.summary, prefs.currency()));
    Ok(())
}

#[derive(Serialize)]
pub struct BreakdownReport {
    pub chart: ChartSeries,
}

pub fn breakdown_report(conn: &Connection) -> Result<BreakdownReport> {
    let ledger = LedgerStore::load(conn)?;
    let b = aggregate::category_breakdown(ledger.all());
    Ok(BreakdownReport {
        chart: breakdown_series(&b),
    })
}

pub fn breakdown(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let report = breakdown_report(conn)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    if report.chart.is_empty() {
        println!("No expenses recorded");
        return Ok(());
    }
    let prefs = PreferencesStore::load(conn)?;
    let mut rows: Vec<(String, rust_decimal::Decimal)> = report
        .chart
        .labels
        .into_iter()
        .zip(report.chart.values)
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    let data = rows
        .into_iter()
        .map(|(cat, amt)| vec![cat, fmt_money(&amt, prefs.currency())])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], data));
    Ok(())
}

pub fn insights(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let ledger = LedgerStore::load(conn)?;
    let i: Insights = aggregate::insights(ledger.all());
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &i)? {
        return Ok(());
    }
    let prefs = PreferencesStore::load(conn)?;
    let ccy = prefs.currency();
    match (i.average_expense, i.highest_expense) {
        (Some(avg), Some(high)) => {
            println!("You spend an average of {} per expense.", fmt_money(&avg, ccy));
            println!(
                "Highest expense: {} on {}.",
                fmt_money(&high.amount, ccy),
                high.title
            );
        }
        _ => println!("No expenses recorded"),
    }
    Ok(())
}

fn summary_table(s: &Summary, ccy: &str) -> comfy_table::Table {
    pretty_table(
        &["Balance", "Income", "Expense"],
        vec![vec![
            fmt_money(&s.balance, ccy),
            fmt_money(&s.income, ccy),
            fmt_money(&s.expense, ccy),
        ]],
    )
}
