// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the ledger. Everything here is pure and recomputed on
//! demand from the full record list.

use chrono::{Datelike, Duration, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::LedgerError;
use crate::models::{DEFAULT_CATEGORY, TransactionRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub balance: Decimal,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    #[default]
    All,
    Week,
    Month,
    Year,
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Window::All => "all",
            Window::Week => "week",
            Window::Month => "month",
            Window::Year => "year",
        })
    }
}

impl FromStr for Window {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Window::All),
            "week" => Ok(Window::Week),
            "month" => Ok(Window::Month),
            "year" => Ok(Window::Year),
            _ => Err(LedgerError::InvalidChoice {
                kind: "window",
                value: s.to_string(),
                expected: "all, week, month, year",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighestExpense {
    pub amount: Decimal,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Insights {
    pub average_expense: Option<Decimal>,
    pub highest_expense: Option<HighestExpense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProfileStats {
    pub income: Decimal,
    pub expense: Decimal,
    pub count: usize,
    pub highest_expense: Decimal,
}

/// Labels and values handed to a chart renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Adds `amount` to a running total, pinning at `Decimal::MAX` instead of
/// panicking. `add` never stores a ledger that gets here; imported or
/// hand-edited data can.
fn saturating_total(total: Decimal, amount: Decimal, id: i64) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!(id, %amount, "total overflowed, clamping to the largest value");
        if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

pub fn summary<'r, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'r TransactionRecord>,
{
    let mut s = Summary::default();
    for r in records {
        if r.is_income() {
            s.income = saturating_total(s.income, r.amount, r.id);
        } else {
            s.expense = saturating_total(s.expense, r.amount, r.id);
        }
    }
    let clamp = if s.income > s.expense {
        Decimal::MAX
    } else {
        Decimal::MIN
    };
    s.balance = s.income.checked_sub(s.expense).unwrap_or(clamp);
    s
}

/// Selects records by calendar relation to `now`. The week boundary compares
/// days only: a record dated exactly seven days ago is included whatever its
/// time.
pub fn filter_by_window<'r>(
    records: &'r [TransactionRecord],
    window: Window,
    now: NaiveDateTime,
) -> Vec<&'r TransactionRecord> {
    let today = now.date();
    let week_start = today - Duration::days(7);
    records
        .iter()
        .filter(|r| {
            let d = r.date.date();
            match window {
                Window::All => true,
                Window::Week => d >= week_start,
                Window::Month => d.year() == today.year() && d.month() == today.month(),
                Window::Year => d.year() == today.year(),
            }
        })
        .collect()
}

pub fn window_summary(records: &[TransactionRecord], window: Window, now: NaiveDateTime) -> Summary {
    summary(filter_by_window(records, window, now))
}

pub fn category_breakdown(records: &[TransactionRecord]) -> HashMap<String, Decimal> {
    let mut agg: HashMap<String, Decimal> = HashMap::new();
    for r in records.iter().filter(|r| r.is_expense()) {
        let cat = if r.category.trim().is_empty() {
            DEFAULT_CATEGORY
        } else {
            r.category.as_str()
        };
        let entry = agg.entry(cat.to_string()).or_insert(Decimal::ZERO);
        *entry = saturating_total(*entry, r.amount, r.id);
    }
    agg
}

pub fn insights(records: &[TransactionRecord]) -> Insights {
    let mut total = Decimal::ZERO;
    let mut n: u32 = 0;
    let mut highest: Option<&TransactionRecord> = None;
    for r in records.iter().filter(|r| r.is_expense()) {
        total = saturating_total(total, r.amount, r.id);
        n += 1;
        // strict comparison keeps the first of equal amounts
        if highest.is_none_or(|h| r.amount > h.amount) {
            highest = Some(r);
        }
    }
    if n == 0 {
        return Insights::default();
    }
    let average = (total / Decimal::from(n))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Insights {
        average_expense: Some(average),
        highest_expense: highest.map(|h| HighestExpense {
            amount: h.amount,
            title: h.title.clone(),
        }),
    }
}

pub fn profile_stats(records: &[TransactionRecord]) -> ProfileStats {
    let s = summary(records);
    let highest_expense = records
        .iter()
        .filter(|r| r.is_expense())
        .map(|r| r.amount)
        .max()
        .unwrap_or(Decimal::ZERO);
    ProfileStats {
        income: s.income,
        expense: s.expense,
        count: records.len(),
        highest_expense,
    }
}

pub fn income_expense_series(s: &Summary) -> ChartSeries {
    ChartSeries {
        labels: vec!["Income".into(), "Expense".into()],
        values: vec![s.income, s.expense],
    }
}

pub fn breakdown_series(breakdown: &HashMap<String, Decimal>) -> ChartSeries {
    let sorted: BTreeMap<&String, &Decimal> = breakdown.iter().collect();
    ChartSeries {
        labels: sorted.keys().map(|k| k.to_string()).collect(),
        values: sorted.values().map(|v| **v).collect(),
    }
}
