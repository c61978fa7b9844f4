// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtered, paginated transaction history.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;
use crate::models::{TransactionRecord, TxKind};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    fn accepts(&self, kind: TxKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TxKind::Income,
            TypeFilter::Expense => kind == TxKind::Expense,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeFilter::All => "all",
            TypeFilter::Income => "income",
            TypeFilter::Expense => "expense",
        })
    }
}

impl FromStr for TypeFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            _ => Err(LedgerError::InvalidChoice {
                kind: "type filter",
                value: s.to_string(),
                expected: "all, income, expense",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub type_filter: TypeFilter,
    pub search: String,
    /// 1-indexed; 0 is read as 1.
    pub page: usize,
    pub page_size: usize,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            type_filter: TypeFilter::All,
            search: String::new(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPage {
    pub rows: Vec<TransactionRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

impl HistoryPage {
    /// True when no record matched the filters at all.
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }
}

pub fn query(records: &[TransactionRecord], q: &HistoryQuery) -> HistoryPage {
    let mut sorted: Vec<&TransactionRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));

    let needle = q.search.to_lowercase();
    let filtered: Vec<&TransactionRecord> = sorted
        .into_iter()
        .filter(|r| q.type_filter.accepts(r.kind))
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .collect();

    let page_size = q.page_size.max(1);
    let page = q.page.max(1);
    let total_rows = filtered.len();
    let total_pages = total_rows.div_ceil(page_size);
    // An offset too large for usize is past the end like any other.
    let rows = match (page - 1).checked_mul(page_size) {
        Some(offset) => filtered
            .into_iter()
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    HistoryPage {
        rows,
        page,
        total_pages,
        total_rows,
    }
}

/// Page buttons to offer. A single page needs no pager.
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    if total_pages <= 1 {
        Vec::new()
    } else {
        (1..=total_pages).collect()
    }
}

/// Holds the history screen's filter state between queries.
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    query: HistoryQuery,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &HistoryQuery {
        &self.query
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.query.type_filter = filter;
        self.query.page = 1;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
        self.query.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }

    pub fn render(&self, records: &[TransactionRecord]) -> HistoryPage {
        query(records, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn records(n: i64) -> Vec<TransactionRecord> {
        (1..=n)
            .map(|i| TransactionRecord {
                id: i,
                title: if i % 2 == 0 { format!("Lunch {i}") } else { format!("Salary {i}") },
                amount: Decimal::from(i),
                kind: if i % 2 == 0 { TxKind::Expense } else { TxKind::Income },
                category: "Other".into(),
                date: NaiveDate::from_ymd_opt(2025, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            })
            .collect()
    }

    #[test]
    fn newest_first() {
        let page = query(&records(3), &HistoryQuery::default());
        let ids: Vec<i64> = page.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn type_then_search_filter() {
        let q = HistoryQuery {
            type_filter: TypeFilter::Expense,
            search: "LUNCH 1".into(),
            ..HistoryQuery::default()
        };
        let page = query(&records(12), &q);
        let ids: Vec<i64> = page.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![12, 10]);
    }

    #[test]
    fn no_match_has_zero_pages() {
        let q = HistoryQuery {
            search: "rent".into(),
            ..HistoryQuery::default()
        };
        let page = query(&records(5), &q);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn page_zero_reads_as_first() {
        let q = HistoryQuery {
            page: 0,
            ..HistoryQuery::default()
        };
        let page = query(&records(12), &q);
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 10);
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut view = HistoryView::new();
        view.set_page(3);
        assert_eq!(view.query().page, 3);
        view.set_type_filter(TypeFilter::Income);
        assert_eq!(view.query().page, 1);
        view.set_page(2);
        view.set_search("sal");
        assert_eq!(view.query().page, 1);
        view.set_page(2);
        assert_eq!(view.query().search, "sal");
        assert_eq!(view.query().type_filter, TypeFilter::Income);
    }

    #[test]
    fn pager_hidden_for_single_page() {
        assert!(page_numbers(0).is_empty());
        assert!(page_numbers(1).is_empty());
        assert_eq!(page_numbers(3), vec![1, 2, 3]);
    }
}
