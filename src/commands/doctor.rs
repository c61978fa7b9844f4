// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use std::collections::HashSet;

use crate::db::{KEY_PREFERENCES, KEY_PROFILE, KEY_TRANSACTIONS, KeyValueStore};
use crate::models::{Preferences, Profile, TransactionRecord};
use crate::utils::pretty_table;

/// Collects `(issue, detail)` pairs for stored values that would be ignored
/// on load.
pub fn find_issues(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) Values that no longer parse
    if let Some(raw) = conn.get(KEY_TRANSACTIONS)? {
        match serde_json::from_str::<Vec<TransactionRecord>>(&raw) {
            Ok(records) => {
                // 2) Ledger-level invariants
                let mut seen = HashSet::new();
                for r in &records {
                    if !seen.insert(r.id) {
                        rows.push(vec!["duplicate_id".into(), r.id.to_string()]);
                    }
                    if r.amount <= rust_decimal::Decimal::ZERO {
                        rows.push(vec![
                            "non_positive_amount".into(),
                            format!("{} {}", r.id, r.amount),
                        ]);
                    }
                }
            }
            Err(e) => rows.push(vec![format!("corrupt_{}", KEY_TRANSACTIONS), e.to_string()]),
        }
    }
    if let Some(raw) = conn.get(KEY_PROFILE)? {
        if let Err(e) = serde_json::from_str::<Profile>(&raw) {
            rows.push(vec![format!("corrupt_{}", KEY_PROFILE), e.to_string()]);
        }
    }
    if let Some(raw) = conn.get(KEY_PREFERENCES)? {
        if let Err(e) = serde_json::from_str::<Preferences>(&raw) {
            rows.push(vec![format!("corrupt_{}", KEY_PREFERENCES), e.to_string()]);
        }
    }
    Ok(rows)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = find_issues(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
