// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Insertion-ordered transaction ledger with write-through persistence.

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::db::{KEY_TRANSACTIONS, KeyValueStore, load_json, save_json};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{DEFAULT_CATEGORY, TransactionRecord, TxKind};

/// Input for [`LedgerStore::add`].
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub title: String,
    pub amount: Decimal,
    pub kind: TxKind,
    pub category: Option<String>,
}

pub struct LedgerStore<'a> {
    store: &'a dyn KeyValueStore,
    records: Vec<TransactionRecord>,
    last_id: i64,
}

impl<'a> LedgerStore<'a> {
    /// Loads the persisted ledger. Missing or corrupt data yields an empty
    /// ledger.
    pub fn load(store: &'a dyn KeyValueStore) -> LedgerResult<Self> {
        let records: Vec<TransactionRecord> =
            load_json(store, KEY_TRANSACTIONS)?.unwrap_or_default();
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        debug!(count = records.len(), "ledger loaded");
        Ok(Self {
            store,
            records,
            last_id,
        })
    }

    pub fn add(&mut self, tx: NewTransaction, now: NaiveDateTime) -> LedgerResult<TransactionRecord> {
        let title = tx.title.trim();
        if title.is_empty() {
            return Err(LedgerError::EmptyField("Title"));
        }
        if tx.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(tx.amount));
        }
        // Every per-type total must stay representable, so aggregation over
        // the stored ledger cannot overflow.
        let same_kind_total = self
            .records
            .iter()
            .filter(|r| r.kind == tx.kind)
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.amount));
        if same_kind_total
            .and_then(|t| t.checked_add(tx.amount))
            .is_none()
        {
            return Err(LedgerError::TotalOverflow(tx.amount));
        }
        let category = tx
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();

        let id = self.next_id(now);
        // Stored dates carry minute precision only.
        let date = now
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        let record = TransactionRecord {
            id,
            title: title.to_string(),
            amount: tx.amount,
            kind: tx.kind,
            category,
            date,
        };
        self.records.push(record.clone());
        self.persist()?;
        info!(id, kind = %record.kind, amount = %record.amount, "transaction added");
        Ok(record)
    }

    /// Removes the record with `id`. Unknown ids are not an error.
    pub fn remove(&mut self, id: i64) -> LedgerResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        self.persist()?;
        if removed {
            info!(id, "transaction removed");
        }
        Ok(removed)
    }

    pub fn clear(&mut self, confirmed: bool) -> LedgerResult<()> {
        if !confirmed {
            return Err(LedgerError::Unconfirmed);
        }
        if self.records.is_empty() {
            return Ok(());
        }
        let n = self.records.len();
        self.records.clear();
        self.persist()?;
        info!(removed = n, "ledger cleared");
        Ok(())
    }

    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&TransactionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&mut self, now: NaiveDateTime) -> i64 {
        let ts = now.and_utc().timestamp_millis();
        let id = if ts > self.last_id { ts } else { self.last_id + 1 };
        self.last_id = id;
        id
    }

    fn persist(&self) -> LedgerResult<()> {
        save_json(self.store, KEY_TRANSACTIONS, &self.records)?;
        debug!(count = self.records.len(), "ledger persisted");
        Ok(())
    }
}
