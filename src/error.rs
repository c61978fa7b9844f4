// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the ledger core.
///
/// The first six variants are user-facing validation failures: they are
/// raised before any mutation happens, so the stored state is unchanged.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{0} is required")]
    EmptyField(&'static str),

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),

    #[error("Amount {0} would push the running total past the largest storable value")]
    TotalOverflow(Decimal),

    #[error("Clearing all transactions requires confirmation")]
    Unconfirmed,

    #[error("Invalid {kind} '{value}', expected one of: {expected}")]
    InvalidChoice {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LedgerError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::EmptyField(_)
                | LedgerError::InvalidAmount(_)
                | LedgerError::NonPositiveAmount(_)
                | LedgerError::TotalOverflow(_)
                | LedgerError::Unconfirmed
                | LedgerError::InvalidChoice { .. }
        )
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
