// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDateTime;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::TxKind;

/// Fixed-width, zero-padded `DD/MM/YYYY HH:mm`.
pub const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
}

/// Serde adapter storing a `NaiveDateTime` in display format.
pub mod display_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_datetime(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_datetime(&raw)
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}

pub fn parse_amount(s: &str) -> LedgerResult<Decimal> {
    let d = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(s.to_string()))?;
    if d <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(d));
    }
    Ok(d)
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, d.round_dp(2).normalize())
}

pub fn fmt_signed(kind: TxKind, d: &Decimal, symbol: &str) -> String {
    format!("{}{}", kind.sign(), fmt_money(d, symbol))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn datetime_is_zero_padded() {
        let dt = NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(7, 5, 59)
            .unwrap();
        assert_eq!(format_datetime(&dt), "04/03/2025 07:05");
        let back = parse_datetime("04/03/2025 07:05").unwrap();
        assert_eq!(back, dt.with_second(0).unwrap());
    }

    #[test]
    fn amount_must_be_positive_number() {
        assert_eq!(parse_amount(" 12.50 ").unwrap(), Decimal::new(1250, 2));
        assert!(matches!(
            parse_amount("0"),
            Err(LedgerError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            parse_amount("-3"),
            Err(LedgerError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            parse_amount("abc"),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn money_drops_trailing_zeros() {
        assert_eq!(fmt_money(&Decimal::new(500000, 2), "₹"), "₹5000");
        assert_eq!(
            fmt_signed(TxKind::Expense, &Decimal::new(125, 1), "$"),
            "-$12.5"
        );
    }
}
