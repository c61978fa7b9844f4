// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::Theme;
use crate::preferences::PreferencesStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let mut prefs = PreferencesStore::load(conn)?;
    match m.subcommand() {
        Some(("show", sub)) => {
            let p = prefs.get();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), p)? {
                println!(
                    "{}",
                    pretty_table(
                        &["Currency", "Theme"],
                        vec![vec![p.currency.clone(), p.theme.to_string()]],
                    )
                );
            }
        }
        Some(("currency", sub)) => {
            let symbol = sub.get_one::<String>("symbol").unwrap();
            prefs.set_currency(symbol)?;
            println!("Currency set to {}", prefs.currency());
        }
        Some(("theme", sub)) => {
            let theme: Theme = sub.get_one::<String>("theme").unwrap().parse()?;
            prefs.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        _ => {}
    }
    Ok(())
}
