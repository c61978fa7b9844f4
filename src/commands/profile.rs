// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::aggregate::{ProfileStats, profile_stats};
use crate::ledger::LedgerStore;
use crate::models::Profile;
use crate::preferences::{PreferencesStore, ProfileStore};
use crate::utils::{fmt_money, format_datetime, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(conn, sub)?,
        Some(("save", sub)) => save(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ProfileView {
    pub profile: Profile,
    pub avatar: char,
    pub stats: ProfileStats,
}

pub fn profile_view(conn: &Connection) -> Result<ProfileView> {
    let store = ProfileStore::load_or_create(conn, chrono::Local::now().naive_local())?;
    let ledger = LedgerStore::load(conn)?;
    Ok(ProfileView {
        profile: store.get().clone(),
        avatar: store.avatar_initial(),
        stats: profile_stats(ledger.all()),
    })
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let view = profile_view(conn)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        return Ok(());
    }
    let prefs = PreferencesStore::load(conn)?;
    let ccy = prefs.currency();
    let p = &view.profile;
    let s = &view.stats;
    println!(
        "{}",
        pretty_table(
            &["Field", "Value"],
            vec![
                vec!["Avatar".into(), view.avatar.to_string()],
                vec!["Name".into(), p.name.clone()],
                vec!["Email".into(), p.email.clone()],
                vec!["Joined".into(), format_datetime(&p.joined)],
                vec!["Total income".into(), fmt_money(&s.income, ccy)],
                vec!["Total expense".into(), fmt_money(&s.expense, ccy)],
                vec!["Transactions".into(), s.count.to_string()],
                vec!["Highest expense".into(), fmt_money(&s.highest_expense, ccy)],
            ],
        )
    );
    Ok(())
}

fn save(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let email = sub.get_one::<String>("email").unwrap();
    let mut store = ProfileStore::load_or_create(conn, chrono::Local::now().naive_local())?;
    store.save(name, email)?;
    println!("Profile saved for {}", store.get().name);
    Ok(())
}
