// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display preferences and the user profile, each persisted under its own key.

use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, info};

use crate::db::{KEY_PREFERENCES, KEY_PROFILE, KeyValueStore, load_json, save_json};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Preferences, Profile, Theme};

pub struct PreferencesStore<'a> {
    store: &'a dyn KeyValueStore,
    prefs: Preferences,
}

impl<'a> PreferencesStore<'a> {
    pub fn load(store: &'a dyn KeyValueStore) -> LedgerResult<Self> {
        let prefs: Preferences = load_json(store, KEY_PREFERENCES)?.unwrap_or_default();
        Ok(Self { store, prefs })
    }

    pub fn get(&self) -> &Preferences {
        &self.prefs
    }

    pub fn currency(&self) -> &str {
        &self.prefs.currency
    }

    pub fn set_currency(&mut self, symbol: &str) -> LedgerResult<()> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(LedgerError::EmptyField("Currency"));
        }
        self.prefs.currency = symbol.to_string();
        self.persist()?;
        info!(currency = symbol, "currency updated");
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> LedgerResult<()> {
        self.prefs.theme = theme;
        self.persist()?;
        info!(%theme, "theme updated");
        Ok(())
    }

    fn persist(&self) -> LedgerResult<()> {
        save_json(self.store, KEY_PREFERENCES, &self.prefs)
    }
}

pub struct ProfileStore<'a> {
    store: &'a dyn KeyValueStore,
    profile: Profile,
}

impl<'a> ProfileStore<'a> {
    /// Loads the profile, creating and persisting a blank one on first use.
    pub fn load_or_create(store: &'a dyn KeyValueStore, now: NaiveDateTime) -> LedgerResult<Self> {
        let profile = match load_json::<Profile>(store, KEY_PROFILE)? {
            Some(p) => p,
            None => {
                let p = Profile {
                    name: String::new(),
                    email: String::new(),
                    joined: now
                        .with_second(0)
                        .and_then(|t| t.with_nanosecond(0))
                        .unwrap_or(now),
                };
                save_json(store, KEY_PROFILE, &p)?;
                debug!("blank profile created");
                p
            }
        };
        Ok(Self { store, profile })
    }

    pub fn get(&self) -> &Profile {
        &self.profile
    }

    pub fn save(&mut self, name: &str, email: &str) -> LedgerResult<()> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyField("Name"));
        }
        if email.is_empty() {
            return Err(LedgerError::EmptyField("Email"));
        }
        self.profile.name = name.to_string();
        self.profile.email = email.to_string();
        save_json(self.store, KEY_PROFILE, &self.profile)?;
        info!("profile saved");
        Ok(())
    }

    pub fn avatar_initial(&self) -> char {
        self.profile
            .name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}
