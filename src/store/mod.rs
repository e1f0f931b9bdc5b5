// store/mod.rs

//! Single source of truth for the active theme.
//!
//! The [`ThemeStore`] owns the active theme identifier, restores it from the
//! settings file at startup, persists changes, projects the active theme
//! onto the global style surface and notifies subscribers. It is constructed
//! explicitly and handed to whatever needs it; there is no hidden global
//! instance.

pub mod subscribers;


use log::{error, info, warn};

use crate::settings::SettingsStore;
use crate::stylesheet::{StyleSheet, StyleVars};
use crate::theme::{registry, Theme, ThemeId};

use subscribers::Subscribers;
pub use subscribers::SubscriptionId;

/// Owner of the active-theme state and its change lifecycle.
///
/// There is exactly one writer path, [`ThemeStore::set_theme`], invoked from
/// the single-threaded event context; reads may interleave freely and never
/// observe a half-applied theme because a change runs to completion before
/// control returns to any reader.
pub struct ThemeStore {
    active: ThemeId,
    settings: SettingsStore,
    sheet: StyleSheet,
    subscribers: Subscribers,
}

impl ThemeStore {
    /// Create the store, restoring the persisted theme selection.
    ///
    /// The startup resolution runs exactly once, here: a persisted
    /// identifier is adopted when it names a known theme, anything else
    /// (no file, unknown identifier, unreadable file) degrades to the
    /// default without failing startup. The resolved theme is projected
    /// onto the style surface before the store is handed out, so no
    /// consumer can observe an unpropagated store.
    pub fn new(settings: SettingsStore) -> Self {
        let active = match settings.load_selected_theme() {
            Ok(Some(raw)) => match raw.parse::<ThemeId>() {
                Ok(id) => {
                    info!("Restored persisted theme selection {id}");
                    id
                }
                Err(e) => {
                    warn!("Persisted theme selection is invalid ({e}), using {}", ThemeId::default());
                    ThemeId::default()
                }
            },
            Ok(None) => ThemeId::default(),
            Err(e) => {
                warn!("Could not read the persisted theme selection: {e}. Using {}", ThemeId::default());
                ThemeId::default()
            }
        };
        let store = Self {
            active,
            settings,
            sheet: StyleSheet::new(),
            subscribers: Subscribers::default(),
        };
        store.sheet.apply(registry::lookup(store.active));
        store
    }

    /// Identifier of the active theme.
    pub fn active_id(&self) -> ThemeId {
        self.active
    }

    /// The active theme. Never fails: the registry is total.
    pub fn active_theme(&self) -> &'static Theme {
        registry::lookup(self.active)
    }

    /// All known themes, for building a theme-selection UI.
    pub fn themes(&self) -> impl Iterator<Item = &'static Theme> {
        registry::all_themes()
    }

    /// Read-only view of the global style surface.
    pub fn style_vars(&self) -> StyleVars {
        self.sheet.reader()
    }

    /// Switch the active theme.
    ///
    /// The in-memory state changes first; persistence is attempted after,
    /// and a failed write costs only durability, never the switch itself.
    /// The style surface is rewritten and subscribers run last, so they
    /// always observe the fully updated theme. Setting the already active
    /// theme repeats the side effects.
    pub fn set_theme(&mut self, id: ThemeId) {
        self.active = id;
        if let Err(e) = self.settings.save_selected_theme(id) {
            warn!("Could not persist theme selection {id}: {e}. The choice will not survive a restart.");
        }
        let theme = registry::lookup(id);
        self.sheet.apply(theme);
        self.subscribers.notify(theme);
        info!("Active theme is now {id}");
    }

    /// Request a theme switch using the identifier's string encoding.
    ///
    /// Fire and forget: a string that does not name a known theme is logged
    /// as an error and the active theme is left unchanged.
    pub fn change_theme(&mut self, raw: &str) {
        match raw.parse::<ThemeId>() {
            Ok(id) => self.set_theme(id),
            Err(e) => error!("Rejected theme change: {e}"),
        }
    }

    /// Register a callback invoked after every successful theme change.
    pub fn subscribe(&mut self, callback: impl FnMut(&Theme) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}
