use std::collections::HashSet;

use tracing::{debug, warn};

use crate::db::KeyValueStore;
use crate::error::Result;
use crate::models::{Settings, Wallpaper};

pub const SETTINGS_KEY: &str = "lumina_settings";
pub const WALLPAPERS_KEY: &str = "lumina_wallpapers";

/// The two persisted slots: settings and user-added wallpapers.
///
/// Reads fail open: a missing or unreadable slot yields defaults. Writes
/// overwrite the whole slot, so stored wallpaper entries that could not be
/// read are held in `unreadable` and written back after the locals.
pub struct PreferencesStore {
    kv: Box<dyn KeyValueStore>,
    unreadable: Vec<serde_json::Value>,
}

impl PreferencesStore {
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            unreadable: Vec::new(),
        }
    }

    pub fn load_settings(&self) -> Settings {
        let raw = match self.kv.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Settings::default(),
            Err(e) => {
                warn!("failed to read settings, using defaults: {e}");
                return Settings::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("stored settings are corrupt, using defaults: {e}");
            Settings::default()
        })
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.kv.set(SETTINGS_KEY, &json)?;
        debug!(language = %settings.language, muted = settings.muted, fit = %settings.fit_mode, "settings saved");
        Ok(())
    }

    /// Stored local wallpapers in stored order. Missing or null tags become
    /// an empty list. Entries lacking `id`, `url` or `title` are left out of
    /// the result and kept aside verbatim for the next save.
    pub fn load_local_wallpapers(&mut self) -> Vec<Wallpaper> {
        self.unreadable.clear();
        let raw = match self.kv.get(WALLPAPERS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read local wallpapers: {e}");
                return Vec::new();
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("stored local wallpapers are corrupt, ignoring: {e}");
                return Vec::new();
            }
        };

        let mut wallpapers = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Wallpaper>(entry.clone()) {
                Ok(wp) => wallpapers.push(wp),
                Err(e) => {
                    warn!(index = idx, "keeping unreadable local wallpaper aside: {e}");
                    self.unreadable.push(entry);
                }
            }
        }
        wallpapers
    }

    /// Hold `entry` aside so every later save writes it back untouched.
    pub fn keep_unreadable(&mut self, entry: serde_json::Value) {
        self.unreadable.push(entry);
    }

    /// Persist every `is_local` entry of `catalog`, in catalog order,
    /// followed by the entries kept aside. Returns the number of locals.
    pub fn save_local_wallpapers(&mut self, catalog: &[Wallpaper]) -> Result<usize> {
        let mut entries = Vec::with_capacity(self.unreadable.len() + 1);
        for wp in catalog.iter().filter(|wp| wp.is_local) {
            entries.push(serde_json::to_value(wp)?);
        }
        let count = entries.len();
        entries.extend(self.unreadable.iter().cloned());

        let json = serde_json::to_string(&entries)?;
        self.kv.set(WALLPAPERS_KEY, &json)?;
        debug!(count, kept = self.unreadable.len(), "local wallpapers saved");
        Ok(count)
    }
}

/// Append `stored` to `generated`. Stored entries whose id is already taken
/// are returned separately so they can be kept in storage.
pub fn merge_catalog(
    generated: &[Wallpaper],
    stored: Vec<Wallpaper>,
) -> (Vec<Wallpaper>, Vec<Wallpaper>) {
    let mut catalog = Vec::with_capacity(generated.len() + stored.len());
    catalog.extend_from_slice(generated);

    let mut seen: HashSet<String> = generated.iter().map(|wp| wp.id.clone()).collect();
    let mut duplicates = Vec::new();
    for wp in stored {
        if seen.insert(wp.id.clone()) {
            catalog.push(wp);
        } else {
            warn!(id = %wp.id, "skipping stored wallpaper with duplicate id");
            duplicates.push(wp);
        }
    }
    (catalog, duplicates)
}
