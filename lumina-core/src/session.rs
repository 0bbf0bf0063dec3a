use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::catalog;
use crate::db::KeyValueStore;
use crate::error::{LuminaError, Result};
use crate::filter;
use crate::i18n::{self, Strings};
use crate::models::{Category, FitMode, Language, Settings, Wallpaper};
use crate::store::{merge_catalog, PreferencesStore};

/// Instruction for the presentation layer that accompanies a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    ScrollToTop,
}

/// The gallery state owned by one running session: settings, the combined
/// catalog, the current filter inputs and the wallpaper being previewed.
///
/// Every mutation of settings or of the local wallpapers is written through
/// to the store before the call returns. If that write fails the in-memory
/// state is left untouched.
pub struct Session {
    store: PreferencesStore,
    settings: Settings,
    catalog: Vec<Wallpaper>,
    category: Category,
    query: String,
    previewing: Option<Wallpaper>,
}

impl Session {
    pub fn open(kv: Box<dyn KeyValueStore>) -> Self {
        let mut store = PreferencesStore::new(kv);
        let settings = store.load_settings();
        if let Err(e) = store.save_settings(&settings) {
            warn!("failed to write settings: {e}");
        }

        let stored = store.load_local_wallpapers();
        let (catalog, duplicates) = merge_catalog(catalog::library(), stored);
        for wp in duplicates {
            match serde_json::to_value(&wp) {
                Ok(entry) => store.keep_unreadable(entry),
                Err(e) => warn!(id = %wp.id, "dropping duplicate local wallpaper: {e}"),
            }
        }

        info!(
            wallpapers = catalog.len(),
            language = %settings.language,
            active = settings.active_wallpaper_id.as_deref().unwrap_or("none"),
            "session opened"
        );

        Self {
            store,
            settings,
            catalog,
            category: Category::All,
            query: String::new(),
            previewing: None,
        }
    }

    // -- Read access --

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &[Wallpaper] {
        &self.catalog
    }

    pub fn total_items(&self) -> usize {
        self.catalog.len()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn strings(&self) -> &'static Strings {
        i18n::strings(self.settings.language)
    }

    pub fn get(&self, id: &str) -> Option<&Wallpaper> {
        self.catalog.iter().find(|wp| wp.id == id)
    }

    /// The catalog narrowed by the current category and query.
    pub fn filtered(&self) -> Vec<&Wallpaper> {
        filter::filter(&self.catalog, self.category, &self.query)
    }

    pub fn is_filtering(&self) -> bool {
        self.category != Category::All || !self.query.is_empty()
    }

    /// The hero banner is only shown on the unfiltered landing view.
    pub fn shows_hero(&self) -> bool {
        !self.is_filtering()
    }

    /// The applied wallpaper, or the first catalog entry when the stored id
    /// does not resolve.
    pub fn current_wallpaper(&self) -> Option<&Wallpaper> {
        resolve_current(&self.catalog, self.settings.active_wallpaper_id.as_deref())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.settings.active_wallpaper_id.as_deref() == Some(id)
    }

    // -- Filter inputs --

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Switch category. The search query is cleared along with it.
    pub fn select_category(&mut self, category: Category) -> ViewEffect {
        self.category = category;
        self.query.clear();
        ViewEffect::ScrollToTop
    }

    pub fn reset_filters(&mut self) {
        self.category = Category::All;
        self.query.clear();
    }

    // -- Settings --

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.update_settings(|s| s.language = language)
    }

    pub fn set_muted(&mut self, muted: bool) -> Result<()> {
        self.update_settings(|s| s.muted = muted)
    }

    pub fn toggle_muted(&mut self) -> Result<bool> {
        let muted = !self.settings.muted;
        self.set_muted(muted)?;
        Ok(muted)
    }

    pub fn set_fit_mode(&mut self, fit_mode: FitMode) -> Result<()> {
        self.update_settings(|s| s.fit_mode = fit_mode)
    }

    fn update_settings(&mut self, change: impl FnOnce(&mut Settings)) -> Result<()> {
        let mut next = self.settings.clone();
        change(&mut next);
        self.store.save_settings(&next)?;
        self.settings = next;
        Ok(())
    }

    // -- Preview state machine --

    pub fn previewing(&self) -> Option<&Wallpaper> {
        self.previewing.as_ref()
    }

    /// Open the preview for a catalog entry. Replaces any open preview.
    pub fn preview(&mut self, id: &str) -> Result<&Wallpaper> {
        let wp = self
            .get(id)
            .cloned()
            .ok_or_else(|| LuminaError::WallpaperNotFound(id.to_string()))?;
        Ok(&*self.previewing.insert(wp))
    }

    /// Make the previewed wallpaper the active one and close the preview.
    /// Returns `None` when nothing is being previewed.
    pub fn apply(&mut self) -> Result<Option<ViewEffect>> {
        let Some(id) = self.previewing.as_ref().map(|wp| wp.id.clone()) else {
            return Ok(None);
        };
        self.update_settings(|s| s.active_wallpaper_id = Some(id.clone()))?;
        self.previewing = None;
        info!(id = %id, "wallpaper applied");
        Ok(Some(ViewEffect::ScrollToTop))
    }

    /// Close the preview without applying. Returns whether one was open.
    pub fn cancel(&mut self) -> bool {
        self.previewing.take().is_some()
    }

    // -- Upload --

    /// Add a user video to the front of the catalog, persist the local
    /// wallpapers and open a preview of the new entry.
    pub fn upload(&mut self, path: &Path) -> Result<&Wallpaper> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let taken: HashSet<&str> = self.catalog.iter().map(|wp| wp.id.as_str()).collect();
        let wp = local_wallpaper(path, now_ms, &taken)?;
        drop(taken);

        self.catalog.insert(0, wp.clone());
        if let Err(e) = self.store.save_local_wallpapers(&self.catalog) {
            self.catalog.remove(0);
            return Err(e);
        }

        info!(id = %wp.id, title = %wp.title, "local wallpaper added");
        Ok(&*self.previewing.insert(wp))
    }
}

/// Entry whose id equals `active_id`, falling back to the first entry.
pub fn resolve_current<'a>(catalog: &'a [Wallpaper], active_id: Option<&str>) -> Option<&'a Wallpaper> {
    active_id
        .and_then(|id| catalog.iter().find(|wp| wp.id == id))
        .or_else(|| catalog.first())
}

/// Build the record for an uploaded file. The id is `local-{millis}`, moved
/// forward one millisecond at a time until it is not in `taken`.
fn local_wallpaper(path: &Path, now_ms: i64, taken: &HashSet<&str>) -> Result<Wallpaper> {
    if !path.is_file() {
        return Err(LuminaError::FileNotFound(path.to_path_buf()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| LuminaError::InvalidPath(path.to_path_buf()))?;

    let absolute = path.canonicalize()?;
    let url = url::Url::from_file_path(&absolute)
        .map_err(|_| LuminaError::InvalidPath(absolute.clone()))?;

    let mut stamp = now_ms;
    let id = loop {
        let candidate = format!("local-{stamp}");
        if !taken.contains(candidate.as_str()) {
            break candidate;
        }
        stamp += 1;
    };

    let title = file_name.split('.').next().unwrap_or_default().to_string();
    let seed = rand::random::<f64>().to_string();

    Ok(Wallpaper {
        id,
        url: url.to_string(),
        thumbnail: catalog::thumbnail_url(&seed),
        title,
        tags: vec!["local".into(), "custom".into(), file_name.to_lowercase()],
        is_local: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, MemoryStore};
    use crate::store::{SETTINGS_KEY, WALLPAPERS_KEY};

    /// Store that accepts reads but rejects every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(LuminaError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("read-only store: {key}"),
            )))
        }
    }

    fn memory_session() -> Session {
        Session::open(Box::new(MemoryStore::new()))
    }

    fn video_file(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"\x00\x00\x00\x18ftypmp42").unwrap();
        path
    }

    fn stored_local_ids(db_path: &Path) -> Vec<String> {
        let db = Database::open(db_path).unwrap();
        let raw = db.get(WALLPAPERS_KEY).unwrap().unwrap();
        let stored: Vec<Wallpaper> = serde_json::from_str(&raw).unwrap();
        stored.into_iter().map(|wp| wp.id).collect()
    }

    #[test]
    fn test_open_defaults() {
        let session = memory_session();
        assert_eq!(session.settings(), &Settings::default());
        assert_eq!(session.total_items(), 6000);
        assert_eq!(session.category(), Category::All);
        assert!(session.previewing().is_none());
        assert!(session.shows_hero());
        assert_eq!(session.current_wallpaper().unwrap().id, "nature-1");
    }

    #[test]
    fn test_open_merges_stored_locals_after_generated() {
        let mut kv = MemoryStore::new();
        kv.set(
            WALLPAPERS_KEY,
            r#"[{"id":"local-5","url":"blob:5","thumbnail":"","title":"b","isLocal":true},
                {"id":"local-3","url":"blob:3","thumbnail":"","title":"a","isLocal":true}]"#,
        )
        .unwrap();
        let session = Session::open(Box::new(kv));

        assert_eq!(session.total_items(), 6002);
        assert_eq!(session.catalog()[6000].id, "local-5");
        assert_eq!(session.catalog()[6001].id, "local-3");
        assert!(session.catalog()[6001].tags.is_empty());
    }

    #[test]
    fn test_stale_active_id_falls_back_to_first() {
        let mut kv = MemoryStore::new();
        kv.set(SETTINGS_KEY, r#"{"activeWallpaperId":"local-404"}"#).unwrap();
        let session = Session::open(Box::new(kv));
        assert_eq!(session.current_wallpaper().unwrap().id, "cars-1");

        assert_eq!(resolve_current(&[], Some("x")), None);
        let lib = catalog::generate();
        assert_eq!(resolve_current(&lib, None).unwrap().id, "cars-1");
        assert_eq!(resolve_current(&lib, Some("sea-7")).unwrap().id, "sea-7");
    }

    #[test]
    fn test_apply_flow() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("lumina.db");
        let mut session = Session::open(Box::new(Database::open(&db_path).unwrap()));

        session.preview("sea-3").unwrap();
        assert_eq!(session.previewing().unwrap().id, "sea-3");

        let effect = session.apply().unwrap();
        assert_eq!(effect, Some(ViewEffect::ScrollToTop));
        assert!(session.previewing().is_none());
        assert_eq!(session.settings().active_wallpaper_id.as_deref(), Some("sea-3"));
        assert_eq!(session.current_wallpaper().unwrap().id, "sea-3");
        assert!(session.is_active("sea-3"));

        // persisted
        let reopened = Session::open(Box::new(Database::open(&db_path).unwrap()));
        assert_eq!(reopened.current_wallpaper().unwrap().id, "sea-3");
    }

    #[test]
    fn test_cancel_leaves_active_unchanged() {
        let mut session = memory_session();
        session.preview("cars-10").unwrap();
        assert!(session.cancel());
        assert!(session.previewing().is_none());
        assert_eq!(session.settings().active_wallpaper_id.as_deref(), Some("nature-1"));
        assert!(!session.cancel());
    }

    #[test]
    fn test_apply_without_preview_is_noop() {
        let mut session = memory_session();
        assert_eq!(session.apply().unwrap(), None);
        assert_eq!(session.settings(), &Settings::default());
    }

    #[test]
    fn test_preview_unknown_id() {
        let mut session = memory_session();
        let err = session.preview("sea-0").unwrap_err();
        assert!(matches!(err, LuminaError::WallpaperNotFound(_)));
        assert!(session.previewing().is_none());
    }

    #[test]
    fn test_settings_persist_on_every_change() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("lumina.db");
        {
            let mut session = Session::open(Box::new(Database::open(&db_path).unwrap()));
            session.set_language(Language::Pt).unwrap();
            assert!(!session.toggle_muted().unwrap());
            session.set_fit_mode(FitMode::Contain).unwrap();
            assert_eq!(session.strings().fill, "Preencher");
        }

        let session = Session::open(Box::new(Database::open(&db_path).unwrap()));
        assert_eq!(session.settings().language, Language::Pt);
        assert!(!session.settings().muted);
        assert_eq!(session.settings().fit_mode, FitMode::Contain);
        assert_eq!(session.settings().active_wallpaper_id.as_deref(), Some("nature-1"));
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let mut session = Session::open(Box::new(ReadOnlyStore));
        session.preview("sea-3").unwrap();

        assert!(session.set_language(Language::Es).is_err());
        assert_eq!(session.settings().language, Language::En);

        assert!(session.apply().is_err());
        assert_eq!(session.previewing().unwrap().id, "sea-3");
        assert_eq!(session.settings().active_wallpaper_id.as_deref(), Some("nature-1"));

        let tmp = tempfile::tempdir().unwrap();
        let path = video_file(&tmp, "clip.mp4");
        assert!(session.upload(&path).is_err());
        assert_eq!(session.total_items(), 6000);
    }

    #[test]
    fn test_filter_inputs() {
        let mut session = memory_session();
        session.set_query("exclusive");
        assert_eq!(session.filtered().len(), 600);
        assert!(!session.shows_hero());

        // switching category clears the query
        assert_eq!(session.select_category(Category::Sea), ViewEffect::ScrollToTop);
        assert_eq!(session.query(), "");
        assert_eq!(session.filtered().len(), 1000);

        session.set_query("no such wallpaper");
        assert!(session.filtered().is_empty());

        session.reset_filters();
        assert_eq!(session.category(), Category::All);
        assert_eq!(session.filtered().len(), 6000);
        assert!(session.shows_hero());
    }

    #[test]
    fn test_upload_flow() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("lumina.db");
        let mut kv = Database::open(&db_path).unwrap();
        kv.set(
            WALLPAPERS_KEY,
            r#"[{"id":"local-1","url":"blob:1","thumbnail":"","title":"old","tags":["local"],"isLocal":true}]"#,
        )
        .unwrap();
        let mut session = Session::open(Box::new(kv));

        let path = video_file(&tmp, "Sunset.Beach.MP4");
        let wp = session.upload(&path).unwrap().clone();

        assert!(wp.is_local);
        assert!(wp.id.starts_with("local-"));
        assert_eq!(wp.title, "Sunset");
        assert_eq!(wp.tags, vec!["local", "custom", "sunset.beach.mp4"]);
        assert!(wp.url.starts_with("file://"));
        assert!(wp.thumbnail.starts_with("https://picsum.photos/seed/"));

        // opens a preview, does not apply
        assert_eq!(session.previewing().unwrap().id, wp.id);
        assert_eq!(session.settings().active_wallpaper_id.as_deref(), Some("nature-1"));

        // prepended
        assert_eq!(session.catalog()[0].id, wp.id);
        assert_eq!(session.total_items(), 6002);

        assert_eq!(stored_local_ids(&db_path), vec![wp.id.clone(), "local-1".to_string()]);
        assert_eq!(session.filtered().len(), 6002);
    }

    #[test]
    fn test_upload_keeps_unreadable_stored_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("lumina.db");
        let mut kv = Database::open(&db_path).unwrap();
        kv.set(
            WALLPAPERS_KEY,
            r#"[{"id":"local-1","url":"blob:1","title":"t","tags":null,"isLocal":true},
                {"id":"local-0"},
                {"id":"sea-2","url":"blob:2","title":"dup","isLocal":true}]"#,
        )
        .unwrap();
        let mut session = Session::open(Box::new(kv));
        assert_eq!(session.total_items(), 6001);
        assert!(session.get("local-1").unwrap().tags.is_empty());

        let path = video_file(&tmp, "x.mp4");
        let id = session.upload(&path).unwrap().id.clone();

        let db = Database::open(&db_path).unwrap();
        let stored: Vec<serde_json::Value> =
            serde_json::from_str(&db.get(WALLPAPERS_KEY).unwrap().unwrap()).unwrap();
        let ids: Vec<&str> = stored.iter().filter_map(|e| e["id"].as_str()).collect();
        assert_eq!(ids, vec![id.as_str(), "local-1", "local-0", "sea-2"]);
        assert_eq!(stored[2], serde_json::json!({"id": "local-0"}));
        assert_eq!(stored[3]["title"], "dup");
    }

    #[test]
    fn test_open_rewrites_corrupt_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("lumina.db");
        let mut kv = Database::open(&db_path).unwrap();
        kv.set(SETTINGS_KEY, "{not json").unwrap();

        let session = Session::open(Box::new(kv));
        assert_eq!(session.settings(), &Settings::default());

        let db = Database::open(&db_path).unwrap();
        let raw = db.get(SETTINGS_KEY).unwrap().unwrap();
        let stored: Settings = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, Settings::default());
    }

    #[test]
    fn test_upload_then_apply() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = memory_session();
        let path = video_file(&tmp, "loop.webm");
        let id = session.upload(&path).unwrap().id.clone();

        session.apply().unwrap();
        assert_eq!(session.current_wallpaper().unwrap().id, id);
        assert_eq!(session.strings().app_name, "Lumina");
    }

    #[test]
    fn test_upload_ids_unique() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = memory_session();
        let path = video_file(&tmp, "a.mp4");

        let mut ids = HashSet::new();
        for _ in 0..5 {
            let id = session.upload(&path).unwrap().id.clone();
            assert!(ids.insert(id));
        }
        assert_eq!(session.total_items(), 6005);
    }

    #[test]
    fn test_upload_missing_file() {
        let mut session = memory_session();
        let err = session.upload(Path::new("/definitely/not/here.mp4")).unwrap_err();
        assert!(matches!(err, LuminaError::FileNotFound(_)));
        assert_eq!(session.total_items(), 6000);
    }

    #[test]
    fn test_local_wallpaper_id_bump() {
        let tmp = tempfile::tempdir().unwrap();
        let path = video_file(&tmp, "x.mp4");
        let taken: HashSet<&str> = ["local-100", "local-101"].into_iter().collect();
        let wp = local_wallpaper(&path, 100, &taken).unwrap();
        assert_eq!(wp.id, "local-102");
    }
}
