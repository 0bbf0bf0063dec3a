use std::io::{self, Write};

use lumina_core::config::GalleryConfig;
use lumina_core::filter::paginate;
use lumina_core::models::{Category, FitMode, Language, Wallpaper};
use lumina_core::session::Session;

pub fn status<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let t = session.strings();
    writeln!(out, "{} ({} {})", t.app_name, session.total_items(), t.total_items)?;
    if session.shows_hero() {
        writeln!(out, "{}", t.hero_title)?;
        writeln!(out, "{}", t.hero_subtitle)?;
    }
    match session.current_wallpaper() {
        Some(wp) => writeln!(out, "active: {} ({})", wp.title, wp.id)?,
        None => writeln!(out, "active: none")?,
    }
    settings(out, session)
}

pub fn settings<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let t = session.strings();
    let s = session.settings();
    writeln!(out, "{}", t.settings)?;
    writeln!(out, "  {}: {}", t.audio, if s.muted { "Off" } else { "On" })?;
    writeln!(
        out,
        "  {}: {}  [{}]",
        t.fit_mode,
        t.fit_mode_label(s.fit_mode),
        choices(FitMode::ALL.iter().map(FitMode::to_string))
    )?;
    writeln!(
        out,
        "  {}: {}  [{}]",
        t.language,
        s.language,
        choices(Language::ALL.iter().map(|l| l.code().to_string()))
    )
}

fn choices(options: impl Iterator<Item = String>) -> String {
    options.collect::<Vec<_>>().join("|")
}

pub fn categories<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let t = session.strings();
    for &category in Category::ALL {
        let count = lumina_core::filter::filter(session.catalog(), category, "").len();
        let label = match category {
            Category::All => t.all_categories.to_string(),
            other => other.label(),
        };
        let marker = if session.category() == category { ">" } else { " " };
        writeln!(
            out,
            "{marker} {} {label:<10} {count:>6}  ({})",
            category.icon(),
            category.as_str()
        )?;
    }
    Ok(())
}

/// One page of the filtered gallery.
pub fn gallery<W: Write>(
    out: &mut W,
    session: &Session,
    gallery: &GalleryConfig,
    page: usize,
) -> io::Result<usize> {
    let t = session.strings();
    let filtered = session.filtered();
    writeln!(out, "{} ({})", t.my_wallpapers, filtered.len())?;

    if filtered.is_empty() {
        writeln!(out, "{}", t.no_results)?;
        writeln!(out, "(reset to show all wallpapers)")?;
        return Ok(1);
    }

    let page = paginate(&filtered, page, gallery.page_size());
    for wp in page.items {
        let marker = if session.is_active(&wp.id) { "*" } else { " " };
        let tags: Vec<String> = wp
            .tags
            .iter()
            .take(gallery.tags_shown)
            .map(|tag| format!("#{tag}"))
            .collect();
        writeln!(out, "{marker} {:<18} {:<24} {}", wp.id, wp.title, tags.join(" "))?;
    }
    writeln!(out, "page {}/{}", page.number, page.total_pages)?;
    Ok(page.number)
}

pub fn preview<W: Write>(out: &mut W, session: &Session, wp: &Wallpaper) -> io::Result<()> {
    let t = session.strings();
    let s = session.settings();
    writeln!(out, "{} - {}", t.preview, wp.title)?;
    writeln!(out, "  id:    {}", wp.id)?;
    writeln!(out, "  video: {}", wp.url)?;
    writeln!(out, "  thumb: {}", wp.thumbnail)?;
    if !wp.tags.is_empty() {
        writeln!(out, "  tags:  {}", wp.tags.join(", "))?;
    }
    writeln!(
        out,
        "  {}: {}, {}: {}",
        t.fit_mode,
        t.fit_mode_label(s.fit_mode),
        t.audio,
        if s.muted { "Off" } else { "On" }
    )?;
    if session.is_active(&wp.id) {
        writeln!(out, "  (active)")?;
    }
    Ok(())
}
