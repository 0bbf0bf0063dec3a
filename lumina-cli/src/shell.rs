use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use lumina_core::config::GalleryConfig;
use lumina_core::filter::paginate;
use lumina_core::models::{Category, FitMode, Language};
use lumina_core::session::{Session, ViewEffect};

use crate::render;

#[derive(Debug, Clone, PartialEq)]
enum ShellCommand {
    Search(String),
    Category(Category),
    Reset,
    Page(usize),
    Next,
    Prev,
    Open(String),
    Apply,
    Cancel,
    Upload(PathBuf),
    Language(Language),
    ToggleMute,
    Fit(FitMode),
    Status,
    Categories,
    Help,
    Quit,
}

impl std::str::FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word {
            "search" | "/" => Ok(Self::Search(rest.to_string())),
            "category" | "cat" => rest.parse().map(Self::Category),
            "reset" => Ok(Self::Reset),
            "page" => rest
                .parse()
                .map(Self::Page)
                .map_err(|_| format!("invalid page: {rest}")),
            "next" | "n" => Ok(Self::Next),
            "prev" | "p" => Ok(Self::Prev),
            "open" | "o" if !rest.is_empty() => Ok(Self::Open(rest.to_string())),
            "apply" | "a" => Ok(Self::Apply),
            "cancel" | "c" | "close" => Ok(Self::Cancel),
            "upload" if !rest.is_empty() => Ok(Self::Upload(PathBuf::from(rest))),
            "lang" | "language" => rest.parse().map(Self::Language),
            "mute" => Ok(Self::ToggleMute),
            "fit" => rest.parse().map(Self::Fit),
            "status" => Ok(Self::Status),
            "categories" => Ok(Self::Categories),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "open" | "o" | "upload" => Err(format!("{word}: missing argument")),
            other => Err(format!("unknown command: {other} (try help)")),
        }
    }
}

const HELP: &str = "\
commands:
  search <text>      filter by title or tag (empty clears)
  category <name>    all, cars, nature, sea, cities, cute, animals
  reset              show all wallpapers
  page <n> | next | prev
  open <id>          preview a wallpaper
  apply | cancel     leave the preview
  upload <path>      add a local video and preview it
  lang <en|pt|es>    mute    fit <cover|contain|fill>
  status | categories | help | quit";

/// Read commands from `input` until EOF or `quit`.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    gallery: &GalleryConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut page = 1;
    render::status(out, session)?;
    page = render::gallery(out, session, gallery, page)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command: ShellCommand = match line.parse() {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        // the preview is modal
        if session.previewing().is_some()
            && !matches!(
                command,
                ShellCommand::Apply | ShellCommand::Cancel | ShellCommand::Help | ShellCommand::Quit
            )
        {
            writeln!(out, "preview open: apply or cancel first")?;
            continue;
        }

        match command {
            ShellCommand::Search(text) => {
                session.set_query(text);
                page = render::gallery(out, session, gallery, 1)?;
            }
            ShellCommand::Category(category) => {
                session.select_category(category);
                page = render::gallery(out, session, gallery, 1)?;
            }
            ShellCommand::Reset => {
                session.reset_filters();
                page = render::gallery(out, session, gallery, 1)?;
            }
            ShellCommand::Page(n) => page = render::gallery(out, session, gallery, n)?,
            ShellCommand::Next => {
                if paginate(&session.filtered(), page, gallery.page_size()).has_next() {
                    page = render::gallery(out, session, gallery, page + 1)?;
                } else {
                    writeln!(out, "no next page")?;
                }
            }
            ShellCommand::Prev => {
                if paginate(&session.filtered(), page, gallery.page_size()).has_prev() {
                    page = render::gallery(out, session, gallery, page - 1)?;
                } else {
                    writeln!(out, "no previous page")?;
                }
            }
            ShellCommand::Open(id) => match session.preview(&id) {
                Ok(wp) => {
                    let wp = wp.clone();
                    render::preview(out, session, &wp)?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ShellCommand::Apply => match session.apply() {
                Ok(Some(ViewEffect::ScrollToTop)) => {
                    page = 1;
                    render::status(out, session)?;
                }
                Ok(None) => writeln!(out, "nothing to apply")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ShellCommand::Cancel => {
                if session.cancel() {
                    page = render::gallery(out, session, gallery, page)?;
                }
            }
            ShellCommand::Upload(path) => match session.upload(&path) {
                Ok(wp) => {
                    let wp = wp.clone();
                    render::preview(out, session, &wp)?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ShellCommand::Language(language) => {
                report(out, session.set_language(language))?;
                render::settings(out, session)?;
            }
            ShellCommand::ToggleMute => {
                report(out, session.toggle_muted().map(|_| ()))?;
                render::settings(out, session)?;
            }
            ShellCommand::Fit(mode) => {
                report(out, session.set_fit_mode(mode))?;
                render::settings(out, session)?;
            }
            ShellCommand::Status => render::status(out, session)?,
            ShellCommand::Categories => render::categories(out, session)?,
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}

fn report<W: Write>(out: &mut W, result: lumina_core::error::Result<()>) -> std::io::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) => writeln!(out, "error: {e}"),
    }
}
