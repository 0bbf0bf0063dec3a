mod render;
mod shell;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use lumina_core::config::Config;
use lumina_core::db::{Database, KeyValueStore, MemoryStore};
use lumina_core::models::{Category, FitMode, Language};
use lumina_core::paths::LuminaPaths;
use lumina_core::session::Session;

#[derive(Parser)]
#[command(name = "lumina", about = "Live video wallpaper gallery")]
struct Cli {
    /// Keep all state in memory; nothing is read from or written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active wallpaper and settings
    Status,
    /// List wallpapers
    List {
        /// Category: all, cars, nature, sea, cities, cute, animals
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Free-text search over titles and tags
        #[arg(short, long, default_value = "")]
        search: String,
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Print the matching entries as JSON instead of a page
        #[arg(long)]
        json: bool,
    },
    /// List categories with their wallpaper counts
    Categories,
    /// Show a single wallpaper
    Show {
        id: String,
    },
    /// Set a wallpaper as the active one
    Apply {
        id: String,
    },
    /// Add a local video to the gallery
    Upload {
        path: PathBuf,
        /// Apply it right away instead of only previewing it
        #[arg(long)]
        apply: bool,
    },
    /// Manage settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Interactive gallery shell
    Browse,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print current settings
    Show,
    /// Set interface language: en, pt, es
    Language { language: String },
    /// Mute preview audio
    Mute,
    /// Unmute preview audio
    Unmute,
    /// Set preview fit mode: cover, contain, fill
    Fit { mode: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumina=info,lumina_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = LuminaPaths::new()?;
    let config = Config::load_or_default(&paths);

    let kv: Box<dyn KeyValueStore> = if cli.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        paths.ensure_dirs()?;
        let db_path = config.db_path(&paths);
        info!(db = %db_path.display(), "opening store");
        Box::new(Database::open(&db_path)?)
    };
    let mut session = Session::open(kv);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Status => render::status(&mut out, &session)?,
        Commands::List {
            category,
            search,
            page,
            json,
        } => {
            let category: Category = category.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            session.select_category(category);
            session.set_query(search);
            if json {
                let filtered = session.filtered();
                writeln!(out, "{}", serde_json::to_string_pretty(&filtered)?)?;
            } else {
                render::gallery(&mut out, &session, &config.gallery, page)?;
            }
        }
        Commands::Categories => render::categories(&mut out, &session)?,
        Commands::Show { id } => {
            let wp = session.preview(&id)?.clone();
            session.cancel();
            render::preview(&mut out, &session, &wp)?;
        }
        Commands::Apply { id } => {
            session.preview(&id)?;
            session.apply()?;
            render::status(&mut out, &session)?;
        }
        Commands::Upload { path, apply } => {
            let wp = session.upload(&path)?.clone();
            render::preview(&mut out, &session, &wp)?;
            if apply {
                session.apply()?;
                writeln!(out, "applied {}", wp.id)?;
            } else {
                session.cancel();
            }
        }
        Commands::Settings { action } => {
            match action {
                SettingsAction::Show => {}
                SettingsAction::Language { language } => {
                    let language: Language =
                        language.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                    session.set_language(language)?;
                }
                SettingsAction::Mute => session.set_muted(true)?,
                SettingsAction::Unmute => session.set_muted(false)?,
                SettingsAction::Fit { mode } => {
                    let mode: FitMode = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                    session.set_fit_mode(mode)?;
                }
            }
            render::settings(&mut out, &session)?;
        }
        Commands::Browse => {
            shell::run(&mut session, &config.gallery, std::io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}
