use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entry, either generated or uploaded by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Wallpaper {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_local: bool,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Wallpaper {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
    Es,
}

impl Language {
    pub const ALL: &[Language] = &[Language::En, Language::Pt, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
            Self::Es => "es",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code().to_uppercase())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "pt" => Ok(Self::Pt),
            "es" => Ok(Self::Es),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    #[default]
    Cover,
    Contain,
    Fill,
}

impl FitMode {
    pub const ALL: &[FitMode] = &[FitMode::Cover, FitMode::Contain, FitMode::Fill];
}

impl std::fmt::Display for FitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cover => write!(f, "cover"),
            Self::Contain => write!(f, "contain"),
            Self::Fill => write!(f, "fill"),
        }
    }
}

impl std::str::FromStr for FitMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cover" => Ok(Self::Cover),
            "contain" => Ok(Self::Contain),
            "fill" => Ok(Self::Fill),
            other => Err(format!("unknown fit mode: {other}")),
        }
    }
}

pub const DEFAULT_ACTIVE_WALLPAPER: &str = "nature-1";

/// User preferences, persisted as a whole on every change.
///
/// Fields missing from a stored record take their default individually; an
/// explicit `null` for `activeWallpaperId` is kept as `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub language: Language,
    pub muted: bool,
    pub fit_mode: FitMode,
    pub active_wallpaper_id: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            muted: true,
            fit_mode: FitMode::Cover,
            active_wallpaper_id: Some(DEFAULT_ACTIVE_WALLPAPER.into()),
        }
    }
}

/// Browsing category. `All` is the pseudo-category that disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Cars,
    Nature,
    Sea,
    Cities,
    Cute,
    Animals,
}

impl Category {
    /// Every selectable category, in display order.
    pub const ALL: &[Category] = &[
        Category::All,
        Category::Cars,
        Category::Nature,
        Category::Sea,
        Category::Cities,
        Category::Cute,
        Category::Animals,
    ];

    /// The real categories the catalog is generated from, in generation order.
    pub const LIBRARY: &[Category] = &[
        Category::Cars,
        Category::Nature,
        Category::Sea,
        Category::Cities,
        Category::Cute,
        Category::Animals,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Cars => "cars",
            Self::Nature => "nature",
            Self::Sea => "sea",
            Self::Cities => "cities",
            Self::Cute => "cute",
            Self::Animals => "animals",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::All => "\u{2728}",
            Self::Cars => "\u{1f3ce}\u{fe0f}",
            Self::Nature => "\u{1f33f}",
            Self::Sea => "\u{1f30a}",
            Self::Cities => "\u{1f3d9}\u{fe0f}",
            Self::Cute => "\u{1f9f8}",
            Self::Animals => "\u{1f436}",
        }
    }

    /// Identifier with its first letter upper-cased, e.g. "Nature".
    pub fn label(self) -> String {
        capitalize(self.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
