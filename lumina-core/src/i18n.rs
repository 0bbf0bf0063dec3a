use crate::models::{FitMode, Language};

/// Named UI strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub app_name: &'static str,
    pub search_placeholder: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub select_video: &'static str,
    pub total_items: &'static str,
    pub all_categories: &'static str,
    pub my_wallpapers: &'static str,
    pub no_results: &'static str,
    pub settings: &'static str,
    pub audio: &'static str,
    pub fit_mode: &'static str,
    pub language: &'static str,
    pub cover: &'static str,
    pub contain: &'static str,
    pub fill: &'static str,
    pub preview: &'static str,
    pub set_as_wallpaper: &'static str,
    pub about: &'static str,
}

impl Strings {
    pub fn fit_mode_label(&self, mode: FitMode) -> &'static str {
        match mode {
            FitMode::Cover => self.cover,
            FitMode::Contain => self.contain,
            FitMode::Fill => self.fill,
        }
    }
}

const EN: Strings = Strings {
    app_name: "Lumina",
    search_placeholder: "Search wallpapers, tags...",
    hero_title: "Bring your screen to life",
    hero_subtitle: "Thousands of live video wallpapers, or upload your own.",
    select_video: "Select video",
    total_items: "wallpapers",
    all_categories: "All",
    my_wallpapers: "Wallpapers",
    no_results: "No wallpapers match your search",
    settings: "Settings",
    audio: "Audio",
    fit_mode: "Fit mode",
    language: "Language",
    cover: "Cover",
    contain: "Contain",
    fill: "Fill",
    preview: "Preview",
    set_as_wallpaper: "Set as wallpaper",
    about: "Lumina brings live video wallpapers to every screen.",
};

const PT: Strings = Strings {
    app_name: "Lumina",
    search_placeholder: "Buscar papéis de parede, tags...",
    hero_title: "Dê vida à sua tela",
    hero_subtitle: "Milhares de papéis de parede em vídeo, ou envie o seu.",
    select_video: "Selecionar vídeo",
    total_items: "papéis de parede",
    all_categories: "Todos",
    my_wallpapers: "Papéis de parede",
    no_results: "Nenhum papel de parede encontrado",
    settings: "Configurações",
    audio: "Áudio",
    fit_mode: "Ajuste",
    language: "Idioma",
    cover: "Cobrir",
    contain: "Conter",
    fill: "Preencher",
    preview: "Pré-visualização",
    set_as_wallpaper: "Definir como papel de parede",
    about: "Lumina leva papéis de parede em vídeo para todas as telas.",
};

const ES: Strings = Strings {
    app_name: "Lumina",
    search_placeholder: "Buscar fondos, etiquetas...",
    hero_title: "Dale vida a tu pantalla",
    hero_subtitle: "Miles de fondos de pantalla en video, o sube el tuyo.",
    select_video: "Seleccionar video",
    total_items: "fondos",
    all_categories: "Todos",
    my_wallpapers: "Fondos de pantalla",
    no_results: "Ningún fondo coincide con tu búsqueda",
    settings: "Ajustes",
    audio: "Audio",
    fit_mode: "Ajuste",
    language: "Idioma",
    cover: "Cubrir",
    contain: "Contener",
    fill: "Rellenar",
    preview: "Vista previa",
    set_as_wallpaper: "Establecer como fondo",
    about: "Lumina lleva fondos de pantalla en video a cada pantalla.",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Pt => &PT,
        Language::Es => &ES,
    }
}
