use std::sync::OnceLock;

use crate::models::{capitalize, Category, Wallpaper};

pub const ITEMS_PER_CATEGORY: u32 = 1000;

const NEON_TUNNEL: &str =
    "https://assets.mixkit.co/videos/preview/mixkit-tunnel-of-purple-neon-lights-4240-large.mp4";
const NEON_LIGHTS: &str = "https://assets.mixkit.co/videos/preview/mixkit-set-of-different-colored-neon-lights-4242-large.mp4";
const FOREST_STREAM: &str =
    "https://assets.mixkit.co/videos/preview/mixkit-forest-stream-in-the-sunlight-525-large.mp4";
const NIGHT_SKY: &str =
    "https://assets.mixkit.co/videos/preview/mixkit-stars-in-the-night-sky-4001-large.mp4";
const OCEAN_WAVES: &str = "https://assets.mixkit.co/videos/preview/mixkit-waves-of-a-blue-ocean-in-the-sunlight-4247-large.mp4";
const PINK_LIQUID: &str = "https://assets.mixkit.co/videos/preview/mixkit-slow-motion-of-a-pink-and-purple-liquid-4340-large.mp4";
const COLORED_INK: &str = "https://assets.mixkit.co/videos/preview/mixkit-abstract-waves-of-colored-ink-in-water-4334-large.mp4";

/// Video assets each category draws from.
pub fn asset_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Cars | Category::Cities => &[NEON_TUNNEL, NEON_LIGHTS],
        Category::Sea => &[OCEAN_WAVES, PINK_LIQUID],
        Category::Cute => &[COLORED_INK, PINK_LIQUID],
        Category::Nature | Category::Animals | Category::All => &[FOREST_STREAM, NIGHT_SKY],
    }
}

/// Placeholder image URL seeded by `seed`.
pub fn thumbnail_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/400/600")
}

/// Build the synthetic library: category-major, index-ascending within each
/// category. Pure and deterministic.
pub fn generate() -> Vec<Wallpaper> {
    let mut items = Vec::with_capacity(Category::LIBRARY.len() * ITEMS_PER_CATEGORY as usize);

    for &category in Category::LIBRARY {
        let pool = asset_pool(category);
        let name = category.as_str();
        let label = capitalize(name);

        for i in 1..=ITEMS_PER_CATEGORY {
            let id = format!("{name}-{i}");
            let rank = if i % 10 == 0 { "exclusive" } else { "popular" };
            items.push(Wallpaper {
                url: pool[i as usize % pool.len()].to_string(),
                thumbnail: thumbnail_url(&id),
                title: format!("{label} #{i}"),
                tags: vec![
                    name.to_string(),
                    "premium".into(),
                    "4k".into(),
                    "ultra-hd".into(),
                    rank.into(),
                ],
                is_local: false,
                id,
            });
        }
    }

    items
}

/// The generated library, built once per process.
pub fn library() -> &'static [Wallpaper] {
    static LIBRARY: OnceLock<Vec<Wallpaper>> = OnceLock::new();
    LIBRARY.get_or_init(generate)
}
