use crate::models::{Category, Wallpaper};

/// Entries of `catalog` in `category` whose title or a tag contains `query`
/// (trimmed, case-insensitive). Input order is preserved.
pub fn filter<'a>(catalog: &'a [Wallpaper], category: Category, query: &str) -> Vec<&'a Wallpaper> {
    let query = query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|wp| category == Category::All || wp.has_tag(category.as_str()))
        .filter(|wp| query.is_empty() || matches_query(wp, &query))
        .collect()
}

fn matches_query(wp: &Wallpaper, query: &str) -> bool {
    wp.title.to_lowercase().contains(query)
        || wp.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}

/// One page of a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }
}

/// Slice `items` into `page_size` chunks and return page `page` (1-based),
/// clamped into range. An empty input is a single empty page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let number = page.clamp(1, total_pages);
    let start = ((number - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start..end],
        number,
        total_pages,
        total_items: items.len(),
    }
}
