use serde::Serialize;

/// Lightweight listing entry, shared by home sections and search results
#[derive(Debug, Clone, Serialize)]
pub struct MangaTile {
    pub id: String,
    pub title: String,
    pub image: Option<url::Url>,
    /// Secondary metadata, usually the latest chapter
    pub subtitle: Option<String>,
}

pub type SearchResult = MangaTile;

#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub title: Option<String>,
    /// Tag slugs, as found in [`crate::model::Tag::id`]. A tag page takes
    /// one slug, so only the first is searched and only without a title.
    pub included_tags: Vec<String>,
}

impl SearchQuery {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            title: None,
            included_tags: vec![tag.into()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PagedResults<T> {
    pub results: Vec<T>,
    /// `None` once the listing is exhausted
    pub next_page: Option<u32>,
}

impl<T> PagedResults<T> {
    pub fn new(results: Vec<T>, page: u32) -> Self {
        let next_page = if results.is_empty() { None } else { Some(page + 1) };
        Self { results, next_page }
    }

    pub fn empty() -> Self {
        Self {
            results: vec![],
            next_page: None,
        }
    }
}
