use serde::Serialize;

use super::tag::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MangaStatus {
    Ongoing,
    Completed,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct Manga {
    pub id: String,
    /// Primary title first, alternatives after it
    pub titles: Vec<String>,
    pub image: Option<url::Url>,
    pub status: MangaStatus,
    pub author: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f32>,
    pub tags: Vec<Tag>,
}

impl Manga {
    pub fn title(&self) -> &str {
        self.titles.first().map(String::as_str).unwrap_or(&self.id)
    }
}
