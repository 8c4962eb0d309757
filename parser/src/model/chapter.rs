use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Chapter {
    pub id: String,
    pub manga_id: String,
    pub name: String,
    /// `NaN` when no number could be read from the markup
    pub number: f32,
    pub time: Option<DateTime<Utc>>,
}

impl Chapter {
    pub fn has_number(&self) -> bool {
        !self.number.is_nan()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterDetails {
    pub id: String,
    pub manga_id: String,
    /// Reading order
    pub pages: Vec<url::Url>,
}
