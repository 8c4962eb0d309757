use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the site's "latest update" feed
#[derive(Debug, Clone)]
pub struct UpdateEntry {
    pub manga_id: String,
    pub chapter_id: Option<String>,
    pub chapter_number: f32,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationEntry {
    pub manga_id: String,
    pub chapter_id: Option<String>,
    pub chapter_number: f32,
    pub updated: DateTime<Utc>,
}
