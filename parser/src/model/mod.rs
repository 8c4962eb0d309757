mod chapter;
mod home_section;
mod manga;
mod notification;
mod search_manga;
mod site_config;
mod tag;

pub use chapter::{Chapter, ChapterDetails};
pub use home_section::{HomeSection, HomeSectionKey};
pub use manga::{Manga, MangaStatus};
pub use notification::{NotificationEntry, UpdateEntry};
pub use search_manga::{MangaTile, PagedResults, SearchQuery, SearchResult};
pub use site_config::*;
pub use tag::Tag;
