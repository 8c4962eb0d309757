use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use crate::{
    fetch::Fetcher,
    model::*,
    parse_error::{ParseError, Result},
    plugin::{manga_stream::MangaStream, presets},
    util,
};

/// Everything a host can ask of one site
#[async_trait]
pub trait Source: Send + Sync {
    fn info(&self) -> &SourceInfo;
    /// Hostnames without subdomains, see [`util::get_hostname`]
    fn hostnames(&self) -> Vec<String>;

    async fn manga_details(&self, manga_id: &str) -> Result<Manga>;
    async fn chapters(&self, manga_id: &str) -> Result<Vec<Chapter>>;
    async fn chapter_details(&self, manga_id: &str, chapter_id: &str) -> Result<ChapterDetails>;
    async fn home_page_sections(&self) -> Result<Vec<HomeSection>>;
    async fn view_more_items(&self, key: HomeSectionKey, page: u32) -> Result<PagedResults<MangaTile>>;
    async fn search(&self, query: &SearchQuery, page: u32) -> Result<PagedResults<SearchResult>>;
    async fn tags(&self) -> Result<Vec<Tag>>;
    async fn filter_updated_manga(
        &self,
        cutoff: DateTime<Utc>,
        manga_ids: &HashSet<String>,
    ) -> Result<Vec<NotificationEntry>>;
}

pub struct SourceRegistry {
    pub sources: Vec<Box<dyn Source>>,
}

impl SourceRegistry {
    pub fn new(sources: Vec<Box<dyn Source>>) -> Self {
        Self { sources }
    }

    /// One engine per bundled site, all sharing [fetcher]
    pub fn from_presets<F: Fetcher + Clone + 'static>(fetcher: F) -> Result<Self> {
        let sources = presets()
            .into_iter()
            .map(|config| {
                let source: Box<dyn Source> = Box::new(MangaStream::new(config, fetcher.clone())?);
                Ok(source)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(sources))
    }

    pub fn find_by_host(&self, url: &Url) -> Result<&dyn Source> {
        let hostname = util::get_hostname(url)?;

        self.sources
            .iter()
            .find(|source| source.hostnames().contains(&hostname))
            .map(|source| source.as_ref())
            .ok_or(ParseError::NoSourceFound(hostname))
    }

    pub fn find_by_name(&self, name: &str) -> Result<&dyn Source> {
        self.sources
            .iter()
            .find(|source| source.info().name.eq_ignore_ascii_case(name))
            .map(|source| source.as_ref())
            .ok_or_else(|| ParseError::NoSourceFound(name.to_owned()))
    }

    pub fn hostnames(&self) -> Vec<String> {
        self.sources
            .iter()
            .flat_map(|source| source.hostnames())
            .collect()
    }
}
