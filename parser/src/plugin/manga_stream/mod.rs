//! One engine for every MangaStream site. Sites differ only in their
//! [`SiteConfig`].

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use crate::{
    fetch::{Fetcher, Request},
    listing::Paginator,
    mapper::Mapper,
    model::*,
    parse_error::{ParseError, Result},
    parser::Source,
    util,
};

mod home;
mod search;
mod updates;

pub use search::GridListing;
pub use updates::UpdateFeed;

pub struct MangaStream<F> {
    config: SiteConfig,
    base: Url,
    fetcher: F,
}

impl<F: Fetcher> MangaStream<F> {
    pub fn new(config: SiteConfig, fetcher: F) -> Result<Self> {
        let base = config.base()?;
        Ok(Self {
            config,
            base,
            fetcher,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn mapper(&self) -> Mapper<'_> {
        Mapper::new(&self.config, &self.base)
    }

    fn paginator(&self) -> Paginator<'_, F> {
        Paginator::new(&self.fetcher, self.config.max_pages)
    }

    fn manga_url(&self, manga_id: &str) -> Result<Url> {
        site_url(
            &self.config,
            &format!("/{}/{}/", self.config.source_traversal_path_name, manga_id),
        )
    }

    fn chapter_url(&self, chapter_id: &str) -> Result<Url> {
        site_url(&self.config, &format!("/{}/", chapter_id))
    }

    async fn fetch_body(&self, url: Url) -> Result<String> {
        debug!("Fetching [{}]", url);
        let response = self.fetcher.fetch(&Request::get(url)).await?;
        debug!("[{}] answered {}", response.url, response.status);
        Ok(response.body)
    }
}

/// `base_url` + [path], keeping any path the base url already has
pub(crate) fn site_url(config: &SiteConfig, path: &str) -> Result<Url> {
    let base = config.base_url.trim_end_matches('/');
    let url = if path.is_empty() {
        format!("{}/", base)
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    };
    Url::parse(&url).map_err(|_| ParseError::InvalidRequestUrl(url))
}

/// Replace `{key}` placeholders in a path template
pub(crate) fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_owned(), |path, (key, value)| {
            path.replace(&format!("{{{key}}}"), value)
        })
}

#[async_trait]
impl<F: Fetcher> Source for MangaStream<F> {
    fn info(&self) -> &SourceInfo {
        &self.config.info
    }

    fn hostnames(&self) -> Vec<String> {
        util::get_hostname(&self.base).into_iter().collect()
    }

    async fn manga_details(&self, manga_id: &str) -> Result<Manga> {
        let body = self.fetch_body(self.manga_url(manga_id)?).await?;
        let manga = util::map_document(&body, |doc| self.mapper().manga_details(doc, manga_id));
        debug!("Mapped {} as '{}'", manga_id, manga.title());
        Ok(manga)
    }

    async fn chapters(&self, manga_id: &str) -> Result<Vec<Chapter>> {
        let body = self.fetch_body(self.manga_url(manga_id)?).await?;
        let chapters = util::map_document(&body, |doc| {
            self.mapper().chapters(doc, manga_id, Utc::now())
        });
        if chapters.is_empty() {
            warn!("No chapters found for {}", manga_id);
        }
        let unnumbered = chapters.iter().filter(|chapter| !chapter.has_number()).count();
        if unnumbered > 0 {
            warn!("{} chapters of {} have no number", unnumbered, manga_id);
        }
        Ok(chapters)
    }

    async fn chapter_details(&self, manga_id: &str, chapter_id: &str) -> Result<ChapterDetails> {
        let body = self.fetch_body(self.chapter_url(chapter_id)?).await?;
        let pages = util::map_document(&body, |doc| self.mapper().chapter_pages(doc));
        if pages.is_empty() {
            return Err(ParseError::MissingImages(chapter_id.to_owned()));
        }

        Ok(ChapterDetails {
            id: chapter_id.to_owned(),
            manga_id: manga_id.to_owned(),
            pages,
        })
    }

    async fn home_page_sections(&self) -> Result<Vec<HomeSection>> {
        self.build_home_sections().await
    }

    async fn view_more_items(&self, key: HomeSectionKey, page: u32) -> Result<PagedResults<MangaTile>> {
        self.section_page(key, page).await
    }

    async fn search(&self, query: &SearchQuery, page: u32) -> Result<PagedResults<SearchResult>> {
        self.search_page(query, page).await
    }

    async fn tags(&self) -> Result<Vec<Tag>> {
        let body = self
            .fetch_body(site_url(&self.config, &self.config.tags.path)?)
            .await?;
        Ok(util::map_document(&body, |doc| self.mapper().tags(doc)))
    }

    async fn filter_updated_manga(
        &self,
        cutoff: DateTime<Utc>,
        manga_ids: &HashSet<String>,
    ) -> Result<Vec<NotificationEntry>> {
        self.filter_updated_manga_at(cutoff, manga_ids, Utc::now()).await
    }
}
