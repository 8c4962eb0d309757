use scraper::Html;
use url::Url;

use super::{fill, site_url, MangaStream};
use crate::{
    fetch::{Fetcher, Request},
    listing::Listing,
    mapper::Mapper,
    model::{MangaTile, PagedResults, SearchQuery, SearchResult, SiteConfig},
    parse_error::Result,
};

enum GridPath {
    Ordered(String),
    Search(String),
    Tag(String),
}

/// Any listing laid out as the theme's tile grid
pub struct GridListing<'e> {
    config: &'e SiteConfig,
    base: &'e Url,
    path: GridPath,
}

impl<'e> GridListing<'e> {
    /// `/{traversal}/?page={page}&order={order}`
    pub fn ordered(config: &'e SiteConfig, base: &'e Url, order: &str) -> Self {
        Self {
            config,
            base,
            path: GridPath::Ordered(order.to_owned()),
        }
    }

    pub fn search(config: &'e SiteConfig, base: &'e Url, query: &str) -> Self {
        Self {
            config,
            base,
            path: GridPath::Search(query.to_owned()),
        }
    }

    pub fn tag(config: &'e SiteConfig, base: &'e Url, tag: &str) -> Self {
        Self {
            config,
            base,
            path: GridPath::Tag(tag.to_owned()),
        }
    }
}

impl Listing for GridListing<'_> {
    type Item = MangaTile;

    fn request(&self, page: u32) -> Result<Request> {
        let page = page.to_string();
        let search = &self.config.search;
        let path = match &self.path {
            GridPath::Ordered(order) => fill(
                &search.listing_path,
                &[
                    ("traversal", self.config.source_traversal_path_name.as_str()),
                    ("page", page.as_str()),
                    ("order", order.as_str()),
                ],
            ),
            GridPath::Search(query) => fill(
                &search.search_path,
                &[("query", &*urlencoding::encode(query)), ("page", page.as_str())],
            ),
            GridPath::Tag(tag) => fill(
                &search.tag_path,
                &[("tag", &*urlencoding::encode(tag)), ("page", page.as_str())],
            ),
        };
        Ok(Request::get(site_url(self.config, &path)?))
    }

    fn parse(&self, doc: &Html) -> Vec<MangaTile> {
        Mapper::new(self.config, self.base).tiles(doc.root_element(), &self.config.search.tile)
    }
}

impl<F: Fetcher> MangaStream<F> {
    /// The listing to walk for [query], plus a title filter when the site has
    /// no search page of its own
    fn search_listing(&self, query: &SearchQuery) -> (GridListing<'_>, Option<String>) {
        let title = query
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty());

        match title {
            Some(title) if self.config.has_advanced_search_page => {
                (GridListing::search(&self.config, &self.base, title), None)
            }
            Some(title) => (
                GridListing::ordered(&self.config, &self.base, &self.config.search.title_order),
                Some(title.to_lowercase()),
            ),
            None => match query.included_tags.first() {
                Some(tag) => {
                    if query.included_tags.len() > 1 {
                        warn!("Only the first of {} tags is searched", query.included_tags.len());
                    }
                    (GridListing::tag(&self.config, &self.base, tag), None)
                }
                None => (
                    GridListing::ordered(&self.config, &self.base, &self.config.search.title_order),
                    None,
                ),
            },
        }
    }

    pub(super) async fn search_page(&self, query: &SearchQuery, page: u32) -> Result<PagedResults<SearchResult>> {
        let (listing, filter) = self.search_listing(query);
        let mut results = self.paginator().list_page(&listing, page).await?;
        let exhausted = results.is_empty();

        if let Some(filter) = filter {
            results.retain(|result| result.title.to_lowercase().contains(&filter));
        }

        Ok(PagedResults {
            results,
            next_page: if exhausted { None } else { Some(page + 1) },
        })
    }

    /// Every result up to `max_pages`, in site order
    pub async fn search_all(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let (listing, filter) = self.search_listing(query);
        let mut results = self.paginator().collect(&listing).await?;

        if let Some(filter) = filter {
            results.retain(|result| result.title.to_lowercase().contains(&filter));
        }
        Ok(results)
    }
}
