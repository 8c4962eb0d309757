use std::ops::ControlFlow;

use scraper::Html;

use crate::{
    fetch::{Fetcher, Request},
    parse_error::Result,
    util,
};

/// A paged collection endpoint: search results, "view more", the update feed
pub trait Listing: Sync {
    type Item: Send;

    fn request(&self, page: u32) -> Result<Request>;
    fn parse(&self, doc: &Html) -> Vec<Self::Item>;

    /// The document never outlives this call, so callers stay `Send`
    fn parse_body(&self, body: &str) -> Vec<Self::Item> {
        let doc = util::parse_document(body);
        self.parse(&doc)
    }
}

/// Walks listings one page at a time, never two requests in flight
pub struct Paginator<'f, F: ?Sized> {
    fetcher: &'f F,
    max_pages: u32,
}

impl<'f, F: Fetcher + ?Sized> Paginator<'f, F> {
    pub fn new(fetcher: &'f F, max_pages: u32) -> Self {
        Self { fetcher, max_pages }
    }

    pub async fn list_page<L: Listing>(&self, listing: &L, page: u32) -> Result<Vec<L::Item>> {
        let request = listing.request(page)?;
        debug!("Fetching page {} [{}]", page, request.url);
        let response = self.fetcher.fetch(&request).await?;
        debug!("Page {} answered {}", page, response.status);
        Ok(listing.parse_body(&response.body))
    }

    /// Feeds pages 1.. to [visit] until `max_pages`, an empty page or
    /// `ControlFlow::Break`. Returns how many pages were fetched.
    pub async fn walk<L, V>(&self, listing: &L, mut visit: V) -> Result<u32>
    where
        L: Listing,
        V: FnMut(u32, Vec<L::Item>) -> ControlFlow<()> + Send,
    {
        let mut fetched = 0;
        for page in 1..=self.max_pages {
            let items = self.list_page(listing, page).await?;
            fetched += 1;
            if items.is_empty() {
                debug!("Page {} is empty, listing exhausted", page);
                return Ok(fetched);
            }
            if visit(page, items).is_break() {
                debug!("Stopped walking after page {}", page);
                return Ok(fetched);
            }
        }
        info!("Reached the limit of {} pages", self.max_pages);
        Ok(fetched)
    }

    /// Every item of every page, duplicates included
    pub async fn collect<L: Listing>(&self, listing: &L) -> Result<Vec<L::Item>> {
        let mut all = vec![];
        self.walk(listing, |_, items| {
            all.extend(items);
            ControlFlow::Continue(())
        })
        .await?;
        Ok(all)
    }
}
