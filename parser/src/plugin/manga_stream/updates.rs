use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

use chrono::{DateTime, Duration, Utc};
use scraper::Html;
use url::Url;

use super::{fill, site_url, MangaStream};
use crate::{
    fetch::{Fetcher, Request},
    listing::Listing,
    mapper::Mapper,
    model::{NotificationEntry, SiteConfig, UpdateEntry},
    parse_error::Result,
};

/// The site's "latest update" feed, newest first
pub struct UpdateFeed<'e> {
    config: &'e SiteConfig,
    base: &'e Url,
    now: DateTime<Utc>,
}

impl<'e> UpdateFeed<'e> {
    pub fn new(config: &'e SiteConfig, base: &'e Url, now: DateTime<Utc>) -> Self {
        Self { config, base, now }
    }
}

impl Listing for UpdateFeed<'_> {
    type Item = UpdateEntry;

    fn request(&self, page: u32) -> Result<Request> {
        let path = fill(&self.config.updates.path, &[("page", page.to_string().as_str())]);
        Ok(Request::get(site_url(self.config, &path)?))
    }

    fn parse(&self, doc: &Html) -> Vec<UpdateEntry> {
        Mapper::new(self.config, self.base).update_entries(doc, self.now)
    }
}

impl<F: Fetcher> MangaStream<F> {
    /// Watched manga with a chapter at or after [cutoff], newest first.
    ///
    /// The feed is only followed back `update_lookback_days` from [now], so a
    /// cutoff older than that can miss updates.
    pub async fn filter_updated_manga_at(
        &self,
        cutoff: DateTime<Utc>,
        watch: &HashSet<String>,
        now: DateTime<Utc>,
    ) -> Result<Vec<NotificationEntry>> {
        if watch.is_empty() {
            return Ok(vec![]);
        }

        let lookback = now - Duration::days(self.config.update_lookback_days);
        let feed = UpdateFeed::new(&self.config, &self.base, now);
        let mut found: HashMap<String, NotificationEntry> = HashMap::new();

        let pages = self
            .paginator()
            .walk(&feed, |page, entries| {
                let mut newest: Option<DateTime<Utc>> = None;
                let mut oldest: Option<DateTime<Utc>> = None;

                for entry in entries {
                    let Some(updated) = entry.updated else {
                        continue;
                    };
                    newest = newest.max(Some(updated));
                    oldest = Some(oldest.map_or(updated, |oldest| oldest.min(updated)));

                    if updated < cutoff || !watch.contains(&entry.manga_id) {
                        continue;
                    }
                    let newer = found
                        .get(&entry.manga_id)
                        .map_or(true, |known| known.updated < updated);
                    if newer {
                        found.insert(
                            entry.manga_id.clone(),
                            NotificationEntry {
                                manga_id: entry.manga_id,
                                chapter_id: entry.chapter_id,
                                chapter_number: entry.chapter_number,
                                updated,
                            },
                        );
                    }
                }

                if newest.is_some_and(|newest| newest < cutoff) {
                    info!("Update feed page {} is older than the cutoff", page);
                    return ControlFlow::Break(());
                }
                if oldest.is_some_and(|oldest| oldest < lookback) {
                    info!(
                        "Update feed page {} goes past the {} day lookback",
                        page, self.config.update_lookback_days
                    );
                    return ControlFlow::Break(());
                }
                ControlFlow::Continue(())
            })
            .await?;

        debug!("Found {} updated manga in {} pages", found.len(), pages);
        let mut updated: Vec<NotificationEntry> = found.into_values().collect();
        updated.sort_by(|a, b| b.updated.cmp(&a.updated).then_with(|| a.manga_id.cmp(&b.manga_id)));
        Ok(updated)
    }
}
