use std::collections::HashMap;

use super::{search::GridListing, MangaStream};
use crate::{
    fetch::Fetcher,
    model::{HomeSection, HomeSectionKey, MangaTile, PagedResults},
    parse_error::Result,
    util,
};

impl<F: Fetcher> MangaStream<F> {
    /// Sections come out in [`HomeSectionKey::ALL`] order. Disabled sections
    /// are left out, a section whose box is missing comes out empty.
    pub(super) async fn build_home_sections(&self) -> Result<Vec<HomeSection>> {
        let mut pages: HashMap<String, String> = HashMap::new();
        let mut sections = vec![];

        for key in HomeSectionKey::ALL {
            let section = self.config.home.section(key);
            if !section.enabled {
                debug!("Home section {} is disabled", key);
                continue;
            }

            if !pages.contains_key(&section.path) {
                let url = super::site_url(&self.config, &section.path)?;
                let body = self.fetch_body(url).await?;
                pages.insert(section.path.clone(), body);
            }
            let body = &pages[&section.path];
            let items = util::map_document(body, |doc| self.mapper().section_tiles(doc, section));
            if items.is_empty() {
                warn!("Home section {} has no items", key);
            }

            sections.push(HomeSection {
                key,
                title: key.title().to_owned(),
                items,
                view_more: section.view_more_order.is_some(),
            });
        }

        Ok(sections)
    }

    /// One page of the listing behind a section's "view more"
    pub(super) async fn section_page(&self, key: HomeSectionKey, page: u32) -> Result<PagedResults<MangaTile>> {
        let section = self.config.home.section(key);
        let order = match &section.view_more_order {
            Some(order) if section.enabled => order,
            _ => {
                debug!("Home section {} has no view more", key);
                return Ok(PagedResults::empty());
            }
        };

        let listing = GridListing::ordered(&self.config, &self.base, order);
        let items = self.paginator().list_page(&listing, page).await?;
        Ok(PagedResults::new(items, page))
    }
}
