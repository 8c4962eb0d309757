//! Pure functions from fetched markup to entities.
//!
//! Nothing in here fails: a selector that finds nothing leaves the field
//! empty, a row without a usable link is skipped.

use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html};
use serde::Deserialize;
use url::Url;

use crate::{
    model::{
        Chapter, Manga, MangaStatus, MangaTile, SectionSelectors, SiteConfig, Tag, TileSelectors,
        UpdateEntry,
    },
    util::{self, date},
};

#[derive(Deserialize, Default)]
#[serde(default)]
struct ReaderData {
    sources: Vec<ReaderSource>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ReaderSource {
    images: Vec<String>,
}

pub struct Mapper<'c> {
    config: &'c SiteConfig,
    base: &'c Url,
}

impl<'c> Mapper<'c> {
    pub fn new(config: &'c SiteConfig, base: &'c Url) -> Self {
        Self { config, base }
    }

    fn image_in(&self, root: ElementRef, query: Option<&str>) -> Option<Url> {
        let element = util::select_first(root, query?)?;
        util::merge_vec_with_default(&self.config.image_attrs, vec!["src", "data-src"])
            .into_iter()
            .filter_map(|attr| element.value().attr(attr))
            .find_map(|value| util::absolute_url(self.base, value))
    }

    fn href(&self, element: ElementRef) -> Option<Url> {
        util::first_attr(element, &["href"]).and_then(|href| util::absolute_url(self.base, &href))
    }

    fn parse_date(&self, text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let date = date::try_parse_date_at(text, &self.config.date_formats, now);
        if date.is_none() {
            debug!("Could not parse date '{}'", text);
        }
        date
    }

    pub fn manga_details(&self, doc: &Html, id: &str) -> Manga {
        let query = &self.config.manga;
        let root = doc.root_element();

        let mut titles: Vec<String> = vec![];
        if let Some(title) = util::resolve_text(root, query.title.as_deref()) {
            titles.push(title);
        }
        if let Some(alt_titles) = util::resolve_text(root, query.alt_titles.as_deref()) {
            for alt_title in alt_titles.split([',', ';']).map(str::trim) {
                if !alt_title.is_empty() && !titles.iter().any(|title| title == alt_title) {
                    titles.push(alt_title.to_owned());
                }
            }
        }
        if titles.is_empty() {
            warn!("No title found for {}, using its id", id);
            titles.push(id.to_owned());
        }

        let status = util::resolve_text(root, query.status.as_deref())
            .map(|status| util::string_to_status(&status, &self.config.status))
            .unwrap_or(MangaStatus::Unknown);

        let tags = util::resolve_all(root, query.genres.as_deref())
            .into_iter()
            .filter_map(|genre| {
                let label = util::element_text(genre)?;
                let id = self
                    .href(genre)
                    .and_then(|url| util::path_id(&url))
                    .unwrap_or_else(|| slugify(&label));
                Some(Tag { id, label })
            })
            .collect();

        Manga {
            id: id.to_owned(),
            titles,
            image: self.image_in(root, query.image.as_deref()),
            status,
            author: meaningful(util::resolve_text(root, query.author.as_deref())),
            artist: meaningful(util::resolve_text(root, query.artist.as_deref())),
            description: util::resolve_text(root, query.description.as_deref()),
            rating: util::resolve_text(root, query.rating.as_deref())
                .and_then(|rating| util::parse_rating(&rating)),
            tags,
        }
    }

    /// Newest first, chapters without a date at the end
    pub fn chapters(&self, doc: &Html, manga_id: &str, now: DateTime<Utc>) -> Vec<Chapter> {
        let query = &self.config.chapter;
        let root = doc.root_element();

        let mut chapters: Vec<Chapter> = util::select(root, &query.item)
            .into_iter()
            .filter_map(|item| {
                let link = util::select_or_self(item, query.link.as_deref())?;
                let Some(id) = self.href(link).and_then(|url| util::path_id(&url)) else {
                    debug!("Skipping chapter of {} without a link", manga_id);
                    return None;
                };
                let name = util::resolve_text(item, query.name.as_deref())
                    .or_else(|| util::element_text(link))
                    .unwrap_or_else(|| id.clone());

                let mut number = query
                    .number_attr
                    .as_deref()
                    .and_then(|attr| util::first_attr(item, &[attr]))
                    .map(|number| util::parse_chapter_number(&number))
                    .unwrap_or(f32::NAN);
                if number.is_nan() {
                    number = util::resolve_text(item, query.number.as_deref())
                        .map(|number| util::parse_chapter_number(&number))
                        .unwrap_or_else(|| util::parse_chapter_number(&name));
                }

                let time = util::resolve_text(item, query.date.as_deref())
                    .and_then(|date| self.parse_date(&date, now));

                Some(Chapter {
                    id,
                    manga_id: manga_id.to_owned(),
                    name,
                    number,
                    time,
                })
            })
            .collect();

        chapters.sort_by(|a, b| b.time.cmp(&a.time));
        chapters
    }

    /// Reading order. The reader script wins over `<img>` tags when present.
    pub fn chapter_pages(&self, doc: &Html) -> Vec<Url> {
        let query = &self.config.pages;
        let root = doc.root_element();

        if let Some(marker) = query.script_marker.as_deref() {
            let pages = util::select(root, "script")
                .into_iter()
                .map(|script| script.text().collect::<String>())
                .find_map(|script| self.reader_script_pages(&script, marker));
            if let Some(pages) = pages {
                return pages;
            }
        }

        let attrs = util::merge_vec_with_default(&self.config.image_attrs, vec!["src", "data-src"]);
        util::select(root, &query.image)
            .into_iter()
            .filter_map(|img| {
                attrs
                    .iter()
                    .filter_map(|attr| img.value().attr(attr))
                    .find_map(|value| util::absolute_url(self.base, value))
            })
            .collect()
    }

    fn reader_script_pages(&self, script: &str, marker: &str) -> Option<Vec<Url>> {
        let start = script.find(marker)? + marker.len();
        let rest = &script[start..];
        let json = rest.get(rest.find('{')?..=rest.rfind('}')?)?;
        let data: ReaderData = match serde_json::from_str(json) {
            Ok(data) => data,
            Err(e) => {
                warn!("Reader script is not valid JSON: {}", e);
                return None;
            }
        };

        let pages: Vec<Url> = data
            .sources
            .into_iter()
            .find(|source| !source.images.is_empty())?
            .images
            .iter()
            .filter_map(|image| util::absolute_url(self.base, image))
            .collect();

        (!pages.is_empty()).then_some(pages)
    }

    fn tile(&self, item: ElementRef, query: &TileSelectors) -> Option<MangaTile> {
        let link = util::select_or_self(item, query.link.as_deref())?;
        let id = self.href(link).and_then(|url| util::path_id(&url))?;
        let title = util::resolve_text(item, query.title.as_deref())
            .or_else(|| util::first_attr(link, &["title"]))
            .or_else(|| util::element_text(link))
            .unwrap_or_else(|| id.clone());

        Some(MangaTile {
            id,
            title,
            image: self.image_in(item, query.image.as_deref()),
            subtitle: util::resolve_text(item, query.subtitle.as_deref()),
        })
    }

    /// Site order is kept, nothing is re-ranked or deduplicated
    pub fn tiles(&self, root: ElementRef, query: &TileSelectors) -> Vec<MangaTile> {
        util::select(root, &query.item)
            .into_iter()
            .filter_map(|item| self.tile(item, query))
            .collect()
    }

    pub fn section_tiles(&self, doc: &Html, section: &SectionSelectors) -> Vec<MangaTile> {
        let root = doc.root_element();
        let container = match section.selector_box.as_deref() {
            Some(query) => util::select_first(root, query),
            None => Some(root),
        };
        match container {
            Some(container) => self.tiles(container, &section.tile),
            None => {
                debug!("Section box {:?} not found", section.selector_box);
                vec![]
            }
        }
    }

    pub fn tags(&self, doc: &Html) -> Vec<Tag> {
        let query = &self.config.tags;
        let root = doc.root_element();
        let container = match query.selector_box.as_deref() {
            Some(selector_box) => util::select_first(root, selector_box),
            None => Some(root),
        };
        let Some(container) = container else {
            return vec![];
        };

        let mut tags: Vec<Tag> = vec![];
        for item in util::select(container, &query.item) {
            let link = util::select_or_self(item, query.link.as_deref()).unwrap_or(item);
            let slug = self
                .href(link)
                .and_then(|url| util::path_id(&url))
                .or_else(|| util::first_attr(link, &["value"]))
                .or_else(|| util::element_text(item).map(|text| slugify(&text)));
            let Some(id) = slug.filter(|slug| !slug.is_empty()) else {
                continue;
            };
            let label = query
                .label
                .as_deref()
                .and_then(|label| util::resolve_text(item, Some(label)))
                .unwrap_or_else(|| id.clone());

            if !tags.iter().any(|tag| tag.id == id) {
                tags.push(Tag { id, label });
            }
        }
        tags
    }

    pub fn update_entries(&self, doc: &Html, now: DateTime<Utc>) -> Vec<UpdateEntry> {
        let query = &self.config.updates;
        let root = doc.root_element();

        util::select(root, &query.item)
            .into_iter()
            .filter_map(|item| {
                let link = util::select_or_self(item, query.link.as_deref())?;
                let manga_id = self.href(link).and_then(|url| util::path_id(&url))?;
                let chapter = query
                    .chapter
                    .as_deref()
                    .and_then(|chapter| util::select_first(item, chapter));

                Some(UpdateEntry {
                    manga_id,
                    chapter_id: chapter
                        .and_then(|chapter| self.href(chapter))
                        .and_then(|url| util::path_id(&url)),
                    chapter_number: chapter
                        .and_then(util::element_text)
                        .map(|name| util::parse_chapter_number(&name))
                        .unwrap_or(f32::NAN),
                    updated: util::resolve_text(item, query.date.as_deref())
                        .and_then(|date| self.parse_date(&date, now)),
                })
            })
            .collect()
    }
}

fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Sites print "-" or "N/A" for unknown people
fn meaningful(value: Option<String>) -> Option<String> {
    value.filter(|value| {
        value.chars().any(char::is_alphanumeric) && !value.eq_ignore_ascii_case("n/a")
    })
}
