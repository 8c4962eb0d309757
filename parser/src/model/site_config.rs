use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::home_section::HomeSectionKey;
use crate::parse_error::{ParseError, Result};

fn q(query: &str) -> Option<String> {
    Some(query.to_owned())
}

/// Everything that tells one MangaStream site apart from another.
///
/// `Default` yields the stock theme values, so a site only overrides what it
/// changed:
///
/// ```
/// use parser::model::SiteConfig;
///
/// let config = SiteConfig {
///     base_url: "https://example.org".to_owned(),
///     source_traversal_path_name: "series".to_owned(),
///     ..Default::default()
/// };
/// assert!(config.home.popular_today.enabled);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub info: SourceInfo,
    pub base_url: String,
    /// Path fragment in front of every series id, `manga` in `/manga/<id>/`
    pub source_traversal_path_name: String,
    pub has_advanced_search_page: bool,
    /// Upper bound for every multi-page walk
    pub max_pages: u32,
    /// The update filter never looks further back than this
    pub update_lookback_days: i64,
    pub status: StatusTypes,
    pub manga: MangaSelectors,
    pub chapter: ChapterSelectors,
    pub pages: PageSelectors,
    pub tags: TagSelectors,
    pub search: SearchSelectors,
    pub home: HomeSelectors,
    pub updates: UpdateSelectors,
    /// Tried before the built-in chrono formats
    pub date_formats: Vec<String>,
    /// Attribute priority when reading image urls
    pub image_attrs: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            info: Default::default(),
            base_url: Default::default(),
            source_traversal_path_name: "manga".to_owned(),
            has_advanced_search_page: true,
            max_pages: 10,
            update_lookback_days: 30,
            status: Default::default(),
            manga: Default::default(),
            chapter: Default::default(),
            pages: Default::default(),
            tags: Default::default(),
            search: Default::default(),
            home: Default::default(),
            updates: Default::default(),
            date_formats: vec!["%B %d, %Y".to_owned()],
            image_attrs: vec![
                "data-lazy-src".to_owned(),
                "data-src".to_owned(),
                "src".to_owned(),
            ],
        }
    }
}

impl SiteConfig {
    /// Laid over the stock config key by key, at any depth. `null` clears
    /// an optional selector.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config = serde_json::to_value(Self::default())?;
        merge_json(&mut config, serde_json::from_str(json)?);
        Ok(serde_json::from_value(config)?)
    }

    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|_| ParseError::InvalidBaseUrl(self.base_url.clone()))
    }

    pub fn hostname(&self) -> Option<String> {
        self.base().ok()?.host_str().map(String::from)
    }
}

fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                merge_json(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, patch) => *base = patch,
    }
}

/// Published descriptor for the host's extension registry
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub author_website: String,
    pub icon: String,
    pub website: String,
    pub language: String,
    pub hentai: bool,
    pub tags: Vec<String>,
}

/// Case-insensitive synonyms, anything else maps to `Unknown`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusTypes {
    pub ongoing: Vec<String>,
    pub completed: Vec<String>,
}

impl Default for StatusTypes {
    fn default() -> Self {
        Self {
            ongoing: vec!["ongoing".to_owned()],
            completed: vec!["completed".to_owned()],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MangaSelectors {
    pub title: Option<String>,
    pub alt_titles: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub rating: Option<String>,
    pub genres: Option<String>,
}

impl Default for MangaSelectors {
    fn default() -> Self {
        Self {
            title: q("h1.entry-title"),
            alt_titles: q("div.wd-full:has(b:contains(Alternative)) span, span.alternative"),
            image: q("div.thumb img"),
            author: q("div.fmed:has(b:contains(Author)) span, div.imptdt:contains(Author) i"),
            artist: q("div.fmed:has(b:contains(Artist)) span, div.imptdt:contains(Artist) i"),
            description: q("div.entry-content[itemprop=description]"),
            status: q("div.imptdt:contains(Status) i, div.fmed:has(b:contains(Status)) span"),
            rating: q("div.rating-prc div.num, div.num[itemprop=ratingValue]"),
            genres: q("span.mgen a"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ChapterSelectors {
    pub item: String,
    /// if None, [item] will be used
    pub link: Option<String>,
    pub name: Option<String>,
    pub number: Option<String>,
    /// Read from the item itself, wins over [number]
    pub number_attr: Option<String>,
    pub date: Option<String>,
}

impl Default for ChapterSelectors {
    fn default() -> Self {
        Self {
            item: "div#chapterlist li".to_owned(),
            link: q("a"),
            name: q("span.chapternum"),
            number: None,
            number_attr: q("data-num"),
            date: q("span.chapterdate"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSelectors {
    pub image: String,
    /// Inline script call whose JSON argument lists the pages
    pub script_marker: Option<String>,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            image: "div#readerarea img".to_owned(),
            script_marker: q("ts_reader.run"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSelectors {
    /// Appended to the base url, empty for genres listed on the homepage
    pub path: String,
    pub selector_box: Option<String>,
    pub item: String,
    pub link: Option<String>,
    /// When None the slug doubles as the label
    pub label: Option<String>,
}

impl Default for TagSelectors {
    fn default() -> Self {
        Self {
            path: String::new(),
            selector_box: q("ul.genre"),
            item: "li".to_owned(),
            link: q("a"),
            label: None,
        }
    }
}

/// Selectors for one entry of a listing grid
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSelectors {
    pub item: String,
    /// if None, [item] will be used
    pub link: Option<String>,
    /// if None, the link's `title` attribute or text is used
    pub title: Option<String>,
    pub image: Option<String>,
    pub subtitle: Option<String>,
}

impl Default for TileSelectors {
    fn default() -> Self {
        Self {
            item: "div.bsx".to_owned(),
            link: q("a"),
            title: q("div.tt"),
            image: q("img"),
            subtitle: q("div.epxs"),
        }
    }
}

/// Path templates understand `{page}`, `{query}`, `{tag}`, `{order}` and
/// `{traversal}`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSelectors {
    pub search_path: String,
    pub tag_path: String,
    pub listing_path: String,
    /// `order` used when searching has to fall back to the general listing
    pub title_order: String,
    #[serde(flatten)]
    pub tile: TileSelectors,
}

impl Default for SearchSelectors {
    fn default() -> Self {
        Self {
            search_path: "/page/{page}/?s={query}".to_owned(),
            tag_path: "/genres/{tag}/page/{page}/".to_owned(),
            listing_path: "/{traversal}/?page={page}&order={order}".to_owned(),
            title_order: "title".to_owned(),
            tile: Default::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionSelectors {
    pub enabled: bool,
    /// Page holding the section, relative to the base url
    pub path: String,
    pub selector_box: Option<String>,
    #[serde(flatten)]
    pub tile: TileSelectors,
    /// `order` of the listing behind "view more", None when there is none
    pub view_more_order: Option<String>,
}

impl Default for SectionSelectors {
    fn default() -> Self {
        Self {
            enabled: true,
            path: String::new(),
            selector_box: None,
            tile: Default::default(),
            view_more_order: None,
        }
    }
}

impl SectionSelectors {
    fn top(period: &str) -> Self {
        Self {
            selector_box: Some(format!("div.serieslist.pop.wpop.wpop-{period}")),
            tile: TileSelectors {
                item: "li".to_owned(),
                link: q("a.series"),
                title: q("h2"),
                image: q("img"),
                subtitle: None,
            },
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeSelectors {
    pub popular_today: SectionSelectors,
    pub latest_update: SectionSelectors,
    pub new_manga: SectionSelectors,
    pub top_alltime: SectionSelectors,
    pub top_monthly: SectionSelectors,
    pub top_weekly: SectionSelectors,
}

impl Default for HomeSelectors {
    fn default() -> Self {
        Self {
            popular_today: SectionSelectors {
                selector_box: q("div.bixbox:has(h2:contains(Popular Today))"),
                view_more_order: q("popular"),
                ..Default::default()
            },
            latest_update: SectionSelectors {
                selector_box: q("div.bixbox:has(h2:contains(Latest Update))"),
                tile: TileSelectors {
                    item: "div.utao div.uta".to_owned(),
                    link: q("a.series"),
                    title: q("h4"),
                    image: q("img"),
                    subtitle: q("ul li a"),
                },
                view_more_order: q("update"),
                ..Default::default()
            },
            new_manga: SectionSelectors {
                selector_box: q("div.section:has(h3:contains(New Series))"),
                tile: TileSelectors {
                    item: "li".to_owned(),
                    link: q("a.series"),
                    title: q("h2"),
                    image: q("img"),
                    subtitle: None,
                },
                view_more_order: q("latest"),
                ..Default::default()
            },
            top_alltime: SectionSelectors::top("alltime"),
            top_monthly: SectionSelectors::top("monthly"),
            top_weekly: SectionSelectors::top("weekly"),
        }
    }
}

impl HomeSelectors {
    pub fn section(&self, key: HomeSectionKey) -> &SectionSelectors {
        match key {
            HomeSectionKey::PopularToday => &self.popular_today,
            HomeSectionKey::LatestUpdate => &self.latest_update,
            HomeSectionKey::NewManga => &self.new_manga,
            HomeSectionKey::TopAlltime => &self.top_alltime,
            HomeSectionKey::TopMonthly => &self.top_monthly,
            HomeSectionKey::TopWeekly => &self.top_weekly,
        }
    }

    pub fn section_mut(&mut self, key: HomeSectionKey) -> &mut SectionSelectors {
        match key {
            HomeSectionKey::PopularToday => &mut self.popular_today,
            HomeSectionKey::LatestUpdate => &mut self.latest_update,
            HomeSectionKey::NewManga => &mut self.new_manga,
            HomeSectionKey::TopAlltime => &mut self.top_alltime,
            HomeSectionKey::TopMonthly => &mut self.top_monthly,
            HomeSectionKey::TopWeekly => &mut self.top_weekly,
        }
    }
}

/// The feed the update filter walks, newest first
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateSelectors {
    pub path: String,
    pub item: String,
    pub link: Option<String>,
    /// First match is taken as the newest chapter
    pub chapter: Option<String>,
    pub date: Option<String>,
}

impl Default for UpdateSelectors {
    fn default() -> Self {
        Self {
            path: "/page/{page}/".to_owned(),
            item: "div.utao div.uta".to_owned(),
            link: q("a.series"),
            chapter: q("ul li a"),
            date: q("ul li span"),
        }
    }
}
