use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::Serialize;

use super::search_manga::MangaTile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeSectionKey {
    PopularToday,
    LatestUpdate,
    NewManga,
    TopAlltime,
    TopMonthly,
    TopWeekly,
}

static SECTION_KEYS: phf::Map<&'static str, HomeSectionKey> = phf_map! {
    "popular_today" => HomeSectionKey::PopularToday,
    "latest_update" => HomeSectionKey::LatestUpdate,
    "new_manga" => HomeSectionKey::NewManga,
    "top_alltime" => HomeSectionKey::TopAlltime,
    "top_monthly" => HomeSectionKey::TopMonthly,
    "top_weekly" => HomeSectionKey::TopWeekly,
};

impl HomeSectionKey {
    /// Canonical order in which sections are emitted
    pub const ALL: [HomeSectionKey; 6] = [
        HomeSectionKey::PopularToday,
        HomeSectionKey::LatestUpdate,
        HomeSectionKey::NewManga,
        HomeSectionKey::TopAlltime,
        HomeSectionKey::TopMonthly,
        HomeSectionKey::TopWeekly,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            HomeSectionKey::PopularToday => "popular_today",
            HomeSectionKey::LatestUpdate => "latest_update",
            HomeSectionKey::NewManga => "new_manga",
            HomeSectionKey::TopAlltime => "top_alltime",
            HomeSectionKey::TopMonthly => "top_monthly",
            HomeSectionKey::TopWeekly => "top_weekly",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            HomeSectionKey::PopularToday => "Popular Today",
            HomeSectionKey::LatestUpdate => "Latest Updates",
            HomeSectionKey::NewManga => "New Manga",
            HomeSectionKey::TopAlltime => "Top All Time",
            HomeSectionKey::TopMonthly => "Top Monthly",
            HomeSectionKey::TopWeekly => "Top Weekly",
        }
    }
}

impl FromStr for HomeSectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SECTION_KEYS
            .get(s)
            .copied()
            .ok_or_else(|| format!("Unknown home section {s}"))
    }
}

impl fmt::Display for HomeSectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeSection {
    pub key: HomeSectionKey,
    pub title: String,
    pub items: Vec<MangaTile>,
    /// Whether [`crate::parser::Source::view_more_items`] can page further
    pub view_more: bool,
}

#[cfg(test)]
mod tests {
    use super::HomeSectionKey;

    #[test]
    fn parses_every_key_back_from_its_id() {
        for key in HomeSectionKey::ALL {
            assert_eq!(key.id().parse::<HomeSectionKey>(), Ok(key));
        }
        assert!("popular".parse::<HomeSectionKey>().is_err());
    }
}
