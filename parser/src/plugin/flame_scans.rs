use crate::model::{HomeSectionKey, SiteConfig, SourceInfo};

const FLAMESCANS_DOMAIN: &str = "https://flamescans.org";

pub fn flame_scans() -> SiteConfig {
    let mut config = SiteConfig {
        info: SourceInfo {
            name: "FlameScans".to_owned(),
            version: "1.0.1".to_owned(),
            description: "Extension that pulls manga from FlameScans".to_owned(),
            author: "Netsky".to_owned(),
            author_website: "http://github.com/TheNetsky".to_owned(),
            icon: "icon.png".to_owned(),
            website: FLAMESCANS_DOMAIN.to_owned(),
            language: "en".to_owned(),
            hentai: false,
            tags: vec!["Notifications".to_owned()],
        },
        base_url: FLAMESCANS_DOMAIN.to_owned(),
        source_traversal_path_name: "series".to_owned(),
        has_advanced_search_page: true,
        ..Default::default()
    };
    config.home.section_mut(HomeSectionKey::NewManga).enabled = false;
    config
}
