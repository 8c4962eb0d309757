use crate::model::SiteConfig;

mod flame_scans;
pub mod manga_stream;

pub use flame_scans::flame_scans;

/// Every site shipped with the crate
pub fn presets() -> Vec<SiteConfig> {
    vec![flame_scans()]
}
