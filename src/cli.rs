use std::path::PathBuf;

use clap::{Parser, Subcommand};
use parser::model::HomeSectionKey;

/// Pull manga from MangaStream sites and print it as JSON
#[derive(Parser, Debug)]
#[command(name = "mangastream", version)]
pub struct Cli {
    /// Bundled site to use, by name or by any url on it
    #[arg(long, env = "MANGASTREAM_SITE", default_value = "FlameScans")]
    pub site: String,

    /// Site config as JSON, replaces the bundled sites
    #[arg(long, env = "MANGASTREAM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the bundled sites
    Sites,
    Details {
        manga_id: String,
    },
    Chapters {
        manga_id: String,
    },
    /// Page images of one chapter
    Pages {
        manga_id: String,
        chapter_id: String,
    },
    Home,
    ViewMore {
        /// popular_today, latest_update or new_manga
        section: HomeSectionKey,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Search {
        #[arg(long)]
        title: Option<String>,
        /// Tag slug, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Tags,
    /// Which of [manga_ids] got a chapter since [since]
    Updates {
        /// "2021-04-20", "April 20, 2021", "3 days ago", ...
        #[arg(long)]
        since: String,
        #[arg(required = true)]
        manga_ids: Vec<String>,
    },
}
