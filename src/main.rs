#[macro_use]
extern crate log;

use std::{collections::HashSet, fs, sync::Arc};

use anyhow::{anyhow, Context};
use clap::Parser;
use parser::{
    fetch::HttpFetcher,
    model::{SearchQuery, SiteConfig},
    parser::{Source, SourceRegistry},
    plugin::{manga_stream::MangaStream, presets},
    util::date::try_parse_date,
    Url,
};
use serde_json::Value;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    if log4rs::init_file("log4rs.yml", Default::default()).is_err() {
        env_logger::init();
    }

    let cli = Cli::parse();
    let registry = registry(&cli)?;
    let source = pick(&registry, &cli)?;
    info!("Using {}", source.info().name);

    let output = run(source, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn registry(cli: &Cli) -> anyhow::Result<SourceRegistry> {
    let fetcher = Arc::new(HttpFetcher::default());

    let Some(path) = &cli.config else {
        return Ok(SourceRegistry::from_presets(fetcher)?);
    };
    let json = fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    let config = SiteConfig::from_json(&json)?;
    let source: Box<dyn Source> = Box::new(MangaStream::new(config, fetcher)?);
    Ok(SourceRegistry::new(vec![source]))
}

fn pick<'r>(registry: &'r SourceRegistry, cli: &Cli) -> anyhow::Result<&'r dyn Source> {
    if cli.config.is_some() {
        return registry
            .sources
            .first()
            .map(|source| source.as_ref())
            .ok_or_else(|| anyhow!("No site configured"));
    }
    let source = match Url::parse(&cli.site) {
        Ok(url) => registry.find_by_host(&url)?,
        Err(_) => registry.find_by_name(&cli.site)?,
    };
    Ok(source)
}

async fn run(source: &dyn Source, command: Command) -> anyhow::Result<Value> {
    let output = match command {
        Command::Sites => {
            let sites: Vec<_> = presets().into_iter().map(|config| config.info).collect();
            serde_json::to_value(sites)?
        }
        Command::Details { manga_id } => serde_json::to_value(source.manga_details(&manga_id).await?)?,
        Command::Chapters { manga_id } => serde_json::to_value(source.chapters(&manga_id).await?)?,
        Command::Pages {
            manga_id,
            chapter_id,
        } => serde_json::to_value(source.chapter_details(&manga_id, &chapter_id).await?)?,
        Command::Home => serde_json::to_value(source.home_page_sections().await?)?,
        Command::ViewMore { section, page } => {
            serde_json::to_value(source.view_more_items(section, page).await?)?
        }
        Command::Search { title, tags, page } => {
            let query = SearchQuery {
                title,
                included_tags: tags,
            };
            serde_json::to_value(source.search(&query, page).await?)?
        }
        Command::Tags => serde_json::to_value(source.tags().await?)?,
        Command::Updates { since, manga_ids } => {
            let cutoff = try_parse_date(&since, &[]).ok_or_else(|| anyhow!("Unknown date {since}"))?;
            let manga_ids: HashSet<String> = manga_ids.into_iter().collect();
            debug!("Looking for updates since {}", cutoff);
            serde_json::to_value(source.filter_updated_manga(cutoff, &manga_ids).await?)?
        }
    };

    Ok(output)
}
