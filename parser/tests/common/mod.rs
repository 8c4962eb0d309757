#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use url::Url;

use parser::{
    fetch::{Fetcher, Request, Response},
    parse_error::{ParseError, Result},
    plugin::{flame_scans, manga_stream::MangaStream},
};

pub mod fixtures;

pub fn init_logger() {
    let _ = env_logger::builder()
        .filter(Some("parser"), log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Serves fixture markup by url and remembers what was asked, in order.
/// Unknown urls answer 404 unless a fallback page is set.
#[derive(Default)]
pub struct MockFetcher {
    pages: HashMap<String, String>,
    fallback: Option<String>,
    requests: Mutex<Vec<Url>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        let url = Url::parse(url).unwrap();
        self.pages.insert(url.to_string(), body.to_owned());
        self
    }

    pub fn fallback(mut self, body: &str) -> Self {
        self.fallback = Some(body.to_owned());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(Url::to_string)
            .collect()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, request: &Request) -> Result<Response> {
        self.requests.lock().unwrap().push(request.url.clone());

        let body = self
            .pages
            .get(request.url.as_str())
            .or(self.fallback.as_ref())
            .ok_or(ParseError::NetworkError(404))?;

        Ok(Response {
            url: request.url.clone(),
            status: 200,
            body: body.clone(),
        })
    }
}

pub fn flame_scans_with(fetcher: MockFetcher) -> (MangaStream<Arc<MockFetcher>>, Arc<MockFetcher>) {
    let fetcher = Arc::new(fetcher);
    let source = MangaStream::new(flame_scans(), fetcher.clone()).unwrap();
    (source, fetcher)
}

pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}
