use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::parse_error::{ParseError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

/// What the engine wants fetched. Headers, cookies and retries belong to the
/// host's fetch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: Url,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    /// Final url after redirects
    pub url: Url,
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &Request) -> Result<Response>;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for std::sync::Arc<F> {
    async fn fetch(&self, request: &Request) -> Result<Response> {
        (**self).fetch(request).await
    }
}

/// Plain reqwest fetch layer for hosts that have none of their own
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
    timeout: Duration,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:107.0) Gecko/20100101 Firefox/107.0",
            Duration::from_secs(10),
        )
    }
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent.to_owned(),
            timeout,
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &Request) -> Result<Response> {
        let builder = match request.method {
            Method::Get => self.client.get(request.url.clone()),
        };

        let response = builder
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header("Accept", "*/*")
            .header("Referer", request.url.to_string())
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status() == StatusCode::FORBIDDEN {
            return Err(ParseError::CloudflareIUAM);
        }
        if !response.status().is_success() {
            return Err(ParseError::NetworkError(response.status().as_u16()));
        }

        let url = response.url().clone();
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Response { url, status, body })
    }
}
