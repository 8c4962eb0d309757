use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Network error, status = {0}")]
    NetworkError(u16),
    #[error(transparent)]
    NetworkErrorUnknown(#[from] reqwest::Error),
    #[error("Cloudflare's I'm Under Attack Mode")]
    CloudflareIUAM,
    #[error("Invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("Invalid request url: {0}")]
    InvalidRequestUrl(String),
    #[error("No source found that supports {0}")]
    NoSourceFound(String),
    #[error("Missing hostname in url: {0}")]
    MissingHostname(String),
    #[error(transparent)]
    BadConfig(#[from] serde_json::Error),

    // Chapter details
    #[error("No images found for chapter {0}")]
    MissingImages(String),
}

pub type Result<T> = core::result::Result<T, ParseError>;
