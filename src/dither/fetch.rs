//! Fetching source rasters for the vectorizer.  A fetch is a single, time-bounded attempt: there
//! are no retries, and the caller degrades gracefully on any [`FetchError`].

use std::{path::PathBuf, time::Duration};

use image::DynamicImage;
use log::debug;
use thiserror::Error;

/// Timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something which can turn a location into a decoded raster image
pub trait ImageSource {
    fn fetch(&self, location: &str) -> Result<DynamicImage, FetchError>;
}

/// The possible ways that fetching a source image can fail
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed")]
    Http(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("`{0}` is not an http(s) URL")]
    UnsupportedLocation(String),
    #[error("could not decode image")]
    Decode(#[from] image::ImageError),
}

/// Fetches `http(s)://` locations over the network.  Any other location, including local paths,
/// is refused with [`FetchError::UnsupportedLocation`].
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl ImageSource for HttpSource {
    fn fetch(&self, location: &str) -> Result<DynamicImage, FetchError> {
        if !is_remote(location) {
            return Err(FetchError::UnsupportedLocation(location.to_owned()));
        }
        let response = self.client.get(location).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.bytes()?;
        debug!("fetched {} bytes from {}", body.len(), location);
        Ok(image::load_from_memory(&body)?)
    }
}

/// Reads images from the local filesystem.  A leading `file://` is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl ImageSource for FileSource {
    fn fetch(&self, location: &str) -> Result<DynamicImage, FetchError> {
        let path = PathBuf::from(location.strip_prefix("file://").unwrap_or(location));
        let bytes = std::fs::read(&path).map_err(|e| FetchError::Io(path.clone(), e))?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

/// Sends `http(s)://` locations to an [`HttpSource`] and reads everything else from disk.  Only
/// for trusted callers like the command line.
#[derive(Debug, Clone)]
pub struct HttpOrFileSource {
    http: HttpSource,
    file: FileSource,
}

impl HttpOrFileSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpSource::new(timeout)?,
            file: FileSource,
        })
    }
}

impl ImageSource for HttpOrFileSource {
    fn fetch(&self, location: &str) -> Result<DynamicImage, FetchError> {
        if is_remote(location) {
            self.http.fetch(location)
        } else {
            self.file.fetch(location)
        }
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
