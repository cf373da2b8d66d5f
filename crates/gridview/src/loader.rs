//! Asynchronous loading of grid datasets.
//!
//! A [`GridLoader`] fetches one document per call, from an HTTP(S) URL, a
//! `file://` URL or a local path, and parses it into [`GridCell`]s. There is
//! no retry and no caching. A loader runs at most one load at a time.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::{Client, Url};

use crate::format::parse_grid_document;
use crate::{GridCell, GridError, Result};

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An `http` or `https` URL.
    Http(Url),
    /// A file on the local filesystem.
    File(PathBuf),
}

impl Source {
    /// Classifies a source string.
    ///
    /// Anything that is not an `http`, `https` or `file` URL is taken as a path.
    pub fn parse(source: &str) -> Result<Self> {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Http(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Self::File)
                .map_err(|()| GridError::Fetch(format!("invalid file URL: {source}"))),
            _ => Ok(Self::File(PathBuf::from(source))),
        }
    }
}

/// Marks a loader busy for as long as it lives.
struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GridError::LoadInProgress)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Fetches and parses grid documents.
#[derive(Debug, Default)]
pub struct GridLoader {
    client: Client,
    in_flight: AtomicBool,
}

impl GridLoader {
    /// Creates a loader with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader that issues requests through `client`.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Returns whether a load is currently running.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fetches `source` and parses it into cells.
    ///
    /// Fails with [`GridError::LoadInProgress`] if this loader is already
    /// loading, [`GridError::Fetch`] if the document cannot be retrieved,
    /// and [`GridError::MalformedData`] if it is not a valid grid document.
    /// Dropping the returned future releases the loader.
    pub async fn load(&self, source: &str) -> Result<Vec<GridCell>> {
        let _in_flight = match InFlight::acquire(&self.in_flight) {
            Ok(guard) => guard,
            Err(e) => {
                log::warn!("rejected load of {source}: another load is in progress");
                return Err(e);
            }
        };

        let text = match Source::parse(source)? {
            Source::Http(url) => self.fetch_http(url).await?,
            Source::File(path) => read_file(&path).await?,
        };

        let cells = parse_grid_document(&text)?;
        log::debug!("loaded {} cells from {source}", cells.len());
        Ok(cells)
    }

    async fn fetch_http(&self, url: Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| GridError::Fetch(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GridError::Fetch(format!("{url} returned {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| GridError::Fetch(format!("failed to read body of {url}: {e}")))
    }
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| GridError::Fetch(format!("failed to read {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parse() {
        assert!(matches!(
            Source::parse("https://example.com/grid.json").unwrap(),
            Source::Http(url) if url.host_str() == Some("example.com")
        ));
        assert_eq!(
            Source::parse("data/grid.json").unwrap(),
            Source::File(PathBuf::from("data/grid.json"))
        );
        assert_eq!(
            Source::parse("/tmp/grid.json").unwrap(),
            Source::File(PathBuf::from("/tmp/grid.json"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url() {
        assert_eq!(
            Source::parse("file:///tmp/grid%20a.json").unwrap(),
            Source::File(PathBuf::from("/tmp/grid a.json"))
        );
    }

    #[test]
    fn test_in_flight_guard() {
        let flag = AtomicBool::new(false);
        let guard = InFlight::acquire(&flag).unwrap();
        assert!(matches!(
            InFlight::acquire(&flag),
            Err(GridError::LoadInProgress)
        ));
        drop(guard);
        assert!(InFlight::acquire(&flag).is_ok());
        assert!(!flag.load(Ordering::Acquire));
    }
}
