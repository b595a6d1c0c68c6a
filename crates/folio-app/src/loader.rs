//! Content loading and the process-wide content cache
//!
//! The content document is fetched exactly once, either from a local file or
//! over HTTP(S), and parsed into a [`Global`] tree that is then shared
//! read-only for the lifetime of the process.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use folio_core::prelude::*;
use folio_core::{ContentDocument, Global};
use url::Url;

/// Default document location, relative to the working directory
pub const DEFAULT_SOURCE: &str = "data.json";

/// Timeout for HTTP fetches
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the content document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Http(Url),
}

impl DocumentSource {
    /// Fetch the raw document text.
    ///
    /// Any I/O, network or HTTP status failure is reported as [`Error::Load`].
    pub async fn fetch(&self) -> Result<String> {
        match self {
            DocumentSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| Error::load(format!("{}: {}", path.display(), e))),
            DocumentSource::Http(url) => fetch_http(url).await,
        }
    }
}

async fn fetch_http(url: &Url) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| Error::load(format!("failed to build HTTP client: {e}")))?;
    get_text(&client, url).await
}

async fn get_text(client: &reqwest::Client, url: &Url) -> Result<String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| Error::load(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::load(format!("{url}: HTTP {status}")));
    }

    response
        .text()
        .await
        .map_err(|e| Error::load(format!("{url}: {e}")))
}

impl FromStr for DocumentSource {
    type Err = Error;

    /// `http://` and `https://` strings become URLs, anything else a path
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::config("content source is empty"));
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|e| Error::config(format!("invalid content URL {trimmed:?}: {e}")))?;
            Ok(DocumentSource::Http(url))
        } else {
            Ok(DocumentSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Http(url) => write!(f, "{url}"),
        }
    }
}

impl Default for DocumentSource {
    fn default() -> Self {
        DocumentSource::File(PathBuf::from(DEFAULT_SOURCE))
    }
}

/// Parse document text and extract its `global` tree.
///
/// Malformed JSON and missing required fields are both [`Error::Load`].
pub fn parse_document(text: &str) -> Result<Global> {
    let document: ContentDocument = serde_json::from_str(text)
        .map_err(|e| Error::load(format!("malformed content document: {e}")))?;
    Ok(document.global)
}

/// Fetch and parse the document at `source`
#[instrument(skip_all, fields(source = %source))]
pub async fn load(source: &DocumentSource) -> Result<Global> {
    let text = source.fetch().await?;
    let global = parse_document(&text)?;

    info!(
        "Loaded {} categories, {} articles",
        global.categories.len(),
        global.article_count()
    );
    let unrecognized = global.unrecognized_block_count();
    if unrecognized > 0 {
        debug!("{} content blocks have an unrecognized type and will not be shown", unrecognized);
    }

    Ok(global)
}

/// Once-assigned holder for the loaded tree
#[derive(Debug, Default)]
pub struct ContentCache {
    cell: OnceLock<Arc<Global>>,
}

static GLOBAL_CACHE: ContentCache = ContentCache::new();

impl ContentCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The process-wide cache used by the application
    pub fn global() -> &'static ContentCache {
        &GLOBAL_CACHE
    }

    /// The cached tree, if loading has completed
    pub fn get(&self) -> Option<Arc<Global>> {
        self.cell.get().cloned()
    }

    /// Return the cached tree, fetching it from `source` on first use.
    ///
    /// A failed load leaves the cache empty.
    pub async fn load(&self, source: &DocumentSource) -> Result<Arc<Global>> {
        if let Some(tree) = self.get() {
            trace!("Content cache hit");
            return Ok(tree);
        }
        let tree = Arc::new(load(source).await?);
        Ok(self.cell.get_or_init(|| tree).clone())
    }
}
