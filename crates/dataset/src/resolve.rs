use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use tracing::trace;
use url::Url;

use crate::error::RetrievalError;

/// Where relative resource identifiers are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceBase {
	/// Join identifiers onto an HTTP(S) base URL.
	Url(Url),
	/// Read identifiers as files below a directory.
	Directory(PathBuf),
}

/// A fully resolved resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
	Url(Url),
	Path(PathBuf),
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Url(url) => write!(f, "{url}"),
			Self::Path(path) => write!(f, "{}", path.display()),
		}
	}
}

/// Turns resource identifiers into locations and retrieves their contents.
#[derive(Debug, Clone)]
pub struct ResourceResolver {
	base: SourceBase,
	client: Client,
}

impl ResourceResolver {
	/// Build a resolver for the given base.
	///
	/// The HTTP client is created up front so absolute URLs work regardless of
	/// the base. Every request asks intermediaries not to serve cached copies.
	pub fn new(base: SourceBase) -> Result<Self, reqwest::Error> {
		let mut headers = HeaderMap::new();
		headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
		headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
		let client = Client::builder().default_headers(headers).build()?;

		let base = match base {
			SourceBase::Url(url) => SourceBase::Url(with_trailing_slash(url)),
			other => other,
		};

		Ok(Self { base, client })
	}

	/// Resolver rooted at an HTTP base URL.
	pub fn http(base: Url) -> Result<Self, reqwest::Error> {
		Self::new(SourceBase::Url(base))
	}

	/// Resolver rooted at a directory.
	pub fn filesystem(root: impl Into<PathBuf>) -> Result<Self, reqwest::Error> {
		Self::new(SourceBase::Directory(root.into()))
	}

	#[must_use]
	pub fn base(&self) -> &SourceBase {
		&self.base
	}

	/// Resolve an identifier against the base.
	///
	/// Absolute `http`/`https` URLs bypass the base entirely; so do absolute
	/// paths when the base is a directory.
	pub fn resolve(&self, resource: &str) -> Result<Location, RetrievalError> {
		if let Some(url) = absolute_http_url(resource) {
			return Ok(Location::Url(url));
		}

		match &self.base {
			SourceBase::Url(base) => Ok(Location::Url(base.join(resource)?)),
			SourceBase::Directory(root) => {
				let path = Path::new(resource);
				if path.is_absolute() {
					Ok(Location::Path(path.to_path_buf()))
				} else {
					Ok(Location::Path(root.join(path)))
				}
			}
		}
	}

	/// Read the raw body at a location.
	pub(crate) async fn retrieve(&self, location: &Location) -> Result<Vec<u8>, RetrievalError> {
		match location {
			Location::Url(url) => {
				let response = self.client.get(url.clone()).send().await?;
				let status = response.status();
				trace!(%url, %status, "response received");
				if !status.is_success() {
					return Err(RetrievalError::Status { status });
				}
				Ok(response.bytes().await?.to_vec())
			}
			Location::Path(path) => Ok(tokio::fs::read(path).await?),
		}
	}
}

fn absolute_http_url(resource: &str) -> Option<Url> {
	let url = Url::parse(resource).ok()?;
	matches!(url.scheme(), "http" | "https").then_some(url)
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	url
}
