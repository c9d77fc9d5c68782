//! Image requests and URL construction
//!
//! An [`Image`] binds a source path, a [`Proxy`] identity, and a
//! [`Config`], and derives the transformation path, signature, and final
//! URL from them. Nothing is cached; every accessor recomputes from the
//! same underlying path derivation, so the plain URL, the signature, and
//! the signed URL can never diverge.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::sign::sign_path;

/// Path prefix of an ordinary transformation segment.
const SEGMENT_PREFIX: &str = "/c/";

/// Path prefix of an escaped transformation segment.
const ESCAPED_SEGMENT_PREFIX: &str = "/c!/";

/// Identity of an image proxy endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proxy {
    /// Host name the proxy is served from, e.g. `p1-abc123.imageflux.jp`.
    pub host: String,
    /// HMAC signing secret shared with the proxy. `None` means the proxy
    /// does not verify signatures and URLs are left unsigned; this is
    /// deliberately distinct from an empty-string secret.
    pub secret: Option<String>,
}

impl Proxy {
    /// Proxy without a signing secret.
    pub fn new(host: impl Into<String>) -> Self {
        Proxy {
            host: host.into(),
            secret: None,
        }
    }

    /// Proxy with a signing secret.
    pub fn with_secret(host: impl Into<String>, secret: impl Into<String>) -> Self {
        Proxy {
            host: host.into(),
            secret: Some(secret.into()),
        }
    }
}

/// A single image request: a source path on the proxy plus the
/// transformation to apply.
///
/// ```
/// use imageflux::{Config, Image, Proxy};
///
/// let image = Image::with_config(
///     "a.jpg",
///     Proxy::new("example.com"),
///     Config {
///         width: 100,
///         ..Default::default()
///     },
/// );
/// assert_eq!(image.url().unwrap().as_str(), "https://example.com/c/w=100/a.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Location of the source image on the proxy.
    pub path: String,
    /// Proxy serving the image.
    pub proxy: Proxy,
    /// Transformation to apply.
    pub config: Config,
}

impl Image {
    /// Image request with a default (identity) transformation.
    pub fn new(path: impl Into<String>, proxy: Proxy) -> Self {
        Image {
            path: path.into(),
            proxy,
            config: Config::default(),
        }
    }

    pub fn with_config(path: impl Into<String>, proxy: Proxy, config: Config) -> Self {
        Image {
            path: path.into(),
            proxy,
            config,
        }
    }

    /// The unsigned transformation path, always `/`-prefixed.
    ///
    /// A non-default config prepends a `/c/<tokens>` segment, joining with
    /// standard path semantics; a default config leaves the source path
    /// untouched apart from the leading `/`.
    pub fn path(&self) -> String {
        let tokens = self.config.to_string();
        if tokens.is_empty() {
            if self.path.starts_with('/') {
                self.path.clone()
            } else {
                format!("/{}", self.path)
            }
        } else {
            format!("/{}", join_path(&["c", &tokens, &self.path]))
        }
    }

    /// The signature over the unsigned path, or `None` when the proxy has
    /// no signing secret.
    pub fn signature(&self) -> Option<String> {
        self.path_and_signature().1
    }

    /// The transformation path with the signature spliced in. Identical to
    /// [`Image::path`] when the proxy has no signing secret.
    pub fn signed_path(&self) -> String {
        let (path, signature) = self.path_and_signature();
        match signature {
            Some(signature) => splice_signature(&path, &signature),
            None => {
                debug!(path = %path, "no signing secret configured, leaving path unsigned");
                path
            }
        }
    }

    /// The unsigned URL of the image.
    pub fn url(&self) -> Result<Url, Error> {
        self.url_with_path(&self.path())
    }

    /// The URL of the image, signed when the proxy has a signing secret.
    pub fn signed_url(&self) -> Result<Url, Error> {
        self.url_with_path(&self.signed_path())
    }

    /// Single source of truth for path() / signature() / signed_path():
    /// the signature always covers exactly the path returned here.
    fn path_and_signature(&self) -> (String, Option<String>) {
        let path = self.path();
        let signature = self
            .proxy
            .secret
            .as_deref()
            .map(|secret| sign_path(secret, &path));
        (path, signature)
    }

    fn url_with_path(&self, path: &str) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("https://{}", self.proxy.host)).map_err(|e| {
            Error::InvalidHost {
                host: self.proxy.host.clone(),
                message: e.to_string(),
            }
        })?;
        url.set_path(path);
        Ok(url)
    }
}

impl fmt::Display for Image {
    /// The unsigned URL as a string, without going through URL parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "https://{}{}", self.proxy.host, self.path())
    }
}

/// Join path segments with `/`, collapsing redundant separators and
/// dropping empty segments. No `..` resolution is performed.
fn join_path(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Splice a signature into a transformation path.
///
/// Paths with a `/c/` or `/c!/` segment get a leading `sig=` token joined
/// to the remaining tokens with a comma. Paths without a transformation
/// segment gain a fresh `/c/sig=...` segment with no comma; the source
/// path that follows is still `/`-prefixed. The missing comma is part of
/// the proxy's wire contract.
fn splice_signature(path: &str, signature: &str) -> String {
    if let Some(rest) = path.strip_prefix(SEGMENT_PREFIX) {
        return format!("{}sig={},{}", SEGMENT_PREFIX, signature, rest);
    }
    if let Some(rest) = path.strip_prefix(ESCAPED_SEGMENT_PREFIX) {
        return format!("{}sig={},{}", ESCAPED_SEGMENT_PREFIX, signature, rest);
    }
    format!("/c/sig={}{}", signature, path)
}
