/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use core::fmt;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Endpoint marker for Cloudflare R2 (`<account-id>.r2.cloudflarestorage.com`)
pub(crate) const R2_MARKER: &str = "cloudflarestorage";
/// Endpoint marker for Backblaze B2 (`s3.<region>.backblazeb2.com`)
pub(crate) const BACKBLAZE_MARKER: &str = "backblazeb2";
/// Endpoint marker for BunnyCDN storage (`storage.bunnycdn.com`)
pub(crate) const BUNNY_CDN_MARKER: &str = "bunnycdn";

/// The target part size for an upload request.
#[derive(Debug, Clone, Default)]
pub enum PartSize {
    /// Automatically configure an optimal target part size based on the execution environment.
    #[default]
    Auto,

    /// Target part size explicitly given.
    ///
    /// NOTE: This is a suggestion and will be used if possible but may be adjusted for an individual request
    /// as required by the underlying API.
    Target(u64),
}

/// The storage provider an endpoint belongs to.
///
/// Derived from the endpoint when the [`Config`](crate::Config) is built and fixed for the
/// lifetime of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Provider {
    /// Cloudflare R2
    R2,
    /// Backblaze B2 (S3-compatible API)
    Backblaze,
    /// BunnyCDN storage, reached with plain HTTP rather than the S3 protocol
    BunnyCdn,
    /// Any other S3-compatible service, including Amazon S3 itself
    Generic,
}

impl Provider {
    /// Classify a normalized endpoint.
    ///
    /// Markers are checked in a fixed order and the first match wins, so an endpoint
    /// containing several markers resolves to the earliest one (R2, then Backblaze, then
    /// BunnyCDN).
    pub fn classify(endpoint: &str) -> Provider {
        if endpoint.contains(R2_MARKER) {
            Provider::R2
        } else if endpoint.contains(BACKBLAZE_MARKER) {
            Provider::Backblaze
        } else if endpoint.contains(BUNNY_CDN_MARKER) {
            Provider::BunnyCdn
        } else {
            Provider::Generic
        }
    }

    /// Whether this provider speaks the S3 protocol.
    ///
    /// Providers that don't are served by direct HTTP requests and support only
    /// upload, download and delete.
    pub fn is_s3_compatible(&self) -> bool {
        !matches!(self, Provider::BunnyCdn)
    }

    pub(crate) const fn as_str(&self) -> &'static str {
        match self {
            Provider::R2 => "r2",
            Provider::Backblaze => "backblazeb2",
            Provider::BunnyCdn => "bunnycdn",
            Provider::Generic => "s3",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the bytes of an upload come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    /// A file on the local filesystem
    Path(PathBuf),
    /// A remote `http://` or `https://` URL fetched with a GET request
    Url(String),
}

impl UploadSource {
    /// Returns the local path if this is a filesystem source
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            UploadSource::Path(path) => Some(path),
            UploadSource::Url(_) => None,
        }
    }

    /// Returns the URL if this is a remote source
    pub fn as_url(&self) -> Option<&str> {
        match self {
            UploadSource::Url(url) => Some(url),
            UploadSource::Path(_) => None,
        }
    }
}

impl fmt::Display for UploadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadSource::Path(path) => write!(f, "{}", path.display()),
            UploadSource::Url(url) => f.write_str(url),
        }
    }
}

impl From<&str> for UploadSource {
    /// Strings starting with `http://` or `https://` are remote sources, anything else is a path.
    fn from(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            UploadSource::Url(value.to_owned())
        } else {
            UploadSource::Path(PathBuf::from(value))
        }
    }
}

impl From<String> for UploadSource {
    fn from(value: String) -> Self {
        UploadSource::from(value.as_str())
    }
}

impl From<&Path> for UploadSource {
    fn from(value: &Path) -> Self {
        UploadSource::Path(value.to_path_buf())
    }
}

impl From<PathBuf> for UploadSource {
    fn from(value: PathBuf) -> Self {
        UploadSource::Path(value)
    }
}

/// Per-call options for an upload.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Headers sent with the GET request when the source is a remote URL.
    ///
    /// Ignored for local sources and never sent to the storage provider.
    pub headers: HashMap<String, String>,

    /// Content type to store the object with.
    ///
    /// Overrides both the remote response's `Content-Type` and the type inferred from the key.
    pub content_type: Option<String>,
}

impl UploadOptions {
    /// Headers sent with the GET request for a remote source
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// The content type override, if any
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// Metadata of a stored object.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ObjectInfo {
    /// Size of the object in bytes
    pub content_length: u64,
    /// The content type the object was stored with
    pub content_type: Option<String>,
    /// The entity tag of the object
    pub e_tag: Option<String>,
    /// When the object was last modified
    pub last_modified: Option<aws_smithy_types::DateTime>,
    /// User-defined metadata
    pub metadata: HashMap<String, String>,
}

impl ObjectInfo {
    /// Size of the object in bytes
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// The content type the object was stored with
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The entity tag of the object
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// When the object was last modified
    pub fn last_modified(&self) -> Option<&aws_smithy_types::DateTime> {
        self.last_modified.as_ref()
    }

    /// User-defined metadata
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(
            Provider::R2,
            Provider::classify("https://abc123.r2.cloudflarestorage.com")
        );
        assert_eq!(
            Provider::Backblaze,
            Provider::classify("https://s3.us-west-004.backblazeb2.com")
        );
        assert_eq!(
            Provider::BunnyCdn,
            Provider::classify("https://storage.bunnycdn.com")
        );
        assert_eq!(
            Provider::Generic,
            Provider::classify("https://s3.us-east-1.amazonaws.com")
        );
        assert_eq!(Provider::Generic, Provider::classify("http://localhost:9000"));
    }

    #[test]
    fn test_classify_first_marker_wins() {
        assert_eq!(
            Provider::R2,
            Provider::classify("https://backblazeb2.bunnycdn.cloudflarestorage.com")
        );
        assert_eq!(
            Provider::Backblaze,
            Provider::classify("https://bunnycdn.backblazeb2.com")
        );
    }

    #[test]
    fn test_only_bunny_cdn_is_not_s3_compatible() {
        assert!(Provider::R2.is_s3_compatible());
        assert!(Provider::Backblaze.is_s3_compatible());
        assert!(Provider::Generic.is_s3_compatible());
        assert!(!Provider::BunnyCdn.is_s3_compatible());
    }

    #[test]
    fn test_upload_source_from_str() {
        assert_eq!(
            UploadSource::Url("https://example.com/a.png".to_owned()),
            UploadSource::from("https://example.com/a.png")
        );
        assert_eq!(
            UploadSource::Url("http://example.com/a.png".to_owned()),
            UploadSource::from("http://example.com/a.png")
        );
        assert_eq!(
            UploadSource::Path(PathBuf::from("/tmp/http-cache/a.png")),
            UploadSource::from("/tmp/http-cache/a.png")
        );
        assert_eq!(
            UploadSource::Path(PathBuf::from("httpdocs/a.png")),
            UploadSource::from("httpdocs/a.png")
        );
    }
}
