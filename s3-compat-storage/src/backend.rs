/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Error;
use crate::operation::list::{ListInput, ListOutput};
use crate::types::{ObjectInfo, Provider};

/// Direct HTTP backend for providers that don't speak the S3 protocol
pub(crate) mod direct;

/// Amazon S3 SDK backend
pub(crate) mod s3;

pub(crate) use direct::DirectHttpBackend;
pub(crate) use s3::S3Backend;

/// The set of storage capabilities every backend exposes.
///
/// A [`Client`](crate::Client) holds exactly one backend, chosen from the provider when it is
/// constructed. Backends that cannot perform an operation fail it with
/// [`ErrorKind::Unsupported`](crate::error::ErrorKind::Unsupported) without any I/O.
#[async_trait]
pub(crate) trait ObjectStore: fmt::Debug + Send + Sync {
    /// The provider this backend talks to
    fn provider(&self) -> Provider;

    /// Whether [`head_object`](ObjectStore::head_object) is available and uploads can be
    /// verified against the stored size.
    fn supports_head(&self) -> bool;

    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectInfo, Error>;

    async fn list_objects(&self, input: &ListInput) -> Result<ListOutput, Error>;

    async fn put_object(&self, request: PutRequest<'_>) -> Result<(), Error>;

    /// Stream an object into `destination`, returning the number of bytes written.
    async fn get_object(&self, bucket: &str, key: &str, destination: &Path) -> Result<u64, Error>;

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), Error>;

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, Error>;

    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, Error>;
}

/// The body of an object being stored
#[derive(Debug)]
pub(crate) enum PutBody {
    /// Bytes already held in memory (e.g. fetched from a remote source)
    Bytes(Bytes),
    /// A local file streamed from disk
    Path(PathBuf),
}

/// A single object write
#[derive(Debug)]
pub(crate) struct PutRequest<'a> {
    pub(crate) bucket: &'a str,
    pub(crate) key: &'a str,
    pub(crate) body: PutBody,
    pub(crate) content_length: u64,
    pub(crate) content_type: &'a str,
}

/// Create the backend for the configured provider.
pub(crate) fn from_config(config: &crate::Config) -> Box<dyn ObjectStore> {
    if config.provider().is_s3_compatible() {
        Box::new(S3Backend::new(config))
    } else {
        Box::new(DirectHttpBackend::new(config))
    }
}
