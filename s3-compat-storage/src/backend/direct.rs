/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Body, StatusCode};
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::Instrument;

use super::{ObjectStore, PutBody, PutRequest};
use crate::error::{self, Error};
use crate::operation::list::{ListInput, ListOutput};
use crate::types::{ObjectInfo, Provider};

/// Header carrying the storage zone password
pub(crate) const ACCESS_KEY_HEADER: &str = "AccessKey";

/// Backend issuing plain HTTP requests against `{endpoint}/{bucket}/{key}`.
///
/// Authenticates with the secret key alone; the access key id is never sent.
pub(crate) struct DirectHttpBackend {
    provider: Provider,
    endpoint: String,
    access_key: String,
    http: reqwest::Client,
}

impl DirectHttpBackend {
    pub(crate) fn new(config: &crate::Config) -> Self {
        Self {
            provider: config.provider(),
            endpoint: config.endpoint().trim_end_matches('/').to_owned(),
            access_key: config.secret_access_key().to_owned(),
            http: config.http_client().clone(),
        }
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, bucket, key)
    }
}

impl fmt::Debug for DirectHttpBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectHttpBackend")
            .field("provider", &self.provider)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ObjectStore for DirectHttpBackend {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn supports_head(&self) -> bool {
        false
    }

    async fn head_object(&self, _bucket: &str, _key: &str) -> Result<ObjectInfo, Error> {
        Err(error::unsupported(self.provider, "Info"))
    }

    async fn list_objects(&self, _input: &ListInput) -> Result<ListOutput, Error> {
        Err(error::unsupported(self.provider, "List"))
    }

    async fn put_object(&self, request: PutRequest<'_>) -> Result<(), Error> {
        let body = match request.body {
            PutBody::Bytes(bytes) => Body::from(bytes),
            PutBody::Path(path) => {
                let file = tokio::fs::File::open(path).await?;
                Body::wrap_stream(ReaderStream::new(file))
            }
        };

        let response = self
            .http
            .put(self.object_url(request.bucket, request.key))
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .header(CONTENT_TYPE, request.content_type)
            .header(CONTENT_LENGTH, request.content_length)
            .body(body)
            .send()
            .instrument(tracing::debug_span!("send-http-put"))
            .await?;

        if !response.status().is_success() {
            return Err(error::unexpected_status("upload", response).await);
        }
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str, destination: &Path) -> Result<u64, Error> {
        let response = self
            .http
            .get(self.object_url(bucket, key))
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .send()
            .instrument(tracing::debug_span!("send-http-get"))
            .await?;

        if response.status() != StatusCode::OK {
            return Err(error::unexpected_status("download", response).await);
        }

        // the destination is left in place if streaming the body fails
        let mut file = tokio::fs::File::create(destination).await?;
        let mut body = response.bytes_stream();
        let mut bytes_written = 0u64;
        while let Some(chunk) = body.try_next().await? {
            file.write_all(&chunk).await?;
            bytes_written += chunk.len() as u64;
        }
        file.flush().await?;

        Ok(bytes_written)
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), Error> {
        let response = self
            .http
            .delete(self.object_url(bucket, key))
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .send()
            .instrument(tracing::debug_span!("send-http-delete"))
            .await?;

        if !response.status().is_success() {
            return Err(error::unexpected_status("delete", response).await);
        }
        Ok(())
    }

    async fn presign_get(
        &self,
        _bucket: &str,
        _key: &str,
        _expires_in: Duration,
    ) -> Result<String, Error> {
        Err(error::unsupported(self.provider, "Presign"))
    }

    async fn presign_put(
        &self,
        _bucket: &str,
        _key: &str,
        _expires_in: Duration,
    ) -> Result<String, Error> {
        Err(error::unsupported(self.provider, "Presign"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;

    fn test_backend() -> DirectHttpBackend {
        let config = crate::Config::builder()
            .endpoint("storage.bunnycdn.com/")
            .access_key_id("unused")
            .secret_access_key("zone-password")
            .build()
            .unwrap();
        DirectHttpBackend::new(&config)
    }

    #[test]
    fn test_object_url() {
        let backend = test_backend();
        assert_eq!(
            "https://storage.bunnycdn.com/my-zone/photos/rabbit.jpg",
            backend.object_url("my-zone", "photos/rabbit.jpg")
        );
    }

    #[test]
    fn test_debug_hides_access_key() {
        let rendered = format!("{:?}", test_backend());
        assert!(!rendered.contains("zone-password"));
    }

    #[tokio::test]
    async fn test_unsupported_operations() {
        let backend = test_backend();
        assert!(!backend.supports_head());

        let err = backend.head_object("zone", "key").await.unwrap_err();
        assert_eq!(&ErrorKind::Unsupported, err.kind());

        let input = ListInput::builder().bucket("zone").build().unwrap();
        let err = backend.list_objects(&input).await.unwrap_err();
        assert_eq!(&ErrorKind::Unsupported, err.kind());

        let ttl = Duration::from_secs(60);
        let err = backend.presign_get("zone", "key", ttl).await.unwrap_err();
        assert_eq!(&ErrorKind::Unsupported, err.kind());
        let err = backend.presign_put("zone", "key", ttl).await.unwrap_err();
        assert_eq!(&ErrorKind::Unsupported, err.kind());
    }
}
