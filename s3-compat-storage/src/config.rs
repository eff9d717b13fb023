/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;
use std::fmt;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_types::SdkConfig;

use crate::error::{self, ErrorKind};
use crate::types::{PartSize, Provider};
use crate::MEBIBYTE;

pub(crate) mod endpoint;
pub(crate) mod loader;

/// Minimum upload part size in bytes
pub(crate) const MIN_MULTIPART_PART_SIZE_BYTES: u64 = 5 * MEBIBYTE;

const CREDENTIALS_PROVIDER_NAME: &str = "s3-compat-storage";

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Clone)]
pub struct Config {
    endpoint: String,
    region: String,
    access_key_id: String,
    secret_access_key: String,
    provider: Provider,
    force_path_style: bool,
    multipart_threshold: PartSize,
    target_part_size: PartSize,
    sdk_config: Option<SdkConfig>,
    s3_client: Option<aws_sdk_s3::Client>,
    http_client: reqwest::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The normalized endpoint, always carrying an `http://` or `https://` scheme
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The resolved region (`auto` unless given or derived from a Backblaze endpoint)
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The access key id used to sign S3 requests
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The secret key. Signs S3 requests, or is sent verbatim as the `AccessKey` header
    /// for direct HTTP providers.
    pub(crate) fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// The provider classified from the endpoint
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Whether S3 requests use path-style addressing (`{endpoint}/{bucket}/{key}`)
    pub fn force_path_style(&self) -> bool {
        self.force_path_style
    }

    /// Returns a reference to the multipart upload threshold part size
    pub fn multipart_threshold(&self) -> &PartSize {
        &self.multipart_threshold
    }

    /// Returns a reference to the target part size to use for multipart uploads
    pub fn part_size(&self) -> &PartSize {
        &self.target_part_size
    }

    /// The HTTP client used for direct HTTP providers and remote upload sources.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Build the Amazon S3 client for this configuration.
    ///
    /// An explicitly configured client is returned as-is. Otherwise the client is derived
    /// from the shared SDK config (if one was loaded) with the endpoint, region and static
    /// credentials of this configuration layered on top.
    pub(crate) fn s3_client(&self) -> aws_sdk_s3::Client {
        if let Some(client) = &self.s3_client {
            return client.clone();
        }

        let builder = match &self.sdk_config {
            Some(sdk_config) => aws_sdk_s3::config::Builder::from(sdk_config),
            None => aws_sdk_s3::config::Builder::new().behavior_version(BehaviorVersion::latest()),
        };

        let s3_config = builder
            .endpoint_url(&self.endpoint)
            .region(Region::new(self.region.clone()))
            .credentials_provider(self.credentials())
            .force_path_style(self.force_path_style)
            .build();

        aws_sdk_s3::Client::from_conf(s3_config)
    }

    pub(crate) fn credentials(&self) -> Credentials {
        Credentials::new(
            &self.access_key_id,
            &self.secret_access_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("provider", &self.provider)
            .field("force_path_style", &self.force_path_style)
            .field("multipart_threshold", &self.multipart_threshold)
            .field("target_part_size", &self.target_part_size)
            .field("sdk_config", &self.sdk_config.is_some())
            .field("s3_client", &self.s3_client.is_some())
            .finish()
    }
}

/// Fluent style builder for [Config]
#[derive(Clone, Default)]
pub struct Builder {
    endpoint: Option<String>,
    region: Option<String>,
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    force_path_style: bool,
    multipart_threshold_part_size: PartSize,
    target_part_size: PartSize,
    sdk_config: Option<SdkConfig>,
    s3_client: Option<aws_sdk_s3::Client>,
    http_client: Option<reqwest::Client>,
}

impl Builder {
    /// The storage endpoint, e.g. `<account-id>.r2.cloudflarestorage.com`,
    /// `s3.<region>.backblazeb2.com` or `storage.bunnycdn.com`.
    ///
    /// `https://` is prepended when no scheme is given. Required.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// The region to sign requests for.
    ///
    /// When unset, Backblaze endpoints use the region embedded in the endpoint and every
    /// other provider uses `auto`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// The access key id
    pub fn access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// The secret access key
    pub fn secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Use path-style addressing for S3 requests instead of virtual-hosted buckets.
    ///
    /// Default is `false`.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Minimum object size that should trigger a multipart upload.
    ///
    /// The minimum part size is 5 MiB, any part size less than that will be rounded up.
    /// Default is [PartSize::Auto]
    pub fn multipart_threshold(self, threshold: PartSize) -> Self {
        let threshold = match threshold {
            PartSize::Target(part_size) => {
                PartSize::Target(cmp::max(part_size, MIN_MULTIPART_PART_SIZE_BYTES))
            }
            tps => tps,
        };

        self.set_multipart_threshold(threshold)
    }

    /// The target size of each part when using a multipart upload to complete the request.
    ///
    /// When a request's content length is less than [`multipart_threshold`],
    /// this setting is ignored and a single [`PutObject`] request will be made instead.
    ///
    /// Default is [PartSize::Auto]
    ///
    /// [`multipart_threshold`]: method@Self::multipart_threshold
    /// [`PutObject`]: https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html
    pub fn part_size(self, part_size: PartSize) -> Self {
        let part_size = match part_size {
            PartSize::Target(part_size) => {
                PartSize::Target(cmp::max(part_size, MIN_MULTIPART_PART_SIZE_BYTES))
            }
            tps => tps,
        };

        self.set_target_part_size(part_size)
    }

    /// Minimum object size that should trigger a multipart upload.
    ///
    /// NOTE: This does not validate the setting and is meant for internal use only.
    pub(crate) fn set_multipart_threshold(mut self, threshold: PartSize) -> Self {
        self.multipart_threshold_part_size = threshold;
        self
    }

    /// Target part size for a multipart upload.
    ///
    /// NOTE: This does not validate the setting and is meant for internal use only.
    pub(crate) fn set_target_part_size(mut self, part_size: PartSize) -> Self {
        self.target_part_size = part_size;
        self
    }

    /// Shared SDK config to derive the S3 client from (retry, timeouts, HTTP client, ...).
    ///
    /// The endpoint, region and credentials of this builder always take precedence.
    pub fn sdk_config(mut self, sdk_config: SdkConfig) -> Self {
        self.sdk_config = Some(sdk_config);
        self
    }

    /// Set an explicit S3 client to use.
    ///
    /// The client is used as-is: endpoint, region and credentials of this builder are not
    /// applied to it.
    pub fn s3_client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.s3_client = Some(client);
        self
    }

    /// Set an explicit HTTP client for direct HTTP providers and remote upload sources.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`] when no endpoint was given.
    pub fn build(self) -> Result<Config, error::Error> {
        let endpoint = match self.endpoint {
            Some(endpoint) if !endpoint.is_empty() => endpoint::normalize(&endpoint),
            _ => return Err(error::invalid_config(
                "missing endpoint: <account-id>.r2.cloudflarestorage.com or s3.<region>.backblazeb2.com or storage.bunnycdn.com",
            )),
        };
        let region = endpoint::resolve_region(&endpoint, self.region.as_deref());
        let provider = Provider::classify(&endpoint);

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .build()
                .map_err(error::from_kind(ErrorKind::ConfigInvalid))?,
        };

        tracing::debug!(%endpoint, %region, %provider, "storage client configured");

        Ok(Config {
            endpoint,
            region,
            access_key_id: self.access_key_id.unwrap_or_default(),
            secret_access_key: self.secret_access_key.unwrap_or_default(),
            provider,
            force_path_style: self.force_path_style,
            multipart_threshold: self.multipart_threshold_part_size,
            target_part_size: self.target_part_size,
            sdk_config: self.sdk_config,
            s3_client: self.s3_client,
            http_client,
        })
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "** redacted **"),
            )
            .field("force_path_style", &self.force_path_style)
            .field("multipart_threshold", &self.multipart_threshold_part_size)
            .field("target_part_size", &self.target_part_size)
            .finish()
    }
}
