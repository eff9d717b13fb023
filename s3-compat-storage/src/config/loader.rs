/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;

use crate::config::Builder;
use crate::error::Error;
use crate::types::PartSize;
use crate::Config;

/// Environment variable holding the storage endpoint
pub(crate) const ENDPOINT_ENV: &str = "STORAGE_ENDPOINT";
/// Environment variable holding the region
pub(crate) const REGION_ENV: &str = "STORAGE_REGION";
/// Environment variable holding the access key id
pub(crate) const ACCESS_KEY_ID_ENV: &str = "STORAGE_ACCESS_KEY_ID";
/// Environment variable holding the secret access key
pub(crate) const SECRET_ACCESS_KEY_ENV: &str = "STORAGE_SECRET_ACCESS_KEY";

/// Load storage [`Config`] from the environment.
///
/// Values set on the loader take precedence. Anything left unset is read from
/// `STORAGE_ENDPOINT`, `STORAGE_REGION`, `STORAGE_ACCESS_KEY_ID` and
/// `STORAGE_SECRET_ACCESS_KEY`. For S3-compatible providers the shared SDK config
/// (retry and timeout settings, HTTP client) is loaded with [`aws_config`].
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// The storage endpoint. See [`Builder::endpoint`].
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.builder = self.builder.endpoint(endpoint);
        self
    }

    /// The region to sign requests for. See [`Builder::region`].
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.builder = self.builder.region(region);
        self
    }

    /// The access key id
    pub fn access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.builder = self.builder.access_key_id(access_key_id);
        self
    }

    /// The secret access key
    pub fn secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.builder = self.builder.secret_access_key(secret_access_key);
        self
    }

    /// Use path-style addressing for S3 requests. See [`Builder::force_path_style`].
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.builder = self.builder.force_path_style(force_path_style);
        self
    }

    /// Minimum object size that should trigger a multipart upload.
    ///
    /// The minimum part size is 5 MiB, any part size less than that will be rounded up.
    /// Default is [PartSize::Auto]
    pub fn multipart_threshold(mut self, threshold: PartSize) -> Self {
        self.builder = self.builder.multipart_threshold(threshold);
        self
    }

    /// The target size of each part when using a multipart upload to complete the request.
    ///
    /// Default is [PartSize::Auto]
    pub fn part_size(mut self, part_size: PartSize) -> Self {
        self.builder = self.builder.part_size(part_size);
        self
    }

    /// Set an explicit HTTP client for direct HTTP providers and remote upload sources.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.builder = self.builder.http_client(client);
        self
    }

    /// Load the configuration
    ///
    /// If fields have been overridden during loader construction, the override values will be
    /// used. Otherwise, the values are read from the environment.
    pub async fn load(self) -> Result<Config, Error> {
        self.load_with(|name| std::env::var(name).ok()).await
    }

    pub(crate) async fn load_with<F>(self, lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = self.builder;
        if builder.endpoint.is_none() {
            builder.endpoint = lookup(ENDPOINT_ENV);
        }
        if builder.region.is_none() {
            builder.region = lookup(REGION_ENV);
        }
        if builder.access_key_id.is_none() {
            builder.access_key_id = lookup(ACCESS_KEY_ID_ENV);
        }
        if builder.secret_access_key.is_none() {
            builder.secret_access_key = lookup(SECRET_ACCESS_KEY_ENV);
        }

        let mut config = builder.build()?;

        // direct HTTP providers never construct an S3 client
        if config.provider().is_s3_compatible() && config.s3_client.is_none() {
            let shared_config = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(config.region().to_owned()))
                .credentials_provider(config.credentials())
                .load()
                .await;
            config.sdk_config = Some(shared_config);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ErrorKind;
    use crate::types::Provider;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[tokio::test]
    async fn test_load_from_environment() {
        let config = ConfigLoader::default()
            .load_with(env(&[
                (ENDPOINT_ENV, "storage.bunnycdn.com"),
                (ACCESS_KEY_ID_ENV, "zone"),
                (SECRET_ACCESS_KEY_ENV, "password"),
            ]))
            .await
            .unwrap();

        assert_eq!("https://storage.bunnycdn.com", config.endpoint());
        assert_eq!(Provider::BunnyCdn, config.provider());
        assert_eq!("auto", config.region());
        assert_eq!("zone", config.access_key_id());
        assert_eq!("password", config.secret_access_key());
        assert!(config.sdk_config.is_none());
    }

    #[tokio::test]
    async fn test_loader_values_take_precedence() {
        let config = ConfigLoader::default()
            .endpoint("s3.us-west-004.backblazeb2.com")
            .access_key_id("explicit")
            .load_with(env(&[
                (ENDPOINT_ENV, "storage.bunnycdn.com"),
                (ACCESS_KEY_ID_ENV, "from-env"),
                (SECRET_ACCESS_KEY_ENV, "secret"),
            ]))
            .await
            .unwrap();

        assert_eq!(Provider::Backblaze, config.provider());
        assert_eq!("us-west-004", config.region());
        assert_eq!("explicit", config.access_key_id());
        assert_eq!("secret", config.secret_access_key());
        assert!(config.sdk_config.is_some());
    }

    #[tokio::test]
    async fn test_missing_endpoint_fails() {
        let err = ConfigLoader::default()
            .load_with(env(&[(ACCESS_KEY_ID_ENV, "key")]))
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::ConfigInvalid, err.kind());
    }
}
