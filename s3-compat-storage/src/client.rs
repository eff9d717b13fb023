/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::backend::{self, ObjectStore};
use crate::operation::presign::PresignMethod;
use crate::types::Provider;
use crate::Config;

/// Client for S3-compatible object storage.
///
/// Cloning a client is cheap; clones share the same backend.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations: the config and the backend chosen for its provider
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
    pub(crate) backend: Box<dyn ObjectStore>,
}

impl Client {
    /// Creates a new client from a storage config.
    ///
    /// The backend is picked from the provider classified when the config was built and never
    /// changes. For BunnyCDN storage no S3 client is constructed.
    pub fn new(config: Config) -> Client {
        let backend = backend::from_config(&config);
        tracing::debug!(provider = %config.provider(), backend = ?backend, "storage client created");
        let handle = Arc::new(Handle { config, backend });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Returns the provider the configured endpoint belongs to
    pub fn provider(&self) -> Provider {
        self.handle.backend.provider()
    }

    /// Fetch the metadata of a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`Info`](crate::operation::info::builders::InfoFluentBuilder) operation.
    ///
    /// Not supported by BunnyCDN storage.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_compat_storage::error::Error;
    ///
    /// async fn object_size(client: &s3_compat_storage::Client) -> Result<u64, Error> {
    ///     let info = client
    ///         .info()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .send()
    ///         .await?;
    ///     Ok(info.content_length())
    /// }
    /// ```
    pub fn info(&self) -> crate::operation::info::builders::InfoFluentBuilder {
        crate::operation::info::builders::InfoFluentBuilder::new(self.handle.clone())
    }

    /// List a single page of keys.
    ///
    /// At most 1000 keys are returned per page. Pass the returned continuation token to the
    /// next call to fetch the following page.
    ///
    /// Constructs a fluent builder for the
    /// [`List`](crate::operation::list::builders::ListFluentBuilder) operation.
    ///
    /// Not supported by BunnyCDN storage.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_compat_storage::error::Error;
    ///
    /// async fn all_keys(client: &s3_compat_storage::Client) -> Result<Vec<String>, Error> {
    ///     let mut keys = Vec::new();
    ///     let mut token = None;
    ///     loop {
    ///         let page = client
    ///             .list()
    ///             .bucket("my-bucket")
    ///             .prefix("photos/")
    ///             .set_continuation_token(token)
    ///             .send()
    ///             .await?;
    ///         token = page.continuation_token().map(str::to_owned);
    ///         keys.extend(page.into_keys());
    ///         if token.is_none() {
    ///             return Ok(keys);
    ///         }
    ///     }
    /// }
    /// ```
    pub fn list(&self) -> crate::operation::list::builders::ListFluentBuilder {
        crate::operation::list::builders::ListFluentBuilder::new(self.handle.clone())
    }

    /// Upload a single object from a local file or a remote URL.
    ///
    /// Sources of zero bytes are rejected before anything is sent. Where the provider offers a
    /// metadata lookup, the stored size is read back afterwards and compared with the source.
    ///
    /// Constructs a fluent builder for the
    /// [`Upload`](crate::operation::upload::builders::UploadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_compat_storage::error::Error;
    ///
    /// async fn mirror_image(client: &s3_compat_storage::Client) -> Result<(), Error> {
    ///     let output = client
    ///         .upload()
    ///         .bucket("my-bucket")
    ///         .key("images/logo.png")
    ///         .source("https://example.com/logo.png")
    ///         .header("Authorization", "Bearer token")
    ///         .send()
    ///         .await?;
    ///     assert_eq!("images/logo.png", output.key());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload(&self) -> crate::operation::upload::builders::UploadFluentBuilder {
        crate::operation::upload::builders::UploadFluentBuilder::new(self.handle.clone())
    }

    /// Download a single object into a local file.
    ///
    /// Constructs a fluent builder for the
    /// [`Download`](crate::operation::download::builders::DownloadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_compat_storage::error::Error;
    ///
    /// async fn get_object(client: &s3_compat_storage::Client) -> Result<(), Error> {
    ///     let output = client
    ///         .download()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .destination("/tmp/my-key")
    ///         .send()
    ///         .await?;
    ///     println!("wrote {} bytes", output.bytes_written());
    ///     Ok(())
    /// }
    /// ```
    pub fn download(&self) -> crate::operation::download::builders::DownloadFluentBuilder {
        crate::operation::download::builders::DownloadFluentBuilder::new(self.handle.clone())
    }

    /// Delete a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`Delete`](crate::operation::delete::builders::DeleteFluentBuilder) operation.
    pub fn delete(&self) -> crate::operation::delete::builders::DeleteFluentBuilder {
        crate::operation::delete::builders::DeleteFluentBuilder::new(self.handle.clone())
    }

    /// Issue a presigned URL for downloading an object.
    ///
    /// Constructs a fluent builder for the
    /// [`Presign`](crate::operation::presign::builders::PresignFluentBuilder) operation.
    ///
    /// Not supported by BunnyCDN storage.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use s3_compat_storage::error::Error;
    ///
    /// async fn share(client: &s3_compat_storage::Client) -> Result<String, Error> {
    ///     client
    ///         .presign_get()
    ///         .bucket("my-bucket")
    ///         .key("reports/q3.pdf")
    ///         .expires_in(Duration::from_secs(15 * 60))
    ///         .send()
    ///         .await
    /// }
    /// ```
    pub fn presign_get(&self) -> crate::operation::presign::builders::PresignFluentBuilder {
        crate::operation::presign::builders::PresignFluentBuilder::new(
            self.handle.clone(),
            PresignMethod::Get,
        )
    }

    /// Issue a presigned URL for uploading an object.
    ///
    /// Constructs a fluent builder for the
    /// [`Presign`](crate::operation::presign::builders::PresignFluentBuilder) operation.
    ///
    /// Not supported by BunnyCDN storage.
    pub fn presign_put(&self) -> crate::operation::presign::builders::PresignFluentBuilder {
        crate::operation::presign::builders::PresignFluentBuilder::new(
            self.handle.clone(),
            PresignMethod::Put,
        )
    }
}
