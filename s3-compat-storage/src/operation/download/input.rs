/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use aws_smithy_types::error::operation::BuildError;

/// Request type for downloading a single object to a local file
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DownloadInput {
    pub(crate) bucket: String,
    pub(crate) key: String,
    pub(crate) destination: PathBuf,
}

impl DownloadInput {
    /// Creates a new builder-style object to manufacture [`DownloadInput`](crate::operation::download::DownloadInput).
    pub fn builder() -> DownloadInputBuilder {
        DownloadInputBuilder::default()
    }

    /// The bucket (or storage zone) containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the object to download.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Local file the object is written to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// A builder for [`DownloadInput`](crate::operation::download::DownloadInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct DownloadInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) destination: Option<PathBuf>,
}

impl DownloadInputBuilder {
    /// The bucket (or storage zone) containing the object.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket (or storage zone) containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket (or storage zone) containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key of the object to download.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object to download.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object to download.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Local file the object is written to. Created or truncated.
    ///
    /// This field is required.
    pub fn destination(mut self, input: impl AsRef<Path>) -> Self {
        self.destination = Some(input.as_ref().to_path_buf());
        self
    }

    /// Local file the object is written to.
    pub fn set_destination(mut self, input: Option<PathBuf>) -> Self {
        self.destination = input;
        self
    }

    /// Local file the object is written to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        &self.destination
    }

    /// Consumes the builder and constructs a [`DownloadInput`](crate::operation::download::DownloadInput).
    pub fn build(self) -> Result<DownloadInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket is required"))?;
        let key = self
            .key
            .ok_or_else(|| BuildError::missing_field("key", "A key is required"))?;
        let destination = self.destination.ok_or_else(|| {
            BuildError::missing_field("destination", "A destination path is required")
        })?;

        Ok(DownloadInput {
            bucket,
            key,
            destination,
        })
    }
}
