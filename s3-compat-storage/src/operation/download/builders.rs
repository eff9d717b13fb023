/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Error;

use super::{DownloadInputBuilder, DownloadOutput};

/// Fluent builder for constructing a single object download
#[derive(Debug)]
pub struct DownloadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DownloadInputBuilder,
}

impl DownloadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Download the object into the destination file
    pub async fn send(self) -> Result<DownloadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::download::Download::orchestrate(self.handle, input).await
    }

    /// The bucket (or storage zone) containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket (or storage zone) containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket (or storage zone) containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Key of the object to download.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the object to download.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the object to download.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Local file the object is written to. Created or truncated.
    pub fn destination(mut self, input: impl AsRef<Path>) -> Self {
        self.inner = self.inner.destination(input);
        self
    }

    /// Local file the object is written to.
    pub fn set_destination(mut self, input: Option<PathBuf>) -> Self {
        self.inner = self.inner.set_destination(input);
        self
    }

    /// Local file the object is written to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        self.inner.get_destination()
    }
}

impl crate::operation::download::input::DownloadInputBuilder {
    /// Download the object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<DownloadOutput, Error> {
        let mut fluent_builder = client.download();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
