/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Error;
use crate::types::{UploadOptions, UploadSource};

use super::{UploadInputBuilder, UploadOutput};

/// Fluent builder for constructing a single object upload
#[derive(Debug)]
pub struct UploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadInputBuilder,
}

impl UploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Upload the object and verify its stored size where the provider allows it.
    pub async fn send(self) -> Result<UploadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::upload::Upload::orchestrate(self.handle, input).await
    }

    /// The bucket (or storage zone) to store the object in.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket (or storage zone) to store the object in.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket (or storage zone) to store the object in.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Key to store the object under.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key to store the object under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key to store the object under.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Where the object's bytes come from: a local path or an `http(s)://` URL.
    pub fn source(mut self, input: impl Into<UploadSource>) -> Self {
        self.inner = self.inner.source(input);
        self
    }

    /// Where the object's bytes come from.
    pub fn set_source(mut self, input: Option<UploadSource>) -> Self {
        self.inner = self.inner.set_source(input);
        self
    }

    /// Where the object's bytes come from.
    pub fn get_source(&self) -> &Option<UploadSource> {
        self.inner.get_source()
    }

    /// Add a header to send when fetching a remote source.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner = self.inner.header(name, value);
        self
    }

    /// Headers to send when fetching a remote source.
    pub fn set_headers(mut self, input: HashMap<String, String>) -> Self {
        self.inner = self.inner.set_headers(input);
        self
    }

    /// Headers to send when fetching a remote source.
    pub fn get_headers(&self) -> &HashMap<String, String> {
        self.inner.get_headers()
    }

    /// Content type to store the object with, instead of the inferred one.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }

    /// Content type to store the object with, instead of the inferred one.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_content_type(input);
        self
    }

    /// Content type to store the object with, instead of the inferred one.
    pub fn get_content_type(&self) -> &Option<String> {
        self.inner.get_content_type()
    }

    /// Replace all per-call options at once.
    pub fn options(mut self, input: UploadOptions) -> Self {
        self.inner = self.inner.options(input);
        self
    }
}

impl crate::operation::upload::input::UploadInputBuilder {
    /// Upload the object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<UploadOutput, Error> {
        let mut fluent_builder = client.upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
