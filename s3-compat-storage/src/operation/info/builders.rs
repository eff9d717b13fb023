/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::ObjectInfo;

use super::InfoInputBuilder;

/// Fluent builder for constructing a single object metadata lookup
#[derive(Debug)]
pub struct InfoFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: InfoInputBuilder,
}

impl InfoFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch the metadata of the object
    pub async fn send(self) -> Result<ObjectInfo, Error> {
        let input = self.inner.build()?;
        crate::operation::info::Info::orchestrate(self.handle, input).await
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

    /// Key of the object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the object.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }
}

impl crate::operation::info::input::InfoInputBuilder {
    /// Fetch the metadata of the object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<ObjectInfo, Error> {
        let mut fluent_builder = client.info();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
