/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::DeleteInputBuilder;

/// Fluent builder for constructing a single object deletion
#[derive(Debug)]
pub struct DeleteFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeleteInputBuilder,
}

impl DeleteFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Delete the object
    pub async fn send(self) -> Result<(), Error> {
        let input = self.inner.build()?;
        crate::operation::delete::Delete::orchestrate(self.handle, input).await
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

    /// Key of the object to delete.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the object to delete.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the object to delete.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }
}

impl crate::operation::delete::input::DeleteInputBuilder {
    /// Delete the object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<(), Error> {
        let mut fluent_builder = client.delete();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
