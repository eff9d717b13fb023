/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{ListInputBuilder, ListOutput};

/// Fluent builder for listing a single page of keys
#[derive(Debug)]
pub struct ListFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListInputBuilder,
}

impl ListFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch one page of keys
    pub async fn send(self) -> Result<ListOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::list::List::orchestrate(self.handle, input).await
    }

    /// The bucket to list.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket to list.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to list.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.prefix(input);
        self
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_prefix(input);
        self
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn get_prefix(&self) -> &Option<String> {
        self.inner.get_prefix()
    }

    /// Maximum number of keys to return. Values above 1000 are clamped to 1000.
    pub fn max_keys(mut self, input: usize) -> Self {
        self.inner = self.inner.max_keys(input);
        self
    }

    /// Maximum number of keys to return. Values above 1000 are clamped to 1000.
    pub fn set_max_keys(mut self, input: Option<usize>) -> Self {
        self.inner = self.inner.set_max_keys(input);
        self
    }

    /// Maximum number of keys to return.
    pub fn get_max_keys(&self) -> &Option<usize> {
        self.inner.get_max_keys()
    }

    /// Resume listing from the token returned with a previous page.
    pub fn continuation_token(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.continuation_token(input);
        self
    }

    /// Resume listing from the token returned with a previous page.
    pub fn set_continuation_token(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_continuation_token(input);
        self
    }

    /// Resume listing from the token returned with a previous page.
    pub fn get_continuation_token(&self) -> &Option<String> {
        self.inner.get_continuation_token()
    }
}

impl crate::operation::list::input::ListInputBuilder {
    /// List one page of keys with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<ListOutput, Error> {
        let mut fluent_builder = client.list();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
