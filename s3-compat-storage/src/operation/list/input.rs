/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;

use aws_smithy_types::error::operation::BuildError;

use crate::MAX_LIST_KEYS;

/// Request type for listing a single page of keys
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ListInput {
    pub(crate) bucket: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) max_keys: Option<usize>,
    pub(crate) continuation_token: Option<String>,
}

impl ListInput {
    /// Creates a new builder-style object to manufacture [`ListInput`](crate::operation::list::ListInput).
    pub fn builder() -> ListInputBuilder {
        ListInputBuilder::default()
    }

    /// The bucket to list.
    pub fn bucket(&self) -> &str {
        self.bucket.as_deref().unwrap_or_default()
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The number of keys requested for this page.
    ///
    /// Never more than 1000, regardless of what was asked for. Defaults to 1000.
    pub fn max_keys(&self) -> i32 {
        match self.max_keys {
            Some(requested) => cmp::min(requested, MAX_LIST_KEYS as usize) as i32,
            None => MAX_LIST_KEYS,
        }
    }

    /// The token of a previous page to resume listing from.
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }
}

/// A builder for [`ListInput`](crate::operation::list::ListInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct ListInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) max_keys: Option<usize>,
    pub(crate) continuation_token: Option<String>,
}

impl ListInputBuilder {
    /// The bucket to list.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to list.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to list.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.prefix = input;
        self
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn get_prefix(&self) -> &Option<String> {
        &self.prefix
    }

    /// Maximum number of keys to return. Values above 1000 are clamped to 1000.
    pub fn max_keys(mut self, input: usize) -> Self {
        self.max_keys = Some(input);
        self
    }

    /// Maximum number of keys to return. Values above 1000 are clamped to 1000.
    pub fn set_max_keys(mut self, input: Option<usize>) -> Self {
        self.max_keys = input;
        self
    }

    /// Maximum number of keys to return.
    pub fn get_max_keys(&self) -> &Option<usize> {
        &self.max_keys
    }

    /// Resume listing from the token returned with a previous page.
    pub fn continuation_token(mut self, input: impl Into<String>) -> Self {
        self.continuation_token = Some(input.into());
        self
    }

    /// Resume listing from the token returned with a previous page.
    pub fn set_continuation_token(mut self, input: Option<String>) -> Self {
        self.continuation_token = input;
        self
    }

    /// Resume listing from the token returned with a previous page.
    pub fn get_continuation_token(&self) -> &Option<String> {
        &self.continuation_token
    }

    /// Consumes the builder and constructs a [`ListInput`](crate::operation::list::ListInput).
    pub fn build(self) -> Result<ListInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        Ok(ListInput {
            bucket: self.bucket,
            prefix: self.prefix,
            max_keys: self.max_keys,
            // an empty token means "start from the beginning"
            continuation_token: self.continuation_token.filter(|token| !token.is_empty()),
        })
    }
}
