/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use aws_smithy_types::error::operation::BuildError;

/// Request type for issuing a presigned URL
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PresignInput {
    pub(crate) bucket: String,
    pub(crate) key: String,
    pub(crate) expires_in: Duration,
}

impl PresignInput {
    /// Creates a new builder-style object to manufacture [`PresignInput`](crate::operation::presign::PresignInput).
    pub fn builder() -> PresignInputBuilder {
        PresignInputBuilder::default()
    }

    /// The bucket the URL grants access to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key the URL grants access to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How long the URL stays valid.
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }
}

/// A builder for [`PresignInput`](crate::operation::presign::PresignInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct PresignInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) expires_in: Option<Duration>,
}

impl PresignInputBuilder {
    /// The bucket the URL grants access to.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket the URL grants access to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket the URL grants access to.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// The key the URL grants access to.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key the URL grants access to.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The key the URL grants access to.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// How long the URL stays valid. At most one week.
    ///
    /// This field is required.
    pub fn expires_in(mut self, input: Duration) -> Self {
        self.expires_in = Some(input);
        self
    }

    /// How long the URL stays valid.
    pub fn set_expires_in(mut self, input: Option<Duration>) -> Self {
        self.expires_in = input;
        self
    }

    /// How long the URL stays valid.
    pub fn get_expires_in(&self) -> &Option<Duration> {
        &self.expires_in
    }

    /// Consumes the builder and constructs a [`PresignInput`](crate::operation::presign::PresignInput).
    pub fn build(self) -> Result<PresignInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket is required"))?;
        let key = self
            .key
            .ok_or_else(|| BuildError::missing_field("key", "A key is required"))?;
        let expires_in = self.expires_in.ok_or_else(|| {
            BuildError::missing_field("expires_in", "An expiration duration is required")
        })?;

        Ok(PresignInput {
            bucket,
            key,
            expires_in,
        })
    }
}
