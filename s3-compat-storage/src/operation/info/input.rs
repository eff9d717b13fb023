/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Request type for fetching the metadata of a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct InfoInput {
    pub(crate) bucket: String,
    pub(crate) key: String,
}

impl InfoInput {
    /// Creates a new builder-style object to manufacture [`InfoInput`](crate::operation::info::InfoInput).
    pub fn builder() -> InfoInputBuilder {
        InfoInputBuilder::default()
    }

    /// The bucket (or storage zone) containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the object.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A builder for [`InfoInput`](crate::operation::info::InfoInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct InfoInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl InfoInputBuilder {
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

    /// Key of the object.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs a [`InfoInput`](crate::operation::info::InfoInput).
    pub fn build(self) -> Result<InfoInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket is required"))?;
        let key = self
            .key
            .ok_or_else(|| BuildError::missing_field("key", "A key is required"))?;
        Ok(InfoInput { bucket, key })
    }
}
