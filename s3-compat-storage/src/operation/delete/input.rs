/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Request type for deleting a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DeleteInput {
    pub(crate) bucket: String,
    pub(crate) key: String,
}

impl DeleteInput {
    /// Creates a new builder-style object to manufacture [`DeleteInput`](crate::operation::delete::DeleteInput).
    pub fn builder() -> DeleteInputBuilder {
        DeleteInputBuilder::default()
    }

    /// The bucket (or storage zone) containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the object to delete.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A builder for [`DeleteInput`](crate::operation::delete::DeleteInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct DeleteInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl DeleteInputBuilder {
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

    /// Key of the object to delete.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object to delete.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object to delete.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs a [`DeleteInput`](crate::operation::delete::DeleteInput).
    pub fn build(self) -> Result<DeleteInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket is required"))?;
        let key = self
            .key
            .ok_or_else(|| BuildError::missing_field("key", "A key is required"))?;
        Ok(DeleteInput { bucket, key })
    }
}
