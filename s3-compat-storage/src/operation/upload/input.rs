/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_smithy_types::error::operation::BuildError;

use crate::types::{UploadOptions, UploadSource};

/// Request type for uploading a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct UploadInput {
    pub(crate) bucket: String,
    pub(crate) key: String,
    pub(crate) source: UploadSource,
    pub(crate) options: UploadOptions,
}

impl UploadInput {
    /// Creates a new builder-style object to manufacture [`UploadInput`](crate::operation::upload::UploadInput).
    pub fn builder() -> UploadInputBuilder {
        UploadInputBuilder::default()
    }

    /// The bucket (or storage zone) to store the object in.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key to store the object under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Where the object's bytes come from.
    pub fn source(&self) -> &UploadSource {
        &self.source
    }

    /// Per-call options.
    pub fn options(&self) -> &UploadOptions {
        &self.options
    }
}

/// A builder for [`UploadInput`](crate::operation::upload::UploadInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct UploadInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) source: Option<UploadSource>,
    pub(crate) options: UploadOptions,
}

impl UploadInputBuilder {
    /// The bucket (or storage zone) to store the object in.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket (or storage zone) to store the object in.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket (or storage zone) to store the object in.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key to store the object under.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key to store the object under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key to store the object under.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Where the object's bytes come from: a local path or an `http(s)://` URL.
    ///
    /// This field is required.
    pub fn source(mut self, input: impl Into<UploadSource>) -> Self {
        self.source = Some(input.into());
        self
    }

    /// Where the object's bytes come from.
    pub fn set_source(mut self, input: Option<UploadSource>) -> Self {
        self.source = input;
        self
    }

    /// Where the object's bytes come from.
    pub fn get_source(&self) -> &Option<UploadSource> {
        &self.source
    }

    /// Add a header to send when fetching a remote source.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.insert(name.into(), value.into());
        self
    }

    /// Headers to send when fetching a remote source.
    pub fn set_headers(mut self, input: HashMap<String, String>) -> Self {
        self.options.headers = input;
        self
    }

    /// Headers to send when fetching a remote source.
    pub fn get_headers(&self) -> &HashMap<String, String> {
        &self.options.headers
    }

    /// Content type to store the object with, instead of the inferred one.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.options.content_type = Some(input.into());
        self
    }

    /// Content type to store the object with, instead of the inferred one.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.options.content_type = input;
        self
    }

    /// Content type to store the object with, instead of the inferred one.
    pub fn get_content_type(&self) -> &Option<String> {
        &self.options.content_type
    }

    /// Replace all per-call options at once.
    pub fn options(mut self, input: UploadOptions) -> Self {
        self.options = input;
        self
    }

    /// Consumes the builder and constructs a [`UploadInput`](crate::operation::upload::UploadInput).
    pub fn build(self) -> Result<UploadInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket is required"))?;
        let key = self
            .key
            .ok_or_else(|| BuildError::missing_field("key", "A key is required"))?;
        let source = self
            .source
            .ok_or_else(|| BuildError::missing_field("source", "A source path or URL is required"))?;

        Ok(UploadInput {
            bucket,
            key,
            source,
            options: self.options,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_source_kind_from_string() {
        let input = UploadInput::builder()
            .bucket("b")
            .key("k")
            .source("https://example.com/cat.jpg")
            .header("Authorization", "Bearer token")
            .build()
            .unwrap();
        assert_eq!(Some("https://example.com/cat.jpg"), input.source().as_url());
        assert_eq!(
            Some(&"Bearer token".to_owned()),
            input.options().headers().get("Authorization")
        );

        let input = UploadInput::builder()
            .bucket("b")
            .key("k")
            .source("/tmp/cat.jpg")
            .build()
            .unwrap();
        assert!(input.source().as_path().is_some());
    }

    #[test]
    fn test_missing_fields() {
        assert!(UploadInput::builder().key("k").source("f").build().is_err());
        assert!(UploadInput::builder().bucket("b").source("f").build().is_err());
        assert!(UploadInput::builder().bucket("b").key("k").build().is_err());
    }
}
