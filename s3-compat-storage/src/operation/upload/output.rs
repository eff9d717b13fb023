/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Result of a completed upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadOutput {
    pub(crate) bucket: String,
    pub(crate) key: String,
    pub(crate) content_length: u64,
    pub(crate) content_type: String,
    pub(crate) verified: bool,
}

impl UploadOutput {
    /// The bucket (or storage zone) the object was stored in
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key the object was stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Size of the source in bytes
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// The content type the object was stored with
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Whether the stored size was read back and matched the source.
    ///
    /// `false` for providers that offer no metadata lookup; the upload was accepted on its
    /// response status alone.
    pub fn verified(&self) -> bool {
        self.verified
    }
}
