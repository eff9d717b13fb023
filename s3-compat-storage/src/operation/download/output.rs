/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

/// Result of a completed download
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadOutput {
    pub(crate) destination: PathBuf,
    pub(crate) bytes_written: u64,
}

impl DownloadOutput {
    /// The file the object was written to
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Number of bytes written to the destination
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
