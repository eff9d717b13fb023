/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

/// Request type for downloads
pub use input::{DownloadInput, DownloadInputBuilder};
/// Response type for downloads
pub use output::DownloadOutput;

use std::sync::Arc;

use crate::error;

/// Operation struct for single object download
#[derive(Clone, Default, Debug)]
pub(crate) struct Download;

impl Download {
    /// Execute a single `Download` operation
    ///
    /// The destination file is created or truncated. If the transfer fails after that the
    /// partially written file is left behind.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DownloadInput,
    ) -> Result<DownloadOutput, error::Error> {
        tracing::debug!(
            bucket = input.bucket(),
            key = input.key(),
            destination = %input.destination().display(),
            "downloading object"
        );

        let bytes_written = handle
            .backend
            .get_object(&input.bucket, &input.key, &input.destination)
            .await?;

        tracing::debug!(bytes_written, "download complete");
        Ok(DownloadOutput {
            destination: input.destination,
            bytes_written,
        })
    }
}
