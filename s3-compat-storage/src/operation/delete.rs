/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;

/// Request type for deleting a single object
pub use input::{DeleteInput, DeleteInputBuilder};

use std::sync::Arc;

use crate::error;

/// Operation struct for single object deletion
#[derive(Clone, Default, Debug)]
pub(crate) struct Delete;

impl Delete {
    /// Execute a single `Delete` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteInput,
    ) -> Result<(), error::Error> {
        let (bucket, key) = (input.bucket(), input.key());
        tracing::debug!(bucket, key, "deleting object");
        handle.backend.delete_object(bucket, key).await
    }
}
