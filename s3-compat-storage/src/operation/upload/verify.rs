/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::backend::ObjectStore;
use crate::error::{self, Error};

/// Read back the size of a freshly stored object and compare it with the source size.
///
/// Returns `Ok(false)` without any I/O when the backend has no metadata lookup.
/// A mismatch leaves the stored object in place.
pub(super) async fn stored_size(
    backend: &dyn ObjectStore,
    bucket: &str,
    key: &str,
    expected: u64,
) -> Result<bool, Error> {
    if !backend.supports_head() {
        tracing::debug!(
            bucket,
            key,
            provider = %backend.provider(),
            "provider has no metadata lookup, skipping upload verification"
        );
        return Ok(false);
    }

    let stored = backend.head_object(bucket, key).await?.content_length();
    if stored != expected {
        tracing::warn!(bucket, key, expected, stored, "stored size does not match source");
        return Err(error::integrity_failed(format!(
            "source is {expected} bytes but {stored} were stored"
        )));
    }

    tracing::debug!(bucket, key, size = stored, "upload verified");
    Ok(true)
}
