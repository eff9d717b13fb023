/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::BACKBLAZE_MARKER;

/// Region used when none is given and none can be derived from the endpoint
pub(crate) const DEFAULT_REGION: &str = "auto";

/// Prefix `https://` unless the endpoint already carries an HTTP(S) scheme.
pub(crate) fn normalize(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_owned()
    } else {
        format!("https://{endpoint}")
    }
}

/// Resolve the signing region for a normalized endpoint.
///
/// An explicit, non-empty region is used as-is. Backblaze endpoints
/// (`https://s3.<region>.backblazeb2.com`) carry their region in the second
/// dot-separated segment. Everything else falls back to [`DEFAULT_REGION`].
pub(crate) fn resolve_region(endpoint: &str, region: Option<&str>) -> String {
    if let Some(region) = region.filter(|r| !r.is_empty()) {
        return region.to_owned();
    }

    if endpoint.contains(BACKBLAZE_MARKER) {
        if let Some(region) = endpoint.split('.').nth(1).filter(|r| !r.is_empty()) {
            return region.to_owned();
        }
    }

    DEFAULT_REGION.to_owned()
}
