/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// A single page of keys
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOutput {
    pub(crate) keys: Vec<String>,
    pub(crate) continuation_token: Option<String>,
}

impl ListOutput {
    /// Keys in the order the provider returned them.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Consume the page, returning its keys.
    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }

    /// Token to pass to the next `list` call to continue where this page ended.
    ///
    /// `None` when this is the last page.
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }

    /// Whether more pages follow this one.
    pub fn has_more(&self) -> bool {
        self.continuation_token.is_some()
    }
}
