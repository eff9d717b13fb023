/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;

use super::{PresignInputBuilder, PresignMethod};

/// Fluent builder for issuing a presigned `GET` or `PUT` URL
#[derive(Debug)]
pub struct PresignFluentBuilder {
    handle: Arc<crate::client::Handle>,
    method: PresignMethod,
    inner: PresignInputBuilder,
}

impl PresignFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>, method: PresignMethod) -> Self {
        Self {
            handle,
            method,
            inner: ::std::default::Default::default(),
        }
    }

    /// Issue the presigned URL
    pub async fn send(self) -> Result<String, Error> {
        let input = self.inner.build()?;
        crate::operation::presign::Presign::orchestrate(self.handle, self.method, input).await
    }

    /// The bucket the URL grants access to.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket the URL grants access to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket the URL grants access to.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// The key the URL grants access to.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// The key the URL grants access to.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The key the URL grants access to.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// How long the URL stays valid. At most one week.
    pub fn expires_in(mut self, input: Duration) -> Self {
        self.inner = self.inner.expires_in(input);
        self
    }

    /// How long the URL stays valid.
    pub fn set_expires_in(mut self, input: Option<Duration>) -> Self {
        self.inner = self.inner.set_expires_in(input);
        self
    }

    /// How long the URL stays valid.
    pub fn get_expires_in(&self) -> &Option<Duration> {
        self.inner.get_expires_in()
    }
}
