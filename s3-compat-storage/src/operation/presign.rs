/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;

/// Request type for presigned URL issuance
pub use input::{PresignInput, PresignInputBuilder};

use std::sync::Arc;

use crate::error;

/// Which request a presigned URL authorizes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PresignMethod {
    Get,
    Put,
}

/// Operation struct for presigned URL issuance
#[derive(Clone, Default, Debug)]
pub(crate) struct Presign;

impl Presign {
    /// Execute a single `Presign` operation, returning the presigned URL
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        method: PresignMethod,
        input: PresignInput,
    ) -> Result<String, error::Error> {
        let (bucket, key, expires_in) = (input.bucket(), input.key(), input.expires_in());
        tracing::debug!(bucket, key, ?method, ?expires_in, "presigning request");

        match method {
            PresignMethod::Get => handle.backend.presign_get(bucket, key, expires_in).await,
            PresignMethod::Put => handle.backend.presign_put(bucket, key, expires_in).await,
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use crate::error::ErrorKind;

    fn storage() -> crate::Client {
        let config = crate::Config::builder()
            .endpoint("s3.us-west-004.backblazeb2.com")
            .access_key_id("AKIDEXAMPLE")
            .secret_access_key("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
            .force_path_style(true)
            .build()
            .unwrap();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_presign_get() {
        let url = storage()
            .presign_get()
            .bucket("test-bucket")
            .key("reports/q3.pdf")
            .expires_in(Duration::from_secs(600))
            .send()
            .await
            .unwrap();

        assert!(url.starts_with("https://s3.us-west-004.backblazeb2.com/test-bucket/reports/q3.pdf?"));
        assert!(url.contains("X-Amz-Expires=600"));
        assert!(url.contains("X-Amz-Signature="));
        assert!(url.contains("us-west-004"));
    }

    #[tokio::test]
    async fn test_presign_put() {
        let url = storage()
            .presign_put()
            .bucket("test-bucket")
            .key("uploads/new.bin")
            .expires_in(Duration::from_secs(60))
            .send()
            .await
            .unwrap();

        assert!(url.starts_with("https://s3.us-west-004.backblazeb2.com/test-bucket/uploads/new.bin?"));
        assert!(url.contains("X-Amz-Expires=60"));
    }

    #[tokio::test]
    async fn test_presign_rejects_excessive_ttl() {
        let err = storage()
            .presign_get()
            .bucket("test-bucket")
            .key("k")
            .expires_in(Duration::from_secs(8 * 24 * 60 * 60))
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[tokio::test]
    async fn test_expires_in_is_required() {
        let err = storage()
            .presign_get()
            .bucket("test-bucket")
            .key("k")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
