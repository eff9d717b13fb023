/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;

/// Request type for object metadata lookups
pub use input::{InfoInput, InfoInputBuilder};

use std::sync::Arc;

use crate::error;
use crate::types::ObjectInfo;

/// Operation struct for single object metadata lookup
#[derive(Clone, Default, Debug)]
pub(crate) struct Info;

impl Info {
    /// Execute a single `Info` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: InfoInput,
    ) -> Result<ObjectInfo, error::Error> {
        let (bucket, key) = (input.bucket(), input.key());
        tracing::debug!(bucket, key, provider = %handle.backend.provider(), "fetching object info");

        let info = handle.backend.head_object(bucket, key).await?;

        tracing::debug!(bucket, key, size = info.content_length, "object info fetched");
        Ok(info)
    }
}

#[cfg(test)]
mod test {
    use aws_sdk_s3::operation::head_object::{HeadObjectError, HeadObjectOutput};
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;

    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_info() {
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .match_requests(|r| r.bucket() == Some("test-bucket") && r.key() == Some("rabbit.jpg"))
            .then_output(|| {
                HeadObjectOutput::builder()
                    .content_length(1024)
                    .content_type("image/jpeg")
                    .e_tag("\"etag\"")
                    .metadata("owner", "diskn")
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head_object]);

        let config = crate::Config::builder()
            .endpoint("abc123.r2.cloudflarestorage.com")
            .s3_client(client)
            .build()
            .unwrap();
        let storage = crate::Client::new(config);

        let info = storage
            .info()
            .bucket("test-bucket")
            .key("rabbit.jpg")
            .send()
            .await
            .unwrap();

        assert_eq!(1024, info.content_length());
        assert_eq!(Some("image/jpeg"), info.content_type());
        assert_eq!(Some("\"etag\""), info.e_tag());
        assert_eq!(Some(&"diskn".to_owned()), info.metadata().get("owner"));
    }

    #[tokio::test]
    async fn test_info_not_found() {
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .then_error(|| {
            HeadObjectError::generic(ErrorMetadata::builder().code("NotFound").build())
        });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head_object]);

        let config = crate::Config::builder()
            .endpoint("https://s3.amazonaws.com")
            .s3_client(client)
            .build()
            .unwrap();
        let storage = crate::Client::new(config);

        let err = storage
            .info()
            .bucket("test-bucket")
            .key("missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
    }

    #[tokio::test]
    async fn test_info_requires_key() {
        let config = crate::Config::builder()
            .endpoint("storage.bunnycdn.com")
            .build()
            .unwrap();
        let storage = crate::Client::new(config);

        let err = storage.info().bucket("zone").send().await.unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
