/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};
use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::Instrument;

use super::{ObjectStore, PutBody, PutRequest};
use crate::error::{self, Error};
use crate::operation::list::{ListInput, ListOutput};
use crate::types::{ObjectInfo, PartSize, Provider};
use crate::MEBIBYTE;

/// Maximum number of parts that a single S3 multipart upload supports
const MAX_PARTS: u64 = 10_000;

/// Backend for every provider that speaks the S3 protocol
#[derive(Debug)]
pub(crate) struct S3Backend {
    provider: Provider,
    client: aws_sdk_s3::Client,
    multipart_threshold: u64,
    part_size: u64,
}

impl S3Backend {
    pub(crate) fn new(config: &crate::Config) -> Self {
        let multipart_threshold = match config.multipart_threshold() {
            PartSize::Auto => 16 * MEBIBYTE,
            PartSize::Target(explicit) => *explicit,
        };
        let part_size = match config.part_size() {
            PartSize::Auto => 8 * MEBIBYTE,
            PartSize::Target(explicit) => *explicit,
        };

        Self {
            provider: config.provider(),
            client: config.s3_client(),
            multipart_threshold,
            part_size,
        }
    }

    async fn put_single(&self, request: PutRequest<'_>) -> Result<(), Error> {
        let content_length: i64 = request.content_length.try_into().map_err(|_| {
            error::invalid_input(format!(
                "content_length:{} is invalid.",
                request.content_length
            ))
        })?;
        let body = match request.body {
            PutBody::Bytes(bytes) => ByteStream::from(bytes),
            PutBody::Path(path) => ByteStream::from_path(path).await?,
        };

        self.client
            .put_object()
            .bucket(request.bucket)
            .key(request.key)
            .content_length(content_length)
            .content_type(request.content_type)
            .body(body)
            .send()
            .instrument(tracing::debug_span!("send-put-object"))
            .await?;
        Ok(())
    }

    async fn put_multipart(&self, request: PutRequest<'_>) -> Result<(), Error> {
        let part_size = cmp::max(
            self.part_size,
            request.content_length.div_ceil(MAX_PARTS),
        );
        tracing::trace!("upload request using multipart upload with part size: {part_size} bytes");

        let mpu = self
            .client
            .create_multipart_upload()
            .bucket(request.bucket)
            .key(request.key)
            .content_type(request.content_type)
            .send()
            .instrument(tracing::debug_span!("send-create-multipart-upload"))
            .await?;
        let upload_id = mpu
            .upload_id()
            .ok_or_else(|| error::invalid_input("CreateMultipartUpload returned no upload id"))?
            .to_owned();
        tracing::trace!("multipart upload started with upload id: {upload_id}");

        let result = self
            .upload_parts_and_complete(&request, &upload_id, part_size)
            .await;

        if let Err(err) = &result {
            tracing::debug!("multipart upload {upload_id} failed, aborting: {err}");
            let abort = self
                .client
                .abort_multipart_upload()
                .bucket(request.bucket)
                .key(request.key)
                .upload_id(&upload_id)
                .send()
                .instrument(tracing::debug_span!("send-abort-multipart-upload"))
                .await;
            if let Err(abort_err) = abort {
                tracing::warn!("failed to abort multipart upload {upload_id}: {abort_err}");
            }
        }

        result
    }

    async fn upload_parts_and_complete(
        &self,
        request: &PutRequest<'_>,
        upload_id: &str,
        part_size: u64,
    ) -> Result<(), Error> {
        let mut reader = PartReader::open(&request.body).await?;
        let mut remaining = request.content_length;
        let mut part_number: i32 = 1;
        let mut completed_parts = Vec::new();

        while remaining > 0 {
            let len = cmp::min(part_size, remaining);
            let data = reader.next_part(len as usize).await?;

            let resp = self
                .client
                .upload_part()
                .bucket(request.bucket)
                .key(request.key)
                .upload_id(upload_id)
                .part_number(part_number)
                .content_length(len as i64)
                .body(ByteStream::from(data))
                .send()
                .instrument(tracing::debug_span!("send-upload-part", part_number))
                .await?;
            tracing::trace!("completed upload of part number {part_number} ({len} bytes)");

            completed_parts.push(
                CompletedPart::builder()
                    .part_number(part_number)
                    .set_e_tag(resp.e_tag)
                    .build(),
            );
            remaining -= len;
            part_number += 1;
        }

        self.client
            .complete_multipart_upload()
            .bucket(request.bucket)
            .key(request.key)
            .upload_id(upload_id)
            .multipart_upload(
                CompletedMultipartUpload::builder()
                    .set_parts(Some(completed_parts))
                    .build(),
            )
            .send()
            .instrument(tracing::debug_span!("send-complete-multipart-upload"))
            .await?;
        Ok(())
    }
}

/// Reads consecutive parts out of an upload body
enum PartReader {
    Bytes { data: Bytes, offset: usize },
    File(tokio::fs::File),
}

impl PartReader {
    async fn open(body: &PutBody) -> Result<Self, Error> {
        let reader = match body {
            PutBody::Bytes(data) => PartReader::Bytes {
                data: data.clone(),
                offset: 0,
            },
            PutBody::Path(path) => PartReader::File(tokio::fs::File::open(path).await?),
        };
        Ok(reader)
    }

    async fn next_part(&mut self, len: usize) -> Result<Bytes, Error> {
        match self {
            PartReader::Bytes { data, offset } => {
                let end = *offset + len;
                if end > data.len() {
                    return Err(error::integrity_failed(format!(
                        "upload body ended after {} bytes",
                        data.len()
                    )));
                }
                let part = data.slice(*offset..end);
                *offset = end;
                Ok(part)
            }
            PartReader::File(file) => {
                let mut buf = vec![0; len];
                file.read_exact(&mut buf).await?;
                Ok(Bytes::from(buf))
            }
        }
    }
}

#[async_trait]
impl ObjectStore for S3Backend {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn supports_head(&self) -> bool {
        true
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectInfo, Error> {
        let output = self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .instrument(tracing::debug_span!("send-head-object"))
            .await?;

        Ok(ObjectInfo {
            content_length: output
                .content_length()
                .and_then(|len| u64::try_from(len).ok())
                .unwrap_or_default(),
            content_type: output.content_type().map(str::to_owned),
            e_tag: output.e_tag().map(str::to_owned),
            last_modified: output.last_modified().cloned(),
            metadata: output.metadata().cloned().unwrap_or_default(),
        })
    }

    async fn list_objects(&self, input: &ListInput) -> Result<ListOutput, Error> {
        let output = self
            .client
            .list_objects_v2()
            .set_bucket(input.bucket.clone())
            .set_prefix(input.prefix.clone())
            .max_keys(input.max_keys())
            .set_continuation_token(input.continuation_token.clone())
            .send()
            .instrument(tracing::debug_span!("send-list-objects-v2"))
            .await?;

        let keys = output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_owned))
            .collect();
        let continuation_token = output
            .next_continuation_token()
            .filter(|token| !token.is_empty())
            .map(str::to_owned);

        Ok(ListOutput {
            keys,
            continuation_token,
        })
    }

    async fn put_object(&self, request: PutRequest<'_>) -> Result<(), Error> {
        if request.content_length < self.multipart_threshold {
            tracing::trace!(
                "upload request content size ({}) less than multipart threshold ({}); sending as single PutObject request",
                request.content_length,
                self.multipart_threshold
            );
            self.put_single(request).await
        } else {
            self.put_multipart(request).await
        }
    }

    async fn get_object(&self, bucket: &str, key: &str, destination: &Path) -> Result<u64, Error> {
        // the destination is created up front and left in place if the transfer fails
        let mut file = tokio::fs::File::create(destination).await?;

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .instrument(tracing::debug_span!("send-get-object"))
            .await?;

        let mut body = output.body;
        let mut bytes_written = 0u64;
        while let Some(chunk) = body.try_next().await? {
            file.write_all(&chunk).await?;
            bytes_written += chunk.len() as u64;
        }
        file.flush().await?;

        Ok(bytes_written)
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), Error> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .instrument(tracing::debug_span!("send-delete-object"))
            .await?;
        Ok(())
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, Error> {
        let presigned = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(PresigningConfig::expires_in(expires_in)?)
            .await?;
        Ok(presigned.uri().to_owned())
    }

    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, Error> {
        let presigned = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .presigned(PresigningConfig::expires_in(expires_in)?)
            .await?;
        Ok(presigned.uri().to_owned())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use aws_sdk_s3::operation::abort_multipart_upload::AbortMultipartUploadOutput;
    use aws_sdk_s3::operation::complete_multipart_upload::CompleteMultipartUploadOutput;
    use aws_sdk_s3::operation::create_multipart_upload::CreateMultipartUploadOutput;
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_sdk_s3::operation::upload_part::{UploadPartError, UploadPartOutput};
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;

    fn test_backend(client: aws_sdk_s3::Client, threshold: u64, part_size: u64) -> S3Backend {
        let config = crate::Config::builder()
            .endpoint("https://s3.us-east-1.amazonaws.com")
            .set_multipart_threshold(PartSize::Target(threshold))
            .set_target_part_size(PartSize::Target(part_size))
            .s3_client(client)
            .build()
            .unwrap();
        S3Backend::new(&config)
    }

    fn put_request(body: Bytes) -> PutRequest<'static> {
        PutRequest {
            bucket: "test-bucket",
            key: "test-key",
            content_length: body.len() as u64,
            body: PutBody::Bytes(body),
            content_type: "text/plain",
        }
    }

    #[tokio::test]
    async fn test_small_body_uses_put_object() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| {
                r.content_length() == Some(39) && r.content_type() == Some("text/plain")
            })
            .then_output(|| PutObjectOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);

        let backend = test_backend(client, 1024, 1024);
        let body = Bytes::from_static(b"every adolescent dog goes bonkers early");
        backend.put_object(put_request(body)).await.unwrap();
        assert_eq!(1, put_object.num_calls());
    }

    #[tokio::test]
    async fn test_large_body_uses_multipart_upload() {
        let create_mpu = mock!(aws_sdk_s3::Client::create_multipart_upload).then_output(|| {
            CreateMultipartUploadOutput::builder()
                .upload_id("test-upload")
                .build()
        });
        let upload_1 = mock!(aws_sdk_s3::Client::upload_part)
            .match_requests(|r| {
                r.upload_id() == Some("test-upload")
                    && r.part_number() == Some(1)
                    && r.content_length() == Some(30)
            })
            .then_output(|| UploadPartOutput::builder().e_tag("etag-1").build());
        let upload_2 = mock!(aws_sdk_s3::Client::upload_part)
            .match_requests(|r| r.part_number() == Some(2) && r.content_length() == Some(9))
            .then_output(|| UploadPartOutput::builder().e_tag("etag-2").build());
        let complete_mpu = mock!(aws_sdk_s3::Client::complete_multipart_upload)
            .match_requests(|r| {
                let parts = r.multipart_upload().map(|u| u.parts()).unwrap_or_default();
                r.upload_id() == Some("test-upload")
                    && parts.len() == 2
                    && parts[0].e_tag() == Some("etag-1")
                    && parts[1].e_tag() == Some("etag-2")
            })
            .then_output(|| CompleteMultipartUploadOutput::builder().build());

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&create_mpu, &upload_1, &upload_2, &complete_mpu]
        );

        let backend = test_backend(client, 10, 30);
        let body = Bytes::from_static(b"every adolescent dog goes bonkers early");
        backend.put_object(put_request(body)).await.unwrap();
        assert_eq!(1, complete_mpu.num_calls());
    }

    #[tokio::test]
    async fn test_failed_part_aborts_multipart_upload() {
        let create_mpu = mock!(aws_sdk_s3::Client::create_multipart_upload).then_output(|| {
            CreateMultipartUploadOutput::builder()
                .upload_id("test-upload")
                .build()
        });
        let upload_part = mock!(aws_sdk_s3::Client::upload_part).then_error(|| {
            UploadPartError::generic(ErrorMetadata::builder().code("InternalError").build())
        });
        let abort_mpu = mock!(aws_sdk_s3::Client::abort_multipart_upload)
            .match_requests(|r| r.upload_id() == Some("test-upload"))
            .then_output(|| AbortMultipartUploadOutput::builder().build());

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&create_mpu, &upload_part, &abort_mpu]
        );

        let backend = test_backend(client, 10, 30);
        let body = Bytes::from_static(b"every adolescent dog goes bonkers early");
        let err = backend.put_object(put_request(body)).await.unwrap_err();
        assert_eq!(&error::ErrorKind::Transport, err.kind());
        assert_eq!(1, abort_mpu.num_calls());
    }

    #[tokio::test]
    async fn test_multipart_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, vec![7u8; 25]).unwrap();

        let create_mpu = mock!(aws_sdk_s3::Client::create_multipart_upload).then_output(|| {
            CreateMultipartUploadOutput::builder()
                .upload_id("test-upload")
                .build()
        });
        let upload_part = mock!(aws_sdk_s3::Client::upload_part)
            .match_requests(|r| matches!(r.content_length(), Some(10) | Some(5)))
            .then_output(|| UploadPartOutput::builder().build());
        let complete_mpu = mock!(aws_sdk_s3::Client::complete_multipart_upload)
            .match_requests(|r| {
                r.multipart_upload()
                    .map(|u| u.parts().len() == 3)
                    .unwrap_or(false)
            })
            .then_output(|| CompleteMultipartUploadOutput::builder().build());

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::MatchAny,
            &[&create_mpu, &upload_part, &complete_mpu]
        );

        let backend = test_backend(client, 10, 10);
        backend
            .put_object(PutRequest {
                bucket: "test-bucket",
                key: "data.bin",
                body: PutBody::Path(path),
                content_length: 25,
                content_type: "application/octet-stream",
            })
            .await
            .unwrap();
        assert_eq!(3, upload_part.num_calls());
        assert_eq!(1, complete_mpu.num_calls());
    }
}
