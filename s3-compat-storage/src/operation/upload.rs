/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;
mod verify;

/// Request type for uploads
pub use input::{UploadInput, UploadInputBuilder};
/// Response type for uploads
pub use output::UploadOutput;

use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::Instrument;

use crate::backend::{PutBody, PutRequest};
use crate::error;
use crate::types::{UploadOptions, UploadSource};

/// Content type used when nothing else is known about the object
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `Upload` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: UploadInput,
    ) -> Result<UploadOutput, error::Error> {
        let source = resolve_source(&handle, &input.source, &input.options).await?;

        if source.content_length == 0 {
            return Err(error::integrity_failed(format!(
                "source {} is empty (0 bytes)",
                input.source
            )));
        }

        let content_type = content_type_for(
            &input.key,
            input.options.content_type(),
            source.content_type.as_deref(),
        );

        tracing::debug!(
            bucket = %input.bucket,
            key = %input.key,
            content_length = source.content_length,
            %content_type,
            "uploading object"
        );

        handle
            .backend
            .put_object(PutRequest {
                bucket: &input.bucket,
                key: &input.key,
                body: source.body,
                content_length: source.content_length,
                content_type: &content_type,
            })
            .await?;

        let verified = verify::stored_size(
            handle.backend.as_ref(),
            &input.bucket,
            &input.key,
            source.content_length,
        )
        .await?;

        Ok(UploadOutput {
            bucket: input.bucket,
            key: input.key,
            content_length: source.content_length,
            content_type,
            verified,
        })
    }
}

/// The bytes of an upload along with what is known about them up front
#[derive(Debug)]
struct ResolvedSource {
    body: PutBody,
    content_length: u64,
    content_type: Option<String>,
}

async fn resolve_source(
    handle: &crate::client::Handle,
    source: &UploadSource,
    options: &UploadOptions,
) -> Result<ResolvedSource, error::Error> {
    match source {
        UploadSource::Path(path) => {
            let metadata = tokio::fs::metadata(path).await?;
            if !metadata.is_file() {
                return Err(error::invalid_input(format!(
                    "{} is not a file",
                    path.display()
                )));
            }
            Ok(ResolvedSource {
                body: PutBody::Path(path.clone()),
                content_length: metadata.len(),
                content_type: None,
            })
        }
        UploadSource::Url(url) => {
            let mut request = handle.config.http_client().get(url);
            for (name, value) in options.headers() {
                request = request.header(name.as_str(), value.as_str());
            }

            let response = request
                .send()
                .instrument(tracing::debug_span!("fetch-upload-source"))
                .await?;
            if response.status() != StatusCode::OK {
                return Err(error::unexpected_status("fetch upload source", response).await);
            }

            let declared_length = response.content_length();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .filter(|value| !value.is_empty())
                .map(str::to_owned);
            let body: Bytes = response.bytes().await?;
            let content_length = declared_length.unwrap_or(body.len() as u64);

            Ok(ResolvedSource {
                body: PutBody::Bytes(body),
                content_length,
                content_type,
            })
        }
    }
}

/// Pick the content type to store: explicit override, then what the source reported, then a
/// guess from the destination key.
fn content_type_for(key: &str, explicit: Option<&str>, reported: Option<&str>) -> String {
    if let Some(content_type) = explicit.or(reported) {
        return content_type.to_owned();
    }

    mime_guess::from_path(key)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_owned()
}
