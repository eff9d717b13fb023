/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of storage errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The client configuration is missing or invalid (e.g. an empty endpoint)
    ConfigInvalid,

    /// Operation input validation issues
    InputInvalid,

    /// The operation is not supported by the configured provider
    Unsupported,

    /// The underlying S3 or HTTP call failed
    Transport,

    /// Resource not found (e.g. bucket or key not found)
    NotFound,

    /// HTTP request completed with an unexpected status code
    Status(u16),

    /// Source size could not be confirmed (empty source or stored size mismatch)
    IntegrityFailed,

    /// I/O errors
    IOError,
}

impl Error {
    /// Creates a new storage [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::Unsupported => write!(f, "operation not supported for this provider"),
            ErrorKind::Transport => write!(f, "request failed"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::Status(status) => write!(f, "unexpected status code {status}"),
            ErrorKind::IntegrityFailed => write!(f, "upload verification failed"),
            ErrorKind::IOError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::new(ErrorKind::Transport, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::Transport, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<aws_sdk_s3::presigning::PresigningConfigError> for Error {
    fn from(value: aws_sdk_s3::presigning::PresigningConfigError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn invalid_config<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ConfigInvalid, err)
}

pub(crate) fn unsupported(provider: crate::types::Provider, operation: &str) -> Error {
    Error::new(
        ErrorKind::Unsupported,
        format!("{provider} storage does not support {operation} operation"),
    )
}

pub(crate) fn integrity_failed<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::IntegrityFailed, err)
}

/// Build a status error from a failed response, draining the body into the message.
pub(crate) async fn unexpected_status(action: &str, response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => format!("<unreadable response body: {err}>"),
    };
    Error::new(
        ErrorKind::Status(status),
        format!("{action} failed with status {status}: {body}"),
    )
}

pub(crate) fn from_kind<E>(kind: ErrorKind) -> impl FnOnce(E) -> Error
where
    E: Into<BoxError>,
{
    |err| Error::new(kind, err)
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let kind = match value.code() {
            Some("NotFound" | "NoSuchKey" | "NoSuchUpload" | "NoSuchBucket") => ErrorKind::NotFound,
            _ => ErrorKind::Transport,
        };

        Error::new(kind, value)
    }
}
