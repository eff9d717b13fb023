/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A single client for S3-compatible object storage providers.
//!
//! The client classifies the configured endpoint once (Cloudflare R2, Backblaze B2,
//! BunnyCDN storage, or any other S3-compatible service) and routes every operation
//! to the matching backend. BunnyCDN storage is not S3-compatible and is reached
//! with plain HTTP requests; everything else goes through the [Amazon S3 SDK].
//!
//! [Amazon S3 SDK]: https://docs.rs/aws-sdk-s3
//!
//! # Examples
//!
//! Build a client for a Backblaze B2 bucket (the region is taken from the endpoint):
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_compat_storage::error::Error> {
//! let config = s3_compat_storage::Config::builder()
//!     .endpoint("s3.us-west-004.backblazeb2.com")
//!     .access_key_id("key-id")
//!     .secret_access_key("secret")
//!     .build()?;
//! let client = s3_compat_storage::Client::new(config);
//!
//! let output = client
//!     .upload()
//!     .bucket("my-bucket")
//!     .key("photos/rabbit.jpg")
//!     .source("/tmp/rabbit.jpg")
//!     .send()
//!     .await?;
//! println!("stored {} bytes", output.content_length());
//! # Ok(())
//! # }
//! ```
//!
//! Load the configuration from the environment:
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_compat_storage::error::Error> {
//! let config = s3_compat_storage::from_env().load().await?;
//! let client = s3_compat_storage::Client::new(config);
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`info`](crate::Client::info) - fetch the metadata of a single object
//! * [`list`](crate::Client::list) - list one page of keys
//! * [`upload`](crate::Client::upload) - upload a local file or a remote URL
//! * [`download`](crate::Client::download) - download an object into a local file
//! * [`delete`](crate::Client::delete) - delete a single object
//! * [`presign_get`](crate::Client::presign_get) / [`presign_put`](crate::Client::presign_put) - issue presigned URLs

pub(crate) const MEBIBYTE: u64 = 1024 * 1024;

/// Maximum number of keys returned by a single list request
pub(crate) const MAX_LIST_KEYS: i32 = 1000;

/// Error types emitted by `s3-compat-storage`
pub mod error;

/// Common types used by `s3-compat-storage`
pub mod types;

/// Storage client
pub mod client;

/// Storage operations
pub mod operation;

/// Client configuration
pub mod config;

/// Storage backends the client dispatches to
pub(crate) mod backend;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
