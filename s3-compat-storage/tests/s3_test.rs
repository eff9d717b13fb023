/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::{Region, RequestChecksumCalculation};
use aws_smithy_http_client::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_types::body::SdkBody;
use http::Method;
use s3_compat_storage::error::ErrorKind;
use s3_compat_storage::types::Provider;
use test_common::{rand_data, BucketServer, SourceResponse, SourceServer};

const BUCKET: &str = "test-bucket";

/// Storage client talking path-style S3 to an in-memory bucket
fn storage(server: &BucketServer) -> s3_compat_storage::Client {
    let s3_client = aws_sdk_s3::Client::from_conf(
        aws_sdk_s3::config::Config::builder()
            .endpoint_url(server.endpoint())
            .region(Region::from_static("auto"))
            .force_path_style(true)
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .with_test_defaults()
            .build(),
    );
    let config = s3_compat_storage::Config::builder()
        .endpoint(server.endpoint())
        .force_path_style(true)
        .s3_client(s3_client)
        .build()
        .unwrap();
    s3_compat_storage::Client::new(config)
}

#[tokio::test]
async fn test_round_trip_local_file() {
    let server = BucketServer::start().await;
    let storage = storage(&server);
    assert_eq!(Provider::Generic, storage.provider());

    let data = rand_data(256 * 1024);
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), &data).unwrap();

    let output = storage
        .upload()
        .bucket(BUCKET)
        .key("docs/manual.pdf")
        .source(file.path())
        .send()
        .await
        .unwrap();

    assert_eq!(data.len() as u64, output.content_length());
    assert_eq!("application/pdf", output.content_type());
    assert!(output.verified());
    assert_eq!(Some(data.clone()), server.object(BUCKET, "docs/manual.pdf"));

    let info = storage
        .info()
        .bucket(BUCKET)
        .key("docs/manual.pdf")
        .send()
        .await
        .unwrap();
    assert_eq!(data.len() as u64, info.content_length());
    assert_eq!(Some("application/pdf"), info.content_type());

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("manual.pdf");
    let downloaded = storage
        .download()
        .bucket(BUCKET)
        .key("docs/manual.pdf")
        .destination(&destination)
        .send()
        .await
        .unwrap();
    assert_eq!(data.len() as u64, downloaded.bytes_written());
    assert_eq!(data.to_vec(), std::fs::read(&destination).unwrap());

    let methods: Vec<Method> = server.requests().into_iter().map(|(m, _)| m).collect();
    assert_eq!(
        vec![Method::PUT, Method::HEAD, Method::HEAD, Method::GET],
        methods
    );
}

#[tokio::test]
async fn test_upload_from_remote_source() {
    let server = BucketServer::start().await;
    let data = rand_data(2048);
    let source =
        SourceServer::start(SourceResponse::ok(data.clone()).content_type("image/webp")).await;

    let output = storage(&server)
        .upload()
        .bucket(BUCKET)
        .key("mirrored/banner")
        .source(source.url("banner.webp"))
        .send()
        .await
        .unwrap();

    assert!(output.verified());
    assert_eq!("image/webp", output.content_type());
    assert_eq!(Some(data), server.object(BUCKET, "mirrored/banner"));
    assert_eq!(
        Some("image/webp".to_owned()),
        server.content_type(BUCKET, "mirrored/banner")
    );
}

#[tokio::test]
async fn test_remote_source_error_status_skips_storage() {
    let server = BucketServer::start().await;
    let source = SourceServer::start(SourceResponse::ok("denied").status(403)).await;

    let err = storage(&server)
        .upload()
        .bucket(BUCKET)
        .key("never-stored")
        .source(source.url("private.bin"))
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::Status(403), err.kind());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_empty_remote_source_is_rejected() {
    let server = BucketServer::start().await;
    let source = SourceServer::start(SourceResponse::ok("").chunked()).await;

    let err = storage(&server)
        .upload()
        .bucket(BUCKET)
        .key("empty")
        .source(source.url("empty"))
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::IntegrityFailed, err.kind());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_download_missing_key() {
    let server = BucketServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("missing.bin");

    let err = storage(&server)
        .download()
        .bucket(BUCKET)
        .key("missing.bin")
        .destination(&destination)
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::NotFound, err.kind());
    // created up front and left in place
    assert!(destination.exists());
}

#[tokio::test]
async fn test_delete() {
    let server = BucketServer::start().await;
    let storage = storage(&server);
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"temporary").unwrap();

    storage
        .upload()
        .bucket(BUCKET)
        .key("tmp.txt")
        .source(file.path())
        .send()
        .await
        .unwrap();
    storage
        .delete()
        .bucket(BUCKET)
        .key("tmp.txt")
        .send()
        .await
        .unwrap();

    assert_eq!(None, server.object(BUCKET, "tmp.txt"));
    assert_eq!(
        Some(&(Method::DELETE, format!("{BUCKET}/tmp.txt"))),
        server.requests().last()
    );
}

const LIST_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
    <Name>test-bucket</Name>
    <Prefix>logs/</Prefix>
    <KeyCount>2</KeyCount>
    <MaxKeys>1000</MaxKeys>
    <IsTruncated>true</IsTruncated>
    <Contents><Key>logs/2024-01-01.log</Key><Size>10</Size></Contents>
    <Contents><Key>logs/2024-01-02.log</Key><Size>20</Size></Contents>
    <NextContinuationToken>next-page</NextContinuationToken>
</ListBucketResult>"#;

#[tokio::test]
async fn test_list_request_is_clamped() {
    let http_client = StaticReplayClient::new(vec![ReplayEvent::new(
        http::Request::builder()
            .uri("https://not-used")
            .body(SdkBody::from(&b""[..]))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(SdkBody::from(LIST_RESPONSE))
            .unwrap(),
    )]);
    let s3_client = aws_sdk_s3::Client::from_conf(
        aws_sdk_s3::config::Config::builder()
            .http_client(http_client.clone())
            .endpoint_url("https://abc123.r2.cloudflarestorage.com")
            .region(Region::from_static("auto"))
            .force_path_style(true)
            .with_test_defaults()
            .build(),
    );
    let config = s3_compat_storage::Config::builder()
        .endpoint("abc123.r2.cloudflarestorage.com")
        .s3_client(s3_client)
        .build()
        .unwrap();
    let storage = s3_compat_storage::Client::new(config);

    let page = storage
        .list()
        .bucket(BUCKET)
        .prefix("logs/")
        .max_keys(25_000)
        .send()
        .await
        .unwrap();

    assert_eq!(vec!["logs/2024-01-01.log", "logs/2024-01-02.log"], page.keys());
    assert_eq!(Some("next-page"), page.continuation_token());

    let requests = http_client.actual_requests().collect::<Vec<_>>();
    assert_eq!(1, requests.len());
    let uri = requests[0].uri();
    assert!(uri.contains("list-type=2"), "{uri}");
    assert!(uri.contains("max-keys=1000"), "{uri}");
    assert!(uri.contains("prefix=logs%2F"), "{uri}");
}
