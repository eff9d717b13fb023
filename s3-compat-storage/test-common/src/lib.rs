/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use bytes::Bytes;

/// Host name the direct HTTP backend is pointed at in tests.
///
/// Requests to it are routed to the loopback server by [`ZoneServer::http_client`].
pub const ZONE_HOST: &str = "storage.bunnycdn.com";

/// Random alphanumeric payload of the given size
pub fn rand_data(size: usize) -> Bytes {
    std::iter::repeat_with(fastrand::alphanumeric)
        .take(size)
        .map(|x| x as u8)
        .collect::<Vec<_>>()
        .into()
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    addr
}

#[derive(Debug, Default)]
struct StoredObject {
    data: Bytes,
    content_type: Option<String>,
}

#[derive(Debug)]
struct ZoneState {
    access_key: String,
    objects: Mutex<HashMap<String, StoredObject>>,
    puts: AtomicUsize,
    gets: AtomicUsize,
    deletes: AtomicUsize,
    rejected: AtomicUsize,
}

/// An in-memory storage zone speaking the BunnyCDN storage HTTP API.
///
/// Objects live at `/{zone}/{key}`. Every request must carry the `AccessKey` header with the
/// zone password, anything else is answered with `401`.
#[derive(Debug, Clone)]
pub struct ZoneServer {
    addr: SocketAddr,
    state: Arc<ZoneState>,
}

impl ZoneServer {
    /// Start a server accepting `access_key` as the zone password
    pub async fn start(access_key: &str) -> ZoneServer {
        let state = Arc::new(ZoneState {
            access_key: access_key.to_owned(),
            objects: Mutex::new(HashMap::new()),
            puts: AtomicUsize::new(0),
            gets: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
            rejected: AtomicUsize::new(0),
        });
        let app = Router::new()
            .route("/*path", any(zone_handler))
            .with_state(state.clone());
        let addr = serve(app).await;
        ZoneServer { addr, state }
    }

    /// Endpoint to configure the storage client with
    pub fn endpoint(&self) -> String {
        format!("http://{ZONE_HOST}:{}", self.addr.port())
    }

    /// HTTP client resolving [`ZONE_HOST`] to this server
    pub fn http_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .resolve(ZONE_HOST, self.addr)
            .build()
            .unwrap()
    }

    /// Store an object directly, bypassing the HTTP API
    pub fn insert(&self, zone: &str, key: &str, data: impl Into<Bytes>) {
        self.state.objects.lock().unwrap().insert(
            format!("{zone}/{key}"),
            StoredObject {
                data: data.into(),
                content_type: None,
            },
        );
    }

    /// Contents of a stored object
    pub fn object(&self, zone: &str, key: &str) -> Option<Bytes> {
        let objects = self.state.objects.lock().unwrap();
        objects.get(&format!("{zone}/{key}")).map(|o| o.data.clone())
    }

    /// Content type a stored object was uploaded with
    pub fn content_type(&self, zone: &str, key: &str) -> Option<String> {
        let objects = self.state.objects.lock().unwrap();
        objects
            .get(&format!("{zone}/{key}"))
            .and_then(|o| o.content_type.clone())
    }

    /// Number of authorized `PUT` requests
    pub fn puts(&self) -> usize {
        self.state.puts.load(Ordering::SeqCst)
    }

    /// Number of authorized `GET` requests
    pub fn gets(&self) -> usize {
        self.state.gets.load(Ordering::SeqCst)
    }

    /// Number of authorized `DELETE` requests
    pub fn deletes(&self) -> usize {
        self.state.deletes.load(Ordering::SeqCst)
    }

    /// Number of requests rejected for a missing or wrong `AccessKey`
    pub fn rejected(&self) -> usize {
        self.state.rejected.load(Ordering::SeqCst)
    }

    /// Total number of requests received
    pub fn requests(&self) -> usize {
        self.puts() + self.gets() + self.deletes() + self.rejected()
    }
}

async fn zone_handler(
    State(state): State<Arc<ZoneState>>,
    method: Method,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let authorized = headers
        .get("AccessKey")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == state.access_key);
    if !authorized {
        state.rejected.fetch_add(1, Ordering::SeqCst);
        return (StatusCode::UNAUTHORIZED, "invalid access key").into_response();
    }

    match method {
        Method::PUT => {
            state.puts.fetch_add(1, Ordering::SeqCst);
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            state.objects.lock().unwrap().insert(
                path,
                StoredObject {
                    data: body,
                    content_type,
                },
            );
            (StatusCode::CREATED, "file uploaded").into_response()
        }
        Method::GET => {
            state.gets.fetch_add(1, Ordering::SeqCst);
            match state.objects.lock().unwrap().get(&path) {
                Some(object) => (StatusCode::OK, object.data.clone()).into_response(),
                None => (StatusCode::NOT_FOUND, "object not found").into_response(),
            }
        }
        Method::DELETE => {
            state.deletes.fetch_add(1, Ordering::SeqCst);
            match state.objects.lock().unwrap().remove(&path) {
                Some(_) => (StatusCode::OK, "file deleted").into_response(),
                None => (StatusCode::NOT_FOUND, "object not found").into_response(),
            }
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

/// How a [`SourceServer`] answers every request
#[derive(Debug, Clone)]
pub struct SourceResponse {
    status: StatusCode,
    body: Bytes,
    content_type: Option<String>,
    chunked: bool,
}

impl SourceResponse {
    /// `200 OK` with the given body and a `Content-Length`
    pub fn ok(body: impl Into<Bytes>) -> SourceResponse {
        SourceResponse {
            status: StatusCode::OK,
            body: body.into(),
            content_type: None,
            chunked: false,
        }
    }

    /// Answer with a different status code
    pub fn status(mut self, status: u16) -> SourceResponse {
        self.status = StatusCode::from_u16(status).unwrap();
        self
    }

    /// Send a `Content-Type` header
    pub fn content_type(mut self, content_type: &str) -> SourceResponse {
        self.content_type = Some(content_type.to_owned());
        self
    }

    /// Stream the body with chunked encoding, without a `Content-Length`
    pub fn chunked(mut self) -> SourceResponse {
        self.chunked = true;
        self
    }
}

#[derive(Debug)]
struct SourceState {
    response: SourceResponse,
    hits: AtomicUsize,
    last_headers: Mutex<Option<HeaderMap>>,
}

/// A remote upload source answering every request with the same canned response
#[derive(Debug, Clone)]
pub struct SourceServer {
    addr: SocketAddr,
    state: Arc<SourceState>,
}

impl SourceServer {
    /// Start a server answering every request with `response`
    pub async fn start(response: SourceResponse) -> SourceServer {
        let state = Arc::new(SourceState {
            response,
            hits: AtomicUsize::new(0),
            last_headers: Mutex::new(None),
        });
        let app = Router::new()
            .route("/*path", any(source_handler))
            .with_state(state.clone());
        let addr = serve(app).await;
        SourceServer { addr, state }
    }

    /// URL of `path` on this server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}/{}", self.addr, path.trim_start_matches('/'))
    }

    /// Number of requests received
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Value of a header on the most recent request
    pub fn last_header(&self, name: &str) -> Option<String> {
        let headers = self.state.last_headers.lock().unwrap();
        headers
            .as_ref()
            .and_then(|h| h.get(name))
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    }
}

async fn source_handler(State(state): State<Arc<SourceState>>, headers: HeaderMap) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_headers.lock().unwrap() = Some(headers);

    let canned = &state.response;
    let body = if canned.chunked {
        let data = canned.body.clone();
        Body::from_stream(futures_util::stream::once(async move {
            Ok::<_, Infallible>(data)
        }))
    } else {
        Body::from(canned.body.clone())
    };

    let mut response = Response::new(body);
    *response.status_mut() = canned.status;
    if let Some(content_type) = &canned.content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type.parse().unwrap());
    }
    response
}

#[derive(Debug, Default)]
struct BucketState {
    objects: Mutex<HashMap<String, StoredObject>>,
    requests: Mutex<Vec<(Method, String)>>,
}

/// An in-memory bucket answering path-style S3 `PutObject`, `GetObject`, `HeadObject` and
/// `DeleteObject` requests.
///
/// Signatures are not checked. Clients must not send `aws-chunked` bodies, i.e. request
/// checksum calculation has to be limited to operations that require it.
#[derive(Debug, Clone)]
pub struct BucketServer {
    addr: SocketAddr,
    state: Arc<BucketState>,
}

impl BucketServer {
    /// Start an empty bucket server
    pub async fn start() -> BucketServer {
        let state = Arc::new(BucketState::default());
        let app = Router::new()
            .route("/*path", any(bucket_handler))
            .with_state(state.clone());
        let addr = serve(app).await;
        BucketServer { addr, state }
    }

    /// Endpoint to configure the S3 client with
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Contents of a stored object
    pub fn object(&self, bucket: &str, key: &str) -> Option<Bytes> {
        let objects = self.state.objects.lock().unwrap();
        objects.get(&format!("{bucket}/{key}")).map(|o| o.data.clone())
    }

    /// Content type a stored object was uploaded with
    pub fn content_type(&self, bucket: &str, key: &str) -> Option<String> {
        let objects = self.state.objects.lock().unwrap();
        objects
            .get(&format!("{bucket}/{key}"))
            .and_then(|o| o.content_type.clone())
    }

    /// Methods and paths of every request received, in order
    pub fn requests(&self) -> Vec<(Method, String)> {
        self.state.requests.lock().unwrap().clone()
    }
}

const NO_SUCH_KEY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message></Error>"#;

async fn bucket_handler(
    State(state): State<Arc<BucketState>>,
    method: Method,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state
        .requests
        .lock()
        .unwrap()
        .push((method.clone(), path.clone()));

    match method {
        Method::PUT => {
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            state.objects.lock().unwrap().insert(
                path,
                StoredObject {
                    data: body,
                    content_type,
                },
            );
            (StatusCode::OK, [(header::ETAG, "\"stored\"")]).into_response()
        }
        Method::GET | Method::HEAD => {
            let found = state
                .objects
                .lock()
                .unwrap()
                .get(&path)
                .map(|o| (o.data.clone(), o.content_type.clone()));
            match found {
                Some((data, content_type)) => {
                    let mut response = Response::new(Body::from(data));
                    if let Some(content_type) = content_type {
                        response
                            .headers_mut()
                            .insert(header::CONTENT_TYPE, content_type.parse().unwrap());
                    }
                    response
                }
                None if method == Method::HEAD => StatusCode::NOT_FOUND.into_response(),
                None => (
                    StatusCode::NOT_FOUND,
                    [(header::CONTENT_TYPE, "application/xml")],
                    NO_SUCH_KEY,
                )
                    .into_response(),
            }
        }
        Method::DELETE => {
            state.objects.lock().unwrap().remove(&path);
            StatusCode::NO_CONTENT.into_response()
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}
