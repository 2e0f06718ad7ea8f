//! Minimal HTTP client for the collaborator service APIs.
//!
//! Each collaborator exposes a small JSON-over-HTTP surface. A full
//! client stack (reqwest) would be overkill for three fixed calls, so we
//! build a thin wrapper using hyper + tokio's `TcpStream`, one
//! connection per request.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Uri};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::CloudError;

/// Send an HTTP request to a collaborator API endpoint.
///
/// `authority` is the `host:port` pair to connect to; `uri_path` is the
/// path component only (e.g. `/networks`). When `authorization` is set
/// its value is forwarded verbatim in the `Authorization` header.
///
/// # Errors
/// Returns [`CloudError::Api`] on connection, HTTP, or non-success
/// status errors.
pub(crate) async fn api_request(
    authority: &str,
    method: Method,
    uri_path: &str,
    authorization: Option<&str>,
    body: Option<String>,
) -> Result<String, CloudError> {
    let stream = TcpStream::connect(authority)
        .await
        .map_err(|e| CloudError::Api(format!("connect to {authority}: {e}")))?;

    let io = TokioIo::new(stream);

    let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
        .await
        .map_err(|e| CloudError::Api(format!("HTTP handshake: {e}")))?;

    // Drive the connection in the background.
    tokio::spawn(async move {
        if let Err(e) = conn.await {
            tracing::debug!("collaborator connection closed: {e}");
        }
    });

    let body_bytes = body.map(Bytes::from).unwrap_or_default();
    let content_len = body_bytes.len();

    let uri: Uri = uri_path
        .parse()
        .map_err(|e| CloudError::Api(format!("invalid URI path {uri_path}: {e}")))?;

    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Host", authority);

    if let Some(token) = authorization {
        builder = builder.header("Authorization", token);
    }

    if content_len > 0 {
        builder = builder.header("Content-Type", "application/json");
        builder = builder.header("Content-Length", content_len.to_string());
    }

    let req = builder
        .body(Full::new(body_bytes))
        .map_err(|e| CloudError::Api(format!("build request: {e}")))?;

    let resp: Response<_> = sender
        .send_request(req)
        .await
        .map_err(|e| CloudError::Api(format!("send request: {e}")))?;

    let status = resp.status();
    let body_bytes = resp
        .into_body()
        .collect()
        .await
        .map_err(|e| CloudError::Api(format!("read response body: {e}")))?
        .to_bytes();

    let body_str = String::from_utf8_lossy(&body_bytes).into_owned();

    if !status.is_success() {
        return Err(CloudError::Api(format!(
            "HTTP {status} from {uri_path}: {body_str}"
        )));
    }

    Ok(body_str)
}
