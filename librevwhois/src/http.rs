use crate::{
    error::FetchError,
    types::{SearchRequest, SearchResponse},
};
use reqwest::{header::CONTENT_TYPE, Client};
use std::time::Duration;

pub fn create_http_client(timeout: Option<Duration>) -> Result<Client, FetchError> {
    let builder = Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .use_rustls_tls();

    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };

    builder.build().map_err(FetchError::Client)
}

/// POSTs one request and decodes the reply.
///
/// The body is read as text before decoding so that a malformed payload
/// surfaces as [`FetchError::Decode`] rather than a transport error.
pub async fn post_search(
    client: &Client,
    endpoint: &str,
    request: &SearchRequest,
) -> Result<SearchResponse, FetchError> {
    let body = serde_json::to_vec(request)?;

    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(FetchError::Status { status, body: text });
    }

    Ok(serde_json::from_str(&text)?)
}
