//! Shared blocking HTTP plumbing for the remote collaborators

use std::time::Duration;

use reqwest::blocking::Client;

use crate::{Error, Result, StudioConfig};

pub(crate) fn client(config: &StudioConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))
}

/// GET `url` and return the body with its declared content type.
pub(crate) fn fetch_bytes(client: &Client, url: &str) -> Result<(Vec<u8>, Option<String>)> {
    let res = client
        .get(url)
        .send()
        .map_err(|e| Error::Remote(format!("HTTP GET failed: {}", e)))?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::Remote(format!("HTTP GET {} returned {}", url, status)));
    }
    let mime = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).trim().to_string());
    let body = res
        .bytes()
        .map_err(|e| Error::Remote(format!("Failed to read response body: {}", e)))?;
    Ok((body.to_vec(), mime))
}
