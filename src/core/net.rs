// src/core/net.rs

// HTTP GET behind two narrow capabilities, so the collector and the sheet
// renderer can run against fixtures.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::USER_AGENT;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT as AGENT};
use crate::error::{Result, SheetError};

/// Something that can hand back an HTML document for a URL.
pub trait DocumentSource {
    fn fetch_document(&self, url: &str) -> Result<String>;
}

/// Something that can hand back the raw body for a URL.
pub trait ByteFetcher {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking client; one request at a time.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| SheetError::http("<client>", e))?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<Response> {
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, AGENT)
            .send()
            .map_err(|e| SheetError::http(url, e))?;
        ensure_success(url, resp)
    }
}

fn ensure_success(url: &str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(SheetError::Status { url: url.to_string(), status: status.as_u16() });
    }
    Ok(resp)
}

impl DocumentSource for HttpClient {
    fn fetch_document(&self, url: &str) -> Result<String> {
        self.get(url)?.text().map_err(|e| SheetError::http(url, e))
    }
}

impl ByteFetcher for HttpClient {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let body = self.get(url)?.bytes().map_err(|e| SheetError::http(url, e))?;
        Ok(body.to_vec())
    }
}
