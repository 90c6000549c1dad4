use crate::constants::{DOWNLOAD_CODE_HEADER, ORG_ID_HEADER};
use crate::errors::AppResult;
use crate::validation::Credentials;
use std::error::Error as _;
use std::fmt;
use std::future::Future;
use url::Url;

/// A single GET against the directory service.
#[derive(Clone)]
pub struct DirectoryRequest<'a> {
    pub url: Url,
    /// Header name/value pairs, values taken verbatim from the credentials.
    pub headers: [(&'static str, &'a str); 2],
}

impl<'a> DirectoryRequest<'a> {
    pub fn new(url: Url, credentials: &'a Credentials) -> Self {
        Self {
            url,
            headers: [
                (ORG_ID_HEADER, credentials.org_id()),
                (DOWNLOAD_CODE_HEADER, credentials.download_code()),
            ],
        }
    }
}

// Keep the download code out of logs, same as `Credentials`.
impl fmt::Debug for DirectoryRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|&(name, value)| {
                if name == DOWNLOAD_CODE_HEADER {
                    (name, "<redacted>")
                } else {
                    (name, value)
                }
            })
            .collect();
        f.debug_struct("DirectoryRequest")
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .finish()
    }
}

/// Status and full body of a response, whatever the status was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// No response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Performs directory requests.
///
/// Implementations issue exactly one request per call and never retry.
pub trait Transport {
    fn get(
        &self,
        request: &DirectoryRequest<'_>,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>>;
}

/// [`Transport`] backed by a `reqwest::Client` with default timeouts.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a client identifying itself with the crate name and version.
    pub fn new() -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(
        &self,
        request: &DirectoryRequest<'_>,
    ) -> Result<TransportResponse, TransportError> {
        let mut builder = self.client.get(request.url.clone());
        for (name, value) in request.headers.iter() {
            builder = builder.header(*name, *value);
        }

        // Invalid header values surface here as builder errors
        let response = builder.send().await.map_err(|e| describe(&e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| describe(&e))?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Flattens a reqwest error and its sources into one line.
fn describe(err: &reqwest::Error) -> TransportError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    TransportError(message)
}
