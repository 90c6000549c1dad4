//! Common test utilities for integration tests

use fed_routing_cli::config::ResolvedConfig;
use fed_routing_cli::fetcher::{DirectoryRequest, Transport, TransportError, TransportResponse};
use fed_routing_cli::validation::Credentials;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const ORG_ID: &str = "123456789";
pub const DOWNLOAD_CODE: &str = "AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE";

/// Canned answer for one directory path.
#[allow(dead_code)]
#[derive(Clone)]
pub enum Reply {
    Status(u16, &'static str),
    Unreachable(&'static str),
}

/// In-memory transport answering by URL path and recording every request.
///
/// Paths without a scripted reply answer 404.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedTransport {
    replies: HashMap<String, Reply>,
    watched: Option<PathBuf>,
    requests: Mutex<Vec<RecordedRequest>>,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Whether the watched path existed when the request arrived.
    pub path_existed: Option<bool>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, path: &str, reply: Reply) -> Self {
        self.replies.insert(path.to_string(), reply);
        self
    }

    /// Records, for every request, whether `path` exists at that moment.
    pub fn check_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.watched = Some(path.into());
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn get(
        &self,
        request: &DirectoryRequest<'_>,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: request.url.to_string(),
            headers: request
                .headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            path_existed: self.watched.as_ref().map(|path| path.exists()),
        });

        match self.replies.get(request.url.path()) {
            Some(Reply::Status(status, body)) => Ok(TransportResponse {
                status: *status,
                body: body.as_bytes().to_vec(),
            }),
            Some(Reply::Unreachable(msg)) => Err(TransportError(msg.to_string())),
            None => Ok(TransportResponse {
                status: 404,
                body: Vec::new(),
            }),
        }
    }
}

/// Configuration writing into `output_dir`, with a base URL whose path is `/directories`.
#[allow(dead_code)]
pub fn test_config(output_dir: &Path) -> ResolvedConfig {
    ResolvedConfig {
        base_url: "http://directory.test/directories".to_string(),
        output_dir: output_dir.to_path_buf(),
    }
}

#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new(ORG_ID, DOWNLOAD_CODE).unwrap()
}
