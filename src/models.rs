use crate::constants::OUTPUT_FILE_SUFFIX;
use crate::format::DirectoryFormat;
use std::path::PathBuf;
use url::Url;

/// A directory published by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Path segment on the service and stem of the output file.
    pub name: &'static str,
    /// Human-readable name used in log output.
    pub display_name: &'static str,
}

pub const FEDWIRE: ResourceSpec = ResourceSpec {
    name: "fedwire",
    display_name: "FedWire",
};

pub const FEDACH: ResourceSpec = ResourceSpec {
    name: "fedach",
    display_name: "FedACH",
};

/// Directories fetched by a run, in order.
pub const DIRECTORIES: [ResourceSpec; 2] = [FEDWIRE, FEDACH];

impl ResourceSpec {
    /// Builds `{base_url}/{name}?format={token}`.
    ///
    /// Returns `None` when `base_url` cannot carry a path (e.g. `mailto:`).
    pub fn request_url(&self, base_url: &Url, format: DirectoryFormat) -> Option<Url> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push(self.name);
        url.query_pairs_mut()
            .clear()
            .append_pair("format", format.query_token());
        Some(url)
    }

    /// Returns the output file name, e.g. `fedwire_routing_numbers.json`.
    pub fn file_name(&self, format: DirectoryFormat) -> String {
        format!(
            "{}{OUTPUT_FILE_SUFFIX}.{}",
            self.name,
            format.file_extension()
        )
    }
}

/// Why a single directory fetch produced no file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchErrorKind {
    /// No response was received (DNS, refused connection, TLS, unbuildable request)
    #[error("Transport error: {0}")]
    Transport(String),
    /// The service answered with something other than 200
    #[error("{message}")]
    ServiceStatus { status: u16, message: String },
    /// A JSON body could not be decoded
    #[error("Could not decode JSON body: {0}")]
    Decode(String),
    /// The output file could not be written
    #[error("IO error: {0}")]
    Io(String),
}

/// Result of one directory fetch. Only used for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub resource_name: &'static str,
    /// `None` when no HTTP response was received.
    pub http_status: Option<u16>,
    pub written: bool,
    pub error: Option<FetchErrorKind>,
    /// Output file, set only when `written` is true.
    pub path: Option<PathBuf>,
}

impl FetchOutcome {
    pub fn written(resource: &ResourceSpec, status: u16, path: PathBuf) -> Self {
        Self {
            resource_name: resource.name,
            http_status: Some(status),
            written: true,
            error: None,
            path: Some(path),
        }
    }

    pub fn failed(resource: &ResourceSpec, status: Option<u16>, error: FetchErrorKind) -> Self {
        Self {
            resource_name: resource.name,
            http_status: status,
            written: false,
            error: Some(error),
            path: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.written && self.error.is_none()
    }
}
