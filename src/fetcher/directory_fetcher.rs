use super::transport::{DirectoryRequest, Transport};
use crate::config::ResolvedConfig;
use crate::format::DirectoryFormat;
use crate::models::{FetchErrorKind, FetchOutcome, ResourceSpec};
use crate::validation::Credentials;
use std::path::Path;
use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};
use url::Url;

/// Message for the service-specific status codes.
///
/// These codes are the service's own failure signals, not generic HTTP semantics.
pub fn service_status_message(status: u16) -> Option<&'static str> {
    match status {
        204 => Some("Download code does not exist."),
        205 => Some("Download code has expired. Need new download code."),
        206 => Some(
            "Download limits have been exceeded for the day. You must wait for tomorrow to try again.",
        ),
        207 => Some("The format inserted in script is not all lowercase."),
        _ => None,
    }
}

fn status_error(status: u16) -> FetchErrorKind {
    let message = match service_status_message(status) {
        Some(msg) => msg.to_string(),
        None => {
            let reason = reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unknown status");
            format!("HTTP error {status}: {reason}")
        }
    };
    FetchErrorKind::ServiceStatus { status, message }
}

/// Produces the bytes written for a 200 body.
///
/// XML and TEXT bodies are written untouched. JSON bodies are decoded and re-serialized,
/// so the file is not byte-identical to what the service sent: whitespace is dropped and
/// object key order is not preserved.
pub fn render_body(format: DirectoryFormat, body: Vec<u8>) -> Result<Vec<u8>, FetchErrorKind> {
    match format {
        DirectoryFormat::Json => {
            let value: serde_json::Value = serde_json::from_slice(&body)
                .map_err(|e| FetchErrorKind::Decode(e.to_string()))?;
            Ok(value.to_string().into_bytes())
        }
        DirectoryFormat::Xml | DirectoryFormat::Text => Ok(body),
    }
}

fn build_url(
    resource: &ResourceSpec,
    format: DirectoryFormat,
    config: &ResolvedConfig,
) -> Result<Url, FetchErrorKind> {
    let base_url = config
        .base_url()
        .map_err(|e| FetchErrorKind::Transport(e.to_string()))?;
    resource.request_url(&base_url, format).ok_or_else(|| {
        FetchErrorKind::Transport(format!("Cannot build directory URL from {base_url}"))
    })
}

/// Creates (or truncates) `path`, writes `contents` once and closes it.
async fn write_output(path: &Path, contents: &[u8]) -> Result<(), FetchErrorKind> {
    if let Some(parent) = path.parent() {
        // create_dir_all is a no-op for existing directories
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|e| {
                FetchErrorKind::Io(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let mut file = File::create(path).await.map_err(|e| {
        FetchErrorKind::Io(format!("Failed to create file {}: {e}", path.display()))
    })?;
    file.write_all(contents).await.map_err(|e| {
        FetchErrorKind::Io(format!("Failed to write to file {}: {e}", path.display()))
    })?;
    file.flush().await.map_err(|e| {
        FetchErrorKind::Io(format!("Failed to flush file {}: {e}", path.display()))
    })?;

    Ok(())
}

/// Fetches one directory and writes it to `{output_dir}/{name}_routing_numbers.{ext}`.
///
/// Issues a single GET carrying the credential headers. Only a 200 response produces a
/// file; every other status, transport failure, undecodable JSON body or write failure is
/// reported in the returned [`FetchOutcome`]. This function never fails the caller, so a
/// pipeline can always move on to the next directory.
///
/// # Arguments
///
/// * `transport` - Performs the request
/// * `resource` - Directory to fetch
/// * `format` - Requested format, also decides the file extension
/// * `credentials` - Validated org id and download code
/// * `config` - Base URL and output directory
pub async fn fetch_directory<T: Transport>(
    transport: &T,
    resource: &ResourceSpec,
    format: DirectoryFormat,
    credentials: &Credentials,
    config: &ResolvedConfig,
) -> FetchOutcome {
    let directory = resource.display_name;

    let url = match build_url(resource, format, config) {
        Ok(url) => url,
        Err(e) => {
            error!(directory = directory, error = %e, "Failed to build request");
            return FetchOutcome::failed(resource, None, e);
        }
    };

    let request = DirectoryRequest::new(url, credentials);
    debug!(directory = directory, url = %request.url, "Requesting directory");

    let response = match transport.get(&request).await {
        Ok(response) => response,
        Err(e) => {
            error!(directory = directory, error = %e, "Request failed");
            return FetchOutcome::failed(resource, None, FetchErrorKind::Transport(e.0));
        }
    };

    let status = response.status;
    info!(directory = directory, status = status, "Status code received");

    if status != 200 {
        let err = status_error(status);
        warn!(
            directory = directory,
            status = status,
            reason = %err,
            "Directory not downloaded"
        );
        return FetchOutcome::failed(resource, Some(status), err);
    }

    let contents = match render_body(format, response.body) {
        Ok(contents) => contents,
        Err(e) => {
            error!(directory = directory, error = %e, "Failed to decode body");
            return FetchOutcome::failed(resource, Some(status), e);
        }
    };

    let path = config.output_dir.join(resource.file_name(format));
    if let Err(e) = write_output(&path, &contents).await {
        error!(directory = directory, error = %e, "Failed to write directory file");
        return FetchOutcome::failed(resource, Some(status), e);
    }

    info!(
        directory = directory,
        file_path = %path.display(),
        bytes = contents.len(),
        "Directory written"
    );
    FetchOutcome::written(resource, status, path)
}
