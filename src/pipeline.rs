//! Sequential download of every routing directory.
//!
//! Each directory is fetched and written before the next request starts, and every
//! directory is attempted whatever happened to the ones before it. Failures are isolated
//! per directory and reported in the returned outcomes.

use crate::config::ResolvedConfig;
use crate::fetcher::{fetch_directory, Transport};
use crate::format::DirectoryFormat;
use crate::models::{FetchOutcome, ResourceSpec, DIRECTORIES};
use crate::validation::Credentials;
use tracing::{info, warn};

/// Fetches the Fedwire directory, then the FedACH directory.
pub async fn run<T: Transport>(
    transport: &T,
    credentials: &Credentials,
    format: DirectoryFormat,
    config: &ResolvedConfig,
) -> Vec<FetchOutcome> {
    run_resources(transport, &DIRECTORIES, credentials, format, config).await
}

/// Fetches `resources` in order, returning one outcome per resource.
pub async fn run_resources<T: Transport>(
    transport: &T,
    resources: &[ResourceSpec],
    credentials: &Credentials,
    format: DirectoryFormat,
    config: &ResolvedConfig,
) -> Vec<FetchOutcome> {
    let mut outcomes = Vec::with_capacity(resources.len());

    for resource in resources {
        // fetch_directory never fails; the loop always reaches the next resource
        let outcome = fetch_directory(transport, resource, format, credentials, config).await;
        info!(directory = resource.display_name, "{} is done", resource.display_name);
        outcomes.push(outcome);
    }

    outcomes
}

/// Logs one line per outcome and returns how many directories were written.
pub fn summarize(outcomes: &[FetchOutcome]) -> usize {
    let mut written = 0;
    for outcome in outcomes {
        match (&outcome.error, &outcome.path) {
            (None, Some(path)) => {
                written += 1;
                info!(
                    directory = outcome.resource_name,
                    status = ?outcome.http_status,
                    file_path = %path.display(),
                    "Downloaded"
                );
            }
            (Some(err), _) => warn!(
                directory = outcome.resource_name,
                status = ?outcome.http_status,
                error = %err,
                "Not downloaded"
            ),
            (None, None) => warn!(
                directory = outcome.resource_name,
                status = ?outcome.http_status,
                "Not downloaded"
            ),
        }
    }

    info!(
        written = written,
        failed = outcomes.len() - written,
        "Directory download finished"
    );
    written
}
