//! Authenticated retrieval of a single routing directory.
//!
//! [`fetch_directory`] requests one directory through a [`Transport`], interprets the
//! service's status codes and writes the body to disk. [`HttpTransport`] is the production
//! transport backed by `reqwest`.

mod directory_fetcher;
mod transport;

// Re-export public API
pub use directory_fetcher::{fetch_directory, render_body, service_status_message};
pub use transport::{DirectoryRequest, HttpTransport, Transport, TransportError, TransportResponse};
