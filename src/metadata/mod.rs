// Now-playing and playlist metadata from the automation software's local
// HTTP control API. Lives entirely outside the geometry core: network I/O
// happens on a worker thread with a hard deadline so the host's event loop
// is never blocked past it.

mod api;
mod track;
mod xml;

pub use api::{Action, MetadataClient, MicStatus, format_track_time};
pub use track::TrackDetail;
pub use xml::{all_tag_attributes, tag_attribute, tag_attributes};

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("API request timed out after {0:?}")]
    Timeout(Duration),
    #[error("API request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("failed to read API response: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed API response: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("API response is missing element `{0}`")]
    MissingElement(String),
    #[error("API response is missing attribute `{0}`")]
    MissingAttribute(String),
    #[error("unexpected API response: {0}")]
    UnexpectedResponse(String),
    #[error("API worker thread exited without a response")]
    WorkerFailed,
}
