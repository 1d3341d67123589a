//! Label document retrieval port.
//!
//! The carrier hands back a URL; the workflow downloads the PDF behind it
//! before persisting it to the blob store.

use thiserror::Error;

pub mod http;
pub mod in_memory;

pub use http::HttpLabelFetcher;
pub use in_memory::InMemoryLabelFetcher;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelFetchError {
    #[error("label download timed out: {0}")]
    Timeout(String),

    #[error("label download failed: {0}")]
    Transport(String),

    #[error("label not available at {0}")]
    NotFound(String),
}

/// Outbound HTTP fetch of a label document.
pub trait LabelFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LabelFetchError>;
}

impl<T: LabelFetcher + ?Sized> LabelFetcher for std::sync::Arc<T> {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LabelFetchError> {
        (**self).fetch(url)
    }
}
