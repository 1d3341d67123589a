use std::collections::HashMap;
use std::sync::RwLock;

use super::{LabelFetchError, LabelFetcher};

/// Smallest well-formed PDF we can hand out; stands in for a real waybill in
/// sandbox mode.
pub const PLACEHOLDER_LABEL_PDF: &[u8] =
    b"%PDF-1.4\n1 0 obj<</Type/Catalog>>endobj\ntrailer<</Root 1 0 R>>\n%%EOF\n";

/// In-memory label fetcher. Intended for tests and sandbox deployments.
///
/// Serves explicitly seeded documents by URL; with `serve_placeholder`
/// enabled, any other URL resolves to [`PLACEHOLDER_LABEL_PDF`] instead of
/// failing (sandbox label URLs are synthetic and not actually hosted).
#[derive(Debug, Default)]
pub struct InMemoryLabelFetcher {
    documents: RwLock<HashMap<String, Vec<u8>>>,
    serve_placeholder: bool,
}

impl InMemoryLabelFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            serve_placeholder: true,
        }
    }

    pub fn insert(&self, url: impl Into<String>, bytes: Vec<u8>) {
        self.documents.write().unwrap().insert(url.into(), bytes);
    }
}

impl LabelFetcher for InMemoryLabelFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LabelFetchError> {
        if let Some(bytes) = self.documents.read().unwrap().get(url) {
            return Ok(bytes.clone());
        }
        if self.serve_placeholder {
            return Ok(PLACEHOLDER_LABEL_PDF.to_vec());
        }
        Err(LabelFetchError::NotFound(url.to_string()))
    }
}
