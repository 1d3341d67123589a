use std::time::Duration;

use super::{LabelFetchError, LabelFetcher};

/// Downloads label PDFs over HTTP with a per-request timeout.
#[derive(Debug)]
pub struct HttpLabelFetcher {
    client: reqwest::blocking::Client,
}

impl HttpLabelFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self { client }
    }
}

impl LabelFetcher for HttpLabelFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LabelFetchError> {
        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                LabelFetchError::Timeout(url.to_string())
            } else {
                LabelFetchError::Transport(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(LabelFetchError::NotFound(url.to_string()));
        }

        let bytes = response
            .bytes()
            .map_err(|e| LabelFetchError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
