//! REST client for the question collection.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list | GET | `/questions` |
//! | create | POST | `/questions` |
//! | update | PUT | `/questions/{id}` |
//! | delete | DELETE | `/questions/{id}` |

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::EndpointConfig;
use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionInput};

use super::QuestionStore;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Question store reached over HTTP.
pub struct HttpQuestionStore {
    client: Client,
    collection: Url,
    timeout: Duration,
}

impl HttpQuestionStore {
    /// Create a store for `base_url` with the default 30-second timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a store for `base_url` with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let collection = collection_url(base_url)?;
        let client = Client::builder()
            .user_agent(concat!("quizdeck/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|source| QuizError::Transport {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            collection,
            timeout,
        })
    }

    /// Create a store from the endpoint section of the config.
    pub fn from_config(endpoint: &EndpointConfig) -> Result<Self> {
        Self::with_timeout(&endpoint.base_url, endpoint.timeout())
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL of the collection resource.
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// URL of a single record. The id is percent-encoded as one path segment.
    pub fn item_url(&self, id: &str) -> Result<Url> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|()| cannot_be_base(self.collection.as_str()))?
            .push(id);
        Ok(url)
    }

    fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response> {
        let response = request.send().map_err(|source| QuizError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        debug!("{} from {}", status, url);
        if !status.is_success() {
            return Err(QuizError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T> {
        let body = response.text().map_err(|source| QuizError::Transport {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|e| QuizError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl QuestionStore for HttpQuestionStore {
    fn list(&mut self) -> Result<Vec<Question>> {
        let url = self.collection.clone();
        debug!("GET {}", url);
        let response = self.send(self.client.get(url.clone()), &url)?;
        Self::decode(response, &url)
    }

    fn create(&mut self, draft: &QuestionInput) -> Result<Question> {
        let url = self.collection.clone();
        debug!("POST {}", url);
        let response = self.send(self.client.post(url.clone()).json(draft), &url)?;
        Self::decode(response, &url)
    }

    fn update(&mut self, id: &str, record: &Question) -> Result<Question> {
        let url = self.item_url(id)?;
        debug!("PUT {}", url);
        let response = self.send(self.client.put(url.clone()).json(record), &url)?;
        Self::decode(response, &url)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let url = self.item_url(id)?;
        debug!("DELETE {}", url);
        // Body is ignored on success.
        self.send(self.client.delete(url.clone()), &url)?;
        Ok(())
    }
}

fn cannot_be_base(url: &str) -> QuizError {
    QuizError::InvalidEndpoint {
        url: url.to_string(),
        message: "URL cannot hold a path".to_string(),
    }
}

/// `<base>/questions`, tolerating a trailing slash on the base.
fn collection_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| QuizError::InvalidEndpoint {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;
    url.path_segments_mut()
        .map_err(|()| cannot_be_base(base_url))?
        .pop_if_empty()
        .push("questions");
    Ok(url)
}
