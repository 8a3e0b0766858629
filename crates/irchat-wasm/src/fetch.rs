use async_trait::async_trait;
use gloo_net::http::Request;

use irchat_core::{chat_url, parse_response, ChatBackend, ChatError, ChatRequest, ChatResponse};

/// Chat backend reached with the browser's fetch API
pub struct FetchBackend {
    url: String,
}

impl FetchBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            url: chat_url(base_url),
        }
    }
}

#[async_trait(?Send)]
impl ChatBackend for FetchBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        log::debug!("POST {} -> {}", self.url, status);
        parse_response(status, &body)
    }
}
