use async_trait::async_trait;

use irchat_core::{chat_url, parse_response, ChatBackend, ChatError, ChatRequest, ChatResponse};

use crate::debug;

/// Chat backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    url: String,
    verbose: bool,
}

impl HttpBackend {
    /// `base_url` is the backend host; requests go to `<base_url>/chat`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: chat_url(base_url),
            verbose: false,
        }
    }

    /// Print request and response details to the console
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        debug::log_request(&self.url, request, self.verbose);

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        debug::log_response(status, &body, self.verbose);
        log::debug!("POST {} -> {}", self.url, status);

        parse_response(status.as_u16(), &body)
    }
}
