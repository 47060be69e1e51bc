//! Generative-text API client.
//!
//! Thin HTTP wrapper for the `generateContent` endpoint. The wire types and
//! [`parse_reply`] are pure for testability; the network hop sits behind the
//! [`TextTransport`] trait so tests can stand in a scripted endpoint.
//!
//! Client-side (`csr`): real HTTP via `gloo-net`.
//! Native builds: [`HttpTransport`] reports a transport error, since there is
//! no browser to send from.

use serde::{Deserialize, Serialize};

use crate::config::GenAiConfig;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by generative-text operations.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// A configuration value could not be used.
    #[error("config invalid: {0}")]
    Config(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint returned a non-success status.
    #[error("response error: status {status}")]
    Status { status: u16, body: String },

    /// The body was not the JSON we expected.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The body parsed but carried no candidate text.
    #[error("response had no candidate text")]
    MissingCandidate,
}

impl GenAiError {
    /// Whether this failure should be shown as the soft fallback message
    /// rather than the error message.
    #[must_use]
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::MissingCandidate)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// Request body: a single user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    #[must_use]
    pub fn user_turn(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content { role: "user".to_owned(), parts: vec![Part { text: prompt.into() }] }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the first candidate's text from a success body.
///
/// # Errors
///
/// [`GenAiError::Parse`] if the body is not a JSON object of the expected
/// shape, [`GenAiError::MissingCandidate`] if it has no non-blank text.
pub fn parse_reply(body: &str) -> Result<String, GenAiError> {
    let response: GenerateResponse = serde_json::from_str(body).map_err(|e| GenAiError::Parse(e.to_string()))?;
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(GenAiError::MissingCandidate)
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Raw HTTP outcome: status plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network hop for a generate call.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait::async_trait(?Send)]
pub trait TextTransport {
    /// POST `request` as JSON to `url`.
    async fn post(&self, url: &str, request: &GenerateRequest) -> Result<HttpReply, GenAiError>;
}

/// Transport over the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

#[async_trait::async_trait(?Send)]
impl TextTransport for HttpTransport {
    async fn post(&self, url: &str, request: &GenerateRequest) -> Result<HttpReply, GenAiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(request)
                .map_err(|e| GenAiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| GenAiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| GenAiError::Transport(e.to_string()))?;
            Ok(HttpReply { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no browser transport for {url} ({} turns)", request.contents.len());
            Err(GenAiError::Transport("not available outside the browser".to_owned()))
        }
    }
}

/// Client bound to one configured endpoint.
#[derive(Debug, Clone)]
pub struct GenAiClient<T = HttpTransport> {
    transport: T,
    endpoint: String,
}

impl GenAiClient<HttpTransport> {
    #[must_use]
    pub fn new(config: &GenAiConfig) -> Self {
        Self::with_transport(config, HttpTransport)
    }
}

impl<T: TextTransport> GenAiClient<T> {
    #[must_use]
    pub fn with_transport(config: &GenAiConfig, transport: T) -> Self {
        Self { transport, endpoint: config.endpoint() }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one prompt and return the generated text.
    ///
    /// # Errors
    ///
    /// - [`GenAiError::Transport`] if the request never completed
    /// - [`GenAiError::Status`] for any non-2xx status
    /// - [`GenAiError::Parse`] / [`GenAiError::MissingCandidate`] for an
    ///   unexpected body
    pub async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        let request = GenerateRequest::user_turn(prompt);
        let reply = self.transport.post(&self.endpoint, &request).await?;
        if !reply.is_success() {
            return Err(GenAiError::Status { status: reply.status, body: reply.body });
        }
        parse_reply(&reply.body)
    }
}

#[cfg(test)]
#[path = "genai_test.rs"]
mod genai_test;
