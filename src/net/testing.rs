//! Scripted transport for exercising the assist flow without a network.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::genai::{GenAiError, GenerateRequest, HttpReply, TextTransport};

/// Replays queued outcomes in order and records every request.
#[derive(Default)]
pub struct Scripted {
    replies: RefCell<VecDeque<Result<HttpReply, String>>>,
    pub sent: RefCell<Vec<(String, GenerateRequest)>>,
}

impl Scripted {
    pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpReply { status, body: body.into() }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(message.to_owned()));
        self
    }

    pub fn calls(&self) -> usize {
        self.sent.borrow().len()
    }

    /// Prompt text of the `index`th request.
    pub fn prompt(&self, index: usize) -> String {
        self.sent.borrow()[index].1.contents[0].parts[0].text.clone()
    }
}

#[async_trait::async_trait(?Send)]
impl TextTransport for Scripted {
    async fn post(&self, url: &str, request: &GenerateRequest) -> Result<HttpReply, GenAiError> {
        self.sent.borrow_mut().push((url.to_owned(), request.clone()));
        match self.replies.borrow_mut().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(GenAiError::Transport(message)),
            None => Err(GenAiError::Transport("no scripted reply".to_owned())),
        }
    }
}

/// A well-formed success body carrying `text`.
pub fn success_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": text }] }, "finishReason": "STOP" }
        ],
        "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 30 }
    })
    .to_string()
}
