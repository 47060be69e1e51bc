//! Generative text assist: persona prompts and display-ready replies.
//!
//! Three places on the page ask the model for text (service ideas, the
//! contact-form brief, and the chatbot). They differ only in the instruction
//! prefix and in where the reply lands, so they share [`ask`]: build the
//! prompt from a [`Persona`], call the endpoint, and fold every failure into a
//! [`Reply`] that always has something presentable to show.
//!
//! ERROR HANDLING
//! ==============
//! Transport and HTTP failures become [`ERROR_MESSAGE`]; a body without
//! candidate text becomes [`FALLBACK_MESSAGE`]. The underlying error is logged
//! and never reaches the UI.

use super::genai::{GenAiClient, GenAiError, TextTransport};

#[cfg(test)]
#[path = "assist_test.rs"]
mod assist_test;

/// Shown when the request failed outright.
pub const ERROR_MESSAGE: &str = "Oops! Something went wrong while reaching our assistant. Please try again later.";

/// Shown when the endpoint answered but gave us nothing usable.
pub const FALLBACK_MESSAGE: &str = "Sorry, I couldn't come up with an answer right now. Please try rephrasing.";

/// Fixed instructional prefix for each use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    /// One campaign idea for a named service card.
    ServiceIdea,
    /// A short project brief from comma-separated keywords.
    ProjectBrief,
    /// The SphereBot chat assistant.
    Chat,
}

impl Persona {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::ServiceIdea => {
                "You are a creative strategist at Spheremedia, a branding agency. \
                 In two or three sentences, pitch one fresh, concrete campaign idea for this service: "
            }
            Self::ProjectBrief => {
                "You are a project manager at Spheremedia, a branding agency. \
                 Write a short, friendly project description (under 80 words) that a client could send us, \
                 based on these keywords: "
            }
            Self::Chat => {
                "You are SphereBot, the friendly assistant for Spheremedia.in, a branding agency offering \
                 ad campaigns, social media management, brand identity design, motion graphics and reels, \
                 content strategy and Instagram growth. Answer briefly and helpfully. Question: "
            }
        }
    }

    /// Combine the prefix with the user's fragment into one prompt.
    #[must_use]
    pub fn prompt(self, fragment: &str) -> String {
        format!("{}{}", self.prefix(), fragment.trim())
    }
}

/// Outcome of an assist request, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Generated(String),
    Fallback,
    Failed,
}

impl Reply {
    /// Fold a raw generate result, logging anything that went wrong.
    #[must_use]
    pub fn from_result(persona: Persona, result: Result<String, GenAiError>) -> Self {
        match result {
            Ok(text) => Self::Generated(text.trim().to_owned()),
            Err(err) if err.is_malformed_response() => {
                log::warn!("{persona:?} assist: unexpected response shape: {err}");
                Self::Fallback
            }
            Err(err) => {
                if let GenAiError::Status { body, .. } = &err {
                    log::error!("{persona:?} assist failed: {err}; body: {body}");
                } else {
                    log::error!("{persona:?} assist failed: {err}");
                }
                Self::Failed
            }
        }
    }

    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Text to show the visitor.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Fallback => FALLBACK_MESSAGE.to_owned(),
            Self::Failed => ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Ask the model on behalf of `persona`. Never fails; see [`Reply`].
pub async fn ask<T: TextTransport>(client: &GenAiClient<T>, persona: Persona, fragment: &str) -> Reply {
    let prompt = persona.prompt(fragment);
    log::debug!("{persona:?} assist: sending {} chars", prompt.len());
    Reply::from_result(persona, client.generate(&prompt).await)
}

/// Ask, then hand the folded [`Reply`] to `on_reply`.
///
/// This is the one request/response cycle every assist control uses: the
/// caller has already marked its control busy and recorded anything that
/// must appear before the reply; `on_reply` stores the result and clears the
/// busy mark. Callers that only display text use [`Reply::into_text`].
pub async fn run<T: TextTransport>(
    client: &GenAiClient<T>,
    persona: Persona,
    fragment: &str,
    on_reply: impl FnOnce(Reply),
) {
    on_reply(ask(client, persona, fragment).await);
}
