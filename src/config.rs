//! Site configuration baked in at build time.
//!
//! A static WASM bundle has no process environment, so values come from
//! `option_env!` when the bundle is compiled. Parsing goes through
//! [`GenAiConfig::from_lookup`] so the rules are testable without touching
//! the real environment.

use std::time::Duration;

use crate::net::genai::GenAiError;

pub const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GENAI_MODEL: &str = "gemini-2.0-flash";

/// Connection details for the generative-text endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenAiConfig {
    pub base_url: String,
    pub model: String,
    /// Sent as the `key` query parameter. Empty by default; authentication and
    /// rate limiting are the deployment's concern.
    pub api_key: String,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GENAI_BASE_URL.to_owned(),
            model: DEFAULT_GENAI_MODEL.to_owned(),
            api_key: String::new(),
        }
    }
}

impl GenAiConfig {
    /// Build config from the build-time environment.
    ///
    /// - `GENAI_BASE_URL`: API root, default [`DEFAULT_GENAI_BASE_URL`]
    /// - `GENAI_MODEL`: model name, default [`DEFAULT_GENAI_MODEL`]
    /// - `GENAI_API_KEY`: API key, default empty
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Config`] if a value is present but unusable.
    pub fn from_env() -> Result<Self, GenAiError> {
        Self::from_lookup(|key| match key {
            "GENAI_BASE_URL" => option_env!("GENAI_BASE_URL"),
            "GENAI_MODEL" => option_env!("GENAI_MODEL"),
            "GENAI_API_KEY" => option_env!("GENAI_API_KEY"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Config`] for a blank model or a base URL that is
    /// not `http(s)`.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self, GenAiError> {
        let base_url = lookup("GENAI_BASE_URL")
            .unwrap_or(DEFAULT_GENAI_BASE_URL)
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(GenAiError::Config(format!("GENAI_BASE_URL must be http(s): {base_url}")));
        }

        let model = lookup("GENAI_MODEL").unwrap_or(DEFAULT_GENAI_MODEL).trim().to_owned();
        if model.is_empty() {
            return Err(GenAiError::Config("GENAI_MODEL is empty".to_owned()));
        }

        let api_key = lookup("GENAI_API_KEY").unwrap_or_default().trim().to_owned();

        Ok(Self { base_url, model, api_key })
    }

    /// Full `generateContent` URL including the key parameter. The model
    /// path segment and the key are percent-encoded.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            urlencoding::encode(&self.model),
            urlencoding::encode(&self.api_key)
        )
    }
}

/// UI delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between first opening the chat and the greeting appearing.
    pub greeting: Duration,
    /// How long an inline validation notice stays visible.
    pub notice: Duration,
    /// Delay between launching and scrolling, so the revealed layout settles.
    pub scroll: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            greeting: Duration::from_millis(500),
            notice: Duration::from_millis(3000),
            scroll: Duration::from_millis(100),
        }
    }
}

impl Timing {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn millis(duration: Duration) -> u32 {
        duration.as_millis().min(u128::from(u32::MAX)) as u32
    }
}

/// Everything the page needs to know at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub genai: GenAiConfig,
    pub timing: Timing,
}

impl SiteConfig {
    /// Load from the build-time environment, falling back to defaults (and
    /// logging why) when a value is unusable.
    #[must_use]
    pub fn load() -> Self {
        let genai = GenAiConfig::from_env().unwrap_or_else(|err| {
            log::warn!("invalid generative-text config, using defaults: {err}");
            GenAiConfig::default()
        });
        if genai.api_key.is_empty() {
            log::debug!("GENAI_API_KEY not set; assistant requests will be unauthenticated");
        }
        Self { genai, timing: Timing::default() }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
