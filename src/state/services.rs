#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

/// On-demand campaign idea shown under one service card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceIdea {
    idea: Option<String>,
    pending: bool,
}

impl ServiceIdea {
    #[must_use]
    pub fn idea(&self) -> Option<&str> {
        self.idea.as_deref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Mark a request as started. Returns `false` if one is already in
    /// flight, in which case nothing must be sent.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Store the reply (or error text), replacing any earlier idea.
    pub fn finish(&mut self, text: String) {
        self.idea = Some(text);
        self.pending = false;
    }
}
