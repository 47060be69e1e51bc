#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Scripted first message, appended shortly after the widget is first opened.
pub const GREETING: &str = "Hi there! 👋 I'm SphereBot. Ask me anything about Spheremedia's services, \
                            pricing, or how we can grow your brand.";

/// One-click questions offered under the transcript.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What services do you offer?",
    "How much does a branding project cost?",
    "How long does a typical project take?",
    "Can you help grow my Instagram?",
];

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat message. Never modified once appended.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), text: text.into(), sender }
    }
}

/// Where the widget is in its lifecycle. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatPhase {
    Closed,
    OpenEmpty,
    OpenWithTranscript,
    OpenAwaitingReply,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Greeting {
    #[default]
    NotScheduled,
    Scheduled,
    Done,
}

/// State for the floating chatbot widget.
///
/// The transcript is append-only and survives closing the widget; it lives
/// until the page is reloaded.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    open: bool,
    messages: Vec<ChatMessage>,
    pending: usize,
    greeting: Greeting,
}

impl ChatState {
    #[must_use]
    pub fn phase(&self) -> ChatPhase {
        if !self.open {
            ChatPhase::Closed
        } else if self.pending > 0 {
            ChatPhase::OpenAwaitingReply
        } else if self.messages.is_empty() {
            ChatPhase::OpenEmpty
        } else {
            ChatPhase::OpenWithTranscript
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the "typing" indicator should show.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    /// Number of questions still waiting for a reply.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Open the widget.
    ///
    /// Returns `true` when the caller should schedule [`ChatState::greet`]:
    /// the first time the widget opens onto an empty transcript.
    pub fn open(&mut self) -> bool {
        self.open = true;
        if self.greeting == Greeting::NotScheduled && self.messages.is_empty() {
            self.greeting = Greeting::Scheduled;
            return true;
        }
        false
    }

    /// Close the widget. The transcript is kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip open/closed; returns what [`ChatState::open`] returned, or
    /// `false` when closing.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
            false
        } else {
            self.open()
        }
    }

    /// Append the scripted greeting if it is due and the transcript is still
    /// empty. Returns whether it was appended. Runs at most once per session.
    pub fn greet(&mut self) -> bool {
        if self.greeting != Greeting::Scheduled {
            return false;
        }
        self.greeting = Greeting::Done;
        if !self.messages.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::new(Sender::Assistant, GREETING));
        true
    }

    /// Whether a new question can be sent right now.
    #[must_use]
    pub fn can_ask(&self) -> bool {
        self.pending == 0
    }

    /// Append the visitor's question and mark a reply as outstanding.
    ///
    /// Returns the trimmed question to send, or `None` when the input is blank
    /// or a reply is still outstanding. In both cases nothing is appended and
    /// nothing must be sent.
    pub fn ask(&mut self, text: &str) -> Option<String> {
        let question = text.trim();
        if question.is_empty() || !self.can_ask() {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, question));
        self.pending += 1;
        Some(question.to_owned())
    }

    /// Append the assistant's reply (or error text) for one outstanding question.
    pub fn receive(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(Sender::Assistant, text));
        self.pending = self.pending.saturating_sub(1);
    }
}
