//! Contact form state, including the keyword-driven brief generator.
//!
//! Nothing here is sent anywhere: "Send Message" validates and acknowledges
//! locally, and the only network use is the optional brief generation. A
//! generated brief overwrites the description field; a failed one leaves the
//! field alone and shows an error notice instead.
//!
//! Each brief request carries a ticket. Submitting the form cancels the
//! outstanding ticket, so a reply that lands after the reset is dropped.

use crate::net::assist::Reply;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const KEYWORDS_REQUIRED: &str = "Please enter a few keywords first.";
pub const NAME_REQUIRED: &str = "Please tell us your name.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MESSAGE_SENT: &str = "Thanks! We'll get back to you within one business day.";

/// Which form field an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Keywords,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// Transient inline message under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    seq: u64,
}

/// Trim keywords and require at least one non-blank character.
///
/// # Errors
///
/// Returns [`KEYWORDS_REQUIRED`] for blank input.
pub fn validate_keywords(raw: &str) -> Result<String, &'static str> {
    let keywords = raw.trim();
    if keywords.is_empty() {
        return Err(KEYWORDS_REQUIRED);
    }
    Ok(keywords.to_owned())
}

/// Loose address check: something before and after a single `@`, and a dot
/// in the domain.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Result of asking to generate a brief.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BriefStart {
    /// Send these keywords; the button is now disabled. Hand `ticket` back to
    /// [`ContactForm::finish_brief`] with the reply.
    Send { keywords: String, ticket: u64 },
    /// Keywords were blank. An error notice is showing; schedule
    /// [`ContactForm::clear_notice`] with this sequence number. Nothing is sent.
    Rejected { notice: u64 },
    /// A brief is already being generated.
    Busy,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub keywords: String,
    pub description: String,
    brief: Option<u64>,
    notice: Option<Notice>,
    next_seq: u64,
    next_ticket: u64,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Keywords => self.keywords = value,
            Field::Description => self.description = value,
        }
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.brief.is_some()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Start brief generation. See [`BriefStart`] for what the caller must do.
    pub fn begin_brief(&mut self) -> BriefStart {
        if self.brief.is_some() {
            return BriefStart::Busy;
        }
        match validate_keywords(&self.keywords) {
            Ok(keywords) => {
                self.next_ticket += 1;
                self.brief = Some(self.next_ticket);
                self.notice = None;
                BriefStart::Send { keywords, ticket: self.next_ticket }
            }
            Err(message) => BriefStart::Rejected { notice: self.raise(NoticeKind::Error, message) },
        }
    }

    /// Finish the brief request identified by `ticket`.
    ///
    /// A generated brief overwrites the description. A failed or empty reply
    /// leaves the description untouched and raises an error notice; its
    /// sequence number is returned so the caller can schedule
    /// [`ContactForm::clear_notice`]. Replies for a cancelled ticket are
    /// dropped.
    pub fn finish_brief(&mut self, ticket: u64, reply: Reply) -> Option<u64> {
        if self.brief != Some(ticket) {
            log::debug!("brief {ticket} dropped: request was cancelled");
            return None;
        }
        self.brief = None;
        match reply {
            Reply::Generated(text) => {
                log::info!("brief generated");
                self.description = text;
                None
            }
            failed => Some(self.raise(NoticeKind::Error, &failed.into_text())),
        }
    }

    /// Validate and acknowledge the form. Returns the notice sequence number
    /// for the raised success or error message. A successful submit also
    /// cancels any brief still being generated.
    ///
    /// # Errors
    ///
    /// Returns the sequence number of the raised error notice when a required
    /// field is missing or the email is malformed; the fields are left as-is.
    pub fn submit(&mut self) -> Result<u64, u64> {
        if self.name.trim().is_empty() {
            return Err(self.raise(NoticeKind::Error, NAME_REQUIRED));
        }
        if !looks_like_email(&self.email) {
            return Err(self.raise(NoticeKind::Error, EMAIL_INVALID));
        }
        log::info!("contact form acknowledged");
        self.brief = None;
        self.name.clear();
        self.email.clear();
        self.keywords.clear();
        self.description.clear();
        Ok(self.raise(NoticeKind::Success, MESSAGE_SENT))
    }

    /// Clear the notice if it is still the one identified by `seq`; a newer
    /// notice is left alone.
    pub fn clear_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    fn raise(&mut self, kind: NoticeKind, text: &str) -> u64 {
        self.next_seq += 1;
        self.notice = Some(Notice { kind, text: text.to_owned(), seq: self.next_seq });
        self.next_seq
    }
}
