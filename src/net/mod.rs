//! Networking modules for the generative-text API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `genai` owns the wire format and the HTTP hop; `assist` turns a persona and
//! a user fragment into display-ready text for the page's three assist
//! controls.

pub mod assist;
pub mod genai;

#[cfg(test)]
pub(crate) mod testing;
