//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page area (`chat`, `contact`, `launch`, etc.) so each
//! component depends on a small focused model. The models are plain structs
//! with no browser or reactive dependencies; components wrap them in
//! `RwSignal`s, and only the launch flag is shared through context.

pub mod chat;
pub mod contact;
pub mod launch;
pub mod pointer;
pub mod services;
