//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser calls (timers, scrolling) live here so components stay free of
//! `web_sys` plumbing and native builds have a single place to no-op.

pub mod browser;
