//! Page sections and floating widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns its state in a local `RwSignal` over a plain model from
//! `state`. The launch flag, site config, and assist client come from context
//! provided by [`crate::app::App`].

pub mod about;
pub mod assist;
pub mod background;
pub mod chat_widget;
pub mod contact;
pub mod hero;
pub mod pointer_trail;
pub mod portfolio;
pub mod services;
pub mod social;
pub mod testimonials;
