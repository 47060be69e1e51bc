//! Particle background animator for the landing site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! decorative canvas behind the page: a field of slowly drifting particles
//! whose count follows the size of the content area and which bounce off the
//! canvas edges. The host UI is responsible only for providing the canvas and
//! the element whose size the canvas should track.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Particle records, bounds, density and the per-frame step |
//! | [`engine`] | Testable [`engine::AnimatorCore`] and the canvas-bound [`engine::Animator`] |
//! | [`host`] | `requestAnimationFrame` loop and resize observation |
//! | [`render`] | Drawing the field to a 2D context |
//! | [`consts`] | Shared numeric constants (density, speed, size ranges) |

pub mod consts;
pub mod engine;
pub mod field;
pub mod host;
pub mod render;
