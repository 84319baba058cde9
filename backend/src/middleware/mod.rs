//! Request middleware.
//!
//! Cross-cutting request lifecycle concerns live here rather than in
//! handlers.

pub mod trace;

pub use trace::Trace;
