//! Minimal terminal runtime: an [`App`] driven by key events and optional timer ticks.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event_loop;
mod runtime;
