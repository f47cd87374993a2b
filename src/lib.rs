//! A counter widget that never drops below zero. The `counter` binary
//! renders it with `iced`; the `web` feature binds it to a browser page.

pub mod counter;
pub mod error;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use counter::{CounterWidget, DisplaySurface, Message, TextSurface};
pub use error::BindError;
