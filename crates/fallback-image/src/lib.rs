//! Dioxus image component with a loading skeleton and a fallback source.

pub mod components;
pub mod defaults;

pub use components::*;
pub use defaults::*;
