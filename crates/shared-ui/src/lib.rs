//! Dioxus component library.

pub mod components;

pub use components::*;
