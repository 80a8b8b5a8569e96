//! Terminal UI for the binary
//!
//! Rendering functions return `String`s; commands decide where they go.

pub mod blocks;
pub mod console;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
