//! Terminal UI building blocks: theme tokens, capability detection, panels,
//! and the product gallery renderer.

pub mod context;
pub mod gallery;
pub mod panel;
pub mod terminal;
pub mod theme;
