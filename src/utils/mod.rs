//! Shared utilities

pub mod template;

pub use template::render;
