//! Core, DOM-free primitives and helpers for the console.
pub mod banner;
pub mod buffer;
pub mod config;
pub mod entry;
pub mod error;
