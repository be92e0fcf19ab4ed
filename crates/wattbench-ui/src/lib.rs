#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]
//! Wattbench browser console.
//!
//! Two independent page behaviours run from the wasm entry point: the notice
//! banner hides itself after a fixed delay, and the log container follows the
//! bench's server-sent event stream. DOM-free rules live in [`core`] so they
//! are tested natively; the browser glue is compiled for `wasm32` only.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
