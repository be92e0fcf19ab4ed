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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Browser entry for the wattbench console.
//!
//! Only the `wasm32` build does real work; a native run explains how to serve
//! the page instead.

#[cfg(target_arch = "wasm32")]
fn main() {
    wattbench_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const SERVE_HINT: &str = "wattbench-ui only runs inside a browser page.\n\
    Serve it with `trunk serve` from crates/wattbench-ui, or build for \
    `wasm32-unknown-unknown`.\n";

#[cfg(not(target_arch = "wasm32"))]
fn write_serve_hint(out: &mut impl std::io::Write) -> std::io::Result<()> {
    out.write_all(SERVE_HINT.as_bytes())?;
    out.flush()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_serve_hint(&mut std::io::stderr().lock())
}
