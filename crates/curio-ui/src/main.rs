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
//! Curio admin client binary: mounts the app in the browser, prints build hints elsewhere.

#[cfg(target_arch = "wasm32")]
fn main() {
    curio_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    native::print_build_hint(&mut std::io::stderr().lock())
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{self, Write};

    pub(super) const BUILD_HINT: &str = "curio-ui renders in the browser only; serve it with `trunk serve` \
or build for `wasm32-unknown-unknown`.";

    pub(super) fn print_build_hint(out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{BUILD_HINT}")
    }

}
