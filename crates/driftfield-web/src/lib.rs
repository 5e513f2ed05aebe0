#![forbid(unsafe_code)]

//! WASM frontend for driftfield.
//!
//! Binds a [`driftfield_core::ParticleField`] to a `<canvas>` and the window's
//! pointer and resize events, exported to JS via `wasm-bindgen`. The page owns
//! the `requestAnimationFrame` loop and calls `frame(time)` from it.
//!
//! Target-independent pieces (option parsing, event mapping, errors) build and
//! test natively; the DOM bindings only exist on `wasm32`.

pub mod error;
pub mod events;
pub mod options;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::WebError;
pub use events::WindowEvent;
pub use options::parse_options;

#[cfg(target_arch = "wasm32")]
pub use wasm::DriftFieldWeb;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct DriftFieldWeb;

#[cfg(not(target_arch = "wasm32"))]
impl DriftFieldWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
