//! Platform abstraction layer
//!
//! Host bindings that drive the simulation:
//! - `web`: browser host via wasm-bindgen (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;
