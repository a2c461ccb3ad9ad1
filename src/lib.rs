//! Custom pointer overlay for the web: a spring-smoothed cursor glyph with a
//! trailing effect, drawn above the page.
//!
//! `core` holds everything that does not touch the browser and builds on any
//! target. The remaining modules are the wasm32 glue that binds `core`'s host
//! traits to `web-sys`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;

#[cfg(target_arch = "wasm32")]
pub use app::{mount_cursor, start, CursorHandle};
