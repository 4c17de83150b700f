//! Browser platform layer
//!
//! Handles everything that touches the page:
//! - DOM lookups, styling and event listeners
//! - Timers (rotating title)
//! - `fetch` for the contact form
//! - The optional icon library hook
//!
//! Only compiled for wasm32; the behavior modules it drives are target-neutral.

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod timer;
