//! Backdrop renderer
//!
//! `markup` builds the HTML for each element kind (pure, tested natively);
//! `dom` mounts and drives the actual backdrop tree on wasm32.

pub mod markup;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use markup::{element_markup, glow_styles, gradient_layer};

#[cfg(target_arch = "wasm32")]
pub use dom::BackdropDom;
