//! Hyperscript-to-DOM Renderer WASM Module
//!
//! Converts lightweight node descriptions (tag, props, children) into live
//! DOM nodes and injects them into a container, replacing its previous
//! content on every call.

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod node;
pub mod props;
pub mod render;

// Re-export commonly used types
pub use config::RenderOptions;
pub use dom::{create_element, Materializer};
pub use error::{ConvertError, MaterializeError, PropError, RenderError};
pub use node::{
    h, prop_map, style_map, text, ElementNode, PropValue, Props, StyleMap, StyleValue, VNode,
};
pub use render::{render, render_with, Container};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_log!("logger already initialized");
    }

    log::info!("Hyperscript renderer WASM module initialized");
}
