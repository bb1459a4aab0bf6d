//! Hyperscript renderer WASM API
//!
//! JavaScript-facing exports. Each export converts its arguments into the
//! crate's Rust types, calls into `dom` / `render`, and maps errors to
//! exception values.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion and console logging
//! - `render`: `createElement`, `render`, `renderJson`
//! - `hyperscript`: the `h` builder

pub mod helpers;
pub mod hyperscript;
pub mod render;

pub use hyperscript::h_js;
pub use render::{create_element_js, render_js, render_json_js};
