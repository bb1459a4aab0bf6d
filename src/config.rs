//! Runtime options for rendering
//!
//! Passed from JavaScript as a plain object (camelCase keys, all optional).

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Treat a rejected property write as a render failure instead of
    /// logging it and moving on. Attribute failures always fail the render.
    pub strict_props: bool,
}

impl RenderOptions {
    pub fn strict() -> Self {
        Self { strict_props: true }
    }
}
