//! Report renderers. Text for people, JSON for tooling.

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;
