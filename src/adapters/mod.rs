//! Infrastructure adapters. Implement outbound ports.
//!
//! Markdown parsing, filesystem input, report rendering. Map errors to DomainError.

pub mod input;
pub mod markdown;
pub mod render;
