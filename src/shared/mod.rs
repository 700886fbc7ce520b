//! Cross-cutting concerns shared by the binary and tests.

pub mod config;
