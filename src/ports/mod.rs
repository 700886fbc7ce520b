//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the CLI drives the validation service directly.

pub mod outbound;

pub use outbound::{ReportRenderer, SourcePort};
