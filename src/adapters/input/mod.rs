//! Input adapters. Read notes, transcript, glossary and participant lists.

pub mod fs_source;
pub mod participants;

pub use fs_source::FsSource;
pub use participants::load_participants;
