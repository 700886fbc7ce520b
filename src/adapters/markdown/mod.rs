//! Markdown adapters. Map notes and glossary text into domain entities.

pub mod glossary_parser;
pub mod notes_parser;

pub use glossary_parser::GlossaryParser;
pub use notes_parser::NotesParser;
