//! Application use cases. Rule evaluation, fact extraction and report assembly.

pub mod coverage_checker;
pub mod cross_reference;
pub mod fact_extractor;
pub mod report_assembler;
pub mod structural_validator;
pub mod validation_service;

pub use coverage_checker::{CoverageChecker, CoverageThresholds};
pub use cross_reference::CrossReferenceChecker;
pub use fact_extractor::FactExtractor;
pub use report_assembler::assemble;
pub use structural_validator::StructuralValidator;
pub use validation_service::{ValidationRequest, ValidationService, ValidationSettings};
