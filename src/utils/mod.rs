// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod collation;
pub mod logging;
pub mod validation;

pub use collation::collate;
pub use validation::Validator;
