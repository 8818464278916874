// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod criteria;
pub mod note;
pub mod sort_key;

pub use criteria::FilterCriteria;
pub use note::{FileMeta, Note};
pub use sort_key::{SortKey, SortOrder};
