// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod index;
pub mod loader;
pub mod models;
pub mod utils;

pub use config::{CatalogConfig, Config, OutputConfig};
pub use error::{NoteIndexError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use index::{
    DepartmentGroup, NoteQuery, SemesterGroup, SubjectGroup, filter_notes, group_notes,
    run_query, search_by_topic, sort_notes,
};
pub use loader::NoteLoader;
pub use models::{FileMeta, FilterCriteria, Note, SortKey, SortOrder};
pub use utils::Validator;
