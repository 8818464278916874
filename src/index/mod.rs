// file: src/index/mod.rs
// description: note ordering, filtering, topic search and grouping
// reference: internal module structure

pub mod filter;
pub mod group;
pub mod query;
pub mod search;
pub mod sort;

pub use filter::{binary_search_by, filter_notes};
pub use group::{group_notes, DepartmentGroup, SemesterGroup, SubjectGroup};
pub use query::{run_query, NoteQuery};
pub use search::search_by_topic;
pub use sort::{merge_sort_by, sort_notes};
pub use crate::utils::collation::collate;
