// file: src/models/criteria.rs
// description: exact-match filter criteria over department, semester and subject
// reference: internal data structures

use super::Note;
use serde::{Deserialize, Serialize};

/// Exact-match filter. A `None` field matches every note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub department: Option<String>,
    pub semester: Option<u32>,
    pub subject: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank input is treated as "All", the way the dashboard form sends it.
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = non_blank(department.into());
        self
    }

    pub fn semester(mut self, semester: u32) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = non_blank(subject.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.semester.is_none() && self.subject.is_none()
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.department
            .as_deref()
            .is_none_or(|department| note.department == department)
            && self.semester.is_none_or(|semester| note.semester == semester)
            && self
                .subject
                .as_deref()
                .is_none_or(|subject| note.subject == subject)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
