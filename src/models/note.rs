// file: src/models/note.rs
// description: uploaded study resource record and its opaque file metadata
// reference: internal data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub department: String,
    pub semester: u32,
    pub subject: String,
    pub topic: String,
    #[serde(default)]
    pub file: FileMeta,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(
        department: impl Into<String>,
        semester: u32,
        subject: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            department: department.into(),
            semester,
            subject: subject.into(),
            topic: topic.into(),
            file: FileMeta::default(),
            uploaded_by: None,
            uploaded_at: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_file(mut self, file: FileMeta) -> Self {
        self.file = file;
        self
    }

    pub fn with_upload(
        mut self,
        uploaded_by: Option<String>,
        uploaded_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.uploaded_by = uploaded_by;
        self.uploaded_at = uploaded_at;
        self
    }

    /// `department/semester/subject`, the label the dashboards group by.
    pub fn location(&self) -> String {
        format!("{}/{}/{}", self.department, self.semester, self.subject)
    }
}
