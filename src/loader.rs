// file: src/loader.rs
// description: reads note snapshots from the portal's json payloads into one schema
// reference: https://docs.rs/serde_json

use crate::config::CatalogConfig;
use crate::error::{NoteIndexError, Result};
use crate::models::{FileMeta, Note};
use crate::utils::Validator;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Record shape as served by the note endpoints, across their revisions.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNote {
    #[serde(rename = "_id")]
    object_id: Option<String>,
    id: Option<String>,
    department: Option<String>,
    department_type: Option<String>,
    semester: Option<RawSemester>,
    subject: Option<String>,
    topic: Option<String>,
    file_name: Option<String>,
    file_size: Option<u64>,
    file_type: Option<String>,
    uploaded_by: Option<String>,
    faculty: Option<String>,
    faculty_id: Option<String>,
    uploaded_at: Option<DateTime<Utc>>,
    upload_date: Option<DateTime<Utc>>,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSemester {
    Number(u32),
    Text(String),
}

impl RawSemester {
    fn value(self) -> Result<u32> {
        match self {
            RawSemester::Number(n) => Ok(n),
            RawSemester::Text(text) => text.trim().parse().map_err(|_| {
                NoteIndexError::InvalidArgument(format!("semester '{}' is not a number", text))
            }),
        }
    }
}

impl RawNote {
    fn into_note(self) -> Result<Note> {
        let department = self
            .department
            .or(self.department_type)
            .ok_or_else(|| missing("department"))?;
        let semester = self.semester.ok_or_else(|| missing("semester"))?.value()?;
        let subject = self.subject.ok_or_else(|| missing("subject"))?;
        let topic = self.topic.ok_or_else(|| missing("topic"))?;

        let file = FileMeta {
            file_name: self.file_name.unwrap_or_default(),
            file_size: self.file_size.unwrap_or(0),
            file_type: self.file_type.unwrap_or_default(),
        };

        let uploaded_by = self.uploaded_by.or(self.faculty).or(self.faculty_id);
        let uploaded_at = self.uploaded_at.or(self.upload_date).or(self.created_at);

        Ok(Note::new(department, semester, subject, topic)
            .with_id(self.object_id.or(self.id).unwrap_or_default())
            .with_file(file)
            .with_upload(uploaded_by, uploaded_at))
    }
}

fn missing(field: &str) -> NoteIndexError {
    NoteIndexError::InvalidArgument(format!("missing field '{}'", field))
}

pub struct NoteLoader {
    catalog: CatalogConfig,
}

impl NoteLoader {
    pub fn new(catalog: CatalogConfig) -> Self {
        Self { catalog }
    }

    pub fn load_file(&self, path: &Path) -> Result<Vec<Note>> {
        info!("Loading notes from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| NoteIndexError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse_str(&content)
    }

    /// Accepts a bare array of notes or an envelope with a `notes` array.
    pub fn parse_str(&self, json: &str) -> Result<Vec<Note>> {
        let payload: Value = serde_json::from_str(json)?;

        let records = match payload {
            Value::Array(records) => records,
            Value::Object(mut envelope) => match envelope.remove("notes") {
                Some(Value::Array(records)) => records,
                _ => {
                    return Err(NoteIndexError::InvalidArgument(
                        "expected a 'notes' array in the response object".to_string(),
                    ));
                }
            },
            _ => {
                return Err(NoteIndexError::InvalidArgument(
                    "expected an array of notes".to_string(),
                ));
            }
        };

        let notes = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| self.parse_record(record).map_err(|e| at_record(idx, e)))
            .collect::<Result<Vec<_>>>()?;

        debug!("Parsed {} notes", notes.len());
        Ok(notes)
    }

    fn parse_record(&self, record: Value) -> Result<Note> {
        let raw: RawNote = serde_json::from_value(record)
            .map_err(|e| NoteIndexError::InvalidArgument(e.to_string()))?;
        let note = raw.into_note()?;
        Validator::validate_note(&note, &self.catalog)?;
        Ok(note)
    }
}

impl Default for NoteLoader {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

fn at_record(idx: usize, err: NoteIndexError) -> NoteIndexError {
    let detail = match err {
        NoteIndexError::InvalidArgument(msg) | NoteIndexError::Validation(msg) => msg,
        other => other.to_string(),
    };
    NoteIndexError::InvalidArgument(format!("note #{}: {}", idx, detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"_id": "n1", "department": "aiml", "semester": 3, "subject": "ML",
             "topic": "Gradient Descent", "fileName": "gd.pdf", "fileSize": 1024,
             "fileType": "application/pdf"},
            {"department": "core", "semester": 1, "subject": "Java", "topic": "Loops"}
        ]"#;

        let notes = NoteLoader::default().parse_str(json).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, "n1");
        assert_eq!(notes[0].file.file_name, "gd.pdf");
        assert_eq!(notes[0].file.file_size, 1024);
        assert_eq!(notes[1].location(), "core/1/Java");
    }

    #[test]
    fn test_parse_response_envelope() {
        let json = r#"{"success": true, "count": 1, "notes": [
            {"department": "cyber", "departmentType": "cyber", "semester": "4",
             "subject": "Crypto", "topic": "RSA", "faculty": "f-1",
             "uploadDate": "2024-03-01T10:00:00Z"}
        ]}"#;

        let notes = NoteLoader::default().parse_str(json).unwrap();
        assert_eq!(notes[0].semester, 4);
        assert_eq!(notes[0].uploaded_by.as_deref(), Some("f-1"));
        assert!(notes[0].uploaded_at.is_some());
    }

    #[test]
    fn test_department_type_fallback() {
        let json = r#"[
            {"departmentType": "aids", "semester": 2, "subject": "Stats", "topic": "Bayes"}
        ]"#;
        let notes = NoteLoader::default().parse_str(json).unwrap();
        assert_eq!(notes[0].department, "aids");
    }

    #[test]
    fn test_rejects_non_array() {
        let err = NoteLoader::default().parse_str(r#""notes""#).unwrap_err();
        assert!(matches!(err, NoteIndexError::InvalidArgument(_)));

        let err = NoteLoader::default().parse_str(r#"{"count": 0}"#).unwrap_err();
        assert!(matches!(err, NoteIndexError::InvalidArgument(_)));
    }

    #[test]
    fn test_rejects_missing_field() {
        let json = r#"[
            {"department": "core", "semester": 1, "subject": "Java", "topic": "Loops"},
            {"department": "core", "semester": 1, "subject": "Java"}
        ]"#;

        let err = NoteLoader::default().parse_str(json).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("note #1"));
        assert!(message.contains("topic"));
    }

    #[test]
    fn test_rejects_out_of_catalog_values() {
        let loader = NoteLoader::default();
        let bad_dept = r#"[{"department": "mech", "semester": 1, "subject": "A", "topic": "B"}]"#;
        let bad_sem =
            r#"[{"department": "core", "semester": "eleven", "subject": "A", "topic": "B"}]"#;

        assert!(matches!(
            loader.parse_str(bad_dept),
            Err(NoteIndexError::InvalidArgument(_))
        ));
        assert!(matches!(
            loader.parse_str(bad_sem),
            Err(NoteIndexError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        assert!(NoteLoader::default().parse_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.json");
        fs::write(
            &path,
            r#"[{"department": "core", "semester": 1, "subject": "Java", "topic": "Loops"}]"#,
        )
        .unwrap();

        let notes = NoteLoader::default().load_file(&path).unwrap();
        assert_eq!(notes.len(), 1);

        let missing = NoteLoader::default().load_file(&temp.path().join("absent.json"));
        assert!(matches!(missing, Err(NoteIndexError::FileOperation { .. })));
    }
}
