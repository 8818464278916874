// file: src/utils/validation.rs
// description: note record validation utilities and helpers
// reference: input validation patterns

use crate::config::CatalogConfig;
use crate::error::{NoteIndexError, Result};
use crate::models::Note;

pub struct Validator;

impl Validator {
    pub fn validate_note(note: &Note, catalog: &CatalogConfig) -> Result<()> {
        Self::validate_department(&note.department, catalog)?;
        Self::validate_semester(note.semester, catalog)?;
        Self::validate_not_empty("subject", &note.subject)?;
        Self::validate_not_empty("topic", &note.topic)?;
        Ok(())
    }

    pub fn validate_department(department: &str, catalog: &CatalogConfig) -> Result<()> {
        if !catalog.is_known_department(department) {
            return Err(NoteIndexError::Validation(format!(
                "Unknown department '{}' (expected one of: {})",
                department,
                catalog.departments.join(", ")
            )));
        }
        Ok(())
    }

    pub fn validate_semester(semester: u32, catalog: &CatalogConfig) -> Result<()> {
        if !catalog.semester_in_range(semester) {
            return Err(NoteIndexError::Validation(format!(
                "Semester {} outside {}..={}",
                semester, catalog.min_semester, catalog.max_semester
            )));
        }
        Ok(())
    }

    pub fn validate_not_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(NoteIndexError::Validation(format!("{} is empty", field)));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}
