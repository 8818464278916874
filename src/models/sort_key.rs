// file: src/models/sort_key.rs
// description: sort keys and non-empty key sequences for note ordering
// reference: internal data structures

use super::Note;
use crate::error::{NoteIndexError, Result};
use crate::utils::collation::collate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Department,
    Semester,
    Subject,
    Topic,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Department => "department",
            SortKey::Semester => "semester",
            SortKey::Subject => "subject",
            SortKey::Topic => "topic",
        }
    }

    pub fn compare(&self, a: &Note, b: &Note) -> Ordering {
        match self {
            SortKey::Department => collate(&a.department, &b.department),
            SortKey::Semester => a.semester.cmp(&b.semester),
            SortKey::Subject => collate(&a.subject, &b.subject),
            SortKey::Topic => collate(&a.topic, &b.topic),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = NoteIndexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "department" | "dept" => Ok(SortKey::Department),
            "semester" | "sem" => Ok(SortKey::Semester),
            "subject" => Ok(SortKey::Subject),
            "topic" => Ok(SortKey::Topic),
            other => Err(NoteIndexError::InvalidArgument(format!(
                "unknown sort key '{}' (expected department, semester, subject or topic)",
                other
            ))),
        }
    }
}

/// Non-empty key sequence; ties on key `i` fall through to key `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    keys: Vec<SortKey>,
}

impl SortOrder {
    pub fn new(keys: Vec<SortKey>) -> Result<Self> {
        if keys.is_empty() {
            return Err(NoteIndexError::InvalidArgument(
                "sort order needs at least one key".to_string(),
            ));
        }
        Ok(Self { keys })
    }

    /// department, then semester, then subject
    pub fn canonical() -> Self {
        Self {
            keys: vec![SortKey::Department, SortKey::Semester, SortKey::Subject],
        }
    }

    pub fn by_topic() -> Self {
        Self {
            keys: vec![SortKey::Topic],
        }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn compare(&self, a: &Note, b: &Note) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::canonical()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.keys.iter().map(SortKey::as_str).collect();
        f.write_str(&names.join(" > "))
    }
}
