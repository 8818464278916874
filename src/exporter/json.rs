// file: src/exporter/json.rs
// description: json export utilities for note query results
// reference: https://docs.rs/serde_json

use crate::error::{NoteIndexError, Result};
use crate::models::Note;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
struct ExportedResult<'a> {
    manifest: &'a ExportManifest,
    notes: &'a [&'a Note],
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub description: String,
    pub total_notes: usize,
    pub file: String,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| NoteIndexError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    /// Writes `notes` to `<output_dir>/<name>.json` in the given order.
    pub fn export(
        &self,
        name: &str,
        description: &str,
        notes: &[&Note],
        pretty: bool,
    ) -> Result<ExportManifest> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(NoteIndexError::InvalidArgument(format!(
                "export name '{}' must be a plain file stem",
                name
            )));
        }

        let path = self.output_dir.join(format!("{}.json", name));
        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            description: description.to_string(),
            total_notes: notes.len(),
            file: path.display().to_string(),
        };

        let payload = ExportedResult {
            manifest: &manifest,
            notes,
        };
        let body = if pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            serde_json::to_string(&payload)?
        };

        fs::write(&path, body).map_err(|source| NoteIndexError::FileOperation {
            path: path.clone(),
            source,
        })?;

        info!(
            "Export complete: {} notes written to {}",
            manifest.total_notes, manifest.file
        );
        Ok(manifest)
    }
}
