// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{NoteIndexError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

/// Shape of the note catalog the portal accepts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub departments: Vec<String>,
    pub min_semester: u32,
    pub max_semester: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub pretty: bool,
    pub preview_width: usize,
}

impl CatalogConfig {
    pub fn is_known_department(&self, department: &str) -> bool {
        self.departments.iter().any(|d| d == department)
    }

    pub fn semester_in_range(&self, semester: u32) -> bool {
        (self.min_semester..=self.max_semester).contains(&semester)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            departments: vec![
                "core".to_string(),
                "aiml".to_string(),
                "cyber".to_string(),
                "aids".to_string(),
            ],
            min_semester: 1,
            max_semester: 10,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("NOTE_INDEX")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("catalog.departments"),
        );

        let settings = builder
            .build()
            .map_err(|e| NoteIndexError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| NoteIndexError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            output: OutputConfig {
                pretty: true,
                preview_width: 40,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.catalog.departments.is_empty() {
            return Err(NoteIndexError::Config(
                "catalog.departments must list at least one department".to_string(),
            ));
        }

        if self.catalog.min_semester > self.catalog.max_semester {
            return Err(NoteIndexError::Config(format!(
                "catalog.min_semester ({}) exceeds catalog.max_semester ({})",
                self.catalog.min_semester, self.catalog.max_semester
            )));
        }

        if self.output.preview_width == 0 {
            return Err(NoteIndexError::Config(
                "output.preview_width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
