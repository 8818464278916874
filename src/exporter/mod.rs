// file: src/exporter/mod.rs
// description: result export module exports
// reference: internal module structure

pub mod json;

pub use json::{ExportManifest, JsonExporter};
