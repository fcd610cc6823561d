//! Serialization module for converting OpenAPI documents to JSON or YAML and
//! persisting them.
//!
//! Persistence is atomic: the document is written to a temporary sibling file
//! first and renamed into place, so a failed write never clobbers a previously
//! valid artifact.

use crate::error::{Error, Result};
use crate::openapi_builder::OpenApiDocument;
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes an OpenAPI document to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(doc: &OpenApiDocument) -> Result<String> {
    debug!("Serializing OpenAPI document to JSON");
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Serializes an OpenAPI document to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(doc: &OpenApiDocument) -> Result<String> {
    debug!("Serializing OpenAPI document to YAML");
    Ok(serde_yaml::to_string(doc)?)
}

/// Writes content to a file atomically.
///
/// Parent directories are created as needed. The content lands in a `.tmp`
/// sibling first and is renamed over the target, so concurrent readers see
/// either the old artifact or the new one, never a partial write.
///
/// # Errors
///
/// Returns an error if the directory, temporary file, or rename fails.
pub fn write_atomic(content: &str, path: &Path) -> Result<()> {
    debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::PersistenceError {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "artifact".to_string());
    let temp_path = path.with_file_name(format!("{}.tmp", file_name));

    fs::write(&temp_path, content).map_err(|e| Error::PersistenceError {
        path: temp_path.clone(),
        message: e.to_string(),
    })?;
    fs::rename(&temp_path, path).map_err(|e| Error::PersistenceError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi_builder::OpenApiBuilder;
    use tempfile::TempDir;

    fn test_document() -> OpenApiDocument {
        OpenApiBuilder::new()
            .with_info(
                "Test API".to_string(),
                "1.0.0".to_string(),
                Some("A test API".to_string()),
            )
            .build()
    }

    #[test]
    fn test_serialize_json_pretty() {
        let json = serialize_json(&test_document()).unwrap();
        assert!(json.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["openapi"], "3.0.0");
        assert_eq!(parsed["info"]["title"], "Test API");
        assert!(parsed["components"]["securitySchemes"]["bearerAuth"].is_object());
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize_yaml(&test_document()).unwrap();
        assert!(yaml.contains("openapi: 3.0.0"));
        assert!(yaml.contains("title: Test API"));
    }

    #[test]
    fn test_write_atomic_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("public/swagger.json");
        write_atomic("{}", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_atomic_overwrites_and_leaves_no_temp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("swagger.json");
        write_atomic("old", &path).unwrap();
        write_atomic("new", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_dir.path().join("swagger.json.tmp").exists());
    }

    #[test]
    fn test_write_failure_preserves_previous_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("swagger.json");
        write_atomic("previous", &path).unwrap();

        // A directory where the temp file should go forces the write to fail
        fs::create_dir(temp_dir.path().join("swagger.json.tmp")).unwrap();
        let result = write_atomic("next", &path);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }
}
