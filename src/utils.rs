// ABOUTME: Utility functions for the slide-forge command line
// ABOUTME: Validates input paths, loads JSON inputs and writes finished decks to disk

use crate::errors::{DeckError, Result};
use crate::model::{DesignConfig, SlideRecord};
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeckError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(DeckError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(DeckError::FileReadError)?;
        } else if !parent.is_dir() {
            return Err(DeckError::ValidationError(format!(
                "Path exists but is not a directory: {:?}",
                parent
            )));
        }
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    validate_file_exists(path)?;
    let content = fs::read_to_string(path).map_err(DeckError::FileReadError)?;
    serde_json::from_str(&content).map_err(|e| {
        DeckError::ValidationError(format!("Invalid JSON in {:?}: {}", path, e))
    })
}

/// Load slide records from a JSON array file
pub fn load_slides(path: &Path) -> Result<Vec<SlideRecord>> {
    info!("Loading slides from {:?}", path);
    read_json(path)
}

/// Load a design from a JSON file
pub fn load_design(path: &Path) -> Result<DesignConfig> {
    info!("Loading design from {:?}", path);
    read_json(path)
}

/// Write deck bytes, creating the parent directory if needed
pub fn write_deck_to_file(bytes: &[u8], output_file: &Path) -> Result<()> {
    ensure_parent_directory_exists(output_file)?;
    fs::write(output_file, bytes).map_err(DeckError::FileReadError)?;
    info!("PPTX file created at {:?}", output_file);
    Ok(())
}
