// ABOUTME: Error types for the slide-forge deck engine
// ABOUTME: Separates fatal failures from the states that degrade a deck cosmetically

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("No slides supplied: a deck needs at least one slide")]
    EmptyInputError,

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to fetch remote resource: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("Outline parse error: {0}")]
    OutlineParseError(String),

    #[error("Text extraction error: {0}")]
    ExtractionError(String),

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Failed to assemble slide {slide}: {message}")]
    AssemblyError { slide: usize, message: String },

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),
}

impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        DeckError::OutlineParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
