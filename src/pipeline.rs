// ABOUTME: End-to-end conversion from a document or topic to a rendered deck
// ABOUTME: Text extraction and outline generation are external services behind traits

use crate::config::Config;
use crate::deck::DeckAssembler;
use crate::errors::{DeckError, Result};
use crate::model::{DesignConfig, RenderedDeck};
use crate::outline::{build_outline_prompt, parse_outline};
use log::{info, warn};

/// Kinds of source document the extraction service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    Word,
    Excel,
    Text,
}

impl SourceKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(SourceKind::Pdf),
            "doc" | "docx" => Some(SourceKind::Word),
            "xls" | "xlsx" | "csv" => Some(SourceKind::Excel),
            "txt" | "md" | "text" => Some(SourceKind::Text),
            _ => None,
        }
    }
}

/// Turns document bytes into plain text.
pub trait TextExtractor {
    fn extract_text(&self, bytes: &[u8], kind: SourceKind) -> Result<String>;
}

/// Asks the AI service for an outline and returns its raw response text.
pub trait OutlineGenerator {
    fn generate_outline(&self, prompt_text: &str, slide_count: usize) -> Result<String>;
}

/// What a conversion starts from.
#[derive(Debug, Clone)]
pub enum ConversionSource {
    Document { bytes: Vec<u8>, kind: SourceKind },
    Topic(String),
}

/// Runs the whole source → outline → deck flow.
pub struct Converter<'a, E, G> {
    extractor: &'a E,
    generator: &'a G,
    assembler: &'a DeckAssembler,
    max_source_chars: usize,
    max_slides: usize,
}

impl<'a, E: TextExtractor, G: OutlineGenerator> Converter<'a, E, G> {
    pub fn new(
        config: &Config,
        extractor: &'a E,
        generator: &'a G,
        assembler: &'a DeckAssembler,
    ) -> Self {
        Self {
            extractor,
            generator,
            assembler,
            max_source_chars: config.max_source_chars,
            max_slides: config.max_slides,
        }
    }

    pub fn convert(
        &self,
        source: ConversionSource,
        slide_count: usize,
        design: &DesignConfig,
    ) -> Result<RenderedDeck> {
        if slide_count == 0 || slide_count > self.max_slides {
            return Err(DeckError::ValidationError(format!(
                "Slide count must be between 1 and {}, got {}",
                self.max_slides, slide_count
            )));
        }

        let text = match source {
            ConversionSource::Document { bytes, kind } => {
                info!("Extracting text from {:?} document ({} bytes)", kind, bytes.len());
                self.extractor.extract_text(&bytes, kind)?
            }
            ConversionSource::Topic(topic) => topic,
        };
        if text.trim().is_empty() {
            return Err(DeckError::ExtractionError(
                "No text found in the source".to_string(),
            ));
        }

        let text = truncate_chars(&text, self.max_source_chars);
        let prompt = build_outline_prompt(text, slide_count);
        info!("Requesting outline with {} slide(s)", slide_count);
        let raw = self.generator.generate_outline(&prompt, slide_count)?;

        let mut slides = parse_outline(&raw)?;
        if slides.len() > slide_count {
            warn!(
                "Outline returned {} slides, keeping the first {}",
                slides.len(),
                slide_count
            );
            slides.truncate(slide_count);
        }

        self.assembler.assemble(&slides, design)
    }
}

/// Longest prefix of `text` with at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
