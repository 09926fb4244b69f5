// ABOUTME: Library module for the slide-forge program.
// ABOUTME: Turns slide records and a design theme into a PowerPoint deck.

// Reexport modules
pub mod color;
pub mod config;
pub mod deck;
pub mod errors;
pub mod images;
pub mod layout;
pub mod model;
pub mod outline;
pub mod pipeline;
pub mod pptx;
pub mod render;
pub mod template;
pub mod utils;

// Reexport common types and functions
pub use color::{adjust, Background, ContrastColors, Rgb};
pub use config::Config;
pub use deck::{generate_deck, DeckAssembler};
pub use errors::{DeckError, Result};
pub use images::{ImageResolution, ImageResolver, ImageResolverConfig, ResolvedImage};
pub use layout::{plan, LayoutKind, LayoutPlan};
pub use model::{AspectRatio, DesignConfig, LayoutColors, LayoutHint, RenderedDeck, SlideRecord};
pub use outline::{build_outline_prompt, parse_outline};
pub use pipeline::{ConversionSource, Converter, OutlineGenerator, SourceKind, TextExtractor};
pub use pptx::{deck_file_name, DeckHandle, PPTX_CONTENT_TYPE};
pub use render::render_slide;

#[cfg(test)]
mod tests;
