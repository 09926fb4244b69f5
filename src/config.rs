// ABOUTME: Configuration module for slide-forge
// ABOUTME: Provides defaults, environment overrides and the derived component settings

use crate::deck::DeckAssembler;
use crate::errors::{DeckError, Result};
use crate::images::{ImageResolver, ImageResolverConfig, PROMPT_PLACEHOLDER};
use std::env;
use url::Url;

pub const DEFAULT_IMAGE_ENDPOINT: &str =
    "https://image.pollinations.ai/prompt/{prompt}?width=1024&height=768&nologo=true";

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub image_endpoint: String,
    pub image_timeout_ms: u64,
    pub image_retries: u32,
    pub image_retry_delay_ms: u64,
    pub deck_title: String,
    /// Source text beyond this many characters is not sent for outlining.
    pub max_source_chars: usize,
    pub max_slides: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            image_timeout_ms: 20000, // 20 seconds
            image_retries: 0,
            image_retry_delay_ms: 1500,
            deck_title: "Presentation".to_string(),
            max_source_chars: 12000,
            max_slides: 30,
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse::<T>().ok())
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            image_endpoint: env::var("SLIDE_FORGE_IMAGE_ENDPOINT")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.image_endpoint),
            image_timeout_ms: env_parsed("SLIDE_FORGE_IMAGE_TIMEOUT_MS")
                .unwrap_or(defaults.image_timeout_ms),
            image_retries: env_parsed("SLIDE_FORGE_IMAGE_RETRIES").unwrap_or(defaults.image_retries),
            image_retry_delay_ms: env_parsed("SLIDE_FORGE_IMAGE_RETRY_DELAY_MS")
                .unwrap_or(defaults.image_retry_delay_ms),
            deck_title: env::var("SLIDE_FORGE_DECK_TITLE").unwrap_or(defaults.deck_title),
            max_source_chars: env_parsed("SLIDE_FORGE_MAX_SOURCE_CHARS")
                .unwrap_or(defaults.max_source_chars),
            max_slides: env_parsed("SLIDE_FORGE_MAX_SLIDES").unwrap_or(defaults.max_slides),
        }
    }

    /// Check the settings that cannot be corrected silently.
    pub fn validate(&self) -> Result<()> {
        if !self.image_endpoint.contains(PROMPT_PLACEHOLDER) {
            return Err(DeckError::ConfigError(format!(
                "Image endpoint must contain {}: {}",
                PROMPT_PLACEHOLDER, self.image_endpoint
            )));
        }
        let probe = self.image_endpoint.replace(PROMPT_PLACEHOLDER, "probe");
        let url = Url::parse(&probe).map_err(|e| {
            DeckError::ConfigError(format!(
                "Invalid image endpoint {}: {}",
                self.image_endpoint, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DeckError::ConfigError(format!(
                "Image endpoint must use http or https: {}",
                self.image_endpoint
            )));
        }
        if self.image_timeout_ms == 0 {
            return Err(DeckError::ConfigError(
                "Image timeout must be greater than zero".to_string(),
            ));
        }
        if self.max_slides == 0 {
            return Err(DeckError::ConfigError(
                "Maximum slide count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the image resolver settings from this config
    pub fn image_resolver_config(&self) -> ImageResolverConfig {
        ImageResolverConfig {
            endpoint: self.image_endpoint.clone(),
            timeout_ms: self.image_timeout_ms,
            retries: self.image_retries,
            retry_delay_ms: self.image_retry_delay_ms,
        }
    }

    pub fn image_resolver(&self) -> Result<ImageResolver> {
        ImageResolver::new(self.image_resolver_config())
    }

    /// Get a deck assembler with defaults from this config
    pub fn assembler(&self) -> Result<DeckAssembler> {
        Ok(DeckAssembler::new(self.image_resolver()?, &self.deck_title))
    }
}
