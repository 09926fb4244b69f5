// ABOUTME: Image resolution for slide-forge slides
// ABOUTME: Decodes uploaded images or fetches prompt-generated ones, never failing the deck

use crate::config::DEFAULT_IMAGE_ENDPOINT;
use crate::errors::{DeckError, Result};
use crate::model::SlideRecord;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Placeholder substituted with the percent-encoded prompt.
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// Where a resolved image came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOrigin {
    Uploaded,
    Remote(String),
}

/// Image bytes ready for embedding.
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub bytes: Vec<u8>,
    /// MIME type sniffed from `bytes`; declared types are not trusted.
    pub content_type: String,
    pub origin: ImageOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The design turned imagery off.
    Disabled,
    /// No prompt on the slide, or a blank prompt and a blank title.
    NoPrompt,
    /// The uploaded image could not be decoded.
    Undecodable,
    /// Network error, timeout, bad status or a body that is not an image.
    FetchFailed,
}

/// Outcome of resolving a slide's image. Unavailability is a state, not an error.
#[derive(Debug, Clone)]
pub enum ImageResolution {
    Available(ResolvedImage),
    Unavailable(UnavailableReason),
}

impl ImageResolution {
    pub fn is_available(&self) -> bool {
        matches!(self, ImageResolution::Available(_))
    }

    pub fn image(&self) -> Option<&ResolvedImage> {
        match self {
            ImageResolution::Available(image) => Some(image),
            ImageResolution::Unavailable(_) => None,
        }
    }
}

/// Settings for [`ImageResolver`].
#[derive(Debug, Clone)]
pub struct ImageResolverConfig {
    /// URL template containing [`PROMPT_PLACEHOLDER`].
    pub endpoint: String,
    pub timeout_ms: u64,
    /// Extra attempts after the first failed fetch.
    pub retries: u32,
    pub retry_delay_ms: u64,
}

impl Default for ImageResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            timeout_ms: 20000,
            retries: 0,
            retry_delay_ms: 1500,
        }
    }
}

/// Produces image bytes for slides, or reports that none are available.
pub struct ImageResolver {
    client: Client,
    config: ImageResolverConfig,
}

impl ImageResolver {
    pub fn new(config: ImageResolverConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(DeckError::FetchError)?;
        Ok(Self { client, config })
    }

    /// Resolve the image for `slide`. Never returns an error and never touches
    /// the network when `include_images` is false.
    pub fn resolve(&self, slide: &SlideRecord, include_images: bool) -> ImageResolution {
        if !include_images {
            return ImageResolution::Unavailable(UnavailableReason::Disabled);
        }

        if let Some(encoded) = slide.uploaded_image.as_deref().filter(|s| !s.trim().is_empty()) {
            return match decode_uploaded_image(encoded) {
                Ok(image) => {
                    debug!("Using uploaded image for slide {:?}", slide.title);
                    ImageResolution::Available(image)
                }
                Err(e) => {
                    warn!("Ignoring uploaded image for slide {:?}: {}", slide.title, e);
                    ImageResolution::Unavailable(UnavailableReason::Undecodable)
                }
            };
        }

        let Some(prompt) = image_prompt_for(slide) else {
            return ImageResolution::Unavailable(UnavailableReason::NoPrompt);
        };

        let url = self.prompt_url(prompt);
        match self.fetch(&url) {
            Ok(image) => ImageResolution::Available(image),
            Err(e) => {
                warn!("Image unavailable for slide {:?}: {}", slide.title, e);
                ImageResolution::Unavailable(UnavailableReason::FetchFailed)
            }
        }
    }

    /// Request URL for a prompt. Identical prompts always give identical URLs.
    pub fn prompt_url(&self, prompt: &str) -> String {
        self.config
            .endpoint
            .replace(PROMPT_PLACEHOLDER, &urlencoding::encode(prompt.trim()))
    }

    /// Fetch an image, retrying after a fixed delay when configured to.
    fn fetch(&self, url: &str) -> Result<ResolvedImage> {
        info!("Fetching slide image: {}", url);

        let attempts = self.config.retries + 1;
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.fetch_once(url) {
                Ok(image) => return Ok(image),
                Err(e) => last_error = Some(e),
            }

            if attempt < attempts {
                info!(
                    "Image fetch attempt {} failed, retrying in {} ms",
                    attempt, self.config.retry_delay_ms
                );
                std::thread::sleep(Duration::from_millis(self.config.retry_delay_ms));
            }
        }

        Err(last_error
            .unwrap_or_else(|| DeckError::ImageError("Unknown error fetching image".to_string())))
    }

    fn fetch_once(&self, url: &str) -> Result<ResolvedImage> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeckError::ImageError(format!("HTTP error: {}", status)));
        }

        let header_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string());
        let bytes = response.bytes()?.to_vec();
        if bytes.is_empty() {
            return Err(DeckError::ImageError("Empty response body".to_string()));
        }

        let content_type = sniff_content_type(&bytes)
            .map(str::to_string)
            .ok_or_else(|| {
                DeckError::ImageError(format!(
                    "Response is not a recognizable image (content type {:?})",
                    header_type
                ))
            })?;

        if header_type.as_deref().is_some_and(|t| t != content_type) {
            debug!(
                "Image served as {:?} but its bytes are {}",
                header_type, content_type
            );
        }

        Ok(ResolvedImage {
            bytes,
            content_type,
            origin: ImageOrigin::Remote(url.to_string()),
        })
    }
}

/// The prompt to request an image with.
///
/// Slides without an `image_prompt` request nothing. A prompt that is present
/// but blank falls back to the slide title.
pub fn image_prompt_for(slide: &SlideRecord) -> Option<&str> {
    let prompt = slide.image_prompt.as_deref()?.trim();
    if !prompt.is_empty() {
        return Some(prompt);
    }
    Some(slide.title.trim()).filter(|t| !t.is_empty())
}

/// Decode base64 image text, with or without a `data:<mime>;base64,` prefix.
pub fn decode_uploaded_image(encoded: &str) -> Result<ResolvedImage> {
    let encoded = encoded.trim();
    let (declared_type, payload) = match encoded.strip_prefix("data:") {
        Some(rest) => {
            let (meta, data) = rest
                .split_once(',')
                .ok_or_else(|| DeckError::ImageError("Malformed data URL".to_string()))?;
            if !meta.ends_with(";base64") {
                return Err(DeckError::ImageError(
                    "Data URL is not base64 encoded".to_string(),
                ));
            }
            let mime = meta.trim_end_matches(";base64");
            (Some(mime.to_string()).filter(|m| !m.is_empty()), data)
        }
        None => (None, encoded),
    };

    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(&cleaned)
        .or_else(|_| STANDARD_NO_PAD.decode(&cleaned))
        .map_err(|e| DeckError::ImageError(format!("Invalid base64 image: {}", e)))?;

    let sniffed = sniff_content_type(&bytes)
        .ok_or_else(|| DeckError::ImageError("Uploaded data is not an image".to_string()))?;

    if declared_type.as_deref().is_some_and(|t| t != sniffed) {
        debug!(
            "Uploaded image declared as {:?} but its bytes are {}",
            declared_type, sniffed
        );
    }

    Ok(ResolvedImage {
        bytes,
        content_type: sniffed.to_string(),
        origin: ImageOrigin::Uploaded,
    })
}

/// MIME type from the image's magic bytes.
pub fn sniff_content_type(bytes: &[u8]) -> Option<&'static str> {
    let format = image::guess_format(bytes).ok()?;
    Some(match format {
        image::ImageFormat::Png => "image/png",
        image::ImageFormat::Jpeg => "image/jpeg",
        image::ImageFormat::Gif => "image/gif",
        image::ImageFormat::WebP => "image/webp",
        image::ImageFormat::Bmp => "image/bmp",
        image::ImageFormat::Tiff => "image/tiff",
        _ => "application/octet-stream",
    })
}
