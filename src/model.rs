// ABOUTME: Data model for slide-forge: slide records, design themes and rendered decks
// ABOUTME: Values here are built by the caller and consumed by a single assembly call

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structural role of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutHint {
    /// Centered, larger title and no bullets.
    Title,
    #[default]
    Content,
}

impl LayoutHint {
    /// Key used for per-layout overrides in [`DesignConfig::layouts`].
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutHint::Title => "title",
            LayoutHint::Content => "content",
        }
    }
}

/// One slide's content, independent of styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    /// Base64 image text, optionally a `data:` URL. Wins over `image_prompt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_image: Option<String>,
    #[serde(default, alias = "layout", skip_serializing_if = "Option::is_none")]
    pub layout_hint: Option<LayoutHint>,
}

impl SlideRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.image_prompt = Some(prompt.into());
        self
    }

    pub fn with_uploaded_image(mut self, encoded: impl Into<String>) -> Self {
        self.uploaded_image = Some(encoded.into());
        self
    }

    pub fn with_layout(mut self, hint: LayoutHint) -> Self {
        self.layout_hint = Some(hint);
        self
    }

    /// Effective layout hint; slides without one are content slides.
    pub fn hint(&self) -> LayoutHint {
        self.layout_hint.unwrap_or_default()
    }

    /// Bullets as they will appear on the slide.
    ///
    /// Title slides never show bullets, whatever the record carries.
    pub fn visible_bullets(&self) -> Vec<&str> {
        if self.hint() == LayoutHint::Title {
            return Vec::new();
        }
        self.bullets
            .iter()
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
            .collect()
    }
}

/// Color overrides for a single layout hint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

fn default_font() -> String {
    "Arial".to_string()
}

/// Theme applied uniformly across a deck.
///
/// Passed by reference into assembly and never mutated there; a preview of the
/// theme reads the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_title_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_text_color: Option<String>,
    #[serde(default = "default_font")]
    pub font: String,
    /// Overrides keyed by layout hint name (`"title"`, `"content"`).
    #[serde(default)]
    pub layouts: BTreeMap<String, LayoutColors>,
    /// Master switch for slide imagery.
    #[serde(default)]
    pub include_images: bool,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            global_background: None,
            global_title_color: None,
            global_text_color: None,
            font: default_font(),
            layouts: BTreeMap::new(),
            include_images: false,
        }
    }
}

impl DesignConfig {
    pub fn layout_colors(&self, hint: LayoutHint) -> Option<&LayoutColors> {
        self.layouts.get(hint.as_str())
    }
}

/// Target slide shape. Decks are always produced in widescreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Widescreen16x9,
}

impl AspectRatio {
    /// Slide size in EMU (914400 per inch).
    pub fn slide_size_emu(self) -> (i64, i64) {
        match self {
            AspectRatio::Widescreen16x9 => (12_192_000, 6_858_000),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Widescreen16x9 => "16:9",
        }
    }
}

/// Finished presentation. Owned by the caller; the engine keeps no copy.
#[derive(Debug, Clone)]
pub struct RenderedDeck {
    pub bytes: Vec<u8>,
    pub slide_count: usize,
    pub aspect_ratio: AspectRatio,
    /// Slide titles in output order.
    pub slide_titles: Vec<String>,
}

impl RenderedDeck {
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
