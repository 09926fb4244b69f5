// ABOUTME: Boundary with the AI outline service
// ABOUTME: Builds the outline request prompt and parses the one accepted response shape

use crate::errors::{DeckError, Result};
use crate::model::SlideRecord;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// One slide as the outline service returns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutlineSlide {
    #[serde(default)]
    title: String,
    #[serde(default)]
    bullets: Vec<String>,
    #[serde(default)]
    image_prompt: Option<String>,
}

impl From<OutlineSlide> for SlideRecord {
    fn from(slide: OutlineSlide) -> Self {
        SlideRecord {
            title: slide.title.trim().to_string(),
            bullets: slide
                .bullets
                .into_iter()
                .map(|b| b.trim().to_string())
                .filter(|b| !b.is_empty())
                .collect(),
            image_prompt: slide
                .image_prompt
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            uploaded_image: None,
            layout_hint: None,
        }
    }
}

/// Instruction text sent to the outline service along with the source.
pub fn build_outline_prompt(source_text: &str, slide_count: usize) -> String {
    format!(
        "Create a presentation outline with exactly {slide_count} slides from the material below.\n\
         Respond with only a JSON array. Each element must be an object with the keys\n\
         \"title\" (string), \"bullets\" (array of 3 to 5 short strings) and\n\
         \"imagePrompt\" (a one-sentence description of an illustration for the slide).\n\
         Do not wrap the array in another object and do not add commentary.\n\n\
         Material:\n{}",
        source_text.trim()
    )
}

/// Parse the outline service's response into slide records.
///
/// The only accepted shape is a JSON array of slide objects, optionally inside
/// a Markdown code fence. Anything else is rejected.
pub fn parse_outline(raw: &str) -> Result<Vec<SlideRecord>> {
    let body = strip_code_fence(raw.trim());
    let value: Value = serde_json::from_str(body)?;

    let Value::Array(items) = value else {
        return Err(DeckError::OutlineParseError(format!(
            "expected a JSON array of slides, found {}",
            json_kind(&value)
        )));
    };

    let mut slides = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(DeckError::OutlineParseError(format!(
                "slide {} is {}, expected an object",
                i + 1,
                json_kind(&item)
            )));
        }
        let slide: OutlineSlide = serde_json::from_value(item).map_err(|e| {
            DeckError::OutlineParseError(format!("slide {}: {}", i + 1, e))
        })?;
        slides.push(SlideRecord::from(slide));
    }

    debug!("Parsed outline with {} slide(s)", slides.len());
    Ok(slides)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // drop the info string (e.g. "json") on the opening fence line
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
