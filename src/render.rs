// ABOUTME: Slide rendering for slide-forge
// ABOUTME: Writes one planned slide, with its text and optional image, into the deck handle

use crate::color::{Background, Rgb};
use crate::errors::{DeckError, Result};
use crate::images::{ImageResolution, ResolvedImage};
use crate::layout::{contain_fit, LayoutPlan, Rect, TextAlign, TextRegion};
use crate::model::SlideRecord;
use crate::pptx::{DeckHandle, MediaFormat, SlideBuilder};
use image::ImageFormat;
use log::{debug, warn};
use std::io::Cursor;

/// Solid fill used when a theme asks for a gradient background.
pub const GRADIENT_FALLBACK_FILL: Rgb = Rgb::new(0x1F, 0x29, 0x37);

/// Text shown in the image region when an image cannot be embedded.
pub const IMAGE_PLACEHOLDER_TEXT: &str = "[image unavailable]";

/// An image decoded and converted into a format the deck can embed.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub format: MediaFormat,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Write one slide into `deck` following `plan`.
///
/// Image embedding problems are recovered here with a placeholder. A plan
/// with regions off the slide is an error.
pub fn render_slide(
    deck: &mut DeckHandle,
    slide: &SlideRecord,
    plan: &LayoutPlan,
    image: &ImageResolution,
) -> Result<()> {
    check_geometry(deck, plan)?;
    let mut builder = SlideBuilder::new(&slide.title);
    builder.set_background(background_fill(&plan.background));

    let title = slide.title.trim();
    let title_lines: Vec<&str> = if title.is_empty() {
        Vec::new()
    } else {
        vec![title]
    };
    builder.add_text_box("Title", &plan.title, &plan.font, &title_lines, false);

    if let Some(body) = &plan.body {
        let bullets = slide.visible_bullets();
        if !bullets.is_empty() {
            builder.add_text_box("Content", body, &plan.font, &bullets, true);
        }
    }

    if let (Some(region), Some(resolved)) = (plan.image_region, image.image()) {
        match prepare_image(resolved) {
            Ok(prepared) => {
                let frame = contain_fit(region, prepared.width, prepared.height);
                debug!(
                    "Embedding {}x{} {:?} image for slide {:?}",
                    prepared.width, prepared.height, prepared.format, slide.title
                );
                builder.add_picture(&frame, prepared.format, prepared.bytes);
            }
            Err(e) => {
                warn!(
                    "Could not embed image for slide {:?}, using placeholder: {}",
                    slide.title, e
                );
                add_image_placeholder(&mut builder, region, plan);
            }
        }
    }

    deck.add_slide(builder);
    Ok(())
}

/// Every planned region must lie on the slide.
fn check_geometry(deck: &DeckHandle, plan: &LayoutPlan) -> Result<()> {
    let (width, height) = deck.aspect_ratio().slide_size_emu();
    let slide = Rect {
        x: 0,
        y: 0,
        width,
        height,
    };
    let regions = std::iter::once(&plan.title.rect)
        .chain(plan.body.as_ref().map(|b| &b.rect))
        .chain(plan.image_region.as_ref());
    for region in regions {
        if !slide.contains(region) {
            return Err(DeckError::RenderError(format!(
                "Region {:?} lies outside the slide",
                region
            )));
        }
    }
    Ok(())
}

/// Solid fill for a planned background. Gradients are not drawn.
pub fn background_fill(background: &Background) -> Rgb {
    match background {
        Background::Solid(rgb) => *rgb,
        Background::Gradient(value) => {
            debug!("Gradient background {:?} rendered as solid fill", value);
            GRADIENT_FALLBACK_FILL
        }
    }
}

/// Decode the image to learn its size, converting formats the deck cannot
/// embed directly into PNG.
pub fn prepare_image(image: &ResolvedImage) -> Result<PreparedImage> {
    let format = image::guess_format(&image.bytes)
        .map_err(|e| DeckError::RenderError(format!("Unknown image format: {}", e)))?;
    let decoded = image::load_from_memory_with_format(&image.bytes, format)
        .map_err(|e| DeckError::RenderError(format!("Failed to decode image: {}", e)))?;
    let (width, height) = (decoded.width(), decoded.height());

    let embeddable = match format {
        ImageFormat::Png => Some(MediaFormat::Png),
        ImageFormat::Jpeg => Some(MediaFormat::Jpeg),
        ImageFormat::Gif => Some(MediaFormat::Gif),
        _ => None,
    };

    match embeddable {
        Some(media) => Ok(PreparedImage {
            format: media,
            bytes: image.bytes.clone(),
            width,
            height,
        }),
        None => {
            debug!("Re-encoding {:?} image as PNG", format);
            let mut buffer = Cursor::new(Vec::new());
            decoded
                .write_to(&mut buffer, ImageFormat::Png)
                .map_err(|e| DeckError::RenderError(format!("Failed to re-encode image: {}", e)))?;
            Ok(PreparedImage {
                format: MediaFormat::Png,
                bytes: buffer.into_inner(),
                width,
                height,
            })
        }
    }
}

fn add_image_placeholder(builder: &mut SlideBuilder, region: Rect, plan: &LayoutPlan) {
    let placeholder = TextRegion {
        rect: region,
        font_size_pt: 14,
        color: plan.body_color().unwrap_or(plan.title.color),
        align: TextAlign::Center,
        bold: false,
        anchor_middle: true,
    };
    builder.add_text_box(
        "Image Placeholder",
        &placeholder,
        &plan.font,
        &[IMAGE_PLACEHOLDER_TEXT],
        false,
    );
}
