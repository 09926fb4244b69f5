// ABOUTME: Deck assembly for slide-forge
// ABOUTME: Runs image resolution, layout, contrast and rendering over slides in input order

use crate::color;
use crate::config::Config;
use crate::errors::{DeckError, Result};
use crate::images::{ImageResolution, ImageResolver};
use crate::layout::{self, LayoutKind, LayoutPlan};
use crate::model::{DesignConfig, RenderedDeck, SlideRecord};
use crate::pptx::DeckHandle;
use crate::render;
use log::{debug, info};

/// Builds presentations from slide records.
///
/// Holds no per-deck state, so one assembler can serve concurrent callers;
/// every call to [`DeckAssembler::assemble`] owns its own [`DeckHandle`].
pub struct DeckAssembler {
    resolver: ImageResolver,
    title: String,
}

impl DeckAssembler {
    pub fn new(resolver: ImageResolver, title: impl Into<String>) -> Self {
        Self {
            resolver,
            title: title.into(),
        }
    }

    /// Render `slides` with `design` into a finished deck.
    ///
    /// Slides are processed one at a time, in order: at most one image fetch
    /// is in flight and output order always equals input order. An error from
    /// any slide aborts the whole deck; missing images do not.
    pub fn assemble(&self, slides: &[SlideRecord], design: &DesignConfig) -> Result<RenderedDeck> {
        self.assemble_with(slides, design, render::render_slide)
    }

    /// [`DeckAssembler::assemble`] with the slide renderer supplied by the caller.
    pub(crate) fn assemble_with<F>(
        &self,
        slides: &[SlideRecord],
        design: &DesignConfig,
        mut render_slide: F,
    ) -> Result<RenderedDeck>
    where
        F: FnMut(&mut DeckHandle, &SlideRecord, &LayoutPlan, &ImageResolution) -> Result<()>,
    {
        if slides.is_empty() {
            return Err(DeckError::EmptyInputError);
        }

        info!(
            "Assembling deck {:?} with {} slide(s), images {}",
            self.title,
            slides.len(),
            if design.include_images { "on" } else { "off" }
        );

        let mut deck = DeckHandle::new(&self.title);
        for (i, slide) in slides.iter().enumerate() {
            let slide_num = i + 1;
            self.assemble_slide(&mut deck, slide, design, &mut render_slide)
                .map_err(|e| DeckError::AssemblyError {
                    slide: slide_num,
                    message: e.to_string(),
                })?;
        }

        let rendered = deck.finalize()?;
        info!(
            "Deck {:?} finalized: {} slide(s), {} bytes",
            self.title,
            rendered.slide_count,
            rendered.bytes.len()
        );
        Ok(rendered)
    }

    fn assemble_slide<F>(
        &self,
        deck: &mut DeckHandle,
        slide: &SlideRecord,
        design: &DesignConfig,
        render_slide: &mut F,
    ) -> Result<()>
    where
        F: FnMut(&mut DeckHandle, &SlideRecord, &LayoutPlan, &ImageResolution) -> Result<()>,
    {
        let image = self.resolver.resolve(slide, design.include_images);
        let plan = layout::plan(slide, design, image.is_available());

        let theme = layout::resolve_theme_colors(design, slide.hint());
        let colors = color::adjust(&theme.background, &theme.title, &theme.text);
        let plan = plan.with_colors(colors);

        debug!(
            "Slide {:?}: {} layout, image {}",
            slide.title,
            match plan.kind {
                LayoutKind::Image => "image",
                LayoutKind::TextOnly => "text-only",
            },
            match &image {
                ImageResolution::Available(_) => "available".to_string(),
                ImageResolution::Unavailable(reason) => format!("unavailable ({:?})", reason),
            }
        );

        render_slide(deck, slide, &plan, &image)
    }
}

/// Build a deck with configuration taken from the environment and return its
/// bytes.
pub fn generate_deck(slides: &[SlideRecord], design: &DesignConfig) -> Result<Vec<u8>> {
    let config = Config::from_env();
    config.validate()?;
    let assembler = config.assembler()?;
    Ok(assembler.assemble(slides, design)?.into_bytes())
}
