// ABOUTME: Layout planning for slide-forge slides
// ABOUTME: Chooses the image or text-only template and computes every region's geometry

use crate::color::{Background, ContrastColors, Rgb, DEFAULT_DARK, DEFAULT_TITLE_DARK, WHITE};
use crate::model::{DesignConfig, LayoutHint, SlideRecord};

pub const EMU_PER_INCH: f64 = 914_400.0;
pub const SLIDE_WIDTH_IN: f64 = 13.333;
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

const MARGIN_IN: f64 = 0.5;
/// Text column beside an image: about 40% of the slide.
const IMAGE_TEXT_WIDTH_IN: f64 = 5.33;
const IMAGE_REGION_SIZE_IN: f64 = 5.0;
/// Full-width text: 90% of the slide.
const FULL_TEXT_WIDTH_IN: f64 = 12.0;

/// Axis-aligned rectangle in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: inches_to_emu(x),
            y: inches_to_emu(y),
            width: inches_to_emu(width),
            height: inches_to_emu(height),
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Largest rectangle with the image's aspect ratio that fits inside `region`,
/// centered on both axes.
pub fn contain_fit(region: Rect, width_px: u32, height_px: u32) -> Rect {
    if width_px == 0 || height_px == 0 {
        return region;
    }
    let scale = f64::min(
        region.width as f64 / f64::from(width_px),
        region.height as f64 / f64::from(height_px),
    );
    let width = ((f64::from(width_px) * scale).floor() as i64).clamp(1, region.width);
    let height = ((f64::from(height_px) * scale).floor() as i64).clamp(1, region.height);
    Rect {
        x: region.x + (region.width - width) / 2,
        y: region.y + (region.height - height) / 2,
        width,
        height,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Image,
    TextOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_drawingml(self) -> &'static str {
        match self {
            TextAlign::Left => "l",
            TextAlign::Center => "ctr",
        }
    }
}

/// Placement and styling of one text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRegion {
    pub rect: Rect,
    pub font_size_pt: u32,
    pub color: Rgb,
    pub align: TextAlign,
    pub bold: bool,
    /// Anchor the text to the vertical middle of the box.
    pub anchor_middle: bool,
}

/// Fully resolved description of one slide, consumed verbatim by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub kind: LayoutKind,
    pub hint: LayoutHint,
    pub background: Background,
    pub font: String,
    pub title: TextRegion,
    /// `None` when bullets are not applicable to the slide.
    pub body: Option<TextRegion>,
    pub image_region: Option<Rect>,
}

impl LayoutPlan {
    /// Replace the candidate colors with contrast-corrected ones.
    pub fn with_colors(mut self, colors: ContrastColors) -> Self {
        self.title.color = colors.title;
        if let Some(body) = self.body.as_mut() {
            body.color = colors.text;
        }
        self
    }

    pub fn body_color(&self) -> Option<Rgb> {
        self.body.as_ref().map(|b| b.color)
    }
}

/// Background and candidate foregrounds after override resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub background: String,
    pub title: String,
    pub text: String,
}

/// Per-layout override, then global value, then the built-in default.
pub fn resolve_theme_colors(design: &DesignConfig, hint: LayoutHint) -> ThemeColors {
    let layout = design.layout_colors(hint);
    let pick = |layout_value: Option<&String>, global: &Option<String>, fallback: Rgb| {
        layout_value
            .or(global.as_ref())
            .cloned()
            .unwrap_or_else(|| fallback.to_hex())
    };
    ThemeColors {
        background: pick(
            layout.and_then(|l| l.background.as_ref()),
            &design.global_background,
            WHITE,
        ),
        title: pick(
            layout.and_then(|l| l.title_color.as_ref()),
            &design.global_title_color,
            DEFAULT_TITLE_DARK,
        ),
        text: pick(
            layout.and_then(|l| l.text_color.as_ref()),
            &design.global_text_color,
            DEFAULT_DARK,
        ),
    }
}

/// Decide the template and geometry for a slide. Performs no I/O.
pub fn plan(slide: &SlideRecord, design: &DesignConfig, image_available: bool) -> LayoutPlan {
    let hint = slide.hint();
    let is_title = hint == LayoutHint::Title;
    let colors = resolve_theme_colors(design, hint);
    let title_color = Rgb::parse_hex(&colors.title).unwrap_or(DEFAULT_DARK);
    let text_color = Rgb::parse_hex(&colors.text).unwrap_or(DEFAULT_DARK);
    let align = if is_title {
        TextAlign::Center
    } else {
        TextAlign::Left
    };

    let (kind, title_rect, title_size, body_rect, body_size, image_region) = if image_available {
        let image_x = SLIDE_WIDTH_IN - MARGIN_IN - IMAGE_REGION_SIZE_IN;
        let image_y = (SLIDE_HEIGHT_IN - IMAGE_REGION_SIZE_IN) / 2.0;
        let title_rect = if is_title {
            Rect::from_inches(MARGIN_IN, 2.75, IMAGE_TEXT_WIDTH_IN, 2.0)
        } else {
            Rect::from_inches(MARGIN_IN, 0.5, IMAGE_TEXT_WIDTH_IN, 1.25)
        };
        (
            LayoutKind::Image,
            title_rect,
            if is_title { 36 } else { 28 },
            Rect::from_inches(MARGIN_IN, 1.9, IMAGE_TEXT_WIDTH_IN, 5.1),
            16,
            Some(Rect::from_inches(
                image_x,
                image_y,
                IMAGE_REGION_SIZE_IN,
                IMAGE_REGION_SIZE_IN,
            )),
        )
    } else {
        let x = (SLIDE_WIDTH_IN - FULL_TEXT_WIDTH_IN) / 2.0;
        let title_rect = if is_title {
            Rect::from_inches(x, 2.75, FULL_TEXT_WIDTH_IN, 2.0)
        } else {
            Rect::from_inches(x, 0.5, FULL_TEXT_WIDTH_IN, 1.25)
        };
        (
            LayoutKind::TextOnly,
            title_rect,
            if is_title { 44 } else { 32 },
            Rect::from_inches(x, 2.0, FULL_TEXT_WIDTH_IN, 5.0),
            if is_title { 24 } else { 18 },
            None,
        )
    };

    let body = (!is_title).then(|| TextRegion {
        rect: body_rect,
        font_size_pt: body_size,
        color: text_color,
        align: TextAlign::Left,
        bold: false,
        anchor_middle: false,
    });

    LayoutPlan {
        kind,
        hint,
        background: Background::parse(&colors.background),
        font: if design.font.trim().is_empty() {
            "Arial".to_string()
        } else {
            design.font.trim().to_string()
        },
        title: TextRegion {
            rect: title_rect,
            font_size_pt: title_size,
            color: title_color,
            align,
            bold: true,
            anchor_middle: is_title,
        },
        body,
        image_region,
    }
}
