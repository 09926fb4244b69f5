// ABOUTME: Color parsing and contrast correction for slide-forge
// ABOUTME: Picks title and body colors that stay legible on the slide background

/// Fallback for any color that cannot be parsed.
pub const DEFAULT_DARK: Rgb = Rgb::new(0x33, 0x33, 0x33);
pub const DEFAULT_TITLE_DARK: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        }
    }

    /// Upper-case hex without a leading `#`, the form DrawingML expects.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Weighted luminance in `[0, 1]`.
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    pub fn is_light(self) -> bool {
        self.luminance() > 0.5
    }
}

/// A slide background as configured by a theme.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(Rgb),
    /// A CSS-style gradient expression. Only previews can draw these.
    Gradient(String),
}

impl Background {
    /// Never fails: unparseable values become the default dark fill.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if is_gradient(trimmed) {
            return Background::Gradient(trimmed.to_string());
        }
        Background::Solid(Rgb::parse_hex(trimmed).unwrap_or(DEFAULT_DARK))
    }

    pub fn is_light(&self) -> bool {
        match self {
            Background::Solid(rgb) => rgb.is_light(),
            Background::Gradient(_) => false,
        }
    }
}

fn is_gradient(value: &str) -> bool {
    value.to_ascii_lowercase().contains("gradient")
}

/// Foreground colors chosen for a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastColors {
    pub title: Rgb,
    pub text: Rgb,
}

/// Correct title and body colors for legibility against `background`.
///
/// Light backgrounds (luminance above 0.5) get dark text, everything else
/// gets light text. A candidate that already sits on the right side is kept.
/// Gradients are treated as dark.
pub fn adjust(background: &str, candidate_title: &str, candidate_text: &str) -> ContrastColors {
    let title = Rgb::parse_hex(candidate_title).unwrap_or(DEFAULT_DARK);
    let text = Rgb::parse_hex(candidate_text).unwrap_or(DEFAULT_DARK);
    adjust_parsed(&Background::parse(background), title, text)
}

/// [`adjust`] for already parsed values.
pub fn adjust_parsed(background: &Background, title: Rgb, text: Rgb) -> ContrastColors {
    if background.is_light() {
        ContrastColors {
            title: if title.is_light() { DEFAULT_TITLE_DARK } else { title },
            text: if text.is_light() { DEFAULT_DARK } else { text },
        }
    } else {
        ContrastColors {
            title: if title.is_light() { title } else { WHITE },
            text: if text.is_light() { text } else { WHITE },
        }
    }
}
