//! Resolves a [`RenderRequest`] into a concrete card: canvas size, colours,
//! font stack and pre-wrapped text lines. Both the SVG writer and the
//! rasterizer draw from the same [`Card`].

use crate::cli::{Font, RenderRequest, Theme};

/// Open Graph canvas size.
pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

pub const DEFAULT_TITLE: &str = "Untitled";

pub const PADDING: f64 = 80.0;
pub const TITLE_SIZE: f64 = 72.0;
pub const TITLE_LINE_HEIGHT: f64 = 84.0;
pub const DESCRIPTION_SIZE: f64 = 32.0;
pub const DESCRIPTION_LINE_HEIGHT: f64 = 44.0;

const ACCENT_TOP: f64 = 96.0;
const ACCENT_WIDTH: f64 = 120.0;
const ACCENT_HEIGHT: f64 = 8.0;
const TITLE_TOP: f64 = 220.0;
const DESCRIPTION_GAP: f64 = 36.0;

const TITLE_COLUMNS: usize = 28;
const DESCRIPTION_COLUMNS: usize = 60;
const MAX_LINES: usize = 3;

/// Family name used for the `@font-face` rule built from a font URL.
pub const CUSTOM_FAMILY: &str = "OgCustom";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub accent: Rgb,
    pub muted: Rgb,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: Rgb(0xff, 0xff, 0xff),
            foreground: Rgb(0x11, 0x18, 0x27),
            accent: Rgb(0x25, 0x63, 0xeb),
            muted: Rgb(0x4b, 0x55, 0x63),
        },
        Theme::Dark => Palette {
            background: Rgb(0x0f, 0x17, 0x2a),
            foreground: Rgb(0xf8, 0xfa, 0xfc),
            accent: Rgb(0x38, 0xbd, 0xf8),
            muted: Rgb(0x94, 0xa3, 0xb8),
        },
        Theme::Blue => Palette {
            background: Rgb(0x1e, 0x3a, 0x8a),
            foreground: Rgb(0xff, 0xff, 0xff),
            accent: Rgb(0x93, 0xc5, 0xfd),
            muted: Rgb(0xbf, 0xdb, 0xfe),
        },
        Theme::Green => Palette {
            background: Rgb(0x14, 0x53, 0x2d),
            foreground: Rgb(0xff, 0xff, 0xff),
            accent: Rgb(0x86, 0xef, 0xac),
            muted: Rgb(0xbb, 0xf7, 0xd0),
        },
        Theme::Purple => Palette {
            background: Rgb(0x3b, 0x07, 0x64),
            foreground: Rgb(0xff, 0xff, 0xff),
            accent: Rgb(0xd8, 0xb4, 0xfe),
            muted: Rgb(0xe9, 0xd5, 0xff),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typeface {
    pub family: &'static str,
    /// Generic CSS family used when `family` is not installed.
    pub generic: &'static str,
}

pub fn typeface(font: Font) -> Typeface {
    match font {
        Font::Inter => Typeface {
            family: "Inter",
            generic: "sans-serif",
        },
        Font::Roboto => Typeface {
            family: "Roboto",
            generic: "sans-serif",
        },
        Font::Playfair => Typeface {
            family: "Playfair Display",
            generic: "serif",
        },
        Font::Opensans => Typeface {
            family: "Open Sans",
            generic: "sans-serif",
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
    pub typeface: Typeface,
    pub font_url: Option<String>,
    pub title_lines: Vec<String>,
    pub description_lines: Vec<String>,
}

impl Card {
    pub fn layout(request: &RenderRequest) -> Self {
        let title = request
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_TITLE);
        let description = request.description.as_deref().unwrap_or_default();

        Self {
            width: WIDTH,
            height: HEIGHT,
            palette: palette(request.theme.unwrap_or_default()),
            typeface: typeface(request.font.unwrap_or_default()),
            font_url: request.font_url.clone(),
            title_lines: wrap_lines(title, TITLE_COLUMNS),
            description_lines: wrap_lines(description, DESCRIPTION_COLUMNS),
        }
    }

    /// Rectangle `(x, y, width, height)` of the accent bar above the title.
    pub fn accent_bar(&self) -> (f64, f64, f64, f64) {
        (PADDING, ACCENT_TOP, ACCENT_WIDTH, ACCENT_HEIGHT)
    }

    /// Baseline y of each title line.
    pub fn title_baselines(&self) -> Vec<f64> {
        baselines(TITLE_TOP, TITLE_LINE_HEIGHT, self.title_lines.len())
    }

    /// Baseline y of each description line, placed below the title.
    pub fn description_baselines(&self) -> Vec<f64> {
        let top = TITLE_TOP
            + TITLE_LINE_HEIGHT * self.title_lines.len().saturating_sub(1) as f64
            + DESCRIPTION_GAP
            + DESCRIPTION_LINE_HEIGHT;
        baselines(top, DESCRIPTION_LINE_HEIGHT, self.description_lines.len())
    }

    /// CSS font stack, custom face first when a font URL was given.
    pub fn font_stack(&self) -> String {
        let named = format!("'{}', {}", self.typeface.family, self.typeface.generic);
        match self.font_url {
            Some(_) => format!("'{CUSTOM_FAMILY}', {named}"),
            None => named,
        }
    }
}

fn baselines(top: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| top + step * i as f64).collect()
}

/// Wrap to `columns`, keeping at most [`MAX_LINES`] lines and marking the cut
/// with an ellipsis.
fn wrap_lines(text: &str, columns: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let wrapped = textwrap::wrap(text, columns);
    let truncated = wrapped.len() > MAX_LINES;
    let mut lines: Vec<String> = wrapped
        .into_iter()
        .take(MAX_LINES)
        .map(|line| line.into_owned())
        .collect();

    if truncated {
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}
