//! .

use std::{fmt, path::PathBuf};

use clap::ValueEnum;

pub const DEFAULT_TEMPLATE: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Preview,
}

impl Command {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "preview" => Some(Command::Preview),
            _ => None,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Blue,
    Green,
    Purple,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Font {
    #[default]
    Inter,
    Roboto,
    Playfair,
    Opensans,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Png,
    Svg,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Names of every value of a closed option, in declaration order.
pub fn choices<T: ValueEnum>() -> Vec<String> {
    T::value_variants()
        .iter()
        .filter_map(|v| v.to_possible_value())
        .map(|v| v.get_name().to_string())
        .collect()
}

/// Everything the render capability needs to produce one image.
///
/// Unset fields are defaulted by the capability, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub template: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme: Option<Theme>,
    pub font: Option<Font>,
    pub font_url: Option<String>,
    pub format: Option<Format>,
    pub out_path: Option<PathBuf>,
    pub open: Option<bool>,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            title: None,
            description: None,
            theme: None,
            font: None,
            font_url: None,
            format: None,
            out_path: None,
            open: None,
        }
    }
}

/// A validated `preview` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub request: RenderRequest,
    pub json: bool,
}
