//! The render capability: turns a [`RenderRequest`] into an image file.
//!
//! [`Preview`] is the seam the dispatcher calls through. [`Previewer`] is the
//! implementation the binary ships: it lays out a card, writes SVG or PNG and
//! optionally opens the result. PNG needs a [`raster::Rasterizer`]; without one
//! the output degrades to SVG and the outcome records the fallback.

pub mod card;
pub mod open;
pub mod raster;
pub mod svg;

use crate::{
    cli::{Format, RenderRequest, models::DEFAULT_TEMPLATE},
    error::{RenderError as Error, RenderResult as Result},
};

use bytes::Bytes;
use card::Card;
use raster::Rasterizer;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File stem used when no output path is given.
pub const DEFAULT_OUT_STEM: &str = "og-image";

pub trait Preview {
    fn preview(&self, request: &RenderRequest) -> impl Future<Output = Result<PreviewOutcome>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Svg(String),
    Png(Bytes),
}

impl Rendered {
    pub fn format(&self) -> Format {
        match self {
            Rendered::Svg(_) => Format::Svg,
            Rendered::Png(_) => Format::Png,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Rendered::Svg(svg) => svg.as_bytes(),
            Rendered::Png(png) => &png[..],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOutcome {
    pub path: PathBuf,
    pub format: Format,
    pub output: Rendered,
    /// PNG was requested but SVG was produced.
    pub fell_back: bool,
    pub message: String,
}

pub struct Previewer {
    rasterizer: Option<Box<dyn Rasterizer>>,
}

impl Previewer {
    pub fn new(rasterizer: Option<Box<dyn Rasterizer>>) -> Self {
        Self { rasterizer }
    }

    /// Previewer with whatever rasterizer this build provides.
    pub fn detect() -> Self {
        Self::new(raster::detect())
    }

    fn render(&self, card: &Card, format: Format) -> Result<(Rendered, bool)> {
        match format {
            Format::Svg => Ok((Rendered::Svg(svg::render(card)), false)),
            Format::Png => {
                let rasterized = match &self.rasterizer {
                    Some(rasterizer) => rasterizer.rasterize(card),
                    None => Err(Error::RasterUnavailable(
                        "built without the render-png feature".into(),
                    )),
                };
                match rasterized {
                    Ok(png) => Ok((Rendered::Png(png), false)),
                    Err(Error::RasterUnavailable(reason)) => {
                        info!(%reason, "PNG rendering unavailable, falling back to SVG");
                        Ok((Rendered::Svg(svg::render(card)), true))
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }
}

impl Preview for Previewer {
    async fn preview(&self, request: &RenderRequest) -> Result<PreviewOutcome> {
        if request.template != DEFAULT_TEMPLATE {
            return Err(Error::UnknownTemplate(request.template.clone()));
        }

        let card = Card::layout(request);
        let requested = request.format.unwrap_or_default();
        let (output, fell_back) = self.render(&card, requested)?;
        let format = output.format();

        let mut path = request
            .out_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_STEM).with_extension(requested.extension()));
        if fell_back {
            path.set_extension(format.extension());
        }

        write_output(&path, output.as_bytes()).await?;
        info!(path = %path.display(), %format, bytes = output.as_bytes().len(), "wrote preview");

        if request.open.unwrap_or(true) {
            match open::open_path(&path).await {
                Ok(()) => debug!(path = %path.display(), "opened preview"),
                Err(e) => warn!(path = %path.display(), "failed to open preview: {e}"),
            }
        }

        let mut message = format!(
            "Wrote {}x{} {format} preview to {}",
            card.width,
            card.height,
            path.display()
        );
        if fell_back {
            message.push_str(" (PNG rendering unavailable, fell back to SVG)");
        }

        Ok(PreviewOutcome {
            path,
            format,
            output,
            fell_back,
            message,
        })
    }
}

async fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(to_error)?;
    }
    tokio::fs::write(path, data).await.map_err(to_error)
}
