//! PNG rasterization.
//!
//! A rasterizer is only present when the crate is built with the `render-png`
//! feature; [`detect`] resolves it once and callers fall back to SVG when it
//! returns `None`.

use bytes::Bytes;

use super::card::Card;
use crate::error::RenderResult;

pub trait Rasterizer {
    fn rasterize(&self, card: &Card) -> RenderResult<Bytes>;
}

pub fn detect() -> Option<Box<dyn Rasterizer>> {
    #[cfg(feature = "render-png")]
    {
        Some(Box::new(cairo_backend::CairoRasterizer))
    }
    #[cfg(not(feature = "render-png"))]
    {
        tracing::debug!("built without render-png, PNG output will fall back to SVG");
        None
    }
}

#[cfg(feature = "render-png")]
mod cairo_backend {
    use bytes::Bytes;
    use cairo::{Format, ImageSurface};
    use piet::kurbo::Rect;
    use piet::{Color, FontFamily, FontWeight, RenderContext, Text, TextLayoutBuilder};
    use piet_cairo::CairoRenderContext;

    use super::Rasterizer;
    use crate::{
        error::{RenderError as Error, RenderResult as Result},
        preview::card::{Card, DESCRIPTION_SIZE, PADDING, Rgb, TITLE_SIZE},
    };

    pub struct CairoRasterizer;

    impl Rasterizer for CairoRasterizer {
        fn rasterize(&self, card: &Card) -> Result<Bytes> {
            let surface = ImageSurface::create(Format::ARgb32, card.width as i32, card.height as i32)
                .map_err(|e| Error::RasterUnavailable(format!("failed to create cairo surface: {e}")))?;
            let cr = cairo::Context::new(&surface)
                .map_err(|e| Error::Raster(format!("failed to create cairo context: {e}")))?;

            {
                let mut rc = CairoRenderContext::new(&cr);
                draw(card, &mut rc)?;
                rc.finish().map_err(|e| Error::Raster(e.to_string()))?;
            }

            surface.flush();
            let mut png = Vec::new();
            surface
                .write_to_png(&mut png)
                .map_err(|e| Error::Raster(format!("failed to encode png: {e}")))?;

            Ok(Bytes::from(png))
        }
    }

    fn draw(card: &Card, rc: &mut CairoRenderContext<'_>) -> Result<()> {
        let palette = card.palette;
        let full = Rect::new(0.0, 0.0, card.width as f64, card.height as f64);
        rc.fill(full, &color(palette.background));

        let (x, y, w, h) = card.accent_bar();
        rc.fill(Rect::new(x, y, x + w, y + h), &color(palette.accent));

        let family = rc
            .text()
            .font_family(card.typeface.family)
            .unwrap_or(if card.typeface.generic == "serif" {
                FontFamily::SERIF
            } else {
                FontFamily::SANS_SERIF
            });
        let max_width = card.width as f64 - 2.0 * PADDING;

        let title = card.title_lines.iter().zip(card.title_baselines());
        for (line, baseline) in title {
            let layout = rc
                .text()
                .new_text_layout(line.clone())
                .font(family.clone(), TITLE_SIZE)
                .default_attribute(FontWeight::BOLD)
                .text_color(color(palette.foreground))
                .max_width(max_width)
                .build()
                .map_err(|e| Error::Raster(e.to_string()))?;
            rc.draw_text(&layout, (PADDING, baseline - TITLE_SIZE));
        }

        let description = card
            .description_lines
            .iter()
            .zip(card.description_baselines());
        for (line, baseline) in description {
            let layout = rc
                .text()
                .new_text_layout(line.clone())
                .font(family.clone(), DESCRIPTION_SIZE)
                .text_color(color(palette.muted))
                .max_width(max_width)
                .build()
                .map_err(|e| Error::Raster(e.to_string()))?;
            rc.draw_text(&layout, (PADDING, baseline - DESCRIPTION_SIZE));
        }

        Ok(())
    }

    fn color(rgb: Rgb) -> Color {
        Color::rgb8(rgb.0, rgb.1, rgb.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "render-png"))]
    #[test]
    fn no_rasterizer_without_feature() {
        assert!(detect().is_none());
    }

    #[cfg(feature = "render-png")]
    #[test]
    fn cairo_rasterizer_writes_png() {
        use crate::cli::RenderRequest;

        let rasterizer = detect().expect("rasterizer should be available");
        let card = Card::layout(&RenderRequest {
            title: Some("Hello".into()),
            ..RenderRequest::default()
        });
        let png = rasterizer.rasterize(&card).expect("rasterize should succeed");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
