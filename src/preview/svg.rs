//! SVG output for a [`Card`].

use super::card::{CUSTOM_FAMILY, Card, DESCRIPTION_SIZE, PADDING, TITLE_SIZE};

pub fn render(card: &Card) -> String {
    let palette = card.palette;
    let font_stack = escape(&card.font_stack());
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = card.width,
        h = card.height,
    ));
    svg.push('\n');

    if let Some(url) = &card.font_url {
        svg.push_str(&format!(
            "<style>@font-face {{ font-family: '{CUSTOM_FAMILY}'; src: url('{}'); }}</style>\n",
            escape(&css_url(url))
        ));
    }

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        palette.background.hex()
    ));

    let (x, y, width, height) = card.accent_bar();
    svg.push_str(&format!(
        "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" rx=\"4\" fill=\"{}\"/>\n",
        palette.accent.hex()
    ));

    for (line, baseline) in card.title_lines.iter().zip(card.title_baselines()) {
        svg.push_str(&text_element(
            line,
            baseline,
            TITLE_SIZE,
            700,
            &palette.foreground.hex(),
            &font_stack,
        ));
    }

    for (line, baseline) in card
        .description_lines
        .iter()
        .zip(card.description_baselines())
    {
        svg.push_str(&text_element(
            line,
            baseline,
            DESCRIPTION_SIZE,
            400,
            &palette.muted.hex(),
            &font_stack,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn text_element(
    line: &str,
    baseline: f64,
    size: f64,
    weight: u16,
    fill: &str,
    font_stack: &str,
) -> String {
    format!(
        "<text x=\"{PADDING}\" y=\"{baseline}\" font-family=\"{font_stack}\" font-size=\"{size}\" font-weight=\"{weight}\" fill=\"{fill}\">{}</text>\n",
        escape(line)
    )
}

/// Percent-encode the characters that would end or break a quoted CSS `url()`.
/// The XML layer decodes entities before CSS sees the text, so XML escaping
/// alone is not enough here.
fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\'' | '"' | '\\' | '(' | ')' => out.push_str(&format!("%{:02X}", c as u32)),
            c if c.is_control() || c.is_whitespace() => {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{b:02X}"));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for use in XML content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
