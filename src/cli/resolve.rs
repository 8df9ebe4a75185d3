//! .

use super::{
    args::{OptionValue, ParsedCommand},
    error::{RequestError as Error, RequestResult as Result},
    models::{Command, Font, Format, Invocation, RenderRequest, Theme, choices},
};

use clap::ValueEnum;
use std::path::PathBuf;

/// Outcome of checking the command word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolved {
    Run(Invocation),
    Usage,
}

pub(crate) fn resolve(parsed: &ParsedCommand) -> Result<Resolved> {
    let command = parsed.command.as_deref().and_then(Command::from_token);
    match command {
        Some(Command::Preview) => Ok(Resolved::Run(Invocation {
            request: map_request(parsed)?,
            json: parsed.get("json").and_then(OptionValue::as_bool) == Some(true),
        })),
        None => Ok(Resolved::Usage),
    }
}

fn map_request(parsed: &ParsedCommand) -> Result<RenderRequest> {
    let text = |name: &str| parsed.get(name).and_then(OptionValue::as_str);

    let open_disabled = parsed.get("open") == Some(&OptionValue::Bool(false))
        || parsed.get("no-open") == Some(&OptionValue::Bool(true));

    Ok(RenderRequest {
        title: text("title").map(str::to_string),
        description: text("description").map(str::to_string),
        theme: text("theme").map(parse_theme).transpose()?,
        font: text("font").map(parse_font).transpose()?,
        font_url: text("fontUrl").map(str::to_string),
        format: text("format").map(parse_format).transpose()?,
        out_path: text("out").map(PathBuf::from),
        open: open_disabled.then_some(false),
        ..RenderRequest::default()
    })
}

fn parse_theme(value: &str) -> Result<Theme> {
    Theme::from_str(value, false).map_err(|_| Error::InvalidTheme {
        value: value.to_string(),
        expected: choices::<Theme>().join(", "),
    })
}

fn parse_font(value: &str) -> Result<Font> {
    Font::from_str(value, false).map_err(|_| Error::InvalidFont {
        value: value.to_string(),
        expected: choices::<Font>().join(", "),
    })
}

fn parse_format(value: &str) -> Result<Format> {
    Format::from_str(value, false).map_err(|_| Error::InvalidFormat {
        value: value.to_string(),
        expected: choices::<Format>().join(", "),
    })
}

pub fn usage() -> String {
    format!(
        "\
Usage: og-preview preview [options]

Options:
  --title <text>         Title text
  --description <text>   Description text
  --theme <name>         {themes}
  --font <name>          {fonts}
  --fontUrl <url>        Custom font URL
  --format <type>        {formats}
  --out <path>           Output file path
  --open / --no-open     Open the image after rendering
  --json                 Print the result as JSON",
        themes = choices::<Theme>().join(" | "),
        fonts = choices::<Font>().join(" | "),
        formats = choices::<Format>().join(" | "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::parse;

    fn run_request(tokens: &[&str]) -> RenderRequest {
        match resolve(&parse(tokens)).expect("resolve should succeed") {
            Resolved::Run(invocation) => invocation.request,
            Resolved::Usage => panic!("Expected a runnable invocation"),
        }
    }

    #[test]
    fn missing_command_is_usage() {
        assert_eq!(resolve(&parse::<&str>(&[])), Ok(Resolved::Usage));
    }

    #[test]
    fn unknown_command_is_usage() {
        assert_eq!(resolve(&parse(&["bogus", "--theme", "nope"])), Ok(Resolved::Usage));
    }

    #[test]
    fn format_only_request() {
        let req = run_request(&["preview", "--format", "svg"]);
        assert_eq!(
            req,
            RenderRequest {
                format: Some(Format::Svg),
                ..RenderRequest::default()
            }
        );
        assert_eq!(req.template, "default");
    }

    #[test]
    fn all_string_options_are_copied() {
        let req = run_request(&[
            "preview",
            "--title",
            "Hello",
            "--description",
            "World",
            "--theme",
            "dark",
            "--font",
            "playfair",
            "--fontUrl",
            "https://example.com/f.woff2",
            "--format",
            "png",
            "--out",
            "cards/hello.png",
        ]);
        assert_eq!(req.title.as_deref(), Some("Hello"));
        assert_eq!(req.description.as_deref(), Some("World"));
        assert_eq!(req.theme, Some(Theme::Dark));
        assert_eq!(req.font, Some(Font::Playfair));
        assert_eq!(req.font_url.as_deref(), Some("https://example.com/f.woff2"));
        assert_eq!(req.format, Some(Format::Png));
        assert_eq!(req.out_path, Some(PathBuf::from("cards/hello.png")));
        assert_eq!(req.open, None);
    }

    #[test]
    fn boolean_values_are_not_copied_into_text_fields() {
        let req = run_request(&["preview", "--title", "--theme"]);
        assert_eq!(req.title, None);
        assert_eq!(req.theme, None);
    }

    #[test]
    fn no_open_disables_open() {
        assert_eq!(run_request(&["preview", "--no-open"]).open, Some(false));
    }

    #[test]
    fn open_flag_leaves_open_unset() {
        assert_eq!(run_request(&["preview", "--open"]).open, None);
        assert_eq!(run_request(&["preview", "--open", "yes"]).open, None);
    }

    #[test]
    fn closed_values_are_matched_exactly() {
        let req = run_request(&["preview", "--theme", "purple", "--font", "opensans"]);
        assert_eq!(req.theme, Some(Theme::Purple));
        assert_eq!(req.font, Some(Font::Opensans));

        let err = resolve(&parse(&["preview", "--theme", "Purple"])).unwrap_err();
        assert!(matches!(err, Error::InvalidTheme { ref value, .. } if value == "Purple"));
        let err = resolve(&parse(&["preview", "--font", "OpenSans"])).unwrap_err();
        assert!(matches!(err, Error::InvalidFont { ref value, .. } if value == "OpenSans"));
        let err = resolve(&parse(&["preview", "--format", "SVG"])).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { ref value, .. } if value == "SVG"));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let err = resolve(&parse(&["preview", "--theme", "neon"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid theme: neon (expected one of: light, dark, blue, green, purple)"
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = resolve(&parse(&["preview", "--format", "gif"])).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { ref value, .. } if value == "gif"));
    }

    #[test]
    fn json_switch() {
        let parsed = parse(&["preview", "--json"]);
        assert!(matches!(resolve(&parsed), Ok(Resolved::Run(Invocation { json: true, .. }))));

        let parsed = parse(&["preview"]);
        assert!(matches!(resolve(&parsed), Ok(Resolved::Run(Invocation { json: false, .. }))));
    }

    #[test]
    fn usage_lists_every_flag() {
        let text = usage();
        for flag in [
            "--title",
            "--description",
            "--theme",
            "--font",
            "--fontUrl",
            "--format",
            "--out",
            "--no-open",
        ] {
            assert!(text.contains(flag), "usage is missing {flag}");
        }
        assert!(text.contains("light | dark | blue | green | purple"));
        assert!(text.contains("inter | roboto | playfair | opensans"));
        assert!(text.contains("png | svg"));
    }
}
