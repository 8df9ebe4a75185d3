//! Token-level flag splitter.
//!
//! Turns the raw tokens following the program name into a command word and a
//! map of `--flag` values. The splitter is total: every token list produces a
//! [`ParsedCommand`], and deciding which flags mean something happens later in
//! [`super::resolve`].

use std::collections::BTreeMap;

const FLAG_PREFIX: &str = "--";
const NEGATION_PREFIX: &str = "--no-";

/// Value recorded for a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// The flag consumed the following token.
    Str(String),
    /// The flag stood alone (`true`) or was negated with `--no-` (`false`).
    Bool(bool),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            OptionValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Str(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Option<String>,
    pub options: BTreeMap<String, OptionValue>,
}

impl ParsedCommand {
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }
}

/// Split `tokens` into a command word and flag values.
///
/// The first token is the command whatever it looks like. After it, `--no-x`
/// records `x = false`, `--x value` records `x = "value"` and `--x` followed
/// by another flag (or nothing) records `x = true`. Bare tokens are skipped
/// and later occurrences of a flag overwrite earlier ones.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> ParsedCommand {
    let Some((first, rest)) = tokens.split_first() else {
        return ParsedCommand::default();
    };

    let mut options = BTreeMap::new();
    let mut cursor = 0;

    while cursor < rest.len() {
        let token = rest[cursor].as_ref();

        // `--no-` has to win over the plain `--` prefix.
        if let Some(name) = token.strip_prefix(NEGATION_PREFIX) {
            options.insert(name.to_string(), OptionValue::Bool(false));
            cursor += 1;
        } else if let Some(name) = token.strip_prefix(FLAG_PREFIX) {
            let next: Option<&str> = rest.get(cursor + 1).map(|t| t.as_ref());
            match next {
                Some(next) if !next.starts_with(FLAG_PREFIX) => {
                    options.insert(name.to_string(), OptionValue::Str(next.to_string()));
                    cursor += 2;
                }
                _ => {
                    options.insert(name.to_string(), OptionValue::Bool(true));
                    cursor += 1;
                }
            }
        } else {
            cursor += 1;
        }
    }

    let parsed = ParsedCommand {
        command: Some(first.as_ref().to_string()),
        options,
    };
    tracing::debug!(command = ?parsed.command, flags = parsed.options.len(), "parsed arguments");
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn str_val(s: &str) -> OptionValue {
        OptionValue::Str(s.to_string())
    }

    #[test]
    fn empty_tokens_no_command_no_options() {
        let parsed = parse::<&str>(&[]);
        assert_eq!(parsed.command, None);
        assert!(parsed.options.is_empty());
    }

    #[test]
    fn flag_takes_following_value() {
        let parsed = parse(&["preview", "--title", "Hello"]);
        assert_eq!(parsed.command.as_deref(), Some("preview"));
        assert_eq!(parsed.options.len(), 1);
        assert_eq!(parsed.get("title"), Some(&str_val("Hello")));
    }

    #[test]
    fn negated_flag_is_false() {
        let parsed = parse(&["preview", "--no-open"]);
        assert_eq!(parsed.get("open"), Some(&OptionValue::Bool(false)));
        assert_eq!(parsed.get("no-open"), None);
    }

    #[test]
    fn negated_flag_never_consumes_value() {
        let parsed = parse(&["preview", "--no-open", "later", "--title", "T"]);
        assert_eq!(parsed.get("open"), Some(&OptionValue::Bool(false)));
        assert_eq!(parsed.get("title"), Some(&str_val("T")));
        assert_eq!(parsed.options.len(), 2);
    }

    #[test]
    fn flag_followed_by_flag_is_true() {
        let parsed = parse(&["preview", "--open", "--title", "X"]);
        assert_eq!(parsed.get("open"), Some(&OptionValue::Bool(true)));
        assert_eq!(parsed.get("title"), Some(&str_val("X")));
    }

    #[test]
    fn trailing_flag_is_true() {
        let parsed = parse(&["preview", "--theme"]);
        assert_eq!(parsed.get("theme"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn first_token_is_command_even_if_flag() {
        let parsed = parse(&["--title", "Hello"]);
        assert_eq!(parsed.command.as_deref(), Some("--title"));
        assert!(parsed.options.is_empty());
    }

    #[test]
    fn bare_tokens_are_ignored() {
        let parsed = parse(&["preview", "stray", "--font", "roboto", "another"]);
        assert_eq!(parsed.options.len(), 1);
        assert_eq!(parsed.get("font"), Some(&str_val("roboto")));
    }

    #[test]
    fn last_occurrence_wins() {
        let parsed = parse(&["preview", "--theme", "dark", "--theme", "blue", "--open", "--no-open"]);
        assert_eq!(parsed.get("theme"), Some(&str_val("blue")));
        assert_eq!(parsed.get("open"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn consumed_value_not_reprocessed() {
        // The value token is taken verbatim, even when it starts with a single dash.
        let parsed = parse(&["preview", "--title", "-x", "--description", "d"]);
        assert_eq!(parsed.get("title"), Some(&str_val("-x")));
        assert_eq!(parsed.get("description"), Some(&str_val("d")));
    }

    #[test]
    fn value_accessors() {
        assert_eq!(str_val("a").as_str(), Some("a"));
        assert_eq!(str_val("a").as_bool(), None);
        assert_eq!(OptionValue::Bool(true).as_bool(), Some(true));
        assert_eq!(OptionValue::Bool(true).as_str(), None);
    }

    proptest! {
        #[test]
        fn parse_is_total(tokens in proptest::collection::vec("(--(no-)?)?[a-zA-Z-]{0,6}", 0..12)) {
            let parsed = parse(&tokens[..]);
            prop_assert_eq!(parsed.command.is_some(), !tokens.is_empty());
            for key in parsed.options.keys() {
                prop_assert!(tokens.iter().any(|t| t.ends_with(key.as_str())));
            }
        }
    }
}
