//! Token splicing and punctuation dedup.
//!
//! Patterns embed tokens as `{name}` (or legacy `[name]`). Substituted
//! values are wrapped in `\u{1}` markers so the phonological rewrite pass
//! can anchor on the morpheme boundary; markers are removed by that pass.
//! Sentence-final punctuation following a token is dropped when the
//! substituted value already ends in an equivalent stop.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use unicode_segmentation::UnicodeSegmentation;

use crate::rewrite::VALUE_MARK;

/// Characters counted as sentence-final punctuation.
pub(crate) const PUNCT_CHAR_CLASS: &str = concat!(
    "[.!?",
    "\u{3002}", // Chinese/Japanese period
    "\u{FF01}", // fullwidth exclamation point
    "\u{FF1F}", // fullwidth question mark
    "\u{0964}", // Hindi full stop
    "\u{2026}", // ellipsis
    "\u{0EAF}", // Laotian ellipsis
    "\u{1801}", // Mongolian ellipsis
    "\u{0E2F}", // Thai ellipsis
    "\u{FF0E}", // fullwidth full stop
    "]",
);

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:\{{([^}}]+)\}}|\[([^\]]+)\])({PUNCT_CHAR_CLASS}*)"
    ))
    .expect("static pattern must compile")
});

/// Splice substitution values into a pattern.
///
/// Tokens without a registered substitution are left untouched.
pub(super) fn substitute_tokens(pattern: &str, substitutions: &HashMap<String, String>) -> String {
    TOKEN_PATTERN
        .replace_all(pattern, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            let punctuation = caps.get(3).map_or("", |m| m.as_str());
            match substitutions.get(name) {
                Some(value) => format!(
                    "{VALUE_MARK}{value}{VALUE_MARK}{}",
                    dedupe_stops(value, punctuation)
                ),
                None => caps.get(0).map_or("", |m| m.as_str()).to_string(),
            }
        })
        .into_owned()
}

/// Stop classes: each entry maps a representative to its equivalents.
const EQUIVALENCIES: &[(&str, &[&str])] = &[
    (".", &["\u{3002}", "\u{0964}", "\u{104B}", "\u{FF0E}"]),
    ("!", &["\u{FF01}"]),
    ("?", &["\u{FF1F}"]),
    ("\u{2026}", &["\u{0E2F}", "\u{0EAF}", "\u{1801}"]),
];

/// Which stop classes are redundant after a given class.
const REDUNDANCIES: &[(&str, &[&str])] = &[
    (".", &[".", "!"]),
    ("!", &["!", "?", "."]),
    ("?", &["?", ".", "!", "\u{2026}"]),
    ("\u{2026}", &["\u{2026}", ".", "!"]),
];

fn normalize_stop(stop: &str) -> Option<&'static str> {
    EQUIVALENCIES.iter().find_map(|(representative, equivalents)| {
        if *representative == stop || equivalents.contains(&stop) {
            Some(*representative)
        } else {
            None
        }
    })
}

/// Return `suffix`, or the empty string when it is redundant after the last
/// grapheme of `prefix`.
pub(super) fn dedupe_stops<'a>(prefix: &str, suffix: &'a str) -> &'a str {
    let last = prefix.graphemes(true).next_back().unwrap_or("");
    let redundant = match (normalize_stop(last), normalize_stop(suffix)) {
        (Some(prefix_class), Some(suffix_class)) => REDUNDANCIES
            .iter()
            .any(|(class, allowed)| *class == prefix_class && allowed.contains(&suffix_class)),
        _ => false,
    };
    if redundant { "" } else { suffix }
}
