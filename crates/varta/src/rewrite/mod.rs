//! Phonological rewrite engine.
//!
//! A final string-rewriting pass that fixes agreement phenomena a table
//! lookup cannot express: suffix harmony, elision, article selection,
//! possessive collapsing. Each locale owns an ordered list of
//! regex-substitution rules; rules conditioned on the resolved gender of the
//! sentence subject run first, then the locale's general rules, then rules
//! universal to all locales. A universal rule whose pattern also appears in
//! the locale's own list overrides it in place, keeping the locale's
//! position in the order.
//!
//! Substituted values arrive bracketed in `\u{1}` markers so rules can
//! anchor on morpheme boundaries; markers are stripped once the pipeline
//! has run. Rule sets are compiled once per `(locale, gender)` and cached
//! process-wide.

mod data;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use regex::{Captures, Regex};

use crate::types::Gender;

/// Bracket placed around substituted values before rewriting.
pub(crate) const VALUE_MARK: char = '\u{1}';

/// Marker placed by article rules on text they already settled.
const SETTLED_MARK: char = '\u{5}';

/// Rewrite rules for one locale, in declared order.
pub(super) struct LocaleRules {
    pub locale: &'static str,
    /// Metaclass shorthands expanded into patterns and replacements.
    pub meta: &'static [(&'static str, &'static str)],
    /// Rules applied regardless of subject gender.
    pub patterns: &'static [(&'static str, &'static str)],
    pub male: &'static [(&'static str, &'static str)],
    pub female: &'static [(&'static str, &'static str)],
    pub unknown: &'static [(&'static str, &'static str)],
}

impl LocaleRules {
    fn gendered(&self, gender: Gender) -> &'static [(&'static str, &'static str)] {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Unknown => self.unknown,
        }
    }
}

enum Replacement {
    /// Substitution template with `${n}` group references.
    Template(String),
    /// Drop the trigger character and lowercase the rest of the match.
    LowercaseMatch,
}

struct Rule {
    regex: Regex,
    replacement: Replacement,
}

static RULE_CACHE: LazyLock<RwLock<HashMap<(String, Gender), Arc<Vec<Rule>>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Group references in reference replacement strings (`$1`, `$12`).
static GROUP_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+)").expect("static pattern must compile"));

/// Apply the phonological rewrite pipeline for a locale.
///
/// `gender` is the resolved gender of the sentence subject; it selects which
/// gender-conditioned rules participate. Unknown locales rewrite with the
/// universal rules only, never an error. The returned string has all
/// `\u{1}`/`\u{5}` markers stripped.
///
/// # Example
///
/// ```
/// use varta::rewrite::rewrite;
/// use varta::Gender;
///
/// let out = rewrite("de_DE", Gender::Unknown, "\u{1}Klaus\u{1}s Auto");
/// assert_eq!(out, "Klaus Auto");
/// ```
pub fn rewrite(locale: &str, gender: Gender, text: &str) -> String {
    let rules = rules_for(locale, gender);
    let mut out = text.to_string();
    for rule in rules.iter() {
        out = match &rule.replacement {
            Replacement::Template(template) => {
                rule.regex.replace_all(&out, template.as_str()).into_owned()
            }
            Replacement::LowercaseMatch => rule
                .regex
                .replace_all(&out, |caps: &Captures<'_>| {
                    let matched = caps.get(0).map_or("", |m| m.as_str());
                    matched.strip_prefix('_').unwrap_or(matched).to_lowercase()
                })
                .into_owned(),
        };
    }
    out.chars().filter(|&c| c != VALUE_MARK && c != SETTLED_MARK).collect()
}

fn rules_for(locale: &str, gender: Gender) -> Arc<Vec<Rule>> {
    let cache_key = (locale.to_string(), gender);
    {
        let cache = RULE_CACHE.read().expect("rewrite rule cache lock poisoned");
        if let Some(rules) = cache.get(&cache_key) {
            return Arc::clone(rules);
        }
    }
    let rules = Arc::new(build_rules(locale, gender));
    let mut cache = RULE_CACHE.write().expect("rewrite rule cache lock poisoned");
    cache.entry(cache_key).or_insert(rules).clone()
}

fn build_rules(locale: &str, gender: Gender) -> Vec<Rule> {
    let entry = data::LOCALE_RULES.iter().find(|rules| rules.locale == locale);
    if entry.is_none() {
        tracing::debug!(locale, "no locale rewrite rules, applying universal rules only");
    }

    // Locale metaclasses first, then the universal ones on top.
    let mut meta: Vec<(&str, &str)> = Vec::new();
    if let Some(entry) = entry {
        meta.extend_from_slice(entry.meta);
    }
    merge_on_top(&mut meta, data::GLOBAL_META);

    // Gender-conditioned rules run before the general ones; universal rules
    // run last unless they override a locale rule's pattern in place.
    let mut ordered: Vec<(&str, &str)> = Vec::new();
    if let Some(entry) = entry {
        ordered.extend_from_slice(entry.gendered(gender));
        ordered.extend_from_slice(entry.patterns);
    }
    merge_on_top(&mut ordered, data::GLOBAL_PATTERNS);

    ordered
        .into_iter()
        .map(|(pattern, replacement)| compile_rule(&meta, pattern, replacement))
        .collect()
}

fn merge_on_top(ordered: &mut Vec<(&str, &str)>, extra: &[(&'static str, &'static str)]) {
    for &(key, value) in extra {
        match ordered.iter().position(|(existing, _)| *existing == key) {
            Some(position) => ordered[position] = (key, value),
            None => ordered.push((key, value)),
        }
    }
}

fn compile_rule(meta: &[(&str, &str)], pattern: &str, replacement: &str) -> Rule {
    let mut expanded_pattern = pattern.to_string();
    let mut expanded_replacement = replacement.to_string();
    for &(shorthand, class) in meta {
        expanded_pattern = expanded_pattern.replace(shorthand, class);
        if expanded_replacement != "javascript" {
            expanded_replacement = expanded_replacement.replace(shorthand, class);
        }
    }

    let regex = Regex::new(&expanded_pattern).expect("static rewrite pattern must compile");
    let replacement = if expanded_replacement == "javascript" {
        Replacement::LowercaseMatch
    } else {
        // `$1ü` would otherwise parse as a reference to a group named "1ü";
        // brace every reference.
        Replacement::Template(
            GROUP_REF.replace_all(&expanded_replacement, "$${${1}}").into_owned(),
        )
    };
    Rule { regex, replacement }
}
