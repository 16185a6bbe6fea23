//! Runtime resolution of compiled variation tables.
//!
//! Given a compiled table (or a bare content hash), live argument values and
//! a [`ViewerContext`], the resolver walks the table to a leaf, picks the
//! translated pattern for the leaf when one exists, splices substitutions in
//! and applies the locale's phonological rewrites. Every call reads the
//! viewer context afresh: the same table resolves differently after a locale
//! switch, so resolved strings must not be memoized on table identity alone.

mod error;
mod number_format;
mod substitute;

pub use error::{ResolveError, compute_suggestions};

use std::collections::{BTreeMap, HashMap};

use crate::compiler::CompiledPhrase;
use crate::plural::{PluralCategory, category_for_locale};
use crate::rewrite::rewrite;
use crate::store::TranslationStore;
use crate::types::{
    EXACTLY_ONE, Gender, Leaf, Node, PronounGender, PronounUsage, ShowCount, Token, Value,
    ViewerContext, WILDCARD,
};

/// Walks compiled tables against live arguments and a viewer context.
///
/// The resolver borrows a read-only [`TranslationStore`]; resolution is pure
/// and independent calls may run concurrently.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use varta::{
///     args, compile, LeafSource, Phrase, Resolver, ShowCount, Token, TranslationStore,
///     ViewerContext,
/// };
///
/// let phrase = Phrase::builder()
///     .text("{count} new messages".to_string())
///     .description("inbox badge".to_string())
///     .tokens(vec![Token::plural("count", ShowCount::IfMany)])
///     .build();
/// let compiled = compile(
///     &phrase,
///     BTreeMap::from([
///         (vec!["*".into()], LeafSource::new("{count} new messages")),
///         (vec!["_1".into()], LeafSource::new("a new message")),
///     ]),
/// )
/// .unwrap();
///
/// let store = TranslationStore::new();
/// let resolver = Resolver::new(&store);
/// let viewer = ViewerContext::default();
///
/// let one = resolver.resolve(&compiled, &args! { "count" => 1 }, &viewer).unwrap();
/// assert_eq!(one, "a new message");
/// let many = resolver.resolve(&compiled, &args! { "count" => 3 }, &viewer).unwrap();
/// assert_eq!(many, "3 new messages");
/// ```
pub struct Resolver<'a> {
    store: &'a TranslationStore,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a translation store.
    pub fn new(store: &'a TranslationStore) -> Self {
        Self { store }
    }

    /// Resolve a compiled phrase to its final string.
    pub fn resolve(
        &self,
        compiled: &CompiledPhrase,
        args: &HashMap<String, Value>,
        viewer: &ViewerContext,
    ) -> Result<String, ResolveError> {
        let axis_tokens: Vec<&Token> = compiled.phrase.axis_tokens().collect();

        let mut candidate_lists = Vec::with_capacity(axis_tokens.len());
        let mut subject_gender: Option<Gender> = None;
        for token in &axis_tokens {
            let (candidates, gender) = candidate_keys(token, args, &viewer.locale)?;
            if subject_gender.is_none() {
                subject_gender = gender;
            }
            candidate_lists.push(candidates);
        }

        let leaf = walk(compiled.table.root(), &candidate_lists)?;
        let pattern = match self.store.get(&viewer.locale, &leaf.hash) {
            Some(translated) => translated,
            None => {
                tracing::debug!(
                    locale = %viewer.locale,
                    hash = %leaf.hash,
                    "no translation, using source text"
                );
                &leaf.text
            }
        };

        let substitutions = build_substitutions(&compiled.phrase.tokens, args, &viewer.locale)?;
        let spliced = substitute::substitute_tokens(pattern, &substitutions);
        Ok(rewrite(
            &viewer.locale,
            subject_gender.unwrap_or(viewer.gender),
            &spliced,
        ))
    }

    /// Resolve a bare content hash against the translation store.
    ///
    /// Every argument is treated as a plain substitution; there is no table
    /// to walk and no source text to fall back to.
    pub fn resolve_hash(
        &self,
        hash: &str,
        args: &HashMap<String, Value>,
        viewer: &ViewerContext,
    ) -> Result<String, ResolveError> {
        let pattern =
            self.store
                .get(&viewer.locale, hash)
                .ok_or_else(|| ResolveError::UnknownHash {
                    locale: viewer.locale.clone(),
                    hash: hash.to_string(),
                })?;

        // Deterministic registration order, independent of hash layout.
        let ordered: BTreeMap<&String, &Value> = args.iter().collect();
        let mut substitutions = HashMap::new();
        for (name, value) in ordered {
            register(&mut substitutions, name, render_value(value, &viewer.locale))?;
        }
        let spliced = substitute::substitute_tokens(pattern, &substitutions);
        Ok(rewrite(&viewer.locale, viewer.gender, &spliced))
    }
}

/// Candidate keys for one axis token, most specific first, plus the subject
/// gender the token contributes.
fn candidate_keys(
    token: &Token,
    args: &HashMap<String, Value>,
    locale: &str,
) -> Result<(Vec<String>, Option<Gender>), ResolveError> {
    match token {
        Token::Plural { name, .. } => {
            let value = require(args, name)?;
            let keys = match value {
                Value::Number(n) => number_keys(locale, *n),
                Value::Float(f) if f.is_finite() => {
                    if *f == 1.0 {
                        number_keys(locale, 1)
                    } else {
                        number_keys_for(category_for_locale(locale, *f as i64))
                    }
                }
                // Non-finite counts get a deterministic category instead of
                // an error.
                Value::Float(_) => number_keys_for(PluralCategory::Other),
                _ => {
                    return Err(ResolveError::WrongArgumentType {
                        name: name.clone(),
                        expected: "a number",
                    });
                }
            };
            Ok((keys, None))
        }
        Token::Name { name, .. } => {
            let person = require(args, name)?
                .as_person()
                .ok_or_else(|| ResolveError::WrongArgumentType {
                    name: name.clone(),
                    expected: "a person",
                })?;
            Ok((
                vec![person.gender.key(), WILDCARD.to_string()],
                Some(person.gender),
            ))
        }
        Token::Pronoun { name, usage, .. } => {
            let value = require(args, name)?;
            if !matches!(value, Value::Person(_) | Value::People(_)) {
                return Err(ResolveError::WrongArgumentType {
                    name: name.clone(),
                    expected: "a person or people",
                });
            }
            let combined = PronounGender::combine(&value.genders())
                .ok_or_else(|| ResolveError::NoPeople { name: name.clone() })?;
            let key_gender = pronoun_key(*usage, combined);
            Ok((
                vec![key_gender.key(), WILDCARD.to_string()],
                Some(combined.subject_gender()),
            ))
        }
        Token::Enum { name, .. } => {
            let member = require(args, name)?.as_string().ok_or_else(|| {
                ResolveError::WrongArgumentType {
                    name: name.clone(),
                    expected: "an enum member",
                }
            })?;
            Ok((vec![member.to_string(), WILDCARD.to_string()], None))
        }
        // Non-axis tokens never reach the walk; treat them as transparent.
        Token::Param { .. } | Token::SameParam { .. } => {
            Ok((vec![WILDCARD.to_string()], None))
        }
    }
}

fn number_keys(locale: &str, n: i64) -> Vec<String> {
    let category = category_for_locale(locale, n);
    if n == 1 {
        vec![EXACTLY_ONE.to_string(), category.key(), WILDCARD.to_string()]
    } else {
        vec![category.key(), WILDCARD.to_string()]
    }
}

fn number_keys_for(category: PluralCategory) -> Vec<String> {
    vec![category.key(), WILDCARD.to_string()]
}

/// Adjust a combined pronoun gender for its grammatical role.
fn pronoun_key(usage: PronounUsage, gender: PronounGender) -> PronounGender {
    match gender {
        PronounGender::NotAPerson => match usage {
            PronounUsage::Object | PronounUsage::Reflexive => PronounGender::NotAPerson,
            PronounUsage::Subject | PronounUsage::Possessive => PronounGender::UnknownPlural,
        },
        PronounGender::Female => PronounGender::Female,
        PronounGender::Male => PronounGender::Male,
        PronounGender::UnknownPlural => PronounGender::UnknownPlural,
        PronounGender::UnknownSingular => match usage {
            PronounUsage::Reflexive => PronounGender::NotAPerson,
            PronounUsage::Subject | PronounUsage::Object | PronounUsage::Possessive => {
                PronounGender::UnknownPlural
            }
        },
    }
}

/// Depth-first search over candidate keys, most specific first.
fn walk<'t>(root: &'t Node, candidates: &[Vec<String>]) -> Result<&'t Leaf, ResolveError> {
    fn access<'t>(node: &'t Node, candidates: &[Vec<String>], level: usize) -> Option<&'t Leaf> {
        if level == candidates.len() {
            return node.as_leaf();
        }
        for key in &candidates[level] {
            if let Some(child) = node.child(key) {
                if let Some(leaf) = access(child, candidates, level + 1) {
                    return Some(leaf);
                }
            }
        }
        None
    }

    access(root, candidates, 0).ok_or_else(|| malformed(root, candidates))
}

/// Reconstruct the failing level of an unsuccessful walk for the error.
fn malformed(root: &Node, candidates: &[Vec<String>]) -> ResolveError {
    let mut node = root;
    for (level, keys) in candidates.iter().enumerate() {
        let Some(child) = keys.iter().find_map(|key| node.child(key)) else {
            let available: Vec<String> = node.keys().iter().map(ToString::to_string).collect();
            let key = keys.first().cloned().unwrap_or_default();
            let suggestions = compute_suggestions(&key, &available);
            return ResolveError::MalformedTable { key, level, available, suggestions };
        };
        node = child;
    }
    ResolveError::MalformedTable {
        key: String::new(),
        level: candidates.len(),
        available: Vec::new(),
        suggestions: Vec::new(),
    }
}

fn build_substitutions(
    tokens: &[Token],
    args: &HashMap<String, Value>,
    locale: &str,
) -> Result<HashMap<String, String>, ResolveError> {
    let mut substitutions = HashMap::new();
    for token in tokens {
        match token {
            Token::Param { name } => {
                let value = require(args, name)?;
                register(&mut substitutions, name, render_value(value, locale))?;
            }
            Token::Name { name, .. } => {
                let person = require(args, name)?
                    .as_person()
                    .ok_or_else(|| ResolveError::WrongArgumentType {
                        name: name.clone(),
                        expected: "a person",
                    })?;
                register(&mut substitutions, name, person.name.clone())?;
            }
            Token::Plural { name, show_count, .. } => {
                let value = require(args, name)?;
                let (is_one, rendered) = match value {
                    Value::Number(n) => (*n == 1, number_format::format_number(locale, *n)),
                    Value::Float(f) => (*f == 1.0, number_format::format_float(locale, *f)),
                    _ => {
                        return Err(ResolveError::WrongArgumentType {
                            name: name.clone(),
                            expected: "a number",
                        });
                    }
                };
                let show = match show_count {
                    ShowCount::Yes => true,
                    ShowCount::No => false,
                    ShowCount::IfMany => !is_one,
                };
                if show {
                    register(&mut substitutions, name, rendered)?;
                }
            }
            Token::SameParam { .. } | Token::Enum { .. } | Token::Pronoun { .. } => {}
        }
    }
    Ok(substitutions)
}

fn render_value(value: &Value, locale: &str) -> String {
    match value {
        Value::Number(n) => number_format::format_number(locale, *n),
        Value::Float(f) => number_format::format_float(locale, *f),
        other => other.to_string(),
    }
}

fn require<'v>(
    args: &'v HashMap<String, Value>,
    name: &str,
) -> Result<&'v Value, ResolveError> {
    args.get(name)
        .ok_or_else(|| ResolveError::MissingArgument { name: name.to_string() })
}

fn register(
    substitutions: &mut HashMap<String, String>,
    name: &str,
    value: String,
) -> Result<(), ResolveError> {
    if substitutions.insert(name.to_string(), value).is_some() {
        return Err(ResolveError::DuplicateToken { name: name.to_string() });
    }
    Ok(())
}
