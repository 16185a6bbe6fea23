//! Variation table compiler.
//!
//! Builds the nested lookup tree for a phrase from externally supplied leaf
//! texts (the source-language variants at build time, translated variants
//! later). The compiler also extracts per-leaf token alias maps and detects
//! content-hash collisions, which would otherwise silently merge unrelated
//! strings.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::hash;
use crate::resolver::compute_suggestions;
use crate::types::{
    AxisKey, HashNode, Leaf, Node, Phrase, TableShapeError, Token, TokenAliasMap, VariationTable,
};

/// One leaf's input text, with an optional description override.
///
/// Leaves default to the phrase's description; gendered or variant-specific
/// phrasings may carry their own.
#[derive(Debug, Clone)]
pub struct LeafSource {
    pub text: String,
    pub description: Option<String>,
}

impl LeafSource {
    /// Leaf text using the phrase's description.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), description: None }
    }

    /// Attach a leaf-specific description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&str> for LeafSource {
    fn from(text: &str) -> Self {
        LeafSource::new(text)
    }
}

/// A phrase compiled into its variation table, with hash bookkeeping.
#[derive(Debug, Clone)]
pub struct CompiledPhrase {
    /// The phrase this table was compiled from.
    pub phrase: Phrase,
    /// Full lookup tree with leaves.
    pub table: VariationTable,
    /// Content hash to deduplicated leaf.
    pub hash_to_leaf: BTreeMap<String, Leaf>,
    /// Content hash to that leaf's token alias map; only leaves with
    /// embedded variants have entries.
    pub hash_to_token_aliases: BTreeMap<String, TokenAliasMap>,
}

impl CompiledPhrase {
    /// Hash-only projection of the table.
    pub fn hash_table(&self) -> HashNode {
        self.table.hash_table()
    }

    /// Identity of the whole table: the checksum of its serialized leaves.
    ///
    /// When all leaves share one description it is appended once after the
    /// serialized tree instead of repeating per leaf.
    pub fn table_key(&self) -> String {
        hash::table_key(&self.key_input())
    }

    /// The JSON-serializable document handed to the translation workflow.
    pub fn document(&self) -> PhraseDocument {
        PhraseDocument {
            project: self.phrase.project.clone(),
            is_common: self.phrase.is_common,
            table_key: self.table_key(),
            hash_table: self.table.hash_table(),
            hash_to_leaf: self.hash_to_leaf.clone(),
            hash_to_token_aliases: self.hash_to_token_aliases.clone(),
        }
    }

    fn key_input(&self) -> String {
        let leaves = self.table.leaves();
        let uniform = leaves
            .windows(2)
            .all(|pair| pair[0].description == pair[1].description);
        let tree = key_value(self.table.root(), uniform, &self.hash_to_token_aliases);
        let serialized =
            serde_json::to_string(&tree).expect("JSON value serialization cannot fail");
        match (uniform, leaves.first()) {
            (true, Some(first)) => format!("{serialized}|{}", first.description),
            _ => serialized,
        }
    }
}

fn key_value(node: &Node, uniform: bool, aliases: &BTreeMap<String, TokenAliasMap>) -> JsonValue {
    match node {
        Node::Leaf(leaf) => {
            let alias_map = aliases.get(&leaf.hash).filter(|map| !map.is_empty());
            match (uniform, alias_map) {
                (true, None) => JsonValue::String(leaf.text.clone()),
                (true, Some(map)) => serde_json::json!({
                    "text": leaf.text,
                    "tokenAliases": map,
                }),
                (false, None) => serde_json::json!({
                    "text": leaf.text,
                    "desc": leaf.description,
                }),
                (false, Some(map)) => serde_json::json!({
                    "text": leaf.text,
                    "desc": leaf.description,
                    "tokenAliases": map,
                }),
            }
        }
        Node::Branch(children) => JsonValue::Object(
            children
                .iter()
                .map(|(key, child)| (key.to_string(), key_value(child, uniform, aliases)))
                .collect(),
        ),
    }
}

/// The persisted form of a compiled phrase, consumed by the external
/// translation workflow and re-ingested as a translation store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseDocument {
    pub project: String,
    pub is_common: bool,
    pub table_key: String,
    pub hash_table: HashNode,
    pub hash_to_leaf: BTreeMap<String, Leaf>,
    pub hash_to_token_aliases: BTreeMap<String, TokenAliasMap>,
}

/// An error that occurred while compiling a variation table.
#[derive(Debug, Error)]
pub enum CompileError {
    /// No leaf texts were supplied.
    #[error("phrase has no leaves")]
    NoLeaves,

    /// A leaf path does not match the phrase's axis count.
    #[error("leaf path '{path}' has {got} keys, expected {expected}")]
    DepthMismatch { path: String, expected: usize, got: usize },

    /// Two leaves were supplied for the same path.
    #[error("duplicate leaf path '{path}'")]
    DuplicatePath { path: String },

    /// A key is outside its axis's key space.
    #[error("invalid key '{key}' for {axis} axis")]
    InvalidAxisKey { key: String, axis: &'static str },

    /// An enum-axis key names no declared member.
    #[error("unknown enum member '{member}', available: {}", available.join(", "))]
    UnknownEnumMember {
        member: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },

    /// Two distinct leaves hash identically; compiling further would merge
    /// unrelated strings.
    #[error("hash collision on '{hash}' between '{first}' and '{second}'")]
    HashCollision { hash: String, first: String, second: String },

    /// The assembled tree violates the table shape invariants.
    #[error(transparent)]
    Shape(#[from] TableShapeError),
}

/// Compile a phrase and its supplied leaf texts into a variation table.
///
/// `leaves` maps full axis-key paths (declaration order, one key per
/// axis-bearing token) to leaf texts. Every level must include a `"*"`
/// entry; the number axis may additionally carry `"_1"` for a dedicated
/// singular phrasing.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use varta::{compile, LeafSource, Phrase, ShowCount, Token};
///
/// let phrase = Phrase::builder()
///     .text("{name} has shared a photo with you".to_string())
///     .description("sharing story".to_string())
///     .tokens(vec![
///         Token::name("name"),
///         Token::plural("number", ShowCount::IfMany)
///             .with_variants(["a photo", "[number] photos"]),
///     ])
///     .build();
///
/// let compiled = compile(
///     &phrase,
///     BTreeMap::from([
///         (
///             vec!["*".into(), "*".into()],
///             LeafSource::new("{name} has shared [number] photos with you"),
///         ),
///         (
///             vec!["*".into(), "_1".into()],
///             LeafSource::new("{name} has shared a photo with you"),
///         ),
///     ]),
/// )
/// .unwrap();
///
/// assert_eq!(compiled.table.depth(), 2);
/// assert_eq!(compiled.hash_to_leaf.len(), 2);
/// ```
pub fn compile(
    phrase: &Phrase,
    leaves: impl IntoIterator<Item = (Vec<AxisKey>, LeafSource)>,
) -> Result<CompiledPhrase, CompileError> {
    let axis_tokens: Vec<&Token> = phrase.axis_tokens().collect();
    let depth = axis_tokens.len();

    let mut hash_to_leaf: BTreeMap<String, Leaf> = BTreeMap::new();
    let mut hash_to_token_aliases: BTreeMap<String, TokenAliasMap> = BTreeMap::new();
    let mut seen: HashMap<String, (String, String)> = HashMap::new();
    let mut root: Option<Node> = None;

    for (path, source) in leaves {
        if path.len() != depth {
            return Err(CompileError::DepthMismatch {
                path: path_display(&path),
                expected: depth,
                got: path.len(),
            });
        }
        for (key, token) in path.iter().zip(&axis_tokens) {
            validate_key(token, key)?;
        }

        let description = source.description.as_deref().unwrap_or(&phrase.description);
        let leaf = Leaf::new(source.text.clone(), description);
        match seen.get(&leaf.hash) {
            Some((text, desc)) if *text != leaf.text || *desc != leaf.description => {
                return Err(CompileError::HashCollision {
                    hash: leaf.hash,
                    first: text.clone(),
                    second: leaf.text,
                });
            }
            _ => {
                seen.insert(leaf.hash.clone(), (leaf.text.clone(), leaf.description.clone()));
            }
        }

        let aliases = extract_aliases(&leaf.text, &axis_tokens);
        if !aliases.is_empty() {
            hash_to_token_aliases.insert(leaf.hash.clone(), aliases);
        }
        hash_to_leaf.insert(leaf.hash.clone(), leaf.clone());

        let duplicate = || CompileError::DuplicatePath { path: path_display(&path) };
        if depth == 0 {
            if root.is_some() {
                return Err(duplicate());
            }
            root = Some(Node::Leaf(leaf));
            continue;
        }
        let children = match root.get_or_insert_with(|| Node::Branch(BTreeMap::new())) {
            Node::Branch(children) => children,
            Node::Leaf(_) => return Err(duplicate()),
        };
        insert_leaf(children, &path, leaf).map_err(|()| duplicate())?;
    }

    let root = root.ok_or(CompileError::NoLeaves)?;
    let table = VariationTable::new(depth, root)?;

    Ok(CompiledPhrase {
        phrase: phrase.clone(),
        table,
        hash_to_leaf,
        hash_to_token_aliases,
    })
}

/// Scan a leaf's raw text for the variant candidates each axis token
/// declares, mapping the clear alias to its positional marker.
///
/// The map is recoverable from the raw text alone, so a translation keyed
/// to one leaf's phrasing can always be matched back to the right token
/// position.
fn extract_aliases(text: &str, axis_tokens: &[&Token]) -> TokenAliasMap {
    let mut aliases = TokenAliasMap::new();
    for (index, token) in axis_tokens.iter().enumerate() {
        for candidate in token.variant_texts() {
            if text.contains(candidate.as_str()) {
                aliases.insert(format!("={candidate}"), format!("=m{index}"));
            }
        }
    }
    aliases
}

const NUMBER_KEYS: &[&str] = &["_1", "16", "4", "8", "20", "12", "24"];
const GENDER_KEYS: &[&str] = &["1", "2", "3"];
const PRONOUN_KEYS: &[&str] = &["0", "1", "2", "7", "11"];

fn validate_key(token: &Token, key: &AxisKey) -> Result<(), CompileError> {
    if key.is_wildcard() {
        return Ok(());
    }
    match token {
        Token::Plural { .. } if NUMBER_KEYS.contains(&key.as_str()) => Ok(()),
        Token::Plural { .. } => Err(CompileError::InvalidAxisKey {
            key: key.to_string(),
            axis: "number",
        }),
        Token::Name { .. } if GENDER_KEYS.contains(&key.as_str()) => Ok(()),
        Token::Name { .. } => Err(CompileError::InvalidAxisKey {
            key: key.to_string(),
            axis: "gender",
        }),
        Token::Pronoun { .. } if PRONOUN_KEYS.contains(&key.as_str()) => Ok(()),
        Token::Pronoun { .. } => Err(CompileError::InvalidAxisKey {
            key: key.to_string(),
            axis: "pronoun",
        }),
        Token::Enum { members, .. } => {
            if members.iter().any(|member| member.as_str() == key.as_str()) {
                Ok(())
            } else {
                Err(CompileError::UnknownEnumMember {
                    member: key.to_string(),
                    suggestions: compute_suggestions(key.as_str(), members),
                    available: members.clone(),
                })
            }
        }
        Token::Param { .. } | Token::SameParam { .. } => Ok(()),
    }
}

/// Insert a leaf at `path`; `Err(())` signals a path conflict.
fn insert_leaf(
    children: &mut BTreeMap<AxisKey, Node>,
    path: &[AxisKey],
    leaf: Leaf,
) -> Result<(), ()> {
    let Some((first, rest)) = path.split_first() else {
        return Err(());
    };
    if rest.is_empty() {
        if children.insert(first.clone(), Node::Leaf(leaf)).is_some() {
            return Err(());
        }
        return Ok(());
    }
    let entry = children
        .entry(first.clone())
        .or_insert_with(|| Node::Branch(BTreeMap::new()));
    match entry {
        Node::Branch(grandchildren) => insert_leaf(grandchildren, rest, leaf),
        Node::Leaf(_) => Err(()),
    }
}

fn path_display(path: &[AxisKey]) -> String {
    path.iter().map(AxisKey::as_str).collect::<Vec<_>>().join(".")
}
