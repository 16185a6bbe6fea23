use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-leaf mapping from a clear embedded-variant alias (e.g. `"=a photo"`)
/// to its canonical positional marker (e.g. `"=m1"` for the second axis).
///
/// Every leaf of one phrase carries one marker per axis token that declares
/// embedded variants, and the map can be rebuilt from the leaf's raw text by
/// matching the declared candidate strings.
pub type TokenAliasMap = BTreeMap<String, String>;

/// One concrete candidate string at the bottom of a variation table.
///
/// The hash is derived from `text + description` and is the permanent join
/// key between build output and translated strings: regenerating translation
/// files must keep previously translated leaves matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    /// Candidate string, with tokens still embedded.
    pub text: String,

    /// Description shown to translators.
    #[serde(rename = "desc")]
    pub description: String,

    /// Content hash of `text + description` (see [`crate::hash::leaf_hash`]).
    pub hash: String,
}

impl Leaf {
    /// Build a leaf, computing its content hash.
    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        let text = text.into();
        let description = description.into();
        let hash = crate::hash::leaf_hash(&text, &description);
        Self { text, description, hash }
    }
}
