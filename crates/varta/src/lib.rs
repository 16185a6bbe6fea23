//! Compile natural-language sentences with embedded variables into
//! content-addressed variation tables, and resolve them at runtime against
//! live argument values and a viewer's locale and gender.
//!
//! The pipeline: a [`Phrase`] (extracted elsewhere from source markup) plus
//! its candidate leaf texts go through [`compile`] into an immutable
//! [`VariationTable`] whose leaves carry stable content hashes. An external
//! translation workflow consumes the compiled [`PhraseDocument`] and
//! produces a [`TranslationStore`]. At render time a [`Resolver`] walks the
//! table using the live arguments and [`ViewerContext`], picks the
//! translated pattern for the chosen leaf (or its source text), splices the
//! substitutions in and applies the locale's phonological rewrites.

pub mod compiler;
pub mod hash;
pub mod plural;
pub mod resolver;
pub mod rewrite;
pub mod store;
pub mod types;

pub use compiler::{CompileError, CompiledPhrase, LeafSource, PhraseDocument, compile};
pub use resolver::{ResolveError, Resolver, compute_suggestions};
pub use store::{StoreError, TranslationStore};
pub use types::{
    AxisKey, EXACTLY_ONE, GENDER_BITMASK, Gender, HashNode, Leaf, Node, Person, Phrase,
    PronounGender, PronounUsage, ShowCount, TableShapeError, Token, TokenAliasMap, Value,
    VariationAxis, VariationTable, ViewerContext, WILDCARD,
};

/// Creates a `HashMap<String, Value>` from token-name/value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings,
/// and people can be passed directly.
///
/// # Example
///
/// ```
/// use varta::{args, Gender, Person, Value};
///
/// let a = args! { "count" => 3, "name" => Person::new("Alice", Gender::Female) };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["count"].as_number(), Some(3));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
