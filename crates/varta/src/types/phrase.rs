use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{Token, VariationAxis};

/// A source sentence together with its description and ordered tokens.
///
/// Phrases are produced once per distinct sentence occurrence by the markup
/// extraction tooling and are immutable afterwards; their identity is
/// derived from content (see the content hashers), never assigned.
///
/// # Example
///
/// ```
/// use varta::{Phrase, ShowCount, Token};
///
/// let phrase = Phrase::builder()
///     .text("{name} has shared {count} photos with you".to_string())
///     .description("sharing notification".to_string())
///     .tokens(vec![
///         Token::name("name"),
///         Token::plural("count", ShowCount::IfMany),
///     ])
///     .build();
///
/// assert_eq!(phrase.axis_tokens().count(), 2);
/// ```
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    /// Source-language sentence text.
    #[builder(default)]
    pub text: String,

    /// Description shown to translators; part of the leaf identity.
    #[builder(default)]
    pub description: String,

    /// Project the phrase was extracted from.
    #[builder(default)]
    #[serde(default)]
    pub project: String,

    /// Tokens in declaration order.
    #[builder(default)]
    #[serde(default)]
    pub tokens: Vec<Token>,

    /// Whether this is a shared common string.
    #[builder(default)]
    #[serde(default)]
    pub is_common: bool,
}

impl Phrase {
    /// Tokens that contribute a variation axis, in declaration order.
    pub fn axis_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.axis().is_some())
    }

    /// The axes of this phrase's table, in declaration order.
    pub fn axes(&self) -> Vec<VariationAxis> {
        self.axis_tokens().filter_map(Token::axis).collect()
    }

    /// Depth of the variation table this phrase compiles to.
    pub fn table_depth(&self) -> usize {
        self.axis_tokens().count()
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
