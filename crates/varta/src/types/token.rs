use serde::{Deserialize, Serialize};

/// Policy controlling whether a number axis substitutes its numeral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowCount {
    /// Always substitute the numeral.
    Yes,
    /// Never substitute the numeral.
    No,
    /// Substitute the numeral only when the count is not exactly one.
    #[default]
    IfMany,
}

/// Grammatical role a pronoun token plays in its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PronounUsage {
    Subject,
    Object,
    Possessive,
    Reflexive,
}

/// The kind of dimension an axis-bearing token contributes to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationAxis {
    /// Keyed by `"_1"`, plural-category codes, or `"*"`.
    Number,
    /// Keyed by gender codes or `"*"`.
    Gender,
    /// Keyed by enum member identifiers.
    Enum,
    /// Keyed by pronoun gender codes or `"*"`.
    Pronoun,
}

/// A placeholder embedded in a phrase.
///
/// `Param`, `Name` and `SameParam` are substitutions; `Name`, `Plural`,
/// `Enum` and `Pronoun` each contribute one variation axis to the compiled
/// table. A `Name`'s source-language key space is only `"*"`; exact gender
/// keys enter through translated tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Token {
    /// Plain value substitution.
    Param { name: String },
    /// A person's name; substitution plus a gender axis.
    Name {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        variants: Vec<String>,
    },
    /// Repeats the substitution of an earlier token with the same name.
    SameParam { name: String },
    /// A cardinal count; contributes a number axis.
    Plural {
        name: String,
        #[serde(default)]
        show_count: ShowCount,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        variants: Vec<String>,
    },
    /// A closed set of alternatives; contributes an enum axis.
    Enum {
        name: String,
        members: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        variants: Vec<String>,
    },
    /// A pronoun for one or more people; contributes a pronoun axis.
    Pronoun {
        name: String,
        usage: PronounUsage,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        variants: Vec<String>,
    },
}

impl Token {
    /// Plain substitution token.
    pub fn param(name: impl Into<String>) -> Token {
        Token::Param { name: name.into() }
    }

    /// Gendered name token.
    pub fn name(name: impl Into<String>) -> Token {
        Token::Name { name: name.into(), variants: Vec::new() }
    }

    /// Token repeating an earlier substitution.
    pub fn same_param(name: impl Into<String>) -> Token {
        Token::SameParam { name: name.into() }
    }

    /// Count token with the given numeral policy.
    pub fn plural(name: impl Into<String>, show_count: ShowCount) -> Token {
        Token::Plural { name: name.into(), show_count, variants: Vec::new() }
    }

    /// Enum token over the given member identifiers.
    pub fn enumeration(
        name: impl Into<String>,
        members: impl IntoIterator<Item = impl Into<String>>,
    ) -> Token {
        Token::Enum {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
            variants: Vec::new(),
        }
    }

    /// Pronoun token for the given grammatical role.
    pub fn pronoun(name: impl Into<String>, usage: PronounUsage) -> Token {
        Token::Pronoun { name: name.into(), usage, variants: Vec::new() }
    }

    /// Attach embedded-variant candidate texts to an axis-bearing token.
    ///
    /// Candidates are the literal source-language phrasings of an embedded
    /// variant group (e.g. `"a photo"` and `"[number] photos"`); the
    /// compiler matches them against leaf texts to build token alias maps.
    pub fn with_variants(self, texts: impl IntoIterator<Item = impl Into<String>>) -> Token {
        let collected: Vec<String> = texts.into_iter().map(Into::into).collect();
        match self {
            Token::Name { name, .. } => Token::Name { name, variants: collected },
            Token::Plural { name, show_count, .. } => {
                Token::Plural { name, show_count, variants: collected }
            }
            Token::Enum { name, members, .. } => {
                Token::Enum { name, members, variants: collected }
            }
            Token::Pronoun { name, usage, .. } => {
                Token::Pronoun { name, usage, variants: collected }
            }
            Token::Param { .. } | Token::SameParam { .. } => self,
        }
    }

    /// The token's name, used to look up its runtime argument.
    pub fn token_name(&self) -> &str {
        match self {
            Token::Param { name }
            | Token::Name { name, .. }
            | Token::SameParam { name }
            | Token::Plural { name, .. }
            | Token::Enum { name, .. }
            | Token::Pronoun { name, .. } => name,
        }
    }

    /// The variation axis this token contributes, if any.
    pub fn axis(&self) -> Option<VariationAxis> {
        match self {
            Token::Param { .. } | Token::SameParam { .. } => None,
            Token::Name { .. } => Some(VariationAxis::Gender),
            Token::Plural { .. } => Some(VariationAxis::Number),
            Token::Enum { .. } => Some(VariationAxis::Enum),
            Token::Pronoun { .. } => Some(VariationAxis::Pronoun),
        }
    }

    /// Embedded-variant candidate texts declared on this token.
    pub fn variant_texts(&self) -> &[String] {
        match self {
            Token::Param { .. } | Token::SameParam { .. } => &[],
            Token::Name { variants, .. }
            | Token::Plural { variants, .. }
            | Token::Enum { variants, .. }
            | Token::Pronoun { variants, .. } => variants,
        }
    }
}
