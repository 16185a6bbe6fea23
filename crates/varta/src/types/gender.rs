use serde::{Deserialize, Serialize};

/// Bitmask covering every [`Gender`] code.
pub const GENDER_BITMASK: u8 = 3;

/// Grammatical gender of a viewer or a named person.
///
/// The integer codes are wire values: they are used directly as variation
/// table keys and consumers may bitwise-test them against the gender
/// bitmask, so they must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male = 1,
    Female = 2,
    #[default]
    Unknown = 3,
}

impl Gender {
    /// Wire code of this gender.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The table key for this gender (its code in decimal).
    pub fn key(self) -> String {
        self.code().to_string()
    }
}

/// Gender code space for pronoun selection.
///
/// Note that `Female = 1` and `Male = 2` here, the reverse of [`Gender`].
/// The two code spaces are distinct wire formats and each must be preserved
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PronounGender {
    NotAPerson = 0,
    Female = 1,
    Male = 2,
    UnknownSingular = 7,
    UnknownPlural = 11,
}

impl PronounGender {
    /// Wire code of this pronoun gender.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The table key for this pronoun gender (its code in decimal).
    pub fn key(self) -> String {
        self.code().to_string()
    }

    /// Collapse a list of people's genders to a single representative.
    ///
    /// Exactly one person resolves to that person's gender. More than one
    /// person always resolves to [`PronounGender::UnknownPlural`]; no
    /// aggregation of mixed genders is attempted. Returns `None` for an
    /// empty list, which callers surface as an error.
    pub fn combine(genders: &[Gender]) -> Option<PronounGender> {
        match genders {
            [] => None,
            [only] => Some(PronounGender::from(*only)),
            _ => Some(PronounGender::UnknownPlural),
        }
    }

    /// The tri-state gender handed to the phonological rewrite engine.
    pub fn subject_gender(self) -> Gender {
        match self {
            PronounGender::Male => Gender::Male,
            PronounGender::Female => Gender::Female,
            PronounGender::NotAPerson
            | PronounGender::UnknownSingular
            | PronounGender::UnknownPlural => Gender::Unknown,
        }
    }
}

impl From<Gender> for PronounGender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => PronounGender::Male,
            Gender::Female => PronounGender::Female,
            Gender::Unknown => PronounGender::UnknownSingular,
        }
    }
}
