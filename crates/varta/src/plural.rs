//! Plural category rules.
//!
//! Maps a cardinal number to a CLDR plural category per locale rule class.
//! The category codes are bit-flag wire values shared with variation table
//! keys; consumers bitwise-test them against [`NUMBER_BITMASK`], so the
//! integer values must not change. Rule classes are a closed enum: each
//! covers every locale sharing one rule shape, and `classify` is total over
//! `i64` (negative input falls out of the same integer arithmetic, never a
//! panic).

use serde::{Deserialize, Serialize};

/// Bitmask covering every [`PluralCategory`] code.
pub const NUMBER_BITMASK: u8 = 28;

/// CLDR plural category selected from a cardinal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluralCategory {
    Zero = 16,
    One = 4,
    Two = 8,
    Few = 20,
    Many = 12,
    Other = 24,
}

impl PluralCategory {
    /// Wire code of this category.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The table key for this category (its code in decimal).
    pub fn key(self) -> String {
        self.code().to_string()
    }
}

/// One shape of plural rules, shared by every locale using it.
///
/// Variant names describe the shape or its best-known user; the normative
/// behavior is the arithmetic in [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleClass {
    /// No morphological plural distinction (ja, zh, ko, th, vi, id, ms).
    OnlyOther,
    /// `1` is singular (en, de, es, it, nl, sv, fi, tr, el, bg).
    OneOther,
    /// `0` and `1` are singular (fr, pt, hi, am, bn).
    ZeroOne,
    /// `0..=1` and `11..=99` are singular (tzm).
    OneWithTens,
    /// Unit digit `1` outside `11` is singular (is, mk).
    UnitOne,
    /// Singular unless the unit digit is 4, 6 or 9 (fil, tl).
    MostUnitsOne,
    /// Unit `0` and teens are zero; unit `1` outside `11` is singular (lv).
    LatvianZero,
    /// Distinct zero and one categories (lag, ksh).
    ZeroOneDistinct,
    /// `0..=1` singular, `2..=10` few (shi).
    OneFewToTen,
    /// Distinct singular and dual only (iu, kw, se).
    OneTwo,
    /// `1`/`11` one, `2`/`12` two, `3..=10`/`13..=19` few (gd).
    GaelicFourWay,
    /// `1` one, `2` two, `3..=6` few, `7..=10` many (ga).
    IrishFourWay,
    /// One, two and few decided modulo 100 (sl).
    HundredBased,
    /// Unit-based one and few with teen exclusion (lt).
    LithuanianFew,
    /// Few and many decided modulo 100 (mt).
    MalteseFew,
    /// Unit-based one and two, few at even scores (gv).
    ManxFew,
    /// All six categories (ar).
    SixCategory,
    /// `1` one, `2..=4` few (cs, sk).
    WestSlavicFew,
    /// `1` one, `2` two, many at multiples of ten above ten (he).
    HebrewMany,
    /// Unit-based one, few and many with teen exclusion (be, ru, uk).
    EastSlavic,
    /// Like EastSlavic, but only exactly `1` is singular (pl).
    PolishFew,
    /// `1` one; `0` and `%100 == 1..=19` few (ro).
    RomanianFew,
}

/// Classify a cardinal number under a rule class.
///
/// # Example
///
/// ```
/// use varta::plural::{classify, PluralCategory, RuleClass};
///
/// assert_eq!(classify(RuleClass::OneOther, 1), PluralCategory::One);
/// assert_eq!(classify(RuleClass::EastSlavic, 22), PluralCategory::Few);
/// assert_eq!(classify(RuleClass::SixCategory, 11), PluralCategory::Many);
/// ```
pub fn classify(rule_class: RuleClass, n: i64) -> PluralCategory {
    use PluralCategory::{Few, Many, One, Other, Two, Zero};

    match rule_class {
        RuleClass::OnlyOther => Other,
        RuleClass::OneOther => {
            if n == 1 {
                One
            } else {
                Other
            }
        }
        RuleClass::ZeroOne => {
            if (0..=1).contains(&n) {
                One
            } else {
                Other
            }
        }
        RuleClass::OneWithTens => {
            if (0..=1).contains(&n) || (11..=99).contains(&n) {
                One
            } else {
                Other
            }
        }
        RuleClass::UnitOne => {
            if n % 10 == 1 && n % 100 != 11 {
                One
            } else {
                Other
            }
        }
        RuleClass::MostUnitsOne => {
            if n == 1 || n == 2 || n == 3 || (n % 10 != 4 && n % 10 != 6 && n % 10 != 9) {
                One
            } else {
                Other
            }
        }
        RuleClass::LatvianZero => {
            if n % 10 == 0 || (11..=19).contains(&(n % 100)) {
                Zero
            } else if n % 10 == 1 && n % 100 != 11 {
                One
            } else {
                Other
            }
        }
        RuleClass::ZeroOneDistinct => {
            if n == 0 {
                Zero
            } else if n == 1 {
                One
            } else {
                Other
            }
        }
        RuleClass::OneFewToTen => {
            if n == 0 || n == 1 {
                One
            } else if (2..=10).contains(&n) {
                Few
            } else {
                Other
            }
        }
        RuleClass::OneTwo => {
            if n == 1 {
                One
            } else if n == 2 {
                Two
            } else {
                Other
            }
        }
        RuleClass::GaelicFourWay => {
            if n == 1 || n == 11 {
                One
            } else if n == 2 || n == 12 {
                Two
            } else if (3..=10).contains(&n) || (13..=19).contains(&n) {
                Few
            } else {
                Other
            }
        }
        RuleClass::IrishFourWay => {
            if n == 1 {
                One
            } else if n == 2 {
                Two
            } else if (3..=6).contains(&n) {
                Few
            } else if (7..=10).contains(&n) {
                Many
            } else {
                Other
            }
        }
        RuleClass::HundredBased => {
            if n % 100 == 1 {
                One
            } else if n % 100 == 2 {
                Two
            } else if (3..=4).contains(&(n % 100)) {
                Few
            } else {
                Other
            }
        }
        RuleClass::LithuanianFew => {
            if n % 10 == 1 && (n % 100 < 11 || n % 100 > 19) {
                One
            } else if (2..=9).contains(&(n % 10)) && (n % 100 < 11 || n % 100 > 19) {
                Few
            } else {
                Other
            }
        }
        RuleClass::MalteseFew => {
            if n == 1 {
                One
            } else if n == 0 || (2..=10).contains(&(n % 100)) {
                Few
            } else if (11..=19).contains(&(n % 100)) {
                Many
            } else {
                Other
            }
        }
        RuleClass::ManxFew => {
            if n % 10 == 1 {
                One
            } else if n % 10 == 2 {
                Two
            } else if n % 100 == 0
                || n % 100 == 20
                || n % 100 == 40
                || n % 100 == 60
                || n % 100 == 80
            {
                Few
            } else {
                Other
            }
        }
        RuleClass::SixCategory => {
            if n == 0 {
                Zero
            } else if n == 1 {
                One
            } else if n == 2 {
                Two
            } else if (3..=10).contains(&(n % 100)) {
                Few
            } else if (11..=99).contains(&(n % 100)) {
                Many
            } else {
                Other
            }
        }
        RuleClass::WestSlavicFew => {
            if n == 1 {
                One
            } else if (2..=4).contains(&n) {
                Few
            } else {
                Other
            }
        }
        RuleClass::HebrewMany => {
            if n == 1 {
                One
            } else if n == 2 {
                Two
            } else if (n < 0 || n > 10) && n % 10 == 0 {
                Many
            } else {
                Other
            }
        }
        RuleClass::EastSlavic => {
            if n % 10 == 1 && n % 100 != 11 {
                One
            } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                Few
            } else if n % 10 == 0
                || (5..=9).contains(&(n % 10))
                || (11..=14).contains(&(n % 100))
            {
                Many
            } else {
                Other
            }
        }
        RuleClass::PolishFew => {
            if n == 1 {
                One
            } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                Few
            } else if (n != 1 && (0..=1).contains(&(n % 10)))
                || (5..=9).contains(&(n % 10))
                || (12..=14).contains(&(n % 100))
            {
                Many
            } else {
                Other
            }
        }
        RuleClass::RomanianFew => {
            if n == 1 {
                One
            } else if n == 0 || (n != 1 && (1..=19).contains(&(n % 100))) {
                Few
            } else {
                Other
            }
        }
    }
}

/// Exact-locale overrides checked before the language table.
const LOCALE_RULE_CLASSES: &[(&str, RuleClass)] = &[("pt_PT", RuleClass::OneOther)];

/// Rule class per language code.
const LANG_RULE_CLASSES: &[(&str, RuleClass)] = &[
    ("am", RuleClass::ZeroOne),
    ("ar", RuleClass::SixCategory),
    ("be", RuleClass::EastSlavic),
    ("bg", RuleClass::OneOther),
    ("bn", RuleClass::ZeroOne),
    ("cs", RuleClass::WestSlavicFew),
    ("da", RuleClass::OneOther),
    ("de", RuleClass::OneOther),
    ("el", RuleClass::OneOther),
    ("en", RuleClass::OneOther),
    ("es", RuleClass::OneOther),
    ("fi", RuleClass::OneOther),
    ("fil", RuleClass::MostUnitsOne),
    ("fr", RuleClass::ZeroOne),
    ("ga", RuleClass::IrishFourWay),
    ("gd", RuleClass::GaelicFourWay),
    ("gv", RuleClass::ManxFew),
    ("he", RuleClass::HebrewMany),
    ("hi", RuleClass::ZeroOne),
    ("id", RuleClass::OnlyOther),
    ("is", RuleClass::UnitOne),
    ("it", RuleClass::OneOther),
    ("iu", RuleClass::OneTwo),
    ("ja", RuleClass::OnlyOther),
    ("ko", RuleClass::OnlyOther),
    ("ksh", RuleClass::ZeroOneDistinct),
    ("kw", RuleClass::OneTwo),
    ("lag", RuleClass::ZeroOneDistinct),
    ("lt", RuleClass::LithuanianFew),
    ("lv", RuleClass::LatvianZero),
    ("mk", RuleClass::UnitOne),
    ("ms", RuleClass::OnlyOther),
    ("mt", RuleClass::MalteseFew),
    ("my", RuleClass::OnlyOther),
    ("nb", RuleClass::OneOther),
    ("nl", RuleClass::OneOther),
    ("no", RuleClass::OneOther),
    ("pl", RuleClass::PolishFew),
    ("pt", RuleClass::ZeroOne),
    ("ro", RuleClass::RomanianFew),
    ("ru", RuleClass::EastSlavic),
    ("se", RuleClass::OneTwo),
    ("shi", RuleClass::OneFewToTen),
    ("sk", RuleClass::WestSlavicFew),
    ("sl", RuleClass::HundredBased),
    ("sv", RuleClass::OneOther),
    ("th", RuleClass::OnlyOther),
    ("tl", RuleClass::MostUnitsOne),
    ("tr", RuleClass::OneOther),
    ("tzm", RuleClass::OneWithTens),
    ("uk", RuleClass::EastSlavic),
    ("vi", RuleClass::OnlyOther),
    ("zh", RuleClass::OnlyOther),
];

/// Rule class for a locale tag.
///
/// An exact locale entry (e.g. `"pt_PT"`) beats the language entry (`"pt"`);
/// unknown locales fall back to [`RuleClass::OneOther`].
///
/// # Example
///
/// ```
/// use varta::plural::{rule_class_for_locale, RuleClass};
///
/// assert_eq!(rule_class_for_locale("pt_BR"), RuleClass::ZeroOne);
/// assert_eq!(rule_class_for_locale("pt_PT"), RuleClass::OneOther);
/// assert_eq!(rule_class_for_locale("xx_XX"), RuleClass::OneOther);
/// ```
pub fn rule_class_for_locale(locale: &str) -> RuleClass {
    if let Some((_, class)) = LOCALE_RULE_CLASSES.iter().find(|(tag, _)| *tag == locale) {
        return *class;
    }
    let lang = locale.split('_').next().unwrap_or(locale);
    LANG_RULE_CLASSES
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, class)| *class)
        .unwrap_or(RuleClass::OneOther)
}

/// Classify a cardinal number for a locale.
pub fn category_for_locale(locale: &str, n: i64) -> PluralCategory {
    classify(rule_class_for_locale(locale), n)
}
