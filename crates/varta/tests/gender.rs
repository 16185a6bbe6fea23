//! Gender code spaces and combination rules.

use varta::{GENDER_BITMASK, Gender, PronounGender};

// =============================================================================
// Wire codes
// =============================================================================

#[test]
fn gender_codes_are_wire_values() {
    assert_eq!(Gender::Male.code(), 1);
    assert_eq!(Gender::Female.code(), 2);
    assert_eq!(Gender::Unknown.code(), 3);
}

#[test]
fn every_gender_code_is_inside_the_bitmask() {
    for gender in [Gender::Male, Gender::Female, Gender::Unknown] {
        assert_ne!(gender.code() & GENDER_BITMASK, 0);
    }
}

#[test]
fn pronoun_codes_use_their_own_space() {
    assert_eq!(PronounGender::NotAPerson.code(), 0);
    assert_eq!(PronounGender::Female.code(), 1);
    assert_eq!(PronounGender::Male.code(), 2);
    assert_eq!(PronounGender::UnknownSingular.code(), 7);
    assert_eq!(PronounGender::UnknownPlural.code(), 11);
}

#[test]
fn the_two_code_spaces_disagree_on_male_and_female() {
    // Table keys from the two spaces must never be conflated.
    assert_ne!(Gender::Male.code(), PronounGender::Male.code());
    assert_ne!(Gender::Female.code(), PronounGender::Female.code());
}

// =============================================================================
// Combination
// =============================================================================

#[test]
fn one_person_keeps_their_gender() {
    assert_eq!(
        PronounGender::combine(&[Gender::Female]),
        Some(PronounGender::Female)
    );
    assert_eq!(
        PronounGender::combine(&[Gender::Male]),
        Some(PronounGender::Male)
    );
    assert_eq!(
        PronounGender::combine(&[Gender::Unknown]),
        Some(PronounGender::UnknownSingular)
    );
}

#[test]
fn several_people_always_combine_to_unknown_plural() {
    assert_eq!(
        PronounGender::combine(&[Gender::Female, Gender::Male]),
        Some(PronounGender::UnknownPlural)
    );
    assert_eq!(
        PronounGender::combine(&[Gender::Female, Gender::Female]),
        Some(PronounGender::UnknownPlural)
    );
    assert_eq!(
        PronounGender::combine(&[Gender::Male, Gender::Male, Gender::Male]),
        Some(PronounGender::UnknownPlural)
    );
}

#[test]
fn zero_people_cannot_combine() {
    assert_eq!(PronounGender::combine(&[]), None);
}

#[test]
fn subject_gender_collapses_to_three_states() {
    assert_eq!(PronounGender::Male.subject_gender(), Gender::Male);
    assert_eq!(PronounGender::Female.subject_gender(), Gender::Female);
    assert_eq!(PronounGender::UnknownPlural.subject_gender(), Gender::Unknown);
    assert_eq!(PronounGender::NotAPerson.subject_gender(), Gender::Unknown);
}
