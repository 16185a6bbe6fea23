//! Reference vectors for the two content hashing schemes.

use varta::hash::{checksum, leaf_hash, table_key, to_base_62};

// =============================================================================
// 32-bit checksum
// =============================================================================

#[test]
fn empty_string_hashes_to_zero() {
    assert_eq!(checksum(""), 0);
}

#[test]
fn ascii_reference_values() {
    assert_eq!(checksum("a"), 3_392_050_242);
    assert_eq!(
        checksum("The quick brown fox jumps over the lazy dog"),
        1_369_346_549
    );
    assert_eq!(
        checksum("{name} has shared {=a photo} with you"),
        3_211_060_501
    );
}

#[test]
fn multi_byte_codepoints_hash_their_utf8_bytes() {
    // Two-byte sequence.
    assert_eq!(checksum("café"), 2_425_794_034);
    // Astral-plane codepoints must expand to their full 4-byte encoding.
    assert_eq!(checksum("\u{1F600}"), 607_804_362);
    assert_eq!(checksum("x\u{1F680}y"), 4_090_349_294);
}

#[test]
fn checksum_is_deterministic() {
    let input = "determinism check";
    assert_eq!(checksum(input), checksum(input));
}

// =============================================================================
// Base-62 rendering
// =============================================================================

#[test]
fn base_62_renders_reference_alphabet() {
    assert_eq!(to_base_62(0), "");
    assert_eq!(to_base_62(9), "9");
    assert_eq!(to_base_62(10), "a");
    assert_eq!(to_base_62(61), "Z");
    assert_eq!(to_base_62(62), "10");
    assert_eq!(to_base_62(3_392_050_242), "3HyHdM");
}

#[test]
fn table_key_combines_checksum_and_base_62() {
    assert_eq!(table_key("a"), "3HyHdM");
    assert_eq!(table_key(""), "");
}

// =============================================================================
// Leaf hash
// =============================================================================

#[test]
fn leaf_hash_reference_values() {
    assert_eq!(leaf_hash("Hello!", "greeting"), "56A+7YWrIPdDNptZctW1zg==");
    assert_eq!(leaf_hash("", ""), "1B2M2Y8AsgTpgAmY7PhCfg==");
}

#[test]
fn leaf_hash_depends_on_both_text_and_description() {
    let base = leaf_hash("a photo", "sharing story");
    assert_ne!(base, leaf_hash("a photo", "different description"));
    assert_ne!(base, leaf_hash("two photos", "sharing story"));
}

#[test]
fn leaf_hash_is_stable_across_runs() {
    for _ in 0..3 {
        assert_eq!(
            leaf_hash("a photo", "sharing story"),
            leaf_hash("a photo", "sharing story")
        );
    }
}

#[test]
fn leaf_hash_applies_no_whitespace_normalization() {
    assert_ne!(leaf_hash("a photo ", "d"), leaf_hash("a photo", "d"));
    assert_ne!(leaf_hash("a  photo", "d"), leaf_hash("a photo", "d"));
}

#[test]
fn representative_corpus_has_no_collisions() {
    let corpus = [
        ("{name} has shared a photo with you", "sharing story"),
        ("{name} has shared [number] photos with you", "sharing story"),
        ("{count} new messages", "inbox badge"),
        ("a new message", "inbox badge"),
        ("Your photo was liked", "like notification"),
        ("Hello!", "greeting"),
    ];
    let mut seen = std::collections::BTreeSet::new();
    for (text, description) in corpus {
        assert!(
            seen.insert(leaf_hash(text, description)),
            "collision for {text:?}"
        );
    }
}
