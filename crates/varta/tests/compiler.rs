//! Integration tests for the variation table compiler.

use std::collections::BTreeMap;

use varta::{
    AxisKey, CompileError, HashNode, LeafSource, Phrase, ShowCount, TableShapeError, Token,
    compile,
};

fn sharing_phrase() -> Phrase {
    Phrase::builder()
        .text("{name} has shared a photo with you".to_string())
        .description("sharing story".to_string())
        .project("stories".to_string())
        .tokens(vec![
            Token::name("name"),
            Token::plural("number", ShowCount::IfMany)
                .with_variants(["a photo", "[number] photos"]),
        ])
        .build()
}

fn sharing_leaves() -> BTreeMap<Vec<AxisKey>, LeafSource> {
    BTreeMap::from([
        (
            vec!["*".into(), "*".into()],
            LeafSource::new("{name} has shared [number] photos with you"),
        ),
        (
            vec!["*".into(), "_1".into()],
            LeafSource::new("{name} has shared a photo with you"),
        ),
    ])
}

// =============================================================================
// Table shape
// =============================================================================

#[test]
fn depth_matches_axis_token_count() {
    let compiled = compile(&sharing_phrase(), sharing_leaves()).unwrap();
    assert_eq!(compiled.table.depth(), 2);
}

#[test]
fn number_level_carries_exact_singular_branch() {
    let compiled = compile(&sharing_phrase(), sharing_leaves()).unwrap();
    let singular = compiled.table.leaf_at(&["*", "_1"]).unwrap();
    assert_eq!(singular.text, "{name} has shared a photo with you");
    let plural = compiled.table.leaf_at(&["*", "*"]).unwrap();
    assert_eq!(plural.text, "{name} has shared [number] photos with you");
}

#[test]
fn phrase_without_axes_compiles_to_single_leaf() {
    let phrase = Phrase::builder()
        .text("Welcome back!".to_string())
        .description("greeting".to_string())
        .tokens(vec![Token::param("name")])
        .build();
    let compiled = compile(
        &phrase,
        BTreeMap::from([(Vec::<AxisKey>::new(), LeafSource::new("Welcome back!"))]),
    )
    .unwrap();
    assert_eq!(compiled.table.depth(), 0);
    assert_eq!(compiled.table.leaf_at(&[]).unwrap().text, "Welcome back!");
}

#[test]
fn enum_axis_keys_are_member_identifiers() {
    let phrase = Phrase::builder()
        .text("{count} people liked your update".to_string())
        .description("feedback".to_string())
        .tokens(vec![Token::enumeration("action", ["LIKE", "COMMENT", "POST"])])
        .build();
    let compiled = compile(
        &phrase,
        BTreeMap::from([
            (vec!["LIKE".into()], LeafSource::new("{count} people liked your update")),
            (
                vec!["COMMENT".into()],
                LeafSource::new("{count} people commented on your update"),
            ),
            (vec!["*".into()], LeafSource::new("{count} people responded to your update")),
        ]),
    )
    .unwrap();
    assert_eq!(
        compiled.table.leaf_at(&["COMMENT"]).unwrap().text,
        "{count} people commented on your update"
    );
}

// =============================================================================
// Token aliases
// =============================================================================

#[test]
fn alias_map_marks_embedded_variants_by_axis_position() {
    let compiled = compile(&sharing_phrase(), sharing_leaves()).unwrap();

    let singular = compiled.table.leaf_at(&["*", "_1"]).unwrap();
    let aliases = compiled.hash_to_token_aliases.get(&singular.hash).unwrap();
    assert_eq!(aliases.get("=a photo").map(String::as_str), Some("=m1"));

    let plural = compiled.table.leaf_at(&["*", "*"]).unwrap();
    let aliases = compiled.hash_to_token_aliases.get(&plural.hash).unwrap();
    assert_eq!(aliases.get("=[number] photos").map(String::as_str), Some("=m1"));
}

#[test]
fn alias_map_is_reconstructible_from_raw_text() {
    let compiled = compile(&sharing_phrase(), sharing_leaves()).unwrap();
    for leaf in compiled.hash_to_leaf.values() {
        if let Some(aliases) = compiled.hash_to_token_aliases.get(&leaf.hash) {
            for clear in aliases.keys() {
                let candidate = clear.strip_prefix('=').unwrap();
                assert!(
                    leaf.text.contains(candidate),
                    "alias {clear:?} not present in {:?}",
                    leaf.text
                );
            }
        }
    }
}

#[test]
fn leaves_without_declared_variants_get_no_alias_entry() {
    let phrase = Phrase::builder()
        .text("{count} new messages".to_string())
        .description("inbox badge".to_string())
        .tokens(vec![Token::plural("count", ShowCount::IfMany)])
        .build();
    let compiled = compile(
        &phrase,
        BTreeMap::from([
            (vec!["*".into()], LeafSource::new("{count} new messages")),
            (vec!["_1".into()], LeafSource::new("a new message")),
        ]),
    )
    .unwrap();
    assert!(compiled.hash_to_token_aliases.is_empty());
}

// =============================================================================
// Hashes and projections
// =============================================================================

#[test]
fn hash_projection_mirrors_table_shape() {
    let compiled = compile(&sharing_phrase(), sharing_leaves()).unwrap();
    let HashNode::Branch(genders) = compiled.hash_table() else {
        panic!("expected branch at root");
    };
    let HashNode::Branch(counts) = genders.get(&AxisKey::wildcard()).unwrap() else {
        panic!("expected branch at number level");
    };
    let HashNode::Leaf(hash) = counts.get(&AxisKey::exactly_one()).unwrap() else {
        panic!("expected leaf under '_1'");
    };
    assert_eq!(
        hash,
        &compiled.table.leaf_at(&["*", "_1"]).unwrap().hash
    );
}

#[test]
fn identical_leaves_dedup_to_one_hash() {
    let phrase = Phrase::builder()
        .text("Saved".to_string())
        .description("confirmation".to_string())
        .tokens(vec![Token::name("name")])
        .build();
    // Gender branches whose phrasing does not differ share one leaf hash.
    let compiled = compile(
        &phrase,
        BTreeMap::from([
            (vec!["*".into()], LeafSource::new("Saved")),
            (vec!["2".into()], LeafSource::new("Saved")),
        ]),
    )
    .unwrap();
    assert_eq!(compiled.hash_to_leaf.len(), 1);
}

#[test]
fn recompiling_identical_input_yields_identical_hashes() {
    let first = compile(&sharing_phrase(), sharing_leaves()).unwrap();
    let second = compile(&sharing_phrase(), sharing_leaves()).unwrap();
    let first_hashes: Vec<&String> = first.hash_to_leaf.keys().collect();
    let second_hashes: Vec<&String> = second.hash_to_leaf.keys().collect();
    assert_eq!(first_hashes, second_hashes);
    assert_eq!(first.table_key(), second.table_key());
}

#[test]
fn table_key_reference_value() {
    let phrase = Phrase::builder()
        .text("{count} new messages".to_string())
        .description("inbox badge".to_string())
        .tokens(vec![Token::plural("count", ShowCount::IfMany)])
        .build();
    let compiled = compile(
        &phrase,
        BTreeMap::from([
            (vec!["*".into()], LeafSource::new("{count} new messages")),
            (vec!["_1".into()], LeafSource::new("a new message")),
        ]),
    )
    .unwrap();
    assert_eq!(compiled.table_key(), "3U3SuT");
}

#[test]
fn table_key_changes_with_description() {
    let base = compile(&sharing_phrase(), sharing_leaves()).unwrap();
    let mut altered_phrase = sharing_phrase();
    altered_phrase.description = "a different description".to_string();
    let altered = compile(&altered_phrase, sharing_leaves()).unwrap();
    assert_ne!(base.table_key(), altered.table_key());
}

// =============================================================================
// Document serialization
// =============================================================================

#[test]
fn document_round_trips_through_json() {
    let compiled = compile(&sharing_phrase(), sharing_leaves()).unwrap();
    let document = compiled.document();
    let json = serde_json::to_string(&document).unwrap();
    let parsed: varta::PhraseDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, document);
}

#[test]
fn document_uses_camel_case_field_names() {
    let compiled = compile(&sharing_phrase(), sharing_leaves()).unwrap();
    let json = serde_json::to_string(&compiled.document()).unwrap();
    assert!(json.contains("\"hashToLeaf\""));
    assert!(json.contains("\"hashToTokenAliases\""));
    assert!(json.contains("\"tableKey\""));
    assert!(json.contains("\"isCommon\""));
    assert!(json.contains("\"desc\""));
}

// =============================================================================
// Rejected input
// =============================================================================

#[test]
fn missing_leaves_are_rejected() {
    let result = compile(&sharing_phrase(), BTreeMap::new());
    assert!(matches!(result, Err(CompileError::NoLeaves)));
}

#[test]
fn short_paths_are_rejected() {
    let result = compile(
        &sharing_phrase(),
        BTreeMap::from([(vec!["*".into()], LeafSource::new("text"))]),
    );
    assert!(matches!(
        result,
        Err(CompileError::DepthMismatch { expected: 2, got: 1, .. })
    ));
}

#[test]
fn unknown_enum_members_are_rejected_with_suggestions() {
    let phrase = Phrase::builder()
        .text("x".to_string())
        .description("d".to_string())
        .tokens(vec![Token::enumeration("action", ["LIKE", "COMMENT"])])
        .build();
    let result = compile(
        &phrase,
        BTreeMap::from([
            (vec!["*".into()], LeafSource::new("x")),
            (vec!["LIKES".into()], LeafSource::new("y")),
        ]),
    );
    match result {
        Err(CompileError::UnknownEnumMember { member, suggestions, .. }) => {
            assert_eq!(member, "LIKES");
            assert_eq!(suggestions.first().map(String::as_str), Some("LIKE"));
        }
        other => panic!("expected UnknownEnumMember, got {other:?}"),
    }
}

#[test]
fn keys_outside_the_axis_key_space_are_rejected() {
    let result = compile(
        &sharing_phrase(),
        BTreeMap::from([(
            vec!["masc".into(), "*".into()],
            LeafSource::new("text"),
        )]),
    );
    assert!(matches!(
        result,
        Err(CompileError::InvalidAxisKey { axis: "gender", .. })
    ));
}

#[test]
fn missing_wildcard_level_is_rejected() {
    let result = compile(
        &sharing_phrase(),
        BTreeMap::from([(
            vec!["*".into(), "_1".into()],
            LeafSource::new("{name} has shared a photo with you"),
        )]),
    );
    assert!(matches!(
        result,
        Err(CompileError::Shape(TableShapeError::MissingWildcard { level: 1 }))
    ));
}

#[test]
fn gendered_leaf_descriptions_survive_compilation() {
    let phrase = Phrase::builder()
        .text("{name} updated her profile".to_string())
        .description("profile update".to_string())
        .tokens(vec![Token::name("name")])
        .build();
    let compiled = compile(
        &phrase,
        BTreeMap::from([
            (
                vec!["2".into()],
                LeafSource::new("{name} updated her profile")
                    .describe("profile update, female subject"),
            ),
            (vec!["*".into()], LeafSource::new("{name} updated their profile")),
        ]),
    )
    .unwrap();
    let female = compiled.table.leaf_at(&["2"]).unwrap();
    assert_eq!(female.description, "profile update, female subject");
    let any = compiled.table.leaf_at(&["*"]).unwrap();
    assert_eq!(any.description, "profile update");
}
