//! Integration tests for the PackBuilder API
//!
//! These tests go through the public facade only: configuration loading,
//! builder construction and parsing.

use apack::{
    ApackError, ErrorCode, PackBuilder, SyntaxConfig,
    config::AppConfig,
    duration::DurationUnit,
    tree::{Action, TreeNode},
};

#[test]
fn test_default_builder_parses() {
    let builder = PackBuilder::default();
    let tree = builder
        .parse("rotate 45 @300ms (mark1)\n    fade 0.5\n")
        .expect("Failed to parse");

    let node = &tree.children()[0];
    assert_eq!(node.tag(), Some("mark1"));
    assert_eq!(node.duration(), Some(300.0));
    assert_eq!(node.children()[0].actions(), [Action::new("fade", ["0.5"])]);
}

#[test]
fn test_builder_from_toml_config() {
    let content = r#"
[syntax]
duration_marks = ["<", ">"]
tag_marks = ["[", "]"]
actions_delimiter = ";"
parameters_delimiter = { pattern = '\s+' }
comment_prefix = "//"
actions = ["rotate", "scale", "blink"]
"#;
    let config = AppConfig::from_toml_str(content).expect("Failed to load config");
    let builder = PackBuilder::new(config).expect("Failed to build");

    let source = "\
// blinking intro
[intro]
blink 2; scale 1.5 <1.5s>[pulse]
    rotate 360 <2 min>
";
    let tree = builder.parse(source).expect("Failed to parse");

    assert_eq!(tree.children().len(), 2);
    assert!(tree.children()[0].is_tag_only());

    let pulse = &tree.children()[1];
    assert_eq!(pulse.tag(), Some("pulse"));
    assert_eq!(pulse.duration(), Some(1_500.0));
    assert_eq!(pulse.actions().len(), 2);
    assert_eq!(
        pulse.children()[0].duration(),
        Some(DurationUnit::Minute.to_millis(2.0))
    );
}

#[test]
fn test_invalid_grammar_is_rejected_at_construction() {
    let config = AppConfig::from_toml_str("[syntax]\nactions = []\n").expect("Failed to load config");
    let err = PackBuilder::new(config).unwrap_err();

    assert!(matches!(err, ApackError::Configuration(_)));
    assert_eq!(err.diagnostic().code(), ErrorCode::E002);
}

#[test]
fn test_empty_pattern_match_is_rejected() {
    let config = AppConfig::from_toml_str("[syntax]\nparameters_delimiter = { pattern = '\\s*' }\n")
        .expect("Failed to load config");
    let err = PackBuilder::new(config).unwrap_err();
    assert_eq!(err.diagnostic().code(), ErrorCode::E003);
}

#[test]
fn test_programmatic_config() {
    let config = AppConfig::new(SyntaxConfig::default().with_actions(["wobble"]));
    let builder = PackBuilder::new(config).expect("Failed to build");

    assert!(builder.profile().is_action("wobble"));
    assert!(!builder.profile().is_action("rotate"));
    assert!(builder.parse("wobble 3").is_ok());
}

#[test]
fn test_parse_errors_are_wrapped() {
    let builder = PackBuilder::default();

    let err = builder.parse("rotate 1\n  spin 2\n").unwrap_err();
    assert!(matches!(err, ApackError::Parse(_)));
    assert_eq!(err.diagnostic().code(), ErrorCode::E203);
    assert_eq!(err.to_string(), "error[E203]: invalid action `spin` (line 2)");

    let err = builder.parse("rotate 1\n  scale 2\n\tfade 3\n").unwrap_err();
    assert_eq!(err.diagnostic().code(), ErrorCode::E101);
    assert_eq!(err.diagnostic().line(), Some(3));
}

#[test]
fn test_parse_bytes() {
    let builder = PackBuilder::default();

    let tree = builder.parse_bytes(b"scale 2 @1s").expect("Failed to parse");
    assert_eq!(tree.children()[0].duration(), Some(1_000.0));

    let err = builder.parse_bytes(&[0x66, 0x61, 0xC3]).unwrap_err();
    assert_eq!(err.diagnostic().code(), ErrorCode::E100);
}

#[test]
fn test_builder_is_reusable_and_deterministic() {
    let builder = PackBuilder::default();
    let source = "rotate 1 (a)\n  scale 2 @2s\n(b)\n";

    let first: TreeNode = builder.parse(source).expect("Failed to parse");
    let second: TreeNode = builder.parse(source).expect("Failed to parse");
    assert_eq!(first, second);
}
