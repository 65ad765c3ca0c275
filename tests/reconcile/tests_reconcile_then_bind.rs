//! Generic blocks reconciled into native blocks and bound.

use crate::helpers::schema_fixtures::*;
use crate::helpers::source_fixtures::*;
use hcl_lang::base::{Pos, Range};
use hcl_lang::bind::parse_block;
use hcl_lang::diagnostics::{Diagnostic, codes};
use hcl_lang::reconcile::{ReconcileError, as_syntax_block};
use hcl_lang::syntax::{Block, BodyKind, GenericBlock, GenericBody};

/// Strip a native block down to what a language-agnostic lookup returns
fn to_generic(block: &Block) -> GenericBlock {
    block
        .labels
        .iter()
        .zip(&block.label_ranges)
        .fold(
            GenericBlock::new(
                block.type_name.clone(),
                block.type_range.clone(),
                block.body.clone(),
            ),
            |generic, (label, range)| generic.with_label(label.clone(), range.clone()),
        )
}

#[test]
fn test_reconciled_block_matches_parsed_block() {
    let source = r#"resource "aws_instance" "web" {
  ami = "ami-123"
  ebs_block_device {
    device_name = "/dev/sdh"
  }
}"#;
    let original = parse_block_source(source);

    let reconciled = as_syntax_block(Some(to_generic(&original)))
        .expect("native body reconciles")
        .expect("block is present");

    assert_eq!(reconciled, original);
    assert_eq!(reconciled.open_brace_range.start.byte, offset_of(source, "{", 0));
    assert_eq!(reconciled.close_brace_range.end.byte, source.len());
    let text = |range: &Range| source[range.start.byte..range.end.byte].to_string();
    assert_eq!(text(&reconciled.open_brace_range), "{");
    assert_eq!(text(&reconciled.close_brace_range), "}");

    let schema = instance_schema();
    let parsed = parse_block(Some(&reconciled), reconciled.labels(), Some(&schema));
    assert!(parsed.known_attributes().contains_key("ami"));
    assert_eq!(parsed.known_blocks()["ebs_block_device"].len(), 1);
}

#[test]
fn test_empty_body_braces_touch() {
    let source = "timeouts {}";
    let original = parse_block_source(source);

    let reconciled = Block::try_from(to_generic(&original)).expect("native body reconciles");

    assert_eq!(reconciled.open_brace_range.end, reconciled.close_brace_range.start);
}

#[test]
fn test_json_body_is_reported() {
    let type_range = Range::new("main.tf.json", Pos::new(3, 5, 40), Pos::new(3, 15, 50));
    let generic = GenericBlock::new(
        "resource",
        type_range.clone(),
        GenericBody::Json {
            range: Range::new("main.tf.json", Pos::new(3, 17, 52), Pos::new(9, 6, 200)),
        },
    );

    let err = as_syntax_block(Some(generic)).unwrap_err();
    assert!(matches!(
        err,
        ReconcileError::FormatMismatch { kind: BodyKind::Json, .. }
    ));

    let diagnostic = Diagnostic::from(&err);
    assert_eq!(diagnostic.range, type_range);
    assert_eq!(diagnostic.code.as_deref(), Some(codes::FORMAT_MISMATCH));
    assert_eq!(
        &*diagnostic.message,
        "invalid configuration format: json body in block `resource`"
    );
}

#[test]
fn test_absent_block_binds_to_empty_view() {
    let reconciled = as_syntax_block(None).expect("absent block is not an error");
    let schema = setting_schema();

    let parsed = parse_block(reconciled.as_ref(), vec![], Some(&schema));

    assert!(parsed.raw_block().is_none());
    assert!(parsed.known_blocks().is_empty());
    assert!(parsed.unknown_blocks().is_empty());
}
