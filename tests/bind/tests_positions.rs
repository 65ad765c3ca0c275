//! Position queries over bound blocks read from source text.

use crate::helpers::schema_fixtures::*;
use crate::helpers::source_fixtures::*;
use hcl_lang::base::Pos;
use hcl_lang::bind::parse_block;

const SOURCE: &str = r#"resource "aws_instance" "web" {
  ami    = "ami-123"
  colour = "blue"
  ebs_block_device {
    device_name = "/dev/sdh"
  }
}
"#;

fn pos_of(needle: &str) -> Pos {
    Pos::at_offset(SOURCE, offset_of(SOURCE, needle, 0))
}

#[test]
fn test_attribute_ranges_match_source() {
    let block = parse_block_source(SOURCE);
    let schema = instance_schema();
    let parsed = parse_block(Some(&block), block.labels(), Some(&schema));

    let ami = parsed.known_attributes()["ami"].raw;
    assert_eq!(ami.name_range.start, Pos::new(2, 3, offset_of(SOURCE, "ami ", 0)));
    assert_eq!(&*ami.expr.text, "\"ami-123\"");
    assert_eq!(ami.expr.range.start.line, 2);

    let colour = parsed.unknown_attributes()["colour"];
    assert_eq!(colour.name_range.start.line, 3);
    assert_eq!(colour.name_range.len(), "colour".len());
}

#[test]
fn test_cursor_lookups() {
    let block = parse_block_source(SOURCE);
    let schema = instance_schema();
    let parsed = parse_block(Some(&block), block.labels(), Some(&schema));

    assert_eq!(
        parsed.label_at_pos(pos_of("web")).map(|l| l.value.as_str()),
        Some("web")
    );
    assert!(!parsed.pos_in_labels(pos_of("resource")));

    assert_eq!(
        parsed.attribute_at_pos(pos_of("blue")).map(|a| a.name.as_str()),
        Some("colour")
    );
    assert!(parsed.pos_in_body(pos_of("colour")));

    let device = parsed.block_at_pos(pos_of("/dev/sdh")).expect("inside ebs_block_device");
    assert_eq!(device.raw_block().map(|b| b.type_name.as_str()), Some("ebs_block_device"));
    assert_eq!(
        device.attribute_at_pos(pos_of("/dev/sdh")).map(|a| a.name.as_str()),
        Some("device_name")
    );
    assert!(parsed.block_at_pos(pos_of("ami-123")).is_none());
}

#[test]
fn test_block_ranges_match_braces() {
    let block = parse_block_source(SOURCE);
    let last_brace = SOURCE.rfind('}').expect("closing brace");

    assert_eq!(block.open_brace_range.start.byte, offset_of(SOURCE, "{", 0));
    assert_eq!(block.close_brace_range.start.byte, last_brace);
    assert_eq!(block.close_brace_range.start, Pos::new(7, 1, last_brace));

    let nested = &block.body.blocks[0];
    assert_eq!(nested.open_brace_range.start.byte, offset_of(SOURCE, "{", 1));
    assert_eq!(nested.close_brace_range.start.line, 6);
}
