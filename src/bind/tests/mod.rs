//! Tests for schema-driven binding


use crate::base::{Pos, Range};
use crate::schema::{NestingMode, SchemaAttribute, SchemaBlock, SchemaNestedBlock};
use crate::syntax::{Attribute, Block, Body, Expression};

/// Single-line range over bytes `start..end`
pub(super) fn span(start: usize, end: usize) -> Range {
    Range::new(
        "main.tf",
        Pos::new(1, start + 1, start),
        Pos::new(1, end + 1, end),
    )
}

/// `name = value` starting at byte `at`
pub(super) fn attr(name: &str, value: &str, at: usize) -> Attribute {
    let name_end = at + name.len();
    let expr_start = name_end + 3;
    let expr_end = expr_start + value.len();
    Attribute {
        name: name.into(),
        expr: Expression::new(value, span(expr_start, expr_end)),
        src_range: span(at, expr_end),
        name_range: span(at, name_end),
        equals_range: span(name_end + 1, name_end + 2),
    }
}

/// Block of `type_name` at byte `at` whose body spans `body_start..body_end`
pub(super) fn block(type_name: &str, at: usize, body_start: usize, body_end: usize) -> Block {
    Block::new(
        type_name,
        span(at, at + type_name.len()),
        Body::new(span(body_start, body_end)),
    )
}

pub(super) fn schema_with_attrs(names: &[&str]) -> SchemaBlock {
    names.iter().fold(SchemaBlock::new(), |schema, name| {
        schema.with_attribute(SchemaAttribute::optional(*name))
    })
}

pub(super) fn nested(
    type_name: &str,
    nesting: NestingMode,
    block: SchemaBlock,
) -> SchemaNestedBlock {
    SchemaNestedBlock::new(type_name, nesting, block)
}
