//! Nested block binder

use tracing::trace;

use super::{BlockType, parse_block};
use crate::base::NameMap;
use crate::schema::SchemaNestedBlock;
use crate::syntax::Block;

/// Split nested blocks into schema-declared types and the rest.
///
/// Known blocks are bound recursively and grouped by type name; repeated
/// blocks of one type keep their source order. Unknown blocks are returned
/// verbatim, also in source order. Nesting mode and item counts are not
/// enforced.
pub fn parse_block_types<'a>(
    blocks: &'a [Block],
    schema_blocks: &'a NameMap<SchemaNestedBlock>,
) -> (NameMap<BlockType<'a>>, Vec<&'a Block>) {
    let mut known: NameMap<BlockType<'a>> = NameMap::default();
    let mut unknown = Vec::new();

    for block in blocks {
        let Some(nested) = schema_blocks.get(&block.type_name) else {
            trace!(block = %block.type_name, "unknown nested block");
            unknown.push(block);
            continue;
        };

        trace!(block = %block.type_name, nesting = nested.nesting.as_str(), "known nested block");
        let parsed = parse_block(Some(block), block.labels(), Some(&nested.block));
        known
            .entry(block.type_name.clone())
            .or_insert_with(|| BlockType::new(nested))
            .blocks
            .push(parsed);
    }

    (known, unknown)
}
