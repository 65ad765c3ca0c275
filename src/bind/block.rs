//! Block binder and the bound block view

use tracing::debug;

use super::{parse_attributes, parse_block_types};
use crate::base::NameMap;
use crate::schema::{SchemaAttribute, SchemaBlock, SchemaNestedBlock};
use crate::syntax::{Attribute, Block, Label};

/// An attribute found in source whose name the schema declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAttribute<'a> {
    pub raw: &'a Attribute,
    pub schema: &'a SchemaAttribute,
}

/// All blocks of one schema-declared nested type, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockType<'a> {
    pub schema: &'a SchemaNestedBlock,
    pub blocks: Vec<ParsedBlock<'a>>,
}

impl<'a> BlockType<'a> {
    pub fn new(schema: &'a SchemaNestedBlock) -> Self {
        Self {
            schema,
            blocks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A block bound against its schema.
///
/// Borrows the syntax tree and schema it was built from. Every attribute and
/// nested block of the source body lands in exactly one of the known or
/// unknown collections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedBlock<'a> {
    pub(super) raw_block: Option<&'a Block>,
    pub(super) labels: Vec<Label>,
    pub(super) schema: Option<&'a SchemaBlock>,

    pub(super) known_attributes: NameMap<KnownAttribute<'a>>,
    pub(super) unknown_attributes: NameMap<&'a Attribute>,
    pub(super) known_blocks: NameMap<BlockType<'a>>,
    pub(super) unknown_blocks: Vec<&'a Block>,
}

impl<'a> ParsedBlock<'a> {
    /// The source block, `None` when the block is not present in source
    pub fn raw_block(&self) -> Option<&'a Block> {
        self.raw_block
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn schema(&self) -> Option<&'a SchemaBlock> {
        self.schema
    }

    pub fn known_attributes(&self) -> &NameMap<KnownAttribute<'a>> {
        &self.known_attributes
    }

    pub fn unknown_attributes(&self) -> &NameMap<&'a Attribute> {
        &self.unknown_attributes
    }

    pub fn known_blocks(&self) -> &NameMap<BlockType<'a>> {
        &self.known_blocks
    }

    pub fn unknown_blocks(&self) -> &[&'a Block] {
        &self.unknown_blocks
    }

    pub fn is_present(&self) -> bool {
        self.raw_block.is_some()
    }
}

/// Bind `block` against `schema`.
///
/// - No block: an empty view carrying only `labels`.
/// - No schema: every attribute and nested block is unknown, nothing recurses.
/// - Otherwise attributes and nested blocks are classified by name, and known
///   nested blocks are bound recursively with their own schema.
pub fn parse_block<'a>(
    block: Option<&'a Block>,
    labels: Vec<Label>,
    schema: Option<&'a SchemaBlock>,
) -> ParsedBlock<'a> {
    let mut parsed = ParsedBlock {
        raw_block: block,
        labels,
        schema,
        ..ParsedBlock::default()
    };
    let Some(block) = block else {
        return parsed;
    };

    let body = &block.body;
    match schema {
        None => {
            parsed.unknown_attributes = body
                .attributes
                .iter()
                .map(|(name, attr)| (name.clone(), attr))
                .collect();
            parsed.unknown_blocks = body.blocks.iter().collect();
        }
        Some(schema) => {
            (parsed.known_attributes, parsed.unknown_attributes) =
                parse_attributes(&body.attributes, &schema.attributes);
            (parsed.known_blocks, parsed.unknown_blocks) =
                parse_block_types(&body.blocks, &schema.nested_blocks);
        }
    }

    debug!(
        block = %block.type_name,
        has_schema = schema.is_some(),
        known_attributes = parsed.known_attributes.len(),
        unknown_attributes = parsed.unknown_attributes.len(),
        known_block_types = parsed.known_blocks.len(),
        unknown_blocks = parsed.unknown_blocks.len(),
        "bound block"
    );
    parsed
}
