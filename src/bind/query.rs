//! Position queries over a bound block, used by completion, hover and
//! navigation to find out what sits under the cursor.

use super::ParsedBlock;
use crate::base::{Pos, Range};
use crate::syntax::{Attribute, Label};

impl<'a> ParsedBlock<'a> {
    /// Whole block range, from the type name to the closing brace
    pub fn range(&self) -> Option<Range> {
        self.raw_block.map(|block| block.range())
    }

    /// Whether `pos` is inside the braces of this block
    pub fn pos_in_body(&self, pos: Pos) -> bool {
        self.raw_block
            .is_some_and(|block| block.body.range().contains_pos(pos))
    }

    pub fn pos_in_labels(&self, pos: Pos) -> bool {
        self.label_at_pos(pos).is_some()
    }

    pub fn label_at_pos(&self, pos: Pos) -> Option<&Label> {
        if !self.is_present() {
            return None;
        }
        self.labels.iter().find(|label| label.contains_pos(pos))
    }

    /// Whether `pos` is inside any attribute of this body, known or not.
    ///
    /// Nested blocks are not searched.
    pub fn pos_in_attribute(&self, pos: Pos) -> bool {
        self.attribute_at_pos(pos).is_some()
    }

    pub fn attribute_at_pos(&self, pos: Pos) -> Option<&'a Attribute> {
        self.known_attributes
            .values()
            .map(|known| known.raw)
            .chain(self.unknown_attributes.values().copied())
            .find(|attr| attr.range().contains_pos(pos))
    }

    /// Innermost known nested block containing `pos`.
    ///
    /// Returns `None` when `pos` is not inside any known nested block,
    /// including when it is only inside this block.
    pub fn block_at_pos(&self, pos: Pos) -> Option<&ParsedBlock<'a>> {
        let nested = self
            .known_blocks
            .values()
            .flat_map(|block_type| block_type.blocks.iter())
            .find(|block| block.range().is_some_and(|range| range.contains_pos(pos)))?;

        Some(nested.block_at_pos(pos).unwrap_or(nested))
    }
}
