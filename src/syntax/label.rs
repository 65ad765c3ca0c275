//! Positioned block labels

use smol_str::SmolStr;

use crate::base::{Pos, Range};

/// A label attached to a block, e.g. `"aws_instance"` and `"web"` in
/// `resource "aws_instance" "web" { }`.
///
/// Labels keep declaration order and are never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    /// Name the schema gives this label position, empty when unknown
    pub name: SmolStr,
    /// Label text as written, without quotes
    pub value: SmolStr,
    pub range: Range,
}

impl Label {
    pub fn new(value: impl Into<SmolStr>, range: Range) -> Self {
        Self {
            name: SmolStr::default(),
            value: value.into(),
            range,
        }
    }

    /// Attach the schema name for this label position
    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = name.into();
        self
    }

    pub fn contains_pos(&self, pos: Pos) -> bool {
        self.range.contains_pos(pos)
    }
}
