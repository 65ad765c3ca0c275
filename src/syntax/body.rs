//! Native syntax tree: blocks, bodies and attributes with full range data

use std::sync::Arc;

use smol_str::SmolStr;

use super::Label;
use crate::base::{NameMap, Range};

/// An attribute value expression.
///
/// Opaque to binding: only its text and range are carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub text: Arc<str>,
    pub range: Range,
}

impl Expression {
    pub fn new(text: impl Into<Arc<str>>, range: Range) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }
}

/// A `name = expr` attribute inside a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: SmolStr,
    pub expr: Expression,
    /// Whole attribute, from the start of the name to the end of the expression
    pub src_range: Range,
    pub name_range: Range,
    pub equals_range: Range,
}

impl Attribute {
    pub fn range(&self) -> &Range {
        &self.src_range
    }
}

/// The contents of a block between (and including) its braces.
///
/// Attribute names are unique within a body; block type names may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub attributes: NameMap<Attribute>,
    pub blocks: Vec<Block>,
    /// From the opening brace to just after the closing brace
    pub src_range: Range,
    /// Zero-width range at the end of the body
    pub end_range: Range,
}

impl Body {
    pub fn new(src_range: Range) -> Self {
        let end_range = Range::empty_at(src_range.filename.clone(), src_range.end);
        Self {
            attributes: NameMap::default(),
            blocks: Vec::new(),
            src_range,
            end_range,
        }
    }

    /// Add an attribute, replacing any earlier one of the same name
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute.name.clone(), attribute);
        self
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn range(&self) -> &Range {
        &self.src_range
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.blocks.is_empty()
    }

    /// Ranges of the opening and closing braces, derived from `src_range`.
    ///
    /// A native body range always starts with `{` and ends with `}`, each
    /// exactly one byte wide.
    pub fn brace_ranges(&self) -> (Range, Range) {
        let range = &self.src_range;
        let open = Range::new(
            range.filename.clone(),
            range.start,
            range.start.advance(1),
        );
        let close = Range::new(range.filename.clone(), range.end.retreat(1), range.end);
        (open, close)
    }
}

/// A block with every range populated, including its braces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub type_name: SmolStr,
    pub labels: Vec<SmolStr>,
    pub body: Body,

    pub type_range: Range,
    pub label_ranges: Vec<Range>,
    pub open_brace_range: Range,
    pub close_brace_range: Range,
}

impl Block {
    /// Create an unlabeled block whose brace ranges are taken from the body's edges
    pub fn new(type_name: impl Into<SmolStr>, type_range: Range, body: Body) -> Self {
        let (open_brace_range, close_brace_range) = body.brace_ranges();
        Self {
            type_name: type_name.into(),
            labels: Vec::new(),
            open_brace_range,
            close_brace_range,
            body,
            type_range,
            label_ranges: Vec::new(),
        }
    }

    pub fn with_label(mut self, value: impl Into<SmolStr>, range: Range) -> Self {
        self.labels.push(value.into());
        self.label_ranges.push(range);
        self
    }

    /// Whole block, from the type name to the closing brace
    pub fn range(&self) -> Range {
        Range::between(&self.type_range, &self.close_brace_range)
    }

    /// Block header: the type name and any labels
    pub fn def_range(&self) -> Range {
        match self.label_ranges.last() {
            Some(last) => Range::between(&self.type_range, last),
            None => self.type_range.clone(),
        }
    }

    /// Positioned labels in declaration order.
    ///
    /// Labels without a matching range (malformed input) are skipped.
    pub fn labels(&self) -> Vec<Label> {
        self.labels
            .iter()
            .zip(&self.label_ranges)
            .map(|(value, range)| Label::new(value.clone(), range.clone()))
            .collect()
    }
}
