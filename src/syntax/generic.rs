//! Language-agnostic block representation
//!
//! Lookup APIs that work across syntaxes hand out blocks whose body may come
//! from the native syntax, from JSON, or from several merged files. Only the
//! native variant carries enough range data to be reconciled into a [`Block`].

use std::fmt;

use smol_str::SmolStr;

use super::Body;
use crate::base::Range;

/// Concrete representation behind a [`GenericBody`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Native,
    Json,
    Merged,
    Empty,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Json => "json",
            Self::Merged => "merged",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A body handle whose concrete syntax is only known at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericBody {
    /// Parsed from native syntax, with full range data
    Native(Body),
    /// Parsed from JSON syntax
    Json { range: Range },
    /// Several bodies merged into one view
    Merged(Vec<GenericBody>),
    /// Placeholder for a block with no content at all
    Empty,
}

impl GenericBody {
    pub fn kind(&self) -> BodyKind {
        match self {
            Self::Native(_) => BodyKind::Native,
            Self::Json { .. } => BodyKind::Json,
            Self::Merged(_) => BodyKind::Merged,
            Self::Empty => BodyKind::Empty,
        }
    }

    pub fn as_native(&self) -> Option<&Body> {
        match self {
            Self::Native(body) => Some(body),
            _ => None,
        }
    }
}

impl From<Body> for GenericBody {
    fn from(body: Body) -> Self {
        Self::Native(body)
    }
}

/// A block as seen through the language-agnostic API.
///
/// Carries no brace ranges; see [`crate::reconcile`] for recovering them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericBlock {
    pub type_name: SmolStr,
    pub labels: Vec<SmolStr>,
    pub body: GenericBody,

    pub def_range: Range,
    pub type_range: Range,
    pub label_ranges: Vec<Range>,
}

impl GenericBlock {
    pub fn new(
        type_name: impl Into<SmolStr>,
        type_range: Range,
        body: impl Into<GenericBody>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            labels: Vec::new(),
            body: body.into(),
            def_range: type_range.clone(),
            type_range,
            label_ranges: Vec::new(),
        }
    }

    /// Append a label, extending the definition range to cover it
    pub fn with_label(mut self, value: impl Into<SmolStr>, range: Range) -> Self {
        self.def_range = Range::between(&self.type_range, &range);
        self.labels.push(value.into());
        self.label_ranges.push(range);
        self
    }
}
