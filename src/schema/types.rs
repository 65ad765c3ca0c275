//! Schema definitions for blocks, attributes and nested block types

use smol_str::SmolStr;

use crate::base::NameMap;

/// How a nested block type may repeat inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NestingMode {
    /// At most one block
    #[default]
    Single,
    /// Exactly one block, never null
    Group,
    /// Ordered sequence of blocks
    List,
    /// Unordered set of blocks
    Set,
    /// Blocks keyed by their single label
    Map,
}

impl NestingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Group => "group",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
        }
    }

    /// Whether more than one block of this type may appear
    pub fn allows_repeats(&self) -> bool {
        matches!(self, Self::List | Self::Set | Self::Map)
    }
}

/// Expected attribute inside a block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaAttribute {
    pub name: SmolStr,
    pub description: Option<String>,
    /// Type constraint as declared, e.g. `string` or `list(number)`
    pub attribute_type: Option<SmolStr>,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub deprecated: bool,
}

impl SchemaAttribute {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn required(name: impl Into<SmolStr>) -> Self {
        Self {
            required: true,
            ..Self::new(name)
        }
    }

    pub fn optional(name: impl Into<SmolStr>) -> Self {
        Self {
            optional: true,
            ..Self::new(name)
        }
    }

    pub fn computed(name: impl Into<SmolStr>) -> Self {
        Self {
            computed: true,
            ..Self::new(name)
        }
    }

    pub fn with_type(mut self, attribute_type: impl Into<SmolStr>) -> Self {
        self.attribute_type = Some(attribute_type.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Expected nested block type inside a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaNestedBlock {
    pub type_name: SmolStr,
    pub nesting: NestingMode,
    pub block: SchemaBlock,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
}

impl SchemaNestedBlock {
    pub fn new(type_name: impl Into<SmolStr>, nesting: NestingMode, block: SchemaBlock) -> Self {
        Self {
            type_name: type_name.into(),
            nesting,
            block,
            min_items: None,
            max_items: None,
        }
    }

    pub fn with_items(mut self, min_items: Option<u64>, max_items: Option<u64>) -> Self {
        self.min_items = min_items;
        self.max_items = max_items;
        self
    }
}

/// Expected contents of a block body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaBlock {
    pub attributes: NameMap<SchemaAttribute>,
    pub nested_blocks: NameMap<SchemaNestedBlock>,
    pub description: Option<String>,
    pub deprecated: bool,
}

impl SchemaBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, attribute: SchemaAttribute) -> Self {
        self.attributes.insert(attribute.name.clone(), attribute);
        self
    }

    pub fn with_nested_block(mut self, nested: SchemaNestedBlock) -> Self {
        self.nested_blocks.insert(nested.type_name.clone(), nested);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&SchemaAttribute> {
        self.attributes.get(name)
    }

    pub fn nested_block(&self, type_name: &str) -> Option<&SchemaNestedBlock> {
        self.nested_blocks.get(type_name)
    }
}
