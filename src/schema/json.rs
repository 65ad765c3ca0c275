//! Decoding of provider schema JSON.
//!
//! Accepts the block object format emitted by `terraform providers schema -json`:
//!
//! ```json
//! {
//!   "attributes": { "ami": { "type": "string", "required": true } },
//!   "block_types": {
//!     "ebs_block_device": {
//!       "nesting_mode": "set",
//!       "block": { "attributes": { "device_name": { "type": "string" } } },
//!       "min_items": 0
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use super::{NestingMode, SchemaAttribute, SchemaBlock, SchemaError, SchemaNestedBlock};

#[derive(Debug, Deserialize)]
struct JsonBlock {
    #[serde(default)]
    attributes: IndexMap<String, JsonAttribute>,
    #[serde(default)]
    block_types: IndexMap<String, JsonBlockType>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    deprecated: bool,
}

#[derive(Debug, Deserialize)]
struct JsonAttribute {
    #[serde(default, rename = "type")]
    attribute_type: Option<serde_json::Value>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    computed: bool,
    #[serde(default)]
    sensitive: bool,
    #[serde(default)]
    deprecated: bool,
}

#[derive(Debug, Deserialize)]
struct JsonBlockType {
    nesting_mode: String,
    #[serde(default)]
    block: Option<JsonBlock>,
    #[serde(default)]
    min_items: Option<u64>,
    #[serde(default)]
    max_items: Option<u64>,
}

/// Decode a schema block from provider schema JSON
pub fn from_json(input: &str) -> Result<SchemaBlock, SchemaError> {
    let block: JsonBlock =
        serde_json::from_str(input).map_err(|e| SchemaError::json(e.to_string()))?;
    let schema = convert_block(block)?;
    debug!(
        attributes = schema.attributes.len(),
        nested_blocks = schema.nested_blocks.len(),
        "decoded schema block"
    );
    Ok(schema)
}

fn convert_block(block: JsonBlock) -> Result<SchemaBlock, SchemaError> {
    let mut schema = SchemaBlock {
        description: block.description,
        deprecated: block.deprecated,
        ..SchemaBlock::default()
    };

    for (name, attr) in block.attributes {
        schema = schema.with_attribute(SchemaAttribute {
            name: name.into(),
            description: attr.description,
            attribute_type: attr.attribute_type.map(|ty| match ty {
                serde_json::Value::String(s) => s.into(),
                other => other.to_string().into(),
            }),
            required: attr.required,
            optional: attr.optional,
            computed: attr.computed,
            sensitive: attr.sensitive,
            deprecated: attr.deprecated,
        });
    }

    for (type_name, block_type) in block.block_types {
        let nesting = parse_nesting_mode(&type_name, &block_type.nesting_mode)?;
        let inner = match block_type.block {
            Some(inner) => convert_block(inner)?,
            None => SchemaBlock::default(),
        };
        schema = schema.with_nested_block(
            SchemaNestedBlock::new(type_name, nesting, inner)
                .with_items(block_type.min_items, block_type.max_items),
        );
    }

    Ok(schema)
}

fn parse_nesting_mode(type_name: &str, mode: &str) -> Result<NestingMode, SchemaError> {
    match mode {
        "single" => Ok(NestingMode::Single),
        "group" => Ok(NestingMode::Group),
        "list" => Ok(NestingMode::List),
        "set" => Ok(NestingMode::Set),
        "map" => Ok(NestingMode::Map),
        _ => Err(SchemaError::UnknownNestingMode {
            type_name: type_name.to_string(),
            mode: mode.to_string(),
        }),
    }
}
