//! Schemas shared by integration tests

use hcl_lang::schema::{NestingMode, SchemaAttribute, SchemaBlock, SchemaNestedBlock};

/// A resource with a few attributes and two nested block types
pub fn instance_schema() -> SchemaBlock {
    SchemaBlock::new()
        .with_attribute(SchemaAttribute::required("ami").with_type("string"))
        .with_attribute(SchemaAttribute::optional("instance_type").with_type("string"))
        .with_attribute(SchemaAttribute::computed("arn").with_type("string"))
        .with_nested_block(
            SchemaNestedBlock::new(
                "ebs_block_device",
                NestingMode::Set,
                SchemaBlock::new()
                    .with_attribute(SchemaAttribute::required("device_name"))
                    .with_attribute(SchemaAttribute::optional("volume_size")),
            )
            .with_items(Some(0), None),
        )
        .with_nested_block(SchemaNestedBlock::new(
            "timeouts",
            NestingMode::Single,
            SchemaBlock::new().with_attribute(SchemaAttribute::optional("create")),
        ))
}

/// `setting` nested blocks holding a single `x` attribute
pub fn setting_schema() -> SchemaBlock {
    SchemaBlock::new().with_nested_block(SchemaNestedBlock::new(
        "setting",
        NestingMode::List,
        SchemaBlock::new().with_attribute(SchemaAttribute::optional("x")),
    ))
}
