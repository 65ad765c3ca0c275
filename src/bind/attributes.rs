//! Attribute binder

use tracing::trace;

use super::KnownAttribute;
use crate::base::NameMap;
use crate::schema::SchemaAttribute;
use crate::syntax::Attribute;

/// Split source attributes into those the schema declares and the rest.
///
/// Only classifies what is present: schema attributes missing from source
/// are not reported here.
pub fn parse_attributes<'a>(
    attributes: &'a NameMap<Attribute>,
    schema_attributes: &'a NameMap<SchemaAttribute>,
) -> (NameMap<KnownAttribute<'a>>, NameMap<&'a Attribute>) {
    let mut known = NameMap::default();
    let mut unknown = NameMap::default();

    for (name, raw) in attributes {
        match schema_attributes.get(name) {
            Some(schema) => {
                trace!(attribute = %name, "known attribute");
                known.insert(name.clone(), KnownAttribute { raw, schema });
            }
            None => {
                trace!(attribute = %name, "unknown attribute");
                unknown.insert(name.clone(), raw);
            }
        }
    }

    (known, unknown)
}
