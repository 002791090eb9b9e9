//! Per-field template variables.
//!
//! [`resolve`] turns one [`FieldDescriptor`] into a [`FieldMetadata`] table:
//! the named values that per-kind emission templates substitute. Which
//! template applies is chosen downstream from `capitalized_kind`.
//!
//! # Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `tag`, `tag_size`, `tag_bytes` | wire tag, its byte count, its bytes as `"160, 6"` |
//! | `access_level` | `public` or `internal` |
//! | `property_name`, `name`, `descriptor_name`, `number`, `field_ordinal` | identifiers |
//! | `type_name`, `nullable_type_name`, `default_value` | from the [`NameProvider`] |
//! | `has_default`, `is_nullable` | `true` / `false` |
//! | `capitalized_kind` | e.g. `SFixed32` |
//! | `has_property_check`, `has_not_property_check` | presence expressions |
//! | `other_has_property_check`, `other_has_not_property_check` | same, on `other` |
//! | `oneof_name`, `oneof_property_name` | oneof members only |
//! | `end_tag` | group fields only |
//! | `extended_type` | extension fields only |
//! | `deprecated_attribute`, `generated_code_attribute` | attribute text |

use crate::attributes::{GENERATED_CODE_ATTRIBUTE, deprecated_attribute};
use crate::descriptor::{FieldDescriptor, FieldKind};
use crate::error::GenResult;
use crate::names::NameProvider;
use crate::options::GeneratorOptions;
use crate::wire::{end_group_tag, field_tag};
use serde::Serialize;
use std::collections::BTreeMap;

/// Named template variables for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMetadata {
    variables: BTreeMap<String, String>,
}

impl FieldMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Read a `true`/`false` variable.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// How generated code asks whether a field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceCheck {
    /// A generated `Has<Property>` member.
    Property { property_name: String },

    /// The oneof discriminant equals this field's case.
    OneofCase {
        oneof_name: String,
        oneof_property_name: String,
        property_name: String,
    },
}

impl PresenceCheck {
    /// Render the check, optionally against another instance (`other`).
    pub fn render(&self, receiver: Option<&str>, negated: bool) -> String {
        let prefix = receiver.map(|r| format!("{r}.")).unwrap_or_default();
        match self {
            PresenceCheck::Property { property_name } => {
                let not = if negated { "!" } else { "" };
                format!("{not}{prefix}Has{property_name}")
            }
            PresenceCheck::OneofCase {
                oneof_name,
                oneof_property_name,
                property_name,
            } => {
                let op = if negated { "!=" } else { "==" };
                format!(
                    "{prefix}{oneof_name}Case_ {op} {oneof_property_name}OneofCase.{property_name}"
                )
            }
        }
    }
}

/// Presence check for `field`, or `None` for repeated fields outside a oneof.
pub fn presence_check<N: NameProvider + ?Sized>(
    field: &FieldDescriptor,
    names: &N,
) -> GenResult<Option<PresenceCheck>> {
    let property_name = names.property_name(field)?;
    if let Some(oneof) = &field.containing_oneof {
        return Ok(Some(PresenceCheck::OneofCase {
            oneof_name: names.oneof_name(oneof)?,
            oneof_property_name: names.oneof_property_name(oneof)?,
            property_name,
        }));
    }
    if field.has_presence() {
        Ok(Some(PresenceCheck::Property { property_name }))
    } else {
        Ok(None)
    }
}

/// Whether generated code must handle an explicit default for `field`.
///
/// Reference kinds and enums always do; numeric and bool kinds only when the
/// schema default differs from zero.
pub fn has_default_value(field: &FieldDescriptor) -> bool {
    match field.kind {
        FieldKind::Enum
        | FieldKind::Message
        | FieldKind::Group
        | FieldKind::String
        | FieldKind::Bytes => true,
        FieldKind::Double
        | FieldKind::Float
        | FieldKind::Int32
        | FieldKind::Int64
        | FieldKind::UInt32
        | FieldKind::UInt64
        | FieldKind::Fixed32
        | FieldKind::Fixed64
        | FieldKind::SFixed32
        | FieldKind::SFixed64
        | FieldKind::SInt32
        | FieldKind::SInt64
        | FieldKind::Bool => !field.default_value.is_zero(),
    }
}

/// Whether values of `kind` are reference types that can be null.
pub fn is_nullable(kind: FieldKind) -> bool {
    match kind {
        FieldKind::String | FieldKind::Bytes | FieldKind::Message | FieldKind::Group => true,
        FieldKind::Double
        | FieldKind::Float
        | FieldKind::Int32
        | FieldKind::Int64
        | FieldKind::UInt32
        | FieldKind::UInt64
        | FieldKind::Fixed32
        | FieldKind::Fixed64
        | FieldKind::SFixed32
        | FieldKind::SFixed64
        | FieldKind::SInt32
        | FieldKind::SInt64
        | FieldKind::Bool
        | FieldKind::Enum => false,
    }
}

/// Build the template variables for `field`.
///
/// `ordinal` is the field's position within its containing message.
pub fn resolve<N: NameProvider + ?Sized>(
    field: &FieldDescriptor,
    names: &N,
    options: &GeneratorOptions,
    ordinal: usize,
) -> GenResult<FieldMetadata> {
    let mut vars = FieldMetadata::new();

    // Packing changes the low three bits only, never the tag size.
    let tag = field_tag(field);
    vars.set("tag", tag.tag.to_string());
    vars.set("tag_size", tag.size().to_string());
    vars.set("tag_bytes", tag.bytes_csv());
    vars.set("access_level", options.access_level());

    vars.set("property_name", names.property_name(field)?);
    vars.set("name", names.field_name(field)?);
    vars.set("descriptor_name", field.name.as_str());
    vars.set("number", field.number.to_string());
    vars.set("field_ordinal", ordinal.to_string());
    vars.set("type_name", names.type_name(field)?);
    vars.set("nullable_type_name", names.nullable_type_name(field)?);
    vars.set("default_value", names.default_value(field)?);
    vars.set("has_default", has_default_value(field).to_string());
    vars.set("is_nullable", is_nullable(field.kind).to_string());
    vars.set("capitalized_kind", field.kind.capitalized_name());
    vars.set("deprecated_attribute", deprecated_attribute(field));
    vars.set("generated_code_attribute", GENERATED_CODE_ATTRIBUTE);

    if let Some(check) = presence_check(field, names)? {
        vars.set("has_property_check", check.render(None, false));
        vars.set("has_not_property_check", check.render(None, true));
        vars.set("other_has_property_check", check.render(Some("other"), false));
        vars.set("other_has_not_property_check", check.render(Some("other"), true));
    }

    if let Some(oneof) = &field.containing_oneof {
        vars.set("oneof_name", names.oneof_name(oneof)?);
        vars.set("oneof_property_name", names.oneof_property_name(oneof)?);
    }

    if field.kind == FieldKind::Group {
        vars.set("end_tag", end_group_tag(field.number).to_string());
    }

    if let Some(extendee) = &field.extendee {
        vars.set("extended_type", names.class_name(extendee)?);
    }

    tracing::debug!(
        field = %field.name,
        number = field.number,
        kind = %field.kind,
        variables = vars.len(),
        "resolved field metadata"
    );

    Ok(vars)
}
