//! Name resolution for generated code.
//!
//! The resolver never invents identifiers. Everything it prints that names a
//! schema element comes from a [`NameProvider`], so the casing rules of the
//! target language stay in one place and tests can substitute a stub.
//!
//! [`CSharpNames`] is the provider used by the command-line driver.
//!
//! # Type Mappings
//!
//! | Kind | Type | Nullable type | Zero default |
//! |------|------|---------------|--------------|
//! | double | `double` | `double?` | `0D` |
//! | float | `float` | `float?` | `0F` |
//! | int32, sint32, sfixed32 | `int` | `int?` | `0` |
//! | int64, sint64, sfixed64 | `long` | `long?` | `0L` |
//! | uint32, fixed32 | `uint` | `uint?` | `0U` |
//! | uint64, fixed64 | `ulong` | `ulong?` | `0UL` |
//! | bool | `bool` | `bool?` | `false` |
//! | string | `string` | `string` | `""` |
//! | bytes | `pb::ByteString` | `pb::ByteString` | `pb::ByteString.Empty` |
//! | enum | enum class | enum class + `?` | `Enum.FirstValue`, enum prefix stripped |
//! | message, group | message class | message class | `null` |

use crate::descriptor::{DefaultValue, EnumRef, FieldDescriptor, FieldKind, MessageRef, OneofRef};
use crate::error::{GenError, GenResult};
use crate::naming::{enum_value_name, escape_string_literal, to_camel_case, to_pascal_case};

/// Supplies target-language identifiers and literals for schema elements.
///
/// Implementations may fail; the resolver and emitter pass such errors
/// through unchanged.
pub trait NameProvider {
    /// Name of the generated property for `field`.
    fn property_name(&self, field: &FieldDescriptor) -> GenResult<String>;

    /// Local variable / backing field name for `field`.
    fn field_name(&self, field: &FieldDescriptor) -> GenResult<String>;

    /// Declared type of a single value of `field`.
    fn type_name(&self, field: &FieldDescriptor) -> GenResult<String>;

    /// Type able to hold "no value" for `field`.
    fn nullable_type_name(&self, field: &FieldDescriptor) -> GenResult<String>;

    /// Literal for the default value of `field`.
    fn default_value(&self, field: &FieldDescriptor) -> GenResult<String>;

    /// Fully-qualified class name of a message.
    fn class_name(&self, message: &MessageRef) -> GenResult<String>;

    /// Oneof name as used for the discriminant storage (`kind` → `kind`).
    fn oneof_name(&self, oneof: &OneofRef) -> GenResult<String>;

    /// Oneof name as used for the case enum (`kind` → `Kind`).
    fn oneof_property_name(&self, oneof: &OneofRef) -> GenResult<String>;
}

/// Naming rules of the protobuf C# code generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpNames;

impl CSharpNames {
    pub fn new() -> Self {
        Self
    }

    /// Fully-qualified class name of an enum.
    pub fn enum_class_name(&self, enum_type: &EnumRef) -> String {
        qualified_name(&enum_type.package, &enum_type.name)
    }

    fn message_type<'a>(&self, field: &'a FieldDescriptor) -> GenResult<&'a MessageRef> {
        field
            .message_type
            .as_ref()
            .ok_or_else(|| GenError::MissingReference {
                field: field.name.clone(),
                reference: "message type".to_string(),
            })
    }

    fn enum_type<'a>(&self, field: &'a FieldDescriptor) -> GenResult<&'a EnumRef> {
        field
            .enum_type
            .as_ref()
            .ok_or_else(|| GenError::MissingReference {
                field: field.name.clone(),
                reference: "enum type".to_string(),
            })
    }
}

impl NameProvider for CSharpNames {
    fn property_name(&self, field: &FieldDescriptor) -> GenResult<String> {
        let name = match field.kind {
            // Group fields are named after their message type.
            FieldKind::Group => self.message_type(field)?.simple_name().to_string(),
            _ => field.name.clone(),
        };
        let mut property = to_pascal_case(&name);
        // A member can't share its enclosing type's name.
        if property == field.containing_type.simple_name() {
            property.push('_');
        }
        Ok(property)
    }

    fn field_name(&self, field: &FieldDescriptor) -> GenResult<String> {
        match field.kind {
            FieldKind::Group => Ok(to_camel_case(self.message_type(field)?.simple_name())),
            _ => Ok(to_camel_case(&field.name)),
        }
    }

    fn type_name(&self, field: &FieldDescriptor) -> GenResult<String> {
        let name = match field.kind {
            FieldKind::Double => "double",
            FieldKind::Float => "float",
            FieldKind::Int32 | FieldKind::SInt32 | FieldKind::SFixed32 => "int",
            FieldKind::Int64 | FieldKind::SInt64 | FieldKind::SFixed64 => "long",
            FieldKind::UInt32 | FieldKind::Fixed32 => "uint",
            FieldKind::UInt64 | FieldKind::Fixed64 => "ulong",
            FieldKind::Bool => "bool",
            FieldKind::String => "string",
            FieldKind::Bytes => "pb::ByteString",
            FieldKind::Enum => return Ok(self.enum_class_name(self.enum_type(field)?)),
            FieldKind::Message | FieldKind::Group => {
                return self.class_name(self.message_type(field)?);
            }
        };
        Ok(name.to_string())
    }

    fn nullable_type_name(&self, field: &FieldDescriptor) -> GenResult<String> {
        let type_name = self.type_name(field)?;
        match field.kind {
            FieldKind::String | FieldKind::Bytes | FieldKind::Message | FieldKind::Group => {
                Ok(type_name)
            }
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
            | FieldKind::Enum => Ok(format!("{type_name}?")),
        }
    }

    fn default_value(&self, field: &FieldDescriptor) -> GenResult<String> {
        let value = &field.default_value;
        let literal = match field.kind {
            FieldKind::Double => double_literal(as_f64(value)),
            FieldKind::Float => float_literal(as_f64(value) as f32),
            FieldKind::Int32 | FieldKind::SInt32 | FieldKind::SFixed32 => {
                as_i64(value).to_string()
            }
            FieldKind::Int64 | FieldKind::SInt64 | FieldKind::SFixed64 => {
                format!("{}L", as_i64(value))
            }
            FieldKind::UInt32 | FieldKind::Fixed32 => format!("{}U", as_u64(value)),
            FieldKind::UInt64 | FieldKind::Fixed64 => format!("{}UL", as_u64(value)),
            FieldKind::Bool => (!value.is_zero()).to_string(),
            FieldKind::String => match value {
                DefaultValue::Text(text) => format!("\"{}\"", escape_string_literal(text)),
                _ => "\"\"".to_string(),
            },
            FieldKind::Bytes => "pb::ByteString.Empty".to_string(),
            FieldKind::Enum => {
                let enum_type = self.enum_type(field)?;
                format!(
                    "{}.{}",
                    self.enum_class_name(enum_type),
                    enum_value_name(enum_type.simple_name(), &enum_type.default_value)
                )
            }
            FieldKind::Message | FieldKind::Group => "null".to_string(),
        };
        Ok(literal)
    }

    fn class_name(&self, message: &MessageRef) -> GenResult<String> {
        Ok(qualified_name(&message.package, &message.name))
    }

    fn oneof_name(&self, oneof: &OneofRef) -> GenResult<String> {
        Ok(to_camel_case(&oneof.name))
    }

    fn oneof_property_name(&self, oneof: &OneofRef) -> GenResult<String> {
        Ok(to_pascal_case(&oneof.name))
    }
}

/// `global::Pkg.Outer.Types.Inner` for package `pkg` and type `Outer.Inner`.
fn qualified_name(package: &str, name: &str) -> String {
    let namespace: Vec<String> = package
        .split('.')
        .filter(|s| !s.is_empty())
        .map(to_pascal_case)
        .collect();
    let nested = name.split('.').collect::<Vec<_>>().join(".Types.");

    if namespace.is_empty() {
        format!("global::{nested}")
    } else {
        format!("global::{}.{}", namespace.join("."), nested)
    }
}

fn as_f64(value: &DefaultValue) -> f64 {
    match value {
        DefaultValue::Double(v) => *v,
        DefaultValue::Float(v) => f64::from(*v),
        DefaultValue::Int64(v) => *v as f64,
        DefaultValue::UInt64(v) => *v as f64,
        DefaultValue::Int32(v) => f64::from(*v),
        DefaultValue::UInt32(v) => f64::from(*v),
        DefaultValue::Bool(_) | DefaultValue::Text(_) | DefaultValue::None => 0.0,
    }
}

fn as_i64(value: &DefaultValue) -> i64 {
    match value {
        DefaultValue::Int64(v) => *v,
        DefaultValue::Int32(v) => i64::from(*v),
        DefaultValue::UInt32(v) => i64::from(*v),
        DefaultValue::UInt64(v) => *v as i64,
        DefaultValue::Double(_)
        | DefaultValue::Float(_)
        | DefaultValue::Bool(_)
        | DefaultValue::Text(_)
        | DefaultValue::None => 0,
    }
}

fn as_u64(value: &DefaultValue) -> u64 {
    match value {
        DefaultValue::UInt64(v) => *v,
        DefaultValue::UInt32(v) => u64::from(*v),
        DefaultValue::Int64(v) => *v as u64,
        DefaultValue::Int32(v) => *v as u64,
        DefaultValue::Double(_)
        | DefaultValue::Float(_)
        | DefaultValue::Bool(_)
        | DefaultValue::Text(_)
        | DefaultValue::None => 0,
    }
}

fn double_literal(v: f64) -> String {
    if v.is_nan() {
        "double.NaN".to_string()
    } else if v == f64::INFINITY {
        "double.PositiveInfinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "double.NegativeInfinity".to_string()
    } else {
        format!("{v}D")
    }
}

// Checked after narrowing: large doubles become infinite floats.
fn float_literal(v: f32) -> String {
    if v.is_nan() {
        "float.NaN".to_string()
    } else if v == f32::INFINITY {
        "float.PositiveInfinity".to_string()
    } else if v == f32::NEG_INFINITY {
        "float.NegativeInfinity".to_string()
    } else {
        format!("{v}F")
    }
}
