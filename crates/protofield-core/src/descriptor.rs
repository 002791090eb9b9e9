//! Read-only view of resolved schema descriptors.
//!
//! The engine never builds or validates a descriptor graph itself. Whatever
//! upstream stage resolved the schema hands over one [`FieldDescriptor`] per
//! field, with its containing message, oneof, extendee and referenced types
//! already attached as small value references.
//!
//! # Structure
//!
//! - [`FieldKind`]: the closed set of 18 protocol field types
//! - [`DefaultValue`]: the kind-typed raw default of a field
//! - [`MessageRef`], [`EnumRef`], [`OneofRef`]: references to schema elements
//! - [`FieldDescriptor`]: one field, as seen by the resolver
//! - [`DescriptorSet`]: a flat list of fields, as loaded by a driver

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol field type.
///
/// Every dispatch over this enum is an exhaustive `match`, so adding a kind
/// fails to compile until each table handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Double,
    Float,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    SInt32,
    SInt64,
    Bool,
    String,
    Bytes,
    Enum,
    Message,
    Group,
}

impl FieldKind {
    /// All kinds, in declaration order.
    pub const ALL: [FieldKind; 18] = [
        FieldKind::Double,
        FieldKind::Float,
        FieldKind::Int32,
        FieldKind::Int64,
        FieldKind::UInt32,
        FieldKind::UInt64,
        FieldKind::Fixed32,
        FieldKind::Fixed64,
        FieldKind::SFixed32,
        FieldKind::SFixed64,
        FieldKind::SInt32,
        FieldKind::SInt64,
        FieldKind::Bool,
        FieldKind::String,
        FieldKind::Bytes,
        FieldKind::Enum,
        FieldKind::Message,
        FieldKind::Group,
    ];

    /// Map a `FieldDescriptorProto.Type` code (1..=18) to a kind.
    pub fn from_type_code(code: i32) -> GenResult<Self> {
        let kind = match code {
            1 => FieldKind::Double,
            2 => FieldKind::Float,
            3 => FieldKind::Int64,
            4 => FieldKind::UInt64,
            5 => FieldKind::Int32,
            6 => FieldKind::Fixed64,
            7 => FieldKind::Fixed32,
            8 => FieldKind::Bool,
            9 => FieldKind::String,
            10 => FieldKind::Group,
            11 => FieldKind::Message,
            12 => FieldKind::Bytes,
            13 => FieldKind::UInt32,
            14 => FieldKind::Enum,
            15 => FieldKind::SFixed32,
            16 => FieldKind::SFixed64,
            17 => FieldKind::SInt32,
            18 => FieldKind::SInt64,
            other => return Err(GenError::UnknownFieldKind(other)),
        };
        Ok(kind)
    }

    /// The label used to select per-kind emission templates.
    pub fn capitalized_name(self) -> &'static str {
        match self {
            FieldKind::Double => "Double",
            FieldKind::Float => "Float",
            FieldKind::Int32 => "Int32",
            FieldKind::Int64 => "Int64",
            FieldKind::UInt32 => "UInt32",
            FieldKind::UInt64 => "UInt64",
            FieldKind::Fixed32 => "Fixed32",
            FieldKind::Fixed64 => "Fixed64",
            FieldKind::SFixed32 => "SFixed32",
            FieldKind::SFixed64 => "SFixed64",
            FieldKind::SInt32 => "SInt32",
            FieldKind::SInt64 => "SInt64",
            FieldKind::Bool => "Bool",
            FieldKind::String => "String",
            FieldKind::Bytes => "Bytes",
            FieldKind::Enum => "Enum",
            FieldKind::Message => "Message",
            FieldKind::Group => "Group",
        }
    }

    /// Whether repeated fields of this kind may use packed encoding.
    pub fn is_packable(self) -> bool {
        match self {
            FieldKind::String | FieldKind::Bytes | FieldKind::Message | FieldKind::Group => false,
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
            | FieldKind::Enum => true,
        }
    }
}

impl TryFrom<i32> for FieldKind {
    type Error = GenError;

    fn try_from(code: i32) -> GenResult<Self> {
        Self::from_type_code(code)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.capitalized_name())
    }
}

/// Raw default value of a field, typed by the field's kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultValue {
    Double(f64),
    Float(f32),
    Int64(i64),
    UInt64(u64),
    Int32(i32),
    UInt32(u32),
    Bool(bool),
    /// Explicit string default (proto2 only).
    Text(String),
    #[default]
    None,
}

impl DefaultValue {
    /// Whether this value equals its kind's zero value.
    ///
    /// `NaN` is never zero; `-0.0` is.
    pub fn is_zero(&self) -> bool {
        match self {
            DefaultValue::Double(v) => *v == 0.0,
            DefaultValue::Float(v) => *v == 0.0,
            DefaultValue::Int64(v) => *v == 0,
            DefaultValue::UInt64(v) => *v == 0,
            DefaultValue::Int32(v) => *v == 0,
            DefaultValue::UInt32(v) => *v == 0,
            DefaultValue::Bool(v) => !*v,
            DefaultValue::Text(s) => s.is_empty(),
            DefaultValue::None => true,
        }
    }
}

/// Reference to a message type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    /// Type name relative to the package; nested types are dotted (`Outer.Inner`).
    pub name: String,

    /// Schema package, possibly empty.
    #[serde(default)]
    pub package: String,

    /// Whether the message type is marked deprecated.
    #[serde(default)]
    pub deprecated: bool,
}

impl MessageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: String::new(),
            deprecated: false,
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Innermost type name (`Inner` for `Outer.Inner`).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// Reference to an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumRef {
    /// Type name relative to the package; nested types are dotted.
    pub name: String,

    #[serde(default)]
    pub package: String,

    /// Schema name of the enum's default (first) value.
    pub default_value: String,
}

impl EnumRef {
    pub fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: String::new(),
            default_value: default_value.into(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Innermost type name (`Inner` for `Outer.Inner`).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// Reference to a oneof group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneofRef {
    pub name: String,

    /// Position of the oneof within its containing message.
    #[serde(default)]
    pub index: u32,
}

impl OneofRef {
    pub fn new(name: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// A single message field, fully resolved upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as written in the schema.
    pub name: String,

    /// Field number, in `1..=2^29-1`.
    pub number: u32,

    pub kind: FieldKind,

    #[serde(default)]
    pub repeated: bool,

    /// Packed encoding for repeated scalar fields.
    #[serde(default)]
    pub packed: bool,

    #[serde(default)]
    pub deprecated: bool,

    /// Message declaring the field (the extension scope, for extensions).
    pub containing_type: MessageRef,

    #[serde(default)]
    pub containing_oneof: Option<OneofRef>,

    /// Message extended by this field, for extensions.
    #[serde(default)]
    pub extendee: Option<MessageRef>,

    /// Referenced type for message and group fields.
    #[serde(default)]
    pub message_type: Option<MessageRef>,

    /// Referenced type for enum fields.
    #[serde(default)]
    pub enum_type: Option<EnumRef>,

    #[serde(default)]
    pub default_value: DefaultValue,
}

impl FieldDescriptor {
    /// Create a singular field with no references and no explicit default.
    pub fn new(
        name: impl Into<String>,
        number: u32,
        kind: FieldKind,
        containing_type: MessageRef,
    ) -> Self {
        Self {
            name: name.into(),
            number,
            kind,
            repeated: false,
            packed: false,
            deprecated: false,
            containing_type,
            containing_oneof: None,
            extendee: None,
            message_type: None,
            enum_type: None,
            default_value: DefaultValue::None,
        }
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    pub fn packed(mut self) -> Self {
        self.repeated = true;
        self.packed = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn in_oneof(mut self, oneof: OneofRef) -> Self {
        self.containing_oneof = Some(oneof);
        self
    }

    pub fn extending(mut self, extendee: MessageRef) -> Self {
        self.extendee = Some(extendee);
        self
    }

    pub fn with_message_type(mut self, message_type: MessageRef) -> Self {
        self.message_type = Some(message_type);
        self
    }

    pub fn with_enum_type(mut self, enum_type: EnumRef) -> Self {
        self.enum_type = Some(enum_type);
        self
    }

    pub fn with_default(mut self, default_value: DefaultValue) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn is_extension(&self) -> bool {
        self.extendee.is_some()
    }

    /// Whether generated code tracks presence with a `Has` property.
    ///
    /// Oneof members use the group discriminant instead; repeated fields
    /// have no presence.
    pub fn has_presence(&self) -> bool {
        !self.repeated && self.containing_oneof.is_none()
    }
}

/// A flat list of resolved fields, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSet {
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl DescriptorSet {
    /// Parse a descriptor set from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> GenResult<Self> {
        serde_json::from_slice(bytes).map_err(Into::into)
    }

    /// Fields that extend another message.
    pub fn extensions(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_extension())
    }
}

#[cfg(test)]
#[path = "descriptor/descriptor_tests.rs"]
mod descriptor_tests;
