//! C# attribute text attached to generated members.

use crate::descriptor::{FieldDescriptor, FieldKind};

/// Marks a deprecated member.
pub const OBSOLETE_ATTRIBUTE: &str = "[global::System.ObsoleteAttribute]";

/// Marks generated members so debuggers step over them.
pub const GENERATED_CODE_ATTRIBUTE: &str =
    "[global::System.Diagnostics.DebuggerNonUserCodeAttribute]";

/// Whether a parameter or return value may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    AllowNull,
    DisallowNull,
    MaybeNull,
    NotNull,
    ReturnNotNull,
    ReturnMaybeNull,
}

impl Nullability {
    pub const ALL: [Nullability; 6] = [
        Nullability::AllowNull,
        Nullability::DisallowNull,
        Nullability::MaybeNull,
        Nullability::NotNull,
        Nullability::ReturnNotNull,
        Nullability::ReturnMaybeNull,
    ];

    /// Annotation text for this nullability.
    pub fn attribute(self) -> &'static str {
        match self {
            Nullability::AllowNull => {
                "[global::System.Diagnostics.CodeAnalysis.AllowNullAttribute]"
            }
            Nullability::DisallowNull => {
                "[global::System.Diagnostics.CodeAnalysis.DisallowNullAttribute]"
            }
            Nullability::MaybeNull => {
                "[global::System.Diagnostics.CodeAnalysis.MaybeNullAttribute]"
            }
            Nullability::NotNull => "[global::System.Diagnostics.CodeAnalysis.NotNullAttribute]",
            Nullability::ReturnNotNull => {
                "[return: global::System.Diagnostics.CodeAnalysis.NotNullAttribute]"
            }
            Nullability::ReturnMaybeNull => {
                "[return: global::System.Diagnostics.CodeAnalysis.MaybeNullAttribute]"
            }
        }
    }
}

/// Obsolete marker for `field`, or an empty string.
///
/// Message and group fields also inherit deprecation from their referenced
/// type; scalar fields have no referenced type to inherit from.
pub fn deprecated_attribute(field: &FieldDescriptor) -> &'static str {
    if field.deprecated || referenced_type_deprecated(field) {
        OBSOLETE_ATTRIBUTE
    } else {
        ""
    }
}

/// Attribute lines placed before every public member generated for `field`.
pub fn public_member_attributes(field: &FieldDescriptor) -> Vec<&'static str> {
    let mut attributes = Vec::with_capacity(2);
    let deprecated = deprecated_attribute(field);
    if !deprecated.is_empty() {
        attributes.push(deprecated);
    }
    attributes.push(GENERATED_CODE_ATTRIBUTE);
    attributes
}

fn referenced_type_deprecated(field: &FieldDescriptor) -> bool {
    match field.kind {
        FieldKind::Message | FieldKind::Group => field
            .message_type
            .as_ref()
            .is_some_and(|message| message.deprecated),
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
        | FieldKind::String
        | FieldKind::Bytes
        | FieldKind::Enum => false,
    }
}
