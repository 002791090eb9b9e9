//! protofield-core - Per-field metadata for protobuf C# code generation
//!
//! Given one resolved field descriptor, this crate derives everything an
//! emission template needs to generate accessors and serialization code:
//! - [`encode_tag`] for wire tags and their varint bytes
//! - [`resolve`] for the per-field [`FieldMetadata`] table
//! - [`emit_extension`] for extension declarations
//! - [`Nullability`] and [`deprecated_attribute`] for member attributes
//!
//! Identifier casing is delegated to a [`NameProvider`]; [`CSharpNames`]
//! implements the protobuf C# conventions. All operations are pure functions
//! of their arguments and can run for many fields in parallel.
//!
//! # Example
//!
//! ```
//! use protofield_core::prelude::*;
//!
//! let field = FieldDescriptor::new("bar", 100, FieldKind::Int32, MessageRef::new("Scope"))
//!     .extending(MessageRef::new("Foo"));
//!
//! let vars = resolve(&field, &CSharpNames, &GeneratorOptions::default(), 0).unwrap();
//! assert_eq!(vars.get("tag"), Some("800"));
//!
//! let code = emit_extension(&field, &CSharpNames, &GeneratorOptions::default()).unwrap();
//! assert!(code.contains("pb::Extension<global::Foo, int> Bar"));
//! ```

pub mod attributes;
pub mod descriptor;
mod error;
pub mod extension;
pub mod metadata;
pub mod names;
pub mod naming;
mod options;
pub mod wire;

pub use attributes::{Nullability, deprecated_attribute, public_member_attributes};
pub use descriptor::{
    DefaultValue, DescriptorSet, EnumRef, FieldDescriptor, FieldKind, MessageRef, OneofRef,
};
pub use error::{GenError, GenResult};
pub use extension::{emit_extension, emit_extensions};
pub use metadata::{FieldMetadata, PresenceCheck, has_default_value, is_nullable, resolve};
pub use names::{CSharpNames, NameProvider};
pub use options::GeneratorOptions;
pub use wire::{WireTag, WireType, encode_tag, field_tag};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CSharpNames, DefaultValue, DescriptorSet, EnumRef, FieldDescriptor, FieldKind,
        FieldMetadata, GenError, GenResult, GeneratorOptions, MessageRef, NameProvider, OneofRef,
        emit_extension, encode_tag, resolve,
    };
}
