//! Extension declarations.
//!
//! Each extension field becomes one static, read-only member binding an
//! extension object to the extended message type:
//!
//! ```text
//! public static readonly pb::Extension<global::Foo, int> Bar =
//!   new pb::Extension<global::Foo, int>(800, 0);
//! ```
//!
//! Repeated extensions use `pb::RepeatedExtension` and a field codec instead
//! of a default value.

use crate::descriptor::{FieldDescriptor, FieldKind};
use crate::error::{GenError, GenResult};
use crate::metadata::{FieldMetadata, resolve};
use crate::names::NameProvider;
use crate::options::GeneratorOptions;

/// Render the declaration for one extension field.
///
/// Fails with [`GenError::NotAnExtension`] if `field` has no extendee.
pub fn emit_extension<N: NameProvider + ?Sized>(
    field: &FieldDescriptor,
    names: &N,
    options: &GeneratorOptions,
) -> GenResult<String> {
    if !field.is_extension() {
        return Err(GenError::NotAnExtension {
            field: field.name.clone(),
        });
    }
    let vars = resolve(field, names, options, 0)?;

    let access_level = var(&vars, "access_level")?;
    let extended_type = var(&vars, "extended_type")?;
    let type_name = var(&vars, "type_name")?;
    let property_name = var(&vars, "property_name")?;
    let tag = var(&vars, "tag")?;

    let declaration = if field.repeated {
        let codec = codec_expression(field.kind, &vars)?;
        format!(
            "{access_level} static readonly pb::RepeatedExtension<{extended_type}, {type_name}> {property_name} =\n  new pb::RepeatedExtension<{extended_type}, {type_name}>({tag}, {codec});\n"
        )
    } else {
        let default_value = var(&vars, "default_value")?;
        format!(
            "{access_level} static readonly pb::Extension<{extended_type}, {type_name}> {property_name} =\n  new pb::Extension<{extended_type}, {type_name}>({tag}, {default_value});\n"
        )
    };

    tracing::debug!(
        field = %field.name,
        extended_type = %extended_type,
        repeated = field.repeated,
        "emitted extension"
    );

    Ok(declaration)
}

/// Render every extension among `fields`, in order, skipping ordinary fields.
pub fn emit_extensions<'a, N, I>(
    fields: I,
    names: &N,
    options: &GeneratorOptions,
) -> GenResult<String>
where
    N: NameProvider + ?Sized,
    I: IntoIterator<Item = &'a FieldDescriptor>,
{
    let mut code = String::new();
    for field in fields.into_iter().filter(|f| f.is_extension()) {
        code.push_str(&emit_extension(field, names, options)?);
    }
    Ok(code)
}

/// `pb::FieldCodec` factory call reading and writing values of `kind`.
///
/// `vars` must come from [`resolve`] for a field of `kind`.
pub fn codec_expression(kind: FieldKind, vars: &FieldMetadata) -> GenResult<String> {
    let tag = var(vars, "tag")?;
    let type_name = var(vars, "type_name")?;
    let codec = match kind {
        FieldKind::Enum => {
            format!("pb::FieldCodec.ForEnum({tag}, x => (int) x, x => ({type_name}) x)")
        }
        FieldKind::Message => format!("pb::FieldCodec.ForMessage({tag}, {type_name}.Parser)"),
        FieldKind::Group => {
            let end_tag = var(vars, "end_tag")?;
            format!("pb::FieldCodec.ForGroup({tag}, {end_tag}, {type_name}.Parser)")
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
        | FieldKind::String
        | FieldKind::Bytes => format!("pb::FieldCodec.For{}({tag})", kind.capitalized_name()),
    };
    Ok(codec)
}

fn var<'a>(vars: &'a FieldMetadata, key: &str) -> GenResult<&'a str> {
    vars.get(key).ok_or_else(|| GenError::MissingVariable {
        key: key.to_string(),
    })
}

#[cfg(test)]
#[path = "extension/extension_tests.rs"]
mod extension_tests;
