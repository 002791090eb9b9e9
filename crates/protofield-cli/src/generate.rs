//! Resolve and extensions command implementations

use crate::SourceArgs;
use crate::input;
use anyhow::{Context, Result};
use protofield_core::{
    CSharpNames, DescriptorSet, FieldMetadata, GeneratorOptions, emit_extensions, resolve,
};
use serde::Serialize;
use std::collections::HashMap;

/// One resolved field, as printed by `protofield resolve`
#[derive(Debug, Serialize)]
pub struct ResolvedField {
    pub field: String,
    pub ordinal: usize,
    pub metadata: FieldMetadata,
}

/// Resolve every field in the set.
///
/// Ordinals count fields per containing message, in input order.
pub fn resolve_set(set: &DescriptorSet, options: &GeneratorOptions) -> Result<Vec<ResolvedField>> {
    let mut ordinals: HashMap<(&str, &str), usize> = HashMap::new();
    let mut resolved = Vec::with_capacity(set.fields.len());

    for field in &set.fields {
        let owner = &field.containing_type;
        let next = ordinals
            .entry((owner.package.as_str(), owner.name.as_str()))
            .or_insert(0);
        let ordinal = *next;
        *next += 1;

        let metadata = resolve(field, &CSharpNames, options, ordinal)
            .with_context(|| format!("Failed to resolve field {}.{}", owner.name, field.name))?;

        resolved.push(ResolvedField {
            field: field.name.clone(),
            ordinal,
            metadata,
        });
    }

    tracing::info!(fields = resolved.len(), "Resolved field metadata");
    Ok(resolved)
}

/// Resolve command implementation
pub fn run_resolve(source: &SourceArgs, options: &GeneratorOptions) -> Result<()> {
    let set = input::load_descriptors(&source.input)?;
    let resolved = resolve_set(&set, options)?;
    let json = serde_json::to_string_pretty(&resolved)?;

    write_output(source.output.as_deref(), &json)
}

/// Extensions command implementation
pub fn run_extensions(source: &SourceArgs, options: &GeneratorOptions) -> Result<()> {
    let set = input::load_descriptors(&source.input)?;

    let count = set.extensions().count();
    if count == 0 {
        tracing::warn!(input = %source.input, "No extension fields found");
    }

    let code = emit_extensions(&set.fields, &CSharpNames, options)
        .context("Failed to emit extensions")?;
    tracing::info!(extensions = count, "Emitted extension declarations");

    write_output(source.output.as_deref(), &code)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output: {path}"))?;
            tracing::info!(path, "Wrote output");
        }
        None => println!("{content}"),
    }
    Ok(())
}
