//! Descriptor and options loading

use crate::SourceArgs;
use anyhow::{Context, Result, bail};
use protofield_core::wire::MAX_FIELD_NUMBER;
use protofield_core::{DescriptorSet, GeneratorOptions};
use std::path::Path;

const DEFAULT_CONFIG: &str = "protofield.toml";

/// Reject field numbers outside `1..=MAX_FIELD_NUMBER`
pub fn check_field_number(number: u32) -> Result<()> {
    if number == 0 || number > MAX_FIELD_NUMBER {
        bail!("Field number {number} is out of range (1 to {MAX_FIELD_NUMBER})");
    }
    Ok(())
}

/// Load the descriptor set named by `path`
pub fn load_descriptors(path: impl AsRef<Path>) -> Result<DescriptorSet> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read descriptors: {path:?}"))?;

    let set = DescriptorSet::from_json(&bytes)
        .with_context(|| format!("Failed to parse descriptors: {path:?}"))?;

    for field in &set.fields {
        check_field_number(field.number).with_context(|| {
            format!(
                "Invalid field {}.{} in {path:?}",
                field.containing_type.name, field.name
            )
        })?;
    }

    Ok(set)
}

/// Build generator options from the config file, then the parameter, then flags
pub fn load_options(source: &SourceArgs) -> Result<GeneratorOptions> {
    let mut options = match &source.config {
        Some(path) => GeneratorOptions::from_file(path)
            .with_context(|| format!("Failed to load options: {path}"))?,
        None => GeneratorOptions::default(),
    };

    if let Some(parameter) = &source.parameter {
        options
            .apply_parameter(parameter)
            .with_context(|| format!("Invalid parameter: {parameter}"))?;
    }

    if source.internal {
        options.internal_access = true;
    }

    options.validate()?;
    Ok(options)
}

/// Check command implementation
pub fn check(config_path: Option<String>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    println!("Checking options: {}", path);

    let options = GeneratorOptions::from_file(&path)?;
    options.validate()?;

    println!("✓ Access level: {}", options.access_level());
    println!("✓ Log level: {}", options.log_level);
    println!("\nOptions are valid!");

    Ok(())
}
