//! Tag command implementation

use anyhow::{Result, bail};
use protofield_core::FieldKind;
use crate::input::check_field_number;
use protofield_core::wire::decode_varint32;
use protofield_core::{WireTag, encode_tag};

/// Parse a kind from its lowercase name or its descriptor type code
pub fn parse_kind(value: &str) -> Result<FieldKind, String> {
    if let Ok(code) = value.parse::<i32>() {
        return FieldKind::from_type_code(code).map_err(|e| e.to_string());
    }

    serde_json::from_value(serde_json::Value::String(value.to_ascii_lowercase()))
        .map_err(|_| format!("unknown field kind: {value}"))
}

/// Compute the tag for a field number and kind
pub fn tag_for(number: u32, kind: FieldKind) -> Result<WireTag> {
    check_field_number(number)?;

    let tag = encode_tag(number, kind);
    match decode_varint32(&tag.bytes) {
        Some((decoded, _)) if decoded == tag.tag => Ok(tag),
        _ => bail!("Tag bytes do not decode back to {}: [{}]", tag.tag, tag.bytes_csv()),
    }
}

pub fn run(number: u32, kind: FieldKind) -> Result<()> {
    let tag = tag_for(number, kind)?;

    println!("tag: {}", tag.tag);
    println!("tag_size: {}", tag.size());
    println!("tag_bytes: {}", tag.bytes_csv());

    Ok(())
}
