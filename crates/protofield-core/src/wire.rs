//! Wire tag computation.
//!
//! A tag is `(field_number << 3) | wire_type` written as a base-128 varint:
//! seven bits per byte, least significant group first, `0x80` set on every
//! byte but the last. Field numbers go up to `2^29 - 1`, so a tag never needs
//! more than five bytes.
//!
//! | Wire type | Code | Kinds |
//! |-----------|------|-------|
//! | `Varint` | 0 | int32, int64, uint32, uint64, sint32, sint64, bool, enum |
//! | `Fixed64` | 1 | fixed64, sfixed64, double |
//! | `LengthDelimited` | 2 | string, bytes, message, packed repeated |
//! | `StartGroup` | 3 | group |
//! | `EndGroup` | 4 | (closing tag of a group) |
//! | `Fixed32` | 5 | fixed32, sfixed32, float |

use crate::descriptor::{FieldDescriptor, FieldKind};

/// Number of bits reserved for the wire type in a tag.
pub const TAG_TYPE_BITS: u32 = 3;

/// Largest field number the protocol allows.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Longest varint encoding of a 32-bit value.
pub const MAX_VARINT32_BYTES: usize = 5;

/// Encoding of a field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Varint,
    Fixed64,
    LengthDelimited,
    StartGroup,
    EndGroup,
    Fixed32,
}

impl WireType {
    /// The 3-bit code stored in the low bits of a tag.
    pub fn code(self) -> u32 {
        match self {
            WireType::Varint => 0,
            WireType::Fixed64 => 1,
            WireType::LengthDelimited => 2,
            WireType::StartGroup => 3,
            WireType::EndGroup => 4,
            WireType::Fixed32 => 5,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }
}

impl FieldKind {
    /// Wire type of a single (unpacked) value of this kind.
    pub fn wire_type(self) -> WireType {
        match self {
            FieldKind::Int32
            | FieldKind::Int64
            | FieldKind::UInt32
            | FieldKind::UInt64
            | FieldKind::Bool
            | FieldKind::Enum
            | FieldKind::SInt32
            | FieldKind::SInt64 => WireType::Varint,
            FieldKind::Fixed64 | FieldKind::SFixed64 | FieldKind::Double => WireType::Fixed64,
            FieldKind::Fixed32 | FieldKind::SFixed32 | FieldKind::Float => WireType::Fixed32,
            FieldKind::String | FieldKind::Bytes | FieldKind::Message => {
                WireType::LengthDelimited
            }
            FieldKind::Group => WireType::StartGroup,
        }
    }
}

impl FieldDescriptor {
    /// Wire type used in this field's tag.
    ///
    /// Packed repeated fields are written as one length-delimited blob.
    pub fn wire_type(&self) -> WireType {
        if self.packed && self.repeated && self.kind.is_packable() {
            WireType::LengthDelimited
        } else {
            self.kind.wire_type()
        }
    }
}

/// A tag value together with its varint bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireTag {
    pub tag: u32,
    pub bytes: Vec<u8>,
}

impl WireTag {
    pub fn new(tag: u32) -> Self {
        Self {
            tag,
            bytes: encode_varint32(tag),
        }
    }

    /// Number of bytes the tag occupies on the wire.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Decimal byte values joined with `", "`, as used in byte array initializers.
    pub fn bytes_csv(&self) -> String {
        self.bytes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Wire type stored in the low bits.
    pub fn wire_type(&self) -> Option<WireType> {
        WireType::from_code(self.tag & ((1 << TAG_TYPE_BITS) - 1))
    }

    pub fn field_number(&self) -> u32 {
        self.tag >> TAG_TYPE_BITS
    }
}

/// Combine a field number and wire type into a tag.
pub fn make_tag(field_number: u32, wire_type: WireType) -> u32 {
    (field_number << TAG_TYPE_BITS) | wire_type.code()
}

/// Compute the tag of an unpacked field of `kind` numbered `field_number`.
pub fn encode_tag(field_number: u32, kind: FieldKind) -> WireTag {
    let tag = WireTag::new(make_tag(field_number, kind.wire_type()));
    tracing::trace!(field_number, %kind, tag = tag.tag, "encoded wire tag");
    tag
}

/// Compute the tag for a field descriptor, honouring packed encoding.
pub fn field_tag(field: &FieldDescriptor) -> WireTag {
    WireTag::new(make_tag(field.number, field.wire_type()))
}

/// Closing tag of a group field.
pub fn end_group_tag(field_number: u32) -> u32 {
    make_tag(field_number, WireType::EndGroup)
}

/// Bytes needed for the tag of `field_number`; independent of the wire type.
pub fn tag_size(field_number: u32) -> usize {
    varint32_size(make_tag(field_number, WireType::Varint))
}

/// Encoded length of `value` as a varint.
pub fn varint32_size(value: u32) -> usize {
    let bits = 32 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Encode `value` as a base-128 varint.
pub fn encode_varint32(mut value: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(MAX_VARINT32_BYTES);
    while value >= 0x80 {
        bytes.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    bytes.push(value as u8);
    bytes
}

/// Decode a varint from the start of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` if the input
/// is truncated or longer than five bytes.
pub fn decode_varint32(bytes: &[u8]) -> Option<(u32, usize)> {
    let mut value: u32 = 0;
    for (i, &byte) in bytes.iter().take(MAX_VARINT32_BYTES).enumerate() {
        value |= u32::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}
