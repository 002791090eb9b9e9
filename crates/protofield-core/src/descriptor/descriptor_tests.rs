#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(1, FieldKind::Double)]
#[test_case(2, FieldKind::Float)]
#[test_case(3, FieldKind::Int64)]
#[test_case(4, FieldKind::UInt64)]
#[test_case(5, FieldKind::Int32)]
#[test_case(6, FieldKind::Fixed64)]
#[test_case(7, FieldKind::Fixed32)]
#[test_case(8, FieldKind::Bool)]
#[test_case(9, FieldKind::String)]
#[test_case(10, FieldKind::Group)]
#[test_case(11, FieldKind::Message)]
#[test_case(12, FieldKind::Bytes)]
#[test_case(13, FieldKind::UInt32)]
#[test_case(14, FieldKind::Enum)]
#[test_case(15, FieldKind::SFixed32)]
#[test_case(16, FieldKind::SFixed64)]
#[test_case(17, FieldKind::SInt32)]
#[test_case(18, FieldKind::SInt64)]
fn FieldKind___from_type_code___maps_protocol_codes(code: i32, expected: FieldKind) {
    assert_eq!(FieldKind::from_type_code(code).unwrap(), expected);
}

#[test_case(0)]
#[test_case(19)]
#[test_case(-1)]
fn FieldKind___from_type_code___rejects_unknown_codes(code: i32) {
    let err = FieldKind::try_from(code).unwrap_err();

    assert!(matches!(err, GenError::UnknownFieldKind(c) if c == code));
}

#[test]
fn FieldKind___capitalized_name___is_unique_per_kind() {
    let names: std::collections::HashSet<&str> =
        FieldKind::ALL.iter().map(|k| k.capitalized_name()).collect();

    assert_eq!(names.len(), FieldKind::ALL.len());
}

#[test_case(FieldKind::Double, "Double")]
#[test_case(FieldKind::UInt64, "UInt64")]
#[test_case(FieldKind::SFixed32, "SFixed32")]
#[test_case(FieldKind::SInt64, "SInt64")]
#[test_case(FieldKind::Message, "Message")]
fn FieldKind___display___uses_capitalized_name(kind: FieldKind, expected: &str) {
    assert_eq!(kind.to_string(), expected);
}

#[test]
fn FieldKind___is_packable___excludes_length_delimited_and_groups() {
    let unpackable: Vec<FieldKind> = FieldKind::ALL
        .iter()
        .copied()
        .filter(|k| !k.is_packable())
        .collect();

    assert_eq!(
        unpackable,
        vec![
            FieldKind::String,
            FieldKind::Bytes,
            FieldKind::Message,
            FieldKind::Group
        ]
    );
}

#[test_case(r#""sfixed32""#, FieldKind::SFixed32)]
#[test_case(r#""uint32""#, FieldKind::UInt32)]
#[test_case(r#""sint64""#, FieldKind::SInt64)]
#[test_case(r#""group""#, FieldKind::Group)]
fn FieldKind___deserialize___accepts_lowercase_names(json: &str, expected: FieldKind) {
    let kind: FieldKind = serde_json::from_str(json).unwrap();

    assert_eq!(kind, expected);
}

#[test_case(DefaultValue::Double(0.0), true)]
#[test_case(DefaultValue::Double(-0.0), true)]
#[test_case(DefaultValue::Double(f64::NAN), false)]
#[test_case(DefaultValue::Float(1.5), false)]
#[test_case(DefaultValue::Int64(0), true)]
#[test_case(DefaultValue::UInt64(7), false)]
#[test_case(DefaultValue::Int32(-1), false)]
#[test_case(DefaultValue::UInt32(0), true)]
#[test_case(DefaultValue::Bool(false), true)]
#[test_case(DefaultValue::Bool(true), false)]
#[test_case(DefaultValue::Text(String::new()), true)]
#[test_case(DefaultValue::Text("x".into()), false)]
#[test_case(DefaultValue::None, true)]
fn DefaultValue___is_zero___matches_kind_zero(value: DefaultValue, expected: bool) {
    assert_eq!(value.is_zero(), expected);
}

#[test]
fn MessageRef___simple_name___returns_innermost_name() {
    assert_eq!(MessageRef::new("Outer.Inner").simple_name(), "Inner");
    assert_eq!(MessageRef::new("Plain").simple_name(), "Plain");
}

#[test]
fn EnumRef___simple_name___returns_innermost_name() {
    assert_eq!(EnumRef::new("Outer.Kind", "KIND_A").simple_name(), "Kind");
    assert_eq!(EnumRef::new("Color", "RED").simple_name(), "Color");
}

#[test]
fn FieldDescriptor___has_presence___only_for_singular_non_oneof() {
    let owner = MessageRef::new("Owner");
    let singular = FieldDescriptor::new("a", 1, FieldKind::Int32, owner.clone());
    let repeated = FieldDescriptor::new("b", 2, FieldKind::Int32, owner.clone()).repeated();
    let in_oneof = FieldDescriptor::new("c", 3, FieldKind::Int32, owner)
        .in_oneof(OneofRef::new("choice", 0));

    assert!(singular.has_presence());
    assert!(!repeated.has_presence());
    assert!(!in_oneof.has_presence());
}

#[test]
fn FieldDescriptor___packed___implies_repeated() {
    let field = FieldDescriptor::new("values", 4, FieldKind::Int32, MessageRef::new("M")).packed();

    assert!(field.repeated);
    assert!(field.packed);
}

#[test]
fn DescriptorSet___from_json___parses_minimal_field() {
    let json = br#"{
        "fields": [
            {
                "name": "id",
                "number": 1,
                "kind": "int64",
                "containing_type": { "name": "User", "package": "acme.users" }
            }
        ]
    }"#;

    let set = DescriptorSet::from_json(json).unwrap();

    assert_eq!(set.fields.len(), 1);
    let field = &set.fields[0];
    assert_eq!(field.kind, FieldKind::Int64);
    assert_eq!(field.containing_type.package, "acme.users");
    assert!(!field.repeated);
    assert_eq!(field.default_value, DefaultValue::None);
}

#[test]
fn DescriptorSet___from_json___parses_typed_default() {
    let json = br#"{
        "fields": [
            {
                "name": "ratio",
                "number": 2,
                "kind": "double",
                "containing_type": { "name": "Settings" },
                "default_value": { "double": 1.5 }
            }
        ]
    }"#;

    let set = DescriptorSet::from_json(json).unwrap();

    assert_eq!(set.fields[0].default_value, DefaultValue::Double(1.5));
}

#[test]
fn DescriptorSet___from_json___rejects_unknown_kind() {
    let json = br#"{
        "fields": [
            { "name": "x", "number": 1, "kind": "complex", "containing_type": { "name": "M" } }
        ]
    }"#;

    let err = DescriptorSet::from_json(json).unwrap_err();

    assert!(matches!(err, GenError::Serialization(_)));
}

#[test]
fn DescriptorSet___extensions___filters_extension_fields() {
    let scope = MessageRef::new("Extensions");
    let set = DescriptorSet {
        fields: vec![
            FieldDescriptor::new("plain", 1, FieldKind::Int32, scope.clone()),
            FieldDescriptor::new("ext", 100, FieldKind::Int32, scope)
                .extending(MessageRef::new("Foo")),
        ],
    };

    let names: Vec<&str> = set.extensions().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec!["ext"]);
}
