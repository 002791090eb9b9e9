#![allow(non_snake_case)]

use super::*;
use crate::descriptor::{DefaultValue, EnumRef, MessageRef};
use crate::names::CSharpNames;

fn scope() -> MessageRef {
    MessageRef::new("UnittestExtensions")
}

fn int32_extension() -> FieldDescriptor {
    FieldDescriptor::new("bar", 100, FieldKind::Int32, scope())
        .extending(MessageRef::new("Foo"))
        .with_default(DefaultValue::Int32(0))
}

#[test]
fn emit_extension___int32_field_100___renders_declaration() {
    let code = emit_extension(&int32_extension(), &CSharpNames, &GeneratorOptions::default()).unwrap();

    assert_eq!(
        code,
        "public static readonly pb::Extension<global::Foo, int> Bar =\n  new pb::Extension<global::Foo, int>(800, 0);\n"
    );
}

#[test]
fn emit_extension___internal_access___uses_internal_modifier() {
    let options = GeneratorOptions {
        internal_access: true,
        ..GeneratorOptions::default()
    };

    let code = emit_extension(&int32_extension(), &CSharpNames, &options).unwrap();

    assert!(code.starts_with("internal static readonly"));
}

#[test]
fn emit_extension___ordinary_field___not_an_extension() {
    let field = FieldDescriptor::new("bar", 1, FieldKind::Int32, scope());

    let err = emit_extension(&field, &CSharpNames, &GeneratorOptions::default()).unwrap_err();

    assert!(matches!(err, GenError::NotAnExtension { ref field } if field == "bar"));
}

#[test]
fn emit_extension___message_extension___null_default() {
    let field = FieldDescriptor::new("child", 101, FieldKind::Message, scope())
        .extending(MessageRef::new("Foo").with_package("acme"))
        .with_message_type(MessageRef::new("Child").with_package("acme"));

    let code = emit_extension(&field, &CSharpNames, &GeneratorOptions::default()).unwrap();

    assert!(code.contains("pb::Extension<global::Acme.Foo, global::Acme.Child> Child ="));
    assert!(code.contains("(810, null);"));
}

#[test]
fn emit_extension___string_extension_with_default___quoted_literal() {
    let field = FieldDescriptor::new("label", 102, FieldKind::String, scope())
        .extending(MessageRef::new("Foo"))
        .with_default(DefaultValue::Text("none".into()));

    let code = emit_extension(&field, &CSharpNames, &GeneratorOptions::default()).unwrap();

    assert!(code.contains("(818, \"none\");"));
}

#[test]
fn emit_extension___repeated_scalar___uses_field_codec() {
    let field = FieldDescriptor::new("values", 103, FieldKind::SInt32, scope())
        .repeated()
        .extending(MessageRef::new("Foo"));

    let code = emit_extension(&field, &CSharpNames, &GeneratorOptions::default()).unwrap();

    assert_eq!(
        code,
        "public static readonly pb::RepeatedExtension<global::Foo, int> Values =\n  new pb::RepeatedExtension<global::Foo, int>(824, pb::FieldCodec.ForSInt32(824));\n"
    );
}

#[test]
fn emit_extension___missing_message_type___propagates_provider_error() {
    let field = FieldDescriptor::new("child", 101, FieldKind::Message, scope())
        .extending(MessageRef::new("Foo"));

    let err = emit_extension(&field, &CSharpNames, &GeneratorOptions::default()).unwrap_err();

    assert!(matches!(err, GenError::MissingReference { .. }));
}

#[test]
fn codec_expression___enum___converts_through_int() {
    let field = FieldDescriptor::new("colors", 5, FieldKind::Enum, scope())
        .repeated()
        .with_enum_type(EnumRef::new("Color", "RED"));
    let vars = resolve(&field, &CSharpNames, &GeneratorOptions::default(), 0).unwrap();

    let codec = codec_expression(FieldKind::Enum, &vars).unwrap();

    assert_eq!(
        codec,
        "pb::FieldCodec.ForEnum(40, x => (int) x, x => (global::Color) x)"
    );
}

#[test]
fn codec_expression___message___uses_parser() {
    let field = FieldDescriptor::new("children", 6, FieldKind::Message, scope())
        .repeated()
        .with_message_type(MessageRef::new("Child"));
    let vars = resolve(&field, &CSharpNames, &GeneratorOptions::default(), 0).unwrap();

    let codec = codec_expression(FieldKind::Message, &vars).unwrap();

    assert_eq!(codec, "pb::FieldCodec.ForMessage(50, global::Child.Parser)");
}

#[test]
fn codec_expression___group___passes_start_and_end_tags() {
    let field = FieldDescriptor::new("items", 7, FieldKind::Group, scope())
        .repeated()
        .with_message_type(MessageRef::new("Items"));
    let vars = resolve(&field, &CSharpNames, &GeneratorOptions::default(), 0).unwrap();

    let codec = codec_expression(FieldKind::Group, &vars).unwrap();

    assert_eq!(codec, "pb::FieldCodec.ForGroup(59, 60, global::Items.Parser)");
}

#[test]
fn emit_extensions___skips_ordinary_fields_and_keeps_order() {
    let fields = vec![
        FieldDescriptor::new("first", 100, FieldKind::Bool, scope()).extending(MessageRef::new("Foo")),
        FieldDescriptor::new("plain", 1, FieldKind::Bool, scope()),
        FieldDescriptor::new("second", 101, FieldKind::Bool, scope()).extending(MessageRef::new("Foo")),
    ];

    let code = emit_extensions(&fields, &CSharpNames, &GeneratorOptions::default()).unwrap();

    let first = code.find(" First =").unwrap();
    let second = code.find(" Second =").unwrap();
    assert!(first < second);
    assert!(!code.contains("Plain"));
    assert_eq!(code.matches("static readonly").count(), 2);
}

#[test]
fn emit_extensions___no_extensions___empty_output() {
    let fields = vec![FieldDescriptor::new("plain", 1, FieldKind::Bool, scope())];

    let code = emit_extensions(&fields, &CSharpNames, &GeneratorOptions::default()).unwrap();

    assert!(code.is_empty());
}

#[test]
fn codec_expression___group_without_end_tag___missing_variable() {
    let field = FieldDescriptor::new("items", 7, FieldKind::Message, scope())
        .repeated()
        .with_message_type(MessageRef::new("Items"));
    let vars = resolve(&field, &CSharpNames, &GeneratorOptions::default(), 0).unwrap();

    let err = codec_expression(FieldKind::Group, &vars).unwrap_err();

    assert!(matches!(err, GenError::MissingVariable { ref key } if key == "end_tag"));
}

#[test]
fn codec_expression___empty_metadata___missing_variable() {
    let err = codec_expression(FieldKind::Int32, &FieldMetadata::new()).unwrap_err();

    assert!(matches!(err, GenError::MissingVariable { ref key } if key == "tag"));
}

#[test]
fn emit_extension___enum_extension___default_strips_enum_prefix() {
    let field = FieldDescriptor::new("import_enum_extension", 23, FieldKind::Enum, scope())
        .extending(MessageRef::new("TestAllExtensions").with_package("protobuf_unittest"))
        .with_enum_type(
            EnumRef::new("ImportEnum", "IMPORT_ENUM_UNSPECIFIED").with_package("protobuf_unittest_import"),
        );

    let code = emit_extension(&field, &CSharpNames, &GeneratorOptions::default()).unwrap();

    assert_eq!(
        code,
        "public static readonly pb::Extension<global::ProtobufUnittest.TestAllExtensions, global::ProtobufUnittestImport.ImportEnum> ImportEnumExtension =\n  new pb::Extension<global::ProtobufUnittest.TestAllExtensions, global::ProtobufUnittestImport.ImportEnum>(184, global::ProtobufUnittestImport.ImportEnum.Unspecified);\n"
    );
}
