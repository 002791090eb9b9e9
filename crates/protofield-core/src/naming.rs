//! Identifier casing helpers for C# code generation.
//!
//! Schema names are `snake_case` by convention, but may contain digits,
//! dots, or any other characters a schema author chose. These helpers follow
//! the protobuf C# conventions:
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `foo_bar` | [`to_pascal_case`] | `FooBar` |
//! | `foo_bar` | [`to_camel_case`] | `fooBar` |
//! | `field1value` | [`to_pascal_case`] | `Field1Value` |
//! | `COLOR_DARK_RED` in `Color` | [`enum_value_name`] | `DarkRed` |

/// Convert underscore-separated words to camel case.
///
/// Letters following an underscore or a digit are upper-cased; underscores
/// and non-alphanumeric characters are dropped. The first letter is
/// upper-cased only when `cap_next_letter` is set.
///
/// # Examples
///
/// ```
/// use protofield_core::naming::underscores_to_camel_case;
///
/// assert_eq!(underscores_to_camel_case("display_name", false), "displayName");
/// assert_eq!(underscores_to_camel_case("display_name", true), "DisplayName");
/// assert_eq!(underscores_to_camel_case("int32_value", true), "Int32Value");
/// ```
pub fn underscores_to_camel_case(input: &str, cap_next_letter: bool) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = cap_next_letter;

    for c in input.chars() {
        if c.is_ascii_lowercase() {
            if capitalize_next {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
            capitalize_next = false;
        } else if c.is_ascii_uppercase() {
            if result.is_empty() && !cap_next_letter {
                result.push(c.to_ascii_lowercase());
            } else {
                result.push(c);
            }
            capitalize_next = false;
        } else if c.is_ascii_digit() {
            result.push(c);
            capitalize_next = true;
        } else {
            capitalize_next = true;
        }
    }

    result
}

/// Convert a schema name to PascalCase.
///
/// # Examples
///
/// ```
/// use protofield_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello"), "Hello");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    underscores_to_camel_case(s, true)
}

/// Convert a schema name to camelCase.
///
/// # Examples
///
/// ```
/// use protofield_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("hello_world"), "helloWorld");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    underscores_to_camel_case(s, false)
}

/// Strip the enum's own name from the front of one of its value names.
///
/// Underscores and case are ignored while matching, so `IMPORT_ENUM_FOO` loses
/// the prefix of `ImportEnum`. The value is returned unchanged when it does not
/// start with the prefix, or when nothing would be left after stripping.
///
/// # Examples
///
/// ```
/// use protofield_core::naming::strip_enum_prefix;
///
/// assert_eq!(strip_enum_prefix("ImportEnum", "IMPORT_ENUM_UNSPECIFIED"), "UNSPECIFIED");
/// assert_eq!(strip_enum_prefix("Color", "RED"), "RED");
/// assert_eq!(strip_enum_prefix("Color", "COLOR"), "COLOR");
/// ```
pub fn strip_enum_prefix<'a>(enum_name: &str, value_name: &'a str) -> &'a str {
    let prefix: Vec<char> = enum_name
        .chars()
        .filter(|&c| c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut matched = 0;
    let mut rest = value_name.len();
    for (i, c) in value_name.char_indices() {
        if matched == prefix.len() {
            rest = i;
            break;
        }
        if c == '_' {
            continue;
        }
        if c.to_ascii_lowercase() != prefix[matched] {
            return value_name;
        }
        matched += 1;
    }
    if matched < prefix.len() {
        return value_name;
    }

    let remainder = value_name[rest..].trim_start_matches('_');
    if remainder.is_empty() {
        value_name
    } else {
        remainder
    }
}

/// C# member name for an enum value (usually `SCREAMING_CASE`).
///
/// The enum's name prefix is removed before PascalCasing; a result starting
/// with a digit gets a leading `_`.
pub fn enum_value_name(enum_name: &str, value_name: &str) -> String {
    let stripped = strip_enum_prefix(enum_name, value_name);
    let name = to_pascal_case(&stripped.to_ascii_lowercase());
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

/// Escape text for use inside a C# regular string literal.
pub fn escape_string_literal(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
