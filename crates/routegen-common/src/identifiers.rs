//! Identifier rules for generated code.
//!
//! Generated route builders are emitted into a C#-family target, so output
//! identifiers follow that grammar: a letter or `_` followed by letters,
//! digits, connector punctuation, combining marks or formatting characters.
//! Keywords are valid identifier text but must be escaped with `@` when
//! written out.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Reserved keywords; always escaped.
const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Contextual keywords; escaped as well so generated code never depends on context.
const CONTEXTUAL_KEYWORDS: &[&str] = &[
    "add", "alias", "and", "args", "ascending", "async", "await", "by", "descending",
    "dynamic", "equals", "file", "from", "get", "global", "group", "init", "into", "join",
    "let", "managed", "nameof", "nint", "not", "notnull", "nuint", "on", "or", "orderby",
    "partial", "record", "remove", "required", "scoped", "select", "set", "unmanaged",
    "value", "var", "when", "where", "with", "yield",
];

static KEYWORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    RESERVED_KEYWORDS
        .iter()
        .chain(CONTEXTUAL_KEYWORDS)
        .copied()
        .collect()
});

/// Check if a character can start an identifier.
fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

/// Check if a character can be part of an identifier.
fn is_identifier_part(ch: char) -> bool {
    ch == '_'
        || ch.is_alphanumeric()
        || is_connector_punctuation(ch)
        || is_combining_mark(ch)
        || is_formatting_character(ch)
}

fn is_connector_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '\u{203F}' | '\u{2040}' | '\u{2054}' | '\u{FE33}' | '\u{FE34}' | '\u{FE4D}'..='\u{FE4F}'
            | '\u{FF3F}'
    )
}

fn is_combining_mark(ch: char) -> bool {
    matches!(
        ch,
        '\u{0300}'..='\u{036F}'
            | '\u{0483}'..='\u{0489}'
            | '\u{0591}'..='\u{05BD}'
            | '\u{0610}'..='\u{061A}'
            | '\u{064B}'..='\u{065F}'
            | '\u{0900}'..='\u{0903}'
            | '\u{093A}'..='\u{094F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

fn is_formatting_character(ch: char) -> bool {
    matches!(
        ch,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{FEFF}'
    )
}

/// Validate that a string is a valid identifier.
///
/// Keywords are accepted; they are escaped by [`escape_identifier`] when
/// written into generated code.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return false;
    };
    if !is_identifier_start(first) {
        return false;
    }

    chars.all(is_identifier_part)
}

/// Validate a dot-separated namespace, checking each segment.
pub fn is_valid_namespace(namespace: &str) -> bool {
    namespace.split('.').all(is_valid_identifier)
}

pub fn is_keyword(identifier: &str) -> bool {
    KEYWORDS.contains(identifier)
}

/// Prefix keywords with `@` so they can be used as identifiers.
pub fn escape_identifier(identifier: &str) -> String {
    if is_keyword(identifier) {
        format!("@{identifier}")
    } else {
        identifier.to_string()
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn camel_to_pascal_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn pascal_to_camel_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
