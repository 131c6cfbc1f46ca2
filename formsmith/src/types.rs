//! Form type registry and type guessing

use crate::metadata::EntityMetadata;

/// Built-in form types
pub const FORM_TYPES: &[&str] = &[
    "birthday", "button", "checkbox", "choice", "collection", "country", "currency", "date",
    "datetime", "email", "entity", "file", "form", "hidden", "integer", "language", "locale",
    "money", "number", "password", "percent", "radio", "repeated", "reset", "search", "submit",
    "text", "textarea", "time", "timezone", "url",
];

/// Form type used when nothing better can be guessed
pub const FALLBACK_FORM_TYPE: &str = "text";

/// Whether `name` is a registered form type
pub fn is_form_type(name: &str) -> bool {
    FORM_TYPES.contains(&name)
}

/// Form type for a mapped column type
pub fn form_type_for_column(column_type: &str) -> Option<&'static str> {
    match column_type {
        "boolean" => Some("checkbox"),
        "date" => Some("date"),
        "datetime" | "datetimetz" => Some("datetime"),
        "time" => Some("time"),
        "decimal" | "float" => Some("number"),
        "integer" | "bigint" | "smallint" => Some("integer"),
        "string" => Some("text"),
        "text" => Some("textarea"),
        "array" | "simple_array" => Some("collection"),
        _ => None,
    }
}

/// Guess the form type of `field` from entity metadata
///
/// Associations become `entity` fields. Returns `None` for unknown fields and
/// unmapped column types.
pub fn guess_type(metadata: &EntityMetadata, field: &str) -> Option<&'static str> {
    if metadata.association(field).is_some() {
        return Some("entity");
    }
    metadata
        .column(field)
        .and_then(|column| form_type_for_column(&column.column_type))
}
