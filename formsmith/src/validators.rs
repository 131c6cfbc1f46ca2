//! Input validation for entity, class and form names

use crate::error::{GeneratorError, Result};
use crate::keywords::{is_reserved_keyword, is_reserved_word};
use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\\[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("class name pattern is valid")
});

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

/// Normalize and check an entity name in `Bundle:Entity` notation
///
/// Forward slashes are accepted as namespace separators and converted to
/// backslashes.
pub fn validate_entity_name(entity: &str) -> Result<String> {
    let entity = entity.trim().replace('/', "\\");
    match entity.split_once(':') {
        Some((bundle, name)) if !bundle.is_empty() && CLASS_NAME.is_match(name) => Ok(entity),
        _ => Err(GeneratorError::InvalidEntityName(entity)),
    }
}

/// Split `Bundle:Entity` into its bundle and entity parts
pub fn parse_shortcut_notation(shortcut: &str) -> Result<(String, String)> {
    let entity = validate_entity_name(shortcut)?;
    let (bundle, name) = entity
        .split_once(':')
        .ok_or_else(|| GeneratorError::InvalidEntityName(entity.clone()))?;
    Ok((bundle.to_string(), name.to_string()))
}

/// Reject SQL keywords used as entity names
pub fn validate_entity_keyword(entity: &str) -> Result<()> {
    let short = entity.rsplit('\\').next().unwrap_or(entity);
    if is_reserved_keyword(short) {
        return Err(GeneratorError::ReservedKeyword(short.to_string()));
    }
    Ok(())
}

/// Reject PHP reserved words
pub fn validate_reserved_word(word: &str) -> Result<String> {
    if is_reserved_word(word) {
        return Err(GeneratorError::ReservedKeyword(word.to_string()));
    }
    Ok(word.to_string())
}

/// Check a user-supplied form class name, given without its `Type` suffix
///
/// The class lands in the entity's namespace, so no namespace separators are
/// accepted here.
pub fn validate_class_name(name: &str) -> Result<String> {
    let name = name.trim();
    if !IDENTIFIER.is_match(name) {
        return Err(GeneratorError::InvalidClassName(name.to_string()));
    }
    validate_reserved_word(name)
}

/// Check a user-supplied form type name
pub fn validate_form_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GeneratorError::InvalidClassName(name.to_string()));
    }
    validate_reserved_word(name)
}
