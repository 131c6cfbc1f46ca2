//! Error types for form generation

use formsmith_templating::TemplatingError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while resolving entities and generating forms
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Entity name not in `Bundle:Entity` notation
    #[error(
        "The entity name must contain a : (\"{0}\" given, expecting e.g. AcmeBlogBundle:Post)"
    )]
    InvalidEntityName(String),

    /// Bundle not declared in configuration
    #[error(
        "Bundle \"{name}\" does not exist (known bundles: {})",
        known(available)
    )]
    UnknownBundle {
        name: String,
        available: Vec<String>,
    },

    /// No mapping file for the entity
    #[error("Entity \"{bundle}:{entity}\" does not exist (no mapping at {path})")]
    EntityNotFound {
        bundle: String,
        entity: String,
        path: PathBuf,
    },

    /// Name collides with a reserved word
    #[error("\"{0}\" is a reserved word")]
    ReservedKeyword(String),

    /// Entities with more than one identifier field cannot be handled
    #[error(
        "The form generator does not support entity classes with multiple primary keys ({entity})"
    )]
    CompositeIdentifier { entity: String },

    /// Refusing to overwrite an existing form class
    #[error("Class \"{class}\" already exists. ({path})")]
    ClassExists { class: String, path: PathBuf },

    /// Not a usable class name
    #[error("Invalid class name \"{0}\"")]
    InvalidClassName(String),

    /// Field not exposed by the entity
    #[error("Field \"{0}\" doesn't exist")]
    InvalidField(String),

    /// Field selected twice
    #[error("Field \"{0}\" is already defined")]
    DuplicateField(String),

    /// Form type not in the registry
    #[error("Invalid field type \"{0}\"")]
    InvalidFormType(String),

    /// Malformed `name[:type[:required|optional]]` specification
    #[error("Invalid field specification \"{spec}\": {message}")]
    InvalidFieldSpec { spec: String, message: String },

    /// Mapping file could not be parsed
    #[error("Failed to parse mapping {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// Skeleton lookup or rendering failed
    #[error(transparent)]
    Template(#[from] TemplatingError),

    /// IO error
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn known(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
