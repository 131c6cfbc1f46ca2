//! Field enumeration and selection

use crate::error::{GeneratorError, Result};
use crate::metadata::{AssociationKind, EntityMetadata};
use crate::types::{guess_type, is_form_type, FALLBACK_FORM_TYPE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fields of an entity that can appear on a form
///
/// Identifier fields are skipped unless their values are natural. Columns
/// come first, then every association except one-to-many.
pub fn fields_from_metadata(metadata: &EntityMetadata) -> Result<Vec<String>> {
    if metadata.identifier.len() > 1 {
        return Err(GeneratorError::CompositeIdentifier {
            entity: metadata.class_name.clone(),
        });
    }

    let natural = metadata.is_identifier_natural();
    let mut fields: Vec<String> = metadata
        .columns
        .iter()
        .filter(|column| natural || !metadata.identifier.contains(&column.name))
        .map(|column| column.name.clone())
        .collect();

    fields.extend(
        metadata
            .associations
            .iter()
            .filter(|association| association.kind != AssociationKind::OneToMany)
            .map(|association| association.name.clone()),
    );

    Ok(fields)
}

/// A field to render on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            required,
        }
    }
}

/// A `name[:type[:required|optional]]` field specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: Option<String>,
    pub required: bool,
}

impl FromStr for FieldSpec {
    type Err = GeneratorError;

    fn from_str(spec: &str) -> Result<Self> {
        let invalid = |message: &str| GeneratorError::InvalidFieldSpec {
            spec: spec.to_string(),
            message: message.to_string(),
        };

        let mut parts = spec.split(':').map(str::trim);
        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(invalid("missing field name"));
        }

        let field_type = parts.next().filter(|t| !t.is_empty()).map(str::to_string);

        let required = match parts.next() {
            None | Some("") | Some("required") => true,
            Some("optional") => false,
            Some(_) => return Err(invalid("expected 'required' or 'optional'")),
        };

        if parts.next().is_some() {
            return Err(invalid("too many ':' separated parts"));
        }

        Ok(Self {
            name: name.to_string(),
            field_type,
            required,
        })
    }
}

/// Fields chosen for a form, validated against an entity
#[derive(Debug, Clone)]
pub struct FieldSelection<'a> {
    metadata: &'a EntityMetadata,
    available: Vec<String>,
    fields: Vec<FormField>,
}

impl<'a> FieldSelection<'a> {
    pub fn new(metadata: &'a EntityMetadata) -> Result<Self> {
        Ok(Self {
            metadata,
            available: fields_from_metadata(metadata)?,
            fields: Vec::new(),
        })
    }

    /// Field names the entity exposes
    pub fn available(&self) -> &[String] {
        &self.available
    }

    /// Form type suggested for `name`
    pub fn default_type(&self, name: &str) -> &'static str {
        guess_type(self.metadata, name).unwrap_or(FALLBACK_FORM_TYPE)
    }

    /// Check that `name` exists and is not selected yet
    pub fn check_name(&self, name: &str) -> Result<()> {
        if !self.available.iter().any(|field| field == name) {
            return Err(GeneratorError::InvalidField(name.to_string()));
        }
        if self.fields.iter().any(|field| field.name == name) {
            return Err(GeneratorError::DuplicateField(name.to_string()));
        }
        Ok(())
    }

    /// Add a field after validating its name and type
    pub fn push(&mut self, field: FormField) -> Result<()> {
        self.check_name(&field.name)?;
        if !is_form_type(&field.field_type) {
            return Err(GeneratorError::InvalidFormType(field.field_type));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Add a field from its specification, guessing the type if absent
    pub fn push_spec(&mut self, spec: &FieldSpec) -> Result<()> {
        let field_type = spec
            .field_type
            .clone()
            .unwrap_or_else(|| self.default_type(&spec.name).to_string());
        self.push(FormField::new(spec.name.clone(), field_type, spec.required))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }
}
