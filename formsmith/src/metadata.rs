//! Entity mapping metadata
//!
//! Metadata is read from Doctrine YAML mapping files located at
//! `<bundle>/Resources/config/doctrine/<Entity>.orm.yml`. Only the parts the
//! generator needs are kept: identifier fields and generator strategy,
//! mapped columns with their types, and associations.

use crate::bundle::Bundle;
use crate::error::{GeneratorError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory, relative to a bundle, holding the YAML mapping files
pub const MAPPING_DIR: &str = "Resources/config/doctrine";

/// Kind of an entity association
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

/// A mapped column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnField {
    pub name: String,
    pub column_type: String,
    pub nullable: bool,
}

/// A mapped association to another entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub name: String,
    pub kind: AssociationKind,
    pub target_entity: String,
}

/// Everything the generator needs to know about an entity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityMetadata {
    /// Fully-qualified entity class name
    pub class_name: String,
    /// Identifier field names, in mapping order
    pub identifier: Vec<String>,
    /// Id generator strategy, `None` when the mapping declares none
    pub id_generator: Option<String>,
    /// Mapped columns, identifier columns first
    pub columns: Vec<ColumnField>,
    pub associations: Vec<Association>,
}

impl EntityMetadata {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    /// Builder used mostly by tests
    pub fn with_id(mut self, name: &str, column_type: &str, generator: Option<&str>) -> Self {
        self.identifier.push(name.to_string());
        if self.id_generator.is_none() {
            self.id_generator = generator.map(str::to_string);
        }
        self.columns.push(ColumnField {
            name: name.to_string(),
            column_type: column_type.to_string(),
            nullable: false,
        });
        self
    }

    pub fn with_column(mut self, name: &str, column_type: &str) -> Self {
        self.columns.push(ColumnField {
            name: name.to_string(),
            column_type: column_type.to_string(),
            nullable: false,
        });
        self
    }

    pub fn with_association(mut self, name: &str, kind: AssociationKind, target: &str) -> Self {
        self.associations.push(Association {
            name: name.to_string(),
            kind,
            target_entity: target.to_string(),
        });
        self
    }

    /// Identifier values are supplied by the user rather than generated
    pub fn is_identifier_natural(&self) -> bool {
        match &self.id_generator {
            None => true,
            Some(strategy) => strategy.eq_ignore_ascii_case("NONE"),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnField> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn association(&self, name: &str) -> Option<&Association> {
        self.associations.iter().find(|a| a.name == name)
    }

    /// Parse a YAML mapping document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        parse_mapping(content, Path::new("<string>"))
    }

    /// Read and parse a YAML mapping file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_mapping(&content, path)
    }
}

/// Source of entity metadata
pub trait MetadataProvider: Send + Sync {
    /// Load metadata for `entity` inside `bundle`
    fn load(&self, bundle: &Bundle, entity: &str) -> Result<EntityMetadata>;
}

/// Reads Doctrine YAML mapping files from the bundle directory
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingFileProvider;

impl MappingFileProvider {
    pub fn new() -> Self {
        Self
    }

    /// Location of the mapping file for `entity`
    ///
    /// Sub-namespaces are separated by dots: `Blog\Post` maps to
    /// `Blog.Post.orm.yml`.
    pub fn mapping_path(bundle: &Bundle, entity: &str) -> PathBuf {
        bundle
            .path
            .join(MAPPING_DIR)
            .join(format!("{}.orm.yml", entity.replace('\\', ".")))
    }
}

impl MetadataProvider for MappingFileProvider {
    fn load(&self, bundle: &Bundle, entity: &str) -> Result<EntityMetadata> {
        let path = Self::mapping_path(bundle, entity);
        if !path.is_file() {
            return Err(GeneratorError::EntityNotFound {
                bundle: bundle.name.clone(),
                entity: entity.to_string(),
                path,
            });
        }

        debug!("Loading mapping {}", path.display());
        let metadata = EntityMetadata::from_file(&path)?;

        let expected = format!("{}\\Entity\\{}", bundle.namespace, entity);
        if metadata.class_name != expected {
            debug!(
                "Mapping declares {} while {} was expected",
                metadata.class_name, expected
            );
        }
        Ok(metadata)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct EntityMapping {
    #[serde(default)]
    id: IndexMap<String, Option<IdMapping>>,
    #[serde(default)]
    fields: IndexMap<String, Option<ColumnMapping>>,
    #[serde(default)]
    one_to_one: IndexMap<String, Option<AssociationMapping>>,
    #[serde(default)]
    many_to_one: IndexMap<String, Option<AssociationMapping>>,
    #[serde(default)]
    one_to_many: IndexMap<String, Option<AssociationMapping>>,
    #[serde(default)]
    many_to_many: IndexMap<String, Option<AssociationMapping>>,
}

#[derive(Debug, Deserialize, Default)]
struct IdMapping {
    #[serde(rename = "type")]
    column_type: Option<String>,
    generator: Option<GeneratorMapping>,
}

#[derive(Debug, Deserialize)]
struct GeneratorMapping {
    strategy: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ColumnMapping {
    #[serde(rename = "type")]
    column_type: Option<String>,
    #[serde(default)]
    nullable: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct AssociationMapping {
    target_entity: Option<String>,
}

/// The document is keyed by the entity class name; the first entry is used
/// whatever its key.
fn parse_mapping(content: &str, path: &Path) -> Result<EntityMetadata> {
    let documents: IndexMap<String, EntityMapping> =
        serde_yaml_ng::from_str(content).map_err(|e| metadata_error(path, e.to_string()))?;

    let (declared, mapping) = documents
        .into_iter()
        .next()
        .ok_or_else(|| metadata_error(path, "mapping file is empty"))?;

    let mut metadata = EntityMetadata::new(declared);

    for (name, id) in mapping.id {
        let id = id.unwrap_or_default();
        if metadata.id_generator.is_none() {
            metadata.id_generator = id.generator.and_then(|g| g.strategy);
        }
        metadata.identifier.push(name.clone());
        metadata.columns.push(ColumnField {
            name,
            column_type: id.column_type.unwrap_or_else(|| "string".to_string()),
            nullable: false,
        });
    }

    for (name, column) in mapping.fields {
        let column = column.unwrap_or_default();
        metadata.columns.push(ColumnField {
            name,
            column_type: column.column_type.unwrap_or_else(|| "string".to_string()),
            nullable: column.nullable,
        });
    }

    let sections = [
        (AssociationKind::OneToOne, mapping.one_to_one),
        (AssociationKind::ManyToOne, mapping.many_to_one),
        (AssociationKind::OneToMany, mapping.one_to_many),
        (AssociationKind::ManyToMany, mapping.many_to_many),
    ];
    for (kind, associations) in sections {
        for (name, association) in associations {
            let target_entity = association
                .and_then(|a| a.target_entity)
                .unwrap_or_default();
            metadata.associations.push(Association {
                name,
                kind,
                target_entity,
            });
        }
    }

    Ok(metadata)
}

fn metadata_error(path: &Path, message: impl Into<String>) -> GeneratorError {
    GeneratorError::Metadata {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const POST_MAPPING: &str = r#"
Acme\BlogBundle\Entity\Post:
    type: entity
    table: post
    id:
        id:
            type: integer
            generator: { strategy: AUTO }
    fields:
        title:
            type: string
            length: 255
        body:
            type: text
            nullable: true
        publishedAt:
            type: datetime
    manyToOne:
        author:
            targetEntity: User
    oneToMany:
        comments:
            targetEntity: Comment
            mappedBy: post
    manyToMany:
        tags:
            targetEntity: Tag
"#;

    #[test]
    fn test_parse_mapping() {
        let metadata = EntityMetadata::from_yaml_str(POST_MAPPING).unwrap();

        assert_eq!(metadata.class_name, "Acme\\BlogBundle\\Entity\\Post");
        assert_eq!(metadata.identifier, vec!["id"]);
        assert_eq!(metadata.id_generator.as_deref(), Some("AUTO"));
        assert!(!metadata.is_identifier_natural());

        let names: Vec<_> = metadata.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "title", "body", "publishedAt"]);
        assert!(metadata.column("body").unwrap().nullable);
        let published_at = metadata.column("publishedAt").unwrap();
        assert_eq!(published_at.column_type, "datetime");

        let author = metadata.association("author").unwrap();
        assert_eq!(author.kind, AssociationKind::ManyToOne);
        assert_eq!(author.target_entity, "User");
        assert_eq!(
            metadata.association("comments").unwrap().kind,
            AssociationKind::OneToMany
        );
    }

    #[test]
    fn test_natural_identifier() {
        let yaml = r#"
Acme\BlogBundle\Entity\Country:
    type: entity
    id:
        code:
            type: string
    fields:
        name: ~
"#;
        let metadata = EntityMetadata::from_yaml_str(yaml).unwrap();
        assert!(metadata.is_identifier_natural());
        assert_eq!(metadata.column("name").unwrap().column_type, "string");

        let explicit_none = EntityMetadata::new("X").with_id("code", "string", Some("NONE"));
        assert!(explicit_none.is_identifier_natural());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = EntityMetadata::from_yaml_str("- just\n- a list").unwrap_err();
        assert!(matches!(err, GeneratorError::Metadata { .. }));

        let err = EntityMetadata::from_yaml_str("{}").unwrap_err();
        assert!(err.to_string().contains("mapping file is empty"));
    }

    #[test]
    fn test_provider_reads_bundle_mapping() {
        let dir = TempDir::new().unwrap();
        let bundle = Bundle::new("AcmeBlogBundle", "Acme\\BlogBundle", dir.path());
        let mapping_dir = dir.path().join(MAPPING_DIR);
        fs::create_dir_all(&mapping_dir).unwrap();
        fs::write(mapping_dir.join("Post.orm.yml"), POST_MAPPING).unwrap();

        let provider = MappingFileProvider::new();
        let metadata = provider.load(&bundle, "Post").unwrap();
        assert_eq!(metadata.columns.len(), 4);

        match provider.load(&bundle, "Comment") {
            Err(GeneratorError::EntityNotFound { entity, .. }) => assert_eq!(entity, "Comment"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_mapping_path_for_sub_namespace() {
        let bundle = Bundle::new("AcmeBlogBundle", "Acme\\BlogBundle", "src/Acme/BlogBundle");
        let path = MappingFileProvider::mapping_path(&bundle, "Blog\\Post");
        assert!(path.starts_with("src/Acme/BlogBundle"));
        assert!(path.ends_with("Resources/config/doctrine/Blog.Post.orm.yml"));
    }
}
