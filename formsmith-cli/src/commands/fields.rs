//! `formsmith fields <Bundle:Entity>`

use crate::error::CliResult;
use formsmith::{
    fields_from_metadata, guess_type, parse_shortcut_notation, BundleRegistry,
    MappingFileProvider, MetadataProvider,
};
use formsmith_config::FormsmithConfig;

/// One enumerated field with its suggested form type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub name: String,
    pub guessed_type: Option<&'static str>,
}

/// Enumerate the form-eligible fields of an entity
pub fn list_fields(config: &FormsmithConfig, shortcut: &str) -> CliResult<Vec<FieldRow>> {
    let (bundle, entity) = parse_shortcut_notation(shortcut)?;
    let bundles = BundleRegistry::from_config(config);
    let bundle = bundles.get(&bundle)?;
    let metadata = MappingFileProvider::new().load(bundle, &entity)?;

    Ok(fields_from_metadata(&metadata)?
        .into_iter()
        .map(|name| FieldRow {
            guessed_type: guess_type(&metadata, &name),
            name,
        })
        .collect())
}

/// Print the fields of an entity, one per line
pub fn run_fields(config: &FormsmithConfig, shortcut: &str) -> CliResult<()> {
    let rows = list_fields(config, shortcut)?;
    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    for row in rows {
        println!(
            "{:<width$}  {}",
            row.name,
            row.guessed_type.unwrap_or("-"),
            width = width
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use formsmith::GeneratorError;
    use formsmith_config::BundleConfig;
    use std::fs;
    use tempfile::TempDir;

    const TAG_MAPPING: &str = r#"
Acme\BlogBundle\Entity\Tag:
  id:
    slug:
      type: string
  fields:
    label:
      type: string
    payload:
      type: blob
"#;

    fn row(name: &str, guessed_type: Option<&'static str>) -> FieldRow {
        FieldRow {
            name: name.to_string(),
            guessed_type,
        }
    }

    #[test]
    fn test_list_fields() {
        let dir = TempDir::new().unwrap();
        let mapping_dir = dir.path().join("Resources/config/doctrine");
        fs::create_dir_all(&mapping_dir).unwrap();
        fs::write(mapping_dir.join("Tag.orm.yml"), TAG_MAPPING).unwrap();

        let mut config = FormsmithConfig::default();
        config.bundles.insert(
            "AcmeBlogBundle".into(),
            BundleConfig {
                namespace: "Acme\\BlogBundle".into(),
                path: dir.path().to_path_buf(),
            },
        );

        let rows = list_fields(&config, "AcmeBlogBundle:Tag").unwrap();
        assert_eq!(
            rows,
            vec![
                row("slug", Some("text")),
                row("label", Some("text")),
                row("payload", None),
            ]
        );

        assert!(matches!(
            list_fields(&config, "Tag"),
            Err(CliError::Generator(GeneratorError::InvalidEntityName(_)))
        ));
    }
}
