//! # formsmith
//!
//! Generates PHP form type classes from entity mapping metadata.
//!
//! A generation run resolves a `Bundle:Entity` shortcut to a [`Bundle`],
//! loads the entity's [`EntityMetadata`], lets the caller pick fields from
//! [`fields_from_metadata`], and hands the selection to [`FormGenerator`].
//! Field labels are produced by the configured
//! [`LabelStrategy`](formsmith_labels::LabelStrategy).
//!
//! ```no_run
//! use formsmith::{BundleRegistry, FormField, FormGenerator, MappingFileProvider, MetadataProvider};
//!
//! let config = formsmith_config::load_configuration()?;
//! let bundles = BundleRegistry::from_config(&config);
//! let bundle = bundles.get("AcmeBlogBundle")?;
//!
//! let metadata = MappingFileProvider::new().load(bundle, "Post")?;
//! let fields = vec![FormField::new("title", "text", true)];
//!
//! let generated = FormGenerator::from_config(&config)
//!     .generate(bundle, "Post", &fields, None, None)?;
//! println!("{} ({} columns)", generated.class_path.display(), metadata.columns.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bundle;
pub mod error;
pub mod fields;
pub mod generator;
pub mod keywords;
pub mod metadata;
pub mod types;
pub mod validators;

pub use bundle::{Bundle, BundleRegistry};
pub use error::{GeneratorError, Result};
pub use fields::{fields_from_metadata, FieldSelection, FieldSpec, FormField};
pub use generator::{
    default_form_name, FormGenerator, FormPlan, GeneratedForm, LabelSettings, PROFILE_FORM_CLASS,
    PROFILE_FORM_NAME,
};
pub use metadata::{
    Association, AssociationKind, ColumnField, EntityMetadata, MappingFileProvider,
    MetadataProvider,
};
pub use types::{guess_type, is_form_type};
pub use validators::{
    parse_shortcut_notation, validate_class_name, validate_entity_keyword, validate_entity_name,
    validate_form_name, validate_reserved_word,
};

pub use formsmith_labels::{LabelStrategy, LabelTranslator};
