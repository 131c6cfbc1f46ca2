//! Form type class generation
//!
//! [`FormGenerator`] turns a bundle, an entity and a list of selected fields
//! into a PHP form type class. Labels for each field come from the configured
//! [`LabelStrategy`]; the class body comes from the `form/FormType.php.liquid`
//! skeleton, resolved through the bundle's own skeleton directory, the
//! configured skeleton directories and finally the built-in copy.

use crate::bundle::Bundle;
use crate::error::{GeneratorError, Result};
use crate::fields::FormField;
use formsmith_config::{FormsmithConfig, DEFAULT_LABEL_CONTEXT, DEFAULT_LABEL_FIELD_TYPE};
use formsmith_labels::{LabelStrategy, LabelTranslator};
use formsmith_templating::{SkeletonLoader, TemplateEngine, FORM_TYPE_SKELETON};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Suffix appended to every form class name
pub const FORM_CLASS_SUFFIX: &str = "Type";

/// Form class used by the profile form command
pub const PROFILE_FORM_CLASS: &str = "Profile";

/// Form type name used by the profile form command
pub const PROFILE_FORM_NAME: &str = "user_profile";

/// Label settings applied to every generated field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSettings {
    pub strategy: LabelStrategy,
    pub context: String,
    pub field_type: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            strategy: LabelStrategy::default(),
            context: DEFAULT_LABEL_CONTEXT.to_string(),
            field_type: DEFAULT_LABEL_FIELD_TYPE.to_string(),
        }
    }
}

impl LabelSettings {
    pub fn label(&self, name: &str) -> String {
        self.strategy
            .get_label(name, &self.context, &self.field_type)
    }
}

/// An entity relative class name split into namespace parts and class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName<'a> {
    pub parts: Vec<&'a str>,
    pub class: &'a str,
}

impl<'a> EntityName<'a> {
    /// Split `Blog\Post` into `["Blog"]` and `Post`
    pub fn parse(entity: &'a str) -> Self {
        let mut parts: Vec<&str> = entity
            .trim_matches('\\')
            .split('\\')
            .filter(|part| !part.is_empty())
            .collect();
        let class = parts.pop().unwrap_or_default();
        Self { parts, class }
    }

    /// Namespace parts joined with backslashes, empty at the top level
    pub fn namespace(&self) -> String {
        self.parts.join("\\")
    }
}

/// Where and under which names a form class will be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPlan {
    pub class_name: String,
    pub class_path: PathBuf,
    pub fqcn: String,
    pub form_type_name: String,
}

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedForm {
    pub class_name: String,
    pub class_path: PathBuf,
    pub form_type_name: String,
}

#[derive(Debug, Serialize)]
struct RenderedField<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    field_type: &'a str,
    required: bool,
    label: String,
}

#[derive(Debug, Serialize)]
struct FormTypeContext<'a> {
    fields: Vec<RenderedField<'a>>,
    namespace: &'a str,
    entity_namespace: String,
    entity_class: &'a str,
    bundle: &'a str,
    form_class: &'a str,
    form_type_name: &'a str,
}

/// Default form type name for a class generated from `entity`
///
/// The bundle namespace with `\` replaced by `_`, the entity namespace
/// parts, and the class name, joined by `_` and lowercased.
pub fn default_form_name(bundle: &Bundle, entity: &str, class_name: &str) -> String {
    let entity = EntityName::parse(entity);
    let mut name = bundle.namespace.replace('\\', "_");
    if !entity.parts.is_empty() {
        name.push('_');
        name.push_str(&entity.parts.join("_"));
    }
    name.push('_');
    name.push_str(class_name);
    name.to_ascii_lowercase()
}

/// Generates form type classes
#[derive(Debug, Clone, Default)]
pub struct FormGenerator {
    labels: LabelSettings,
    skeleton_dirs: Vec<PathBuf>,
}

impl FormGenerator {
    pub fn new(labels: LabelSettings) -> Self {
        Self {
            labels,
            skeleton_dirs: Vec::new(),
        }
    }

    /// Generator using the label settings and skeleton directories of `config`
    pub fn from_config(config: &FormsmithConfig) -> Self {
        Self::new(LabelSettings {
            strategy: config.label_strategy,
            context: config.label_context.clone(),
            field_type: config.label_field_type.clone(),
        })
        .with_skeleton_dirs(config.skeleton_dirs.clone())
    }

    /// Project-wide skeleton override directories, highest priority first
    pub fn with_skeleton_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.skeleton_dirs = dirs;
        self
    }

    /// Compute class name, path and form type name without touching disk
    pub fn plan(
        &self,
        bundle: &Bundle,
        entity: &str,
        form_class: Option<&str>,
        form_name: Option<&str>,
    ) -> FormPlan {
        let name = EntityName::parse(entity);
        let class_name = format!("{}{}", form_class.unwrap_or(name.class), FORM_CLASS_SUFFIX);
        let class_path = Self::class_path(bundle, entity, &class_name);

        let mut fqcn = format!("{}\\Form\\", bundle.namespace);
        for part in &name.parts {
            fqcn.push_str(part);
            fqcn.push('\\');
        }
        fqcn.push_str(&class_name);

        let form_type_name = match form_name {
            Some(form_name) if !form_name.is_empty() => form_name.to_string(),
            _ => default_form_name(bundle, entity, &class_name),
        };

        FormPlan {
            class_name,
            class_path,
            fqcn,
            form_type_name,
        }
    }

    /// File holding `class_name` for a form generated from `entity`
    pub fn class_path(bundle: &Bundle, entity: &str, class_name: &str) -> PathBuf {
        let name = EntityName::parse(entity);
        let mut path = bundle.form_dir();
        for part in &name.parts {
            path.push(part);
        }
        path.push(format!("{}.php", class_name));
        path
    }

    /// Whether a form class for `entity` already exists on disk
    pub fn class_exists(bundle: &Bundle, entity: &str, class_name: &str) -> bool {
        Self::class_path(bundle, entity, class_name).exists()
    }

    /// Label for a single field
    pub fn label(&self, field: &str) -> String {
        self.labels.label(field)
    }

    /// Generate the form type class for `entity`
    ///
    /// `form_class` is the class name without its `Type` suffix and defaults
    /// to the entity class; `form_name` defaults to [`default_form_name`].
    pub fn generate(
        &self,
        bundle: &Bundle,
        entity: &str,
        fields: &[FormField],
        form_class: Option<&str>,
        form_name: Option<&str>,
    ) -> Result<GeneratedForm> {
        let plan = self.plan(bundle, entity, form_class, form_name);
        if plan.class_path.exists() {
            return Err(GeneratorError::ClassExists {
                class: plan.class_name,
                path: plan.class_path,
            });
        }

        let name = EntityName::parse(entity);
        let context = FormTypeContext {
            fields: fields
                .iter()
                .map(|field| RenderedField {
                    name: &field.name,
                    field_type: &field.field_type,
                    required: field.required,
                    label: self.label(&field.name),
                })
                .collect(),
            namespace: &bundle.namespace,
            entity_namespace: name.namespace(),
            entity_class: name.class,
            bundle: &bundle.name,
            form_class: &plan.class_name,
            form_type_name: &plan.form_type_name,
        };

        debug!(
            "Generating {} with {} field(s) using '{}' labels",
            plan.fqcn,
            fields.len(),
            self.labels.strategy
        );

        let loader = SkeletonLoader::with_dirs(self.skeleton_dirs_for(bundle));
        let engine = TemplateEngine::with_loader(loader)?;
        engine.render_file(FORM_TYPE_SKELETON, &plan.class_path, &context)?;

        info!("Generated form class {}", plan.fqcn);
        Ok(GeneratedForm {
            class_name: plan.class_name,
            class_path: plan.class_path,
            form_type_name: plan.form_type_name,
        })
    }

    /// Skeleton search path for `bundle`, highest priority first
    pub fn skeleton_dirs_for(&self, bundle: &Bundle) -> Vec<PathBuf> {
        let mut dirs = vec![bundle.skeleton_dir()];
        dirs.extend(self.skeleton_dirs.iter().cloned());
        dirs.retain(|dir| dir.is_dir());
        dirs
    }
}
