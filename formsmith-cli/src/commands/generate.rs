//! `formsmith generate form` and `formsmith generate profile-form`

use crate::cli::{GenerateFormArgs, GenerateProfileFormArgs};
use crate::dialog::Dialog;
use crate::error::{CliError, CliResult};
use colored::Colorize;
use formsmith::generator::EntityName;
use formsmith::{
    default_form_name, is_form_type, parse_shortcut_notation, validate_class_name,
    validate_entity_keyword, validate_form_name, Bundle, BundleRegistry, EntityMetadata,
    FieldSelection, FieldSpec, FormField, FormGenerator, GeneratedForm, GeneratorError,
    MappingFileProvider, MetadataProvider, PROFILE_FORM_CLASS, PROFILE_FORM_NAME,
};
use formsmith_config::FormsmithConfig;
use tracing::{debug, warn};

/// Which form the command generates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Class and form name chosen by the user
    Standard,
    /// Class `Profile`, form name `user_profile`
    Profile,
}

/// Options gathered from the command line
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub kind: FormKind,
    pub entity: Option<String>,
    pub class: Option<String>,
    pub name: Option<String>,
    pub fields: Vec<String>,
}

impl From<GenerateFormArgs> for GenerateOptions {
    fn from(args: GenerateFormArgs) -> Self {
        Self {
            kind: FormKind::Standard,
            entity: args.entity,
            class: args.class,
            name: args.name,
            fields: args.fields,
        }
    }
}

impl From<GenerateProfileFormArgs> for GenerateOptions {
    fn from(args: GenerateProfileFormArgs) -> Self {
        Self {
            kind: FormKind::Profile,
            entity: args.entity,
            class: None,
            name: None,
            fields: args.fields,
        }
    }
}

/// Everything needed to render one form class
#[derive(Debug)]
struct Resolved {
    bundle: Bundle,
    entity: String,
    class: Option<String>,
    name: Option<String>,
    fields: Vec<FormField>,
}

/// Bundle, entity class and metadata picked by the user
type EntityChoice = (Bundle, String, EntityMetadata);

/// Runs form generation against a loaded configuration
pub struct GenerateCommand {
    bundles: BundleRegistry,
    metadata: Box<dyn MetadataProvider>,
    generator: FormGenerator,
}

impl GenerateCommand {
    pub fn new(config: &FormsmithConfig) -> Self {
        Self {
            bundles: BundleRegistry::from_config(config),
            metadata: Box::new(MappingFileProvider::new()),
            generator: FormGenerator::from_config(config),
        }
    }

    /// Generate from command-line options only
    pub fn run(&self, options: GenerateOptions) -> CliResult<GeneratedForm> {
        let resolved = self.resolve(options)?;
        self.generate(resolved)
    }

    /// Ask for anything missing, confirm, then generate
    pub fn run_interactive(
        &self,
        options: GenerateOptions,
        dialog: &mut dyn Dialog,
    ) -> CliResult<GeneratedForm> {
        let resolved = self.interact(options, dialog)?;
        if !dialog.confirm("Do you confirm generation", true)? {
            dialog.write_error("Command aborted");
            return Err(CliError::Aborted);
        }
        self.generate(resolved)
    }

    fn resolve(&self, options: GenerateOptions) -> CliResult<Resolved> {
        let shortcut = options.entity.ok_or(CliError::MissingOption("--entity"))?;
        let (bundle, entity) = parse_shortcut_notation(&shortcut)?;
        validate_entity_keyword(&entity)?;
        let bundle = self.bundles.get(&bundle)?.clone();
        let metadata = self.metadata.load(&bundle, &entity)?;

        let (class, name) = match options.kind {
            FormKind::Profile => (
                Some(PROFILE_FORM_CLASS.to_string()),
                Some(PROFILE_FORM_NAME.to_string()),
            ),
            FormKind::Standard => {
                let class = options.class.as_deref().map(validate_class_name);
                let name = options.name.as_deref().map(validate_form_name);
                (class.transpose()?, name.transpose()?)
            }
        };

        let mut selection = FieldSelection::new(&metadata)?;
        for spec in &options.fields {
            selection.push_spec(&spec.parse::<FieldSpec>()?)?;
        }
        if selection.is_empty() {
            warn!("No fields selected, generating an empty form");
        }

        Ok(Resolved {
            bundle,
            entity,
            class,
            name,
            fields: selection.into_fields(),
        })
    }

    fn interact(&self, options: GenerateOptions, dialog: &mut dyn Dialog) -> CliResult<Resolved> {
        dialog.write_section("Welcome to the form generator");
        dialog.write_line(
            "This command helps you generate form classes for your entities.",
        );
        dialog.write_line("");
        dialog.write_line(
            "First, you need to give the entity name you want to generate a form for.",
        );
        dialog.write_line(&format!(
            "You must use the shortcut notation like {}.",
            "AcmeBlogBundle:Post".yellow()
        ));
        dialog.write_line("");

        let (bundle, entity, metadata) = self.ask_entity(options.entity.as_deref(), dialog)?;

        let class = match options.kind {
            FormKind::Profile => PROFILE_FORM_CLASS.to_string(),
            FormKind::Standard => {
                self.ask_class(&bundle, &entity, options.class.as_deref(), dialog)?
            }
        };

        let name = match options.kind {
            FormKind::Profile => PROFILE_FORM_NAME.to_string(),
            FormKind::Standard => {
                let class_name = format!("{}Type", class);
                let default = match &options.name {
                    Some(name) => name.clone(),
                    None => default_form_name(&bundle, &entity, &class_name),
                };
                ask_until_valid(dialog, "Form name", Some(&default), |answer| {
                    Ok(validate_form_name(answer)?)
                })?
            }
        };

        let fields = ask_fields(&metadata, &options.fields, dialog)?;

        let plan = self
            .generator
            .plan(&bundle, &entity, Some(&class), Some(&name));
        dialog.write_section("Summary before generation");
        dialog.write_line(&format!(
            "You are going to generate a form class \"{}\" with {} field(s)",
            plan.fqcn.green(),
            fields.len()
        ));
        dialog.write_line("");

        Ok(Resolved {
            bundle,
            entity,
            class: Some(class),
            name: Some(name),
            fields,
        })
    }

    fn ask_entity(
        &self,
        default: Option<&str>,
        dialog: &mut dyn Dialog,
    ) -> CliResult<EntityChoice> {
        loop {
            let answer = dialog.ask("The Entity shortcut name", default)?;
            match self.lookup_entity(&answer) {
                Ok(found) => return Ok(found),
                Err(err @ GeneratorError::ReservedKeyword(_))
                | Err(err @ GeneratorError::InvalidEntityName(_))
                | Err(err @ GeneratorError::UnknownBundle { .. })
                | Err(err @ GeneratorError::EntityNotFound { .. }) => {
                    dialog.write_error(&err.to_string());
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn lookup_entity(&self, shortcut: &str) -> formsmith::Result<EntityChoice> {
        let (bundle, entity) = parse_shortcut_notation(shortcut)?;
        validate_entity_keyword(&entity)?;
        let bundle = self.bundles.get(&bundle)?.clone();
        let metadata = self.metadata.load(&bundle, &entity)?;
        debug!("Selected entity {} in {}", entity, bundle.name);
        Ok((bundle, entity, metadata))
    }

    fn ask_class(
        &self,
        bundle: &Bundle,
        entity: &str,
        default: Option<&str>,
        dialog: &mut dyn Dialog,
    ) -> CliResult<String> {
        dialog.write_line("");
        dialog.write_line(
            "Enter the class name for the new form (do not include the suffix \"Type\").",
        );
        dialog.write_line("");

        let entity_class = EntityName::parse(entity).class;
        let default = default.unwrap_or(entity_class).to_string();
        ask_until_valid(dialog, "Form class", Some(&default), |answer| {
            let class = validate_class_name(answer)?;
            let class_name = format!("{}Type", class);
            if FormGenerator::class_exists(bundle, entity, &class_name) {
                return Err(GeneratorError::ClassExists {
                    path: FormGenerator::class_path(bundle, entity, &class_name),
                    class: class_name,
                }
                .into());
            }
            Ok(class)
        })
    }

    fn generate(&self, resolved: Resolved) -> CliResult<GeneratedForm> {
        let generated = self.generator.generate(
            &resolved.bundle,
            &resolved.entity,
            &resolved.fields,
            resolved.class.as_deref(),
            resolved.name.as_deref(),
        )?;
        Ok(generated)
    }
}

/// Ask `prompt` until `validate` accepts the answer
///
/// Validation errors are shown and the question is repeated; dialog
/// failures end the loop.
fn ask_until_valid<F>(
    dialog: &mut dyn Dialog,
    prompt: &str,
    default: Option<&str>,
    validate: F,
) -> CliResult<String>
where
    F: Fn(&str) -> CliResult<String>,
{
    loop {
        let answer = dialog.ask(prompt, default)?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(CliError::Generator(err)) => dialog.write_error(&err.to_string()),
            Err(err) => return Err(err),
        }
    }
}

fn ask_fields(
    metadata: &EntityMetadata,
    preset: &[String],
    dialog: &mut dyn Dialog,
) -> CliResult<Vec<FormField>> {
    let mut selection = FieldSelection::new(metadata)?;
    for spec in preset {
        if let Err(err) = spec
            .parse::<FieldSpec>()
            .and_then(|spec| selection.push_spec(&spec))
        {
            dialog.write_error(&err.to_string());
        }
    }

    dialog.write_line("");
    dialog.write_line("Add the entity fields to include in the new form.");
    dialog.write_line("");
    dialog.write_line(&format!(
        "{} {}.",
        "Entity fields:".green(),
        selection.available().join(", ").yellow()
    ));

    loop {
        dialog.write_line("");
        let prompt = "New field (press <return> to stop adding fields)";
        let name = dialog.ask(prompt, None)?;
        if name.is_empty() {
            break;
        }
        if let Err(err) = selection.check_name(&name) {
            dialog.write_error(&err.to_string());
            continue;
        }

        let guessed = selection.default_type(&name);
        let field_type = ask_until_valid(dialog, "Field type", Some(guessed), |answer| {
            if is_form_type(answer) {
                Ok(answer.to_string())
            } else {
                Err(GeneratorError::InvalidFormType(answer.to_string()).into())
            }
        })?;
        let required = dialog.confirm("Required", true)?;

        selection.push(FormField::new(name, field_type, required))?;
    }

    Ok(selection.into_fields())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::scripted::ScriptedDialog;
    use formsmith_config::BundleConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const POST_MAPPING: &str = r#"
Acme\BlogBundle\Entity\Post:
    type: entity
    id:
        id:
            type: integer
            generator: { strategy: AUTO }
    fields:
        title:
            type: string
        body:
            type: text
        publishedAt:
            type: datetime
"#;

    fn config(root: &Path) -> FormsmithConfig {
        let bundle_path = root.join("src/Acme/BlogBundle");
        let mapping_dir = bundle_path.join("Resources/config/doctrine");
        fs::create_dir_all(&mapping_dir).unwrap();
        fs::write(mapping_dir.join("Post.orm.yml"), POST_MAPPING).unwrap();

        let mut config = FormsmithConfig::default();
        config.bundles.insert(
            "AcmeBlogBundle".into(),
            BundleConfig {
                namespace: "Acme\\BlogBundle".into(),
                path: bundle_path,
            },
        );
        config
    }

    fn options(entity: Option<&str>, fields: &[&str]) -> GenerateOptions {
        GenerateOptions {
            kind: FormKind::Standard,
            entity: entity.map(str::to_string),
            class: None,
            name: None,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_run_non_interactive() {
        let dir = TempDir::new().unwrap();
        let command = GenerateCommand::new(&config(dir.path()));

        let generated = command
            .run(options(Some("AcmeBlogBundle:Post"), &["title", "body::optional"]))
            .unwrap();
        assert_eq!(generated.class_name, "PostType");

        let php = fs::read_to_string(generated.class_path).unwrap();
        assert!(php.contains("->add('body', 'textarea', array("));
        assert!(php.contains("'label' => 'form.label_body',"));
    }

    #[test]
    fn test_run_requires_entity() {
        let dir = TempDir::new().unwrap();
        let command = GenerateCommand::new(&config(dir.path()));
        assert!(matches!(
            command.run(options(None, &[])),
            Err(CliError::MissingOption("--entity"))
        ));
    }

    #[test]
    fn test_run_rejects_unknown_field() {
        let dir = TempDir::new().unwrap();
        let command = GenerateCommand::new(&config(dir.path()));
        assert!(matches!(
            command.run(options(Some("AcmeBlogBundle:Post"), &["nickname"])),
            Err(CliError::Generator(GeneratorError::InvalidField(_)))
        ));
    }

    #[test]
    fn test_profile_form_ignores_class_and_name() {
        let dir = TempDir::new().unwrap();
        let command = GenerateCommand::new(&config(dir.path()));
        let generated = command
            .run(GenerateOptions {
                kind: FormKind::Profile,
                ..options(Some("AcmeBlogBundle:Post"), &["title"])
            })
            .unwrap();
        assert_eq!(generated.class_name, "ProfileType");
        assert_eq!(generated.form_type_name, "user_profile");
    }

    #[test]
    fn test_interactive_flow() {
        let dir = TempDir::new().unwrap();
        let command = GenerateCommand::new(&config(dir.path()));

        let mut dialog = ScriptedDialog::new(&[
            // reserved, asked again
            "AcmeBlogBundle:Order",
            // unknown bundle, asked again
            "FooBundle:Post",
            "AcmeBlogBundle:Post",
            // default class and form name
            "",
            "",
            // not a field
            "nickname",
            "title",
            // guessed type, required
            "",
            "",
            // duplicate
            "title",
            "publishedAt",
            // not a form type
            "wysiwyg",
            "date",
            "n",
            // stop adding fields, confirm generation
            "",
            "y",
        ]);

        let generated = command
            .run_interactive(options(None, &[]), &mut dialog)
            .unwrap();
        assert!(dialog.is_exhausted());
        assert_eq!(dialog.errors.len(), 5);
        assert_eq!(generated.form_type_name, "acme_blogbundle_posttype");

        let php = fs::read_to_string(generated.class_path).unwrap();
        assert!(php.contains("->add('title', 'text', array("));
        assert!(php.contains("->add('publishedAt', 'date', array("));
        assert!(php.contains("'required' => false,"));
        assert!(dialog
            .output
            .iter()
            .any(|line| line.contains("Acme\\BlogBundle\\Form\\PostType")));
    }

    #[test]
    fn test_interactive_existing_class_is_asked_again() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path());
        let command = GenerateCommand::new(&config);
        command
            .run(options(Some("AcmeBlogBundle:Post"), &[]))
            .unwrap();

        // PostType exists, so the default class is refused
        let mut dialog = ScriptedDialog::new(&["AcmeBlogBundle:Post", "", "Admin", "", "", "y"]);
        let generated = command
            .run_interactive(options(None, &[]), &mut dialog)
            .unwrap();
        assert_eq!(generated.class_name, "AdminType");
        assert_eq!(generated.form_type_name, "acme_blogbundle_admintype");
        assert!(dialog.errors[0].starts_with("Class \"PostType\" already exists."));
    }

    #[test]
    fn test_interactive_abort() {
        let dir = TempDir::new().unwrap();
        let command = GenerateCommand::new(&config(dir.path()));
        let mut dialog = ScriptedDialog::new(&["AcmeBlogBundle:Post", "", "", "", "n"]);

        assert!(matches!(
            command.run_interactive(options(None, &[]), &mut dialog),
            Err(CliError::Aborted)
        ));
        assert!(!dir
            .path()
            .join("src/Acme/BlogBundle/Form/PostType.php")
            .exists());
    }
}
