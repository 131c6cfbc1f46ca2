//! CLI definition for the formsmith command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// formsmith - form type class generator
///
/// Generates PHP form type classes from entity mapping files, labelling every
/// field with the configured label strategy.
#[derive(Parser, Debug)]
#[command(name = "formsmith")]
#[command(version)]
#[command(about = "Generate form type classes from entity mappings")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Label strategy to use instead of the configured one
    /// (bc, underscore, native, noop, form_component)
    #[arg(long, global = true, value_name = "STRATEGY")]
    pub label_strategy: Option<String>,

    /// Extra configuration file loaded over the discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate code
    Generate {
        #[command(subcommand)]
        command: GenerateCommands,
    },
    /// List the fields of an entity that can appear on a form
    Fields {
        /// Entity in shortcut notation, e.g. AcmeBlogBundle:Post
        entity: String,
    },
    /// Print the label a strategy produces
    Label {
        /// Field name to translate
        label: String,
        /// Label context (defaults to the configured label_context)
        #[arg(long)]
        context: Option<String>,
        /// Field type (defaults to the configured label_field_type)
        #[arg(long)]
        field_type: Option<String>,
        /// Strategy to use for this label only
        #[arg(long)]
        strategy: Option<String>,
    },
    /// List label strategies, marking the active one
    Strategies,
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommands {
    /// Generate a form type class based on an entity
    Form(GenerateFormArgs),
    /// Generate the user profile form class based on an entity
    ProfileForm(GenerateProfileFormArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateFormArgs {
    /// Entity in shortcut notation, e.g. AcmeBlogBundle:Post
    #[arg(long)]
    pub entity: Option<String>,

    /// Class of the new form, without the "Type" suffix
    #[arg(long)]
    pub class: Option<String>,

    /// Name of the new form type
    #[arg(long)]
    pub name: Option<String>,

    /// Field to add, repeatable
    #[arg(long = "field", value_name = "NAME[:TYPE[:required|optional]]")]
    pub fields: Vec<String>,

    /// Do not ask any interactive question
    #[arg(short = 'n', long)]
    pub no_interaction: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateProfileFormArgs {
    /// Entity in shortcut notation, e.g. AcmeUserBundle:User
    #[arg(long)]
    pub entity: Option<String>,

    /// Field to add, repeatable
    #[arg(long = "field", value_name = "NAME[:TYPE[:required|optional]]")]
    pub fields: Vec<String>,

    /// Do not ask any interactive question
    #[arg(short = 'n', long)]
    pub no_interaction: bool,
}
