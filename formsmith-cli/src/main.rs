//! formsmith CLI - form type class generator.
//!
//! Commands:
//! - `formsmith generate form`: Generate a form type class for an entity
//! - `formsmith generate profile-form`: Generate the `Profile` form class
//! - `formsmith fields <Bundle:Entity>`: List form-eligible entity fields
//! - `formsmith label <label>`: Print the label the active strategy produces
//! - `formsmith strategies`: List label strategies
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error or aborted

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use formsmith_cli::commands::generate::{GenerateCommand, GenerateOptions};
use formsmith_cli::commands::{fields, label};
use formsmith_cli::dialog::{is_interactive, TerminalDialog};
use formsmith_cli::{load_config, Cli, CliResult, Commands, GenerateCommands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new(
            "formsmith=debug,formsmith_cli=debug,formsmith_config=debug,formsmith_templating=debug",
        )
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = dispatch_command(cli);
    std::process::exit(exit_code);
}

/// Dispatch a parsed CLI to the appropriate command handler.
fn dispatch_command(cli: Cli) -> i32 {
    match &cli.command {
        Commands::Generate { command } => {
            let (options, no_interaction) = match command {
                GenerateCommands::Form(args) => {
                    (GenerateOptions::from(args.clone()), args.no_interaction)
                }
                GenerateCommands::ProfileForm(args) => {
                    (GenerateOptions::from(args.clone()), args.no_interaction)
                }
            };
            result_to_exit(run_generate(&cli, options, no_interaction))
        }
        Commands::Fields { entity } => result_to_exit(
            load_config(&cli, None).and_then(|config| fields::run_fields(&config, entity)),
        ),
        Commands::Label {
            label: text,
            context,
            field_type,
            strategy,
        } => result_to_exit(load_config(&cli, strategy.as_deref()).map(|config| {
            label::run_label(&config, text, context.as_deref(), field_type.as_deref())
        })),
        Commands::Strategies => result_to_exit(run_strategies(&cli)),
    }
}

fn run_generate(cli: &Cli, options: GenerateOptions, no_interaction: bool) -> CliResult<()> {
    let config = load_config(cli, None)?;
    let command = GenerateCommand::new(&config);

    let generated = if is_interactive(no_interaction) {
        let mut dialog = TerminalDialog::new();
        command.run_interactive(options, &mut dialog)?
    } else {
        command.run(options)?
    };

    println!("Generating the form code: {}", "OK".green());
    let path = generated.class_path.display();
    println!("  {} {}", "created".green(), path);
    println!("  form type name: {}", generated.form_type_name);
    Ok(())
}

fn run_strategies(cli: &Cli) -> CliResult<()> {
    let config = load_config(cli, None)?;
    label::run_strategies(&config);
    Ok(())
}

/// Convert a `Result<(), E: Display>` to an exit code.
fn result_to_exit<E: std::fmt::Display>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
