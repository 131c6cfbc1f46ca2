//! Interactive question helpers
//!
//! Commands talk to the user through [`Dialog`] so that the question flow can
//! be driven by a script in tests. [`TerminalDialog`] is the dialoguer-backed
//! implementation used by the binary.

use crate::error::CliResult;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::io::{self, IsTerminal};

/// Question and answer channel with the user
pub trait Dialog {
    /// Ask for a line of text; an empty answer selects `default` when given
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> CliResult<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool>;

    /// Print a line of output
    fn write_line(&mut self, line: &str);

    /// Print a highlighted section title
    fn write_section(&mut self, title: &str) {
        self.write_line("");
        self.write_line(title);
        self.write_line("");
    }

    /// Print a validation error before asking again
    fn write_error(&mut self, message: &str);
}

/// Whether questions may be asked on this terminal
pub fn is_interactive(no_interaction: bool) -> bool {
    !no_interaction && io::stdin().is_terminal()
}

/// Dialog on the controlling terminal
pub struct TerminalDialog {
    theme: ColorfulTheme,
}

impl TerminalDialog {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialog for TerminalDialog {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> CliResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn write_section(&mut self, title: &str) {
        println!();
        println!("{}", format!("  {}  ", title).white().on_blue().bold());
        println!();
    }

    fn write_error(&mut self, message: &str) {
        println!("{}", message.white().on_red());
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Dialog answering from a fixed list and recording everything printed
    #[derive(Debug, Default)]
    pub struct ScriptedDialog {
        answers: VecDeque<String>,
        pub output: Vec<String>,
        pub errors: Vec<String>,
    }

    impl ScriptedDialog {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Self::default()
            }
        }

        fn next(&mut self, prompt: &str) -> String {
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted answer left for '{}'", prompt))
        }

        pub fn is_exhausted(&self) -> bool {
            self.answers.is_empty()
        }
    }

    impl Dialog for ScriptedDialog {
        fn ask(&mut self, prompt: &str, default: Option<&str>) -> CliResult<String> {
            let answer = self.next(prompt);
            if answer.is_empty() {
                return Ok(default.unwrap_or_default().to_string());
            }
            Ok(answer)
        }

        fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool> {
            Ok(match self.next(prompt).as_str() {
                "" => default,
                answer => answer.starts_with('y'),
            })
        }

        fn write_line(&mut self, line: &str) {
            self.output.push(line.to_string());
        }

        fn write_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }
}
