//! Label translation strategies
//!
//! A label strategy turns a raw field identifier (a column name such as
//! `first_name` or `createdAt`) into the string a generated template displays
//! for that field. Five strategies exist; one is chosen per process by
//! configuration and passed explicitly to whatever renders labels.
//!
//! | key              | `("firstName", "form", "label")` |
//! |------------------|----------------------------------|
//! | `noop`           | `firstName`                      |
//! | `form_component` | `Firstname`                      |
//! | `native`         | `First Name`                     |
//! | `underscore`     | `form.label_first_name`          |
//! | `bc`             | `Firstname`                      |
//!
//! ```
//! use formsmith_labels::{LabelStrategy, LabelTranslator};
//!
//! let strategy: LabelStrategy = "native".parse().unwrap();
//! assert_eq!(strategy.get_label("createdAt", "", ""), "Created At");
//! ```
//!
//! Every strategy is a total, pure function. Case changes only touch ASCII
//! letters; any other character is passed through as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Context value that switches [`LabelStrategy::Bc`] to its legacy format.
pub const BREADCRUMB_CONTEXT: &str = "breadcrumb";

/// Contract shared by every label strategy.
pub trait LabelTranslator: Send + Sync {
    /// Compute the label for `label`.
    ///
    /// `context` and `field_type` are empty strings when the caller has
    /// nothing to qualify the label with.
    fn get_label(&self, label: &str, context: &str, field_type: &str) -> String;

    /// Shorthand for [`get_label`](Self::get_label) with empty context and type.
    fn label(&self, label: &str) -> String {
        self.get_label(label, "", "")
    }
}

/// The closed set of label strategies, keyed by their configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStrategy {
    /// Lowercased form for breadcrumbs, capitalized everywhere else.
    Bc,
    /// Translation-key style `context.type_snake_label`.
    #[default]
    Underscore,
    /// Humanized title case.
    Native,
    /// The raw label.
    Noop,
    /// First letter uppercase, the rest lowercase.
    FormComponent,
}

impl LabelStrategy {
    /// Every strategy, in the order they are documented to users.
    pub const ALL: [LabelStrategy; 5] = [
        LabelStrategy::Bc,
        LabelStrategy::Underscore,
        LabelStrategy::Native,
        LabelStrategy::Noop,
        LabelStrategy::FormComponent,
    ];

    /// The configuration key naming this strategy.
    pub fn key(self) -> &'static str {
        match self {
            LabelStrategy::Bc => "bc",
            LabelStrategy::Underscore => "underscore",
            LabelStrategy::Native => "native",
            LabelStrategy::Noop => "noop",
            LabelStrategy::FormComponent => "form_component",
        }
    }

    /// All valid configuration keys.
    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.key()).collect()
    }
}

impl LabelTranslator for LabelStrategy {
    fn get_label(&self, label: &str, context: &str, field_type: &str) -> String {
        match self {
            LabelStrategy::Bc => bc(label, context, field_type),
            LabelStrategy::Underscore => underscore(label, context, field_type),
            LabelStrategy::Native => native(label),
            LabelStrategy::Noop => label.to_string(),
            LabelStrategy::FormComponent => form_component(label),
        }
    }
}

impl fmt::Display for LabelStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name one of the five strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown label strategy '{value}' (expected one of: {})",
    LabelStrategy::keys().join(", ")
)]
pub struct UnknownLabelStrategy {
    pub value: String,
}

impl FromStr for LabelStrategy {
    type Err = UnknownLabelStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.key() == s)
            .ok_or_else(|| UnknownLabelStrategy {
                value: s.to_string(),
            })
    }
}

fn form_component(label: &str) -> String {
    capitalize_first(&label.to_ascii_lowercase())
}

fn native(label: &str) -> String {
    let spaced = label.replace(['_', '.'], " ");
    let split = split_camel_case(&spaced).to_ascii_lowercase();
    let words = capitalize_words(&split.replace('_', " "));
    trim_php_whitespace(&words).to_string()
}

fn underscore(label: &str, context: &str, field_type: &str) -> String {
    let label = split_camel_case(&label.replace('.', "_")).to_ascii_lowercase();
    format!("{}.{}_{}", context, field_type, label)
}

fn bc(label: &str, context: &str, field_type: &str) -> String {
    if context == BREADCRUMB_CONTEXT {
        return format!("{}.{}_{}", context, field_type, label.to_ascii_lowercase());
    }
    form_component(label)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Insert `_` before every uppercase letter that follows a word character.
///
/// The preceding character is always taken from the input, so runs of
/// capitals split on every letter: `"ABC"` becomes `"A_B_C"`.
fn split_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    let mut previous: Option<char> = None;
    for c in input.chars() {
        if c.is_ascii_uppercase() && previous.is_some_and(is_word_char) {
            out.push('_');
        }
        out.push(c);
        previous = Some(c);
    }
    out
}

fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(input.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}

/// Uppercase the first letter after each whitespace run.
fn capitalize_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if at_word_start {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_separator(c);
    }
    out
}

fn trim_php_whitespace(input: &str) -> &str {
    input.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}
