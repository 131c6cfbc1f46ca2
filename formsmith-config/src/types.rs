//! Configuration value types

use crate::error::{ConfigResult, ConfigurationError};
use formsmith_labels::LabelStrategy;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Default for `label_context`
pub const DEFAULT_LABEL_CONTEXT: &str = "form";

/// Default for `label_field_type`
pub const DEFAULT_LABEL_FIELD_TYPE: &str = "label";

/// A bundle of the target project, as declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// PHP namespace of the bundle, e.g. `Acme\BlogBundle`
    pub namespace: String,
    /// Directory of the bundle on disk
    pub path: PathBuf,
}

/// Configuration exactly as merged from all sources, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(
        default = "default_label_strategy",
        deserialize_with = "string_or_scalar"
    )]
    pub label_strategy: String,
    #[serde(
        default = "default_label_context",
        deserialize_with = "string_or_scalar"
    )]
    pub label_context: String,
    #[serde(
        default = "default_label_field_type",
        deserialize_with = "string_or_scalar"
    )]
    pub label_field_type: String,
    #[serde(default)]
    pub skeleton_dirs: Vec<PathBuf>,
    #[serde(default)]
    pub bundles: BTreeMap<String, BundleConfig>,
}

fn default_label_strategy() -> String {
    LabelStrategy::default().key().to_string()
}

fn default_label_context() -> String {
    DEFAULT_LABEL_CONTEXT.to_string()
}

fn default_label_field_type() -> String {
    DEFAULT_LABEL_FIELD_TYPE.to_string()
}

/// Read a string setting, accepting scalars figment typed as numbers or booleans.
///
/// `FORMSMITH_LABEL_FIELD_TYPE=2` reaches serde as an unsigned integer.
fn string_or_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrScalar;

    impl<'de> Visitor<'de> for StringOrScalar {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_char<E: de::Error>(self, value: char) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i128<E: de::Error>(self, value: i128) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u128<E: de::Error>(self, value: u128) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrScalar)
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            label_strategy: default_label_strategy(),
            label_context: default_label_context(),
            label_field_type: default_label_field_type(),
            skeleton_dirs: Vec::new(),
            bundles: BTreeMap::new(),
        }
    }
}

impl RawConfig {
    /// Validate the raw values and produce a typed configuration
    pub fn validate(self) -> ConfigResult<FormsmithConfig> {
        let label_strategy: LabelStrategy = self.label_strategy.parse()?;

        for (name, bundle) in &self.bundles {
            if name.trim().is_empty() {
                return Err(ConfigurationError::invalid_value(
                    "bundles",
                    "bundle names must not be empty",
                ));
            }
            if bundle.namespace.trim().is_empty() {
                return Err(ConfigurationError::invalid_value(
                    format!("bundles.{}.namespace", name),
                    "must not be empty",
                ));
            }
        }

        Ok(FormsmithConfig {
            label_strategy,
            label_context: self.label_context,
            label_field_type: self.label_field_type,
            skeleton_dirs: self.skeleton_dirs,
            bundles: self.bundles,
        })
    }
}

/// Validated configuration, read-only for the rest of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct FormsmithConfig {
    /// Strategy used to label generated form fields
    pub label_strategy: LabelStrategy,
    /// `context` argument passed to the strategy
    pub label_context: String,
    /// `field_type` argument passed to the strategy
    pub label_field_type: String,
    /// Template override directories, highest priority first
    pub skeleton_dirs: Vec<PathBuf>,
    /// Known bundles by name
    pub bundles: BTreeMap<String, BundleConfig>,
}

impl Default for FormsmithConfig {
    fn default() -> Self {
        // The built-in defaults always validate.
        Self {
            label_strategy: LabelStrategy::default(),
            label_context: default_label_context(),
            label_field_type: default_label_field_type(),
            skeleton_dirs: Vec::new(),
            bundles: BTreeMap::new(),
        }
    }
}

impl FormsmithConfig {
    /// Look up a bundle by name
    pub fn bundle(&self, name: &str) -> Option<&BundleConfig> {
        self.bundles.get(name)
    }

    /// Names of all configured bundles
    pub fn bundle_names(&self) -> Vec<&str> {
        self.bundles.keys().map(String::as_str).collect()
    }
}
