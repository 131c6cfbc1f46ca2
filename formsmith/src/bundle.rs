//! Bundles of the target project

use crate::error::{GeneratorError, Result};
use formsmith_config::FormsmithConfig;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Directory, relative to a bundle, holding that bundle's skeleton overrides
pub const BUNDLE_SKELETON_DIR: &str = "Resources/FormsmithBundle/skeleton";

/// A named package of the target project that owns entities and forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub name: String,
    pub namespace: String,
    pub path: PathBuf,
}

impl Bundle {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Root directory for generated form classes
    pub fn form_dir(&self) -> PathBuf {
        self.path.join("Form")
    }

    /// This bundle's skeleton override directory
    pub fn skeleton_dir(&self) -> PathBuf {
        self.path.join(BUNDLE_SKELETON_DIR)
    }
}

/// Bundles known to the current project
#[derive(Debug, Clone, Default)]
pub struct BundleRegistry {
    bundles: BTreeMap<String, Bundle>,
}

impl BundleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the `bundles` configuration table
    pub fn from_config(config: &FormsmithConfig) -> Self {
        let mut registry = Self::new();
        for (name, bundle) in &config.bundles {
            registry.register(Bundle {
                name: name.clone(),
                namespace: bundle.namespace.clone(),
                path: bundle.path.clone(),
            });
        }
        registry
    }

    pub fn register(&mut self, bundle: Bundle) {
        self.bundles.insert(bundle.name.clone(), bundle);
    }

    /// Look up a bundle, failing with the list of known names
    pub fn get(&self, name: &str) -> Result<&Bundle> {
        self.bundles
            .get(name)
            .ok_or_else(|| GeneratorError::UnknownBundle {
                name: name.to_string(),
                available: self.names(),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.bundles.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_config::BundleConfig;

    #[test]
    fn test_from_config() {
        let mut config = FormsmithConfig::default();
        config.bundles.insert(
            "AcmeBlogBundle".into(),
            BundleConfig {
                namespace: "Acme\\BlogBundle".into(),
                path: PathBuf::from("src/Acme/BlogBundle"),
            },
        );

        let registry = BundleRegistry::from_config(&config);
        let bundle = registry.get("AcmeBlogBundle").unwrap();
        assert_eq!(bundle.namespace, "Acme\\BlogBundle");
        assert_eq!(bundle.form_dir(), PathBuf::from("src/Acme/BlogBundle/Form"));
        assert_eq!(
            bundle.skeleton_dir(),
            PathBuf::from("src/Acme/BlogBundle/Resources/FormsmithBundle/skeleton")
        );
    }

    #[test]
    fn test_unknown_bundle() {
        let mut registry = BundleRegistry::new();
        registry.register(Bundle::new("AcmeUserBundle", "Acme\\UserBundle", "src"));
        match registry.get("FooBundle") {
            Err(GeneratorError::UnknownBundle { name, available }) => {
                assert_eq!(name, "FooBundle");
                assert_eq!(available, vec!["AcmeUserBundle".to_string()]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
