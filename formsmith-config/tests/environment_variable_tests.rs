use formsmith_config::{ConfigProvider, ConfigurationError, FileDiscovery};
use formsmith_labels::LabelStrategy;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

struct EnvGuard {
    keys: Vec<&'static str>,
}

impl EnvGuard {
    fn set(pairs: &[(&'static str, &str)]) -> Self {
        for (key, value) in pairs {
            std::env::set_var(key, value);
        }
        Self {
            keys: pairs.iter().map(|(key, _)| *key).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            std::env::remove_var(key);
        }
    }
}

fn provider(project: &TempDir, global: &TempDir) -> ConfigProvider {
    ConfigProvider::new().with_discovery(FileDiscovery::with_directories(
        Some(project.path().to_path_buf()),
        Some(global.path().to_path_buf()),
    ))
}

#[test]
#[serial]
fn env_var_selects_strategy() {
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    let _guard = EnvGuard::set(&[("FORMSMITH_LABEL_STRATEGY", "form_component")]);

    let config = provider(&project, &global).load().unwrap();
    assert_eq!(config.label_strategy, LabelStrategy::FormComponent);
}

#[test]
#[serial]
fn env_var_overrides_project_file() {
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    fs::write(
        project.path().join("formsmith.toml"),
        "label_strategy = \"native\"\nlabel_context = \"admin\"\n",
    )
    .unwrap();
    let _guard = EnvGuard::set(&[("FORMSMITH_LABEL_STRATEGY", "bc")]);

    let config = provider(&project, &global).load().unwrap();
    assert_eq!(config.label_strategy, LabelStrategy::Bc);
    assert_eq!(config.label_context, "admin");
}

#[test]
#[serial]
fn cli_override_beats_env_var() {
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    let _guard = EnvGuard::set(&[("FORMSMITH_LABEL_STRATEGY", "bc")]);

    let config = provider(&project, &global)
        .with_label_strategy(Some("native".to_string()))
        .load()
        .unwrap();
    assert_eq!(config.label_strategy, LabelStrategy::Native);
}

#[test]
#[serial]
fn bogus_env_var_fails_before_anything_else() {
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    let _guard = EnvGuard::set(&[("FORMSMITH_LABEL_STRATEGY", "bogus")]);

    let err = provider(&project, &global).load().unwrap_err();
    match err {
        ConfigurationError::InvalidLabelStrategy { value, allowed } => {
            assert_eq!(value, "bogus");
            assert_eq!(allowed.len(), 5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn explicit_file_overrides_discovered_files() {
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    fs::write(
        project.path().join("formsmith.toml"),
        "label_strategy = \"native\"\n",
    )
    .unwrap();
    let explicit = project.path().join("ci.yaml");
    fs::write(&explicit, "label_strategy: noop\n").unwrap();

    let config = provider(&project, &global)
        .with_file(&explicit)
        .load()
        .unwrap();
    assert_eq!(config.label_strategy, LabelStrategy::Noop);
}

#[test]
#[serial]
fn numeric_env_values_are_kept_as_strings() {
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    let _guard = EnvGuard::set(&[
        ("FORMSMITH_LABEL_FIELD_TYPE", "2"),
        ("FORMSMITH_LABEL_CONTEXT", "true"),
    ]);

    let config = provider(&project, &global).load().unwrap();
    assert_eq!(config.label_field_type, "2");
    assert_eq!(config.label_context, "true");
    assert_eq!(config.label_strategy, LabelStrategy::Underscore);
}
