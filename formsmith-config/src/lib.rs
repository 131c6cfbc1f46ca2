//! formsmith configuration management using Figment
//!
//! Configuration is read once at startup and validated before any code is
//! generated. The only setting the label machinery depends on is
//! `label_strategy`; everything else describes the target project.
//!
//! # Configuration Files
//!
//! - Global: `~/.formsmith/formsmith.{toml,yaml,yml,json}`
//! - Project: `./.formsmith/formsmith.{toml,yaml,yml,json}`
//!
//! ```toml
//! label_strategy = "native"       # bc | underscore | native | noop | form_component
//! label_context = "form"
//! label_field_type = "label"
//! skeleton_dirs = ["app/Resources/FormsmithBundle/skeleton"]
//!
//! [bundles.AcmeBlogBundle]
//! namespace = 'Acme\BlogBundle'
//! path = "src/Acme/BlogBundle"
//! ```
//!
//! # Environment Variables
//!
//! ```bash
//! export FORMSMITH_LABEL_STRATEGY=native   # → label_strategy
//! export FORMSMITH_LABEL_CONTEXT=admin     # → label_context
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use formsmith_config::{load_configuration, ConfigurationError};
//!
//! match load_configuration() {
//!     Ok(config) => println!("labels: {}", config.label_strategy),
//!     Err(ConfigurationError::InvalidLabelStrategy { value, .. }) => {
//!         eprintln!("unknown label strategy {}", value);
//!     }
//!     Err(err) => eprintln!("configuration error: {}", err),
//! }
//! ```

/// File discovery logic for configuration files
pub mod discovery;
/// Error types and handling
pub mod error;
/// Figment-backed configuration provider
pub mod provider;
/// Configuration value types
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::{ConfigResult, ConfigurationError};
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use types::{
    BundleConfig, FormsmithConfig, RawConfig, DEFAULT_LABEL_CONTEXT, DEFAULT_LABEL_FIELD_TYPE,
};

/// Load and validate configuration from the standard locations
pub fn load_configuration() -> ConfigResult<FormsmithConfig> {
    ConfigProvider::new().load()
}
