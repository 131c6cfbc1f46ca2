//! Liquid skeleton rendering for formsmith
//!
//! Generated files are rendered from skeletons. Each skeleton has a relative
//! name such as `form/FormType.php.liquid`; a [`SkeletonLoader`] maps the name
//! to a project override or the built-in copy, and the [`TemplateEngine`]
//! renders it with a serializable context.
//!
//! ```
//! use formsmith_templating::{TemplateEngine, FORM_TYPE_SKELETON};
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new()?;
//! let php = engine.render(FORM_TYPE_SKELETON, &json!({
//!     "namespace": "Acme\\BlogBundle",
//!     "entity_namespace": "",
//!     "entity_class": "Post",
//!     "form_class": "PostType",
//!     "form_type_name": "acme_blogbundle_posttype",
//!     "fields": [],
//! }))?;
//! assert!(php.contains("class PostType extends AbstractType"));
//! # Ok::<(), formsmith_templating::TemplatingError>(())
//! ```

pub mod engine;
pub mod error;
pub mod skeleton;

pub use engine::TemplateEngine;
pub use error::{Result, TemplatingError};
pub use skeleton::{Skeleton, SkeletonLoader, SkeletonOrigin, FORM_TYPE_SKELETON};
