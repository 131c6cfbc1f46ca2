//! Template engine for rendering skeletons
//!
//! Wraps a Liquid parser and a [`SkeletonLoader`]. Context values are any
//! `Serialize` type and are converted to a Liquid object before rendering.

use crate::error::{Result, TemplatingError};
use crate::skeleton::SkeletonLoader;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Template engine with Liquid configuration
pub struct TemplateEngine {
    parser: liquid::Parser,
    loader: SkeletonLoader,
}

impl TemplateEngine {
    /// Create an engine that only knows the built-in skeletons
    pub fn new() -> Result<Self> {
        Self::with_loader(SkeletonLoader::new())
    }

    /// Create an engine resolving skeletons through `loader`
    pub fn with_loader(loader: SkeletonLoader) -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| TemplatingError::Parse(e.to_string()))?;
        Ok(Self { parser, loader })
    }

    /// Render a template string
    pub fn render_str<C: Serialize>(&self, template_str: &str, context: &C) -> Result<String> {
        let template = self
            .parser
            .parse(template_str)
            .map_err(|e| TemplatingError::Parse(e.to_string()))?;

        let globals =
            liquid::to_object(context).map_err(|e| TemplatingError::Render(e.to_string()))?;

        template
            .render(&globals)
            .map_err(|e| TemplatingError::Render(e.to_string()))
    }

    /// Render the skeleton called `name`
    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String> {
        let skeleton = self.loader.resolve(name)?;
        debug!("Rendering skeleton {} from {:?}", name, skeleton.origin);
        self.render_str(&skeleton.content, context)
    }

    /// Render the skeleton called `name` into `target`
    ///
    /// Parent directories of `target` are created as needed.
    pub fn render_file<C: Serialize>(&self, name: &str, target: &Path, context: &C) -> Result<()> {
        let content = self.render(name, context)?;

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TemplatingError::io(parent, e))?;
        }
        std::fs::write(target, content).map_err(|e| TemplatingError::io(target, e))?;

        info!("Wrote {}", target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::FORM_TYPE_SKELETON;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_str() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine
            .render_str("{{greeting}} World!", &json!({"greeting": "Hello"}))
            .unwrap();
        assert_eq!(result, "Hello World!");
    }

    #[test]
    fn test_render_str_loops() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine
            .render_str(
                "{% for f in fields %}[{{ f.name }}]{% endfor %}",
                &json!({"fields": [{"name": "a"}, {"name": "b"}]}),
            )
            .unwrap();
        assert_eq!(result, "[a][b]");
    }

    #[test]
    fn test_render_str_parse_error() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render_str("{% for %}", &json!({})).unwrap_err();
        assert!(matches!(err, TemplatingError::Parse(_)));
    }

    #[test]
    fn test_render_non_object_context_fails() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine
            .render_str("x", &json!(["not", "an", "object"]))
            .unwrap_err();
        assert!(matches!(err, TemplatingError::Render(_)));
    }

    #[test]
    fn test_render_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let overrides = dir.path().join("skeleton");
        fs::create_dir_all(overrides.join("form")).unwrap();
        fs::write(
            overrides.join(FORM_TYPE_SKELETON),
            "class {{ form_class }} {}",
        )
        .unwrap();

        let engine =
            TemplateEngine::with_loader(SkeletonLoader::with_dirs(vec![overrides])).unwrap();
        let target = dir.path().join("out/Form/Blog/PostType.php");
        engine
            .render_file(
                FORM_TYPE_SKELETON,
                &target,
                &json!({"form_class": "PostType"}),
            )
            .unwrap();

        assert_eq!(fs::read_to_string(target).unwrap(), "class PostType {}");
    }

    #[test]
    fn test_builtin_form_skeleton_renders() {
        let engine = TemplateEngine::new().unwrap();
        let output = engine
            .render(
                FORM_TYPE_SKELETON,
                &json!({
                    "namespace": "Acme\\BlogBundle",
                    "entity_namespace": "",
                    "entity_class": "Post",
                    "bundle": "AcmeBlogBundle",
                    "form_class": "PostType",
                    "form_type_name": "acme_blogbundle_posttype",
                    "fields": [
                        {"name": "title", "type": "text", "required": true, "label": "Title"},
                        {"name": "body", "type": "textarea", "required": false, "label": "It's"}
                    ]
                }),
            )
            .unwrap();

        assert!(output.contains("namespace Acme\\BlogBundle\\Form;"));
        assert!(output.contains("class PostType extends AbstractType"));
        assert!(output.contains("        $builder\n            ->add('title', 'text', array("));
        assert!(output.contains("'label' => 'Title',"));
        assert!(output.contains("'label' => 'It\\'s',"));
        assert!(output.contains("'required' => false,"));
        assert!(output.contains("            ))\n        ;"));
        assert!(output.contains("'data_class' => 'Acme\\BlogBundle\\Entity\\Post'"));
        assert!(output.contains("return 'acme_blogbundle_posttype';"));
    }

    #[test]
    fn test_builtin_form_skeleton_sub_namespace() {
        let engine = TemplateEngine::new().unwrap();
        let output = engine
            .render(
                FORM_TYPE_SKELETON,
                &json!({
                    "namespace": "Acme\\BlogBundle",
                    "entity_namespace": "Blog",
                    "entity_class": "Post",
                    "bundle": "AcmeBlogBundle",
                    "form_class": "PostType",
                    "form_type_name": "acme_blogbundle_blog_posttype",
                    "fields": []
                }),
            )
            .unwrap();

        assert!(output.contains("namespace Acme\\BlogBundle\\Form\\Blog;"));
        assert!(output.contains("'data_class' => 'Acme\\BlogBundle\\Entity\\Blog\\Post'"));
        assert!(output.contains("        $builder\n        ;"));
    }

    #[test]
    fn test_labels_are_escaped_as_php_strings() {
        let engine = TemplateEngine::new().unwrap();
        let output = engine
            .render(
                FORM_TYPE_SKELETON,
                &json!({
                    "namespace": "Acme\\BlogBundle",
                    "entity_namespace": "",
                    "entity_class": "Post",
                    "form_class": "PostType",
                    "form_type_name": "acme_blogbundle_posttype",
                    "fields": [
                        {"name": "path", "type": "text", "required": true, "label": "a\\"},
                        {"name": "quote", "type": "text", "required": true, "label": "\\'"}
                    ]
                }),
            )
            .unwrap();

        assert!(output.contains("'label' => 'a\\\\',"));
        assert!(output.contains("'label' => '\\\\\\'',"));
    }
}
