//! Skeleton lookup
//!
//! A skeleton is the template a generated file is rendered from. Projects can
//! override any built-in skeleton by placing a file with the same relative
//! name in one of the override directories; the first directory that has it
//! wins, and the built-in copy is the last resort.

use crate::error::{Result, TemplatingError};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Relative name of the form type skeleton
pub const FORM_TYPE_SKELETON: &str = "form/FormType.php.liquid";

/// Largest override skeleton accepted, in bytes
pub const MAX_SKELETON_SIZE: usize = 100_000;

const BUILTIN_SKELETONS: &[(&str, &str)] = &[(
    FORM_TYPE_SKELETON,
    include_str!("../skeleton/form/FormType.php.liquid"),
)];

/// Where a resolved skeleton came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonOrigin {
    /// An override file on disk
    File(PathBuf),
    /// Compiled into the binary
    Builtin,
}

/// A resolved skeleton ready to be parsed
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub name: String,
    pub origin: SkeletonOrigin,
    pub content: Cow<'static, str>,
}

/// Resolves skeleton names against an ordered list of override directories
#[derive(Debug, Clone, Default)]
pub struct SkeletonLoader {
    dirs: Vec<PathBuf>,
}

impl SkeletonLoader {
    /// Built-in skeletons only
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `dirs` in order before falling back to the built-in skeletons
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Find the skeleton called `name`
    pub fn resolve(&self, name: &str) -> Result<Skeleton> {
        for dir in &self.dirs {
            let candidate = dir.join(name);
            trace!("Trying skeleton {}", candidate.display());
            if candidate.is_file() {
                let content = read_override(&candidate)?;
                debug!("Using override skeleton {}", candidate.display());
                return Ok(Skeleton {
                    name: name.to_string(),
                    origin: SkeletonOrigin::File(candidate),
                    content: Cow::Owned(content),
                });
            }
        }

        BUILTIN_SKELETONS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, content)| {
                debug!("Using built-in skeleton {}", name);
                Skeleton {
                    name: name.to_string(),
                    origin: SkeletonOrigin::Builtin,
                    content: Cow::Borrowed(*content),
                }
            })
            .ok_or_else(|| TemplatingError::NotFound {
                name: name.to_string(),
                searched: self.dirs.clone(),
            })
    }
}

fn read_override(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| TemplatingError::io(path, e))?;
    if content.len() > MAX_SKELETON_SIZE {
        return Err(TemplatingError::Security(format!(
            "Skeleton too large: {} is {} bytes (max allowed: {MAX_SKELETON_SIZE})",
            path.display(),
            content.len()
        )));
    }
    Ok(content)
}
