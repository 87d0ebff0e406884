//! Template loading and placeholder substitution.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use regex::{Captures, Regex};
use walkdir::WalkDir;

use crate::error::Error;

/// Named string values a template can reference.
pub type Scope = BTreeMap<String, String>;

/// Renders a named template against a scope.
pub trait Renderer {
    /// Render `template` with `scope`.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateNotFound` if no template has that name.
    fn render(&self, template: &str, scope: &Scope) -> Result<String, Error>;
}

/// Templates loaded from a directory, keyed by path relative to it (`/`-separated).
/// Placeholders look like `{{ name }}`; unknown names render empty and nothing is escaped.
pub struct TemplateDir {
    /// Matches `{{ field }}`.
    placeholder: Regex,
    /// Template name → source.
    templates: HashMap<String, String>,
}

impl TemplateDir {
    /// Whether a template with this name was loaded.
    pub fn contains(&self, name: &str) -> bool {
        return self.templates.contains_key(name);
    }

    /// Build from in-memory templates.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded placeholder regex is invalid (compile-time invariant).
    #[allow(clippy::expect_used, reason = "hardcoded regex is a compile-time invariant")]
    pub fn from_templates(templates: HashMap<String, String>) -> Self {
        let placeholder = Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("valid regex");
        return Self { placeholder, templates };
    }

    /// Load every file under `dir`.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateDirNotFound` if `dir` is not a directory,
    /// or `Error::Io` if a template cannot be read.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        if !dir.is_dir() {
            return Err(Error::TemplateDirNotFound { path: dir.to_path_buf() });
        }

        let mut templates = HashMap::new();
        for entry in WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| return e.file_type().is_file())
        {
            let path = entry.path();
            let relative = path.strip_prefix(dir).unwrap_or(path);
            let name = template_name(relative);
            let source = std::fs::read_to_string(path)?;
            templates.insert(name, source);
        }

        tracing::debug!(count = templates.len(), dir = %dir.display(), "loaded templates");
        return Ok(Self::from_templates(templates));
    }
}

impl Renderer for TemplateDir {
    fn render(&self, template: &str, scope: &Scope) -> Result<String, Error> {
        let Some(source) = self.templates.get(template) else {
            return Err(Error::TemplateNotFound { name: template.to_string() });
        };
        let rendered = self.placeholder.replace_all(source, |cap: &Captures<'_>| {
            return cap
                .get(1)
                .and_then(|field| return scope.get(field.as_str()))
                .cloned()
                .unwrap_or_default();
        });
        return Ok(rendered.into_owned());
    }
}

/// Template name for a path relative to the template directory.
fn template_name(relative: &Path) -> String {
    return relative
        .components()
        .map(|c| return c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
}
