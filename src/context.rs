//! Per-run state shared by every stage of a generation run.

use std::collections::HashMap;
use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::error::Error;
use crate::links::LinkCache;
use crate::output::OutputWriter;
use crate::render::{Renderer, Scope, TemplateDir};
use crate::resolver::HrefResolver;
use crate::store::DocletStore;
use crate::types::Href;

/// Everything one generation run needs: the pruned doclet store, the link
/// cache, and the rendering/output/diagnostics services. Created at run start
/// and dropped at run end; never shared between runs.
pub struct RunContext {
    /// Issue sink for resolution problems.
    diagnostics: Box<dyn Diagnostics>,
    /// Hrefs resolved so far.
    links: LinkCache,
    /// Destination for rendered pages.
    output: Box<dyn OutputWriter>,
    /// Template renderer.
    renderer: Box<dyn Renderer>,
    /// Pruned doclets.
    store: DocletStore,
}

impl RunContext {
    /// Cache a known href under `name`.
    pub fn add_link_for(&mut self, name: &str, href: Href) {
        self.links.put(name, href);
    }

    /// Resolve `name` and cache the href on success.
    pub fn build_href(&mut self, name: &str) -> Option<Href> {
        let resolver = HrefResolver::new(&self.store, self.diagnostics.as_ref());
        return self.links.build_and_cache(&resolver, name);
    }

    /// Report a non-fatal problem.
    pub fn error(&self, message: &str, context: &str) {
        self.diagnostics.report_issue(message, context);
    }

    /// Start a run: prune the store once, before anything resolves against it.
    /// The renderer starts empty; attach templates with `with_renderer`.
    pub fn init(
        mut store: DocletStore,
        output: Box<dyn OutputWriter>,
        diagnostics: Box<dyn Diagnostics>,
    ) -> Self {
        let removed = store.prune();
        tracing::info!(removed, remaining = store.len(), "doclet store ready");
        return Self {
            diagnostics,
            links: LinkCache::default(),
            output,
            renderer: Box::new(TemplateDir::from_templates(HashMap::new())),
            store,
        };
    }

    /// Cached href for `name`, without resolving.
    pub fn link_for(&self, name: &str) -> Option<&Href> {
        return self.links.get(name);
    }

    /// The run's link cache.
    pub const fn links(&self) -> &LinkCache {
        return &self.links;
    }

    /// Write rendered content below the output root.
    ///
    /// # Errors
    ///
    /// Returns errors from the output writer.
    pub fn publish(&self, relative_path: &Path, content: &str) -> Result<(), Error> {
        return self.output.write(relative_path, content);
    }

    /// Render a template against a scope.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateNotFound` if the renderer has no such template.
    pub fn render(&self, template: &str, scope: &Scope) -> Result<String, Error> {
        return self.renderer.render(template, scope);
    }

    /// Resolve `name` without touching the cache.
    pub fn resolve_href(&self, name: &str) -> Option<Href> {
        return HrefResolver::new(&self.store, self.diagnostics.as_ref()).resolve(name);
    }

    /// The run's pruned doclet store.
    pub const fn store(&self) -> &DocletStore {
        return &self.store;
    }

    /// Use `renderer` for the rest of the run.
    #[must_use]
    pub fn with_renderer(self, renderer: Box<dyn Renderer>) -> Self {
        return Self { renderer, ..self };
    }
}
