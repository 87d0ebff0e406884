//! Site generation: resolve every doclet, render its page, write the link manifest.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::context::RunContext;
use crate::error::Error;
use crate::output::page_path_for;
use crate::render::Scope;
use crate::types::{Doclet, Href};

/// Template used when no `<kind>.html` template exists.
pub const FALLBACK_TEMPLATE: &str = "symbol.html";

/// File name of the JSON link manifest written at the output root.
pub const LINK_MANIFEST: &str = "links.json";

/// What a publish run produced.
#[derive(Debug, Default)]
pub struct PublishSummary {
    /// Pages written.
    pub pages: usize,
    /// Longnames that got no href, in store order.
    pub unresolved: Vec<String>,
}

/// Render, write, and count one page per resolved doclet, then write the manifest.
///
/// # Errors
///
/// Returns template or output errors. Unresolved doclets are collected, not errors.
pub fn publish_site(ctx: &mut RunContext) -> Result<PublishSummary, Error> {
    let unresolved = resolve_all(ctx);
    let mut pages = 0_usize;
    let mut seen: HashSet<&str> = HashSet::new();
    let mut written: HashMap<PathBuf, &str> = HashMap::new();

    for doclet in ctx.store().iter() {
        if !seen.insert(&doclet.longname) {
            continue;
        }
        let Some(href) = ctx.link_for(&doclet.longname) else {
            continue;
        };
        let path = page_path_for(href);
        // First doclet to claim a page keeps it.
        if let Some(owner) = written.get(&path) {
            ctx.error(
                &format!("page {} already written for `{owner}`; skipped", path.display()),
                &doclet.longname,
            );
            continue;
        }
        let scope = scope_for(ctx, doclet, href);
        let content = render_doclet(ctx, doclet, &scope)?;
        ctx.publish(&path, &content)?;
        written.insert(path, &doclet.longname);
        pages = pages.saturating_add(1);
    }

    ctx.publish(Path::new(LINK_MANIFEST), &ctx.links().to_json()?)?;
    tracing::info!(pages, unresolved = unresolved.len(), "published site");
    return Ok(PublishSummary { pages, unresolved });
}

/// Render with `<kind>.html`, or `symbol.html` when the kind has no template.
///
/// # Errors
///
/// Returns `Error::TemplateNotFound` if neither template exists.
fn render_doclet(ctx: &RunContext, doclet: &Doclet, scope: &Scope) -> Result<String, Error> {
    return match ctx.render(&format!("{}.html", doclet.kind), scope) {
        Err(Error::TemplateNotFound { .. }) => ctx.render(FALLBACK_TEMPLATE, scope),
        other => other,
    };
}

/// Resolve and cache every doclet. Returns the longnames that failed.
pub fn resolve_all(ctx: &mut RunContext) -> Vec<String> {
    let longnames: Vec<String> = ctx.store().iter().map(|d| return d.longname.clone()).collect();
    return longnames
        .into_iter()
        .filter(|longname| return ctx.build_href(longname).is_none())
        .collect();
}

/// Template fields for one doclet page.
fn scope_for(ctx: &RunContext, doclet: &Doclet, href: &Href) -> Scope {
    let memberof = doclet.memberof.clone().unwrap_or_default();
    let memberof_href = ctx.link_for(&memberof).map(|h| return h.0.clone()).unwrap_or_default();

    return Scope::from([
        ("href".to_string(), href.0.clone()),
        ("kind".to_string(), doclet.kind.clone()),
        ("longname".to_string(), doclet.longname.clone()),
        ("memberof".to_string(), memberof),
        ("memberof_href".to_string(), memberof_href),
        ("name".to_string(), doclet.name.clone()),
    ]);
}
