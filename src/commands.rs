//! CLI commands for doclinks: resolve, links, publish.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Config;
use crate::context::RunContext;
use crate::diagnostics::TracingDiagnostics;
use crate::error;
use crate::output::FsWriter;
use crate::publish::{self, LINK_MANIFEST};
use crate::render::TemplateDir;
use crate::store::DocletStore;

/// Load the doclet store and start a run against the configured destination.
///
/// # Errors
///
/// Returns errors from reading or parsing the doclet file.
fn start_run(config: &Config) -> Result<RunContext, error::Error> {
    let store = DocletStore::load(&config.doclets)?;
    return Ok(RunContext::init(
        store,
        Box::new(FsWriter::new(config.destination.clone())),
        Box::new(TracingDiagnostics),
    ));
}

/// Resolve every doclet and print the link table sorted by longname.
///
/// # Errors
///
/// Returns errors from config loading, doclet loading, or JSON serialization.
pub fn links(json: bool) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let mut ctx = start_run(&config)?;

    let unresolved = publish::resolve_all(&mut ctx);
    if json {
        println!("{}", ctx.links().to_json()?);
        return Ok(());
    }

    for (longname, href) in ctx.links().entries() {
        println!("{longname} -> {href}");
    }
    for longname in &unresolved {
        println!("UNRESOLVED  {longname}");
    }
    return Ok(());
}

/// Resolve every doclet, render one page per resolved doclet, and write the link manifest.
///
/// # Errors
///
/// Returns errors from config, doclet, or template loading, rendering, or writing output.
pub fn publish(destination: Option<PathBuf>) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?.with_destination(destination);
    let renderer = TemplateDir::load(&config.templates)?;
    let mut ctx = start_run(&config)?.with_renderer(Box::new(renderer));

    let summary = publish::publish_site(&mut ctx)?;
    for longname in &summary.unresolved {
        ctx.error("no href for doclet; page skipped", longname);
    }

    let manifest = config.destination.join(LINK_MANIFEST);
    println!(
        "Wrote {} pages to {} ({} unresolved)",
        summary.pages,
        display_dir(&config.destination),
        summary.unresolved.len()
    );
    println!("Link manifest: {}", manifest.display());
    return Ok(());
}

/// Resolve the given longnames and print one line each.
/// Exit code 1 if any longname has no href.
///
/// # Errors
///
/// Returns errors from config or doclet loading.
pub fn resolve(longnames: &[String]) -> Result<ExitCode, error::Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let mut ctx = start_run(&config)?;
    let mut unresolved = 0_u32;

    for longname in longnames {
        match ctx.build_href(longname) {
            None => {
                unresolved = unresolved.saturating_add(1);
                println!("UNRESOLVED  {longname}");
            },
            Some(href) => println!("{longname} -> {href}"),
        }
    }

    if unresolved > 0 {
        return Ok(ExitCode::from(1));
    }
    return Ok(ExitCode::SUCCESS);
}

/// Display a directory path without a leading `./`.
fn display_dir(path: &Path) -> String {
    return path.strip_prefix(".").unwrap_or(path).display().to_string();
}
