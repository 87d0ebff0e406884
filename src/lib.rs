//! Resolve documented symbol longnames into stable hrefs for a generated
//! documentation site, and cache them for the length of one generation run.
//!
//! A run loads the doclet database ([`store::DocletStore`]), prunes doclets that
//! must never be linked, and then resolves longnames on demand through
//! [`context::RunContext`], which owns the [`links::LinkCache`].

pub mod commands;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod links;
pub mod output;
pub mod publish;
pub mod render;
pub mod resolver;
pub mod store;
pub mod types;

pub use context::RunContext;
pub use error::Error;
pub use resolver::HrefResolver;
pub use types::{Doclet, Href};
