/// Crate-level error types for doclinks diagnostics.
use std::path::PathBuf;

/// Errors that abort a doclinks command. Unresolvable symbols are not errors:
/// resolution returns `None` and reports through `Diagnostics` instead.
#[allow(clippy::error_impl_error, reason = "single crate-level error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The doclet JSON file does not exist on disk.
    #[error("doclets not found: {}", path.display())]
    DocletsNotFound {
        /// Path to the missing doclet file.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// Doclet JSON or the link manifest could not be (de)serialized.
    #[error("json: {0}")]
    Json(
        /// The wrapped JSON error.
        #[from]
        serde_json::Error,
    ),

    /// An output path would escape the destination directory.
    #[error("output path escapes destination: {}", path.display())]
    OutputPathEscapes {
        /// The offending relative path.
        path: PathBuf,
    },

    /// The template directory does not exist or is not a directory.
    #[error("template directory not found: {}", path.display())]
    TemplateDirNotFound {
        /// Path to the missing template directory.
        path: PathBuf,
    },

    /// No template with this name was loaded.
    #[error("template not found: `{name}`")]
    TemplateNotFound {
        /// Template name relative to the template directory.
        name: String,
    },

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
