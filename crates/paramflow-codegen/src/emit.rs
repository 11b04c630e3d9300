//! Rendering generated artifacts to source files.
//!
//! Generation itself is pure; this module is the only side-effecting step.
//! Each target becomes exactly one output file, and a failure here aborts
//! that one target while leaving siblings to the caller's discretion.

use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use thiserror::Error;

use crate::model::ParsedTarget;

/// Header comment marking emitted files as machine-written
pub const DEFAULT_HEADER: &str = "Generated by paramflow. Do not edit.";

/// Configuration for file emission
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Directory the artifact files are written into; created if absent
    pub out_dir: PathBuf,

    /// Leading comment line, `None` to emit bare source
    pub header: Option<String>,
}

impl EmitOptions {
    /// Emit into `out_dir` with the default generated-file header
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            header: Some(DEFAULT_HEADER.to_string()),
        }
    }

    /// Replace the header comment
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// Error type for emission failures
#[derive(Error, Debug)]
pub enum EmitError {
    /// The generated token stream does not parse as a source file
    #[error("generated artifact for `{target}` does not parse: {source}")]
    Render {
        target: String,
        #[source]
        source: syn::Error,
    },

    /// The rendered file could not be written
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File name of the artifact emitted for `target`
pub fn artifact_file_name(target: &ParsedTarget) -> String {
    format!("{}{}.rs", target.name, target.role.suffix())
}

/// Render `tokens` and write them as the single artifact file for
/// `target`, returning the written path.
pub fn write_artifact(
    options: &EmitOptions,
    target: &ParsedTarget,
    tokens: &TokenStream,
) -> Result<PathBuf, EmitError> {
    let file: syn::File = syn::parse2(tokens.clone()).map_err(|source| EmitError::Render {
        target: target.name.to_string(),
        source,
    })?;

    let mut rendered = prettyplease::unparse(&file);
    if let Some(header) = &options.header {
        rendered = format!("// {header}\n\n{rendered}");
    }

    std::fs::create_dir_all(&options.out_dir).map_err(|source| EmitError::Io {
        path: options.out_dir.clone(),
        source,
    })?;
    let path = options.out_dir.join(artifact_file_name(target));
    write_file(&path, &rendered)?;
    tracing::info!(path = %path.display(), "emitted generated artifact");
    Ok(path)
}

fn write_file(path: &Path, contents: &str) -> Result<(), EmitError> {
    std::fs::write(path, contents).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })
}
