//! Error types for template expansion.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for template expansion operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// No backing template file for a directive.
    #[error("template not found: {}", path.display())]
    TemplateNotFound {
        /// Expected template location.
        path: PathBuf,
    },

    /// Malformed template source.
    #[error("template syntax error in '{template}': {message}")]
    TemplateSyntax {
        /// Template name.
        template: String,
        /// Engine message.
        message: String,
    },

    /// Template evaluation failed (undefined key, helper misuse).
    #[error("render error in '{template}': {message}")]
    Render {
        /// Template name.
        template: String,
        /// Engine message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Creating a template, output or namespace directory failed.
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Output name or namespace would resolve outside the output root.
    #[error("invalid output '{output_name}' in namespace '{namespace}'")]
    InvalidOutputName {
        /// Dotted namespace name.
        namespace: String,
        /// Rejected output name.
        output_name: String,
    },

    /// Writing a generated file failed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Classifies a template engine error raised while loading or rendering
    /// `template`.
    pub fn from_engine(template: impl Into<String>, err: &minijinja::Error) -> Self {
        let template = template.into();
        let message = err.to_string();
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => Self::TemplateSyntax { template, message },
            _ => Self::Render { template, message },
        }
    }

    /// Creates a directory creation error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Creates a write error for a target path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
