//! Expander configuration.

use std::path::{Path, PathBuf};

/// Configuration consumed by the template expander.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpanderConfig {
    template_root: PathBuf,
    output_root: PathBuf,
    trim_blocks: bool,
    lstrip_blocks: bool,
    keep_trailing_newline: bool,
}

impl ExpanderConfig {
    /// Creates a configuration with default whitespace handling.
    #[must_use]
    pub fn new(template_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            template_root: template_root.into(),
            output_root: output_root.into(),
            trim_blocks: true,
            lstrip_blocks: true,
            keep_trailing_newline: true,
        }
    }

    /// Removes the first newline after a block tag.
    #[must_use]
    pub fn trim_blocks(mut self, enabled: bool) -> Self {
        self.trim_blocks = enabled;
        self
    }

    /// Strips leading whitespace before a block tag.
    #[must_use]
    pub fn lstrip_blocks(mut self, enabled: bool) -> Self {
        self.lstrip_blocks = enabled;
        self
    }

    /// Keeps the final newline of a template.
    #[must_use]
    pub fn keep_trailing_newline(mut self, enabled: bool) -> Self {
        self.keep_trailing_newline = enabled;
        self
    }

    /// Returns the template root.
    #[must_use]
    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    /// Returns the generated-source root.
    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Returns the block trimming flag.
    #[must_use]
    pub const fn trims_blocks(&self) -> bool {
        self.trim_blocks
    }

    /// Returns the block left-stripping flag.
    #[must_use]
    pub const fn lstrips_blocks(&self) -> bool {
        self.lstrip_blocks
    }

    /// Returns the trailing newline flag.
    #[must_use]
    pub const fn keeps_trailing_newline(&self) -> bool {
        self.keep_trailing_newline
    }
}
