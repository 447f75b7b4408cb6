//! Source file discovery.
//!
//! A plain recursive walk by default: hidden and gitignored files are scanned
//! like any other. `respect_gitignore` switches on the `ignore` crate's
//! standard filters.

use crate::config::{ScanConfig, DEFAULT_EXTENSIONS};
use crate::error::ScanError;
use crate::fs::{FileSystem, RealFileSystem};
use ignore::{overrides::OverrideBuilder, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const TEST_MARKERS: &[&str] = &[".spec", ".test"];

/// Walks the root with `ignore`; existence and file-type checks go through `fs`.
pub struct SourceCollector<F: FileSystem = RealFileSystem> {
    fs: F,
    root: PathBuf,
    extensions: Vec<String>,
    include_tests: bool,
    exclude_dirs: Vec<String>,
    respect_gitignore: bool,
}

impl SourceCollector<RealFileSystem> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_file_system(RealFileSystem, root)
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.root.clone())
            .with_extensions(config.extensions.clone())
            .include_tests(config.include_tests)
            .exclude_dirs(config.exclude_dirs.clone())
            .respect_gitignore(config.respect_gitignore)
    }
}

impl<F: FileSystem> SourceCollector<F> {
    pub fn with_file_system(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            include_tests: false,
            exclude_dirs: Vec::new(),
            respect_gitignore: false,
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    pub fn exclude_dirs(mut self, dirs: Vec<String>) -> Self {
        self.exclude_dirs = dirs;
        self
    }

    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Every matching file under the root, directory entries sorted by name.
    pub fn collect(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.fs.exists(&self.root) {
            return Err(ScanError::PathNotFound(self.root.clone()));
        }
        if !self.fs.is_dir(&self.root) {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut override_builder = OverrideBuilder::new(&self.root);
        for excluded in &self.exclude_dirs {
            let pattern = format!("!{}/", excluded);
            override_builder
                .add(&pattern)
                .map_err(|e| ScanError::InvalidExclude {
                    pattern: excluded.clone(),
                    reason: e.to_string(),
                })?;
        }
        let overrides = override_builder
            .build()
            .map_err(|e| ScanError::InvalidExclude {
                pattern: self.exclude_dirs.join(","),
                reason: e.to_string(),
            })?;

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(self.respect_gitignore)
            .follow_links(true)
            .overrides(overrides)
            .sort_by_file_name(|a, b| a.cmp(b));
        if self.respect_gitignore {
            builder.require_git(false);
        }

        let mut files = Vec::new();
        let mut skipped_tests = 0usize;

        for result in builder.build() {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };
            let path = entry.path();

            if !self.fs.is_file(path) {
                continue;
            }

            let Some(filename) = path.file_name().map(|n| n.to_string_lossy()) else {
                continue;
            };

            if !self.is_source_file(&filename) {
                continue;
            }

            if !self.include_tests && self.is_test_file(&filename) {
                skipped_tests += 1;
                continue;
            }

            files.push(path.to_path_buf());
        }

        info!(
            root = %self.root.display(),
            files = files.len(),
            skipped_tests,
            "Collected source files"
        );

        Ok(files)
    }

    pub fn is_source_file(&self, filename: &str) -> bool {
        self.extensions.iter().any(|ext| filename.ends_with(ext.as_str()))
    }

    /// `*.spec<ext>` or `*.test<ext>` for any allowed extension.
    pub fn is_test_file(&self, filename: &str) -> bool {
        self.extensions.iter().any(|ext| {
            TEST_MARKERS
                .iter()
                .any(|marker| filename.ends_with(&format!("{}{}", marker, ext)))
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
