//! Drives the pattern extractor over collected files.
//!
//! Each file is read once and every category is extracted from that text.
//! Mount prefixes and environment variables are pooled across all files; the
//! other categories stay grouped per file in collection order.

use crate::aggregate::parameter_mapping;
use crate::extractors::{FileExtraction, PatternExtractor};
use crate::fs::FileSystem;
use crate::model::{
    CommentEntry, HeaderMapping, OtherUrl, ParameterMapping, RouteMapping, SecretMapping,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Raw extraction results for one scan, before composition.
#[derive(Debug, Default, Clone)]
pub struct ScanResult {
    pub route_mappings: Vec<RouteMapping>,
    pub base_paths: Vec<String>,
    pub other_urls: Vec<OtherUrl>,
    pub body_parameters: Vec<ParameterMapping>,
    pub query_parameters: Vec<ParameterMapping>,
    pub headers: Vec<HeaderMapping>,
    /// Unique, sorted.
    pub env_vars: Vec<String>,
    pub comments: Vec<CommentEntry>,
    pub secrets: Vec<SecretMapping>,
    pub files_scanned: usize,
    pub failed_files: Vec<PathBuf>,
}

pub struct Scanner<F: FileSystem> {
    fs: F,
    extractor: PatternExtractor,
}

impl<F: FileSystem> Scanner<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            extractor: PatternExtractor::new(),
        }
    }

    pub fn with_extractor(fs: F, extractor: PatternExtractor) -> Self {
        Self { fs, extractor }
    }

    /// A file that cannot be read is logged, recorded in `failed_files` and skipped.
    pub fn scan(&self, files: &[PathBuf]) -> ScanResult {
        let mut result = ScanResult::default();
        let mut env_vars = BTreeSet::new();

        info!(files = files.len(), "Extracting routes and parameters");

        for file in files {
            let content = match self.fs.read_to_string(file) {
                Ok(content) => content,
                Err(err) => {
                    warn!(path = %file.display(), "Failed to read file, skipping: {:#}", err);
                    result.failed_files.push(file.clone());
                    continue;
                }
            };

            let extraction = self.extractor.extract(file, &content);
            debug!(
                path = %file.display(),
                routes = extraction.routes.len(),
                base_paths = extraction.base_paths.len(),
                other_urls = extraction.other_urls.len(),
                "Scanned file"
            );

            env_vars.extend(extraction.env_vars.iter().cloned());
            accumulate(&mut result, file, extraction);
            result.files_scanned += 1;
        }

        result.env_vars = env_vars.into_iter().collect();

        info!(
            files_scanned = result.files_scanned,
            failed = result.failed_files.len(),
            routes = result.route_mappings.len(),
            base_paths = result.base_paths.len(),
            "Extraction completed"
        );

        result
    }
}

fn accumulate(result: &mut ScanResult, file: &Path, extraction: FileExtraction) {
    result.route_mappings.extend(extraction.routes);
    result.base_paths.extend(extraction.base_paths);
    result.other_urls.extend(extraction.other_urls);

    if let Some(mapping) = parameter_mapping(file, &extraction.body_params) {
        result.body_parameters.push(mapping);
    }
    if let Some(mapping) = parameter_mapping(file, &extraction.query_params) {
        result.query_parameters.push(mapping);
    }

    if !extraction.headers.is_empty() {
        result.headers.push(HeaderMapping {
            file: file.to_path_buf(),
            headers: extraction.headers.into_vec(),
        });
    }
    if !extraction.comments.is_empty() {
        result.comments.push(CommentEntry {
            file: file.to_path_buf(),
            comments: extraction.comments,
        });
    }
    if !extraction.secrets.is_empty() {
        result.secrets.push(SecretMapping {
            file: file.to_path_buf(),
            secrets: extraction.secrets.into_vec(),
        });
    }
}
