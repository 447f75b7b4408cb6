//! Report files written under `<output_root>/<folder_name>/`.
//!
//! Existing files are overwritten. Text reports carry no trailing newline.

use crate::inventory::Inventory;
use crate::model::CommentEntry;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ROUTES_FILE: &str = "routes.json";
pub const ENDPOINTS_FILE: &str = "endpoints.txt";
pub const BODY_PARAMETERS_FILE: &str = "body_parameters.json";
pub const QUERY_PARAMETERS_FILE: &str = "query_parameters.json";
pub const PATH_PARAMETERS_FILE: &str = "path_parameters.json";
pub const HEADERS_FILE: &str = "headers.json";
pub const HEADER_NAMES_FILE: &str = "headers.txt";
pub const OTHER_URLS_FILE: &str = "other_urls.json";
pub const QUERY_STRING_FILE: &str = "query_string.txt";
pub const ENV_VARS_FILE: &str = "environment_variables.txt";
pub const SECRETS_FILE: &str = "hardcoded_secrets.json";
pub const COMMENTS_FILE: &str = "comments.csv";

pub struct ReportWriter {
    output_root: PathBuf,
}

impl ReportWriter {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    pub fn report_dir(&self, inventory: &Inventory) -> PathBuf {
        self.output_root.join(&inventory.folder_name)
    }

    /// Writes every report and returns the paths in write order.
    pub fn write(&self, inventory: &Inventory) -> Result<Vec<PathBuf>> {
        let dir = self.report_dir(inventory);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

        let written = vec![
            write_json(&dir, ROUTES_FILE, &inventory.combinations)?,
            write_text(&dir, ENDPOINTS_FILE, &inventory.endpoints.join("\n"))?,
            write_json(&dir, BODY_PARAMETERS_FILE, &inventory.body_parameters)?,
            write_json(&dir, QUERY_PARAMETERS_FILE, &inventory.query_parameters)?,
            write_json(&dir, PATH_PARAMETERS_FILE, &inventory.path_parameters)?,
            write_json(&dir, HEADERS_FILE, &inventory.headers)?,
            write_text(&dir, HEADER_NAMES_FILE, &inventory.header_names.join("\n"))?,
            write_json(&dir, OTHER_URLS_FILE, &inventory.other_urls)?,
            write_text(&dir, QUERY_STRING_FILE, &inventory.query_string)?,
            write_text(&dir, ENV_VARS_FILE, &inventory.env_vars.join("\n"))?,
            write_json(&dir, SECRETS_FILE, &inventory.secrets)?,
            write_text(&dir, COMMENTS_FILE, &comments_csv(&inventory.comments))?,
        ];

        info!(
            dir = %dir.display(),
            files = written.len(),
            "Reports written"
        );

        Ok(written)
    }
}

/// `File,Comment` header, then one fully quoted row per comment.
pub fn comments_csv(entries: &[CommentEntry]) -> String {
    let mut lines = vec!["File,Comment".to_string()];
    for entry in entries {
        let file = csv_escape(&entry.file.display().to_string());
        for comment in &entry.comments {
            lines.push(format!("\"{}\",\"{}\"", file, csv_escape(comment)));
        }
    }
    lines.join("\n")
}

fn csv_escape(field: &str) -> String {
    field.replace('"', "\"\"")
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    let contents = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", name))?;
    write_text(dir, name, &contents)
}

fn write_text(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    info!(path = %path.display(), "Wrote report");
    Ok(path)
}
