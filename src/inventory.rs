//! The composed result of a scan, ready for the report writer.

use crate::aggregate::{extract_path_parameters, synthetic_query_string};
use crate::compose::{endpoint_inventory, generate_combinations};
use crate::model::{
    Combination, CommentEntry, HeaderMapping, OtherUrl, ParameterMapping, PathParameterMapping,
    SecretMapping,
};
use crate::scan::ScanResult;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

const FALLBACK_FOLDER_NAME: &str = "root";

#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    pub folder_name: String,
    pub combinations: Vec<Combination>,
    pub endpoints: Vec<String>,
    pub path_parameters: Vec<PathParameterMapping>,
    pub body_parameters: Vec<ParameterMapping>,
    pub query_parameters: Vec<ParameterMapping>,
    pub headers: Vec<HeaderMapping>,
    /// Every header name across all files, unique and sorted.
    pub header_names: Vec<String>,
    pub other_urls: Vec<OtherUrl>,
    pub query_string: String,
    pub env_vars: Vec<String>,
    pub comments: Vec<CommentEntry>,
    pub secrets: Vec<SecretMapping>,
    pub files_scanned: usize,
    #[serde(serialize_with = "crate::model::serialize_paths")]
    pub failed_files: Vec<PathBuf>,
}

impl Inventory {
    /// Composes routes with mount prefixes and derives the aggregate views.
    pub fn build(folder_name: impl Into<String>, scan: ScanResult, query_tag: &str) -> Self {
        let combinations = generate_combinations(&scan.route_mappings, &scan.base_paths);
        let endpoints = endpoint_inventory(&combinations, &scan.other_urls);
        let path_parameters = extract_path_parameters(&scan.route_mappings);
        let query_string =
            synthetic_query_string(&scan.body_parameters, &scan.query_parameters, query_tag);

        let header_names = scan
            .headers
            .iter()
            .flat_map(|mapping| mapping.headers.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            folder_name: folder_name.into(),
            combinations,
            endpoints,
            path_parameters,
            body_parameters: scan.body_parameters,
            query_parameters: scan.query_parameters,
            headers: scan.headers,
            header_names,
            other_urls: scan.other_urls,
            query_string,
            env_vars: scan.env_vars,
            comments: scan.comments,
            secrets: scan.secrets,
            files_scanned: scan.files_scanned,
            failed_files: scan.failed_files,
        }
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            folder_name: self.folder_name.clone(),
            files_scanned: self.files_scanned,
            endpoints: self.endpoints.len(),
            body_parameter_mappings: self.body_parameters.len(),
            query_parameter_mappings: self.query_parameters.len(),
            path_parameter_mappings: self.path_parameters.len(),
            headers: self.header_names.len(),
            env_vars: self.env_vars.len(),
            other_urls: self.other_urls.len(),
            failed_files: self.failed_files.len(),
        }
    }
}

/// Last component of the canonicalized root, so `.` resolves to the real directory name.
pub fn folder_name_for(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_FOLDER_NAME.to_string())
}

/// Totals printed after the reports are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub folder_name: String,
    pub files_scanned: usize,
    pub endpoints: usize,
    pub body_parameter_mappings: usize,
    pub query_parameter_mappings: usize,
    pub path_parameter_mappings: usize,
    pub headers: usize,
    pub env_vars: usize,
    pub other_urls: usize,
    pub failed_files: usize,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total unique routes found: {}", self.endpoints)?;
        writeln!(f, "Total body parameter mappings: {}", self.body_parameter_mappings)?;
        writeln!(f, "Total query parameter mappings: {}", self.query_parameter_mappings)?;
        writeln!(f, "Total path parameter mappings: {}", self.path_parameter_mappings)?;
        writeln!(f, "Total headers found: {}", self.headers)?;
        writeln!(f, "Total environment variables found: {}", self.env_vars)?;
        writeln!(f, "Total other URLs found: {}", self.other_urls)?;
        write!(f, "Files that could not be read: {}", self.failed_files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RouteMapping;
    use tempfile::TempDir;

    fn scan_result() -> ScanResult {
        ScanResult {
            route_mappings: vec![
                RouteMapping::new("/users/:id", "GET", "users.js"),
                RouteMapping::new("/users/", "POST", "users.js"),
            ],
            base_paths: vec!["/api".to_string()],
            other_urls: vec![OtherUrl {
                url: "/health".to_string(),
                file: PathBuf::from("app.js"),
            }],
            body_parameters: vec![ParameterMapping {
                file: PathBuf::from("users.js"),
                parameters: vec!["name".to_string()],
            }],
            query_parameters: vec![ParameterMapping {
                file: PathBuf::from("users.js"),
                parameters: vec!["page".to_string()],
            }],
            headers: vec![
                HeaderMapping {
                    file: PathBuf::from("users.js"),
                    headers: vec!["x-request-id".to_string(), "authorization".to_string()],
                },
                HeaderMapping {
                    file: PathBuf::from("app.js"),
                    headers: vec!["authorization".to_string()],
                },
            ],
            env_vars: vec!["PORT".to_string()],
            files_scanned: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_composes_routes() {
        let inventory = Inventory::build("api", scan_result(), "TAG");

        let routes: Vec<&str> = inventory.combinations.iter().map(|c| c.route.as_str()).collect();
        assert_eq!(routes, vec!["/api/users/:id", "/api/users/"]);
        assert_eq!(inventory.endpoints, vec!["/api/users", "/api/users/:id", "/health"]);
        assert_eq!(inventory.path_parameters.len(), 1);
        assert_eq!(inventory.path_parameters[0].route, "/users/:id");
        assert_eq!(inventory.query_string, "name=TAG1&page=TAG2");
        assert_eq!(inventory.header_names, vec!["authorization", "x-request-id"]);
    }

    #[test]
    fn test_summary_totals() {
        let summary = Inventory::build("api", scan_result(), "TAG").summary();
        assert_eq!(summary.endpoints, 3);
        assert_eq!(summary.body_parameter_mappings, 1);
        assert_eq!(summary.query_parameter_mappings, 1);
        assert_eq!(summary.path_parameter_mappings, 1);
        assert_eq!(summary.headers, 2);
        assert_eq!(summary.env_vars, 1);
        assert_eq!(summary.other_urls, 1);
        assert_eq!(summary.failed_files, 0);

        let text = summary.to_string();
        assert!(text.starts_with("Total unique routes found: 3\n"));
        assert!(text.ends_with("Files that could not be read: 0"));
    }

    #[test]
    fn test_folder_name_for() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("shop-api");
        std::fs::create_dir(&root).unwrap();

        assert_eq!(folder_name_for(&root), "shop-api");
        assert_eq!(folder_name_for(&root.join("..").join("shop-api")), "shop-api");
        assert_eq!(folder_name_for(Path::new("/")), FALLBACK_FOLDER_NAME);
    }
}
