//! Records produced by a scan and handed to the report layer.

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Paths are written as text even when they are not valid UTF-8.
pub(crate) fn serialize_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

pub(crate) fn serialize_paths<S: Serializer>(
    paths: &[PathBuf],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(|p| p.to_string_lossy()))
}

/// A verb + literal path recovered from a route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMapping {
    pub route: String,
    pub method: String,
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
}

impl RouteMapping {
    pub fn new(route: impl Into<String>, method: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            route: route.into(),
            method: method.into(),
            file: file.into(),
        }
    }
}

/// A route joined with a mount prefix, or a route passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    pub route: String,
    pub method: String,
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
}

impl From<&RouteMapping> for Combination {
    fn from(mapping: &RouteMapping) -> Self {
        Self {
            route: mapping.route.clone(),
            method: mapping.method.clone(),
            file: mapping.file.clone(),
        }
    }
}

/// Any quoted literal starting with `/`, wherever it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherUrl {
    pub url: String,
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathParameterMapping {
    pub route: String,
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
    pub parameters: Vec<String>,
}

/// Body or query parameter names read in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterMapping {
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Body,
    Query,
}

impl ParameterKind {
    pub fn from_object(name: &str) -> Option<Self> {
        match name {
            "body" => Some(ParameterKind::Body),
            "query" => Some(ParameterKind::Query),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMapping {
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
    pub headers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentEntry {
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretMapping {
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
    pub secrets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_from_route() {
        let route = RouteMapping::new("/users", "GET", "routes/users.js");
        let combo = Combination::from(&route);
        assert_eq!(combo.route, "/users");
        assert_eq!(combo.method, "GET");
        assert_eq!(combo.file, PathBuf::from("routes/users.js"));
    }

    #[test]
    fn test_parameter_kind_from_object() {
        assert_eq!(ParameterKind::from_object("body"), Some(ParameterKind::Body));
        assert_eq!(ParameterKind::from_object("query"), Some(ParameterKind::Query));
        assert_eq!(ParameterKind::from_object("params"), None);
    }

    #[test]
    fn test_route_serializes_with_plain_field_names() {
        let route = RouteMapping::new("/health", "GET", "app.js");
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"route": "/health", "method": "GET", "file": "app.js"})
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_serializes_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let file = Path::new(OsStr::from_bytes(b"r\xE9sum\xE9")).join("app.js");
        let mapping = HeaderMapping {
            file,
            headers: vec!["authorization".to_string()],
        };

        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(json["file"], "r\u{FFFD}sum\u{FFFD}/app.js");
    }
}
