//! Parameter aggregation: path parameters, per-file body/query sets and the
//! synthetic query string.

use crate::extractors::patterns;
use crate::model::{ParameterMapping, PathParameterMapping, RouteMapping};
use crate::util::OrderedSet;
use std::path::Path;

/// `:name` segment names, left to right, duplicates kept.
pub fn path_parameter_names(route: &str) -> Vec<String> {
    patterns::path_parameter()
        .captures_iter(route)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// One entry per declared route that carries at least one `:name` segment.
///
/// Runs over the raw route declarations, not the mount-prefixed combinations.
pub fn extract_path_parameters(routes: &[RouteMapping]) -> Vec<PathParameterMapping> {
    routes
        .iter()
        .filter_map(|mapping| {
            let parameters = path_parameter_names(&mapping.route);
            if parameters.is_empty() {
                return None;
            }
            Some(PathParameterMapping {
                route: mapping.route.clone(),
                file: mapping.file.clone(),
                parameters,
            })
        })
        .collect()
}

/// `None` for files that read no parameters of this kind.
pub fn parameter_mapping(file: &Path, parameters: &OrderedSet<String>) -> Option<ParameterMapping> {
    if parameters.is_empty() {
        return None;
    }
    Some(ParameterMapping {
        file: file.to_path_buf(),
        parameters: parameters.as_slice().to_vec(),
    })
}

/// Renders `name=<tag>1&other=<tag>2` over every body name, then every query name.
///
/// `:` is stripped from each name and names left empty are skipped. A name seen
/// twice keeps its first position.
pub fn synthetic_query_string(
    body: &[ParameterMapping],
    query: &[ParameterMapping],
    tag: &str,
) -> String {
    let names: OrderedSet<String> = body
        .iter()
        .chain(query)
        .flat_map(|mapping| mapping.parameters.iter())
        .map(|name| name.replace(':', ""))
        .filter(|name| !name.is_empty())
        .collect();

    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}={}{}", name, tag, i + 1))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn mapping(file: &str, names: &[&str]) -> ParameterMapping {
        ParameterMapping {
            file: PathBuf::from(file),
            parameters: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_path_parameter_extraction() {
        assert_eq!(path_parameter_names("/users/:id/posts/:postId"), vec!["id", "postId"]);
        assert_eq!(path_parameter_names("/a/:id/b/:id"), vec!["id", "id"]);
        assert!(path_parameter_names("/health").is_empty());
    }

    #[test]
    fn test_only_routes_with_parameters_are_emitted() {
        let routes = vec![
            RouteMapping::new("/health", "GET", "app.js"),
            RouteMapping::new("/users/:id", "GET", "users.js"),
        ];

        let found = extract_path_parameters(&routes);
        assert_eq!(
            found,
            vec![PathParameterMapping {
                route: "/users/:id".to_string(),
                file: PathBuf::from("users.js"),
                parameters: vec!["id".to_string()],
            }]
        );
    }

    #[test]
    fn test_parameter_mapping_skips_empty_sets() {
        assert!(parameter_mapping(Path::new("a.js"), &OrderedSet::new()).is_none());

        let set: OrderedSet<String> = ["name".to_string(), "email".to_string()].into_iter().collect();
        let found = parameter_mapping(Path::new("a.js"), &set).unwrap();
        assert_eq!(found, mapping("a.js", &["name", "email"]));
    }

    #[test]
    fn test_query_string_numbering() {
        let body = vec![mapping("a.js", &["b"])];
        let query = vec![mapping("b.js", &["a"])];
        assert_eq!(synthetic_query_string(&body, &query, "TAG"), "b=TAG1&a=TAG2");
    }

    #[test]
    fn test_query_string_dedups_and_strips_colons() {
        let body = vec![mapping("a.js", &["id", "name:"]), mapping("b.js", &["id"])];
        let query = vec![mapping("c.js", &["name", ":", "page"])];
        assert_eq!(
            synthetic_query_string(&body, &query, "X"),
            "id=X1&name=X2&page=X3"
        );
    }

    #[test]
    fn test_query_string_empty_without_parameters() {
        assert_eq!(synthetic_query_string(&[], &[], "TAG"), "");
    }
}
