//! Route composition: mount prefixes × routes, then the endpoint inventory.
//!
//! Mount prefixes are pooled across the whole tree, so every prefix is joined with
//! every route regardless of which file declared either one.

use crate::model::{Combination, OtherUrl, RouteMapping};
use std::collections::BTreeSet;

/// Joins every route with every base path; routes pass through when there are none.
///
/// Output order is route-major: all prefixes for the first route, then the next route.
pub fn generate_combinations(routes: &[RouteMapping], base_paths: &[String]) -> Vec<Combination> {
    if base_paths.is_empty() {
        return routes.iter().map(Combination::from).collect();
    }

    routes
        .iter()
        .flat_map(|mapping| {
            base_paths.iter().map(move |base| Combination {
                route: join_paths(&[base.as_str(), mapping.route.as_str()]).replace('\\', "/"),
                method: mapping.method.clone(),
                file: mapping.file.clone(),
            })
        })
        .collect()
}

/// POSIX-style join: empty parts are skipped, the rest joined with `/` and normalized.
pub fn join_paths(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        return ".".to_string();
    }

    normalize_path(&joined)
}

/// Collapses repeated `/`, resolves `.` and `..`, keeps a trailing `/`.
///
/// `..` above the root of an absolute path is dropped; in a relative path it is kept.
pub fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let mut out = segments.join("/");
    if out.is_empty() {
        if absolute {
            return "/".to_string();
        }
        out.push('.');
    }
    if trailing {
        out.push('/');
    }

    if absolute {
        format!("/{}", out)
    } else {
        out
    }
}

/// Strips one trailing `?`, then every trailing `/`.
pub fn normalize_endpoint(route: &str) -> &str {
    let route = route.strip_suffix('?').unwrap_or(route);
    route.trim_end_matches('/')
}

/// Sorted, deduplicated endpoints from combinations and bare URLs.
///
/// The bare root (`/`, which normalizes to an empty string) is left out.
pub fn endpoint_inventory(combinations: &[Combination], other_urls: &[OtherUrl]) -> Vec<String> {
    let routes = combinations.iter().map(|c| c.route.as_str());
    let urls = other_urls.iter().map(|u| u.url.as_str());

    routes
        .chain(urls)
        .map(normalize_endpoint)
        .filter(|endpoint| !endpoint.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
