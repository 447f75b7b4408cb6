//! Route declarations, mount prefixes and bare path literals.

use super::patterns;
use crate::model::{OtherUrl, RouteMapping};
use std::path::Path;

/// Method names recognized after a route receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Use,
    All,
    Param,
    Head,
    Options,
}

impl Verb {
    pub const ALL: &'static [Verb] = &[
        Verb::Get,
        Verb::Post,
        Verb::Put,
        Verb::Delete,
        Verb::Patch,
        Verb::Use,
        Verb::All,
        Verb::Param,
        Verb::Head,
        Verb::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Delete => "delete",
            Verb::Patch => "patch",
            Verb::Use => "use",
            Verb::All => "all",
            Verb::Param => "param",
            Verb::Head => "head",
            Verb::Options => "options",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(name))
    }

    /// `use` registers a mount prefix rather than a route.
    pub fn is_mount(&self) -> bool {
        matches!(self, Verb::Use)
    }

    pub fn method(&self) -> String {
        self.as_str().to_uppercase()
    }
}

/// Routes and mount prefixes declared in one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteDeclarations {
    pub routes: Vec<RouteMapping>,
    pub base_paths: Vec<String>,
}

pub fn extract_routes(file: &Path, content: &str) -> RouteDeclarations {
    let mut declarations = RouteDeclarations::default();

    for cap in patterns::route_declaration().captures_iter(content) {
        let (Some(verb), Some(literal)) = (cap.get(2), cap.get(3)) else {
            continue;
        };
        let Some(verb) = Verb::parse(verb.as_str()) else {
            continue;
        };

        let literal = literal.as_str().to_string();
        if verb.is_mount() {
            declarations.base_paths.push(literal);
        } else {
            declarations
                .routes
                .push(RouteMapping::new(literal, verb.method(), file));
        }
    }

    declarations
}

pub fn extract_other_urls(file: &Path, content: &str) -> Vec<OtherUrl> {
    patterns::bare_path_literal()
        .find_iter(content)
        .map(|m| OtherUrl {
            url: m.as_str().replace(patterns::QUOTES, ""),
            file: file.to_path_buf(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const ROUTER_FILE: &str = r#"
const express = require('express');
const router = express.Router();

router.get('/users', list);
router.post("/users", create);
router.delete(`/users/:id`, remove);
router.use('/admin', adminRouter);
app.OPTIONS('/users', preflight);
"#;

    #[test]
    fn test_extract_routes_and_mounts() {
        let found = extract_routes(Path::new("routes/users.js"), ROUTER_FILE);

        let pairs: Vec<(&str, &str)> = found
            .routes
            .iter()
            .map(|r| (r.method.as_str(), r.route.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("GET", "/users"),
                ("POST", "/users"),
                ("DELETE", "/users/:id"),
                ("OPTIONS", "/users"),
            ]
        );
        assert_eq!(found.base_paths, vec!["/admin"]);
        assert!(found
            .routes
            .iter()
            .all(|r| r.file == PathBuf::from("routes/users.js")));
    }

    #[test]
    fn test_dynamic_paths_are_ignored() {
        let found = extract_routes(Path::new("a.js"), "app.get(prefix + '/x', h); app.use(cors());");
        assert!(found.routes.is_empty());
        assert!(found.base_paths.is_empty());
    }

    #[test]
    fn test_relative_route_kept_verbatim() {
        let found = extract_routes(Path::new("a.js"), "router.param('id', loadUser);");
        assert_eq!(found.routes.len(), 1);
        assert_eq!(found.routes[0].route, "id");
        assert_eq!(found.routes[0].method, "PARAM");
    }

    #[test]
    fn test_routes_inside_comments_are_reported() {
        let found = extract_routes(Path::new("a.js"), "// app.get('/legacy', old)");
        assert_eq!(found.routes.len(), 1);
        assert_eq!(found.routes[0].route, "/legacy");
    }

    #[test]
    fn test_extract_other_urls_strips_quotes() {
        let content = r#"fetch("/api/items?page=1"); const x = '/static/app.css'; const y = "/ bad";"#;
        let urls: Vec<String> = extract_other_urls(Path::new("client.js"), content)
            .into_iter()
            .map(|u| u.url)
            .collect();
        assert_eq!(urls, vec!["/api/items?page=1", "/static/app.css"]);
    }

    #[test]
    fn test_other_urls_overlap_routes() {
        let urls = extract_other_urls(Path::new("a.js"), ROUTER_FILE);
        assert_eq!(urls.len(), 5);
        assert_eq!(urls[2].url, "/users/:id");
        assert_eq!(urls[3].url, "/admin");
    }

    #[test]
    fn test_verb_parse() {
        assert_eq!(Verb::parse("GET"), Some(Verb::Get));
        assert_eq!(Verb::parse("Use"), Some(Verb::Use));
        assert_eq!(Verb::parse("listen"), None);
        assert!(Verb::Use.is_mount());
        assert_eq!(Verb::Delete.method(), "DELETE");
    }
}
