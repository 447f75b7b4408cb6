// Pattern-based extraction from raw source text
//
// Every extractor is a regex run over the whole file. Nothing is parsed, so
// literals inside comments and comment markers inside strings are reported
// as if they were live code.

pub mod comments;
pub mod env_vars;
pub mod params;
pub mod patterns;
pub mod routes;
pub mod secrets;

pub use params::RequestParameters;
pub use routes::{RouteDeclarations, Verb};
pub use secrets::SecretRules;

use crate::model::{OtherUrl, RouteMapping};
use crate::util::OrderedSet;
use std::path::Path;

/// Everything recovered from one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileExtraction {
    pub routes: Vec<RouteMapping>,
    pub base_paths: Vec<String>,
    pub other_urls: Vec<OtherUrl>,
    pub headers: OrderedSet<String>,
    pub body_params: OrderedSet<String>,
    pub query_params: OrderedSet<String>,
    pub env_vars: Vec<String>,
    pub comments: Vec<String>,
    pub secrets: OrderedSet<String>,
}

/// Runs every matcher over a file's text.
#[derive(Debug, Clone, Default)]
pub struct PatternExtractor {
    secret_rules: SecretRules,
}

impl PatternExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret_rules(secret_rules: SecretRules) -> Self {
        Self { secret_rules }
    }

    pub fn extract(&self, file: &Path, content: &str) -> FileExtraction {
        let RouteDeclarations { routes, base_paths } = routes::extract_routes(file, content);
        let RequestParameters { body, query } = params::extract_parameters(content);

        FileExtraction {
            routes,
            base_paths,
            other_urls: routes::extract_other_urls(file, content),
            headers: params::extract_headers(content),
            body_params: body,
            query_params: query,
            env_vars: env_vars::extract_env_vars(content),
            comments: comments::extract_comments(content),
            secrets: self.secret_rules.scan(content),
        }
    }
}
